use scout_core::config::{defaults, ScoutConfig};
use scout_core::errors::ConfigError;
use std::io::Write;

#[test]
fn defaults_match_documented_constants() {
    let config = ScoutConfig::default();
    assert!((config.confidence.accept - 0.06).abs() < f64::EPSILON);
    assert!((config.confidence.weak_accept - 0.02).abs() < f64::EPSILON);
    assert_eq!(config.confidence.reject, 0.0);
    assert_eq!(config.saturation.window, 10);
    assert!((config.saturation.epsilon - 0.01).abs() < f64::EPSILON);
    assert_eq!(config.orchestrator.max_adapter_retries, 2);
    assert_eq!(config.temporal.min_samples, defaults::DEFAULT_MIN_SAMPLES);
    assert!(config.validate().is_ok());
}

#[test]
fn partial_toml_keeps_other_defaults() {
    let config = ScoutConfig::from_toml_str(
        r#"
        [budget]
        iteration_cost_usd = 0.05

        [validation]
        trusted_press_domains = ["sportsbusinessjournal.com"]
        "#,
    )
    .unwrap();

    assert!((config.budget.iteration_cost_usd - 0.05).abs() < f64::EPSILON);
    assert!((config.budget.no_evidence_cost_usd - 0.01).abs() < f64::EPSILON);
    assert_eq!(
        config.validation.trusted_press_domains,
        vec!["sportsbusinessjournal.com".to_string()]
    );
    assert_eq!(config.validation.recency_days, 365);
}

#[test]
fn negative_reject_delta_is_refused() {
    let err = ScoutConfig::from_toml_str("[confidence]\nreject = -0.01\n").unwrap_err();
    match err {
        ConfigError::InvalidValue { field, .. } => assert_eq!(field, "confidence.reject"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn weak_delta_above_accept_is_refused() {
    let err = ScoutConfig::from_toml_str("[confidence]\nweak_accept = 0.5\n").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { .. }));
}

#[test]
fn retry_ceiling_is_enforced() {
    let err =
        ScoutConfig::from_toml_str("[orchestrator]\nmax_adapter_retries = 50\n").unwrap_err();
    assert!(err.to_string().contains("max_adapter_retries"));
}

#[test]
fn out_of_range_validation_settings_are_refused() {
    let cases = [
        ("future_tolerance_hours = 4611686018427387903", "validation.future_tolerance_hours"),
        ("future_tolerance_hours = -1", "validation.future_tolerance_hours"),
        ("recency_days = -30", "validation.recency_days"),
        ("fingerprint_tokens = 0", "validation.fingerprint_tokens"),
    ];
    for (line, expected) in cases {
        let err = ScoutConfig::from_toml_str(&format!("[validation]\n{line}\n")).unwrap_err();
        match err {
            ConfigError::InvalidValue { field, .. } => assert_eq!(field, expected, "{line}"),
            other => panic!("unexpected error for {line}: {other}"),
        }
    }

    let year = ScoutConfig::from_toml_str("[validation]\nfuture_tolerance_hours = 8784\n");
    assert!(year.is_ok());
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let err = ScoutConfig::from_toml_str("[saturation\nwindow = 3").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn loads_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[saturation]\nwindow = 5\nepsilon = 0.005").unwrap();
    let config = ScoutConfig::from_file(file.path()).unwrap();
    assert_eq!(config.saturation.window, 5);
}

#[test]
fn missing_file_is_an_io_error() {
    let err = ScoutConfig::from_file("/definitely/not/here/scout.toml").unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}

#[test]
fn backoff_doubles_per_attempt() {
    let config = ScoutConfig::default().orchestrator;
    assert_eq!(config.backoff(1).as_millis(), 250);
    assert_eq!(config.backoff(2).as_millis(), 500);
    assert_eq!(config.backoff(3).as_millis(), 1000);
}
