//! Workspace configuration.
//!
//! Every section is `#[serde(default)]`, so a TOML file only needs the keys
//! it overrides.
//!
//! ```
//! use scout_core::config::ScoutConfig;
//!
//! let config = ScoutConfig::from_toml_str("[saturation]\nwindow = 12\n").unwrap();
//! assert_eq!(config.saturation.window, 12);
//! assert_eq!(config.orchestrator.max_adapter_retries, 2);
//! ```

mod budget_config;
mod confidence_config;
pub mod defaults;
mod orchestrator_config;
mod saturation_config;
mod temporal_config;
mod validation_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use budget_config::BudgetConfig;
pub use confidence_config::DeltaTable;
pub use orchestrator_config::OrchestratorConfig;
pub use saturation_config::SaturationConfig;
pub use temporal_config::TemporalConfig;
pub use validation_config::ValidationConfig;

use crate::constants::{MAX_ADAPTER_RETRIES_CEILING, MAX_FUTURE_TOLERANCE_HOURS};
use crate::errors::ConfigError;

/// Top-level configuration for the governance engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoutConfig {
    pub confidence: DeltaTable,
    pub validation: ValidationConfig,
    pub temporal: TemporalConfig,
    pub budget: BudgetConfig,
    pub saturation: SaturationConfig,
    pub orchestrator: OrchestratorConfig,
}

impl ScoutConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: ScoutConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse, and validate a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    /// Reject values that would break a session invariant.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let deltas = [
            ("confidence.accept", self.confidence.accept),
            ("confidence.weak_accept", self.confidence.weak_accept),
            ("confidence.reject", self.confidence.reject),
        ];
        for (field, value) in deltas {
            // Confidence must stay non-decreasing.
            if !value.is_finite() || value < 0.0 {
                return Err(invalid(field, format!("must be a finite value >= 0, got {value}")));
            }
        }
        if self.confidence.weak_accept > self.confidence.accept {
            return Err(invalid(
                "confidence.weak_accept",
                "must not exceed confidence.accept",
            ));
        }
        if self.validation.recency_days < 0 {
            return Err(invalid("validation.recency_days", "must be >= 0"));
        }
        if !(0..=MAX_FUTURE_TOLERANCE_HOURS).contains(&self.validation.future_tolerance_hours) {
            return Err(invalid(
                "validation.future_tolerance_hours",
                format!("must be within 0..={MAX_FUTURE_TOLERANCE_HOURS}"),
            ));
        }
        if self.validation.fingerprint_tokens == 0 {
            return Err(invalid("validation.fingerprint_tokens", "must be > 0"));
        }
        if self.saturation.window < 2 {
            return Err(invalid("saturation.window", "must be at least 2"));
        }
        if !self.saturation.epsilon.is_finite() || self.saturation.epsilon <= 0.0 {
            return Err(invalid("saturation.epsilon", "must be a finite value > 0"));
        }
        if self.temporal.momentum_window_days == 0 {
            return Err(invalid("temporal.momentum_window_days", "must be > 0"));
        }
        if self.orchestrator.max_adapter_retries > MAX_ADAPTER_RETRIES_CEILING {
            return Err(invalid(
                "orchestrator.max_adapter_retries",
                format!("must be <= {MAX_ADAPTER_RETRIES_CEILING}"),
            ));
        }
        if self.orchestrator.adapter_timeout_ms == 0 {
            return Err(invalid("orchestrator.adapter_timeout_ms", "must be > 0"));
        }
        if self.orchestrator.max_consecutive_empty == 0 {
            return Err(invalid("orchestrator.max_consecutive_empty", "must be > 0"));
        }
        let costs = [
            ("budget.iteration_cost_usd", self.budget.iteration_cost_usd),
            ("budget.no_evidence_cost_usd", self.budget.no_evidence_cost_usd),
            ("budget.retry_cost_usd", self.budget.retry_cost_usd),
        ];
        for (field, value) in costs {
            if !value.is_finite() || value < 0.0 {
                return Err(invalid(field, format!("must be a finite value >= 0, got {value}")));
            }
        }
        Ok(())
    }
}

fn invalid(field: &str, reason: impl Into<String>) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        reason: reason.into(),
    }
}
