//! Shared fixtures for Scout tests: a sample entity, candidate builders,
//! a scripted evidence adapter, and a loader for JSON golden scenarios.

pub mod adapter;
pub mod audit;
pub mod candidates;
pub mod golden;

use chrono::{DateTime, TimeZone, Utc};
use scout_core::models::EntityProfile;

pub use adapter::{Scripted, ScriptedAdapter};
pub use audit::FailingSink;
pub use golden::{fixture_path, load_fixture, load_fixture_value};

/// Fixed instant every fixture timestamp is derived from.
pub fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 2, 9, 0, 0)
        .single()
        .unwrap_or_default()
}

/// The entity most tests explore.
pub fn rovers() -> EntityProfile {
    EntityProfile::new("ent-rovers", "Riverside Rovers")
        .with_aliases(["RRFC", "The Rovers"])
        .with_official_domains(["riversiderovers.com"])
        .with_cluster("football-uk-tier2")
}
