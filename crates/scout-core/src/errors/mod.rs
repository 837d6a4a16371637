mod adapter_error;
mod audit_error;
mod budget_error;
mod config_error;
mod scout_error;
mod validation_error;

pub use adapter_error::AdapterError;
pub use audit_error::AuditError;
pub use budget_error::BudgetError;
pub use config_error::ConfigError;
pub use scout_error::{ScoutError, ScoutResult};
pub use validation_error::ValidationError;
