//! Span definitions for sessions, iterations, and validation.

/// Create a session span.
#[macro_export]
macro_rules! session_span {
    ($entity_id:expr, $session_id:expr) => {
        tracing::info_span!("scout.session", entity_id = %$entity_id, session_id = %$session_id)
    };
}

/// Create an iteration span.
#[macro_export]
macro_rules! iteration_span {
    ($iteration:expr, $category:expr) => {
        tracing::debug_span!("scout.iteration", iteration = $iteration, category = %$category)
    };
}

/// Create a validation span.
#[macro_export]
macro_rules! validation_span {
    ($source_url:expr) => {
        tracing::debug_span!("scout.validation", source_url = %$source_url)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const SESSION: &str = "scout.session";
    pub const ITERATION: &str = "scout.iteration";
    pub const VALIDATION: &str = "scout.validation";
}
