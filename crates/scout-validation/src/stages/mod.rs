//! The four stages of the governance pass, in evaluation order.

pub mod classification;
pub mod confirmation;
pub mod rule_filter;
pub mod verification;
