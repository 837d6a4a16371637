//! # scout-budget
//!
//! Session budgets and the only component allowed to advance them.
//!
//! Caps are fixed when a [`Budget`] is created. Spend, iterations, and
//! elapsed time only move through [`BudgetController`], which returns an
//! updated copy so the orchestrator can hold a tentative budget until the
//! iteration is committed.

mod budget;
mod controller;

pub use budget::{Budget, Remaining};
pub use controller::BudgetController;
