pub mod momentum;
pub mod recurrence;
pub mod seasonality;
