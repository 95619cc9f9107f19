//! Caller-contract violations.
//!
//! Infeasibility and invalid input are ordinary outcomes reported through
//! [`ScheduleResult`](crate::models::ScheduleResult) and
//! [`ValidationError`](crate::validation::ValidationError). The errors
//! here mean a precondition of the pipeline was broken.

use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RosterError {
    /// A fixed assignment names an employee missing from the configuration.
    #[error("fixed assignment references unknown employee '{0}'")]
    UnknownEmployee(String),

    /// The solver reported success but no employee is on duty for a date.
    #[error("solver returned no assignee for {0}")]
    MissingAssignment(NaiveDate),

    /// The solver reported success without values for the model.
    #[error("solver reported {status} without variable values")]
    MissingValues { status: String },
}
