//! Constraint formulation of the duty roster.
//!
//! Turns a [`ScheduleConfig`](crate::models::ScheduleConfig) and its
//! [`PoolStats`](crate::scheduler::PoolStats) into a
//! [`CpModel`](crate::engine::CpModel) for one tolerance level, solvable by
//! any [`CpSolver`](crate::engine::CpSolver).
//!
//! # Reference
//! - Ernst et al. (2004), "Staff scheduling and rostering: A review of
//!   applications, methods and models"
//! - Burke et al. (2004), "The State of the Art of Nurse Rostering"

mod builder;
mod partition;

pub use builder::{
    couples_pools, spacing_window, RosterCpBuilder, RosterModel, CONSECUTIVE_WEIGHT,
    DEVIATION_WEIGHT, EXTRA_ABOVE_WEIGHT, EXTRA_BELOW_WEIGHT, MAX_PATTERN_DAYS, PATTERN_DAYS,
    SAT_SUN_WEIGHT, SPACING_WEIGHT, SPREAD_WEIGHT,
};
pub use partition::WeekendPartition;
