//! Roster search and evaluation.
//!
//! # Phases
//!
//! | Phase | Outcome on failure |
//! |-------|--------------------|
//! | Validating | `validation_errors` filled, no solver call |
//! | PoolCheck | capacity message, no solver call |
//! | Searching | escalate τ = 1..=M |
//! | ReleasingVacations | drop the longest vacation, search again |
//! | Failed | "Could not find feasible solution …" |
//!
//! # KPI
//!
//! `RosterKpi` reads per-employee duty statistics and the weekday, weekend
//! and total spreads off a finished roster.
//!
//! # References
//!
//! - Ernst et al. (2004), "Staff scheduling and rostering: A review of
//!   applications, methods and models"

mod kpi;
mod pool;
mod release;
mod search;

pub use kpi::{extract_assignments, RosterKpi};
pub use pool::{FairShare, PoolStats};
pub use release::{release_order, released_note, VacationPeriod};
pub use search::{solve_schedule, RosterRequest, SearchOptions, ToleranceSearch};
