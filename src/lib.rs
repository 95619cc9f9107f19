//! Fair duty rostering: one employee on duty per day.
//!
//! Given a date window, employees with forbidden weekdays and vacations,
//! recurring weekly commitments and an optional Friday–Saturday link, the
//! crate searches for a roster whose variable weekday and weekend counts
//! differ by at most a tolerance τ, widening τ step by step and releasing
//! vacations as a last resort.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Employee`, `FixedAssignment`,
//!   `ScheduleConfig`, `ScheduleResult`, ISO-week calendar helpers
//! - **`validation`**: Structural and capacity checks on a configuration
//! - **`engine`**: Backend-neutral constraint model and a MILP solver
//! - **`cp`**: Roster formulation for one tolerance level
//! - **`scheduler`**: Pool arithmetic, tolerance search, vacation release, KPIs
//! - **`error`**: Caller-contract errors
//!
//! # Example
//!
//! ```no_run
//! use chrono::NaiveDate;
//! use u_roster::cp::RosterCpBuilder;
//! use u_roster::engine::{MilpSolver, SolverConfig};
//! use u_roster::models::{Employee, ScheduleConfig};
//! use u_roster::scheduler::PoolStats;
//!
//! let config = ScheduleConfig::new(
//!     NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
//!     NaiveDate::from_ymd_opt(2024, 1, 14).unwrap(),
//!     vec![Employee::new("A"), Employee::new("B"), Employee::new("C")],
//! )
//! .with_fixed(0, "A");
//!
//! let pool = PoolStats::compute(&config);
//! let (roster, solution) = RosterCpBuilder::new(&config, &pool)
//!     .solve(&MilpSolver::new(), &SolverConfig::default(), 1)
//!     .unwrap();
//! assert!(solution.is_solution_found());
//! assert_eq!(roster.dates.len(), 14);
//! ```
//!
//! # References
//!
//! - Burke et al. (2004), "The State of the Art of Nurse Rostering"
//! - Wolsey (1998), "Integer Programming"

pub mod cp;
pub mod engine;
pub mod error;
pub mod models;
pub mod scheduler;
pub mod validation;
