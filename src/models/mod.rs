//! Rostering domain models.
//!
//! Provides the value types describing a duty-roster problem and its
//! solution. Configurations are built fresh for every solve; results are
//! produced once and not modified afterwards.
//!
//! # Vocabulary
//!
//! | Type | Meaning |
//! |------|---------|
//! | `Employee` | A person, with forbidden weekdays and vacations |
//! | `FixedAssignment` | "Every Monday goes to Ana" |
//! | `ScheduleConfig` | Window + employees + fixed assignments + link toggle |
//! | `ScheduleResult` | Date → employee, per-employee statistics, diagnostics |

pub mod calendar;
mod config;
mod employee;
mod result;

pub use calendar::{DateRange, DayOfWeek};
pub use config::ScheduleConfig;
pub use employee::{Employee, FixedAssignment, WeekendAvailability};
pub use result::{AttemptRecord, EmployeeStats, Pool, ReleasedVacation, ScheduleResult};
