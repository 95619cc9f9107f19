//! Roster solve results and per-employee statistics.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;

use crate::engine::SolveStatus;

/// Duty totals of one employee in a solved roster.
///
/// `fixed_*` are quotas (multiples of `H`), not days actually worked on the
/// fixed weekday; `variable_*` are the remainder drawn from the shared pools.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeStats {
    pub name: String,
    pub total_duties: i64,
    /// Monday–Friday duties.
    pub weekday_duties: i64,
    /// Saturday and Sunday duties.
    pub weekend_duties: i64,
    pub saturday_count: i64,
    pub sunday_count: i64,
    pub friday_count: i64,
    pub fixed_weekdays: i64,
    pub fixed_weekends: i64,
    pub variable_weekdays: i64,
    pub variable_weekends: i64,
}

impl EmployeeStats {
    /// Empty statistics for an employee.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// Which shared pool a figure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Pool {
    Weekday,
    Weekend,
}

/// A vacation period discarded by the fallback search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleasedVacation {
    pub employee: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// One model-build-and-solve attempt of the search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttemptRecord {
    /// Tolerance τ of the attempt.
    pub tolerance: u32,
    /// Vacation periods released before the attempt.
    pub released: usize,
    /// Solver verdict.
    pub status: SolveStatus,
    /// Wall time spent in the solver.
    pub wall_time: Duration,
}

/// Outcome of one roster solve.
///
/// Produced once per solve and not modified afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScheduleResult {
    pub success: bool,
    /// Date → assigned employee name, one entry per date on success.
    pub assignments: BTreeMap<NaiveDate, String>,
    /// Employee name → statistics, filled on success.
    pub employee_stats: BTreeMap<String, EmployeeStats>,
    /// Tolerance of the attempt that produced the roster.
    pub tolerance_used: Option<u32>,
    /// Total time spent in the search.
    pub solve_time: Duration,
    /// Failure reason, or the released-vacation note on success.
    pub error_message: Option<String>,
    /// Individual validation findings when validation stopped the solve.
    pub validation_errors: Vec<String>,
    /// Vacations released to reach feasibility, in release order.
    pub released_vacations: Vec<ReleasedVacation>,
    /// Every solver attempt, in execution order.
    pub attempts: Vec<AttemptRecord>,

    // Pool figures used for diagnosis
    pub total_weekdays: i64,
    pub total_weekends: i64,
    pub remaining_weekdays: i64,
    pub remaining_weekends: i64,
}

impl ScheduleResult {
    /// A failed result with a message.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            error_message: Some(message.into()),
            ..Self::default()
        }
    }

    /// Assigned employee on a date.
    pub fn assignee(&self, date: NaiveDate) -> Option<&str> {
        self.assignments.get(&date).map(String::as_str)
    }

    /// Dates assigned to an employee, in order.
    pub fn dates_of(&self, employee: &str) -> Vec<NaiveDate> {
        self.assignments
            .iter()
            .filter(|(_, name)| name.as_str() == employee)
            .map(|(date, _)| *date)
            .collect()
    }

    /// `(min, max, spread)` of the variable counts in a pool across employees.
    ///
    /// `(0, 0, 0)` when no statistics are present.
    pub fn fairness_spread(&self, pool: Pool) -> (i64, i64, i64) {
        let values = self.employee_stats.values().map(|s| match pool {
            Pool::Weekday => s.variable_weekdays,
            Pool::Weekend => s.variable_weekends,
        });
        let (min, max) = values.fold((i64::MAX, i64::MIN), |(lo, hi), v| (lo.min(v), hi.max(v)));
        if min > max {
            (0, 0, 0)
        } else {
            (min, max, max - min)
        }
    }
}
