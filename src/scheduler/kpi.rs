//! Roster read-back and duty statistics.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | total / weekday / weekend duties | dates worked in each class |
//! | Saturday / Sunday / Friday count | dates worked on that day |
//! | fixed weekdays / weekends | quota `H` per fixed assignment in the pool |
//! | variable weekdays | weekday duties − fixed quota − linked Fridays worked |
//! | variable weekends | weekend duties − fixed quota − extra-weekend reservation |
//! | spread | max − min of a variable figure across employees |
//!
//! Linked Fridays only leave the variable weekday figure when the link
//! is active and Friday has no fixed owner, mirroring the pool figures.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;

use crate::cp::RosterModel;
use crate::engine::CpSolution;
use crate::error::RosterError;
use crate::models::calendar::{day_of_week, is_weekday, is_weekend, FRIDAY, SATURDAY, SUNDAY};
use crate::models::{EmployeeStats, ScheduleConfig};

use super::pool::PoolStats;

/// Reads the date → employee mapping out of a solved model.
///
/// # Errors
/// - [`RosterError::MissingValues`] if the solution carries no values
/// - [`RosterError::MissingAssignment`] if a date has nobody on duty
pub fn extract_assignments(
    config: &ScheduleConfig,
    roster: &RosterModel,
    solution: &CpSolution,
) -> Result<BTreeMap<NaiveDate, String>, RosterError> {
    if !solution.is_solution_found() {
        return Err(RosterError::MissingValues {
            status: format!("{:?}", solution.status),
        });
    }
    roster
        .dates
        .iter()
        .enumerate()
        .map(|(di, date)| -> Result<(NaiveDate, String), RosterError> {
            let ei = roster
                .assignee(solution, di)
                .ok_or(RosterError::MissingAssignment(*date))?;
            Ok((*date, config.employees[ei].name.clone()))
        })
        .collect()
}

/// Fairness indicators of a finished roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterKpi {
    /// Employee name → duty statistics.
    pub employee_stats: BTreeMap<String, EmployeeStats>,
    /// Spread of variable weekday counts.
    pub weekday_spread: i64,
    /// Spread of variable weekend counts.
    pub weekend_spread: i64,
    /// Spread of variable weekday + weekend counts.
    pub total_spread: i64,
    /// Same employee on two adjacent dates, linked pairs excluded.
    pub consecutive_duties: usize,
}

impl RosterKpi {
    /// Computes statistics from an assignment mapping.
    ///
    /// # Arguments
    /// * `config` - The configuration the roster was solved for.
    /// * `pool` - Its pool figures (for quotas and the linked-Friday rule).
    /// * `assignments` - Date → employee name.
    pub fn calculate(
        config: &ScheduleConfig,
        pool: &PoolStats,
        assignments: &BTreeMap<NaiveDate, String>,
    ) -> Self {
        let linked_fridays: BTreeSet<NaiveDate> = if pool.folds_linked_fridays() {
            config.linked_pairs().into_iter().map(|(fri, _)| fri).collect()
        } else {
            BTreeSet::new()
        };

        let mut employee_stats = BTreeMap::new();
        for e in &config.employees {
            let mut s = EmployeeStats::new(&e.name);
            let mut folded = 0;
            for (date, name) in assignments {
                if *name != e.name {
                    continue;
                }
                let dow = day_of_week(*date);
                s.total_duties += 1;
                if is_weekday(dow) {
                    s.weekday_duties += 1;
                }
                if is_weekend(dow) {
                    s.weekend_duties += 1;
                }
                match dow {
                    SATURDAY => s.saturday_count += 1,
                    SUNDAY => s.sunday_count += 1,
                    FRIDAY => s.friday_count += 1,
                    _ => {}
                }
                if linked_fridays.contains(date) {
                    folded += 1;
                }
            }

            s.fixed_weekdays = pool.fixed_weekday_quota(&e.name);
            s.fixed_weekends = pool.fixed_weekend_quota(&e.name);
            s.variable_weekdays = s.weekday_duties - s.fixed_weekdays - folded;
            s.variable_weekends = s.weekend_duties - s.fixed_weekends;
            if e.is_extra_weekend {
                s.variable_weekends -= pool.num_weeks;
            }
            employee_stats.insert(e.name.clone(), s);
        }

        let spread = |f: &dyn Fn(&EmployeeStats) -> i64| -> i64 {
            let values: Vec<i64> = employee_stats.values().map(f).collect();
            match (values.iter().max(), values.iter().min()) {
                (Some(hi), Some(lo)) => hi - lo,
                _ => 0,
            }
        };
        let weekday_spread = spread(&|s| s.variable_weekdays);
        let weekend_spread = spread(&|s| s.variable_weekends);
        let total_spread = spread(&|s| s.variable_weekdays + s.variable_weekends);

        let linked: BTreeSet<NaiveDate> = config
            .linked_pairs()
            .into_iter()
            .map(|(fri, _)| fri)
            .collect();
        let consecutive_duties = assignments
            .iter()
            .zip(assignments.iter().skip(1))
            .filter(|((d1, e1), (d2, e2))| {
                e1 == e2 && (**d2 - **d1).num_days() == 1 && !linked.contains(*d1)
            })
            .count();

        Self {
            employee_stats,
            weekday_spread,
            weekend_spread,
            total_spread,
            consecutive_duties,
        }
    }

    /// Whether the weekday and weekend spreads stay within `tolerance`.
    pub fn within_tolerance(&self, tolerance: u32) -> bool {
        let t = i64::from(tolerance);
        self.weekday_spread <= t && self.weekend_spread <= t
    }
}
