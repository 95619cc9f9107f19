//! Pool capacity figures.
//!
//! Splits the window's slots into the part claimed by recurring fixed
//! assignments and the shared pools distributed among all employees.
//!
//! # Quotas
//! A fixed assignment costs its employee `H` slots (the ISO week count)
//! regardless of vacations: days missed on the fixed weekday are owed to
//! the shared pool instead. The extra-weekend employee reserves another
//! `H` weekend slots.
//!
//! # Linked Fridays
//! With the Friday→Saturday link active (and Friday not fixed), each
//! linked Friday follows its Saturday and is not an independent draw, so
//! it is removed from the weekday pool.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::calendar::{is_weekday, is_weekend, DayOfWeek, FRIDAY};
use crate::models::ScheduleConfig;

/// Even per-head split of a pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FairShare {
    pub floor: i64,
    pub ceil: i64,
    /// Slots left over after giving everyone `floor`.
    pub remainder: i64,
}

impl FairShare {
    /// Splits `slots` among `heads` people. Empty or negative pools
    /// yield a zero share.
    pub fn split(slots: i64, heads: i64) -> Self {
        if heads <= 0 || slots <= 0 {
            return Self {
                floor: 0,
                ceil: 0,
                remainder: 0,
            };
        }
        let floor = slots / heads;
        let remainder = slots % heads;
        Self {
            floor,
            ceil: floor + i64::from(remainder > 0),
            remainder,
        }
    }
}

/// Capacity report of a configuration. Pure function of its input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolStats {
    /// ISO weeks spanned (`H`).
    pub num_weeks: i64,
    pub num_employees: i64,
    /// Monday–Friday dates in the window.
    pub total_weekdays: i64,
    /// Saturday and Sunday dates in the window.
    pub total_weekends: i64,
    /// Linked Fridays removed from the weekday pool.
    pub linked_weekdays: i64,
    pub total_fixed_weekdays: i64,
    pub total_fixed_weekends: i64,
    /// Weekday pool after fixed quotas.
    pub remaining_weekdays: i64,
    /// Weekend pool after fixed quotas.
    pub remaining_weekends: i64,
    pub extra_weekend_quota: i64,
    /// Weekend pool after fixed quotas and the extra-weekend reservation.
    pub remaining_weekends_effective: i64,
    pub fixed_weekdays_per_employee: BTreeMap<String, i64>,
    pub fixed_weekends_per_employee: BTreeMap<String, i64>,
    /// Day of week → committed employee.
    pub fixed_days: BTreeMap<DayOfWeek, String>,
}

impl PoolStats {
    /// Computes the capacity report.
    pub fn compute(config: &ScheduleConfig) -> Self {
        let h = config.num_weeks();
        let fixed_days: BTreeMap<DayOfWeek, String> = config
            .fixed_days()
            .into_iter()
            .map(|(dow, name)| (dow, name.to_string()))
            .collect();

        let mut fixed_weekdays_per_employee: BTreeMap<String, i64> = config
            .employees
            .iter()
            .map(|e| (e.name.clone(), 0))
            .collect();
        let mut fixed_weekends_per_employee = fixed_weekdays_per_employee.clone();

        for (dow, name) in &fixed_days {
            if is_weekday(*dow) {
                if let Some(q) = fixed_weekdays_per_employee.get_mut(name) {
                    *q += h;
                }
            } else if is_weekend(*dow) {
                if let Some(q) = fixed_weekends_per_employee.get_mut(name) {
                    *q += h;
                }
            }
        }

        let linked_weekdays = if fixed_days.contains_key(&FRIDAY) {
            0
        } else {
            config.linked_pairs().len() as i64
        };

        let total_weekdays = config.weekday_dates().len() as i64;
        let total_weekends = config.weekend_dates().len() as i64;
        let total_fixed_weekdays: i64 = fixed_weekdays_per_employee.values().sum();
        let total_fixed_weekends: i64 = fixed_weekends_per_employee.values().sum();
        let remaining_weekdays = total_weekdays - linked_weekdays - total_fixed_weekdays;
        let remaining_weekends = total_weekends - total_fixed_weekends;
        let extra_weekend_quota = if config.extra_weekend_employee().is_some() {
            h
        } else {
            0
        };

        Self {
            num_weeks: h,
            num_employees: config.employees.len() as i64,
            total_weekdays,
            total_weekends,
            linked_weekdays,
            total_fixed_weekdays,
            total_fixed_weekends,
            remaining_weekdays,
            remaining_weekends,
            extra_weekend_quota,
            remaining_weekends_effective: remaining_weekends - extra_weekend_quota,
            fixed_weekdays_per_employee,
            fixed_weekends_per_employee,
            fixed_days,
        }
    }

    /// Whether linked Fridays are folded out of the weekday pool.
    pub fn folds_linked_fridays(&self) -> bool {
        self.linked_weekdays > 0
    }

    /// Weekday slots open to the pool (total minus linked Fridays).
    pub fn pool_weekday_slots(&self) -> i64 {
        self.total_weekdays - self.linked_weekdays
    }

    /// Per-head share of the remaining weekday pool.
    pub fn weekday_share(&self) -> FairShare {
        FairShare::split(self.remaining_weekdays, self.num_employees)
    }

    /// Per-head share of the remaining weekend pool (after the
    /// extra-weekend reservation).
    pub fn weekend_share(&self) -> FairShare {
        FairShare::split(self.remaining_weekends_effective, self.num_employees)
    }

    /// Fixed weekday quota of an employee (0 if none).
    pub fn fixed_weekday_quota(&self, name: &str) -> i64 {
        self.fixed_weekdays_per_employee
            .get(name)
            .copied()
            .unwrap_or(0)
    }

    /// Fixed weekend quota of an employee (0 if none).
    pub fn fixed_weekend_quota(&self, name: &str) -> i64 {
        self.fixed_weekends_per_employee
            .get(name)
            .copied()
            .unwrap_or(0)
    }

    /// First capacity deficit, phrased for the user, if any.
    pub fn capacity_error(&self) -> Option<String> {
        if self.remaining_weekdays < 0 {
            return Some(format!(
                "Fixed weekday assignments exceed available weekdays. Fixed: {}, Available: {}",
                self.total_fixed_weekdays,
                self.pool_weekday_slots()
            ));
        }
        if self.remaining_weekends_effective < 0 {
            return Some(format!(
                "Weekend pool exhausted. Fixed: {}, Extra quota: {}, Available: {}",
                self.total_fixed_weekends, self.extra_weekend_quota, self.total_weekends
            ));
        }
        None
    }
}
