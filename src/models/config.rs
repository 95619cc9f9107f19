//! Roster configuration: the scheduling window, the people, the recurring
//! commitments.
//!
//! All date subsets (weekdays, weekend days, Fridays, …) and the ISO week
//! count `H` are derived on demand, never stored.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use super::calendar::{
    day_of_week, is_weekday, is_weekend, iso_week_key, DateRange, DayOfWeek, FRIDAY, SATURDAY,
    SUNDAY,
};
use super::employee::{Employee, FixedAssignment};

/// Input to one roster solve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleConfig {
    /// First day of the window (inclusive).
    pub start_date: NaiveDate,
    /// Last day of the window (inclusive).
    pub end_date: NaiveDate,
    /// The people to roster.
    pub employees: Vec<Employee>,
    /// Recurring weekly commitments.
    #[serde(default)]
    pub fixed_assignments: Vec<FixedAssignment>,
    /// Whoever works a Friday also works the following Saturday.
    #[serde(default)]
    pub link_friday_saturday: bool,
}

impl ScheduleConfig {
    /// Creates a configuration without fixed assignments or link.
    pub fn new(start_date: NaiveDate, end_date: NaiveDate, employees: Vec<Employee>) -> Self {
        Self {
            start_date,
            end_date,
            employees,
            fixed_assignments: Vec::new(),
            link_friday_saturday: false,
        }
    }

    /// Adds a fixed assignment.
    pub fn with_fixed(mut self, day_of_week: DayOfWeek, employee: impl Into<String>) -> Self {
        self.fixed_assignments
            .push(FixedAssignment::new(day_of_week, employee));
        self
    }

    /// Enables or disables the Friday→Saturday link.
    pub fn with_link_friday_saturday(mut self, link: bool) -> Self {
        self.link_friday_saturday = link;
        self
    }

    /// The scheduling window as a range.
    pub fn window(&self) -> DateRange {
        DateRange::new(self.start_date, self.end_date)
    }

    /// Every date in the window, in order. Empty when `end < start`.
    pub fn dates(&self) -> Vec<NaiveDate> {
        self.window().dates()
    }

    /// Whether the date lies inside the window.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.window().contains(date)
    }

    /// Monday–Friday dates.
    pub fn weekday_dates(&self) -> Vec<NaiveDate> {
        self.filter_dates(|d| is_weekday(day_of_week(d)))
    }

    /// Saturday and Sunday dates.
    pub fn weekend_dates(&self) -> Vec<NaiveDate> {
        self.filter_dates(|d| is_weekend(day_of_week(d)))
    }

    /// Dates falling on the given day of the week.
    pub fn dates_on(&self, dow: DayOfWeek) -> Vec<NaiveDate> {
        self.filter_dates(|d| day_of_week(d) == dow)
    }

    pub fn saturday_dates(&self) -> Vec<NaiveDate> {
        self.dates_on(SATURDAY)
    }

    pub fn sunday_dates(&self) -> Vec<NaiveDate> {
        self.dates_on(SUNDAY)
    }

    pub fn friday_dates(&self) -> Vec<NaiveDate> {
        self.dates_on(FRIDAY)
    }

    /// Number of distinct ISO weeks the window touches (`H`).
    pub fn num_weeks(&self) -> i64 {
        self.dates()
            .into_iter()
            .map(iso_week_key)
            .collect::<BTreeSet<_>>()
            .len() as i64
    }

    /// `(Friday, Saturday)` pairs tied by the link; empty when the link is off.
    ///
    /// A Friday on the last day of the window has no partner and stays free.
    pub fn linked_pairs(&self) -> Vec<(NaiveDate, NaiveDate)> {
        if !self.link_friday_saturday {
            return Vec::new();
        }
        self.friday_dates()
            .into_iter()
            .map(|fri| (fri, fri + Duration::days(1)))
            .filter(|(_, sat)| self.contains(*sat))
            .collect()
    }

    /// Looks up an employee by name.
    pub fn employee(&self, name: &str) -> Option<&Employee> {
        self.employees.iter().find(|e| e.name == name)
    }

    /// Position of an employee in `employees`.
    pub fn employee_index(&self, name: &str) -> Option<usize> {
        self.employees.iter().position(|e| e.name == name)
    }

    /// The extra-weekend employee, if one is marked.
    pub fn extra_weekend_employee(&self) -> Option<&Employee> {
        self.employees.iter().find(|e| e.is_extra_weekend)
    }

    /// Day of week → committed employee name. Later entries win on conflict.
    pub fn fixed_days(&self) -> BTreeMap<DayOfWeek, &str> {
        self.fixed_assignments
            .iter()
            .map(|fa| (fa.day_of_week, fa.employee.as_str()))
            .collect()
    }

    /// A copy of this configuration with one vacation period removed from
    /// one employee.
    ///
    /// Only the first matching period is removed. The receiver is left
    /// untouched.
    pub fn without_vacation(&self, employee: &str, period: DateRange) -> Self {
        let mut next = self.clone();
        if let Some(e) = next.employees.iter_mut().find(|e| e.name == employee) {
            if let Some(pos) = e.vacations.iter().position(|v| *v == period) {
                e.vacations.remove(pos);
            }
        }
        next
    }

    fn filter_dates(&self, keep: impl Fn(NaiveDate) -> bool) -> Vec<NaiveDate> {
        self.dates().into_iter().filter(|d| keep(*d)).collect()
    }
}
