//! Employee and recurring fixed-assignment models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::calendar::{day_of_week, DateRange, DayOfWeek, SATURDAY, SUNDAY};

/// A person who can be put on duty.
///
/// Availability on a date = weekday not forbidden AND date not inside any
/// vacation range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique name (identity key within a configuration).
    pub name: String,
    /// Days of the week this employee never works (0 = Monday).
    #[serde(default)]
    pub forbidden_weekdays: BTreeSet<DayOfWeek>,
    /// Inclusive leave periods, in entry order.
    #[serde(default)]
    pub vacations: Vec<DateRange>,
    /// Marks the single employee who takes `H` weekend days on top of the
    /// shared weekend pool.
    #[serde(default)]
    pub is_extra_weekend: bool,
}

/// How an employee relates to the Saturday/Sunday pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeekendAvailability {
    /// Can work both Saturday and Sunday.
    Both,
    /// Forbidden on Sunday only.
    SaturdayOnly,
    /// Forbidden on Saturday only.
    SundayOnly,
    /// Forbidden on both.
    Neither,
}

impl Employee {
    /// Creates an employee without restrictions.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            forbidden_weekdays: BTreeSet::new(),
            vacations: Vec::new(),
            is_extra_weekend: false,
        }
    }

    /// Forbids a day of the week.
    pub fn with_forbidden(mut self, dow: DayOfWeek) -> Self {
        self.forbidden_weekdays.insert(dow);
        self
    }

    /// Adds an inclusive vacation period.
    pub fn with_vacation(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.vacations.push(DateRange::new(start, end));
        self
    }

    /// Marks this employee as the extra-weekend employee.
    pub fn with_extra_weekend(mut self) -> Self {
        self.is_extra_weekend = true;
        self
    }

    /// Whether the employee never works this day of the week.
    #[inline]
    pub fn is_forbidden(&self, dow: DayOfWeek) -> bool {
        self.forbidden_weekdays.contains(&dow)
    }

    /// Whether the date lies inside one of the vacation periods.
    pub fn is_on_vacation(&self, date: NaiveDate) -> bool {
        self.vacations.iter().any(|v| v.contains(date))
    }

    /// Whether the employee can work on the date.
    pub fn is_available(&self, date: NaiveDate) -> bool {
        !self.is_forbidden(day_of_week(date)) && !self.is_on_vacation(date)
    }

    /// Saturday/Sunday classification from the forbidden weekdays.
    pub fn weekend_availability(&self) -> WeekendAvailability {
        match (self.is_forbidden(SATURDAY), self.is_forbidden(SUNDAY)) {
            (false, false) => WeekendAvailability::Both,
            (false, true) => WeekendAvailability::SaturdayOnly,
            (true, false) => WeekendAvailability::SundayOnly,
            (true, true) => WeekendAvailability::Neither,
        }
    }
}

/// A recurring weekly commitment: every `day_of_week` goes to `employee`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedAssignment {
    /// Day of the week (0 = Monday).
    pub day_of_week: DayOfWeek,
    /// Name of the committed employee.
    pub employee: String,
}

impl FixedAssignment {
    /// Creates a fixed assignment.
    pub fn new(day_of_week: DayOfWeek, employee: impl Into<String>) -> Self {
        Self {
            day_of_week,
            employee: employee.into(),
        }
    }
}
