//! Pre-solve validation of roster configurations.
//!
//! Two layers, run in order:
//!
//! | Layer | Checks | On failure |
//! |-------|--------|------------|
//! | Structural | employees present, window well-ordered, unique names, at most one extra-weekend employee, days of week in range, fixed assignments valid | solve never attempted |
//! | Capacity | pools non-negative, weekday availability, extra-weekend availability, linked pairs coverable | reported; search may still run |
//!
//! The first four structural checks stop at the first failure; the fixed
//! assignment checks report every offending entry. Capacity checks run only
//! on structurally valid input. Nothing here mutates the configuration.

use std::collections::{BTreeMap, HashSet};

use crate::models::calendar::{day_of_week, is_weekday, weekday_name, DayOfWeek, SUNDAY};
use crate::models::ScheduleConfig;
use crate::scheduler::PoolStats;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// The employee list is empty.
    NoEmployees,
    /// The window has no dates (`end < start`).
    EmptyDateRange,
    /// Two employees share a name.
    DuplicateName,
    /// More than one employee carries the extra-weekend flag.
    MultipleExtraWeekend,
    /// A fixed assignment or forbidden weekday lies outside `0..=6`.
    InvalidDayOfWeek,
    /// A fixed assignment names an employee that doesn't exist.
    UnknownEmployee,
    /// Two fixed assignments target the same day of week.
    ConflictingFixedDay,
    /// Fixed weekday quotas exceed the weekday pool.
    WeekdayPoolExhausted,
    /// Fixed weekend quotas plus the extra-weekend reservation exceed the
    /// weekend pool.
    WeekendPoolExhausted,
    /// An employee without fixed weekdays can't work any weekday.
    NoWeekdayAvailability,
    /// The extra-weekend employee can't cover its reserved weekend days.
    ExtraWeekendUnderCapacity,
    /// Nobody can work both days of a linked Friday/Saturday pair.
    UnlinkablePair,
}

impl ValidationErrorKind {
    /// Whether the error blocks any solve attempt.
    pub fn is_structural(self) -> bool {
        matches!(
            self,
            Self::NoEmployees
                | Self::EmptyDateRange
                | Self::DuplicateName
                | Self::MultipleExtraWeekend
                | Self::InvalidDayOfWeek
                | Self::UnknownEmployee
                | Self::ConflictingFixedDay
        )
    }
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// Runs the structural checks, then the capacity checks.
///
/// # Returns
/// `Ok(())` if everything passes, `Err(errors)` with the violated rules in
/// check order.
pub fn validate_config(config: &ScheduleConfig) -> ValidationResult {
    validate_structure(config)?;
    validate_capacity(config)
}

/// Structural checks only.
///
/// A configuration passing these can be turned into a model without
/// precondition violations.
pub fn validate_structure(config: &ScheduleConfig) -> ValidationResult {
    if config.employees.is_empty() {
        return Err(vec![ValidationError::new(
            ValidationErrorKind::NoEmployees,
            "No employees defined. Add at least one employee.",
        )]);
    }

    if config.dates().is_empty() {
        return Err(vec![ValidationError::new(
            ValidationErrorKind::EmptyDateRange,
            "Invalid date range. Start date must be before or equal to end date.",
        )]);
    }

    let mut names = HashSet::new();
    if let Some(dup) = config
        .employees
        .iter()
        .find(|e| !names.insert(e.name.as_str()))
    {
        return Err(vec![ValidationError::new(
            ValidationErrorKind::DuplicateName,
            format!(
                "Duplicate employee names found ('{}'). Each employee must have a unique name.",
                dup.name
            ),
        )]);
    }

    let extra_count = config
        .employees
        .iter()
        .filter(|e| e.is_extra_weekend)
        .count();
    if extra_count > 1 {
        return Err(vec![ValidationError::new(
            ValidationErrorKind::MultipleExtraWeekend,
            format!("At most one employee can be marked as extra weekend. Found {extra_count}."),
        )]);
    }

    let mut errors = Vec::new();
    for e in &config.employees {
        if let Some(bad) = e.forbidden_weekdays.iter().find(|dow| **dow > SUNDAY) {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidDayOfWeek,
                format!(
                    "Employee '{}' forbids day of week {bad}; expected 0 (Monday) to 6 (Sunday).",
                    e.name
                ),
            ));
        }
    }

    let mut claimed: BTreeMap<DayOfWeek, &str> = BTreeMap::new();
    for fa in &config.fixed_assignments {
        if fa.day_of_week > SUNDAY {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidDayOfWeek,
                format!(
                    "Fixed assignment for '{}' uses day of week {}; expected 0 (Monday) to 6 (Sunday).",
                    fa.employee, fa.day_of_week
                ),
            ));
            continue;
        }
        let day = weekday_name(fa.day_of_week);
        if !names.contains(fa.employee.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownEmployee,
                format!(
                    "Fixed assignment for {day} references unknown employee '{}'.",
                    fa.employee
                ),
            ));
        }
        if let Some(previous) = claimed.insert(fa.day_of_week, fa.employee.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::ConflictingFixedDay,
                format!(
                    "Conflicting fixed assignments: both '{previous}' and '{}' assigned to {day}.",
                    fa.employee
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Capacity checks on a structurally valid configuration.
///
/// Availability counts skip dates whose day of week is fixed to someone
/// else.
pub fn validate_capacity(config: &ScheduleConfig) -> ValidationResult {
    let pool = PoolStats::compute(config);
    let fixed = &pool.fixed_days;
    let mut errors = Vec::new();

    if pool.remaining_weekdays < 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::WeekdayPoolExhausted,
            format!(
                "WEEKDAY POOL EXHAUSTED: Fixed assignments ({}) exceed available weekdays ({}).",
                pool.total_fixed_weekdays,
                pool.pool_weekday_slots()
            ),
        ));
    }

    if pool.remaining_weekends_effective < 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::WeekendPoolExhausted,
            format!(
                "WEEKEND POOL EXHAUSTED: Fixed ({}) + Extra quota ({}) exceed available weekend days ({}).",
                pool.total_fixed_weekends, pool.extra_weekend_quota, pool.total_weekends
            ),
        ));
    }

    let open_to = |name: &str, dow: DayOfWeek| fixed.get(&dow).map_or(true, |owner| owner == name);
    let weekday_dates = config.weekday_dates();
    let weekend_dates = config.weekend_dates();

    for e in &config.employees {
        let has_fixed_weekday = fixed
            .iter()
            .any(|(dow, owner)| owner == &e.name && is_weekday(*dow));
        if pool.remaining_weekdays <= 0 || has_fixed_weekday {
            continue;
        }
        let available = weekday_dates
            .iter()
            .filter(|d| open_to(&e.name, day_of_week(**d)) && e.is_available(**d))
            .count();
        if available == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NoWeekdayAvailability,
                format!(
                    "Employee '{}' has no available weekdays due to forbidden days/vacations. This may cause fairness issues.",
                    e.name
                ),
            ));
        }
    }

    if let Some(extra) = config.extra_weekend_employee() {
        let available = weekend_dates
            .iter()
            .filter(|d| open_to(&extra.name, day_of_week(**d)) && extra.is_available(**d))
            .count() as i64;
        if available < pool.extra_weekend_quota {
            errors.push(ValidationError::new(
                ValidationErrorKind::ExtraWeekendUnderCapacity,
                format!(
                    "Extra weekend employee '{}' needs {} weekend days but only {available} are available (due to forbidden days/vacations).",
                    extra.name, pool.extra_weekend_quota
                ),
            ));
        }
    }

    for (fri, sat) in config.linked_pairs() {
        let coverable = config.employees.iter().any(|e| {
            [fri, sat]
                .iter()
                .all(|d| e.is_available(*d) && open_to(&e.name, day_of_week(*d)))
        });
        if !coverable {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnlinkablePair,
                format!("Friday-Saturday link active but no employee can work both {fri} and {sat}."),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
