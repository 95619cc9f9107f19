//! Vacation release order for the fallback search.

use crate::models::{DateRange, ReleasedVacation, ScheduleConfig};

/// One vacation period of one employee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VacationPeriod {
    pub employee: String,
    pub period: DateRange,
}

impl VacationPeriod {
    pub fn to_released(&self) -> ReleasedVacation {
        ReleasedVacation {
            employee: self.employee.clone(),
            start: self.period.start,
            end: self.period.end,
        }
    }
}

/// Every vacation period, longest first.
///
/// Ties keep discovery order: employees in configuration order, periods in
/// entry order.
pub fn release_order(config: &ScheduleConfig) -> Vec<VacationPeriod> {
    let mut periods: Vec<VacationPeriod> = config
        .employees
        .iter()
        .flat_map(|e| {
            e.vacations.iter().map(move |v| VacationPeriod {
                employee: e.name.clone(),
                period: *v,
            })
        })
        .collect();
    // stable
    periods.sort_by(|a, b| b.period.len_days().cmp(&a.period.len_days()));
    periods
}

/// `"Released vacations: A: 01/02-01/05, B: 01/10-01/10"`.
pub fn released_note(released: &[ReleasedVacation]) -> String {
    let parts: Vec<String> = released
        .iter()
        .map(|r| {
            format!(
                "{}: {}-{}",
                r.employee,
                r.start.format("%m/%d"),
                r.end.format("%m/%d")
            )
        })
        .collect();
    format!("Released vacations: {}", parts.join(", "))
}
