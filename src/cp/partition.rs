//! Weekend classification of the staff.

use crate::models::{Employee, WeekendAvailability};

/// Employees grouped by how they may be spread over Saturday and Sunday.
///
/// Indices refer to positions in the employee slice. Derived fresh for
/// every model; releasing vacations or raising the tolerance never
/// changes it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeekendPartition {
    /// Forbidden on Sunday only.
    pub saturday_only: Vec<usize>,
    /// Forbidden on Saturday only.
    pub sunday_only: Vec<usize>,
    /// Free on both days.
    pub unrestricted: Vec<usize>,
    /// Forbidden on both days.
    pub neither: Vec<usize>,
    /// The extra-weekend employee, if any.
    pub extra: Option<usize>,
}

impl WeekendPartition {
    pub fn of(employees: &[Employee]) -> Self {
        let mut p = Self::default();
        for (i, e) in employees.iter().enumerate() {
            match e.weekend_availability() {
                WeekendAvailability::Both => p.unrestricted.push(i),
                WeekendAvailability::SaturdayOnly => p.saturday_only.push(i),
                WeekendAvailability::SundayOnly => p.sunday_only.push(i),
                WeekendAvailability::Neither => p.neither.push(i),
            }
            if e.is_extra_weekend && p.extra.is_none() {
                p.extra = Some(i);
            }
        }
        p
    }

    /// Whether the employee is held to a single weekend day.
    pub fn is_single_day(&self, index: usize) -> bool {
        self.saturday_only.contains(&index) || self.sunday_only.contains(&index)
    }

    pub fn is_unrestricted(&self, index: usize) -> bool {
        self.unrestricted.contains(&index)
    }
}
