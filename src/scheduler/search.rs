//! Tolerance-escalating roster search.
//!
//! # Algorithm
//!
//! 1. **Validating**: structural checks; failures end the search.
//! 2. **PoolCheck**: a negative weekday or weekend pool ends the search
//!    without a solver call, as does any failed availability check
//!    (weekday availability, extra-weekend capacity, linked pairs).
//! 3. **Searching**: for τ = 1..=M build a fresh model and solve it with a
//!    time slice of `max(T / M, min_attempt)`. The first roster wins.
//! 4. **ReleasingVacations**: vacations are dropped one at a time, longest
//!    first and cumulatively, rerunning step 3 after each.
//! 5. **Failed**: nothing worked even with every vacation released.
//!
//! The caller's configuration is never modified; released vacations are
//! applied to a working copy.
//!
//! # Complexity
//! At most `M · (1 + V)` solver calls, V = number of vacation periods.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::cp::RosterCpBuilder;
use crate::engine::{CpSolver, MilpSolver, SolveStatus, SolverConfig};
use crate::error::RosterError;
use crate::models::{AttemptRecord, ScheduleConfig, ScheduleResult};
use crate::validation::{validate_capacity, validate_structure, ValidationError};

use super::kpi::{extract_assignments, RosterKpi};
use super::pool::PoolStats;
use super::release::{release_order, released_note};

/// Search limits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchOptions {
    /// Highest tolerance τ tried.
    pub max_tolerance: u32,
    /// Time budget spread over the τ levels, in seconds.
    pub time_budget_secs: u64,
    /// Floor of the per-attempt time slice, in seconds.
    pub min_attempt_secs: u64,
    /// Parallelism hint for the solver.
    pub workers: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            max_tolerance: 4,
            time_budget_secs: 60,
            min_attempt_secs: 10,
            workers: 4,
        }
    }
}

impl SearchOptions {
    pub fn with_max_tolerance(mut self, max_tolerance: u32) -> Self {
        self.max_tolerance = max_tolerance;
        self
    }

    pub fn with_time_budget(mut self, secs: u64) -> Self {
        self.time_budget_secs = secs;
        self
    }

    pub fn with_min_attempt(mut self, secs: u64) -> Self {
        self.min_attempt_secs = secs;
        self
    }

    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    /// Wall-clock limit of one solver attempt.
    pub fn attempt_time_limit(&self) -> Duration {
        let budget = Duration::from_secs(self.time_budget_secs);
        let slice = budget / self.max_tolerance.max(1);
        slice.max(Duration::from_secs(self.min_attempt_secs))
    }

    /// Solver parameters of one attempt.
    pub fn solver_config(&self) -> SolverConfig {
        SolverConfig::default()
            .with_time_limit(self.attempt_time_limit())
            .with_workers(self.workers)
    }
}

/// A configuration plus search limits, as accepted by the JSON driver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterRequest {
    pub config: ScheduleConfig,
    #[serde(default)]
    pub options: SearchOptions,
}

impl RosterRequest {
    /// Creates a request with default limits.
    pub fn new(config: ScheduleConfig) -> Self {
        Self {
            config,
            options: SearchOptions::default(),
        }
    }

    pub fn with_options(mut self, options: SearchOptions) -> Self {
        self.options = options;
        self
    }

    /// Runs the search with the bundled solver.
    pub fn solve(&self) -> Result<ScheduleResult, RosterError> {
        solve_schedule(&self.config, &self.options)
    }
}

/// Runs the search with the bundled [`MilpSolver`].
pub fn solve_schedule(
    config: &ScheduleConfig,
    options: &SearchOptions,
) -> Result<ScheduleResult, RosterError> {
    ToleranceSearch::new(MilpSolver::new(), options.clone()).solve(config)
}

/// Tolerance search over any [`CpSolver`].
///
/// # Example
///
/// ```no_run
/// use u_roster::engine::MilpSolver;
/// use u_roster::models::{Employee, ScheduleConfig};
/// use u_roster::scheduler::{SearchOptions, ToleranceSearch};
/// use chrono::NaiveDate;
///
/// let config = ScheduleConfig::new(
///     NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 1, 7).unwrap(),
///     vec![Employee::new("A"), Employee::new("B"), Employee::new("C")],
/// );
/// let search = ToleranceSearch::new(MilpSolver::new(), SearchOptions::default());
/// let result = search.solve(&config).unwrap();
/// assert!(result.success);
/// ```
#[derive(Debug, Clone)]
pub struct ToleranceSearch<S: CpSolver> {
    solver: S,
    options: SearchOptions,
}

impl<S: CpSolver> ToleranceSearch<S> {
    pub fn new(solver: S, options: SearchOptions) -> Self {
        Self { solver, options }
    }

    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    /// Searches for a roster.
    ///
    /// Infeasibility, invalid input and capacity deficits are reported in
    /// the returned [`ScheduleResult`].
    ///
    /// # Errors
    /// Caller-contract violations only (see [`RosterError`]).
    pub fn solve(&self, config: &ScheduleConfig) -> Result<ScheduleResult, RosterError> {
        let started = Instant::now();
        let mut attempts = Vec::new();

        if let Err(errors) = validate_structure(config) {
            info!(errors = errors.len(), "configuration rejected");
            return Ok(finish(rejected(errors), started, attempts));
        }

        let pool = PoolStats::compute(config);
        if let Some(message) = pool.capacity_error() {
            info!(
                remaining_weekdays = pool.remaining_weekdays,
                remaining_weekends = pool.remaining_weekends_effective,
                "pool capacity exhausted"
            );
            let result = with_pool(ScheduleResult::failure(message), &pool);
            return Ok(finish(result, started, attempts));
        }
        if let Err(errors) = validate_capacity(config) {
            info!(errors = errors.len(), "availability checks failed");
            let result = with_pool(rejected(errors), &pool);
            return Ok(finish(result, started, attempts));
        }

        if let Some(result) = self.search(config, &pool, 0, &mut attempts)? {
            return Ok(finish(result, started, attempts));
        }

        let mut working = config.clone();
        let mut last_pool = pool;
        let mut released = Vec::new();
        for vacation in release_order(config) {
            working = working.without_vacation(&vacation.employee, vacation.period);
            released.push(vacation.to_released());
            info!(
                employee = %vacation.employee,
                start = %vacation.period.start,
                end = %vacation.period.end,
                "vacation released"
            );

            last_pool = PoolStats::compute(&working);
            if let Some(mut result) = self.search(&working, &last_pool, released.len(), &mut attempts)? {
                result.error_message = Some(released_note(&released));
                result.released_vacations = released;
                return Ok(finish(result, started, attempts));
            }
        }

        info!(
            max_tolerance = self.options.max_tolerance,
            attempts = attempts.len(),
            "no feasible roster"
        );
        let mut message = format!(
            "Could not find feasible solution with tolerance up to {}. \
             Check employee availability, fixed assignments, and forbidden days.",
            self.options.max_tolerance
        );
        let timed_out = attempts
            .iter()
            .filter(|a| a.status == SolveStatus::Unknown)
            .count();
        if timed_out > 0 {
            message.push_str(&format!(
                " {timed_out} of {} attempts stopped at the time limit without a verdict; \
                 a larger time budget may find a roster.",
                attempts.len()
            ));
        }
        let result = with_pool(ScheduleResult::failure(message), &last_pool);
        Ok(finish(result, started, attempts))
    }

    /// One pass over τ = 1..=M.
    fn search(
        &self,
        config: &ScheduleConfig,
        pool: &PoolStats,
        released: usize,
        attempts: &mut Vec<AttemptRecord>,
    ) -> Result<Option<ScheduleResult>, RosterError> {
        let builder = RosterCpBuilder::new(config, pool);
        let solver_config = self.options.solver_config();

        for tolerance in 1..=self.options.max_tolerance {
            let (roster, solution) = builder.solve(&self.solver, &solver_config, tolerance)?;
            debug!(
                tolerance,
                released,
                status = ?solution.status,
                wall_ms = solution.wall_time.as_millis() as u64,
                "attempt finished"
            );
            attempts.push(AttemptRecord {
                tolerance,
                released,
                status: solution.status,
                wall_time: solution.wall_time,
            });

            if !solution.status.is_solution_found() {
                continue;
            }

            let assignments = extract_assignments(config, &roster, &solution)?;
            let kpi = RosterKpi::calculate(config, pool, &assignments);
            info!(
                tolerance,
                released,
                weekday_spread = kpi.weekday_spread,
                weekend_spread = kpi.weekend_spread,
                "roster found"
            );
            let result = ScheduleResult {
                success: true,
                assignments,
                employee_stats: kpi.employee_stats,
                tolerance_used: Some(tolerance),
                ..ScheduleResult::default()
            };
            return Ok(Some(with_pool(result, pool)));
        }
        Ok(None)
    }
}

fn rejected(errors: Vec<ValidationError>) -> ScheduleResult {
    let messages: Vec<String> = errors.into_iter().map(|e| e.message).collect();
    let mut result = ScheduleResult::failure(messages.join(" "));
    result.validation_errors = messages;
    result
}

fn with_pool(mut result: ScheduleResult, pool: &PoolStats) -> ScheduleResult {
    result.total_weekdays = pool.total_weekdays;
    result.total_weekends = pool.total_weekends;
    result.remaining_weekdays = pool.remaining_weekdays;
    result.remaining_weekends = pool.remaining_weekends_effective;
    result
}

fn finish(
    mut result: ScheduleResult,
    started: Instant,
    attempts: Vec<AttemptRecord>,
) -> ScheduleResult {
    result.solve_time = started.elapsed();
    result.attempts = attempts;
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{CpModel, CpSolution};
    use crate::cp::spacing_window;
    use crate::models::calendar::{
        day_of_week, is_weekend, iso_week_key, FRIDAY, MONDAY, SUNDAY, THURSDAY, TUESDAY,
        WEDNESDAY,
    };
    use crate::models::{Employee, Pool};
    use chrono::NaiveDate;
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};
    use std::cell::Cell;

    fn d(m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, m, day).unwrap()
    }

    fn abc() -> Vec<Employee> {
        vec![Employee::new("A"), Employee::new("B"), Employee::new("C")]
    }

    fn options() -> SearchOptions {
        SearchOptions::default().with_time_budget(120).with_min_attempt(30)
    }

    /// Counts calls and answers with a fixed status, or delegates.
    struct CountingSolver {
        calls: Cell<usize>,
        answer: Option<SolveStatus>,
    }

    impl CountingSolver {
        fn answering(status: SolveStatus) -> Self {
            Self {
                calls: Cell::new(0),
                answer: Some(status),
            }
        }

        fn infeasible() -> Self {
            Self::answering(SolveStatus::Infeasible)
        }

        fn milp() -> Self {
            Self {
                calls: Cell::new(0),
                answer: None,
            }
        }
    }

    impl CpSolver for CountingSolver {
        fn solve(&self, model: &CpModel, config: &SolverConfig) -> CpSolution {
            self.calls.set(self.calls.get() + 1);
            match self.answer {
                Some(status) => CpSolution::without_values(status, Duration::ZERO),
                None => MilpSolver::new().solve(model, config),
            }
        }
    }

    fn total_spread(result: &ScheduleResult) -> i64 {
        let totals: Vec<i64> = result
            .employee_stats
            .values()
            .map(|s| s.variable_weekdays + s.variable_weekends)
            .collect();
        match (totals.iter().max(), totals.iter().min()) {
            (Some(hi), Some(lo)) => hi - lo,
            _ => 0,
        }
    }

    fn assert_fair(result: &ScheduleResult) {
        let tau = i64::from(result.tolerance_used.unwrap());
        assert!(result.fairness_spread(Pool::Weekday).2 <= tau);
        assert!(result.fairness_spread(Pool::Weekend).2 <= tau);
        assert!(total_spread(result) <= tau);
    }

    #[test]
    fn test_attempt_time_slice() {
        let o = SearchOptions::default();
        assert_eq!(o.attempt_time_limit(), Duration::from_secs(15));
        let o = o.with_max_tolerance(10);
        assert_eq!(o.attempt_time_limit(), Duration::from_secs(10));
        let o = o.with_max_tolerance(0).with_time_budget(5).with_min_attempt(1);
        assert_eq!(o.attempt_time_limit(), Duration::from_secs(5));
        assert_eq!(o.with_workers(2).solver_config().workers, 2);
    }

    #[test]
    fn test_request_defaults_from_json() {
        let json = r#"{
            "config": {
                "start_date": "2024-01-01",
                "end_date": "2024-01-07",
                "employees": [{"name": "A"}, {"name": "B", "forbidden_weekdays": [6]}]
            },
            "options": {"max_tolerance": 2}
        }"#;
        let req: RosterRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.options.max_tolerance, 2);
        assert_eq!(req.options.time_budget_secs, 60);
        assert!(req.config.fixed_assignments.is_empty());
        assert!(req.config.employees[1].is_forbidden(6));

        let bare: RosterRequest = serde_json::from_str(
            r#"{"config": {"start_date": "2024-01-01", "end_date": "2024-01-01", "employees": []}}"#,
        )
        .unwrap();
        assert_eq!(bare.options, SearchOptions::default());
    }

    #[test]
    fn test_three_people_one_week() {
        let config = ScheduleConfig::new(d(1, 1), d(1, 7), abc());
        let result = solve_schedule(&config, &options()).unwrap();

        assert!(result.success);
        assert_eq!(result.tolerance_used, Some(1));
        assert_eq!(result.assignments.len(), 7);
        assert!(result.fairness_spread(Pool::Weekday).2 <= 1);
        assert!(result.fairness_spread(Pool::Weekend).2 <= 1);
        assert!(result.released_vacations.is_empty());
        assert!(result.error_message.is_none());
        assert_eq!(result.attempts.len(), 1);
        assert_eq!(result.total_weekdays, 5);
        assert_eq!(result.remaining_weekends, 2);
    }

    #[test]
    fn test_two_extra_weekend_rejected_without_solving() {
        let mut staff = abc();
        staff[0].is_extra_weekend = true;
        staff[1].is_extra_weekend = true;
        let config = ScheduleConfig::new(d(1, 1), d(1, 7), staff);

        let solver = CountingSolver::infeasible();
        let result = ToleranceSearch::new(&solver, options())
            .solve(&config)
            .unwrap();
        assert!(!result.success);
        assert_eq!(result.validation_errors.len(), 1);
        assert!(result.validation_errors[0].contains("Found 2"));
        assert_eq!(solver.calls.get(), 0);
        assert!(result.attempts.is_empty());
    }

    #[test]
    fn test_capacity_deficit_fails_immediately() {
        // Friday to Monday: two ISO weeks, two weekdays, three weekday quotas of 2
        let config = ScheduleConfig::new(d(1, 5), d(1, 8), abc())
            .with_fixed(MONDAY, "A")
            .with_fixed(TUESDAY, "B")
            .with_fixed(WEDNESDAY, "C");

        let solver = CountingSolver::infeasible();
        let result = ToleranceSearch::new(&solver, options())
            .solve(&config)
            .unwrap();
        assert!(!result.success);
        let message = result.error_message.unwrap();
        assert!(message.contains("Fixed weekday assignments exceed"));
        assert!(message.contains("Fixed: 6"));
        assert_eq!(result.remaining_weekdays, -4);
        assert_eq!(solver.calls.get(), 0);
    }

    #[test]
    fn test_fixed_monday_owner_on_vacation() {
        let mut staff = abc();
        staff[0] = Employee::new("A").with_vacation(d(1, 1), d(1, 1));
        let config = ScheduleConfig::new(d(1, 1), d(1, 7), staff).with_fixed(MONDAY, "A");
        let result = solve_schedule(&config, &options()).unwrap();

        assert!(result.success);
        assert_ne!(result.assignee(d(1, 1)), Some("A"));
        let a = &result.employee_stats["A"];
        assert_eq!(a.fixed_weekdays, 1);
        assert!(result.released_vacations.is_empty());
    }

    #[test]
    fn test_exhaustion_counts_attempts() {
        let mut staff = abc();
        staff[0] = Employee::new("A")
            .with_vacation(d(1, 1), d(1, 2))
            .with_vacation(d(1, 5), d(1, 5));
        let config = ScheduleConfig::new(d(1, 1), d(1, 7), staff);

        let solver = CountingSolver::infeasible();
        let result = ToleranceSearch::new(&solver, options().with_max_tolerance(3))
            .solve(&config)
            .unwrap();
        assert!(!result.success);
        // three levels, before and after each of the two releases
        assert_eq!(solver.calls.get(), 9);
        assert_eq!(result.attempts.len(), 9);
        let levels: Vec<u32> = result.attempts.iter().map(|a| a.tolerance).collect();
        assert_eq!(levels, vec![1, 2, 3, 1, 2, 3, 1, 2, 3]);
        assert_eq!(result.attempts[8].released, 2);
        assert!(result
            .error_message
            .unwrap()
            .starts_with("Could not find feasible solution with tolerance up to 3."));
        assert_eq!(result.total_weekdays, 5);
        // caller's configuration untouched
        assert_eq!(config.employees[0].vacations.len(), 2);
    }

    #[test]
    fn test_vacation_release_longest_first() {
        // nobody can take Wednesday until A's longer vacation goes
        let config = ScheduleConfig::new(
            d(1, 1),
            d(1, 7),
            vec![
                Employee::new("A").with_vacation(d(1, 1), d(1, 3)),
                Employee::new("B").with_vacation(d(1, 3), d(1, 3)),
            ],
        );
        let solver = CountingSolver::milp();
        let result = ToleranceSearch::new(&solver, options())
            .solve(&config)
            .unwrap();

        assert!(result.success);
        assert_eq!(result.released_vacations.len(), 1);
        assert_eq!(result.released_vacations[0].employee, "A");
        assert_eq!(
            result.error_message.as_deref(),
            Some("Released vacations: A: 01/01-01/03")
        );
        // B's vacation still holds
        assert_eq!(result.assignee(d(1, 3)), Some("A"));
        assert_eq!(result.tolerance_used, Some(1));
        assert_eq!(solver.calls.get(), 5);
        assert!(result.attempts[..4]
            .iter()
            .all(|a| a.status == SolveStatus::Infeasible && a.released == 0));
        assert_eq!(config.employees[0].vacations.len(), 1);
    }

    #[test]
    fn test_no_weekday_availability_blocks_solving() {
        let mut staff = abc();
        staff[1] = [MONDAY, TUESDAY, WEDNESDAY, THURSDAY, FRIDAY]
            .into_iter()
            .fold(Employee::new("B"), |e, dow| e.with_forbidden(dow));
        let config = ScheduleConfig::new(d(1, 1), d(1, 7), staff);

        let solver = CountingSolver::infeasible();
        let result = ToleranceSearch::new(&solver, options())
            .solve(&config)
            .unwrap();
        assert!(!result.success);
        assert_eq!(solver.calls.get(), 0);
        assert!(result.attempts.is_empty());
        assert_eq!(result.validation_errors.len(), 1);
        assert!(result.validation_errors[0].contains("'B' has no available weekdays"));
        assert_eq!(result.total_weekdays, 5);
    }

    #[test]
    fn test_timed_out_attempts_are_reported() {
        let config = ScheduleConfig::new(d(1, 1), d(1, 7), abc());
        let solver = CountingSolver::answering(SolveStatus::Unknown);
        let result = ToleranceSearch::new(&solver, options().with_max_tolerance(2))
            .solve(&config)
            .unwrap();

        assert!(!result.success);
        let message = result.error_message.unwrap();
        assert!(message.starts_with("Could not find feasible solution with tolerance up to 2."));
        assert!(message.contains("2 of 2 attempts stopped at the time limit"));

        // proven infeasibility carries no such remark
        let solver = CountingSolver::infeasible();
        let result = ToleranceSearch::new(&solver, options().with_max_tolerance(2))
            .solve(&config)
            .unwrap();
        assert!(!result.error_message.unwrap().contains("time limit"));
    }

    #[test]
    fn test_six_people_four_weeks() {
        let staff: Vec<Employee> = ["A", "B", "C", "D", "E", "F"]
            .into_iter()
            .map(Employee::new)
            .collect();
        let config = ScheduleConfig::new(d(1, 1), d(1, 28), staff).with_fixed(MONDAY, "A");
        let result = solve_schedule(&config, &options()).unwrap();

        assert!(result.success, "{:?}", result.error_message);
        assert_eq!(result.assignments.len(), 28);
        assert!(config
            .dates_on(MONDAY)
            .into_iter()
            .all(|date| result.assignee(date) == Some("A")));
        assert_eq!(result.employee_stats["A"].fixed_weekdays, 4);
        assert_eq!(result.remaining_weekdays, 16);
        assert_fair(&result);
    }

    #[test]
    fn test_multi_week_quota_with_vacation() {
        // B owns Tuesdays for three weeks but is away on the second one
        let staff = vec![
            Employee::new("A"),
            Employee::new("B").with_vacation(d(1, 9), d(1, 9)),
            Employee::new("C"),
            Employee::new("D"),
        ];
        let config = ScheduleConfig::new(d(1, 1), d(1, 21), staff).with_fixed(TUESDAY, "B");
        let result = solve_schedule(&config, &options()).unwrap();

        assert!(result.success, "{:?}", result.error_message);
        assert_eq!(result.assignee(d(1, 2)), Some("B"));
        assert_eq!(result.assignee(d(1, 16)), Some("B"));
        assert_ne!(result.assignee(d(1, 9)), Some("B"));

        let b = &result.employee_stats["B"];
        assert_eq!(b.fixed_weekdays, 3);
        assert_eq!(b.variable_weekdays, b.weekday_duties - 3);
        assert!(result.released_vacations.is_empty());
        assert_fair(&result);
    }

    #[test]
    fn test_saturday_only_employee_pinned_to_ceiling() {
        let mut staff = abc();
        staff[2] = Employee::new("C").with_forbidden(SUNDAY);
        let config = ScheduleConfig::new(d(1, 1), d(1, 14), staff);
        let ceiling = PoolStats::compute(&config).weekend_share().ceil;
        let result = solve_schedule(&config, &options()).unwrap();

        assert!(result.success, "{:?}", result.error_message);
        let c = &result.employee_stats["C"];
        assert_eq!(c.sunday_count, 0);
        assert_eq!(c.variable_weekends, ceiling);
        assert_eq!(c.saturday_count, ceiling);
        assert_fair(&result);
    }

    #[test]
    fn test_weekend_duties_spaced_over_window() {
        // five people, six weeks: 12 weekend days split 2/2/2/3/3
        let staff: Vec<Employee> = ["A", "B", "C", "D", "E"]
            .into_iter()
            .map(Employee::new)
            .collect();
        let config = ScheduleConfig::new(d(1, 1), d(2, 11), staff);
        let window = spacing_window(config.employees.len()) as u32;
        let result = solve_schedule(&config, &options()).unwrap();

        assert!(result.success, "{:?}", result.error_message);
        assert_fair(&result);
        let spaced = config.employees.iter().any(|e| {
            let weeks: Vec<u32> = result
                .dates_of(&e.name)
                .into_iter()
                .filter(|date| is_weekend(day_of_week(*date)))
                .map(|date| iso_week_key(date).1)
                .collect();
            weeks.len() == 2 && weeks[1] - weeks[0] >= window
        });
        assert!(spaced, "no two-weekend employee is {window} weeks apart");
    }

    #[test]
    fn test_random_rosters_hold_invariants() {
        let mut rng = SmallRng::seed_from_u64(42);
        let mut solved = 0;
        for _ in 0..8 {
            let mut staff = abc();
            if rng.random_bool(0.5) {
                staff.push(Employee::new("D"));
            }
            for e in &mut staff {
                if rng.random_bool(0.3) {
                    e.forbidden_weekdays.insert(rng.random_range(0..5));
                }
                if rng.random_bool(0.3) {
                    let day = rng.random_range(1..=14);
                    e.vacations.push(crate::models::DateRange::single(d(1, day)));
                }
            }
            let mut config = ScheduleConfig::new(d(1, 1), d(1, 14), staff)
                .with_link_friday_saturday(rng.random_bool(0.5));
            if rng.random_bool(0.5) {
                let dow = rng.random_range(0..4);
                let owner = config.employees[rng.random_range(0..3)].name.clone();
                if !config.employees.iter().any(|e| e.name == owner && e.is_forbidden(dow)) {
                    config = config.with_fixed(dow, owner);
                }
            }

            let result = solve_schedule(&config, &options()).unwrap();
            if !result.success {
                assert!(result.error_message.is_some());
                assert!(result.assignments.is_empty());
                continue;
            }
            solved += 1;

            // every date exactly once
            assert_eq!(
                result.assignments.keys().copied().collect::<Vec<_>>(),
                config.dates()
            );
            // availability on the configuration the roster was built for
            let released = &result.released_vacations;
            for (date, name) in &result.assignments {
                let e = config.employee(name).unwrap();
                assert!(!e.is_forbidden(day_of_week(*date)));
                let on_leave = e.vacations.iter().any(|v| {
                    v.contains(*date)
                        && !released
                            .iter()
                            .any(|r| r.employee == e.name && r.start == v.start && r.end == v.end)
                });
                assert!(!on_leave, "{name} on leave {date}");
            }
            // fixed days honoured where the owner is available
            for fa in &config.fixed_assignments {
                for date in config.dates_on(fa.day_of_week) {
                    let owner = config.employee(&fa.employee).unwrap();
                    if owner.is_available(date) {
                        assert_eq!(result.assignee(date), Some(fa.employee.as_str()));
                    }
                }
            }
            // link
            for (fri, sat) in config.linked_pairs() {
                assert_eq!(result.assignee(fri), result.assignee(sat));
                assert_eq!(day_of_week(fri), FRIDAY);
            }
            // weekday, weekend and total spreads within the tolerance used
            assert_fair(&result);
        }
        assert!(solved >= 3, "only {solved} of 8 random rosters solved");
    }
}
