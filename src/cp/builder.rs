//! Roster formulation for one tolerance level.
//!
//! # Variables
//! - `assign[e][d]`: employee `e` is on duty on date `d`
//! - `allowed[e][w]`: employee `e` may draw pool duties on weekday `w`
//!   (Monday–Thursday)
//!
//! # Hard constraints
//! 1. Exactly one employee per date
//! 2. Fixed weekday → its employee, unless that employee is away that date
//! 3. Unavailable dates forced to zero
//! 4. At most [`MAX_PATTERN_DAYS`] pattern weekdays per employee; a pool duty
//!    on Monday–Thursday requires the day to be allowed. Days of week with a
//!    fixed assignment are exempt.
//! 5. Linked Friday/Saturday worked by the same employee
//! 6. Extra-weekend employee works at least `H` weekend days
//! 7. Single-weekend-day employees never work their other day
//!
//! Pool counts are bounded to `[floor − 1, ceil + τ + 1]`, and the spread
//! of weekday, weekend and total pool counts across employees is capped at
//! `τ`.
//!
//! # Objective
//!
//! | Term | Weight |
//! |------|--------|
//! | pool spreads | [`SPREAD_WEIGHT`] |
//! | extra-weekend employee above / below weekday floor | [`EXTRA_ABOVE_WEIGHT`] / [`EXTRA_BELOW_WEIGHT`] |
//! | `\|N·count − pool\|` per employee and pool | [`DEVIATION_WEIGHT`] |
//! | `\|sat − sun\|` | [`SAT_SUN_WEIGHT`] |
//! | duty on two adjacent dates | [`CONSECUTIVE_WEIGHT`] |
//! | more than one weekend duty in `L` ISO weeks | [`SPACING_WEIGHT`] |
//!
//! # Reference
//! Ernst et al. (2004), "Staff scheduling and rostering: A review of
//! applications, methods and models"

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use tracing::debug;

use super::partition::WeekendPartition;
use crate::engine::{CpModel, CpSolution, CpSolver, LinearExpr, SolverConfig, VarId};
use crate::error::RosterError;
use crate::models::calendar::{
    day_of_week, is_weekday, is_weekend, iso_week_key, weekday_name, DayOfWeek, MONDAY, SATURDAY,
    SUNDAY, THURSDAY, TUESDAY, WEDNESDAY,
};
use crate::models::ScheduleConfig;
use crate::scheduler::PoolStats;

/// Weekdays subject to the pattern limit.
pub const PATTERN_DAYS: [DayOfWeek; 4] = [MONDAY, TUESDAY, WEDNESDAY, THURSDAY];
/// Distinct pattern weekdays an employee may draw pool duties on.
pub const MAX_PATTERN_DAYS: i64 = 2;

pub const SPREAD_WEIGHT: i64 = 1000;
pub const EXTRA_ABOVE_WEIGHT: i64 = 300;
pub const EXTRA_BELOW_WEIGHT: i64 = 20;
pub const DEVIATION_WEIGHT: i64 = 10;
pub const SAT_SUN_WEIGHT: i64 = 5;
pub const CONSECUTIVE_WEIGHT: i64 = 8;
pub const SPACING_WEIGHT: i64 = 4;

/// Spacing window length in ISO weeks: `clamp(N − 1, 4, 10)`.
pub fn spacing_window(num_employees: usize) -> usize {
    num_employees.saturating_sub(1).clamp(4, 10)
}

/// Whether the above-floor-weekday ⇒ at-or-below-floor-weekend coupling
/// applies.
///
/// Both pools must leave a remainder. The employees above the floor in one
/// pool and those above it in the other must be disjoint under the
/// coupling, so both remainders together may not exceed the head count.
pub fn couples_pools(pool: &PoolStats) -> bool {
    let wd = pool.weekday_share().remainder;
    let we = pool.weekend_share().remainder;
    wd > 0 && we > 0 && wd + we <= pool.num_employees
}

/// A built model plus the handles needed to read a roster back.
#[derive(Debug, Clone)]
pub struct RosterModel {
    pub model: CpModel,
    /// `assign[employee][date index]`.
    pub assign: Vec<Vec<VarId>>,
    /// Window dates; positions match the second index of `assign`.
    pub dates: Vec<NaiveDate>,
    pub tolerance: u32,
}

impl RosterModel {
    /// Index of the employee on duty at a date position.
    pub fn assignee(&self, solution: &CpSolution, date_index: usize) -> Option<usize> {
        self.assign
            .iter()
            .position(|row| solution.bool_value(row[date_index]) == Some(true))
    }
}

/// Builds roster models from a configuration and its pool figures.
///
/// Each call to [`build`](Self::build) produces an independent model;
/// nothing is carried over between tolerance levels.
///
/// # Example
/// ```no_run
/// use u_roster::cp::RosterCpBuilder;
/// use u_roster::engine::{MilpSolver, SolverConfig};
/// use u_roster::models::{Employee, ScheduleConfig};
/// use u_roster::scheduler::PoolStats;
/// use chrono::NaiveDate;
///
/// let config = ScheduleConfig::new(
///     NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 1, 7).unwrap(),
///     vec![Employee::new("A"), Employee::new("B"), Employee::new("C")],
/// );
/// let pool = PoolStats::compute(&config);
/// let builder = RosterCpBuilder::new(&config, &pool);
/// let (roster, solution) = builder
///     .solve(&MilpSolver::new(), &SolverConfig::default(), 1)
///     .unwrap();
/// ```
pub struct RosterCpBuilder<'a> {
    config: &'a ScheduleConfig,
    pool: &'a PoolStats,
}

/// Per-employee pool count variables.
struct Counts {
    wd: Vec<VarId>,
    we: Vec<VarId>,
}

impl<'a> RosterCpBuilder<'a> {
    pub fn new(config: &'a ScheduleConfig, pool: &'a PoolStats) -> Self {
        Self { config, pool }
    }

    /// Builds the model for tolerance `tolerance`.
    ///
    /// # Errors
    /// [`RosterError::UnknownEmployee`] when a fixed assignment names an
    /// employee missing from the configuration.
    pub fn build(&self, tolerance: u32) -> Result<RosterModel, RosterError> {
        let config = self.config;
        let employees = &config.employees;
        let dates = config.dates();
        let mut m = CpModel::new(format!("roster_t{tolerance}"));

        let mut fixed: BTreeMap<DayOfWeek, usize> = BTreeMap::new();
        for (dow, name) in &self.pool.fixed_days {
            let idx = config
                .employee_index(name)
                .ok_or_else(|| RosterError::UnknownEmployee(name.clone()))?;
            fixed.insert(*dow, idx);
        }

        let assign: Vec<Vec<VarId>> = employees
            .iter()
            .map(|e| {
                dates
                    .iter()
                    .map(|d| m.new_bool_var(format!("assign_{}_{d}", e.name)))
                    .collect()
            })
            .collect();
        let allowed: Vec<Vec<VarId>> = employees
            .iter()
            .map(|e| {
                PATTERN_DAYS
                    .iter()
                    .map(|w| m.new_bool_var(format!("allowed_{}_{}", e.name, weekday_name(*w))))
                    .collect()
            })
            .collect();

        // 1. one per date
        for di in 0..dates.len() {
            m.add_exactly_one(assign.iter().map(|row| row[di]));
        }

        for (di, date) in dates.iter().enumerate() {
            let dow = day_of_week(*date);

            // 2. fixed weekday, unless the owner is away
            if let Some(&owner) = fixed.get(&dow) {
                if employees[owner].is_available(*date) {
                    m.add_eq(assign[owner][di], 1);
                }
            }

            for (ei, e) in employees.iter().enumerate() {
                // 3. availability
                if !e.is_available(*date) {
                    m.add_eq(assign[ei][di], 0);
                }
                // 4. pattern days
                if let Some(slot) = PATTERN_DAYS.iter().position(|w| *w == dow) {
                    if !fixed.contains_key(&dow) {
                        m.add_implication(assign[ei][di], allowed[ei][slot]);
                    }
                }
            }
        }
        for row in &allowed {
            m.add_le(LinearExpr::sum(row.iter().copied()), MAX_PATTERN_DAYS);
        }

        // 5. Friday → Saturday link
        let start = config.start_date;
        let index_of = |d: NaiveDate| (d - start).num_days() as usize;
        let pairs: Vec<(usize, usize)> = config
            .linked_pairs()
            .into_iter()
            .map(|(fri, sat)| (index_of(fri), index_of(sat)))
            .collect();
        for row in &assign {
            for &(fri, sat) in &pairs {
                m.add_implication(row[fri], row[sat]);
                m.add_implication(row[sat], row[fri]);
            }
        }

        let positions = |keep: &dyn Fn(DayOfWeek) -> bool| -> Vec<usize> {
            (0..dates.len())
                .filter(|&di| keep(day_of_week(dates[di])))
                .collect()
        };
        let folded: BTreeSet<usize> = if self.pool.folds_linked_fridays() {
            pairs.iter().map(|&(fri, _)| fri).collect()
        } else {
            BTreeSet::new()
        };
        let weekday_idx: Vec<usize> = positions(&is_weekday)
            .into_iter()
            .filter(|di| !folded.contains(di))
            .collect();
        let weekend_idx = positions(&is_weekend);
        let saturday_idx = positions(&|w| w == SATURDAY);
        let sunday_idx = positions(&|w| w == SUNDAY);
        let sum_over = |ei: usize, idx: &[usize]| LinearExpr::sum(idx.iter().map(|&di| assign[ei][di]));

        let partition = WeekendPartition::of(employees);
        let h = self.pool.num_weeks;

        // 6. extra-weekend employee
        if let Some(x) = partition.extra {
            m.add_ge(sum_over(x, &weekend_idx), h);
        }

        // 7. single-weekend-day employees
        for &ei in &partition.saturday_only {
            m.add_eq(sum_over(ei, &sunday_idx), 0);
        }
        for &ei in &partition.sunday_only {
            m.add_eq(sum_over(ei, &saturday_idx), 0);
        }

        let tau = i64::from(tolerance);
        let wd_share = self.pool.weekday_share();
        let we_share = self.pool.weekend_share();

        let mut counts = Counts {
            wd: Vec::with_capacity(employees.len()),
            we: Vec::with_capacity(employees.len()),
        };
        for (ei, e) in employees.iter().enumerate() {
            let extra_quota = if partition.extra == Some(ei) { h } else { 0 };
            let wd_expr = sum_over(ei, &weekday_idx) - self.pool.fixed_weekday_quota(&e.name);
            let we_expr = sum_over(ei, &weekend_idx)
                - self.pool.fixed_weekend_quota(&e.name)
                - extra_quota;

            let wd = defined_var(&mut m, wd_expr, format!("wd_{}", e.name));
            let we = defined_var(&mut m, we_expr, format!("we_{}", e.name));

            m.add_linear(wd, (wd_share.floor - 1).max(0), wd_share.ceil + tau + 1);
            if partition.is_single_day(ei) {
                m.add_eq(we, we_share.ceil);
            } else {
                m.add_linear(we, (we_share.floor - 1).max(0), we_share.ceil + tau + 1);
                let balance = sum_over(ei, &saturday_idx) - sum_over(ei, &sunday_idx);
                m.add_linear(balance, -(1 + tau), 1 + tau);
            }

            counts.wd.push(wd);
            counts.we.push(we);
        }

        let wd_exprs: Vec<LinearExpr> = counts.wd.iter().map(|v| LinearExpr::from(*v)).collect();
        let we_exprs: Vec<LinearExpr> = counts.we.iter().map(|v| LinearExpr::from(*v)).collect();
        let total_exprs: Vec<LinearExpr> = counts
            .wd
            .iter()
            .zip(&counts.we)
            .map(|(wd, we)| LinearExpr::from(*wd) + LinearExpr::from(*we))
            .collect();

        let mut objective = LinearExpr::new();
        for (label, exprs) in [("wd", wd_exprs), ("we", we_exprs), ("total", total_exprs)] {
            if let Some(spread) = spread_var(&mut m, label, exprs) {
                m.add_le(spread, tau);
                objective.add_term(spread, SPREAD_WEIGHT);
            }
        }

        if couples_pools(self.pool) {
            for (ei, e) in employees.iter().enumerate() {
                let above = m.new_bool_var(format!("above_{}", e.name));
                m.add_linear_if(above.lit(), counts.wd[ei], wd_share.floor + 1, i64::MAX);
                m.add_linear_if(above.not(), counts.wd[ei], i64::MIN, wd_share.floor);
                m.add_linear_if(above.lit(), counts.we[ei], i64::MIN, we_share.floor);
            }
        }

        if let Some(x) = partition.extra {
            let wd = LinearExpr::from(counts.wd[x]);
            let over = excess_var(&mut m, wd.clone() - wd_share.floor, "extra_over");
            let under = excess_var(&mut m, -wd + wd_share.floor, "extra_under");
            objective.add_term(over, EXTRA_ABOVE_WEIGHT);
            objective.add_term(under, EXTRA_BELOW_WEIGHT);
        }

        let n = employees.len() as i64;
        for (ei, e) in employees.iter().enumerate() {
            let wd_dev = abs_var(
                &mut m,
                LinearExpr::from(counts.wd[ei]) * n - self.pool.remaining_weekdays,
                format!("wd_dev_{}", e.name),
            );
            let we_dev = abs_var(
                &mut m,
                LinearExpr::from(counts.we[ei]) * n - self.pool.remaining_weekends_effective,
                format!("we_dev_{}", e.name),
            );
            objective.add_term(wd_dev, DEVIATION_WEIGHT);
            objective.add_term(we_dev, DEVIATION_WEIGHT);

            if partition.is_unrestricted(ei) {
                let gap = abs_var(
                    &mut m,
                    sum_over(ei, &saturday_idx) - sum_over(ei, &sunday_idx),
                    format!("sat_sun_{}", e.name),
                );
                objective.add_term(gap, SAT_SUN_WEIGHT);
            }
        }

        // adjacent dates; a linked pair is one duty
        let linked: BTreeSet<(usize, usize)> = pairs.iter().copied().collect();
        for (ei, e) in employees.iter().enumerate() {
            for di in 1..dates.len() {
                if linked.contains(&(di - 1, di)) {
                    continue;
                }
                let both = m.new_bool_var(format!("consec_{}_{}", e.name, dates[di - 1]));
                m.add_bool_and(both, vec![assign[ei][di - 1].lit(), assign[ei][di].lit()]);
                objective.add_term(both, CONSECUTIVE_WEIGHT);
            }
        }

        // weekend spacing over sliding ISO-week windows
        let mut weeks: BTreeMap<(i32, u32), Vec<usize>> = BTreeMap::new();
        for &di in &weekend_idx {
            weeks.entry(iso_week_key(dates[di])).or_default().push(di);
        }
        let weeks: Vec<Vec<usize>> = weeks.into_values().collect();
        let window = spacing_window(employees.len());
        for (ei, e) in employees.iter().enumerate() {
            if partition.extra == Some(ei) {
                continue;
            }
            for start in 0..weeks.len() {
                let span = &weeks[start..(start + window).min(weeks.len())];
                if span.len() < 2 {
                    continue;
                }
                let idx: Vec<usize> = span.iter().flatten().copied().collect();
                let violation =
                    m.new_int_var(0, idx.len() as i64, format!("spacing_{}_{start}", e.name));
                m.add_ge(LinearExpr::from(violation) - sum_over(ei, &idx), -1);
                objective.add_term(violation, SPACING_WEIGHT);
            }
        }

        m.minimize(objective);
        debug!(
            tolerance,
            vars = m.var_count(),
            constraints = m.constraint_count(),
            "roster model built"
        );

        Ok(RosterModel {
            model: m,
            assign,
            dates,
            tolerance,
        })
    }

    /// Builds and solves the model for one tolerance level.
    pub fn solve<S: CpSolver>(
        &self,
        solver: &S,
        solver_config: &SolverConfig,
        tolerance: u32,
    ) -> Result<(RosterModel, CpSolution), RosterError> {
        let roster = self.build(tolerance)?;
        let solution = solver.solve(&roster.model, solver_config);
        Ok((roster, solution))
    }
}

/// A fresh variable equal to `expr`, with the expression's full range as
/// domain.
fn defined_var(m: &mut CpModel, expr: LinearExpr, name: String) -> VarId {
    let (lo, hi) = m.bounds(&expr);
    let v = m.new_int_var(lo, hi, name);
    m.add_eq(expr - LinearExpr::from(v), 0);
    v
}

/// `|expr|` as a fresh variable.
fn abs_var(m: &mut CpModel, expr: LinearExpr, name: String) -> VarId {
    let (lo, hi) = m.bounds(&expr);
    let v = m.new_int_var(0, lo.abs().max(hi.abs()), name);
    m.add_abs_equality(v, expr);
    v
}

/// A variable at least `max(0, expr)`; minimisation makes it exact.
fn excess_var(m: &mut CpModel, expr: LinearExpr, name: &str) -> VarId {
    let (_, hi) = m.bounds(&expr);
    let v = m.new_int_var(0, hi.max(0), name);
    m.add_ge(LinearExpr::from(v) - expr, 0);
    v
}

/// `max(exprs) − min(exprs)` as a fresh variable; `None` for an empty list.
fn spread_var(m: &mut CpModel, label: &str, exprs: Vec<LinearExpr>) -> Option<VarId> {
    if exprs.is_empty() {
        return None;
    }
    let (lo, hi) = exprs.iter().fold((i64::MAX, i64::MIN), |(lo, hi), e| {
        let (a, b) = m.bounds(e);
        (lo.min(a), hi.max(b))
    });
    let max = m.new_int_var(lo, hi, format!("{label}_max"));
    let min = m.new_int_var(lo, hi, format!("{label}_min"));
    m.add_max_equality(max, exprs.clone());
    m.add_min_equality(min, exprs);
    let spread = m.new_int_var(0, hi - lo, format!("{label}_spread"));
    m.add_eq(
        LinearExpr::from(spread) - LinearExpr::from(max) + LinearExpr::from(min),
        0,
    );
    Some(spread)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{MilpSolver, SolveStatus};
    use crate::models::{Employee, FixedAssignment};
    use std::time::Duration;

    fn d(m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, m, day).unwrap()
    }

    fn week(employees: Vec<Employee>) -> ScheduleConfig {
        ScheduleConfig::new(d(1, 1), d(1, 7), employees)
    }

    fn abc() -> Vec<Employee> {
        vec![Employee::new("A"), Employee::new("B"), Employee::new("C")]
    }

    fn solve(config: &ScheduleConfig, tolerance: u32) -> (RosterModel, CpSolution) {
        let pool = PoolStats::compute(config);
        let solver_config = SolverConfig::default().with_time_limit(Duration::from_secs(60));
        RosterCpBuilder::new(config, &pool)
            .solve(&MilpSolver::new(), &solver_config, tolerance)
            .unwrap()
    }

    fn roster(model: &RosterModel, solution: &CpSolution) -> Vec<usize> {
        (0..model.dates.len())
            .map(|di| model.assignee(solution, di).unwrap())
            .collect()
    }

    #[test]
    fn test_model_dimensions() {
        let config = week(abc());
        let pool = PoolStats::compute(&config);
        let built = RosterCpBuilder::new(&config, &pool).build(1).unwrap();

        assert_eq!(built.dates.len(), 7);
        assert_eq!(built.assign.len(), 3);
        assert!(built.assign.iter().all(|row| row.len() == 7));
        // assign vars come first, then the pattern flags
        assert_eq!(built.assign[2][6], VarId(20));
        assert!(built.model.var(VarId(21)).name.starts_with("allowed_A"));
        assert!(built.model.var_count() > 3 * 7 + 3 * 4);
        assert!(!built.model.objective().is_constant());
        assert_eq!(built.tolerance, 1);
    }

    #[test]
    fn test_unknown_fixed_employee_is_contract_error() {
        let mut config = week(abc());
        config.fixed_assignments.push(FixedAssignment::new(MONDAY, "Ghost"));
        let pool = PoolStats::compute(&config);
        let err = RosterCpBuilder::new(&config, &pool).build(1).unwrap_err();
        assert_eq!(err, RosterError::UnknownEmployee("Ghost".into()));
    }

    #[test]
    fn test_builds_are_independent() {
        let config = week(abc());
        let pool = PoolStats::compute(&config);
        let builder = RosterCpBuilder::new(&config, &pool);
        let a = builder.build(2).unwrap();
        let b = builder.build(2).unwrap();
        assert_eq!(a.model.var_count(), b.model.var_count());
        assert_eq!(a.model.constraints(), b.model.constraints());
    }

    #[test]
    fn test_spacing_window() {
        assert_eq!(spacing_window(1), 4);
        assert_eq!(spacing_window(3), 4);
        assert_eq!(spacing_window(7), 6);
        assert_eq!(spacing_window(30), 10);
    }

    #[test]
    fn test_pool_coupling_gate() {
        // 5 weekdays / 3 and 2 weekend days / 3: remainders 2 + 2 > 3
        let pool = PoolStats::compute(&week(abc()));
        assert!(!couples_pools(&pool));

        // 4 people: remainders 1 + 2 ≤ 4
        let mut staff = abc();
        staff.push(Employee::new("D"));
        let pool = PoolStats::compute(&week(staff.clone()));
        assert!(couples_pools(&pool));

        // 5 people: weekdays divide evenly
        staff.push(Employee::new("E"));
        let pool = PoolStats::compute(&week(staff));
        assert!(!couples_pools(&pool));
    }

    #[test]
    fn test_pool_coupling_at_every_tolerance() {
        let mut staff = abc();
        staff.push(Employee::new("D"));
        let config = week(staff);
        let pool = PoolStats::compute(&config);
        let builder = RosterCpBuilder::new(&config, &pool);
        let coupled = |m: &RosterModel| {
            m.model
                .vars()
                .iter()
                .filter(|v| v.name.starts_with("above_"))
                .count()
        };
        assert_eq!(coupled(&builder.build(1).unwrap()), 4);
        assert_eq!(coupled(&builder.build(3).unwrap()), 4);
    }

    #[test]
    fn test_coupled_week_caps_total_spread() {
        // 4 people: weekday floor 1 remainder 1, weekend floor 0 remainder 2
        let mut staff = abc();
        staff.push(Employee::new("D"));
        let config = week(staff);
        let (built, sol) = solve(&config, 1);
        assert!(sol.is_solution_found());

        let who = roster(&built, &sol);
        let mut wd = [0i64; 4];
        let mut we = [0i64; 4];
        for (di, e) in who.iter().enumerate() {
            if di < 5 {
                wd[*e] += 1;
            } else {
                we[*e] += 1;
            }
        }
        for e in 0..4 {
            if wd[e] >= 2 {
                assert_eq!(we[e], 0, "above the weekday floor and on a weekend");
            }
        }
        let total: Vec<i64> = (0..4).map(|e| wd[e] + we[e]).collect();
        assert!(total.iter().max().unwrap() - total.iter().min().unwrap() <= 1);
    }

    #[test]
    fn test_solved_week_is_fair() {
        let config = week(abc());
        let (built, sol) = solve(&config, 1);
        assert_eq!(sol.status, SolveStatus::Optimal);

        let who = roster(&built, &sol);
        let mut wd = [0i64; 3];
        let mut we = [0i64; 3];
        for (di, e) in who.iter().enumerate() {
            if di < 5 {
                wd[*e] += 1;
            } else {
                we[*e] += 1;
            }
        }
        assert!(wd.iter().max().unwrap() - wd.iter().min().unwrap() <= 1);
        assert!(we.iter().max().unwrap() - we.iter().min().unwrap() <= 1);
    }

    #[test]
    fn test_vacation_replaces_fixed_day() {
        let mut staff = abc();
        staff[0] = Employee::new("A").with_vacation(d(1, 1), d(1, 1));
        let config = week(staff).with_fixed(MONDAY, "A");
        let (built, sol) = solve(&config, 1);
        assert!(sol.is_solution_found());

        let who = roster(&built, &sol);
        assert_ne!(who[0], 0, "A is away on Monday");
    }

    #[test]
    fn test_fixed_day_and_forbidden_day() {
        let mut staff = abc();
        staff[1] = Employee::new("B").with_forbidden(WEDNESDAY);
        let config = week(staff).with_fixed(TUESDAY, "C");
        let (built, sol) = solve(&config, 2);
        assert!(sol.is_solution_found());

        let who = roster(&built, &sol);
        assert_eq!(who[1], 2);
        assert_ne!(who[2], 1);
    }

    #[test]
    fn test_linked_friday_saturday() {
        let config = week(abc()).with_link_friday_saturday(true);
        let (built, sol) = solve(&config, 2);
        assert!(sol.is_solution_found());

        let who = roster(&built, &sol);
        assert_eq!(who[4], who[5]);
    }

    #[test]
    fn test_single_weekend_day_employee() {
        let mut staff = abc();
        staff[2] = Employee::new("C").with_forbidden(SUNDAY);
        let config = week(staff);
        let (built, sol) = solve(&config, 2);
        assert!(sol.is_solution_found());

        let who = roster(&built, &sol);
        assert_ne!(who[6], 2);
        // pinned to the weekend ceiling of 1
        assert_eq!(who[5], 2);
    }

    #[test]
    fn test_extra_weekend_employee() {
        let mut staff = abc();
        staff[0] = Employee::new("A").with_extra_weekend();
        let config = ScheduleConfig::new(d(1, 1), d(1, 14), staff);
        let (built, sol) = solve(&config, 2);
        assert!(sol.is_solution_found());

        let who = roster(&built, &sol);
        let weekend_days = built
            .dates
            .iter()
            .zip(&who)
            .filter(|(date, e)| **e == 0 && is_weekend(day_of_week(**date)))
            .count();
        assert!(weekend_days >= 2);
    }
}
