//! Mixed-integer backend on top of `good_lp`.
//!
//! The model is lowered with [`linearize`] and solved by HiGHS on the
//! calling thread. The attempt's wall-clock limit is handed to HiGHS as its
//! own time limit, so a call always returns before the next one starts.
//! Values HiGHS reports are rounded and checked against the linearized
//! model; anything that fails the check is discarded as `Unknown`.

use std::time::Instant;

use good_lp::solvers::highs::highs;
use good_lp::solvers::WithTimeLimit;
use good_lp::{
    constraint, Constraint, Expression, ProblemVariables, ResolutionError, Solution, SolverModel,
    Variable,
};
use tracing::{debug, warn};

use super::linearize::{linearize, LinearProgram};
use super::model::{CpModel, LinearExpr};
use super::solver::{CpSolution, CpSolver, SolveStatus, SolverConfig};

/// [`CpSolver`] backed by `good_lp` + HiGHS.
#[derive(Debug, Clone, Copy, Default)]
pub struct MilpSolver;

impl MilpSolver {
    pub fn new() -> Self {
        Self
    }
}

impl CpSolver for MilpSolver {
    fn solve(&self, model: &CpModel, config: &SolverConfig) -> CpSolution {
        let started = Instant::now();
        let program = linearize(model);
        debug!(
            model = model.name(),
            vars = program.vars.len(),
            aux = program.aux_count(),
            rows = program.rows.len(),
            workers = config.workers,
            limit_ms = config.time_limit.as_millis() as u64,
            "solving linearized model"
        );

        let outcome = run(&program, config);
        let wall_time = started.elapsed();
        let hit_limit = wall_time >= config.time_limit;

        match outcome {
            Ok(values) if program.is_satisfied(&values) => {
                let objective = CpModel::evaluate(&program.objective, &values);
                let mut values = values;
                values.truncate(program.original_vars);
                if hit_limit {
                    warn!(
                        model = model.name(),
                        "time limit reached, keeping best roster found"
                    );
                }
                CpSolution {
                    status: if hit_limit {
                        SolveStatus::Feasible
                    } else {
                        SolveStatus::Optimal
                    },
                    values,
                    objective: Some(objective),
                    wall_time,
                }
            }
            Ok(_) => {
                if hit_limit {
                    warn!(
                        model = model.name(),
                        limit_ms = config.time_limit.as_millis() as u64,
                        "time limit reached without a feasible assignment"
                    );
                } else {
                    warn!(
                        model = model.name(),
                        "rounded solution violates the model, discarding"
                    );
                }
                CpSolution::without_values(SolveStatus::Unknown, wall_time)
            }
            Err(status) => CpSolution::without_values(status, wall_time),
        }
    }
}

/// Solves a linear program, returning integral values for every variable.
fn run(program: &LinearProgram, config: &SolverConfig) -> Result<Vec<i64>, SolveStatus> {
    let mut problem_vars = ProblemVariables::new();
    let vars: Vec<Variable> = program
        .vars
        .iter()
        .map(|v| {
            problem_vars.add(
                good_lp::variable()
                    .integer()
                    .min(v.lb as f64)
                    .max(v.ub as f64),
            )
        })
        .collect();

    let objective = to_expression(&program.objective, &vars);
    let mut problem = problem_vars
        .minimise(objective)
        .using(highs)
        .with_time_limit(config.time_limit.as_secs_f64());
    for row in &program.rows {
        for c in to_constraints(row.lb, row.ub, &row.expr, &vars) {
            problem = problem.with(c);
        }
    }

    match problem.solve() {
        Ok(solution) => Ok(vars
            .iter()
            .map(|v| solution.value(*v).round() as i64)
            .collect()),
        Err(ResolutionError::Infeasible) => Err(SolveStatus::Infeasible),
        Err(err) => {
            debug!(%err, "solver returned without a verdict");
            Err(SolveStatus::Unknown)
        }
    }
}

/// Variable part of an expression; the constant is moved to the bounds.
fn to_expression(expr: &LinearExpr, vars: &[Variable]) -> Expression {
    let mut out = Expression::from(0.0);
    for (v, c) in &expr.terms {
        out += Expression::from(vars[v.index()]) * (*c as f64);
    }
    out
}

fn to_constraints(
    lb: Option<i64>,
    ub: Option<i64>,
    expr: &LinearExpr,
    vars: &[Variable],
) -> Vec<Constraint> {
    let lhs = to_expression(expr, vars);
    let shift = expr.constant;
    match (lb, ub) {
        (Some(lo), Some(hi)) if lo == hi => {
            let rhs = (lo - shift) as f64;
            vec![constraint!(lhs == rhs)]
        }
        (lo, hi) => {
            let mut out = Vec::with_capacity(2);
            if let Some(lo) = lo {
                let rhs = (lo - shift) as f64;
                let e = lhs.clone();
                out.push(constraint!(e >= rhs));
            }
            if let Some(hi) = hi {
                let rhs = (hi - shift) as f64;
                let e = lhs.clone();
                out.push(constraint!(e <= rhs));
            }
            out
        }
    }
}
