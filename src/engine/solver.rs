//! Solver interface: configuration, status, solution read-back.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::model::{CpModel, VarId};

/// Outcome of a solve call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SolveStatus {
    /// Proven optimal assignment found.
    Optimal,
    /// An assignment satisfying every constraint, optimality not proven.
    Feasible,
    /// Proven that no assignment satisfies the constraints.
    Infeasible,
    /// Gave up (time limit, engine error) without a verdict.
    Unknown,
}

impl SolveStatus {
    /// Whether values can be read back.
    #[inline]
    pub fn is_solution_found(self) -> bool {
        matches!(self, SolveStatus::Optimal | SolveStatus::Feasible)
    }
}

/// Per-call solver parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverConfig {
    /// Wall-clock limit for this call.
    pub time_limit: Duration,
    /// Parallelism hint; backends may ignore it.
    pub workers: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            time_limit: Duration::from_secs(60),
            workers: 4,
        }
    }
}

impl SolverConfig {
    pub fn with_time_limit(mut self, time_limit: Duration) -> Self {
        self.time_limit = time_limit;
        self
    }

    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }
}

/// Result of a solve call.
#[derive(Debug, Clone, PartialEq)]
pub struct CpSolution {
    pub status: SolveStatus,
    /// One value per model variable when a solution was found, else empty.
    pub values: Vec<i64>,
    /// Objective value of the returned assignment.
    pub objective: Option<i64>,
    pub wall_time: Duration,
}

impl CpSolution {
    /// A solution without values.
    pub fn without_values(status: SolveStatus, wall_time: Duration) -> Self {
        Self {
            status,
            values: Vec::new(),
            objective: None,
            wall_time,
        }
    }

    pub fn is_solution_found(&self) -> bool {
        self.status.is_solution_found() && !self.values.is_empty()
    }

    /// Value assigned to a variable, if a solution is present.
    pub fn value(&self, var: VarId) -> Option<i64> {
        self.values.get(var.index()).copied()
    }

    /// Boolean reading of a variable (`value != 0`).
    pub fn bool_value(&self, var: VarId) -> Option<bool> {
        self.value(var).map(|v| v != 0)
    }
}

/// A constraint solver backend.
///
/// Implementations must return values for every model variable whenever
/// the status is `Optimal` or `Feasible`.
pub trait CpSolver {
    fn solve(&self, model: &CpModel, config: &SolverConfig) -> CpSolution;
}

impl<S: CpSolver + ?Sized> CpSolver for &S {
    fn solve(&self, model: &CpModel, config: &SolverConfig) -> CpSolution {
        (**self).solve(model, config)
    }
}
