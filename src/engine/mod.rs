//! Constraint-optimization engine interface.
//!
//! The roster formulation talks to solvers only through [`CpModel`] and
//! the [`CpSolver`] trait, so any backend honouring the contract can be
//! plugged in. [`MilpSolver`] is the bundled backend.
//!
//! # Contract
//!
//! - Boolean and bounded-integer variables
//! - Linear (in)equalities over integer-weighted sums, optionally enforced
//!   by a literal
//! - Implication, reified AND/OR, max/min/abs equalities
//! - One minimisation objective
//! - `solve` with a wall-clock limit and a worker hint, returning
//!   `Optimal | Feasible | Infeasible | Unknown` plus values

pub mod linearize;
mod milp;
mod model;
mod solver;

pub use milp::MilpSolver;
pub use model::{CpConstraint, CpModel, IntVar, LinearExpr, Literal, VarId};
pub use solver::{CpSolution, CpSolver, SolveStatus, SolverConfig};
