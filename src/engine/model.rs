//! Constraint-optimization model.
//!
//! A solver-agnostic description of a model over bounded integer
//! variables (booleans are integers in `[0, 1]`), integer-weighted linear
//! expressions and a small set of constraint kinds. Backends translate it
//! into whatever their engine understands.

use std::ops::{Add, Mul, Neg, Sub};

/// Handle of a decision variable in a [`CpModel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VarId(pub(crate) usize);

impl VarId {
    /// Position of the variable in the model.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }

    /// The positive literal of a boolean variable.
    #[inline]
    pub fn lit(self) -> Literal {
        Literal {
            var: self,
            negated: false,
        }
    }

    /// The negated literal of a boolean variable.
    #[inline]
    pub fn not(self) -> Literal {
        Literal {
            var: self,
            negated: true,
        }
    }
}

/// A boolean variable or its negation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Literal {
    pub var: VarId,
    pub negated: bool,
}

impl Literal {
    /// The literal as a 0/1 expression (`x` or `1 - x`).
    pub fn to_expr(self) -> LinearExpr {
        if self.negated {
            LinearExpr::constant(1) - LinearExpr::from(self.var)
        } else {
            LinearExpr::from(self.var)
        }
    }
}

impl From<VarId> for Literal {
    fn from(var: VarId) -> Self {
        var.lit()
    }
}

/// Declared domain of a variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntVar {
    pub name: String,
    pub lb: i64,
    pub ub: i64,
    pub is_bool: bool,
}

/// `Σ coef·var + constant` with integer coefficients.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinearExpr {
    pub terms: Vec<(VarId, i64)>,
    pub constant: i64,
}

impl LinearExpr {
    /// The zero expression.
    pub fn new() -> Self {
        Self::default()
    }

    /// A constant expression.
    pub fn constant(value: i64) -> Self {
        Self {
            terms: Vec::new(),
            constant: value,
        }
    }

    /// `coef · var`.
    pub fn term(var: VarId, coef: i64) -> Self {
        Self {
            terms: vec![(var, coef)],
            constant: 0,
        }
    }

    /// Unweighted sum of variables.
    pub fn sum<I: IntoIterator<Item = VarId>>(vars: I) -> Self {
        Self {
            terms: vars.into_iter().map(|v| (v, 1)).collect(),
            constant: 0,
        }
    }

    /// Adds `coef · var` in place.
    pub fn add_term(&mut self, var: VarId, coef: i64) {
        if coef != 0 {
            self.terms.push((var, coef));
        }
    }

    /// Whether the expression has no variable terms.
    pub fn is_constant(&self) -> bool {
        self.terms.iter().all(|(_, c)| *c == 0)
    }
}

impl From<VarId> for LinearExpr {
    fn from(var: VarId) -> Self {
        Self::term(var, 1)
    }
}

impl Add for LinearExpr {
    type Output = LinearExpr;

    fn add(mut self, rhs: LinearExpr) -> LinearExpr {
        self.terms.extend(rhs.terms);
        self.constant += rhs.constant;
        self
    }
}

impl Sub for LinearExpr {
    type Output = LinearExpr;

    fn sub(self, rhs: LinearExpr) -> LinearExpr {
        self + (-rhs)
    }
}

impl Neg for LinearExpr {
    type Output = LinearExpr;

    fn neg(self) -> LinearExpr {
        self * -1
    }
}

impl Mul<i64> for LinearExpr {
    type Output = LinearExpr;

    fn mul(mut self, k: i64) -> LinearExpr {
        for (_, c) in &mut self.terms {
            *c *= k;
        }
        self.constant *= k;
        self
    }
}

impl Add<i64> for LinearExpr {
    type Output = LinearExpr;

    fn add(mut self, k: i64) -> LinearExpr {
        self.constant += k;
        self
    }
}

impl Sub<i64> for LinearExpr {
    type Output = LinearExpr;

    fn sub(mut self, k: i64) -> LinearExpr {
        self.constant -= k;
        self
    }
}

/// Constraint kinds understood by every backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CpConstraint {
    /// `lb ≤ expr ≤ ub`, only required when every `enforce` literal is true.
    Linear {
        expr: LinearExpr,
        lb: i64,
        ub: i64,
        enforce: Vec<Literal>,
    },
    /// `a ⇒ b`.
    Implication { a: Literal, b: Literal },
    /// `target ⇔ (l₁ ∧ … ∧ lₖ)`.
    BoolAnd { target: VarId, operands: Vec<Literal> },
    /// `target ⇔ (l₁ ∨ … ∨ lₖ)`.
    BoolOr { target: VarId, operands: Vec<Literal> },
    /// `target = max(exprs)`.
    MaxEquality { target: VarId, exprs: Vec<LinearExpr> },
    /// `target = min(exprs)`.
    MinEquality { target: VarId, exprs: Vec<LinearExpr> },
    /// `target = |expr|`.
    AbsEquality { target: VarId, expr: LinearExpr },
}

/// A constraint-optimization model with a minimisation objective.
#[derive(Debug, Clone, Default)]
pub struct CpModel {
    name: String,
    vars: Vec<IntVar>,
    constraints: Vec<CpConstraint>,
    objective: LinearExpr,
}

impl CpModel {
    /// Creates an empty model.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Creates a boolean variable.
    pub fn new_bool_var(&mut self, name: impl Into<String>) -> VarId {
        self.push_var(IntVar {
            name: name.into(),
            lb: 0,
            ub: 1,
            is_bool: true,
        })
    }

    /// Creates an integer variable with domain `[lb, ub]`.
    pub fn new_int_var(&mut self, lb: i64, ub: i64, name: impl Into<String>) -> VarId {
        debug_assert!(lb <= ub, "empty domain [{lb}, {ub}]");
        self.push_var(IntVar {
            name: name.into(),
            lb,
            ub,
            is_bool: false,
        })
    }

    fn push_var(&mut self, var: IntVar) -> VarId {
        self.vars.push(var);
        VarId(self.vars.len() - 1)
    }

    /// `lb ≤ expr ≤ ub`.
    pub fn add_linear(&mut self, expr: impl Into<LinearExpr>, lb: i64, ub: i64) {
        self.constraints.push(CpConstraint::Linear {
            expr: expr.into(),
            lb,
            ub,
            enforce: Vec::new(),
        });
    }

    /// `expr == value`.
    pub fn add_eq(&mut self, expr: impl Into<LinearExpr>, value: i64) {
        self.add_linear(expr, value, value);
    }

    /// `expr ≤ value`.
    pub fn add_le(&mut self, expr: impl Into<LinearExpr>, value: i64) {
        self.add_linear(expr, i64::MIN, value);
    }

    /// `expr ≥ value`.
    pub fn add_ge(&mut self, expr: impl Into<LinearExpr>, value: i64) {
        self.add_linear(expr, value, i64::MAX);
    }

    /// `lb ≤ expr ≤ ub`, enforced only when `enforce` holds.
    pub fn add_linear_if(
        &mut self,
        enforce: Literal,
        expr: impl Into<LinearExpr>,
        lb: i64,
        ub: i64,
    ) {
        self.constraints.push(CpConstraint::Linear {
            expr: expr.into(),
            lb,
            ub,
            enforce: vec![enforce],
        });
    }

    /// Exactly one of the boolean variables is true.
    pub fn add_exactly_one<I: IntoIterator<Item = VarId>>(&mut self, vars: I) {
        self.add_eq(LinearExpr::sum(vars), 1);
    }

    /// `a ⇒ b`.
    pub fn add_implication(&mut self, a: impl Into<Literal>, b: impl Into<Literal>) {
        self.constraints.push(CpConstraint::Implication {
            a: a.into(),
            b: b.into(),
        });
    }

    /// `target ⇔ AND(operands)`.
    pub fn add_bool_and(&mut self, target: VarId, operands: Vec<Literal>) {
        self.constraints
            .push(CpConstraint::BoolAnd { target, operands });
    }

    /// `target ⇔ OR(operands)`.
    pub fn add_bool_or(&mut self, target: VarId, operands: Vec<Literal>) {
        self.constraints.push(CpConstraint::BoolOr { target, operands });
    }

    /// `target = max(exprs)`.
    pub fn add_max_equality(&mut self, target: VarId, exprs: Vec<LinearExpr>) {
        self.constraints
            .push(CpConstraint::MaxEquality { target, exprs });
    }

    /// `target = min(exprs)`.
    pub fn add_min_equality(&mut self, target: VarId, exprs: Vec<LinearExpr>) {
        self.constraints
            .push(CpConstraint::MinEquality { target, exprs });
    }

    /// `target = |expr|`.
    pub fn add_abs_equality(&mut self, target: VarId, expr: impl Into<LinearExpr>) {
        self.constraints.push(CpConstraint::AbsEquality {
            target,
            expr: expr.into(),
        });
    }

    /// Sets the expression to minimise, replacing any previous objective.
    pub fn minimize(&mut self, objective: LinearExpr) {
        self.objective = objective;
    }

    pub fn objective(&self) -> &LinearExpr {
        &self.objective
    }

    pub fn vars(&self) -> &[IntVar] {
        &self.vars
    }

    pub fn var(&self, id: VarId) -> &IntVar {
        &self.vars[id.0]
    }

    pub fn constraints(&self) -> &[CpConstraint] {
        &self.constraints
    }

    pub fn var_count(&self) -> usize {
        self.vars.len()
    }

    pub fn constraint_count(&self) -> usize {
        self.constraints.len()
    }

    /// Smallest and largest value an expression can take given the
    /// variable domains.
    pub fn bounds(&self, expr: &LinearExpr) -> (i64, i64) {
        expr.terms
            .iter()
            .fold((expr.constant, expr.constant), |(lo, hi), (v, c)| {
                let var = &self.vars[v.0];
                let (a, b) = (c * var.lb, c * var.ub);
                (lo + a.min(b), hi + a.max(b))
            })
    }

    /// Evaluates an expression under a full assignment of values.
    pub fn evaluate(expr: &LinearExpr, values: &[i64]) -> i64 {
        expr.terms
            .iter()
            .map(|(v, c)| c * values[v.0])
            .sum::<i64>()
            + expr.constant
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expr_arithmetic() {
        let mut m = CpModel::new("t");
        let x = m.new_int_var(0, 5, "x");
        let y = m.new_int_var(-2, 3, "y");
        let e = (LinearExpr::from(x) * 2 - LinearExpr::from(y)) + 4;
        assert_eq!(e.constant, 4);
        assert_eq!(e.terms, vec![(x, 2), (y, -1)]);
        assert_eq!(CpModel::evaluate(&e, &[3, 1]), 9);
        // x in [0,5] → 2x in [0,10]; -y in [-3,2]
        assert_eq!(m.bounds(&e), (1, 16));
    }

    #[test]
    fn test_literal_to_expr() {
        let mut m = CpModel::new("t");
        let b = m.new_bool_var("b");
        assert_eq!(CpModel::evaluate(&b.lit().to_expr(), &[1]), 1);
        assert_eq!(CpModel::evaluate(&b.not().to_expr(), &[1]), 0);
        assert_eq!(CpModel::evaluate(&b.not().to_expr(), &[0]), 1);
    }

    #[test]
    fn test_model_counts() {
        let mut m = CpModel::new("counts");
        let a = m.new_bool_var("a");
        let b = m.new_bool_var("b");
        m.add_exactly_one([a, b]);
        m.add_implication(a, b.not());
        m.minimize(LinearExpr::from(a));
        assert_eq!(m.var_count(), 2);
        assert_eq!(m.constraint_count(), 2);
        assert!(m.var(a).is_bool);
        assert_eq!(m.name(), "counts");
        assert!(!m.objective().is_constant());
    }
}
