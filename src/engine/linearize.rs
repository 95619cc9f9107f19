//! Lowering of a [`CpModel`] into a pure integer linear program.
//!
//! Logical and non-linear constraints are encoded with auxiliary binaries
//! and big-M rows whose constants come from the variable domains, so the
//! encodings are exact for any bounded model.
//!
//! | Constraint | Encoding |
//! |------------|----------|
//! | enforced linear | bound relaxed by `M · Σ(1 − lᵢ)` |
//! | `a ⇒ b` | `b − a ≥ 0` |
//! | `t ⇔ ∧lᵢ` | `t ≤ lᵢ`, `t ≥ Σlᵢ − (k − 1)` |
//! | `t ⇔ ∨lᵢ` | `t ≥ lᵢ`, `t ≤ Σlᵢ` |
//! | `t = max eᵢ` | `t ≥ eᵢ`, `t ≤ eᵢ + Mᵢ(1 − zᵢ)`, `Σzᵢ = 1` |
//! | `t = min eᵢ` | mirror of max |
//! | `t = \|e\|` | `t ≥ ±e`, selector binary for the active side |
//!
//! # Reference
//! Williams (2013), "Model Building in Mathematical Programming", Ch. 9

use super::model::{CpConstraint, CpModel, IntVar, LinearExpr, Literal, VarId};

/// One row `lb ≤ expr ≤ ub` (constant folded into `expr`); `None` = unbounded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub expr: LinearExpr,
    pub lb: Option<i64>,
    pub ub: Option<i64>,
}

/// An integer linear program equivalent to a [`CpModel`].
///
/// The first `original_vars` variables are the model's own, in the same
/// order, so solution values map back by index.
#[derive(Debug, Clone)]
pub struct LinearProgram {
    pub vars: Vec<IntVar>,
    pub rows: Vec<Row>,
    pub objective: LinearExpr,
    pub original_vars: usize,
}

impl LinearProgram {
    /// Whether a full assignment (including auxiliaries) satisfies every
    /// row and every variable domain.
    pub fn is_satisfied(&self, values: &[i64]) -> bool {
        let in_domain = self
            .vars
            .iter()
            .zip(values)
            .all(|(v, x)| v.lb <= *x && *x <= v.ub);
        in_domain
            && self.rows.iter().all(|row| {
                let value = CpModel::evaluate(&row.expr, values);
                row.lb.map_or(true, |lb| value >= lb) && row.ub.map_or(true, |ub| value <= ub)
            })
    }

    pub fn aux_count(&self) -> usize {
        self.vars.len() - self.original_vars
    }
}

/// Lowers a model into an integer linear program.
pub fn linearize(model: &CpModel) -> LinearProgram {
    let mut lp = Lowering {
        vars: model.vars().to_vec(),
        rows: Vec::new(),
    };

    for constraint in model.constraints() {
        match constraint {
            CpConstraint::Linear {
                expr,
                lb,
                ub,
                enforce,
            } => lp.linear(expr, *lb, *ub, enforce),
            CpConstraint::Implication { a, b } => {
                lp.push(b.to_expr() - a.to_expr(), Some(0), None);
            }
            CpConstraint::BoolAnd { target, operands } => lp.bool_and(*target, operands),
            CpConstraint::BoolOr { target, operands } => lp.bool_or(*target, operands),
            CpConstraint::MaxEquality { target, exprs } => lp.extremum(*target, exprs, true),
            CpConstraint::MinEquality { target, exprs } => lp.extremum(*target, exprs, false),
            CpConstraint::AbsEquality { target, expr } => lp.abs(*target, expr),
        }
    }

    LinearProgram {
        original_vars: model.var_count(),
        vars: lp.vars,
        rows: lp.rows,
        objective: model.objective().clone(),
    }
}

struct Lowering {
    vars: Vec<IntVar>,
    rows: Vec<Row>,
}

impl Lowering {
    fn bounds(&self, expr: &LinearExpr) -> (i64, i64) {
        expr.terms
            .iter()
            .fold((expr.constant, expr.constant), |(lo, hi), (v, c)| {
                let var = &self.vars[v.index()];
                let (a, b) = (c * var.lb, c * var.ub);
                (lo + a.min(b), hi + a.max(b))
            })
    }

    fn aux_bool(&mut self, name: String) -> VarId {
        self.vars.push(IntVar {
            name,
            lb: 0,
            ub: 1,
            is_bool: true,
        });
        VarId(self.vars.len() - 1)
    }

    fn push(&mut self, expr: LinearExpr, lb: Option<i64>, ub: Option<i64>) {
        if lb.is_some() || ub.is_some() {
            self.rows.push(Row { expr, lb, ub });
        }
    }

    fn linear(&mut self, expr: &LinearExpr, lb: i64, ub: i64, enforce: &[Literal]) {
        let (emin, emax) = self.bounds(expr);
        let lower = (lb > emin).then_some(lb);
        let upper = (ub < emax).then_some(ub);

        if enforce.is_empty() {
            self.push(expr.clone(), lower, upper);
            return;
        }

        // slack = Σ(1 − lᵢ): zero exactly when every literal holds
        let slack = enforce
            .iter()
            .fold(LinearExpr::constant(enforce.len() as i64), |acc, l| {
                acc - l.to_expr()
            });
        if let Some(lb) = lower {
            let m = lb - emin;
            self.push(expr.clone() + slack.clone() * m, Some(lb), None);
        }
        if let Some(ub) = upper {
            let m = emax - ub;
            self.push(expr.clone() - slack * m, None, Some(ub));
        }
    }

    fn bool_and(&mut self, target: VarId, operands: &[Literal]) {
        let t = LinearExpr::from(target);
        if operands.is_empty() {
            self.push(t, Some(1), Some(1));
            return;
        }
        let mut sum = LinearExpr::new();
        for op in operands {
            self.push(t.clone() - op.to_expr(), None, Some(0));
            sum = sum + op.to_expr();
        }
        self.push(t - sum, Some(1 - operands.len() as i64), None);
    }

    fn bool_or(&mut self, target: VarId, operands: &[Literal]) {
        let t = LinearExpr::from(target);
        if operands.is_empty() {
            self.push(t, Some(0), Some(0));
            return;
        }
        let mut sum = LinearExpr::new();
        for op in operands {
            self.push(t.clone() - op.to_expr(), Some(0), None);
            sum = sum + op.to_expr();
        }
        self.push(t - sum, None, Some(0));
    }

    /// `target = max(exprs)` when `is_max`, else `target = min(exprs)`.
    fn extremum(&mut self, target: VarId, exprs: &[LinearExpr], is_max: bool) {
        let t = LinearExpr::from(target);
        if exprs.len() == 1 {
            self.push(t - exprs[0].clone(), Some(0), Some(0));
            return;
        }
        let (t_lb, t_ub) = (self.vars[target.index()].lb, self.vars[target.index()].ub);
        let tag = if is_max { "max" } else { "min" };
        let base = self.vars[target.index()].name.clone();

        let mut selectors = LinearExpr::new();
        for (i, e) in exprs.iter().enumerate() {
            let (emin, emax) = self.bounds(e);
            let z = self.aux_bool(format!("{base}_{tag}_sel_{i}"));
            selectors.add_term(z, 1);
            let diff = t.clone() - e.clone();
            if is_max {
                // t ≥ e, and t ≤ e when selected
                let m = (t_ub - emin).max(0);
                self.push(diff.clone(), Some(0), None);
                self.push(diff + LinearExpr::term(z, m), None, Some(m));
            } else {
                // t ≤ e, and t ≥ e when selected
                let m = (emax - t_lb).max(0);
                self.push(diff.clone(), None, Some(0));
                self.push(diff - LinearExpr::term(z, m), Some(-m), None);
            }
        }
        if !exprs.is_empty() {
            self.push(selectors, Some(1), Some(1));
        }
    }

    fn abs(&mut self, target: VarId, expr: &LinearExpr) {
        let t = LinearExpr::from(target);
        let (emin, emax) = self.bounds(expr);
        if emin >= 0 {
            self.push(t - expr.clone(), Some(0), Some(0));
            return;
        }
        if emax <= 0 {
            self.push(t + expr.clone(), Some(0), Some(0));
            return;
        }
        let t_ub = self.vars[target.index()].ub;
        let name = format!("{}_abs_sel", self.vars[target.index()].name);
        let z = self.aux_bool(name);

        self.push(t.clone() - expr.clone(), Some(0), None);
        self.push(t.clone() + expr.clone(), Some(0), None);
        // z = 1 → t ≤ e ; z = 0 → t ≤ −e
        let m1 = (t_ub - emin).max(0);
        let m2 = (t_ub + emax).max(0);
        self.push(
            t.clone() - expr.clone() + LinearExpr::term(z, m1),
            None,
            Some(m1),
        );
        self.push(t + expr.clone() - LinearExpr::term(z, m2), None, Some(0));
    }
}
