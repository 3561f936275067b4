//! Core data structures for representing a parsed Linear Programming problem.
//!
//! Mirrors spec §3. Variables are addressed by [`VarId`] rather than by
//! borrowed name, so `Model` is fully owned and has no dependency on the
//! source text's lifetime.

use crate::interner::VarId;

#[cfg_attr(feature = "diff", derive(diff::Diff), diff(attr(#[derive(Debug, PartialEq)])))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
/// Optimisation sense for the objective.
pub enum Sense {
    #[default]
    Minimize,
    Maximize,
}

impl std::fmt::Display for Sense {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Minimize => write!(f, "minimize"),
            Self::Maximize => write!(f, "maximize"),
        }
    }
}

#[cfg_attr(feature = "diff", derive(diff::Diff), diff(attr(#[derive(Debug, PartialEq)])))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// A constraint comparison operator, as it appears in the source text
/// before being folded into lower/upper bounds.
pub enum ComparisonOp {
    Lt,
    Le,
    Eq,
    Ge,
    Gt,
}

impl std::fmt::Display for ComparisonOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lt => write!(f, "<"),
            Self::Le => write!(f, "<="),
            Self::Eq => write!(f, "="),
            Self::Ge => write!(f, ">="),
            Self::Gt => write!(f, ">"),
        }
    }
}

#[cfg_attr(feature = "diff", derive(diff::Diff), diff(attr(#[derive(Debug, PartialEq)])))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// SOS group type: at most one (S1) or at most two adjacent (S2) nonzero.
pub enum SosType {
    S1,
    S2,
}

impl std::fmt::Display for SosType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::S1 => write!(f, "S1"),
            Self::S2 => write!(f, "S2"),
        }
    }
}

#[cfg_attr(feature = "diff", derive(diff::Diff), diff(attr(#[derive(Debug, PartialEq)])))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Declared type of a variable. Bounds are stored separately on
/// [`Variable`]; this only tracks domain/integrality.
pub enum VariableType {
    #[default]
    Continuous,
    GeneralInteger,
    Binary,
    SemiContinuous,
    SemiInteger,
}

impl std::fmt::Display for VariableType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Continuous => write!(f, "continuous"),
            Self::GeneralInteger => write!(f, "general integer"),
            Self::Binary => write!(f, "binary"),
            Self::SemiContinuous => write!(f, "semi-continuous"),
            Self::SemiInteger => write!(f, "semi-integer"),
        }
    }
}

#[cfg_attr(feature = "diff", derive(diff::Diff), diff(attr(#[derive(Debug, PartialEq)])))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
/// A variable: a unique name, a numeric range, and a domain/integrality type.
pub struct Variable {
    pub name: String,
    pub lower: f64,
    pub upper: f64,
    pub var_type: VariableType,
    /// Tracks whether this variable has been seen in the `general` and/or
    /// `semi-continuous` sections, to resolve the semi-integer interaction
    /// (spec §4.4, §9 Open Question) independent of section order.
    pub(crate) seen_general: bool,
    pub(crate) seen_semi: bool,
}

impl Variable {
    #[must_use]
    pub fn new(name: String) -> Self {
        Self { name, lower: 0.0, upper: f64::INFINITY, var_type: VariableType::default(), seen_general: false, seen_semi: false }
    }
}

#[cfg_attr(feature = "diff", derive(diff::Diff), diff(attr(#[derive(Debug, PartialEq)])))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
/// A `(coefficient, variable)` pair.
pub struct LinearTerm {
    pub coefficient: f64,
    pub var: VarId,
}

#[cfg_attr(feature = "diff", derive(diff::Diff), diff(attr(#[derive(Debug, PartialEq)])))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
/// A `(coefficient, var1, var2)` triple; `var1 == var2` for a squared term.
pub struct QuadraticTerm {
    pub coefficient: f64,
    pub var1: VarId,
    pub var2: VarId,
}

#[cfg_attr(feature = "diff", derive(diff::Diff), diff(attr(#[derive(Debug, PartialEq)])))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default, PartialEq)]
/// An optionally-named linear/quadratic expression with a scalar offset.
///
/// Multiple terms over the same variable are retained as-is; summation is
/// left to the consumer (spec §3).
pub struct Expression {
    pub name: Option<String>,
    pub linear: Vec<LinearTerm>,
    pub quadratic: Vec<QuadraticTerm>,
    pub offset: f64,
}

#[cfg_attr(feature = "diff", derive(diff::Diff), diff(attr(#[derive(Debug, PartialEq)])))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
/// An expression bounded above and/or below. Equality is encoded as
/// `lower == upper`.
pub struct Constraint {
    pub expression: Expression,
    pub lower: f64,
    pub upper: f64,
}

#[cfg_attr(feature = "diff", derive(diff::Diff), diff(attr(#[derive(Debug, PartialEq)])))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
/// A named, ordered group of `(variable, weight)` entries.
pub struct SosGroup {
    pub name: String,
    pub sos_type: SosType,
    pub entries: Vec<(VarId, f64)>,
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
/// The fully parsed LP problem: objective, constraints, SOS groups, and the
/// interned variable set.
pub struct Model {
    pub sense: Sense,
    pub objective: Expression,
    pub constraints: Vec<Constraint>,
    pub sos_groups: Vec<SosGroup>,
    pub(crate) variables: Vec<Variable>,
}

impl Model {
    /// Resolve a [`VarId`] back to its name.
    ///
    /// # Panics
    /// Panics if `id` was not produced by this model's interner.
    #[must_use]
    pub fn name_of(&self, id: VarId) -> &str {
        &self.variable(id).name
    }

    /// Look up a variable's metadata by id.
    #[must_use]
    pub fn variable(&self, id: VarId) -> &Variable {
        &self.variables[id.index()]
    }

    /// All variables in interning (first-mention) order.
    #[must_use]
    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    /// Number of interned variables.
    #[must_use]
    pub fn variable_count(&self) -> usize {
        self.variables.len()
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "sense: {}", self.sense)?;
        writeln!(f, "objective terms: {} linear, {} quadratic", self.objective.linear.len(), self.objective.quadratic.len())?;
        writeln!(f, "constraints: {}", self.constraints.len())?;
        writeln!(f, "sos groups: {}", self.sos_groups.len())?;
        write!(f, "variables: {}", self.variables.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variable_defaults_to_zero_to_infinity_continuous() {
        let v = Variable::new("x".to_owned());
        assert_eq!(v.lower, 0.0);
        assert_eq!(v.upper, f64::INFINITY);
        assert_eq!(v.var_type, VariableType::Continuous);
    }

    #[test]
    fn comparison_op_display() {
        assert_eq!(ComparisonOp::Le.to_string(), "<=");
        assert_eq!(ComparisonOp::Ge.to_string(), ">=");
    }
}
