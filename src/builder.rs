//! Model builder (spec §3 "Model", §9 "Shared-variable identity").
//!
//! Accumulates the pieces produced by each section processor and interns
//! every variable name it sees, so that expressions, bounds, and SOS
//! entries all end up addressing the same arena by [`VarId`].

use crate::interner::{NameInterner, VarId};
use crate::model::{Constraint, Expression, Model, Sense, SosGroup};

/// Accumulates a [`Model`] across section processors.
///
/// One builder is created per parse and consumed by [`ModelBuilder::build`];
/// section processors borrow it mutably to intern names and append their
/// output (spec §5: a single writer owns the intern table).
#[derive(Debug, Default)]
pub struct ModelBuilder {
    sense: Sense,
    objective: Expression,
    constraints: Vec<Constraint>,
    sos_groups: Vec<SosGroup>,
    interner: NameInterner,
}

impl ModelBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_sense(&mut self, sense: Sense) {
        self.sense = sense;
    }

    pub fn set_objective(&mut self, objective: Expression) {
        self.objective = objective;
    }

    pub fn push_constraint(&mut self, constraint: Constraint) {
        self.constraints.push(constraint);
    }

    pub fn push_sos_group(&mut self, group: SosGroup) {
        self.sos_groups.push(group);
    }

    /// Intern a variable name, creating it with default bounds/type on first
    /// mention.
    pub fn intern(&mut self, name: &str) -> VarId {
        self.interner.intern(name)
    }

    /// Mutable access to an already-interned variable, for section
    /// processors that adjust bounds or type (bounds, binary, general,
    /// semi-continuous).
    pub fn variable_mut(&mut self, id: VarId) -> &mut crate::model::Variable {
        self.interner.variable_mut(id)
    }

    /// Mutable access to every interned variable, for the general/semi
    /// section processors' final resolution pass.
    pub fn variables_mut(&mut self) -> &mut [crate::model::Variable] {
        self.interner.variables_mut()
    }

    /// Finalize into an immutable [`Model`], draining the intern table into
    /// the variable arena.
    #[must_use]
    pub fn build(self) -> Model {
        let variables = self.interner.into_parts();
        Model { sense: self.sense, objective: self.objective, constraints: self.constraints, sos_groups: self.sos_groups, variables }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_resolves_interned_names() {
        let mut builder = ModelBuilder::new();
        let id = builder.intern("x1");
        let model = builder.build();
        assert_eq!(model.name_of(id), "x1");
    }

    #[test]
    fn default_sense_is_minimize() {
        let model = ModelBuilder::new().build();
        assert_eq!(model.sense, Sense::Minimize);
    }
}
