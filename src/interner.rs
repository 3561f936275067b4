//! String interning for variable, constraint, and SOS-group names.
//!
//! All names encountered during parsing are stored once in a
//! [`NameInterner`] and referenced by a cheap, copyable [`VarId`]. The
//! interner doubles as the variable arena described in spec §9
//! ("Shared-variable identity"): the first mention of a name creates the
//! entry, subsequent mentions return the same id.

use lasso::Rodeo;

use crate::model::Variable;

/// Opaque handle to an interned variable name: a stable index into the
/// arena's variable list (spec §9 "model the interned-variable store as an
/// arena whose entries are addressed by stable indices").
///
/// `Copy`, `Eq`, `Ord`, `Hash` — cheap to carry inside `LinearTerm`,
/// `QuadraticTerm`, and SOS entries instead of a borrowed `&str`. Unlike the
/// `lasso::Spur` used internally by the interner to deduplicate names, this
/// is a plain `u32` wrapper, so it derives `serde`/`diff` without pulling
/// those crate features onto `lasso` itself.
#[cfg_attr(feature = "diff", derive(diff::Diff), diff(attr(#[derive(Debug, PartialEq)])))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VarId(u32);

impl VarId {
    /// The id's position in the arena's variable list.
    ///
    /// Exposed crate-wide so [`crate::model::Model`] can index its own
    /// variable list without needing a `lasso` rodeo around after the parse
    /// completes.
    #[must_use]
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

/// Variable arena: interns names and owns each variable's bounds/type.
///
/// A single writer owns this table; section processors call
/// [`NameInterner::intern`] serially, so no locking is required (spec §5).
#[derive(Debug, Default)]
pub struct NameInterner {
    rodeo: Rodeo,
    variables: Vec<Variable>,
}

impl NameInterner {
    /// Create a new, empty interner.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern `name`, creating a fresh [`Variable`] with default bounds and
    /// type on first mention. Idempotent: interning the same name twice
    /// returns the same id and does not reset the variable's bounds/type.
    pub fn intern(&mut self, name: &str) -> VarId {
        let spur = self.rodeo.get_or_intern(name);
        let index = spur.into_inner().get() as usize - 1;
        if index >= self.variables.len() {
            self.variables.resize_with(index + 1, || Variable::new(String::new()));
        }
        if self.variables[index].name.is_empty() {
            self.variables[index].name = name.to_owned();
        }
        VarId(index as u32)
    }

    /// Look up a name without interning it.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<VarId> {
        self.rodeo.get(name).map(|spur| VarId(spur.into_inner().get() as u32 - 1))
    }

    /// Resolve an id back to its string.
    ///
    /// # Panics
    /// Panics if `id` was not produced by this interner.
    #[must_use]
    pub fn resolve(&self, id: VarId) -> &str {
        &self.variables[id.0 as usize].name
    }

    /// Mutable access to an interned variable's bounds/type.
    ///
    /// # Panics
    /// Panics if `id` was not produced by this interner.
    pub fn variable_mut(&mut self, id: VarId) -> &mut Variable {
        &mut self.variables[id.0 as usize]
    }

    /// Read-only access to an interned variable.
    ///
    /// # Panics
    /// Panics if `id` was not produced by this interner.
    #[must_use]
    pub fn variable(&self, id: VarId) -> &Variable {
        &self.variables[id.0 as usize]
    }

    /// Mutable access to every interned variable, in first-mention order.
    /// Used by the general/semi-continuous section processors to resolve
    /// the semi-integer interaction after both sections have drained.
    pub fn variables_mut(&mut self) -> &mut [Variable] {
        &mut self.variables
    }

    /// Number of interned names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rodeo.len()
    }

    /// Returns `true` if no names have been interned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rodeo.is_empty()
    }

    /// Drain the interner into the final, ordered variable list, consumed by
    /// [`crate::model::Model`]. Each variable's own `name` field (set during
    /// [`NameInterner::intern`]) is sufficient to resolve a [`VarId`]
    /// afterwards, so the `lasso` rodeo itself does not need to outlive the
    /// parse.
    #[must_use]
    pub fn into_parts(self) -> Vec<Variable> {
        self.variables
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intern_and_resolve() {
        let mut interner = NameInterner::new();
        let id = interner.intern("x1");
        assert_eq!(interner.resolve(id), "x1");
    }

    #[test]
    fn idempotent_interning_preserves_identity() {
        let mut interner = NameInterner::new();
        let id1 = interner.intern("x1");
        let id2 = interner.intern("x1");
        assert_eq!(id1, id2);
        assert_eq!(interner.len(), 1);
    }

    #[test]
    fn distinct_names_get_distinct_ids() {
        let mut interner = NameInterner::new();
        let id1 = interner.intern("x1");
        let id2 = interner.intern("x2");
        assert_ne!(id1, id2);
        assert_eq!(interner.len(), 2);
    }

    #[test]
    fn reintern_does_not_reset_bounds() {
        let mut interner = NameInterner::new();
        let id = interner.intern("x1");
        interner.variable_mut(id).lower = 2.0;
        let id2 = interner.intern("x1");
        assert_eq!(interner.variable(id2).lower, 2.0);
    }

    #[test]
    fn get_returns_none_for_unknown() {
        let interner = NameInterner::new();
        assert!(interner.get("unknown").is_none());
    }
}
