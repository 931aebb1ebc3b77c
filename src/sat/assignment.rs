#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Three-valued variable states and the dense model.
//!
//! The model is a vector of [`VarState`] indexed by variable id. A literal
//! is *satisfied* when its variable carries the literal's polarity,
//! *falsified* when it carries the opposite polarity, and *open* while the
//! variable is unassigned. All queries are total over `[0, N)`; indexing
//! outside that range is a caller bug and panics.

use crate::sat::literal::{Literal, Variable};
use std::ops::Index;

/// Represents the assignment state of a propositional variable.
///
/// A variable can be unassigned, or assigned to true or false.
#[derive(Debug, Clone, PartialEq, Eq, Copy, Default, Hash, PartialOrd, Ord)]
pub enum VarState {
    /// The variable has not been assigned a truth value.
    #[default]
    Unassigned,
    /// The variable has been assigned a specific truth value.
    Assigned(bool),
}

impl VarState {
    /// Checks if the variable state is `Assigned`.
    #[must_use]
    pub const fn is_assigned(self) -> bool {
        matches!(self, Self::Assigned(_))
    }

    /// Checks if the variable state is `Unassigned`.
    #[must_use]
    pub const fn is_unassigned(self) -> bool {
        !self.is_assigned()
    }

    /// Checks if the variable state is `Assigned(true)`.
    #[must_use]
    pub const fn is_true(self) -> bool {
        matches!(self, Self::Assigned(true))
    }

    /// Checks if the variable state is `Assigned(false)`.
    #[must_use]
    pub const fn is_false(self) -> bool {
        matches!(self, Self::Assigned(false))
    }
}

impl From<VarState> for Option<bool> {
    fn from(s: VarState) -> Self {
        match s {
            VarState::Assigned(b) => Some(b),
            VarState::Unassigned => None,
        }
    }
}

impl From<Option<bool>> for VarState {
    fn from(b: Option<bool>) -> Self {
        b.map_or(Self::Unassigned, VarState::Assigned)
    }
}

/// The current partial assignment: one [`VarState`] per variable.
///
/// The number of variables is fixed at construction. The model does not know
/// about the unit-literal log; recording assignments there is the solver's
/// job.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Model {
    states: Vec<VarState>,
}

impl Index<usize> for Model {
    type Output = VarState;

    /// # Panics
    ///
    /// Panics if `index` is not a valid variable id.
    fn index(&self, index: usize) -> &Self::Output {
        &self.states[index]
    }
}

impl Model {
    /// Creates a model for `num_vars` variables, all unassigned.
    #[must_use]
    pub fn new(num_vars: usize) -> Self {
        Self {
            states: vec![VarState::Unassigned; num_vars],
        }
    }

    /// Returns the total number of variables this model is configured for.
    #[must_use]
    pub fn num_vars(&self) -> usize {
        self.states.len()
    }

    /// The state of `var`, with bounds check.
    ///
    /// # Panics
    ///
    /// Panics if `var` is not a valid variable id.
    #[must_use]
    pub fn value(&self, var: Variable) -> VarState {
        self.states[var as usize]
    }

    /// The truth value of `var`, or `None` while unassigned.
    #[must_use]
    pub fn var_value(&self, var: Variable) -> Option<bool> {
        self.value(var).into()
    }

    /// The truth value of a literal under the current assignment, or `None`
    /// while its variable is open.
    #[must_use]
    pub fn literal_value<L: Literal>(&self, l: L) -> Option<bool> {
        self.var_value(l.variable()).map(|b| b == l.polarity())
    }

    /// A literal is satisfied iff its variable carries its polarity.
    #[must_use]
    pub fn satisfied<L: Literal>(&self, l: L) -> bool {
        self.literal_value(l) == Some(true)
    }

    /// A literal is falsified iff its negation is satisfied.
    #[must_use]
    pub fn falsified<L: Literal>(&self, l: L) -> bool {
        self.satisfied(l.negated())
    }

    pub fn set(&mut self, var: Variable, b: bool) {
        self.states[var as usize] = VarState::Assigned(b);
    }

    #[must_use]
    pub fn is_assigned(&self, var: Variable) -> bool {
        self.value(var).is_assigned()
    }

    /// Returns an iterator over all currently open variables, lowest id
    /// first.
    pub fn open_vars(&self) -> impl Iterator<Item = Variable> + '_ {
        self.states.iter().enumerate().filter_map(|(i, s)| {
            #[allow(clippy::cast_possible_truncation)]
            let var = i as Variable;
            s.is_unassigned().then_some(var)
        })
    }

    /// The number of open variables.
    #[must_use]
    pub fn open_count(&self) -> usize {
        self.states.iter().filter(|s| s.is_unassigned()).count()
    }

    #[must_use]
    pub fn all_assigned(&self) -> bool {
        self.open_count() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sat::literal::PackedLiteral;
    use itertools::Itertools;

    #[test]
    fn test_var_state() {
        assert!(VarState::Unassigned.is_unassigned());
        assert!(!VarState::Unassigned.is_assigned());
        assert!(!VarState::Unassigned.is_true());
        assert!(!VarState::Unassigned.is_false());

        assert!(!VarState::Assigned(true).is_unassigned());
        assert!(VarState::Assigned(true).is_assigned());
        assert!(VarState::Assigned(true).is_true());
        assert!(!VarState::Assigned(true).is_false());

        assert!(!VarState::Assigned(false).is_unassigned());
        assert!(VarState::Assigned(false).is_assigned());
        assert!(!VarState::Assigned(false).is_true());
        assert!(VarState::Assigned(false).is_false());
    }

    #[test]
    fn test_model_queries() {
        let mut m = Model::new(4);
        assert_eq!(m.num_vars(), 4);
        assert_eq!(m.open_count(), 4);

        m.set(1, true);
        m.set(2, false);

        assert_eq!(m.var_value(1), Some(true));
        assert_eq!(m.var_value(2), Some(false));
        assert_eq!(m.var_value(0), None);

        assert!(m.satisfied(PackedLiteral::new(1, true)));
        assert!(m.falsified(PackedLiteral::new(1, false)));
        assert!(m.satisfied(PackedLiteral::new(2, false)));
        assert!(m.falsified(PackedLiteral::new(2, true)));

        let open = PackedLiteral::new(3, true);
        assert!(!m.satisfied(open));
        assert!(!m.falsified(open));
        assert_eq!(m.literal_value(open), None);

        assert_eq!(m.open_vars().collect_vec(), vec![0, 3]);
        assert_eq!(m.open_count(), 2);
        assert!(!m.all_assigned());

        m.set(0, false);
        m.set(3, true);
        assert!(m.all_assigned());
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn test_model_value_bounds_checked() {
        let m = Model::new(2);
        let _ = m.value(2);
    }
}
