#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]

use crate::sat::assignment::Model;
use crate::sat::literal::Variable;
use ordered_float::OrderedFloat;
use std::cmp::Reverse;

const DEFAULT_DECAY: f64 = 0.95;
const DEFAULT_BUMP: f64 = 1.0;

/// Picks the next branching variable among the open ones.
///
/// `on_conflict` and `decay` are side channels the search driver feeds:
/// variables of a conflicting clause get bumped, and every restart rescales
/// all activities.
pub trait VariableSelection {
    /// Picks among the open variables; `open` is their current count.
    fn pick(&self, model: &Model, open: usize) -> Option<Variable>;

    fn on_conflict(&mut self, vars: &[Variable]);
    fn decay(&mut self);
}

/// Lowest-index open variable. Conflicts and decay are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FirstVariable;

impl VariableSelection for FirstVariable {
    fn pick(&self, model: &Model, _open: usize) -> Option<Variable> {
        model.open_vars().next()
    }

    fn on_conflict(&mut self, _: &[Variable]) {}

    fn decay(&mut self) {}
}

/// Conflict-driven activities: every variable in a conflicting clause gets
/// its weight bumped, and the open variable with the heaviest weight is
/// picked, ties broken by lowest id.
#[derive(Debug, Clone, PartialEq, Default, PartialOrd)]
pub struct WeightedDegree {
    weight: Vec<f64>,
    bump_amount: f64,
    decay_factor: f64,
}

impl WeightedDegree {
    #[must_use]
    pub fn new(num_vars: usize) -> Self {
        Self {
            weight: vec![1.0; num_vars],
            bump_amount: DEFAULT_BUMP,
            decay_factor: DEFAULT_DECAY,
        }
    }

    #[must_use]
    pub fn weight(&self, var: Variable) -> f64 {
        self.weight[var as usize]
    }
}

impl VariableSelection for WeightedDegree {
    fn pick(&self, model: &Model, _open: usize) -> Option<Variable> {
        model
            .open_vars()
            .max_by_key(|&v| (OrderedFloat(self.weight[v as usize]), Reverse(v)))
    }

    fn on_conflict(&mut self, vars: &[Variable]) {
        for &v in vars {
            if let Some(w) = self.weight.get_mut(v as usize) {
                *w += self.bump_amount;
            }
        }
    }

    /// Rescales every weight by `1 / decay_factor`. With a factor below one
    /// this grows all weights uniformly; the arg-max is unchanged either
    /// way, so selection behaves the same as a conventional decay.
    fn decay(&mut self) {
        let factor = 1.0 / self.decay_factor;
        for w in &mut self.weight {
            *w *= factor;
        }
    }
}
