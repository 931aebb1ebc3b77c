#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! The solver state: clause arena, watch index, model and unit-literal log.
//!
//! Clauses live in a solver-owned arena and are referred to everywhere else
//! by index, so `Clone` is a genuine deep copy: the cloned watch buckets
//! point into the cloned arena, and moving a watcher on one side of a
//! branch cannot perturb the other. The search driver relies on this at
//! every decision and every restart.

use crate::sat::assignment::{Model, VarState};
use crate::sat::clause::{Clause, LiteralStorage};
use crate::sat::literal::{Literal, PackedLiteral, Variable};
use crate::sat::watch::Watches;
use smallvec::SmallVec;

/// A CNF solver over `N` variables fixed at construction.
///
/// # Type Parameters
///
/// * `L`: The literal representation. Defaults to [`PackedLiteral`].
/// * `S`: The literal storage inside clauses. Defaults to `SmallVec<[L; 8]>`.
#[derive(Debug, Clone)]
pub struct Solver<L: Literal = PackedLiteral, S: LiteralStorage<L> = SmallVec<[L; 8]>> {
    pub(crate) model: Model,
    pub(crate) clauses: Vec<Clause<L, S>>,
    pub(crate) watches: Watches,
    pub(crate) units: Vec<L>,
    pub(crate) last_conflict: Vec<Variable>,
    pub(crate) restarts: usize,
}

impl<L: Literal, S: LiteralStorage<L>> Solver<L, S> {
    /// Creates a solver for `num_vars` variables with an empty formula.
    #[must_use]
    pub fn new(num_vars: usize) -> Self {
        Self {
            model: Model::new(num_vars),
            clauses: Vec::new(),
            watches: Watches::new(num_vars),
            units: Vec::new(),
            last_conflict: Vec::new(),
            restarts: 0,
        }
    }

    /// The number of variables this solver was constructed with.
    #[must_use]
    pub fn num_vars(&self) -> usize {
        self.model.num_vars()
    }

    /// The current partial assignment.
    #[must_use]
    pub fn model(&self) -> &Model {
        &self.model
    }

    /// The state of `var`, with bounds check.
    ///
    /// # Panics
    ///
    /// Panics if `var` is not a valid variable id.
    #[must_use]
    pub fn value(&self, var: Variable) -> VarState {
        self.model.value(var)
    }

    /// Every literal asserted at the top level or forced since construction,
    /// in assertion order. On SAT this is the satisfying assignment.
    #[must_use]
    pub fn unit_literals(&self) -> &[L] {
        &self.units
    }

    /// Restarts performed by the most recent [`solve`](Self::solve) call.
    #[must_use]
    pub fn num_restarts(&self) -> usize {
        self.restarts
    }

    /// Asserts `l` under the current model.
    ///
    /// Fails iff `l` is already falsified. Succeeds without mutation when
    /// `l` is already satisfied; otherwise sets the variable and records `l`
    /// in the unit-literal log if it is not there yet.
    pub fn assign(&mut self, l: L) -> bool {
        if self.model.falsified(l) {
            return false;
        }
        if self.model.satisfied(l) {
            return true;
        }
        self.model.set(l.variable(), l.polarity());
        if !self.units.contains(&l) {
            self.units.push(l);
        }
        true
    }

    /// Ingests a clause, simplifying it against the current assignment.
    ///
    /// Returns `false` only when the addition makes the formula definitively
    /// unsatisfiable: the clause is empty, every literal is already
    /// falsified, or it reduces to a falsified unit. A clause subsumed by
    /// the current assignment is discarded and reported as success.
    ///
    /// Watchers of a registered clause start at the first two positions.
    /// No propagation runs here; the search driver propagates at branch
    /// points.
    pub fn add_clause(&mut self, clause: Clause<L, S>) -> bool {
        if clause.is_empty() {
            return false;
        }

        let mut reduced = S::default();
        for &l in clause.iter() {
            if self.model.satisfied(l) {
                return true;
            }
            if !self.model.falsified(l) {
                reduced.push(l);
            }
        }

        if reduced.is_empty() {
            return false;
        }

        if reduced.len() == 1 {
            let unit = reduced[0];
            return self.assign(unit);
        }

        let clause = Clause::new(reduced);
        let idx = self.clauses.len();
        let w0 = clause.watcher_literal(0);
        let w1 = clause.watcher_literal(1);

        self.watches.attach(w0.index(), idx);
        if w1 != w0 {
            self.watches.attach(w1.index(), idx);
        }

        self.clauses.push(clause);
        true
    }

    /// Rewrites the clause database in terms of the current assignment.
    ///
    /// Satisfied clauses are dropped, falsified literals are removed from
    /// the rest, duplicates (by literal multiset) keep only their first
    /// occurrence, and one unit clause is appended for every logged literal.
    #[must_use]
    pub fn rebase(&self) -> Vec<Clause<L, S>> {
        let mut reduced_clauses: Vec<Clause<L, S>> = Vec::new();

        'clauses: for clause in &self.clauses {
            let mut kept = S::default();
            for &l in clause.iter() {
                if self.model.satisfied(l) {
                    continue 'clauses;
                }
                if !self.model.falsified(l) {
                    kept.push(l);
                }
            }

            let candidate = Clause::new(kept);
            if !reduced_clauses.iter().any(|c| c.same_literals(&candidate)) {
                reduced_clauses.push(candidate);
            }
        }

        for &u in &self.units {
            let mut lits = S::default();
            lits.push(u);
            reduced_clauses.push(Clause::new(lits));
        }

        reduced_clauses
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sat::propagation::Propagation;
    use itertools::Itertools;
    use smallvec::SmallVec;

    type TestSolver = Solver;

    fn lit(val: i32) -> PackedLiteral {
        PackedLiteral::from_dimacs(val)
    }

    #[test]
    fn test_add_empty_clause_fails() {
        let mut solver = TestSolver::new(2);
        assert!(!solver.add_clause(Clause::new(SmallVec::new())));
    }

    #[test]
    fn test_add_unit_clause_assigns_and_logs() {
        let mut solver = TestSolver::new(2);
        assert!(solver.add_clause(Clause::from(vec![1])));
        assert!(solver.value(0).is_true());
        assert_eq!(solver.unit_literals(), &[lit(1)]);
        assert!(solver.clauses.is_empty());
    }

    #[test]
    fn test_add_falsified_unit_fails() {
        let mut solver = TestSolver::new(1);
        assert!(solver.add_clause(Clause::from(vec![1])));
        assert!(!solver.add_clause(Clause::from(vec![-1])));
    }

    #[test]
    fn test_subsumed_clause_is_discarded() {
        let mut solver = TestSolver::new(3);
        assert!(solver.add_clause(Clause::from(vec![1])));
        assert!(solver.add_clause(Clause::from(vec![1, 2, 3])));
        assert!(solver.clauses.is_empty());
    }

    #[test]
    fn test_clause_simplified_against_assignment() {
        let mut solver = TestSolver::new(3);
        assert!(solver.add_clause(Clause::from(vec![-1])));
        // 1 is falsified, so this reduces to the unit 2
        assert!(solver.add_clause(Clause::from(vec![1, 2])));
        assert!(solver.value(1).is_true());
        assert_eq!(solver.unit_literals(), &[lit(-1), lit(2)]);
    }

    #[test]
    fn test_watchers_registered_under_both_literals() {
        let mut solver = TestSolver::new(3);
        assert!(solver.add_clause(Clause::from(vec![1, 2, 3])));
        assert_eq!(solver.watches[lit(1)].as_slice(), &[0]);
        assert_eq!(solver.watches[lit(2)].as_slice(), &[0]);
        assert!(solver.watches[lit(3)].is_empty());
    }

    #[test]
    fn test_assign_is_idempotent_and_logs_once() {
        let mut solver = TestSolver::new(2);
        assert!(solver.assign(lit(1)));
        assert!(solver.assign(lit(1)));
        assert!(!solver.assign(lit(-1)));
        assert_eq!(solver.unit_literals(), &[lit(1)]);
    }

    #[test]
    fn test_clone_independence() {
        let mut original = TestSolver::new(3);
        assert!(original.add_clause(Clause::from(vec![1, 2, 3])));
        assert!(original.add_clause(Clause::from(vec![-1, 2])));

        let mut branch = original.clone();
        assert!(branch.assign(lit(-1)));
        assert_eq!(branch.unit_propagate(), Propagation::Done);

        // the branch moved on: clause 0 lost its watcher on literal 1
        assert!(branch.value(0).is_false());
        assert_eq!(branch.clauses[0].watcher_rank(lit(1)), None);
        assert_eq!(branch.clauses[0].watcher_rank(lit(3)), Some(0));
        assert!(branch.watches[lit(1)].is_empty());
        assert_eq!(branch.unit_literals(), &[lit(-1)]);

        // the original did not
        assert!(original.value(0).is_unassigned());
        assert!(original.unit_literals().is_empty());
        assert_eq!(original.clauses[0].watcher_literal(0), lit(1));
        assert_eq!(original.clauses[0].watcher_literal(1), lit(2));
        assert_eq!(original.watches[lit(1)].as_slice(), &[0]);
        assert_eq!(original.watches[lit(3)].as_slice(), &[] as &[usize]);
    }

    #[test]
    fn test_rebase_on_fresh_solver_keeps_multisets() {
        let mut solver = TestSolver::new(3);
        assert!(solver.add_clause(Clause::from(vec![1, 2])));
        assert!(solver.add_clause(Clause::from(vec![-2, 3])));

        let rebased = solver.rebase();
        assert_eq!(rebased.len(), 2);
        assert!(rebased[0].same_literals(&Clause::from(vec![1, 2])));
        assert!(rebased[1].same_literals(&Clause::from(vec![-2, 3])));
    }

    #[test]
    fn test_rebase_drops_satisfied_and_strips_falsified() {
        let mut solver = TestSolver::new(3);
        assert!(solver.add_clause(Clause::from(vec![1, 2])));
        assert!(solver.add_clause(Clause::from(vec![-1, 3])));
        assert!(solver.assign(lit(1)));

        let rebased = solver.rebase();
        // clause (1 v 2) is satisfied; (-1 v 3) reduces to (3); unit 1 appended
        assert_eq!(rebased.len(), 2);
        assert!(rebased[0].same_literals(&Clause::from(vec![3])));
        assert!(rebased[1].same_literals(&Clause::from(vec![1])));
    }

    #[test]
    fn test_rebase_deduplicates_reduced_clauses() {
        let mut solver = TestSolver::new(4);
        assert!(solver.add_clause(Clause::from(vec![2, 3])));
        assert!(solver.add_clause(Clause::from(vec![1, 2, 3])));
        assert!(solver.assign(lit(-1)));

        // after reduction both clauses are (2 v 3); only the first survives
        let rebased = solver.rebase();
        let clauses = rebased
            .iter()
            .map(|c| c.iter().map(|l| l.to_dimacs()).collect_vec())
            .collect_vec();
        assert_eq!(clauses, vec![vec![2, 3], vec![-1]]);
    }
}
