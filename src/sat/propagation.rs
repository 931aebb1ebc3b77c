#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Two-watched-literal unit propagation.
//!
//! The pass processes a FIFO queue seeded from the unit-literal log. For
//! each dequeued literal it walks the watch bucket of the *negated*
//! literal: every clause there just lost a watcher. A clause either turns
//! out satisfied through its other watcher, moves the lost watcher to a
//! replacement literal, forces its other watcher as a new unit, or, with
//! both watchers falsified and no replacement, raises a conflict.
//!
//! Buckets may contain stale entries (clauses whose watcher moved away in
//! an earlier pass); they are detected by `watcher_rank` and skipped.

use crate::sat::clause::LiteralStorage;
use crate::sat::literal::Literal;
use crate::sat::solver::Solver;

/// Outcome of a propagation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Propagation {
    /// The queue drained without contradiction.
    Done,
    /// Some clause lost all its literals; the variables of the offending
    /// clause are in the solver's conflict record.
    Conflict,
}

impl<L: Literal, S: LiteralStorage<L>> Solver<L, S> {
    /// Runs unit propagation to a fixed point or a conflict.
    ///
    /// Within one pass a variable is assigned at most once; assignments are
    /// monotone. Newly forced literals are appended to the queue (and, via
    /// [`assign`](Solver::assign), to the unit-literal log) and processed in
    /// FIFO order.
    pub fn unit_propagate(&mut self) -> Propagation {
        let mut queue: Vec<L> = self.units.clone();
        let mut head = 0;

        while head < queue.len() {
            let l = queue[head];
            head += 1;

            if !self.assign(l) {
                return Propagation::Conflict;
            }

            let false_lit = l.negated();
            let false_idx = false_lit.index();

            let mut i = 0;
            while i < self.watches[false_idx].len() {
                let clause_ref = self.watches[false_idx][i];

                // stale entry: the watcher moved away in an earlier scan
                let Some(rank) = self.clauses[clause_ref].watcher_rank(false_lit) else {
                    i += 1;
                    continue;
                };

                let other = self.clauses[clause_ref].watcher_literal(1 - rank);
                if self.model.satisfied(other) {
                    i += 1;
                    continue;
                }

                let replacement = self.clauses[clause_ref]
                    .iter()
                    .copied()
                    .find(|&cand| cand != other && cand != false_lit && !self.model.falsified(cand));

                match replacement {
                    Some(cand) => {
                        self.clauses[clause_ref].set_watcher(cand, rank);
                        self.watches.detach_at(false_idx, i);
                        self.watches.attach(cand.index(), clause_ref);
                        // the swap moved a new clause into position i
                    }
                    None => {
                        if self.model.falsified(other) {
                            // both watchers dead
                            self.last_conflict = self.clauses[clause_ref]
                                .iter()
                                .map(|l| l.variable())
                                .collect();
                            return Propagation::Conflict;
                        }

                        // the clause became unit, forcing the other watcher
                        if !self.assign(other) {
                            return Propagation::Conflict;
                        }
                        queue.push(other);
                        i += 1;
                    }
                }
            }
        }

        Propagation::Done
    }
}
