#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! The DPLL search driver with Luby-scheduled restarts.
//!
//! The search is recursive and branches by cloning the whole solver, so
//! backtracking is implicit: an abandoned branch is simply dropped, and a
//! successful branch replaces its parent. A shared decision budget bounds
//! each restart window; exhausting it is not an error but a structured
//! [`SearchResult::Restart`] consumed by the top-level loop, which decays
//! the heuristic and re-clones the original state.

use crate::sat::clause::LiteralStorage;
use crate::sat::literal::Literal;
use crate::sat::propagation::Propagation;
use crate::sat::restart::{luby, BASE_BUDGET, MAX_RESTARTS};
use crate::sat::solver::Solver;
use crate::sat::variable_selection::{FirstVariable, VariableSelection, WeightedDegree};

/// Status of one search attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchResult {
    Sat,
    Unsat,
    /// The decision budget ran out; the restart loop takes over.
    Restart,
}

impl<L: Literal, S: LiteralStorage<L>> Solver<L, S> {
    /// Decides satisfiability with the weighted-degree heuristic and Luby
    /// restarts.
    ///
    /// On `true` the solver holds the satisfying state: every variable is
    /// assigned and [`unit_literals`](Solver::unit_literals) is the model.
    /// Restart windows get `BASE_BUDGET * luby(r)` decisions each and all
    /// start from a clone of the same base state; only the heuristic
    /// carries information across windows.
    pub fn solve(&mut self) -> bool {
        let base = self.clone();
        let mut heuristic = WeightedDegree::new(self.num_vars());
        let mut performed = 0;

        for r in 1..=MAX_RESTARTS {
            let mut attempt = base.clone();
            let mut budget = BASE_BUDGET * luby(r);

            match attempt.dpll(&mut heuristic, &mut budget) {
                SearchResult::Sat => {
                    attempt.restarts = performed;
                    *self = attempt;
                    return true;
                }
                SearchResult::Unsat => {
                    self.restarts = performed;
                    return false;
                }
                SearchResult::Restart => {
                    heuristic.decay();
                    performed += 1;
                }
            }
        }

        self.restarts = performed;
        false
    }

    /// Decides satisfiability with the first-open-variable heuristic and no
    /// decision budget. Exhaustive, so `false` means UNSAT.
    pub fn solve_first_variable(&mut self) -> bool {
        let mut heuristic = FirstVariable;
        let mut budget = u64::MAX;
        matches!(
            self.dpll(&mut heuristic, &mut budget),
            SearchResult::Sat
        )
    }

    /// One node of the search tree: propagate, then branch on a heuristic
    /// pick, positive polarity first.
    ///
    /// The budget is shared across the entire window: every decision
    /// anywhere in the tree consumes one unit.
    pub(crate) fn dpll<V: VariableSelection>(
        &mut self,
        heuristic: &mut V,
        budget: &mut u64,
    ) -> SearchResult {
        if self.unit_propagate() == Propagation::Conflict {
            heuristic.on_conflict(&self.last_conflict);
            return SearchResult::Unsat;
        }

        let open = self.model.open_count();
        if open == 0 {
            return SearchResult::Sat;
        }

        if *budget == 0 {
            return SearchResult::Restart;
        }

        let Some(decision) = heuristic.pick(&self.model, open) else {
            unreachable!("an open variable exists");
        };
        *budget -= 1;

        for polarity in [true, false] {
            let mut branch = self.clone();
            if !branch.assign(L::new(decision, polarity)) {
                continue;
            }
            match branch.dpll(heuristic, budget) {
                SearchResult::Sat => {
                    *self = branch;
                    return SearchResult::Sat;
                }
                SearchResult::Restart => return SearchResult::Restart,
                SearchResult::Unsat => {}
            }
        }

        SearchResult::Unsat
    }
}
