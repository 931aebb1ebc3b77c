//! A DPLL SAT solver for formulas in conjunctive normal form.
//!
//! The solver decides satisfiability with two-watched-literal unit
//! propagation, clone-per-branch depth-first search, a conflict-driven
//! weighted-degree branching heuristic and Luby-scheduled restarts. When a
//! formula is satisfiable, the satisfying assignment is available as the
//! solver's unit-literal log.
//!
//! ```
//! use dpll_sat::sat::clause::Clause;
//! use dpll_sat::sat::solver::Solver;
//!
//! let mut solver: Solver = Solver::new(2);
//! assert!(solver.add_clause(Clause::from(vec![1, 2])));
//! assert!(solver.add_clause(Clause::from(vec![-1, 2])));
//! assert!(solver.solve());
//! assert!(solver.value(1).is_true());
//! ```

/// The `sat` module implements the solver core: literals, clauses, the
/// watch index, unit propagation, branching heuristics and the restart
/// driver, plus the DIMACS front-end.
pub mod sat;
