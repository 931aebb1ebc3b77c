#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! The watch index: literal id to the clauses currently watching it.
//!
//! Buckets hold handles into the solver's clause arena, never references,
//! so a cloned solver's buckets point into its own cloned arena. A clause
//! appears in a bucket only while one of its watcher indices points at that
//! bucket's literal; entries left behind by a moved watcher are detected
//! and skipped by the propagation loop.

use crate::sat::literal::Literal;
use smallvec::SmallVec;
use std::ops::{Index, IndexMut};

/// A clause handle: an index into the owning solver's clause arena.
pub type ClauseRef = usize;

/// One bucket per literal id, `2N` in total.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Watches {
    buckets: Vec<SmallVec<[ClauseRef; 6]>>,
}

impl Watches {
    /// Creates an empty watch index for `num_vars` variables.
    #[must_use]
    pub fn new(num_vars: usize) -> Self {
        Self {
            buckets: vec![SmallVec::new(); num_vars * 2],
        }
    }

    /// Files `clause` under the bucket of literal id `lit_index`.
    pub fn attach(&mut self, lit_index: usize, clause: ClauseRef) {
        self.buckets[lit_index].push(clause);
    }

    /// Removes the entry at `pos` from the bucket of `lit_index` by
    /// swapping in the last entry. Bucket order is not preserved; no
    /// ordering guarantee is given.
    pub fn detach_at(&mut self, lit_index: usize, pos: usize) {
        self.buckets[lit_index].swap_remove(pos);
    }

    /// The number of buckets (twice the variable count).
    #[must_use]
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

impl Index<usize> for Watches {
    type Output = SmallVec<[ClauseRef; 6]>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.buckets[index]
    }
}

impl IndexMut<usize> for Watches {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.buckets[index]
    }
}

impl<L: Literal> Index<L> for Watches {
    type Output = SmallVec<[ClauseRef; 6]>;

    fn index(&self, index: L) -> &Self::Output {
        &self[index.index()]
    }
}

impl<L: Literal> IndexMut<L> for Watches {
    fn index_mut(&mut self, index: L) -> &mut Self::Output {
        &mut self[index.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sat::literal::PackedLiteral;

    #[test]
    fn test_bucket_count() {
        let watches = Watches::new(3);
        assert_eq!(watches.len(), 6);
    }

    #[test]
    fn test_attach_and_lookup_by_literal() {
        let mut watches = Watches::new(2);
        let l = PackedLiteral::new(1, true);
        watches.attach(l.index(), 7);
        assert_eq!(watches[l].as_slice(), &[7]);
        assert!(watches[l.negated()].is_empty());
    }

    #[test]
    fn test_detach_swaps_last_into_place() {
        let mut watches = Watches::new(1);
        watches.attach(0, 10);
        watches.attach(0, 11);
        watches.attach(0, 12);

        watches.detach_at(0, 0);
        assert_eq!(watches[0].as_slice(), &[12, 11]);

        watches.detach_at(0, 1);
        assert_eq!(watches[0].as_slice(), &[12]);
    }
}
