#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Signed literals and their packing.
//!
//! A literal is a variable together with a polarity. The canonical encoding
//! packs both into a single unsigned integer: `id = 2 * var + polarity`,
//! so the positive literal of a variable is odd, the negative one is even,
//! and negation is a single bit flip. The watch index relies on `index()`
//! being a dense id in `[0, 2N)`.

use std::fmt::Debug;
use std::hash::Hash;

/// A propositional variable, identified by a dense id in `[0, N)`.
pub type Variable = u32;

/// Trait that defines the shape of a literal used in the formula.
pub trait Literal: Copy + Debug + Eq + Hash + Default {
    fn new(var: Variable, polarity: bool) -> Self;
    fn variable(self) -> Variable;
    fn polarity(self) -> bool;

    #[must_use]
    fn negated(self) -> Self;

    /// `+1` for a positive literal, `-1` for a negative one.
    fn sign(self) -> i8 {
        if self.polarity() {
            1
        } else {
            -1
        }
    }

    /// Dense id in `[0, 2N)`: `2 * var + polarity`.
    fn index(self) -> usize {
        let polarity = usize::from(self.polarity());
        let var = self.variable() as usize;
        var.wrapping_mul(2).wrapping_add(polarity)
    }

    #[must_use]
    fn from_index(index: usize) -> Self {
        let polarity = index % 2 != 0;
        let var = index / 2;
        #[allow(clippy::cast_possible_truncation)]
        Self::new(var as Variable, polarity)
    }

    /// Builds a literal from a nonzero DIMACS literal. DIMACS variables are
    /// 1-indexed, so `3` maps to variable `2` positive and `-3` to variable
    /// `2` negative.
    #[must_use]
    fn from_dimacs(value: i32) -> Self {
        debug_assert_ne!(value, 0, "0 terminates a DIMACS clause");
        let polarity = value.is_positive();
        let var = value.unsigned_abs() - 1;
        Self::new(var, polarity)
    }

    /// Inverse of [`from_dimacs`](Literal::from_dimacs).
    fn to_dimacs(self) -> i32 {
        #[allow(clippy::cast_possible_wrap)]
        let var = (self.variable() + 1) as i32;
        if self.polarity() {
            var
        } else {
            -var
        }
    }
}

/// The canonical packed literal: the raw value *is* `2 * var + polarity`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct PackedLiteral(u32);

impl Literal for PackedLiteral {
    fn new(var: Variable, polarity: bool) -> Self {
        // Wrapping not needed, but wanted to not have overflow checks
        Self(var.wrapping_mul(2).wrapping_add(u32::from(polarity)))
    }

    fn variable(self) -> Variable {
        self.0 / 2
    }

    fn polarity(self) -> bool {
        self.0 % 2 != 0
    }

    fn negated(self) -> Self {
        Self(self.0 ^ 1)
    }

    fn index(self) -> usize {
        self.0 as usize
    }
}

/// Very simple implementation, useful as a reference point in tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct StructLiteral {
    value: u32,
    polarity: bool,
}

impl Literal for StructLiteral {
    fn new(var: Variable, polarity: bool) -> Self {
        Self {
            value: var,
            polarity,
        }
    }

    fn variable(self) -> Variable {
        self.value
    }

    fn polarity(self) -> bool {
        self.polarity
    }

    #[must_use]
    fn negated(self) -> Self {
        Self {
            value: self.value,
            polarity: !self.polarity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn algebra<L: Literal>() {
        for v in 0..16 {
            let p = L::new(v, true);
            let n = L::new(v, false);

            assert_eq!(p.variable(), v);
            assert_eq!(n.variable(), v);
            assert_eq!(p.sign(), 1);
            assert_eq!(n.sign(), -1);
            assert_eq!(p.negated(), n);
            assert_eq!(n.negated(), p);
            assert_eq!(p.negated().negated(), p);
            assert_ne!(p, n);

            assert_eq!(L::from_index(p.index()), p);
            assert_eq!(L::from_index(n.index()), n);
        }
    }

    #[test]
    fn test_literal_algebra_packed() {
        algebra::<PackedLiteral>();
    }

    #[test]
    fn test_literal_algebra_struct() {
        algebra::<StructLiteral>();
    }

    #[test]
    fn test_packing_is_dense() {
        assert_eq!(PackedLiteral::new(0, false).index(), 0);
        assert_eq!(PackedLiteral::new(0, true).index(), 1);
        assert_eq!(PackedLiteral::new(3, false).index(), 6);
        assert_eq!(PackedLiteral::new(3, true).index(), 7);
    }

    #[test]
    fn test_dimacs_conversion() {
        let l = PackedLiteral::from_dimacs(3);
        assert_eq!(l.variable(), 2);
        assert!(l.polarity());
        assert_eq!(l.to_dimacs(), 3);

        let l = PackedLiteral::from_dimacs(-1);
        assert_eq!(l.variable(), 0);
        assert!(!l.polarity());
        assert_eq!(l.to_dimacs(), -1);
    }
}
