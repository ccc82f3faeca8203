//! Literals are atoms paired with a (boolean) polarity.
//!
//! The canonical literal is a signed integer, [CLiteral], with the sign indicating the polarity.
//! Though, all interaction goes through the [Literal] trait.
//!
//! ```rust
//! # use otter_asp::structures::literal::{CLiteral, Literal};
//! let literal = CLiteral::new(79, true);
//!
//! assert!(literal.polarity());
//! assert_eq!(literal.atom(), 79);
//! assert!(!literal.negate().polarity());
//! assert_eq!(literal.negate().negate(), literal);
//! ```
//!
//! With respect to a three-valued assignment:
//! - `+a` *holds* when `a` is true or must-be-true, and *strongly holds* when `a` is true.
//! - `-a` *holds*, and *strongly holds*, when `a` is false.

use crate::structures::atom::Atom;

/// Something which has methods for returning an atom and a polarity, etc.
pub trait Literal: std::cmp::Ord + std::hash::Hash + Copy {
    /// A fresh literal, specified by pairing an atom with a boolean.
    fn new(atom: Atom, polarity: bool) -> Self;

    /// The negation of the literal.
    fn negate(&self) -> Self;

    /// The atom of the literal.
    fn atom(&self) -> Atom;

    /// The polarity of the literal.
    fn polarity(&self) -> bool;

    /// A dense index for the literal, suitable for indexing per-literal structures.
    ///
    /// The indicies of `+a` and `-a` are `2a + 1` and `2a`, respectively.
    fn index(&self) -> usize {
        (2 * self.atom() as usize) + self.polarity() as usize
    }
}

/// The canonical literal.
pub type CLiteral = i32;

impl Literal for CLiteral {
    fn new(atom: Atom, polarity: bool) -> Self {
        match polarity {
            true => atom as CLiteral,
            false => -(atom as CLiteral),
        }
    }

    fn negate(&self) -> Self {
        -self
    }

    fn atom(&self) -> Atom {
        self.unsigned_abs()
    }

    fn polarity(&self) -> bool {
        self.is_positive()
    }
}

/// Orders literals by atom and then polarity, with `-a` before `+a`.
pub fn atom_order(a: &CLiteral, b: &CLiteral) -> std::cmp::Ordering {
    a.atom().cmp(&b.atom()).then(a.polarity().cmp(&b.polarity()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indicies() {
        let p = CLiteral::new(3, true);
        assert_eq!(p.index(), 7);
        assert_eq!(p.negate().index(), 6);
        assert_eq!(CLiteral::new(1, false).index(), 2);
    }

    #[test]
    fn ordering() {
        let mut literals: Vec<CLiteral> = vec![3, -1, 2, 1, -3];
        literals.sort_by(atom_order);
        assert_eq!(literals, vec![-1, 1, 2, -3, 3]);
    }
}
