/*!
Nogoods, collections of literals which may not all hold together.

A nogood is the dual of a clause: where a clause asks that some literal holds, a nogood asks that some literal does not hold.
So, a nogood is *violated* when each of its literals holds, and is *unit* when all but one of its literals hold, in which case the complement of the remaining literal is implied.

# Heads

A nogood may have a *head*, a negative literal `-h` kept at index 0.
In addition to the usual (weak) reading, a headed nogood supports its head: when every other literal *strongly* holds the head atom `h` is true, rather than must-be-true.
For example, a rule `h :- b` contributes the nogood `{-h, +b}` with head `-h`.

# Normal form

The literals of a nogood are kept sorted (by atom and then polarity, after the head when present) without duplicates.
A nogood which contains both polarities of an atom can never be violated, and is a [tautology](NoGood::is_tautology).

```rust
# use otter_asp::structures::nogood::{NoGood, NoGoodKind};
let nogood = NoGood::new([3, -1, 3, 2], NoGoodKind::Static);
assert_eq!(nogood.literals(), &[-1, 2, 3]);
assert!(nogood.head().is_none());

let headed = NoGood::headed(-4, [2, -1], NoGoodKind::Static).unwrap();
assert_eq!(headed.literals(), &[-4, -1, 2]);
assert_eq!(headed.head(), Some(-4));
assert_eq!(headed.body(), &[-1, 2]);

assert!(NoGood::new([1, -1], NoGoodKind::Static).is_tautology());
assert!(NoGood::headed(3, [1], NoGoodKind::Static).is_err());
```
*/

use crate::{
    structures::literal::{atom_order, CLiteral, Literal},
    types::err,
};

/// The source of a nogood.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NoGoodKind {
    /// Part of the (ground) program.
    Static,

    /// Learnt during search, from a conflict or an unfounded set.
    Learnt,

    /// A support nogood, requiring some body of a true head to hold.
    Support,

    /// Added by the solver for its own purposes, e.g. to exclude an answer set already found.
    Internal,
}

impl std::fmt::Display for NoGoodKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Static => write!(f, "static"),
            Self::Learnt => write!(f, "learnt"),
            Self::Support => write!(f, "support"),
            Self::Internal => write!(f, "internal"),
        }
    }
}

/// A nogood, in normal form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NoGood {
    /// The literals, with the head (if any) at index 0.
    literals: Vec<CLiteral>,

    /// Whether the literal at index 0 is a head.
    headed: bool,

    /// The source of the nogood.
    kind: NoGoodKind,
}

impl NoGood {
    /// A nogood without a head from some collection of literals.
    pub fn new(literals: impl IntoIterator<Item = CLiteral>, kind: NoGoodKind) -> Self {
        let mut literals = literals.into_iter().collect::<Vec<_>>();
        literals.sort_unstable_by(atom_order);
        literals.dedup();
        NoGood {
            literals,
            headed: false,
            kind,
        }
    }

    /// A nogood with the given head.
    ///
    /// An error is returned if the head is not a negative literal.
    pub fn headed(
        head: CLiteral,
        body: impl IntoIterator<Item = CLiteral>,
        kind: NoGoodKind,
    ) -> Result<Self, err::NoGoodError> {
        if head.polarity() {
            return Err(err::NoGoodError::PositiveHead);
        }

        let mut literals = vec![head];
        let mut body = body
            .into_iter()
            .filter(|literal| *literal != head)
            .collect::<Vec<_>>();
        body.sort_unstable_by(atom_order);
        body.dedup();
        literals.append(&mut body);

        Ok(NoGood {
            literals,
            headed: true,
            kind,
        })
    }

    /// The literals of the nogood, with the head first when present.
    pub fn literals(&self) -> &[CLiteral] {
        &self.literals
    }

    /// The head of the nogood, if present.
    pub fn head(&self) -> Option<CLiteral> {
        match self.headed {
            true => self.literals.first().copied(),
            false => None,
        }
    }

    /// The literals of the nogood other than the head.
    pub fn body(&self) -> &[CLiteral] {
        match self.headed {
            true => &self.literals[1..],
            false => &self.literals,
        }
    }

    /// The source of the nogood.
    pub fn kind(&self) -> NoGoodKind {
        self.kind
    }

    /// The number of literals in the nogood.
    pub fn size(&self) -> usize {
        self.literals.len()
    }

    /// Whether the nogood contains some literal and its negation.
    pub fn is_tautology(&self) -> bool {
        let body = self.body();
        if let Some(head) = self.head() {
            if body.contains(&head.negate()) {
                return true;
            }
        }
        // Sorted by atom, so complementary literals are adjacent.
        body.windows(2).any(|pair| pair[0] == pair[1].negate())
    }

    /// Consumes the nogood, returning the literals.
    pub fn into_literals(self) -> Vec<CLiteral> {
        self.literals
    }
}

impl std::fmt::Display for NoGood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for (index, literal) in self.literals.iter().enumerate() {
            match index == 0 && self.headed {
                true => write!(f, " *{literal:+}")?,
                false => write!(f, " {literal:+}")?,
            }
        }
        write!(f, " }}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normal_form() {
        let nogood = NoGood::new([5, -2, 5, -7, 1], NoGoodKind::Learnt);
        assert_eq!(nogood.literals(), &[1, -2, 5, -7]);
        assert_eq!(nogood.body(), nogood.literals());
        assert!(!nogood.is_tautology());
    }

    #[test]
    fn head_kept_first() {
        let nogood = NoGood::headed(-9, [3, -9, -1], NoGoodKind::Static).unwrap();
        assert_eq!(nogood.literals(), &[-9, -1, 3]);
        assert_eq!(nogood.size(), 3);
        assert!(!nogood.is_tautology());
    }

    #[test]
    fn tautologies() {
        assert!(NoGood::new([2, 3, -2], NoGoodKind::Static).is_tautology());
        assert!(NoGood::headed(-2, [1, 2], NoGoodKind::Static)
            .unwrap()
            .is_tautology());
    }

    #[test]
    fn display() {
        let nogood = NoGood::headed(-3, [1, -2], NoGoodKind::Static).unwrap();
        assert_eq!(format!("{nogood}"), "{ *-3 +1 -2 }");
    }
}
