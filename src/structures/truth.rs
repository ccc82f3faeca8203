/*!
The values an atom may take.

An atom is either unassigned, represented by `None` in an `Option<Truth>`, or has one of three values:
- [True](Truth::True), the atom holds and has support.
- [False](Truth::False), the atom does not hold.
- [MustBeTrue](Truth::MustBeTrue), the atom holds, though a justification for it is yet to be found.

Must-be-true is weaker than true.
So, an atom which is must-be-true may later be *promoted* to true, while an atom which is true is never demoted.

```rust
# use otter_asp::structures::truth::Truth;
assert!(Truth::MustBeTrue.as_bool());
assert!(!Truth::MustBeTrue.is_strong());
assert_eq!(Truth::MustBeTrue.combine(Truth::True), Some(Truth::True));
assert_eq!(Truth::True.combine(Truth::False), None);
```
*/

/// The value of an assigned atom.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Truth {
    /// True, with support.
    True,

    /// False.
    False,

    /// True, without support (yet).
    MustBeTrue,
}

impl Truth {
    /// The boolean value of the truth, with must-be-true counted as true.
    pub fn as_bool(&self) -> bool {
        !matches!(self, Truth::False)
    }

    /// Whether the value is true or false, i.e. not must-be-true.
    pub fn is_strong(&self) -> bool {
        !matches!(self, Truth::MustBeTrue)
    }

    /// The truth which results from assigning `other` on top of `self`, or `None` if the two conflict.
    pub fn combine(&self, other: Truth) -> Option<Truth> {
        match (self, other) {
            (Truth::False, Truth::False) => Some(Truth::False),
            (Truth::False, _) | (_, Truth::False) => None,
            (Truth::True, _) | (_, Truth::True) => Some(Truth::True),
            (Truth::MustBeTrue, Truth::MustBeTrue) => Some(Truth::MustBeTrue),
        }
    }
}

impl std::fmt::Display for Truth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::True => write!(f, "T"),
            Self::False => write!(f, "F"),
            Self::MustBeTrue => write!(f, "M"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combinations() {
        assert_eq!(Truth::False.combine(Truth::False), Some(Truth::False));
        assert_eq!(Truth::False.combine(Truth::MustBeTrue), None);
        assert_eq!(Truth::MustBeTrue.combine(Truth::False), None);
        assert_eq!(Truth::True.combine(Truth::MustBeTrue), Some(Truth::True));
        assert_eq!(Truth::MustBeTrue.combine(Truth::MustBeTrue), Some(Truth::MustBeTrue));
    }
}
