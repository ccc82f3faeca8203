/*!
(The internal representation of) an atom.

Atoms are dense u32 handles issued by whoever builds the program, e.g. the [AtomStore](crate::builder::AtomStore).
The solver never looks inside an atom, it only reads the id and the tags attached when the atom was registered.

Each atom *u* used by a program is such that *u* > 0 and every atom below *u* has been registered.
This allows atoms to be used as the indicies of a structure, e.g. `assignment[a]`, without too much waste.

```rust
# use otter_asp::structures::atom::{Atom, AtomKind};
let atom: Atom = 3;
let kind = AtomKind::RuleBody;
assert!(atom > 0 && kind.is_body());
```

# Notes
- Id 0 is reserved and never stands for an atom of a program.
*/

/// An atom, aka. a 'variable'.
pub type Atom = u32;

/// The reserved atom, never used by a program.
pub const RESERVED_ATOM: Atom = 0;

/// The kinds of atom a ground program gives rise to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum AtomKind {
    /// An atom of the program, which may appear in an answer set.
    #[default]
    Basic,

    /// An atom standing for the body of some rule.
    RuleBody,
}

impl AtomKind {
    /// Whether the kind is [RuleBody](AtomKind::RuleBody).
    pub fn is_body(&self) -> bool {
        matches!(self, AtomKind::RuleBody)
    }
}

impl std::fmt::Display for AtomKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Basic => write!(f, "basic"),
            Self::RuleBody => write!(f, "body"),
        }
    }
}
