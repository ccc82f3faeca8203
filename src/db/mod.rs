//! Databases for holding information relevant to a solve.
//!
//! - [The atom database](crate::db::atom)
//!   + Tags, definitions, and activity of atoms.
//! - [The assignment](crate::db::assignment)
//!   + The value of each atom, together with the [trail](crate::db::trail) of decisions and consequences.
//! - [The nogood database](crate::db::nogood)
//!   + A collection of nogoods, each indexed by a nogood key.
//!     From an external perspective there are two important kinds of nogood:
//!     * Original nogoods, from a program, or added by the solver to exclude an answer set.
//!     * Additions, learnt by some procedure and removable.
//! - [Watch lists](crate::db::watches)

pub mod assignment;
pub mod atom;
mod keys;
pub use keys::*;
pub mod nogood;
pub mod trail;
pub mod watches;

/// The index of a decision level.
pub type LevelIndex = u32;
