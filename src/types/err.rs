//! Error types used in the library.
//!
//! - Some of these are internally expected, e.g. propagation errors are used to control the flow of a solve.
//! - Some are external, e.g. a program which fails to parse.
//! - Inconsistency errors signal a broken invariant, and so a defect in the library.
//!   These are fatal to a solve.
//!
//! Names of the error enums, for the most part, overlap with corresponding structs.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

use crate::{db::NoGoodKey, structures::atom::Atom};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Build(BuildError),
    Inconsistency(InconsistencyError),
    NoGood(NoGoodError),
    NoGoodDB(NoGoodDBError),
    Parse(ParseError),
    Propagation(PropagationError),

    /// A method was called in a state which does not support the method.
    InvalidState,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Build(e) => write!(f, "build error: {e:?}"),
            Self::Inconsistency(e) => write!(f, "internal inconsistency: {e:?}"),
            Self::NoGood(e) => write!(f, "malformed nogood: {e:?}"),
            Self::NoGoodDB(e) => write!(f, "nogood database: {e:?}"),
            Self::Parse(e) => write!(f, "parse error: {e}"),
            Self::Propagation(e) => write!(f, "propagation: {e:?}"),
            Self::InvalidState => write!(f, "invalid state"),
        }
    }
}

impl std::error::Error for ErrorKind {}

/// Noted errors while building a context.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BuildError {
    /// The reserved atom was used by a program.
    ReservedAtom,

    /// An atom was used before being registered.
    UnregisteredAtom(Atom),

    /// A body was declared for an atom which is not a body atom.
    NotABody(Atom),

    /// There are no more fresh atoms.
    AtomsExhausted,
}

impl From<BuildError> for ErrorKind {
    fn from(e: BuildError) -> Self {
        ErrorKind::Build(e)
    }
}

/// A broken invariant.
/// Each of these is unexpected.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InconsistencyError {
    /// A propagated atom without an antecedent was met during conflict analysis.
    MissingAntecedent(Atom),

    /// Conflict analysis left the current level without finding a unique implication point.
    NoUIP,

    /// A literal of a conflict was found without a value.
    UnassignedLiteral,

    /// The watches of a nogood do not match the watch lists.
    CorruptWatch(NoGoodKey),

    /// The trail is out of order with respect to decision levels.
    TrailOrder,

    /// A nogood is violated at a propagation fixpoint.
    ViolatedNoGood(NoGoodKey),

    /// A nogood is unit at a propagation fixpoint, though the implied value is missing.
    MissedPropagation(NoGoodKey),

    /// An atom outside of an unfounded set was found to be neither justified nor blocked.
    UnblockedDefinition(Atom),

    /// Justification was requested of an atom which is not must-be-true.
    NotMustBeTrue(Atom),
}

impl From<InconsistencyError> for ErrorKind {
    fn from(e: InconsistencyError) -> Self {
        ErrorKind::Inconsistency(e)
    }
}

/// Noted errors when forming a nogood.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NoGoodError {
    /// The head of a nogood must be a negative literal.
    PositiveHead,
}

impl From<NoGoodError> for ErrorKind {
    fn from(e: NoGoodError) -> Self {
        ErrorKind::NoGood(e)
    }
}

/// Noted errors with respect to the nogood database.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NoGoodDBError {
    /// A key to a nogood which has been removed, or never existed.
    Missing(NoGoodKey),

    /// There is no more room for nogoods.
    StorageExhausted,
}

impl From<NoGoodDBError> for ErrorKind {
    fn from(e: NoGoodDBError) -> Self {
        ErrorKind::NoGoodDB(e)
    }
}

/// Noted errors when parsing a ground program.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// A statement without a terminating '.'.
    MissingTerminator(usize),

    /// An empty atom, e.g. in `a :- , b.`.
    EmptyAtom(usize),

    /// The head of a rule is not an atom, e.g. `not a :- b.`.
    MalformedHead(usize),

    /// Some issue reading a line.
    Line(usize),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingTerminator(line) => write!(f, "statement without '.' at line {line}"),
            Self::EmptyAtom(line) => write!(f, "empty atom at line {line}"),
            Self::MalformedHead(line) => write!(f, "malformed head at line {line}"),
            Self::Line(line) => write!(f, "unable to read line {line}"),
        }
    }
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

/// Noted errors during propagation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PropagationError {
    /// The nogood with the given key is violated.
    /// This is expected from time to time, and a learning opportunity.
    Conflict(NoGoodKey),
}

impl From<PropagationError> for ErrorKind {
    fn from(e: PropagationError) -> Self {
        ErrorKind::Propagation(e)
    }
}
