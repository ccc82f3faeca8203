//! Configuration of reboots.

use std::str::FromStr;

/// The reboot strategies available to a context.
///
/// Each strategy takes a single parameter, [reboot_interval](crate::config::Config::reboot_interval), read as:
/// - The count of iterations between reboots, for [FixedIteration](RebootKind::FixedIteration).
/// - The count of learnt nogoods between reboots, for [FixedLearned](RebootKind::FixedLearned).
/// - The scale of the Luby sequence, for [LubyLearned](RebootKind::LubyLearned).
/// - The first interval, for [DynamicLearned](RebootKind::DynamicLearned).
///
/// The parameter is ignored by the remaining strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum RebootKind {
    FixedIteration = 0,
    FixedLearned,
    LubyLearned,
    DynamicLearned,
    AnswerSetFound,
    CompleteAssignment,
}

impl RebootKind {
    pub const MIN: RebootKind = RebootKind::FixedIteration;

    pub const MAX: RebootKind = RebootKind::CompleteAssignment;
}

impl std::fmt::Display for RebootKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FixedIteration => write!(f, "iteration"),
            Self::FixedLearned => write!(f, "learned"),
            Self::LubyLearned => write!(f, "luby"),
            Self::DynamicLearned => write!(f, "dynamic"),
            Self::AnswerSetFound => write!(f, "answer"),
            Self::CompleteAssignment => write!(f, "complete"),
        }
    }
}

impl FromStr for RebootKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "iteration" => Ok(Self::FixedIteration),
            "learned" => Ok(Self::FixedLearned),
            "luby" => Ok(Self::LubyLearned),
            "dynamic" => Ok(Self::DynamicLearned),
            "answer" => Ok(Self::AnswerSetFound),
            "complete" => Ok(Self::CompleteAssignment),
            _unknown_string => Err(()),
        }
    }
}
