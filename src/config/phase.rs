use std::str::FromStr;

/// How to choose the polarity of a decision on an atom, when no saved phase is available.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum PhaseInitializer {
    /// Decide every atom true.
    AllTrue = 0,

    /// Decide every atom false.
    AllFalse,

    /// Decide true or false with equal probability.
    Random,

    /// Decide rule bodies true, and all other atoms false.
    RulesTrueRestFalse,
}

impl PhaseInitializer {
    /// The minimum PhaseInitializer type.
    pub const MIN: PhaseInitializer = PhaseInitializer::AllTrue;

    /// The maximum PhaseInitializer type.
    pub const MAX: PhaseInitializer = PhaseInitializer::RulesTrueRestFalse;
}

impl std::fmt::Display for PhaseInitializer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AllTrue => write!(f, "alltrue"),
            Self::AllFalse => write!(f, "allfalse"),
            Self::Random => write!(f, "random"),
            Self::RulesTrueRestFalse => write!(f, "rulestrue"),
        }
    }
}

impl FromStr for PhaseInitializer {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "alltrue" => Ok(Self::AllTrue),
            "allfalse" => Ok(Self::AllFalse),
            "random" => Ok(Self::Random),
            "rulestrue" => Ok(Self::RulesTrueRestFalse),
            _unknown_string => Err(()),
        }
    }
}
