use std::time::Duration;

/// Counts of events in a search which are of interest outside of the library.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Statistics {
    /// A count of decisions made.
    pub choices: usize,

    /// A count of levels undone by chronological backtracking.
    pub backtracks: usize,

    /// A count of backjumps made.
    pub backjumps: usize,

    /// A count of levels undone by backjumps.
    pub backtracks_within_backjumps: usize,

    /// A count of complete assignments with some must-be-true atom.
    pub mbt_at_fixpoint: usize,

    /// A count of conflicts found after closing the assignment.
    pub conflicts_after_closing: usize,

    /// A count of learnt nogoods deleted.
    pub deleted_nogoods: usize,
}

impl std::fmt::Display for Statistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "c choices                      {}", self.choices)?;
        writeln!(f, "c backtracks                   {}", self.backtracks)?;
        writeln!(f, "c backjumps                    {}", self.backjumps)?;
        writeln!(f, "c backtracks within backjumps  {}", self.backtracks_within_backjumps)?;
        writeln!(f, "c mbt at fixpoint              {}", self.mbt_at_fixpoint)?;
        writeln!(f, "c conflicts after closing      {}", self.conflicts_after_closing)?;
        write!(f, "c deleted nogoods              {}", self.deleted_nogoods)
    }
}

/// Counts for various things which count, roughly.
#[derive(Debug, Default)]
pub struct Counters {
    /// A count of every conflict seen during a solve.
    pub total_conflicts: usize,

    /// The total number of iterations through a solve.
    pub total_iterations: usize,

    /// A count of propagated trail entries.
    pub propagations: usize,

    /// Propagations since the last reboot.
    pub fresh_propagations: usize,

    /// Decisions since the last reboot.
    pub fresh_decisions: usize,

    /// Nogoods added since the last reboot.
    pub fresh_additions: usize,

    /// The number of reboots through a solve.
    pub reboots: usize,

    /// The number of answer sets found.
    pub answer_sets: usize,

    /// The time taken during a solve.
    pub time: Duration,

    /// Statistics of interest outside of the library.
    pub statistics: Statistics,
}
