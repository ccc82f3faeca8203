/*!
Reboots, aka. restarts.

A reboot abandons the current branch of the search by backjumping to level zero.
Every nogood, and the activity of every atom, is kept.

Whether to reboot is decided by a [RebootStrategy].
A strategy is told of events during a solve, e.g. that a nogood was learnt, and is asked whether a reboot is scheduled once per iteration of the solve.
Each event is a no-op by default, so a strategy only implements the events relevant to the strategy.

| Strategy | Reboot when |
|---|---|
| [FixedIteration] | every n iterations of a solve |
| [FixedLearned] | every n learnt nogoods |
| [LubyLearned] | the count of learnt and enumeration nogoods reaches the next (scaled) element of the Luby sequence |
| [DynamicLearnedInterval] | the count of nogoods added during the search (learnt, enumeration, or justification) reaches an interval adjusted by the efficiency of the search |
| [AnswerSetFound] | an answer set is found |
| [CompleteAssignment] | the assignment is complete, whether an answer set or an unfounded set |

A strategy may be built from a [Config] through [from_config].

```rust
# use otter_asp::reboot::{LubyLearned, RebootStrategy, SearchMeasure};
let mut strategy = LubyLearned::new(1);
assert!(!strategy.is_reboot_scheduled());

strategy.new_learned_nogood();
assert!(strategy.is_reboot_scheduled());

strategy.reboot_performed(&SearchMeasure::default());
assert!(!strategy.is_reboot_scheduled());
```
*/

mod dynamic;
mod events;
mod fixed;
mod luby;

pub use dynamic::DynamicLearnedInterval;
pub use events::{AnswerSetFound, CompleteAssignment};
pub use fixed::{FixedIteration, FixedLearned};
pub use luby::LubyLearned;

use crate::config::{Config, RebootKind};

/// A summary of the search since the last reboot, given to a strategy when a reboot is performed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchMeasure {
    /// A count of assignments propagated.
    pub propagations: usize,

    /// A count of decisions made.
    pub decisions: usize,
}

impl SearchMeasure {
    /// Propagations per decision.
    pub fn efficiency(&self) -> f64 {
        self.propagations as f64 / std::cmp::max(1, self.decisions) as f64
    }
}

/// A strategy for scheduling reboots.
pub trait RebootStrategy {
    /// Whether a reboot should be performed.
    fn is_reboot_scheduled(&self) -> bool;

    /// Notes a reboot was performed, with a summary of the search since the previous reboot.
    fn reboot_performed(&mut self, measure: &SearchMeasure);

    fn next_iteration(&mut self) {}

    fn decision_made(&mut self) {}

    fn conflict_encountered(&mut self) {}

    /// Any nogood was added during a solve.
    fn new_nogood(&mut self) {}

    /// A nogood was learnt through conflict analysis.
    fn new_learned_nogood(&mut self) {}

    /// A nogood excluding an answer set was added.
    fn new_enumeration_nogood(&mut self) {}

    /// A nogood ruling out an unfounded set was added.
    fn new_justification_nogood(&mut self) {}

    /// The assignment was revised following an unfounded set.
    fn backtrack_justified(&mut self) {}

    fn answer_set_found(&mut self) {}
}

/// The reboot strategy specified by a config.
pub fn from_config(config: &Config) -> Box<dyn RebootStrategy> {
    let interval = config.reboot_interval.value;
    match config.reboot_strategy.value {
        RebootKind::FixedIteration => Box::new(FixedIteration::new(interval)),
        RebootKind::FixedLearned => Box::new(FixedLearned::new(interval)),
        RebootKind::LubyLearned => Box::new(LubyLearned::new(interval)),
        RebootKind::DynamicLearned => Box::new(DynamicLearnedInterval::new(interval)),
        RebootKind::AnswerSetFound => Box::new(AnswerSetFound::default()),
        RebootKind::CompleteAssignment => Box::new(CompleteAssignment::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strategy_from_config() {
        let mut config = Config::default();
        config.reboot_strategy.value = RebootKind::FixedIteration;
        config.reboot_interval.value = 2;

        let mut strategy = from_config(&config);
        strategy.next_iteration();
        assert!(!strategy.is_reboot_scheduled());
        strategy.next_iteration();
        assert!(strategy.is_reboot_scheduled());
    }

    #[test]
    fn efficiency() {
        let measure = SearchMeasure {
            propagations: 30,
            decisions: 4,
        };
        assert_eq!(measure.efficiency(), 7.5);
        assert_eq!(SearchMeasure::default().efficiency(), 0.0);
    }
}
