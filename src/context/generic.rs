use crate::{
    builder::grounder::Grounder,
    config::Config,
    db::{assignment::Assignment, atom::AtomDB, nogood::NoGoodDB, watches::Watches},
    reboot::RebootStrategy,
    reports::Report,
    structures::{atom::Atom, truth::Truth},
};

use super::{ContextState, Counters, Statistics};

/// A generic context, parameratised to a source of randomness.
///
/// Requires a source of [rng](rand::Rng) which (also) implements [Default].
///
/// [Default] is used in calls to [make_decision](GenericContext::make_decision) to appease the borrow checker, and may be relaxed with a different implementation.
///
/// # Example
///
/// ```rust
/// # use otter_asp::context::GenericContext;
/// # use otter_asp::generic::random::MinimalPCG32;
/// # use otter_asp::config::Config;
/// let context = GenericContext::<MinimalPCG32>::from_config(Config::default());
/// ```
pub struct GenericContext<R: rand::Rng + std::default::Default> {
    /// The configuration of a context.
    pub config: Config,

    /// Counters related to a context/solve.
    pub counters: Counters,

    /// The atom database.
    /// See [db::atom](crate::db::atom) for details.
    pub atom_db: AtomDB,

    /// The assignment, and trail.
    /// See [db::assignment](crate::db::assignment) for details.
    pub assignment: Assignment,

    /// The nogood database.
    /// See [db::nogood](crate::db::nogood) for details.
    pub nogood_db: NoGoodDB,

    /// Watch lists, indexed by literal.
    pub watches: Watches,

    /// The status of the context.
    pub state: ContextState,

    /// The source of rng.
    pub rng: R,

    /// The reboot strategy.
    pub(crate) reboot: Box<dyn RebootStrategy>,

    /// A grounder, to be asked for nogoods as the assignment changes.
    pub(crate) grounder: Option<Box<dyn Grounder>>,

    /// The count of modifications to the assignment when the grounder was last updated.
    pub(crate) synced: Option<usize>,

    /// Whether every atom was assigned by closing, since the last backjump.
    pub(crate) after_closing: bool,
}

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// A context from a config and a source of randomness.
    pub fn from_config_with_rng(config: Config, rng: R) -> Self {
        Self {
            atom_db: AtomDB::new(&config),
            nogood_db: NoGoodDB::new(&config),
            reboot: crate::reboot::from_config(&config),

            config,

            assignment: Assignment::default(),
            watches: Watches::default(),
            counters: Counters::default(),

            rng,
            state: ContextState::Configuration,

            grounder: None,
            synced: None,
            after_closing: false,
        }
    }

    /// A report on the state of the context.
    pub fn report(&self) -> Report {
        Report::from(self.state)
    }

    /// Statistics of the solve.
    pub fn statistics(&self) -> Statistics {
        self.counters.statistics
    }

    /// The value of an atom, if assigned.
    pub fn value_of(&self, atom: Atom) -> Option<Truth> {
        self.assignment.value_of(atom)
    }

    /// Replaces the reboot strategy of the context.
    pub fn set_reboot_strategy(&mut self, strategy: Box<dyn RebootStrategy>) {
        self.reboot = strategy;
    }
}
