/*!
Configuration of a context.

All configuration for a context is contained within [Config], and each option is a [ConfigOption] which records bounds on the value of the option together with the latest [state](ContextState) of a context in which the option may be set.

```rust
# use otter_asp::config::{Config, PhaseInitializer};
let mut config = Config::default();
config.phase_initializer.value = PhaseInitializer::AllFalse;
assert!(config.reboot_interval.set_within_bounds(64));
assert!(!config.random_decision_bias.set_within_bounds(2.0));
```
*/

mod config_option;
pub use config_option::ConfigOption;

mod phase;
pub use phase::PhaseInitializer;

pub mod reboot;
pub use reboot::RebootKind;

pub mod vsids;
use vsids::VSIDS;

use crate::context::ContextState;

/// Representation used for the activity of atoms and nogoods.
pub type Activity = f64;

/// Literal block distance, a.k.a 'glue'.
///
/// See [On the Glucose SAT Solver](https://dx.doi.org/10.1142/S0218213018400018) for an overview of LBD.
pub type LBD = u32;

/// Representation for the probability of making a random decision.
pub type RandomDecisionBias = f64;

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// The activity with which the next atom bumped will be bumped by, dynamically adjusted.
    pub atom_bump: ConfigOption<Activity>,

    /// The decay to the activity of atoms, applied every [decay_period](Config::decay_period) conflicts.
    /// Implemented by scaling the bump by 1 / (1 - decay).
    pub atom_decay: ConfigOption<Activity>,

    /// The count of conflicts between each application of [atom_decay](Config::atom_decay).
    pub decay_period: ConfigOption<u32>,

    /// Whether to check the invariants of the trail and watches at each propagation fixpoint.
    pub checks: ConfigOption<bool>,

    /// Learnt nogoods with lbd within the bound (lbd ≤ bound) are never removed.
    pub glue_lbd: ConfigOption<LBD>,

    /// The activity with which the next nogood used during analysis will be bumped by.
    pub nogood_bump: ConfigOption<Activity>,

    /// The decay to the activity of nogoods, each conflict.
    pub nogood_decay: ConfigOption<Activity>,

    /// How to choose the polarity of a decision.
    pub phase_initializer: ConfigOption<PhaseInitializer>,

    /// Default to the last value of an atom when deciding on the atom.
    pub phase_saving: ConfigOption<bool>,

    /// The probability of deciding on a random (eligible) atom, rather than the most active.
    pub random_decision_bias: ConfigOption<RandomDecisionBias>,

    /// Permit (scheduled) reboots.
    pub reboot: ConfigOption<bool>,

    /// The parameter of the reboot strategy, see [RebootKind].
    pub reboot_interval: ConfigOption<u32>,

    /// Which reboot strategy to use.
    pub reboot_strategy: ConfigOption<RebootKind>,

    /// The count of conflicts between reductions of the learnt nogoods, with 0 disabling reductions.
    pub reduction_interval: ConfigOption<u32>,

    /// The seed of the source of randomness.
    pub seed: ConfigOption<u64>,

    /// The time limit for a solve, with a zero duration disabling the limit.
    pub time_limit: ConfigOption<std::time::Duration>,

    /// Which VSIDS variant to use during analysis.
    pub vsids_variant: ConfigOption<VSIDS>,
}

impl Default for Config {
    /// The default context is (roughly) configured to provide quick, deterministic, results.
    fn default() -> Self {
        Config {
            atom_bump: ConfigOption {
                name: "atom_bump",
                min: Activity::MIN,
                max: (2.0 as Activity).powi(512),
                max_state: ContextState::Configuration,
                value: 1.0,
            },

            atom_decay: ConfigOption {
                name: "atom_decay",
                min: 0.0,
                max: 0.5,
                max_state: ContextState::Configuration,
                value: 0.08,
            },

            decay_period: ConfigOption {
                name: "decay_period",
                min: 1,
                max: u32::MAX,
                max_state: ContextState::Configuration,
                value: 1,
            },

            checks: ConfigOption {
                name: "checks",
                min: false,
                max: true,
                max_state: ContextState::Solving,
                value: false,
            },

            glue_lbd: ConfigOption {
                name: "glue_lbd",
                min: LBD::MIN,
                max: LBD::MAX,
                max_state: ContextState::Configuration,
                value: 2,
            },

            nogood_bump: ConfigOption {
                name: "nogood_bump",
                min: Activity::MIN,
                max: (2.0 as Activity).powi(512),
                max_state: ContextState::Configuration,
                value: 1.0,
            },

            nogood_decay: ConfigOption {
                name: "nogood_decay",
                min: 0.0,
                max: 0.5,
                max_state: ContextState::Configuration,
                value: 50.0 * 1e-3,
            },

            phase_initializer: ConfigOption {
                name: "phase",
                min: PhaseInitializer::MIN,
                max: PhaseInitializer::MAX,
                max_state: ContextState::Configuration,
                value: PhaseInitializer::RulesTrueRestFalse,
            },

            phase_saving: ConfigOption {
                name: "phase_saving",
                min: false,
                max: true,
                max_state: ContextState::Configuration,
                value: false,
            },

            random_decision_bias: ConfigOption {
                name: "random_decision_bias",
                min: 0.0,
                max: 1.0,
                max_state: ContextState::Configuration,
                value: 0.0,
            },

            reboot: ConfigOption {
                name: "reboot",
                min: false,
                max: true,
                max_state: ContextState::Configuration,
                value: false,
            },

            reboot_interval: ConfigOption {
                name: "reboot_interval",
                min: 1,
                max: u32::MAX,
                max_state: ContextState::Configuration,
                value: 32,
            },

            reboot_strategy: ConfigOption {
                name: "reboot_strategy",
                min: RebootKind::MIN,
                max: RebootKind::MAX,
                max_state: ContextState::Configuration,
                value: RebootKind::LubyLearned,
            },

            reduction_interval: ConfigOption {
                name: "reduction_interval",
                min: 0,
                max: u32::MAX,
                max_state: ContextState::Configuration,
                value: 2_000,
            },

            seed: ConfigOption {
                name: "seed",
                min: u64::MIN,
                max: u64::MAX,
                max_state: ContextState::Configuration,
                value: 0,
            },

            time_limit: ConfigOption {
                name: "time_limit",
                min: std::time::Duration::from_secs(0),
                max: std::time::Duration::MAX,
                max_state: ContextState::Configuration,
                value: std::time::Duration::from_secs(0),
            },

            vsids_variant: ConfigOption {
                name: "vsids",
                min: VSIDS::MIN,
                max: VSIDS::MAX,
                max_state: ContextState::Configuration,
                value: VSIDS::Chaff,
            },
        }
    }
}
