/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library, e.g.

```rust,ignore
log::trace!(target: targets::PROPAGATION, "Conflict on {key}");
```

Note, no log implementation is provided.
The command line interface initialises [env_logger](https://docs.rs/env_logger) when built with the `cli-log` feature, and so a filter such as `RUST_LOG=justification=trace` narrows output to a single target.
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [propagation](crate::procedures::propagate)
    pub const PROPAGATION: &str = "propagation";

    /// Logs related to [analysis](crate::procedures::analysis)
    pub const ANALYSIS: &str = "analysis";

    /// Logs related to [backjumping](crate::procedures::backjump)
    pub const BACKJUMP: &str = "backjump";

    /// Logs related to [justification](crate::procedures::justification)
    pub const JUSTIFICATION: &str = "justification";

    /// Logs related to [decisions](crate::procedures::decision)
    pub const DECISION: &str = "decision";

    /// Logs related to [reboots](crate::reboot)
    pub const REBOOT: &str = "reboot";

    /// Logs related to the [nogood database](crate::db::nogood)
    pub const NOGOOD_DB: &str = "nogood_db";

    /// Logs related to the [assignment](crate::db::assignment)
    pub const VALUATION: &str = "valuation";

    /// Logs related to the [grounder boundary](crate::builder::grounder)
    pub const GROUNDING: &str = "grounding";

    /// Logs related to nogood deletion
    pub const REDUCTION: &str = "reduction";
}
