//! A library for finding the answer sets of ground normal logic programs.
//!
//! otter_asp is a conflict-driven nogood learning engine for answer set programs.
//! In place of the usual two-valued assignment, otter_asp assigns each atom one of three values: true, false, or *must-be-true*.
//! An atom which is must-be-true is required to hold, though has (so far) no derivation, and an answer set is found only once every such atom has been justified.
//!
//! # Orientation
//!
//! The library is designed around the core structure of a [context].
//!
//! Contexts are built with a configuration, and a program is added either as [text](crate::context::GenericContext::read_program), through a [grounder](crate::builder::grounder), or [programatically](crate::context::GenericContext::add_nogood).
//!
//! Internally, and at a high-level, a search is viewed in terms of manipulation of, and relationships between, a handful of databases.
//! Notably:
//! - The nogoods of a program, together with learnt nogoods, are stored in a [nogood database](crate::db::nogood).
//! - The current assignment, and the trail of decisions and consequences which led to the assignment, are stored in the [assignment](crate::db::assignment).
//! - The kinds and definitions of atoms are stored in an [atom database](crate::db::atom).
//!
//! Useful starting points, then, may be:
//! - The high-level [search procedure](crate::procedures::solve) to inspect the dynamics of a search.
//! - [Propagation](crate::procedures::propagate) and [justification](crate::procedures::justification), to see how the three values interact.
//! - The [database module](crate::db) to inspect the data considered during a search.
//! - The [configuration](crate::config) to see what features are supported.
//!
//! # Examples
//!
//! + Find every answer set of a program.
//!
//! ```rust
//! # use otter_asp::config::Config;
//! # use otter_asp::context::Context;
//! let program = "
//!   a :- not b.
//!   b :- not a.
//!   c :- a.
//!   c :- b.
//! ";
//!
//! let mut the_context = Context::from_config(Config::default());
//! let store = the_context.read_program(program.as_bytes()).unwrap();
//!
//! let mut answer_sets = the_context
//!     .answer_sets()
//!     .map(|answer_set| store.names_of(&answer_set.unwrap()).join(" "))
//!     .collect::<Vec<_>>();
//! answer_sets.sort();
//!
//! assert_eq!(answer_sets, vec!["a c", "b c"]);
//! ```
//!
//! + A program without an answer set, due to a positive loop.
//!
//! ```rust
//! # use otter_asp::config::Config;
//! # use otter_asp::context::Context;
//! # use otter_asp::reports::Report;
//! let mut the_context = Context::from_config(Config::default());
//! the_context.read_program("p :- q. q :- p. :- not p.".as_bytes()).unwrap();
//!
//! assert_eq!(the_context.solve(), Ok(Report::Unsatisfiable));
//! ```
//!
//! # Logs
//!
//! To help diagnose issues (somewhat) detailed calls to [log!](log) are made, and a variety of targets are defined in order to help narrow output to relevant parts of the library.
//! As logging is only built on request, and further can be requested by level, logs are verbose.
//!
//! The targets are listed in [misc::log].
//!
//! For example, when used with [env_logger](https://docs.rs/env_logger/latest/env_logger/):
//!
//! ```sh
//! RUST_LOG=justification=trace cargo run --features cli-log -- program.lp
//! ```

pub mod builder;
pub mod config;
pub mod context;
pub mod db;
pub mod generic;
pub mod misc;
pub mod procedures;
pub mod reboot;
pub mod reports;
pub mod structures;
pub mod types;
