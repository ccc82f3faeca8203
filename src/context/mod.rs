/*!
The context --- to which programs are added and within which solves take place, etc.

Strictly, a [GenericContext] and a [Context].

The generic context is designed to be generic over various parameters.
Though, for the moment this is limited to the source of randomness.

Still, this helps distinguish generic context methods against those intended for external use or a particular application.
In particular, [from_config](Context::from_config) is implemented for a context rather than a generic context to avoid requiring a source of randomness to be supplied alongside a config.

# States

A context moves through the [states](ContextState) as follows:

```none
Configuration --(input)--> Input --(solve)--> Solving --+--> AnswerSet --(next)--> Solving
                                                        |
                                                        +--> Exhausted, if some answer set was found
                                                        |
                                                        +--> Unsatisfiable, otherwise
```

# Example
```rust
# use otter_asp::context::Context;
# use otter_asp::config::Config;
# use otter_asp::reports::Report;
let program = "a :- not b.
               b :- not a.";

let mut the_context = Context::from_config(Config::default());
let store = the_context.read_program(program.as_bytes()).unwrap();

let mut found = the_context
    .answer_sets()
    .map(|answer_set| store.names_of(&answer_set.unwrap()))
    .collect::<Vec<_>>();
found.sort();

assert_eq!(found, vec![vec!["a"], vec!["b"]]);
assert_eq!(the_context.report(), Report::Satisfiable);
```
*/

mod counters;
pub use counters::{Counters, Statistics};
mod generic;
pub use generic::GenericContext;
mod specific;
pub use specific::Context;

/// The state of a context.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum ContextState {
    /// The context allows for configuration.
    Configuration,

    /// The context allows input.
    Input,

    /// A search for an answer set is underway, or was interrupted.
    Solving,

    /// An answer set was found, and the assignment is the answer set.
    AnswerSet,

    /// Every answer set has been found, and at least one answer set was found.
    Exhausted,

    /// The program has no answer set.
    Unsatisfiable,
}

impl std::fmt::Display for ContextState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Configuration => write!(f, "Configuration"),
            Self::Input => write!(f, "Input"),
            Self::Solving => write!(f, "Solving"),
            Self::AnswerSet => write!(f, "AnswerSet"),
            Self::Exhausted => write!(f, "Exhausted"),
            Self::Unsatisfiable => write!(f, "Unsatisfiable"),
        }
    }
}
