/*!
Tools for building a context.

# Basic methods

The library has two basic methods for building a context:
- [register_atom](crate::context::GenericContext::register_atom), to make an atom (and its kind) known to the context.
- [add_nogood](crate::context::GenericContext::add_nogood), to add a nogood.

A ground program may be added to a context by interweaving these two methods, together with the [definitions](crate::db::atom) of each atom, which are needed for justification.
In rough strokes, the pattern is to:
- Register each atom of the program, and an atom for each rule body.
- Record the body of each body atom, and the head the body supports.
- Add the nogoods which relate heads, bodies, and atoms.

For the most part, it is simpler to bundle the above into a [GroundBatch](grounder::GroundBatch) and [ingest](crate::context::GenericContext::ingest) the batch, or to [read](crate::context::GenericContext::read_program) a program in text.
The [translation](mod@translate) of a program into nogoods is the same in each case.

# Examples

A program read from text.

```rust
# use otter_asp::context::Context;
# use otter_asp::config::Config;
# use otter_asp::reports::Report;
let mut the_context = Context::from_config(Config::default());
let store = the_context.read_program("a :- not b. b :- not a. c :- a.".as_bytes()).unwrap();

assert!(the_context.solve().is_ok());
assert_eq!(the_context.report(), Report::Satisfiable);
```

A context built using basic methods, with two atoms which may not both hold, and may not both be false.
As neither atom is the head of a rule, the context has no answer set.

```rust
# use otter_asp::context::Context;
# use otter_asp::config::Config;
# use otter_asp::reports::Report;
# use otter_asp::structures::{atom::AtomKind, nogood::{NoGood, NoGoodKind}};
let mut the_context = Context::from_config(Config::default());
the_context.register_atom(1, AtomKind::Basic, false).unwrap();
the_context.register_atom(2, AtomKind::Basic, false).unwrap();

assert!(the_context.add_nogood(NoGood::new([1, 2], NoGoodKind::Static)).is_ok());
assert!(the_context.add_nogood(NoGood::new([-1, -2], NoGoodKind::Static)).is_ok());
assert_eq!(the_context.solve(), Ok(Report::Unsatisfiable));
```
*/

mod atom_store;
pub use atom_store::AtomStore;

pub mod grounder;
mod nogoods;
pub mod program;
pub mod translate;
pub use translate::translate;

use crate::db::NoGoodKey;

/// Ok results when adding a nogood to the context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoGoodOk {
    /// The nogood was added to the context, with the given key.
    Added(NoGoodKey),

    /// The nogood was a tautology (and so was not added to the context).
    Tautology,

    /// The nogood cannot be satisfied given the nogoods already added.
    Unsatisfiable,
}
