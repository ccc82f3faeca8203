/*!
The boundary between a context and a grounder.

A grounder supplies a context with atoms, definitions, and nogoods in [batches](GroundBatch).
The first batch is requested before the search begins, and further batches are requested whenever the assignment has changed since the grounder was last asked.
So, a grounder may ground lazily, supplying nogoods relevant to the current assignment only.

An [EagerGrounder] supplies everything in the first batch, and nothing after.

Batches are [ingested](crate::context::GenericContext::ingest) in order:
1. Atoms are registered.
2. Definitions are recorded.
3. Facts are noted.
4. Nogoods are added, each with the context backjumping as required.

# Example

```rust
# use otter_asp::context::Context;
# use otter_asp::config::Config;
# use otter_asp::builder::grounder::{EagerGrounder, GroundAtom, GroundBatch};
# use otter_asp::structures::{atom::AtomKind, nogood::{NoGood, NoGoodKind}};
let mut batch = GroundBatch::default();
batch.atoms.push(GroundAtom { atom: 1, kind: AtomKind::Basic, choice: false });
batch.facts.push(1);
batch.nogoods.push(NoGood::headed(-1, [], NoGoodKind::Static).unwrap());

let mut the_context = Context::from_config(Config::default());
the_context.set_grounder(Box::new(EagerGrounder::new(batch)));

let answer_set = the_context.next_answer_set().unwrap().unwrap();
assert_eq!(answer_set.atoms(), &[1]);
```
*/

use crate::{
    builder::NoGoodOk,
    context::{ContextState, GenericContext},
    db::{assignment::Assignment, atom::Body},
    misc::log::targets::{self},
    structures::{
        atom::{Atom, AtomKind},
        literal::CLiteral,
        nogood::NoGood,
    },
    types::err::{self, ErrorKind},
};

/// An atom to be registered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GroundAtom {
    pub atom: Atom,
    pub kind: AtomKind,
    /// Whether the atom is a choice point, only relevant to body atoms.
    pub choice: bool,
}

/// The body of a body atom, and the head the body supports (if any).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GroundBody {
    pub atom: Atom,
    pub head: Option<Atom>,
    pub body: Body,
}

/// Things supplied by a grounder at some point.
#[derive(Clone, Debug, Default)]
pub struct GroundBatch {
    pub atoms: Vec<GroundAtom>,
    pub bodies: Vec<GroundBody>,
    pub facts: Vec<Atom>,
    pub nogoods: Vec<NoGood>,
}

impl GroundBatch {
    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty() && self.bodies.is_empty() && self.facts.is_empty() && self.nogoods.is_empty()
    }
}

/// A source of ground atoms and nogoods.
pub trait Grounder {
    /// The batch supplied before the search begins.
    fn initial(&mut self) -> GroundBatch;

    /// A batch given the current assignment, which may be empty.
    fn update(&mut self, assignment: &Assignment) -> GroundBatch;
}

/// A grounder which supplies a single batch, up front.
pub struct EagerGrounder {
    batch: Option<GroundBatch>,
}

impl EagerGrounder {
    pub fn new(batch: GroundBatch) -> Self {
        EagerGrounder { batch: Some(batch) }
    }
}

impl Grounder for EagerGrounder {
    fn initial(&mut self) -> GroundBatch {
        self.batch.take().unwrap_or_default()
    }

    fn update(&mut self, _assignment: &Assignment) -> GroundBatch {
        GroundBatch::default()
    }
}

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Registers an atom of the given kind, growing the structures of the context to accommodate the atom.
    ///
    /// Returns true if the atom was fresh.
    ///
    /// Literals are signed, and so an atom may not exceed [CLiteral::MAX].
    pub fn register_atom(&mut self, atom: Atom, kind: AtomKind, choice: bool) -> Result<bool, ErrorKind> {
        if atom > CLiteral::MAX as Atom {
            return Err(err::BuildError::AtomsExhausted.into());
        }
        let fresh = self.atom_db.register(atom, kind, choice)?;
        if fresh {
            self.assignment.grow_to(atom);
            self.watches.grow_to(atom);
        }
        if self.state == ContextState::Configuration {
            self.state = ContextState::Input;
        }
        Ok(fresh)
    }

    /// Sets the grounder of the context.
    ///
    /// The initial batch of the grounder is requested on the first call for an answer set.
    pub fn set_grounder(&mut self, grounder: Box<dyn Grounder>) {
        self.grounder = Some(grounder);
        self.synced = None;
    }

    /// Adds everything in a batch to the context.
    ///
    /// Nogoods are added in order, and the remaining nogoods are ignored if some nogood cannot be satisfied.
    pub fn ingest(&mut self, batch: GroundBatch) -> Result<(), ErrorKind> {
        log::trace!(target: targets::GROUNDING,
            "Ingesting {} atoms, {} bodies, {} facts, {} nogoods",
            batch.atoms.len(), batch.bodies.len(), batch.facts.len(), batch.nogoods.len());

        for ground in batch.atoms {
            self.register_atom(ground.atom, ground.kind, ground.choice)?;
        }
        for ground in batch.bodies {
            self.atom_db.add_body(ground.atom, ground.head, ground.body)?;
        }
        for fact in batch.facts {
            self.atom_db.set_fact(fact)?;
        }
        for nogood in batch.nogoods {
            if let NoGoodOk::Unsatisfiable = self.add_nogood(nogood)? {
                break;
            }
        }

        if self.state == ContextState::Configuration {
            self.state = ContextState::Input;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::Config,
        context::Context,
        structures::{literal::{CLiteral, Literal}, nogood::NoGoodKind, truth::Truth},
    };

    /// Supplies the nogood {-1, -2} once atom 1 has a value.
    struct LazyGrounder {
        supplied: bool,
    }

    impl Grounder for LazyGrounder {
        fn initial(&mut self) -> GroundBatch {
            let mut batch = GroundBatch::default();
            for atom in [1, 2] {
                batch.atoms.push(GroundAtom {
                    atom,
                    kind: AtomKind::Basic,
                    choice: false,
                });
            }
            batch
        }

        fn update(&mut self, assignment: &Assignment) -> GroundBatch {
            let mut batch = GroundBatch::default();
            if !self.supplied && assignment.value_of(1).is_some() {
                self.supplied = true;
                batch
                    .nogoods
                    .push(NoGood::new([CLiteral::new(1, false), CLiteral::new(2, false)], NoGoodKind::Static));
            }
            batch
        }
    }

    #[test]
    fn register_grows() {
        let mut context = Context::from_config(Config::default());
        assert_eq!(context.register_atom(3, AtomKind::Basic, false), Ok(true));
        assert_eq!(context.register_atom(3, AtomKind::Basic, false), Ok(false));
        assert_eq!(context.assignment.max_atom(), 3);
        assert_eq!(context.state, ContextState::Input);
        assert!(context.register_atom(0, AtomKind::Basic, false).is_err());
    }

    #[test]
    fn atoms_fit_literals() {
        let mut context = Context::from_config(Config::default());
        let too_large = CLiteral::MAX as Atom + 1;

        assert_eq!(
            context.register_atom(too_large, AtomKind::Basic, false),
            Err(ErrorKind::Build(err::BuildError::AtomsExhausted))
        );
        assert_eq!(
            context.register_atom(Atom::MAX, AtomKind::RuleBody, true),
            Err(ErrorKind::Build(err::BuildError::AtomsExhausted))
        );
        assert_eq!(context.assignment.max_atom(), 0);
        assert_eq!(context.state, ContextState::Configuration);
    }

    #[test]
    fn eager_once() {
        let mut grounder = EagerGrounder::new(GroundBatch {
            facts: vec![1],
            ..Default::default()
        });
        assert!(!grounder.initial().is_empty());
        assert!(grounder.initial().is_empty());
        assert!(grounder.update(&Assignment::default()).is_empty());
    }

    #[test]
    fn lazy_nogoods_are_ingested() {
        let mut context = Context::from_config(Config::default());
        context.set_grounder(Box::new(LazyGrounder { supplied: false }));

        // Closing assigns false to both atoms, after which {-1, -2} is supplied and violated at level zero.
        assert_eq!(context.next_answer_set(), Ok(None));
        assert_eq!(context.value_of(1), Some(Truth::False));
        assert_eq!(context.nogood_db.original_count(), 0);
        assert_eq!(context.state, ContextState::Unsatisfiable);
    }
}
