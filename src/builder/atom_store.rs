use std::collections::HashMap;

use crate::structures::{answer_set::AnswerSet, atom::Atom};

/// A map between the names of atoms in a program and the atoms of a context.
///
/// Atoms are issued in order from 1, and atoms for rule bodies are issued from the same sequence, though have no name.
///
/// ```rust
/// # use otter_asp::builder::AtomStore;
/// let mut store = AtomStore::default();
/// let p = store.atom("p(1)");
/// let body = store.fresh_body();
///
/// assert_eq!(store.atom("p(1)"), p);
/// assert_eq!(store.name_of(p), Some("p(1)"));
/// assert_eq!(store.name_of(body), None);
/// assert_eq!(store.id_of("q"), None);
/// ```
#[derive(Debug)]
pub struct AtomStore {
    ids: HashMap<String, Atom>,

    /// Names indexed by atom, with None for the reserved atom and body atoms.
    names: Vec<Option<String>>,
}

impl Default for AtomStore {
    fn default() -> Self {
        AtomStore {
            ids: HashMap::default(),
            names: vec![None],
        }
    }
}

impl AtomStore {
    /// The atom with the given name, issuing a fresh atom if the name is new.
    pub fn atom(&mut self, name: &str) -> Atom {
        if let Some(atom) = self.ids.get(name) {
            return *atom;
        }
        let atom = self.names.len() as Atom;
        self.names.push(Some(name.to_owned()));
        self.ids.insert(name.to_owned(), atom);
        atom
    }

    /// A fresh atom, without a name.
    pub fn fresh_body(&mut self) -> Atom {
        let atom = self.names.len() as Atom;
        self.names.push(None);
        atom
    }

    /// The atom with the given name, if any.
    pub fn id_of(&self, name: &str) -> Option<Atom> {
        self.ids.get(name).copied()
    }

    /// The name of an atom, if the atom has a name.
    pub fn name_of(&self, atom: Atom) -> Option<&str> {
        self.names.get(atom as usize).and_then(|name| name.as_deref())
    }

    /// The names of the atoms of an answer set, in order of atom.
    pub fn names_of(&self, answer_set: &AnswerSet) -> Vec<&str> {
        answer_set
            .atoms()
            .iter()
            .filter_map(|atom| self.name_of(*atom))
            .collect()
    }

    /// The largest atom issued.
    pub fn max_atom(&self) -> Atom {
        (self.names.len() - 1) as Atom
    }
}
