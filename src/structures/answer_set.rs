//! Answer sets, the basic atoms true in a stable model.
//!
//! Atoms are held sorted, so two answer sets are equal exactly when they contain the same atoms.

use crate::structures::atom::Atom;

/// The (sorted) basic atoms true in some stable model.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AnswerSet {
    atoms: Vec<Atom>,
}

impl AnswerSet {
    /// An answer set from some collection of atoms.
    pub fn from_atoms(atoms: impl IntoIterator<Item = Atom>) -> Self {
        let mut atoms = atoms.into_iter().collect::<Vec<_>>();
        atoms.sort_unstable();
        atoms.dedup();
        AnswerSet { atoms }
    }

    /// The atoms of the answer set, in ascending order.
    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    /// Whether the atom is part of the answer set.
    pub fn contains(&self, atom: Atom) -> bool {
        self.atoms.binary_search(&atom).is_ok()
    }

    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }
}

impl std::fmt::Display for AnswerSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for (index, atom) in self.atoms.iter().enumerate() {
            match index {
                0 => write!(f, " {atom}")?,
                _ => write!(f, ", {atom}")?,
            }
        }
        write!(f, " }}")
    }
}
