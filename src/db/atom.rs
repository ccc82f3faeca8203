/*!
A database of atom related things.

Primarily, the tags and definitions of each atom, and the activity of each atom.

# Definitions

A *definition* of an atom is a body which, when it holds, gives support to the atom:
- The definition of a rule body atom is the body itself.
- The definitions of a basic atom are the bodies of each rule with the atom as head.

Definitions are read by [justification](crate::procedures::justification), while nogoods carry the same information for propagation.

# Activity

Each atom has an activity, held on an [IndexHeap].
Only choice atoms are ever placed on the heap, as only choice atoms are decided on, though every atom has an activity.
*/

use crate::{
    config::{Activity, Config, ConfigOption},
    generic::index_heap::IndexHeap,
    structures::atom::{Atom, AtomKind},
    types::err,
};

/// The body of a (ground, normal) rule.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Body {
    /// Atoms which must be true.
    pub positive: Vec<Atom>,

    /// Atoms which must be false.
    pub negative: Vec<Atom>,
}

/// The tags and definitions of an atom.
#[derive(Clone, Debug, Default)]
struct AtomInfo {
    registered: bool,
    kind: AtomKind,
    choice: bool,
    fact: bool,
    /// For a rule body atom, the body.
    body: Option<Body>,
    /// For a basic atom, the rule body atoms of rules with the atom as head.
    rules: Vec<Atom>,
}

/// The atom database.
pub struct AtomDB {
    info: Vec<AtomInfo>,

    /// The activity of each atom.
    pub activity_heap: IndexHeap<Activity>,

    /// The bump applied to the activity of an atom, scaled with each decay.
    bump: ConfigOption<Activity>,

    decay: ConfigOption<Activity>,
}

impl AtomDB {
    pub fn new(config: &Config) -> Self {
        AtomDB {
            info: vec![AtomInfo::default()],
            activity_heap: IndexHeap::default(),
            bump: config.atom_bump.clone(),
            decay: config.atom_decay.clone(),
        }
    }

    /// The count of atoms, including the reserved atom.
    pub fn count(&self) -> usize {
        self.info.len()
    }

    /// The largest atom known to the database.
    pub fn max_atom(&self) -> Atom {
        (self.info.len() - 1) as Atom
    }

    fn info_mut(&mut self, atom: Atom) -> &mut AtomInfo {
        let required = atom as usize + 1;
        if self.info.len() < required {
            self.info.resize(required, AtomInfo::default());
        }
        &mut self.info[atom as usize]
    }

    /// Registers an atom with the given kind.
    ///
    /// Returns true if the atom was fresh, and false otherwise.
    pub fn register(&mut self, atom: Atom, kind: AtomKind, choice: bool) -> Result<bool, err::BuildError> {
        if atom == 0 {
            return Err(err::BuildError::ReservedAtom);
        }
        let info = self.info_mut(atom);
        let fresh = !info.registered;
        info.registered = true;
        info.kind = kind;
        info.choice = choice && kind.is_body();

        if fresh {
            self.activity_heap.add(atom as usize, 0.0);
        }
        if self.info[atom as usize].choice {
            self.activity_heap.activate(atom as usize);
        }
        Ok(fresh)
    }

    /// Records the body of a body atom, and (optionally) the head of the rule with the body.
    pub fn add_body(&mut self, body_atom: Atom, head: Option<Atom>, body: Body) -> Result<(), err::BuildError> {
        if !self.is_registered(body_atom) {
            return Err(err::BuildError::UnregisteredAtom(body_atom));
        }
        if !self.info[body_atom as usize].kind.is_body() {
            return Err(err::BuildError::NotABody(body_atom));
        }
        for atom in body.positive.iter().chain(body.negative.iter()) {
            if !self.is_registered(*atom) {
                return Err(err::BuildError::UnregisteredAtom(*atom));
            }
        }

        self.info[body_atom as usize].body = Some(body);
        if let Some(head) = head {
            if !self.is_registered(head) {
                return Err(err::BuildError::UnregisteredAtom(head));
            }
            let rules = &mut self.info[head as usize].rules;
            if !rules.contains(&body_atom) {
                rules.push(body_atom);
            }
        }
        Ok(())
    }

    /// Notes the atom is a fact.
    pub fn set_fact(&mut self, atom: Atom) -> Result<(), err::BuildError> {
        match self.is_registered(atom) {
            true => {
                self.info[atom as usize].fact = true;
                Ok(())
            }
            false => Err(err::BuildError::UnregisteredAtom(atom)),
        }
    }

    pub fn is_registered(&self, atom: Atom) -> bool {
        self.info.get(atom as usize).is_some_and(|info| info.registered)
    }

    pub fn kind(&self, atom: Atom) -> AtomKind {
        self.info.get(atom as usize).map(|info| info.kind).unwrap_or_default()
    }

    /// Whether the atom is a choice point.
    pub fn is_choice(&self, atom: Atom) -> bool {
        self.info.get(atom as usize).is_some_and(|info| info.choice)
    }

    pub fn is_fact(&self, atom: Atom) -> bool {
        self.info.get(atom as usize).is_some_and(|info| info.fact)
    }

    /// The body of a body atom.
    pub fn body(&self, atom: Atom) -> Option<&Body> {
        self.info.get(atom as usize).and_then(|info| info.body.as_ref())
    }

    /// The definitions of an atom, see the module documentation.
    pub fn definitions(&self, atom: Atom) -> Vec<&Body> {
        let Some(info) = self.info.get(atom as usize) else {
            return Vec::default();
        };
        match info.kind {
            AtomKind::RuleBody => info.body.iter().collect(),
            AtomKind::Basic => info
                .rules
                .iter()
                .filter_map(|body_atom| self.body(*body_atom))
                .collect(),
        }
    }

    /// Iterates over the registered atoms.
    pub fn atoms(&self) -> impl Iterator<Item = Atom> + '_ {
        self.info
            .iter()
            .enumerate()
            .filter(|(_, info)| info.registered)
            .map(|(atom, _)| atom as Atom)
    }

    /// Bumps the activities of each atom in the given iterator.
    ///
    /// If the bumped activity would be greater than the maximum allowed activity, the activity of every atom is rescaled.
    pub fn bump_relative(&mut self, atoms: impl Iterator<Item = Atom>) {
        for atom in atoms {
            let index = atom as usize;
            if index >= self.activity_heap.count() {
                continue;
            }
            if *self.activity_heap.value_at(index) + self.bump.value > self.bump.max {
                let heap_max = (1..self.activity_heap.count())
                    .map(|other| *self.activity_heap.value_at(other))
                    .fold(Activity::MIN, Activity::max);
                let factor = 1.0 / Activity::max(heap_max, self.bump.value);
                self.bump.value *= factor;
                self.activity_heap.apply_to_all(|activity| activity * factor);
                self.activity_heap.heapify();
            }

            self.activity_heap
                .revalue(index, *self.activity_heap.value_at(index) + self.bump.value);
            self.activity_heap.heapify_if_active(index);
        }
    }

    /// Increases the bump applied to atoms, so as to decay the relative activity of atoms already bumped.
    pub fn decay_activity(&mut self) {
        self.bump.value *= 1.0 / (1.0 - self.decay.value);
    }

    pub fn activity(&self, atom: Atom) -> Activity {
        match (atom as usize) < self.activity_heap.count() {
            true => *self.activity_heap.value_at(atom as usize),
            false => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn db() -> AtomDB {
        let mut db = AtomDB::new(&Config::default());
        db.register(1, AtomKind::Basic, false).unwrap();
        db.register(2, AtomKind::Basic, false).unwrap();
        db.register(3, AtomKind::RuleBody, true).unwrap();
        db.register(4, AtomKind::RuleBody, false).unwrap();
        db
    }

    #[test]
    fn definitions() {
        let mut db = db();
        let body_a = Body {
            positive: vec![],
            negative: vec![2],
        };
        let body_b = Body {
            positive: vec![2],
            negative: vec![],
        };
        db.add_body(3, Some(1), body_a.clone()).unwrap();
        db.add_body(4, Some(1), body_b.clone()).unwrap();

        assert_eq!(db.definitions(1), vec![&body_a, &body_b]);
        assert_eq!(db.definitions(3), vec![&body_a]);
        assert!(db.definitions(2).is_empty());
        assert_eq!(db.add_body(1, None, body_a), Err(err::BuildError::NotABody(1)));
    }

    #[test]
    fn only_choices_on_heap() {
        let mut db = db();
        assert!(db.is_choice(3));
        assert!(!db.is_choice(4));
        assert_eq!(db.activity_heap.pop_max(), Some(3));
        assert!(db.activity_heap.pop_max().is_none());
    }

    #[test]
    fn bump() {
        let mut db = db();
        db.bump_relative([1, 3].into_iter());
        db.decay_activity();
        db.bump_relative([3].into_iter());
        assert!(db.activity(3) > db.activity(1));
        assert!(db.activity(1) > db.activity(2));
    }
}
