/*!
Watch lists, indexed by literal.

A nogood is interested in a literal coming to hold, as a nogood with all literals holding is violated.
So, each list for a literal records the nogoods which should be examined when the literal comes to hold.

- Binary nogoods are recorded with the other literal of the nogood, and so may be propagated without access to the nogood database.
- Long nogoods are recorded by key on the lists of their two weakly watched literals.
- Headed long nogoods are also recorded by key on the *strong* list of their strongly watched literal, to be examined when the literal comes to *strongly* hold.
*/

use crate::{
    db::NoGoodKey,
    structures::{
        atom::Atom,
        literal::{CLiteral, Literal},
    },
};

/// A binary nogood, from the perspective of one of its literals.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BinaryWatch {
    /// The other literal of the nogood.
    pub other: CLiteral,

    /// The key to the nogood.
    pub key: NoGoodKey,

    /// Whether the other literal is the head of the nogood.
    pub other_is_head: bool,
}

/// The watch lists of a context.
#[derive(Default)]
pub struct Watches {
    binary: Vec<Vec<BinaryWatch>>,
    weak: Vec<Vec<NoGoodKey>>,
    strong: Vec<Vec<NoGoodKey>>,
}

impl Watches {
    /// Grows the lists to accommodate atoms up to (and including) `max_atom`.
    pub fn grow_to(&mut self, max_atom: Atom) {
        let required = 2 * (max_atom as usize + 1);
        if self.binary.len() < required {
            self.binary.resize_with(required, Vec::default);
            self.weak.resize_with(required, Vec::default);
            self.strong.resize_with(required, Vec::default);
        }
    }

    pub fn binary(&self, literal: CLiteral) -> &[BinaryWatch] {
        self.binary
            .get(literal.index())
            .map(|list| list.as_slice())
            .unwrap_or_default()
    }

    pub fn add_binary(&mut self, literal: CLiteral, watch: BinaryWatch) {
        if let Some(list) = self.binary.get_mut(literal.index()) {
            list.push(watch);
        }
    }

    pub fn weak(&self, literal: CLiteral) -> &[NoGoodKey] {
        self.weak
            .get(literal.index())
            .map(|list| list.as_slice())
            .unwrap_or_default()
    }

    pub fn add_weak(&mut self, literal: CLiteral, key: NoGoodKey) {
        if let Some(list) = self.weak.get_mut(literal.index()) {
            list.push(key);
        }
    }

    /// Takes the weak list of a literal, leaving an empty list until the list is [restored](Watches::restore_weak).
    pub fn take_weak(&mut self, literal: CLiteral) -> Vec<NoGoodKey> {
        self.weak
            .get_mut(literal.index())
            .map(std::mem::take)
            .unwrap_or_default()
    }

    pub fn restore_weak(&mut self, literal: CLiteral, list: Vec<NoGoodKey>) {
        if let Some(slot) = self.weak.get_mut(literal.index()) {
            *slot = list;
        }
    }

    pub fn strong(&self, literal: CLiteral) -> &[NoGoodKey] {
        self.strong
            .get(literal.index())
            .map(|list| list.as_slice())
            .unwrap_or_default()
    }

    pub fn add_strong(&mut self, literal: CLiteral, key: NoGoodKey) {
        if let Some(list) = self.strong.get_mut(literal.index()) {
            list.push(key);
        }
    }

    /// Takes the strong list of a literal, leaving an empty list until the list is [restored](Watches::restore_strong).
    pub fn take_strong(&mut self, literal: CLiteral) -> Vec<NoGoodKey> {
        self.strong
            .get_mut(literal.index())
            .map(std::mem::take)
            .unwrap_or_default()
    }

    pub fn restore_strong(&mut self, literal: CLiteral, list: Vec<NoGoodKey>) {
        if let Some(slot) = self.strong.get_mut(literal.index()) {
            *slot = list;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn take_and_restore() {
        let mut watches = Watches::default();
        watches.grow_to(3);
        watches.add_weak(-2, NoGoodKey::Original(0));
        watches.add_weak(-2, NoGoodKey::Original(1));

        let list = watches.take_weak(-2);
        assert_eq!(list.len(), 2);
        assert!(watches.weak(-2).is_empty());

        watches.restore_weak(-2, list);
        assert_eq!(watches.weak(-2), &[NoGoodKey::Original(0), NoGoodKey::Original(1)]);
        assert!(watches.weak(2).is_empty());
        assert!(watches.weak(9).is_empty());
    }
}
