/*!
The (three-valued) assignment of a context.

The assignment pairs each atom with an [entry](AtomEntry) and records each change to an entry on the [trail](Trail).

# Weak and strong assignments

Each assignment of true, false, or must-be-true is recorded at the *weak* level of an atom, the level at which the atom came to have a value.
An atom assigned true or false is also *strongly* assigned at the same level.
An atom which is must-be-true may later be promoted to true, and the promotion is recorded as a separate trail entry at the *strong* level of the atom.
The weak level and antecedent of the atom are kept, as conflict analysis reasons about the weak reading of nogoods.

On backtracking, a promotion above the target level reverts the atom to must-be-true, while an assignment above the target level unassigns the atom.

```rust
# use otter_asp::db::assignment::{Assignment, AssignmentStatus};
# use otter_asp::structures::truth::Truth;
let mut assignment = Assignment::default();
assignment.grow_to(3);

assert_eq!(assignment.assign(1, Truth::MustBeTrue, None), AssignmentStatus::Fresh);
assert_eq!(assignment.mbt_count(), 1);

assignment.choose(2, Truth::False);
assert_eq!(assignment.assign(1, Truth::True, None), AssignmentStatus::Promoted);
assert_eq!(assignment.assign(1, Truth::MustBeTrue, None), AssignmentStatus::Unchanged);
assert_eq!(assignment.assign(1, Truth::False, None), AssignmentStatus::Conflict);
assert_eq!(assignment.mbt_count(), 0);

assignment.backtrack(0);
assert_eq!(assignment.value_of(1), Some(Truth::MustBeTrue));
assert_eq!(assignment.value_of(2), None);
```
*/

use crate::{
    db::{
        trail::{Choice, Trail, TrailEntry},
        LevelIndex, NoGoodKey,
    },
    misc::log::targets::{self},
    structures::{
        atom::Atom,
        literal::{CLiteral, Literal},
        truth::Truth,
    },
};

/// The assignment of an atom.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AtomEntry {
    /// The value of the atom, if assigned.
    pub truth: Option<Truth>,

    /// The level at which the atom was assigned.
    pub weak_level: LevelIndex,

    /// The level at which the atom became true (or false), if strongly assigned.
    pub strong_level: LevelIndex,

    /// The position of the (weak) assignment on the trail.
    pub position: usize,

    /// The nogood which forced the (weak) assignment, if any.
    pub antecedent: Option<NoGoodKey>,

    /// The nogood which forced a promotion to true, if any.
    pub strong_antecedent: Option<NoGoodKey>,

    /// The (boolean) value of the atom when last unassigned.
    pub previous: Option<bool>,
}

/// The result of an attempt to assign a value to an atom.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssignmentStatus {
    /// The atom was unassigned, and now has the value.
    Fresh,

    /// The atom was must-be-true, and is now true.
    Promoted,

    /// The value was already implied by the value of the atom.
    Unchanged,

    /// The value conflicts with the value of the atom.
    Conflict,
}

/// The assignment, together with the trail of changes to the assignment.
#[derive(Default)]
pub struct Assignment {
    /// Entries, indexed by atom.
    entries: Vec<AtomEntry>,

    /// The trail.
    pub trail: Trail,

    /// A count of atoms with value must-be-true.
    mbt_count: usize,

    /// A count of changes to the assignment, used to note whether anything has changed between two points.
    modifications: usize,
}

impl Assignment {
    /// Grows the assignment to accommodate atoms up to (and including) `max_atom`.
    pub fn grow_to(&mut self, max_atom: Atom) {
        let required = max_atom as usize + 1;
        if self.entries.len() < required {
            self.entries.resize(required, AtomEntry::default());
        }
    }

    /// The largest atom the assignment accommodates.
    pub fn max_atom(&self) -> Atom {
        self.entries.len().saturating_sub(1) as Atom
    }

    /// The entry of an atom.
    pub fn get(&self, atom: Atom) -> Option<&AtomEntry> {
        self.entries.get(atom as usize)
    }

    /// The value of an atom, if assigned.
    pub fn value_of(&self, atom: Atom) -> Option<Truth> {
        self.entries.get(atom as usize).and_then(|entry| entry.truth)
    }

    /// The current decision level.
    pub fn level(&self) -> LevelIndex {
        self.trail.level()
    }

    /// A count of atoms with value must-be-true.
    pub fn mbt_count(&self) -> usize {
        self.mbt_count
    }

    /// A count of changes made to the assignment.
    pub fn modifications(&self) -> usize {
        self.modifications
    }

    /// Opens a fresh decision level, with the assignment of `truth` to `atom` as the decision.
    pub fn choose(&mut self, atom: Atom, truth: Truth) -> AssignmentStatus {
        self.choose_with(atom, truth, false)
    }

    /// As [choose](Assignment::choose), with a note of whether the choice follows chronological backtracking.
    pub fn choose_with(&mut self, atom: Atom, truth: Truth, backtracked: bool) -> AssignmentStatus {
        self.trail.open_level(Choice {
            literal: CLiteral::new(atom, truth.as_bool()),
            backtracked,
        });
        self.assign(atom, truth, None)
    }

    /// Assigns `truth` to `atom` at the current level.
    pub fn assign(
        &mut self,
        atom: Atom,
        truth: Truth,
        antecedent: Option<NoGoodKey>,
    ) -> AssignmentStatus {
        let level = self.trail.level();
        let position = self.trail.entries.len();
        let Some(entry) = self.entries.get_mut(atom as usize) else {
            log::error!(target: targets::VALUATION, "Assignment to unknown atom {atom}");
            return AssignmentStatus::Conflict;
        };

        match entry.truth {
            None => {
                entry.truth = Some(truth);
                entry.weak_level = level;
                entry.strong_level = level;
                entry.position = position;
                entry.antecedent = antecedent;
                entry.strong_antecedent = antecedent;
                if truth == Truth::MustBeTrue {
                    self.mbt_count += 1;
                }
                self.trail.push(TrailEntry {
                    atom,
                    truth,
                    promotion: false,
                });
                self.modifications += 1;
                AssignmentStatus::Fresh
            }

            Some(current) => match current.combine(truth) {
                None => AssignmentStatus::Conflict,

                Some(combined) if combined == current => AssignmentStatus::Unchanged,

                Some(_) => {
                    entry.truth = Some(Truth::True);
                    entry.strong_level = level;
                    entry.strong_antecedent = antecedent;
                    self.mbt_count -= 1;
                    self.trail.push(TrailEntry {
                        atom,
                        truth: Truth::True,
                        promotion: true,
                    });
                    self.modifications += 1;
                    AssignmentStatus::Promoted
                }
            },
        }
    }

    /// Undoes every assignment above `level`, returning the atoms which became unassigned.
    ///
    /// Promotions above `level` of atoms assigned at or below `level` revert the atoms to must-be-true.
    pub fn backtrack(&mut self, level: LevelIndex) -> Vec<Atom> {
        let removed = self.trail.clear_levels_above(level);
        let mut unassigned = Vec::with_capacity(removed.len());

        for record in removed.into_iter().rev() {
            let entry = &mut self.entries[record.atom as usize];
            match record.promotion {
                true => {
                    entry.truth = Some(Truth::MustBeTrue);
                    entry.strong_level = entry.weak_level;
                    entry.strong_antecedent = entry.antecedent;
                    self.mbt_count += 1;
                }
                false => {
                    if record.truth == Truth::MustBeTrue {
                        self.mbt_count -= 1;
                    }
                    entry.previous = entry.truth.map(|truth| truth.as_bool());
                    entry.truth = None;
                    entry.antecedent = None;
                    entry.strong_antecedent = None;
                    unassigned.push(record.atom);
                }
            }
        }
        self.modifications += 1;

        unassigned
    }

    /// Whether the literal holds: `+a` with `a` true or must-be-true, or `-a` with `a` false.
    pub fn holds(&self, literal: CLiteral) -> bool {
        self.value_of(literal.atom())
            .is_some_and(|truth| truth.as_bool() == literal.polarity())
    }

    /// Whether the literal strongly holds: `+a` with `a` true, or `-a` with `a` false.
    pub fn strongly_holds(&self, literal: CLiteral) -> bool {
        self.value_of(literal.atom())
            .is_some_and(|truth| truth.is_strong() && truth.as_bool() == literal.polarity())
    }

    /// Whether the complement of the literal holds.
    pub fn is_falsified(&self, literal: CLiteral) -> bool {
        self.value_of(literal.atom())
            .is_some_and(|truth| truth.as_bool() != literal.polarity())
    }

    /// The level at which the atom of the literal was assigned, if assigned.
    pub fn weak_level(&self, atom: Atom) -> Option<LevelIndex> {
        self.get(atom)
            .and_then(|entry| entry.truth.map(|_| entry.weak_level))
    }

    /// The level at which the literal came to strongly hold, if it strongly holds.
    pub fn strong_level(&self, literal: CLiteral) -> Option<LevelIndex> {
        match self.strongly_holds(literal) {
            true => self.get(literal.atom()).map(|entry| entry.strong_level),
            false => None,
        }
    }

    /// The weak value of a literal which holds under the assignment of its atom: `+a` for true or must-be-true, `-a` for false.
    pub fn holding_literal(&self, atom: Atom) -> Option<CLiteral> {
        self.value_of(atom)
            .map(|truth| CLiteral::new(atom, truth.as_bool()))
    }

    /// Iterates over every atom without a value.
    pub fn unassigned_atoms(&self) -> impl Iterator<Item = Atom> + '_ {
        self.entries
            .iter()
            .enumerate()
            .skip(1)
            .filter(|(_, entry)| entry.truth.is_none())
            .map(|(atom, _)| atom as Atom)
    }

    /// Iterates over every atom with the given value.
    pub fn atoms_with(&self, truth: Truth) -> impl Iterator<Item = Atom> + '_ {
        self.entries
            .iter()
            .enumerate()
            .skip(1)
            .filter(move |(_, entry)| entry.truth == Some(truth))
            .map(|(atom, _)| atom as Atom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn promotion_keeps_weak_level() {
        let mut assignment = Assignment::default();
        assignment.grow_to(4);

        assignment.choose(1, Truth::True);
        assignment.assign(2, Truth::MustBeTrue, Some(NoGoodKey::Original(0)));
        assignment.choose(3, Truth::False);
        assert_eq!(
            assignment.assign(2, Truth::True, Some(NoGoodKey::Original(1))),
            AssignmentStatus::Promoted
        );

        let entry = assignment.get(2).unwrap();
        assert_eq!(entry.weak_level, 1);
        assert_eq!(entry.strong_level, 2);
        assert_eq!(entry.antecedent, Some(NoGoodKey::Original(0)));
        assert!(assignment.strongly_holds(2));
        assert_eq!(assignment.strong_level(2), Some(2));

        let unassigned = assignment.backtrack(1);
        assert_eq!(unassigned, vec![3]);
        assert_eq!(assignment.value_of(2), Some(Truth::MustBeTrue));
        assert!(assignment.holds(2));
        assert!(!assignment.strongly_holds(2));
        assert_eq!(assignment.mbt_count(), 1);
        assert_eq!(assignment.trail.entries.len(), 2);
    }

    #[test]
    fn holding() {
        let mut assignment = Assignment::default();
        assignment.grow_to(3);
        assignment.assign(1, Truth::False, None);
        assignment.assign(2, Truth::MustBeTrue, None);

        assert!(assignment.holds(-1));
        assert!(assignment.strongly_holds(-1));
        assert!(assignment.is_falsified(1));
        assert!(assignment.holds(2));
        assert!(!assignment.strongly_holds(2));
        assert!(!assignment.holds(3) && !assignment.is_falsified(3));
        assert_eq!(assignment.unassigned_atoms().collect::<Vec<_>>(), vec![3]);
    }

    #[test]
    fn phase_recorded_on_backtrack() {
        let mut assignment = Assignment::default();
        assignment.grow_to(2);
        assignment.choose(1, Truth::True);
        assignment.assign(2, Truth::False, None);
        assignment.backtrack(0);

        assert_eq!(assignment.get(1).unwrap().previous, Some(true));
        assert_eq!(assignment.get(2).unwrap().previous, Some(false));
        assert_eq!(assignment.level(), 0);
    }
}
