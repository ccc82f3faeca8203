//! Recovery from a conflict.
//!
//! # Overview
//!
//! A backjump is a 'jump' from some (higher) decision level to some previous (lower) decision level.
//!
//! Typically, a backjump is made from level *l* to level *l - i* because a conflict was found at level *l* and analysis produced a nogood which is unit at level *l - i*.
//! In this case, all decisions and all consequences of those decisions from level *l* down to level *l - i* are undone.
//! Promotions of must-be-true atoms to true made above the target level are undone, and the atoms are again must-be-true.
//!
//! # Chronological backtracking
//!
//! After the assignment has been closed (every atom without a value assigned false) a conflict is not analysed, as atoms assigned by closing have no antecedent.
//! Instead, the last choice which has not already been flipped is flipped, at the same level.
//! A flipped choice is marked as backtracked, and so levels of flipped choices are skipped by later chronological backtracking.
//!
//! # Methods
//!
//! - [backjump](GenericContext::backjump) --- Backjump to a target level.
//! - [backtrack_chronologically](GenericContext::backtrack_chronologically) --- Flip the most recent choice which has not been flipped.
//!
//! Counts are kept of levels undone within backjumps and of levels undone chronologically, separately.
//!
//! # Literature
//!
//! See [Chronological Backtracking](https://doi.org/10.1007/978-3-319-94144-8_7) for a discussion of chronological and non-chronological backjumping.

use crate::{
    context::GenericContext,
    db::LevelIndex,
    misc::log::targets::{self},
    structures::{literal::Literal, truth::Truth},
};

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Backjumps to the given target level.
    ///
    /// Passing a target level at or above the current level is safe --- nothing will happen.
    ///
    /// For documentation, see [procedures::backjump](crate::procedures::backjump).
    pub fn backjump(&mut self, target: LevelIndex) {
        let current = self.assignment.level();
        if target >= current {
            return;
        }
        log::trace!(target: targets::BACKJUMP, "Backjump from {current} to {target}");

        self.counters.statistics.backjumps += 1;
        self.counters.statistics.backtracks_within_backjumps += (current - target) as usize;
        self.unwind_to(target);
    }

    /// Undoes every level above `target`, and returns any choice atom which lost a value to the activity heap.
    pub(crate) fn unwind_to(&mut self, target: LevelIndex) {
        for atom in self.assignment.backtrack(target) {
            if self.atom_db.is_choice(atom) {
                self.atom_db.activity_heap.activate(atom as usize);
            }
        }
        self.after_closing = false;
    }

    /// Flips the most recent choice which has not already been flipped, undoing any level above the choice.
    ///
    /// Returns false if every choice has been flipped, in which case the assignment is at level zero.
    pub fn backtrack_chronologically(&mut self) -> bool {
        while let Some(choice) = self.assignment.trail.top_choice().copied() {
            let level = self.assignment.level();
            self.unwind_to(level - 1);
            self.counters.statistics.backtracks += 1;

            if !choice.backtracked {
                let atom = choice.literal.atom();
                let flipped = match choice.literal.polarity() {
                    true => Truth::False,
                    false => Truth::True,
                };
                log::trace!(target: targets::BACKJUMP, "Chronological backtrack, flipping {}", choice.literal);
                self.assignment.choose_with(atom, flipped, true);
                return true;
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use crate::{config::Config, context::Context, structures::atom::AtomKind};

    use super::*;

    fn three_choices() -> Context {
        let mut context = Context::from_config(Config::default());
        for atom in 1..=3 {
            assert!(context.register_atom(atom, AtomKind::Basic, false).is_ok());
            context.assignment.choose(atom, Truth::True);
        }
        assert_eq!(context.assignment.level(), 3);
        context
    }

    #[test]
    fn backjump_counts() {
        let mut context = three_choices();

        context.backjump(1);
        assert_eq!(context.assignment.level(), 1);
        assert_eq!(context.value_of(1), Some(Truth::True));
        assert_eq!(context.value_of(2), None);
        assert_eq!(context.value_of(3), None);

        assert_eq!(context.counters.statistics.backjumps, 1);
        assert_eq!(context.counters.statistics.backtracks_within_backjumps, 2);
        assert_eq!(context.counters.statistics.backtracks, 0);

        context.backjump(1);
        assert_eq!(context.counters.statistics.backjumps, 1);
    }

    #[test]
    fn chronological_backtracks() {
        let mut context = three_choices();
        context.backjump(1);

        assert!(context.backtrack_chronologically());
        assert_eq!(context.assignment.level(), 1);
        assert_eq!(context.value_of(1), Some(Truth::False));
        assert!(context.assignment.trail.top_choice().is_some_and(|choice| choice.backtracked));
        assert_eq!(context.counters.statistics.backtracks, 1);

        assert!(!context.backtrack_chronologically());
        assert_eq!(context.assignment.level(), 0);
        assert_eq!(context.value_of(1), None);
        assert_eq!(context.counters.statistics.backtracks, 2);
        assert_eq!(context.counters.statistics.backtracks_within_backjumps, 2);
    }
}
