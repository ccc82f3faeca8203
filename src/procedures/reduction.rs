//! Deletion of learnt nogoods.
//!
//! Every [reduction_interval](crate::config::Config::reduction_interval) conflicts some learnt nogoods are deleted.
//! A learnt nogood is a candidate for deletion if:
//! - The nogood has more than two literals, as binary nogoods are cheap to propagate.
//! - The lbd of the nogood is greater than the [glue](crate::config::Config::glue_lbd) lbd.
//! - The nogood is not the antecedent of any atom.
//!
//! Candidates are ordered by activity, and the less active half of the candidates are deleted.
//!
//! Deleted nogoods remain on watch lists until met during propagation.

use std::collections::HashSet;

use crate::{
    context::GenericContext,
    misc::log::targets::{self},
    types::err::ErrorKind,
};

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Deletes the less active half of learnt nogoods which are candidates for deletion.
    pub fn reduce(&mut self) -> Result<(), ErrorKind> {
        let glue = self.config.glue_lbd.value;

        let mut locked = HashSet::new();
        for entry in &self.assignment.trail.entries {
            if let Some(atom_entry) = self.assignment.get(entry.atom) {
                locked.extend(atom_entry.antecedent);
                locked.extend(atom_entry.strong_antecedent);
            }
        }

        let mut candidates = self
            .nogood_db
            .additions()
            .filter(|(key, stored)| stored.size() > 2 && stored.lbd > glue && !locked.contains(key))
            .map(|(key, stored)| (key, stored.activity))
            .collect::<Vec<_>>();
        candidates.sort_unstable_by(|a, b| a.1.total_cmp(&b.1));

        let count = candidates.len() / 2;
        for (key, _) in candidates.into_iter().take(count) {
            self.nogood_db.remove(key)?;
            self.counters.statistics.deleted_nogoods += 1;
        }

        log::trace!(target: targets::REDUCTION, "Deleted {count} nogoods, {} remain", self.nogood_db.addition_count());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        config::Config,
        context::Context,
        structures::{
            atom::AtomKind,
            nogood::{NoGood, NoGoodKind},
            truth::Truth,
        },
    };

    #[test]
    fn binary_glue_and_locked_survive() {
        let mut context = Context::from_config(Config::default());
        for atom in 1..=5 {
            assert!(context.register_atom(atom, AtomKind::Basic, false).is_ok());
        }

        let mut learn = |literals: [i32; 3], lbd| {
            let nogood = NoGood::new(literals.into_iter().filter(|literal| *literal != 0), NoGoodKind::Learnt);
            context.nogood_db.store(nogood, lbd).unwrap()
        };

        let binary = learn([1, 2, 0], 5);
        let glue = learn([1, 2, 3], 2);
        let locked = learn([1, 2, 4], 5);
        let idle = learn([1, 2, 5], 5);
        let warm = learn([1, 3, 5], 5);
        let hot = learn([2, 3, 5], 5);

        context.nogood_db.bump_activity(warm);
        context.nogood_db.bump_activity(hot);
        context.nogood_db.bump_activity(hot);

        context.assignment.assign(4, Truth::False, Some(locked));

        // Of the three candidates, the least active is deleted.
        assert!(context.reduce().is_ok());
        assert_eq!(context.counters.statistics.deleted_nogoods, 1);
        assert!(!context.nogood_db.contains(idle));
        for key in [binary, glue, locked, warm, hot] {
            assert!(context.nogood_db.contains(key));
        }

        assert!(context.reduce().is_ok());
        assert_eq!(context.counters.statistics.deleted_nogoods, 2);
        assert!(!context.nogood_db.contains(warm));
        for key in [binary, glue, locked, hot] {
            assert!(context.nogood_db.contains(key));
        }
    }

    #[test]
    fn originals_are_not_candidates() {
        let mut context = Context::from_config(Config::default());
        for atom in 1..=4 {
            assert!(context.register_atom(atom, AtomKind::Basic, false).is_ok());
        }
        assert!(context
            .add_nogood(NoGood::new([1, 2, 3, 4], NoGoodKind::Static))
            .is_ok());
        assert!(context
            .add_nogood(NoGood::new([-1, 2, -3, 4], NoGoodKind::Static))
            .is_ok());

        assert!(context.reduce().is_ok());
        assert_eq!(context.counters.statistics.deleted_nogoods, 0);
        assert_eq!(context.nogood_db.original_count(), 2);
    }
}
