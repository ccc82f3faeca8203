//! Checks of invariants of a context, for use when debugging.
//!
//! When [checks](crate::config::Config::checks) are enabled, each propagation fixpoint is followed by a check that:
//! - The trail is ordered by level, and agrees with the assignment.
//! - No nogood is violated.
//! - No (weak or strong) propagation was missed.
//! - The watches of each nogood are found on the relevant watch lists.
//!
//! Each check examines every nogood, and so checks are costly.

use crate::{
    context::GenericContext,
    db::{LevelIndex, NoGoodKey},
    structures::{
        literal::{CLiteral, Literal},
        truth::Truth,
    },
    types::err::{self},
};

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Checks the invariants of the context, returning the first broken invariant found.
    pub fn check_invariants(&self) -> Result<(), err::InconsistencyError> {
        self.check_trail()?;
        for key in self.nogood_db.keys() {
            self.check_nogood(key)?;
        }
        Ok(())
    }

    /// The key of some violated nogood, if any.
    pub fn violated_nogood(&self) -> Option<NoGoodKey> {
        self.nogood_db.keys().find(|key| {
            self.nogood_db.get(*key).is_ok_and(|stored| {
                stored
                    .literals()
                    .iter()
                    .all(|literal| self.assignment.holds(*literal))
            })
        })
    }

    fn check_trail(&self) -> Result<(), err::InconsistencyError> {
        let trail = &self.assignment.trail;
        let mut level: LevelIndex = 0;

        for (position, entry) in trail.entries.iter().enumerate() {
            while trail
                .level_indicies
                .get(level as usize)
                .is_some_and(|start| *start <= position)
            {
                level += 1;
            }

            let atom_entry = self
                .assignment
                .get(entry.atom)
                .ok_or(err::InconsistencyError::TrailOrder)?;

            let consistent = match entry.promotion {
                false => atom_entry.position == position && atom_entry.weak_level == level,
                true => atom_entry.truth == Some(Truth::True) && atom_entry.strong_level == level,
            };
            if !consistent {
                return Err(err::InconsistencyError::TrailOrder);
            }
        }
        Ok(())
    }

    fn check_nogood(&self, key: NoGoodKey) -> Result<(), err::InconsistencyError> {
        let Ok(stored) = self.nogood_db.get(key) else {
            return Ok(());
        };
        let literals = stored.literals();

        let open = literals
            .iter()
            .filter(|literal| !self.assignment.holds(**literal))
            .collect::<Vec<_>>();
        match open.as_slice() {
            [] => return Err(err::InconsistencyError::ViolatedNoGood(key)),
            [literal] if self.assignment.value_of(literal.atom()).is_none() => {
                return Err(err::InconsistencyError::MissedPropagation(key));
            }
            _ => {}
        }

        if let Some(head) = stored.nogood().head() {
            let body = stored.nogood().body();
            if body.iter().all(|literal| self.assignment.strongly_holds(*literal))
                && self.assignment.value_of(head.atom()) != Some(Truth::True)
            {
                return Err(err::InconsistencyError::MissedPropagation(key));
            }
        }

        match literals {
            [] | [_] => {}

            [a, b] => {
                let watched = |literal: CLiteral, other: CLiteral| {
                    self.watches
                        .binary(literal)
                        .iter()
                        .any(|watch| watch.key == key && watch.other == other)
                };
                if !watched(*a, *b) || !watched(*b, *a) {
                    return Err(err::InconsistencyError::CorruptWatch(key));
                }
            }

            _ => {
                let [first, second] = stored.watches;
                if first == second || first >= literals.len() || second >= literals.len() {
                    return Err(err::InconsistencyError::CorruptWatch(key));
                }
                for index in [first, second] {
                    if !self.watches.weak(literals[index]).contains(&key) {
                        return Err(err::InconsistencyError::CorruptWatch(key));
                    }
                }

                if stored.nogood().head().is_some() {
                    let strong = stored.strong_watch;
                    if strong == 0
                        || strong >= literals.len()
                        || !self.watches.strong(literals[strong]).contains(&key)
                    {
                        return Err(err::InconsistencyError::CorruptWatch(key));
                    }
                }
            }
        }

        Ok(())
    }
}
