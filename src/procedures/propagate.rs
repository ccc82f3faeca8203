/*!
A context method for propagating assignments on the trail, to a fixpoint.

See [GenericContext::propagate] for the relevant context method.

# Overview

Each entry on the trail is examined once, in order, with respect to the nogoods watching the literal which came to hold.
Examination happens in two (possible) steps:

- Weak propagation, examining nogoods interested in the literal holding.
  If all but one literal of a nogood holds, the remaining literal must not hold, and so:
  + For a positive literal `+x` the atom `x` is assigned false.
  + For a negative literal `-x` the atom `x` is assigned must-be-true.
- Strong propagation, examining headed nogoods interested in the literal strongly holding.
  If every literal other than the head of a nogood strongly holds, the head atom is assigned true.

An entry which assigns must-be-true is only propagated weakly, and an entry which promotes a must-be-true atom to true is only propagated strongly, as the weak reading of the promoted atom is unchanged.
Any other entry (a fresh true or false) is propagated both weakly and strongly.

# Watches

Binary nogoods are examined through the binary watch lists, without access to the nogood database.

For long nogoods the procedure follows the usual two-watched-literal scheme, with watches kept on literals which do not hold whenever possible.
When a watched literal comes to hold:
- If the other watched literal is falsified the nogood cannot be violated, and nothing changes.
- Otherwise, if some unwatched literal does not hold the watch moves to the literal.
- Otherwise, the nogood is unit (or violated) and the complement of the other watched literal is implied.

The strong watch of a headed nogood is likewise moved to some literal (other than the head) which does not strongly hold, whenever possible.

Keys to removed nogoods are dropped from watch lists when met.
*/

use crate::{
    context::GenericContext,
    db::assignment::AssignmentStatus,
    misc::log::targets::{self},
    structures::{
        literal::{CLiteral, Literal},
        truth::Truth,
    },
    types::err::{self},
};

/// The value implied for the atom of a literal which must not hold.
pub fn implied_truth(literal: CLiteral) -> Truth {
    match literal.polarity() {
        true => Truth::False,
        false => Truth::MustBeTrue,
    }
}

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Propagates every unpropagated entry on the trail, until a fixpoint or a conflict is found.
    ///
    /// For documentation see [procedures::propagate](crate::procedures::propagate).
    pub fn propagate(&mut self) -> Result<(), err::PropagationError> {
        while let Some(entry) = self.assignment.trail.next_unpropagated() {
            let literal = CLiteral::new(entry.atom, entry.truth.as_bool());

            if !entry.promotion {
                self.propagate_weak(literal)?;
            }
            if entry.truth.is_strong() {
                self.propagate_strong(literal)?;
            }

            self.assignment.trail.q_head += 1;
            self.counters.propagations += 1;
            self.counters.fresh_propagations += 1;
        }
        Ok(())
    }

    /// Examines the nogoods interested in `literal` holding.
    fn propagate_weak(&mut self, literal: CLiteral) -> Result<(), err::PropagationError> {
        // Binary nogoods.
        for index in 0..self.watches.binary(literal).len() {
            let watch = self.watches.binary(literal)[index];
            let implied = implied_truth(watch.other);

            match self.assignment.assign(watch.other.atom(), implied, Some(watch.key)) {
                AssignmentStatus::Conflict => {
                    log::trace!(target: targets::PROPAGATION, "Conflict on {} from {literal}", watch.key);
                    return Err(err::PropagationError::Conflict(watch.key));
                }
                AssignmentStatus::Fresh | AssignmentStatus::Promoted => {
                    log::trace!(target: targets::PROPAGATION, "{} {implied} from {}", watch.other.atom(), watch.key);
                }
                AssignmentStatus::Unchanged => {}
            }
        }

        // Long nogoods.
        let mut list = self.watches.take_weak(literal);
        let mut index = 0;
        let mut length = list.len();

        'long_loop: while index < length {
            let key = list[index];

            let Ok(stored) = self.nogood_db.get_mut(key) else {
                length -= 1;
                list.swap(index, length);
                continue 'long_loop;
            };

            let watched = stored.watches;
            let (this, other) = match watched {
                [a, _] if stored.literal_at(a) == literal => (0, 1),
                [_, b] if stored.literal_at(b) == literal => (1, 0),
                _ => {
                    length -= 1;
                    list.swap(index, length);
                    continue 'long_loop;
                }
            };

            let other_literal = stored.literal_at(stored.watches[other]);
            if self.assignment.is_falsified(other_literal) {
                index += 1;
                continue 'long_loop;
            }

            let replacement = stored
                .literals()
                .iter()
                .enumerate()
                .position(|(position, candidate)| {
                    !watched.contains(&position) && !self.assignment.holds(*candidate)
                });

            match replacement {
                Some(position) => {
                    stored.watches[this] = position;
                    let fresh = stored.literal_at(position);
                    self.watches.add_weak(fresh, key);

                    length -= 1;
                    list.swap(index, length);
                    continue 'long_loop;
                }

                None => {
                    let implied = implied_truth(other_literal);
                    match self.assignment.assign(other_literal.atom(), implied, Some(key)) {
                        AssignmentStatus::Conflict => {
                            log::trace!(target: targets::PROPAGATION, "Conflict on {key} from {literal}");
                            list.truncate(length);
                            self.watches.restore_weak(literal, list);
                            return Err(err::PropagationError::Conflict(key));
                        }
                        AssignmentStatus::Fresh | AssignmentStatus::Promoted => {
                            log::trace!(target: targets::PROPAGATION, "{} {implied} from {key}", other_literal.atom());
                        }
                        AssignmentStatus::Unchanged => {}
                    }
                }
            }

            index += 1;
        }

        list.truncate(length);
        self.watches.restore_weak(literal, list);
        Ok(())
    }

    /// Examines the headed nogoods interested in `literal` strongly holding.
    fn propagate_strong(&mut self, literal: CLiteral) -> Result<(), err::PropagationError> {
        // Binary nogoods.
        for index in 0..self.watches.binary(literal).len() {
            let watch = self.watches.binary(literal)[index];
            if !watch.other_is_head {
                continue;
            }

            match self.assignment.assign(watch.other.atom(), Truth::True, Some(watch.key)) {
                AssignmentStatus::Conflict => {
                    log::trace!(target: targets::PROPAGATION, "Strong conflict on {} from {literal}", watch.key);
                    return Err(err::PropagationError::Conflict(watch.key));
                }
                AssignmentStatus::Fresh | AssignmentStatus::Promoted => {
                    log::trace!(target: targets::PROPAGATION, "{} T from {}", watch.other.atom(), watch.key);
                }
                AssignmentStatus::Unchanged => {}
            }
        }

        // Long nogoods.
        let mut list = self.watches.take_strong(literal);
        let mut index = 0;
        let mut length = list.len();

        'strong_loop: while index < length {
            let key = list[index];

            let Ok(stored) = self.nogood_db.get_mut(key) else {
                length -= 1;
                list.swap(index, length);
                continue 'strong_loop;
            };

            let head = match stored.nogood().head() {
                Some(head) if stored.literal_at(stored.strong_watch) == literal => head,
                _ => {
                    length -= 1;
                    list.swap(index, length);
                    continue 'strong_loop;
                }
            };

            if self.assignment.value_of(head.atom()) == Some(Truth::True) {
                index += 1;
                continue 'strong_loop;
            }

            let current = stored.strong_watch;
            let replacement = stored
                .literals()
                .iter()
                .enumerate()
                .skip(1)
                .position(|(position, candidate)| {
                    position != current && !self.assignment.strongly_holds(*candidate)
                })
                .map(|position| position + 1);

            match replacement {
                Some(position) => {
                    stored.strong_watch = position;
                    let fresh = stored.literal_at(position);
                    self.watches.add_strong(fresh, key);

                    length -= 1;
                    list.swap(index, length);
                    continue 'strong_loop;
                }

                None => match self.assignment.assign(head.atom(), Truth::True, Some(key)) {
                    AssignmentStatus::Conflict => {
                        log::trace!(target: targets::PROPAGATION, "Strong conflict on {key} from {literal}");
                        list.truncate(length);
                        self.watches.restore_strong(literal, list);
                        return Err(err::PropagationError::Conflict(key));
                    }
                    AssignmentStatus::Fresh | AssignmentStatus::Promoted => {
                        log::trace!(target: targets::PROPAGATION, "{} T from {key}", head.atom());
                    }
                    AssignmentStatus::Unchanged => {}
                },
            }

            index += 1;
        }

        list.truncate(length);
        self.watches.restore_strong(literal, list);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{config::Config, context::Context};

    use super::*;

    #[test]
    fn propagation_is_idempotent() {
        let mut context = Context::from_config(Config::default());
        let store = context
            .read_program("a :- not b. b :- not a. c :- a. d :- c, not b.".as_bytes())
            .unwrap();
        assert!(context.propagate().is_ok());

        let a = store.id_of("a").unwrap();
        context.assignment.choose(a, Truth::True);
        assert!(context.propagate().is_ok());

        let entries = context.assignment.trail.entries.clone();
        let q_head = context.assignment.trail.q_head;
        assert_eq!(q_head, entries.len());

        assert!(context.propagate().is_ok());
        assert_eq!(context.assignment.trail.entries, entries);
        assert_eq!(context.assignment.trail.q_head, q_head);
    }
}
