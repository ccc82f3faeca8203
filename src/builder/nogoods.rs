use std::cmp::Reverse;

use crate::{
    config::LBD,
    context::GenericContext,
    db::{assignment::AssignmentStatus, watches::BinaryWatch, LevelIndex, NoGoodKey},
    misc::log::targets::{self},
    procedures::propagate::implied_truth,
    structures::{
        literal::{CLiteral, Literal},
        nogood::NoGood,
        truth::Truth,
    },
    types::err::{self, ErrorKind},
};

use super::NoGoodOk;

/// Where a nogood may be placed, relative to the current level.
enum Placement {
    /// The nogood may be placed at the current level.
    Fine,

    /// The nogood may be placed after a backjump to the given level.
    Revise(LevelIndex),

    /// The nogood is violated at level zero.
    Unsatisfiable,
}

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Adds a nogood to the context, backjumping if required.
    ///
    /// The context is left at a level where the nogood is not violated, with any (weak or strong) consequence of the nogood assigned.
    /// If no such level exists, the search space has been explored, and [Unsatisfiable](NoGoodOk::Unsatisfiable) is returned.
    pub fn add_nogood(&mut self, nogood: NoGood) -> Result<NoGoodOk, ErrorKind> {
        self.insert_nogood(nogood, None)
    }

    /// As [add_nogood](GenericContext::add_nogood), with an lbd if known.
    pub(crate) fn insert_nogood(&mut self, nogood: NoGood, lbd: Option<LBD>) -> Result<NoGoodOk, ErrorKind> {
        if nogood.is_tautology() {
            return Ok(NoGoodOk::Tautology);
        }
        if let Some(literal) = nogood
            .literals()
            .iter()
            .find(|literal| !self.atom_db.is_registered(literal.atom()))
        {
            return Err(err::BuildError::UnregisteredAtom(literal.atom()).into());
        }

        loop {
            match self.placement(&nogood) {
                Placement::Fine => break,
                Placement::Revise(level) => self.backjump(level),
                Placement::Unsatisfiable => {
                    log::trace!(target: targets::NOGOOD_DB, "Unsatisfiable on addition of {nogood}");
                    self.note_explored();
                    return Ok(NoGoodOk::Unsatisfiable);
                }
            }
        }

        let lbd = match lbd {
            Some(lbd) => lbd,
            None => {
                let mut levels = nogood
                    .literals()
                    .iter()
                    .filter_map(|literal| self.assignment.weak_level(literal.atom()))
                    .collect::<Vec<_>>();
                levels.sort_unstable();
                levels.dedup();
                levels.len() as LBD
            }
        };

        let key = self.nogood_db.store(nogood, lbd)?;
        self.counters.fresh_additions += 1;
        self.watch_nogood(key)?;
        self.assign_consequences(key)?;

        Ok(NoGoodOk::Added(key))
    }

    /// Where the nogood may be placed, given the current assignment.
    fn placement(&self, nogood: &NoGood) -> Placement {
        if nogood.size() == 0 {
            return Placement::Unsatisfiable;
        }
        let level = self.assignment.level();

        let mut holding_levels = Vec::with_capacity(nogood.size());
        let mut open = Vec::default();
        for literal in nogood.literals() {
            match self.assignment.holds(*literal) {
                true => holding_levels.push(self.assignment.weak_level(literal.atom()).unwrap_or(0)),
                false => open.push(*literal),
            }
        }
        let max_holding = holding_levels.iter().max().copied().unwrap_or(0);

        match open.as_slice() {
            [] => {
                if max_holding == 0 {
                    return Placement::Unsatisfiable;
                }
                let at_max = holding_levels.iter().filter(|l| **l == max_holding).count();
                return match at_max {
                    1 => {
                        let second = holding_levels
                            .iter()
                            .filter(|l| **l < max_holding)
                            .max()
                            .copied()
                            .unwrap_or(0);
                        Placement::Revise(second)
                    }
                    _ => Placement::Revise(max_holding - 1),
                };
            }

            [literal] => match self.assignment.weak_level(literal.atom()) {
                Some(open_level) if open_level > max_holding => return Placement::Revise(max_holding),
                None if max_holding < level => return Placement::Revise(max_holding),
                _ => {}
            },

            _ => {}
        }

        if let Some(head) = nogood.head() {
            let body_levels = nogood
                .body()
                .iter()
                .map(|literal| self.assignment.strong_level(*literal))
                .collect::<Option<Vec<_>>>();

            if let Some(body_levels) = body_levels {
                let max_body = body_levels.into_iter().max().unwrap_or(0);
                let head_atom = CLiteral::new(head.atom(), true);
                match self.assignment.strong_level(head_atom) {
                    Some(head_level) if head_level > max_body => return Placement::Revise(max_body),
                    None if max_body < level => return Placement::Revise(max_body),
                    _ => {}
                }
            }
        }

        Placement::Fine
    }

    /// Places the watches of a freshly stored nogood.
    ///
    /// Weak watches prefer literals which do not hold, and then literals from higher levels.
    /// The strong watch prefers a body literal which does not strongly hold, and then a body literal from a higher level.
    fn watch_nogood(&mut self, key: NoGoodKey) -> Result<(), ErrorKind> {
        let stored = self.nogood_db.get(key)?;
        let literals = stored.literals().to_vec();
        let head = stored.nogood().head();

        match literals.as_slice() {
            [] | [_] => {}

            [a, b] => {
                self.watches.add_binary(
                    *a,
                    BinaryWatch {
                        other: *b,
                        key,
                        other_is_head: head == Some(*b),
                    },
                );
                self.watches.add_binary(
                    *b,
                    BinaryWatch {
                        other: *a,
                        key,
                        other_is_head: head == Some(*a),
                    },
                );
            }

            _ => {
                let mut ranked = (0..literals.len()).collect::<Vec<_>>();
                ranked.sort_by_key(|index| {
                    let literal = literals[*index];
                    let level = self
                        .assignment
                        .weak_level(literal.atom())
                        .unwrap_or(LevelIndex::MAX);
                    (self.assignment.holds(literal), Reverse(level))
                });
                let watches = [ranked[0], ranked[1]];

                let strong_watch = match head {
                    None => None,
                    Some(_) => (1..literals.len())
                        .find(|index| !self.assignment.strongly_holds(literals[*index]))
                        .or_else(|| {
                            (1..literals.len()).max_by_key(|index| {
                                self.assignment.strong_level(literals[*index]).unwrap_or(0)
                            })
                        }),
                };

                let stored = self.nogood_db.get_mut(key)?;
                stored.watches = watches;
                for index in watches {
                    self.watches.add_weak(literals[index], key);
                }
                if let Some(index) = strong_watch {
                    stored.strong_watch = index;
                    self.watches.add_strong(literals[index], key);
                }
            }
        }

        Ok(())
    }

    /// Assigns the (weak or strong) consequence of a freshly stored nogood, if any.
    fn assign_consequences(&mut self, key: NoGoodKey) -> Result<(), ErrorKind> {
        let stored = self.nogood_db.get(key)?;

        let consequence = match stored.nogood().head() {
            Some(head)
                if stored
                    .nogood()
                    .body()
                    .iter()
                    .all(|literal| self.assignment.strongly_holds(*literal))
                    && self.assignment.value_of(head.atom()) != Some(Truth::True) =>
            {
                Some((head.atom(), Truth::True))
            }

            _ => {
                let mut open = stored
                    .literals()
                    .iter()
                    .filter(|literal| !self.assignment.holds(**literal));
                match (open.next(), open.next()) {
                    (Some(literal), None) if self.assignment.value_of(literal.atom()).is_none() => {
                        Some((literal.atom(), implied_truth(*literal)))
                    }
                    _ => None,
                }
            }
        };

        if let Some((atom, truth)) = consequence {
            match self.assignment.assign(atom, truth, Some(key)) {
                AssignmentStatus::Conflict => {
                    log::error!(target: targets::NOGOOD_DB, "Consequence of {key} conflicts with the assignment");
                    return Err(err::InconsistencyError::ViolatedNoGood(key).into());
                }
                _ => {
                    log::trace!(target: targets::NOGOOD_DB, "{atom} {truth} from {key} on addition");
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::Config,
        context::{Context, ContextState},
        structures::{atom::AtomKind, nogood::NoGoodKind},
    };

    fn context_with(atoms: u32) -> Context {
        let mut context = Context::from_config(Config::default());
        for atom in 1..=atoms {
            context.register_atom(atom, AtomKind::Basic, false).unwrap();
        }
        context
    }

    #[test]
    fn unit_is_assigned() {
        let mut context = context_with(2);
        assert!(context.add_nogood(NoGood::new([1], NoGoodKind::Static)).is_ok());
        assert!(context
            .add_nogood(NoGood::headed(-2, [], NoGoodKind::Static).unwrap())
            .is_ok());

        assert_eq!(context.value_of(1), Some(Truth::False));
        assert_eq!(context.value_of(2), Some(Truth::True));
    }

    #[test]
    fn tautology() {
        let mut context = context_with(2);
        assert_eq!(
            context.add_nogood(NoGood::new([1, -1, 2], NoGoodKind::Static)),
            Ok(NoGoodOk::Tautology)
        );
        assert_eq!(context.nogood_db.original_count(), 0);
    }

    #[test]
    fn unregistered_atom() {
        let mut context = context_with(2);
        assert_eq!(
            context.add_nogood(NoGood::new([1, 3], NoGoodKind::Static)),
            Err(ErrorKind::Build(err::BuildError::UnregisteredAtom(3)))
        );
    }

    #[test]
    fn violated_at_zero() {
        let mut context = context_with(2);
        assert!(context.add_nogood(NoGood::new([-1], NoGoodKind::Static)).is_ok());
        assert_eq!(
            context.add_nogood(NoGood::new([1], NoGoodKind::Static)),
            Ok(NoGoodOk::Unsatisfiable)
        );
        assert_eq!(context.state, ContextState::Unsatisfiable);
    }

    #[test]
    fn backjump_on_violation() {
        let mut context = context_with(4);
        context.assignment.choose(1, Truth::True);
        context.assignment.choose(2, Truth::True);
        context.assignment.choose(3, Truth::True);

        let result = context.add_nogood(NoGood::new([1, 3], NoGoodKind::Internal));
        assert!(matches!(result, Ok(NoGoodOk::Added(_))));

        assert_eq!(context.assignment.level(), 1);
        assert_eq!(context.value_of(3), Some(Truth::False));
        assert_eq!(context.value_of(2), None);
    }

    #[test]
    fn strong_consequence() {
        let mut context = context_with(4);
        context.assignment.choose(1, Truth::True);
        context.assignment.choose(2, Truth::False);

        let nogood = NoGood::headed(-3, [1, -2, 4], NoGoodKind::Static).unwrap();
        assert!(context.add_nogood(nogood).is_ok());
        assert_eq!(context.value_of(3), None);

        context.assignment.choose(4, Truth::True);
        assert!(context.propagate().is_ok());
        assert_eq!(context.value_of(3), Some(Truth::True));
    }

    #[test]
    fn long_watches() {
        let mut context = context_with(4);
        let result = context.add_nogood(NoGood::new([1, 2, 3, 4], NoGoodKind::Static));
        let Ok(NoGoodOk::Added(key)) = result else {
            panic!("Expected an addition, found {result:?}");
        };

        context.assignment.choose(1, Truth::True);
        context.assignment.choose(2, Truth::True);
        context.assignment.choose(3, Truth::True);
        assert!(context.propagate().is_ok());

        assert_eq!(context.value_of(4), Some(Truth::False));
        assert_eq!(context.assignment.get(4).and_then(|entry| entry.antecedent), Some(key));
        assert!(context.check_invariants().is_ok());
    }
}
