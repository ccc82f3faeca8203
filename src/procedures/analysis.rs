/*!
Analysis of a conflict.

Given a violated nogood, the assignment is examined to learn a nogood which is unit at some previous level, following the first unique implication point (UIP) scheme.

# Overview

Analysis takes place at the *conflict level*, the highest (weak) level of a literal in the violated nogood.
If the conflict level is below the current level, a backjump to the conflict level is made first.
And, if the conflict level is zero, the program has no (further) answer set.

Each literal of the violated nogood holds.
Beginning with the violated nogood, the trail is walked backwards, and each atom of the nogood assigned at the conflict level is resolved away through its antecedent, until a single literal from the conflict level remains.
That literal is the first UIP.

Resolution follows the weak reading of nogoods, as every antecedent forced the weak value of its atom.
So, promotions on the trail are skipped, and the weak level of an atom is used throughout.

Literals from level zero are dropped, as these hold on any assignment.

# Result

On success, the learnt nogood contains the first UIP and every literal from a level below the conflict level.
The backjump level is the highest level of a literal other than the UIP, or zero if there is no such literal.
So, after a backjump the learnt nogood is unit, with the complement of the UIP implied.

The lbd of the nogood is the count of distinct levels among its literals.

# Heuristics

Each antecedent used during resolution has its activity bumped.
Atoms are bumped following the [VSIDS] variant of the context:
- [Chaff](VSIDS::Chaff): the atoms of the learnt nogood.
- [MiniSAT](VSIDS::MiniSAT): every atom met during analysis, other than those from level zero.
*/

use crate::{
    config::{vsids::VSIDS, LBD},
    context::GenericContext,
    db::{assignment::Assignment, LevelIndex, NoGoodKey},
    misc::log::targets::{self},
    structures::{
        atom::Atom,
        literal::{CLiteral, Literal},
        nogood::{NoGood, NoGoodKind},
    },
    types::err::{self, ErrorKind},
};

/// Possible results of conflict analysis.
#[derive(Debug, PartialEq, Eq)]
pub enum AnalysisResult {
    /// The conflict holds at level zero.
    Unsatisfiable,

    /// A nogood was learnt.
    Learnt {
        nogood: NoGood,
        backjump_level: LevelIndex,
        lbd: LBD,
    },
}

/// Bookkeeping during resolution.
struct Resolution {
    conflict_level: LevelIndex,

    /// Whether an atom has been met, indexed by atom.
    seen: Vec<bool>,

    /// Literals met from levels below the conflict level, and their levels.
    lower: Vec<(CLiteral, LevelIndex)>,

    /// A count of atoms met at the conflict level which have not been resolved.
    pending: usize,

    /// Atoms met above level zero.
    touched: Vec<Atom>,
}

impl Resolution {
    fn visit(&mut self, assignment: &Assignment, literal: CLiteral) -> Result<(), err::InconsistencyError> {
        let atom = literal.atom();
        if self.seen[atom as usize] {
            return Ok(());
        }
        self.seen[atom as usize] = true;

        let level = assignment
            .weak_level(atom)
            .ok_or(err::InconsistencyError::UnassignedLiteral)?;

        match level {
            0 => {}
            _ if level == self.conflict_level => {
                self.pending += 1;
                self.touched.push(atom);
            }
            _ => {
                self.lower.push((literal, level));
                self.touched.push(atom);
            }
        }
        Ok(())
    }
}

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Analyses the conflict of the nogood with the given key.
    ///
    /// For documentation, see [procedures::analysis](crate::procedures::analysis).
    pub fn conflict_analysis(&mut self, key: NoGoodKey) -> Result<AnalysisResult, ErrorKind> {
        let conflict = self.nogood_db.get(key)?.literals().to_vec();
        self.nogood_db.bump_activity(key);

        let mut conflict_level = 0;
        for literal in &conflict {
            match self.assignment.weak_level(literal.atom()) {
                Some(level) => conflict_level = std::cmp::max(conflict_level, level),
                None => return Err(err::InconsistencyError::UnassignedLiteral.into()),
            }
        }

        if conflict_level == 0 {
            log::trace!(target: targets::ANALYSIS, "Conflict on {key} at level zero");
            return Ok(AnalysisResult::Unsatisfiable);
        }
        if conflict_level < self.assignment.level() {
            self.backjump(conflict_level);
        }

        let mut resolution = Resolution {
            conflict_level,
            seen: vec![false; self.assignment.max_atom() as usize + 1],
            lower: Vec::default(),
            pending: 0,
            touched: Vec::default(),
        };

        for literal in conflict {
            resolution.visit(&self.assignment, literal)?;
        }

        let start = self.assignment.trail.level_start(conflict_level);
        let mut index = self.assignment.trail.entries.len();

        let uip = loop {
            if index <= start {
                return Err(err::InconsistencyError::NoUIP.into());
            }
            index -= 1;

            let entry = self.assignment.trail.entries[index];
            if entry.promotion || !resolution.seen[entry.atom as usize] {
                continue;
            }

            if resolution.pending == 1 {
                break entry.atom;
            }
            resolution.pending -= 1;

            let antecedent = self
                .assignment
                .get(entry.atom)
                .and_then(|atom_entry| atom_entry.antecedent)
                .ok_or(err::InconsistencyError::MissingAntecedent(entry.atom))?;
            self.nogood_db.bump_activity(antecedent);

            for literal in self.nogood_db.get(antecedent)?.literals() {
                if literal.atom() != entry.atom {
                    resolution.visit(&self.assignment, *literal)?;
                }
            }
        };

        let uip_literal = self
            .assignment
            .holding_literal(uip)
            .ok_or(err::InconsistencyError::UnassignedLiteral)?;

        let backjump_level = resolution
            .lower
            .iter()
            .map(|(_, level)| *level)
            .max()
            .unwrap_or(0);

        let mut levels = resolution.lower.iter().map(|(_, level)| *level).collect::<Vec<_>>();
        levels.push(conflict_level);
        levels.sort_unstable();
        levels.dedup();
        let lbd = levels.len() as LBD;

        let nogood = NoGood::new(
            resolution
                .lower
                .iter()
                .map(|(literal, _)| *literal)
                .chain(std::iter::once(uip_literal)),
            NoGoodKind::Learnt,
        );

        match self.config.vsids_variant.value {
            VSIDS::Chaff => self
                .atom_db
                .bump_relative(nogood.literals().iter().map(|literal| literal.atom())),
            VSIDS::MiniSAT => self.atom_db.bump_relative(resolution.touched.into_iter()),
        }

        log::trace!(target: targets::ANALYSIS, "Learnt {nogood} from {key}, backjump to {backjump_level}");

        Ok(AnalysisResult::Learnt {
            nogood,
            backjump_level,
            lbd,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        builder::NoGoodOk,
        config::Config,
        context::Context,
        structures::{atom::AtomKind, truth::Truth},
        types::err::PropagationError,
    };

    /// A context with atoms 1 to `atoms`, and the given nogoods with their keys.
    fn context_with(atoms: Atom, nogoods: &[&[CLiteral]]) -> (Context, Vec<NoGoodKey>) {
        let mut context = Context::from_config(Config::default());
        for atom in 1..=atoms {
            assert!(context.register_atom(atom, AtomKind::Basic, false).is_ok());
        }

        let mut keys = Vec::default();
        for literals in nogoods {
            let nogood = NoGood::new(literals.iter().copied(), NoGoodKind::Static);
            match context.add_nogood(nogood) {
                Ok(NoGoodOk::Added(key)) => keys.push(key),
                otherwise => panic!("Failed to add nogood: {otherwise:?}"),
            }
        }
        (context, keys)
    }

    fn conflict_key(context: &mut Context) -> NoGoodKey {
        match context.propagate() {
            Err(PropagationError::Conflict(key)) => key,
            Ok(()) => panic!("No conflict"),
        }
    }

    #[test]
    fn first_uip() {
        // 2 forces 3 false, after which 4 must be both false and true, given 1.
        let (mut context, _) = context_with(4, &[&[2, 3], &[1, -3, 4], &[1, -3, -4]]);

        context.assignment.choose(1, Truth::True);
        assert!(context.propagate().is_ok());
        context.assignment.choose(2, Truth::True);
        let key = conflict_key(&mut context);

        assert_eq!(
            context.conflict_analysis(key),
            Ok(AnalysisResult::Learnt {
                nogood: NoGood::new([1, -3], NoGoodKind::Learnt),
                backjump_level: 1,
                lbd: 2,
            })
        );
    }

    #[test]
    fn learnt_nogood_asserts_after_backjump() {
        let (mut context, _) = context_with(4, &[&[2, 3], &[1, -3, 4], &[1, -3, -4]]);

        context.assignment.choose(1, Truth::True);
        assert!(context.propagate().is_ok());
        context.assignment.choose(2, Truth::True);
        let key = conflict_key(&mut context);

        let Ok(AnalysisResult::Learnt {
            nogood,
            backjump_level,
            lbd,
        }) = context.conflict_analysis(key)
        else {
            panic!("Nothing learnt");
        };

        context.backjump(backjump_level);
        let learnt_key = match context.insert_nogood(nogood, Some(lbd)) {
            Ok(NoGoodOk::Added(key)) => key,
            otherwise => panic!("Failed to add learnt nogood: {otherwise:?}"),
        };

        // The complement of the UIP -3 is implied at the backjump level, by the learnt nogood.
        assert_eq!(context.assignment.level(), 1);
        assert_eq!(context.value_of(3), Some(Truth::MustBeTrue));
        assert_eq!(context.assignment.weak_level(3), Some(1));
        assert_eq!(
            context.assignment.get(3).and_then(|entry| entry.antecedent),
            Some(learnt_key)
        );

        assert!(context.propagate().is_ok());
        assert_eq!(context.value_of(2), Some(Truth::False));
    }

    #[test]
    fn unary_learnt_nogood() {
        let (mut context, _) = context_with(2, &[&[1, 2], &[1, -2]]);

        context.assignment.choose(1, Truth::True);
        let key = conflict_key(&mut context);

        assert_eq!(
            context.conflict_analysis(key),
            Ok(AnalysisResult::Learnt {
                nogood: NoGood::new([1], NoGoodKind::Learnt),
                backjump_level: 0,
                lbd: 1,
            })
        );
    }

    #[test]
    fn conflict_at_level_zero() {
        let (mut context, _) = context_with(2, &[&[1, 2], &[1, -2]]);

        context.assignment.assign(1, Truth::True, None);
        let key = conflict_key(&mut context);

        assert_eq!(context.conflict_analysis(key), Ok(AnalysisResult::Unsatisfiable));
    }

    #[test]
    fn conflict_below_current_level() {
        let (mut context, _) = context_with(3, &[&[1, 2], &[1, -2]]);

        context.assignment.choose(1, Truth::True);
        let key = conflict_key(&mut context);
        context.assignment.choose(3, Truth::True);
        assert_eq!(context.assignment.level(), 2);

        assert_eq!(
            context.conflict_analysis(key),
            Ok(AnalysisResult::Learnt {
                nogood: NoGood::new([1], NoGoodKind::Learnt),
                backjump_level: 0,
                lbd: 1,
            })
        );

        assert_eq!(context.assignment.level(), 1);
        assert_eq!(context.value_of(3), None);
        assert_eq!(context.counters.statistics.backjumps, 1);
        assert_eq!(context.counters.statistics.backtracks_within_backjumps, 1);
    }
}
