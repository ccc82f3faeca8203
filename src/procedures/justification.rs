/*!
Justification of must-be-true atoms, and the detection of unfounded sets.

# Overview

An atom which is must-be-true is required to hold, though no derivation of the atom from the program has (yet) been found.
An answer set requires every atom which holds to be derived, and so every must-be-true atom must either be justified, and promoted to true, or be shown to be unfounded.

Justification of a must-be-true *target* atom takes place on a complete assignment, and proceeds in three steps:

1. The *region* of the target is collected: every atom reachable from the target through the positive bodies of the definitions of atoms, passing only through atoms which are neither true nor false.
2. The atoms of the region with a well-founded justification are found, as a least fixpoint.
   An atom is justified if some definition of the atom has every negative body atom false and every positive body atom either true or (already) justified.
3. Then:
   - If the target is justified, every justified must-be-true atom of the region is promoted to true, in the order the atoms were justified.
   - Otherwise, the atoms of the region which are not justified form an unfounded set.

The definitions of an atom are the body of the atom, for a rule body atom, and the bodies of rules with the atom as head, otherwise.
The currently active definitions are always used.

# Unfounded sets

An unfounded set can only hold if each definition of each member of the set is *blocked* by the assignment.
Definitions which rely on some other member of the set (through the positive body) are internal to the set, and are not considered.
Every other definition is blocked by a literal which holds:
- `-p`, for some false atom `p` of the positive body.
- `+n`, for some true (or must-be-true) atom `n` of the negative body.

Of the blocking literals, one from the lowest level is taken.
A definition with a fact in the negative body is always blocked, and is dropped.

The nogood of the target together with the blocking literals rules out the current assignment:

```none
{ +target } ∪ { blocking literals }
```
*/

use crate::{
    context::GenericContext,
    misc::log::targets::{self},
    structures::{
        atom::Atom,
        literal::{CLiteral, Literal},
        nogood::{NoGood, NoGoodKind},
        truth::Truth,
    },
    types::err::{self, ErrorKind},
};

/// Possible results of justification.
#[derive(Debug, PartialEq, Eq)]
pub enum JustificationResult {
    /// The target was justified, and the atoms promoted to true in order of promotion.
    Justified(Vec<Atom>),

    /// The target is part of an unfounded set, ruled out by the nogood.
    Unfounded(NoGood),
}

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Justifies the target, or finds an unfounded set containing the target.
    ///
    /// For documentation, see [procedures::justification](crate::procedures::justification).
    pub fn justify(&mut self, target: Atom) -> Result<JustificationResult, ErrorKind> {
        if self.assignment.value_of(target) != Some(Truth::MustBeTrue) {
            return Err(err::InconsistencyError::NotMustBeTrue(target).into());
        }

        let size = self.assignment.max_atom() as usize + 1;

        // The region.
        let mut in_region = vec![false; size];
        let mut region = Vec::default();
        let mut stack = vec![target];
        in_region[target as usize] = true;

        while let Some(atom) = stack.pop() {
            region.push(atom);
            for body in self.atom_db.definitions(atom) {
                for positive in &body.positive {
                    let open = !matches!(
                        self.assignment.value_of(*positive),
                        Some(Truth::True) | Some(Truth::False)
                    );
                    if open && !in_region[*positive as usize] {
                        in_region[*positive as usize] = true;
                        stack.push(*positive);
                    }
                }
            }
        }

        // The justified atoms, in order of justification.
        let mut justified = vec![false; size];
        let mut order = Vec::default();

        loop {
            let mut fresh = false;
            for atom in &region {
                if justified[*atom as usize] {
                    continue;
                }
                let supported = self.atom_db.definitions(*atom).iter().any(|body| {
                    body.negative
                        .iter()
                        .all(|negative| self.assignment.value_of(*negative) == Some(Truth::False))
                        && body.positive.iter().all(|positive| {
                            justified[*positive as usize]
                                || self.assignment.value_of(*positive) == Some(Truth::True)
                        })
                });
                if supported {
                    justified[*atom as usize] = true;
                    order.push(*atom);
                    fresh = true;
                }
            }
            if !fresh {
                break;
            }
        }

        if justified[target as usize] {
            let promoted = order
                .into_iter()
                .filter(|atom| self.assignment.value_of(*atom) == Some(Truth::MustBeTrue))
                .collect::<Vec<_>>();
            for atom in &promoted {
                self.assignment.assign(*atom, Truth::True, None);
            }
            log::trace!(target: targets::JUSTIFICATION, "Justified {target}, promoting {promoted:?}");
            return Ok(JustificationResult::Justified(promoted));
        }

        let unfounded = region
            .iter()
            .filter(|atom| !justified[**atom as usize])
            .copied()
            .collect::<Vec<_>>();

        let mut in_unfounded = vec![false; size];
        for atom in &unfounded {
            in_unfounded[*atom as usize] = true;
        }

        let mut reason = vec![CLiteral::new(target, true)];
        for atom in &unfounded {
            for body in self.atom_db.definitions(*atom) {
                if body.positive.iter().any(|positive| in_unfounded[*positive as usize]) {
                    continue;
                }
                if body.negative.iter().any(|negative| self.atom_db.is_fact(*negative)) {
                    continue;
                }

                let false_positive = body
                    .positive
                    .iter()
                    .filter(|positive| self.assignment.value_of(**positive) == Some(Truth::False))
                    .map(|positive| CLiteral::new(*positive, false));
                let holding_negative = body
                    .negative
                    .iter()
                    .filter(|negative| {
                        self.assignment
                            .value_of(**negative)
                            .is_some_and(|truth| truth.as_bool())
                    })
                    .map(|negative| CLiteral::new(*negative, true));

                let blocking = false_positive
                    .chain(holding_negative)
                    .filter(|literal| !self.atom_db.is_fact(literal.atom()))
                    .min_by_key(|literal| self.assignment.weak_level(literal.atom()));

                match blocking {
                    Some(literal) => reason.push(literal),
                    None => return Err(err::InconsistencyError::UnblockedDefinition(*atom).into()),
                }
            }
        }

        let nogood = NoGood::new(reason, NoGoodKind::Learnt);
        log::trace!(target: targets::JUSTIFICATION, "Unfounded set {unfounded:?}, ruled out by {nogood}");
        Ok(JustificationResult::Unfounded(nogood))
    }
}
