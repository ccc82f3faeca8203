/*!
Methods for choosing the value of an atom.

# Overview

Decisions are only made on *eligible* atoms.
An atom is eligible if:
- The atom is a rule body flagged as a choice point.
- The atom has no value.
- Every atom of the positive part of the body is true.

So, a decision to make a body true is only made when the body may be derived, and the negative part of the body is left to the decision.

# Activity

Choice atoms are kept on a max activity heap.
Atoms with a value are removed from the heap lazily, when popped, and returned to the heap when the value is undone.
Atoms without a value which are not (yet) eligible are returned to the heap after a decision.

```rust,ignore
while let Some(index) = self.atom_db.activity_heap.pop_max() {
    if self.is_eligible(index as Atom) {
        return Some(index as Atom);
    }
}
```

# Polarity

The value of a decision is determined by the [phase initializer](crate::config::PhaseInitializer) of the config.
If phase saving is enabled and the atom had a value before the value was undone, the atom is again given that value.

# Randomness

With probability given by [random_decision_bias](crate::config::Config::random_decision_bias) an eligible atom is chosen at random rather than by activity.
*/

use crate::{
    config::PhaseInitializer,
    context::GenericContext,
    misc::log::targets::{self},
    structures::{
        atom::Atom,
        literal::{CLiteral, Literal},
        truth::Truth,
    },
};

/// Possible 'Ok' results from choosing a truth value to assign an atom.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecisionOk {
    /// Some truth value was assigned to some atom, as a decision at a fresh level.
    Literal(CLiteral),

    /// No atom was eligible for a decision.
    Exhausted,
}

/// Methods related to making decisions.
impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Makes a decision, if some atom is eligible.
    ///
    /// ```rust, ignore
    /// match self.make_decision() {
    ///     DecisionOk::Literal(_) => continue,
    ///     DecisionOk::Exhausted => self.close(),
    /// }
    /// ```
    pub fn make_decision(&mut self) -> DecisionOk {
        // Takes ownership of rng to satisfy the borrow checker.
        let mut rng = std::mem::take(&mut self.rng);
        let decision = self
            .eligible_atom(&mut rng)
            .map(|atom| CLiteral::new(atom, self.decision_polarity(atom, &mut rng)));
        self.rng = rng;

        match decision {
            Some(literal) => {
                self.counters.statistics.choices += 1;
                self.counters.fresh_decisions += 1;

                let truth = match literal.polarity() {
                    true => Truth::True,
                    false => Truth::False,
                };
                self.assignment.choose(literal.atom(), truth);
                self.reboot.decision_made();

                log::trace!(target: targets::DECISION, "Decision {literal} at level {}", self.assignment.level());
                DecisionOk::Literal(literal)
            }

            None => DecisionOk::Exhausted,
        }
    }

    /// Whether a decision may be made on the atom.
    pub fn is_eligible(&self, atom: Atom) -> bool {
        self.atom_db.is_choice(atom)
            && self.assignment.value_of(atom).is_none()
            && self.atom_db.body(atom).is_some_and(|body| {
                body.positive
                    .iter()
                    .all(|positive| self.assignment.value_of(*positive) == Some(Truth::True))
            })
    }

    fn eligible_atom(&mut self, rng: &mut R) -> Option<Atom> {
        let bias = self.config.random_decision_bias.value;
        if bias > 0.0 && rng.random_bool(bias) {
            let eligible = self
                .atom_db
                .atoms()
                .filter(|atom| self.is_eligible(*atom))
                .collect::<Vec<_>>();
            if !eligible.is_empty() {
                return Some(eligible[rng.random_range(0..eligible.len())]);
            }
        }

        let mut deferred = Vec::default();
        let mut chosen = None;
        while let Some(index) = self.atom_db.activity_heap.pop_max() {
            let atom = index as Atom;
            if self.assignment.value_of(atom).is_some() {
                continue;
            }
            if self.is_eligible(atom) {
                chosen = Some(atom);
                break;
            }
            deferred.push(index);
        }

        for index in deferred {
            self.atom_db.activity_heap.activate(index);
        }
        chosen
    }

    fn decision_polarity(&self, atom: Atom, rng: &mut R) -> bool {
        if self.config.phase_saving.value {
            if let Some(previous) = self.assignment.get(atom).and_then(|entry| entry.previous) {
                return previous;
            }
        }

        match self.config.phase_initializer.value {
            PhaseInitializer::AllTrue => true,
            PhaseInitializer::AllFalse => false,
            PhaseInitializer::Random => rng.random_bool(0.5),
            PhaseInitializer::RulesTrueRestFalse => self.atom_db.kind(atom).is_body(),
        }
    }
}
