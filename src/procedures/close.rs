//! Closing the assignment.
//!
//! When no decision can be made, every atom without a value is assigned false.
//! Such an atom has no support given the decisions made, as otherwise some body would be eligible for a decision or the atom would have been derived.
//!
//! Assignments made by closing have no antecedent.
//! So, until the next backjump, conflicts are resolved by [chronological backtracking](crate::procedures::backjump) rather than analysis.

use crate::{
    context::GenericContext,
    misc::log::targets::{self},
    structures::truth::Truth,
};

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Assigns false to every atom without a value.
    ///
    /// Returns true if some atom was assigned.
    pub fn close(&mut self) -> bool {
        let open = self
            .atom_db
            .atoms()
            .filter(|atom| self.assignment.value_of(*atom).is_none())
            .collect::<Vec<_>>();

        if open.is_empty() {
            return false;
        }

        log::trace!(target: targets::DECISION, "Closing {} atoms at level {}", open.len(), self.assignment.level());
        for atom in open {
            self.assignment.assign(atom, Truth::False, None);
        }
        self.after_closing = true;
        true
    }
}
