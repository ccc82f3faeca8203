//! The search for answer sets.
//!
//! # Overview
//!
//! Answer sets are found one at a time, on request, through [next_answer_set](GenericContext::next_answer_set) or the [answer_sets](GenericContext::answer_sets) iterator.
//! Stopping requests abandons the search, with no further effect on the context.
//!
//! Each iteration of the search loop does one of the following, in order of precedence:
//!
//! 1. Propagates the trail to a fixpoint.
//!    On a conflict either analysis and a backjump follow or, if the assignment was closed, a chronological backtrack.
//!    A conflict which cannot be resolved means the search space has been explored.
//! 2. Asks the grounder (if any) for nogoods, if the assignment changed since the grounder was last asked.
//! 3. Reboots, if a reboot is scheduled.
//! 4. Makes a decision on some eligible atom.
//! 5. Closes the assignment, by assigning false to every atom without a value.
//! 6. With every atom assigned:
//!    - If no atom is must-be-true, the assignment is an answer set, and the search pauses.
//!    - Otherwise, some must-be-true atom is justified, which either promotes some atoms to true or adds a nogood ruling out an unfounded set.
//!
//! Roughly, the loop is as diagrammed:
//!
//! ```none
//!          +-------------------------------------------+
//!          |                                           |
//!          ⌄             conflict                      |
//! --+--> propagate ----------------> analyse/backjump -+
//!   ⌃      |                                           |
//!   |      | fixpoint                                  |
//!   |      ⌄                                           |
//!   +--- decide, or close                              |
//!          |                                           |
//!          | complete                                  |
//!          ⌄                  must-be-true             |
//!     answer set?  ----------------------> justify ----+
//!          |
//!          | no must-be-true
//!          ⌄
//!     answer set
//! ```
//!
//! When the next answer set is requested, a nogood over the choices which led to the last answer set is added, so the same answer set is not found again.
//! If no choice was made, the search space has been explored.
//!
//! # Reboots
//!
//! A reboot is only made above level zero, and only if some nogood was added since the last reboot, as otherwise the search would repeat.
//!
//! # Example
//!
//! ```rust
//! # use otter_asp::context::Context;
//! # use otter_asp::config::Config;
//! # use otter_asp::reports::Report;
//! let mut the_context = Context::from_config(Config::default());
//! let store = the_context.read_program("a :- not a.".as_bytes()).unwrap();
//!
//! assert_eq!(the_context.answer_sets().count(), 0);
//! assert_eq!(the_context.report(), Report::Unsatisfiable);
//! ```

use std::time::Instant;

use crate::{
    builder::NoGoodOk,
    context::{ContextState, GenericContext},
    db::NoGoodKey,
    misc::log::targets::{self},
    procedures::{analysis::AnalysisResult, decision::DecisionOk, justification::JustificationResult},
    reboot::SearchMeasure,
    reports::Report,
    structures::{
        answer_set::AnswerSet,
        nogood::{NoGood, NoGoodKind},
        truth::Truth,
    },
    types::err::{self, ErrorKind},
};

/// An iterator over the answer sets of a context.
///
/// The iterator ends after the last answer set, or after returning an error.
pub struct AnswerSets<'c, R: rand::Rng + std::default::Default> {
    context: &'c mut GenericContext<R>,
    failed: bool,
}

impl<R: rand::Rng + std::default::Default> Iterator for AnswerSets<'_, R> {
    type Item = Result<AnswerSet, ErrorKind>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        match self.context.next_answer_set() {
            Ok(answer_set) => answer_set.map(Ok),
            Err(e) => {
                self.failed = true;
                Some(Err(e))
            }
        }
    }
}

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// An iterator over the answer sets of the context.
    pub fn answer_sets(&mut self) -> AnswerSets<'_, R> {
        AnswerSets {
            context: self,
            failed: false,
        }
    }

    /// Searches for a single answer set, and reports on the search.
    pub fn solve(&mut self) -> Result<Report, ErrorKind> {
        self.next_answer_set()?;
        Ok(self.report())
    }

    /// The next answer set of the program, if any.
    ///
    /// None is returned when every answer set has been found, or if the time limit of the config was reached.
    /// In the latter case the state of the context remains [Solving](ContextState::Solving).
    pub fn next_answer_set(&mut self) -> Result<Option<AnswerSet>, ErrorKind> {
        match self.state {
            ContextState::Unsatisfiable | ContextState::Exhausted => return Ok(None),

            ContextState::AnswerSet => {
                if !self.exclude_answer_set()? {
                    return Ok(None);
                }
            }

            ContextState::Configuration | ContextState::Input => {
                if let Some(grounder) = self.grounder.as_mut() {
                    let batch = grounder.initial();
                    self.ingest(batch)?;
                    self.synced = Some(self.assignment.modifications());
                }
            }

            ContextState::Solving => {}
        }

        if self.is_explored() {
            return Ok(None);
        }
        self.state = ContextState::Solving;

        let start = Instant::now();
        let result = self.search(start);
        self.counters.time += start.elapsed();
        result
    }

    /// Whether the search space has been explored.
    fn is_explored(&self) -> bool {
        matches!(self.state, ContextState::Unsatisfiable | ContextState::Exhausted)
    }

    /// Notes the search space has been explored.
    pub(crate) fn note_explored(&mut self) {
        self.state = match self.counters.answer_sets {
            0 => ContextState::Unsatisfiable,
            _ => ContextState::Exhausted,
        };
        log::trace!(target: targets::BACKJUMP, "Search space explored, {}", self.state);
    }

    /// Adds a nogood over the choices of the current answer set.
    ///
    /// Returns false if the search space has been explored.
    fn exclude_answer_set(&mut self) -> Result<bool, ErrorKind> {
        let choices = self
            .assignment
            .trail
            .choices
            .iter()
            .map(|choice| choice.literal)
            .collect::<Vec<_>>();

        if choices.is_empty() {
            self.note_explored();
            return Ok(false);
        }

        self.reboot.new_enumeration_nogood();
        self.reboot.new_nogood();
        match self.add_nogood(NoGood::new(choices, NoGoodKind::Internal))? {
            NoGoodOk::Unsatisfiable => Ok(false),
            NoGoodOk::Added(_) | NoGoodOk::Tautology => {
                self.state = ContextState::Solving;
                Ok(true)
            }
        }
    }

    fn search(&mut self, start: Instant) -> Result<Option<AnswerSet>, ErrorKind> {
        let time_limit = self.config.time_limit.value;

        'search: loop {
            if !time_limit.is_zero() && self.counters.time + start.elapsed() > time_limit {
                log::info!("Time limit reached");
                return Ok(None);
            }

            self.counters.total_iterations += 1;
            self.reboot.next_iteration();

            if let Err(err::PropagationError::Conflict(key)) = self.propagate() {
                if !self.handle_conflict(key)? {
                    self.note_explored();
                    return Ok(None);
                }
                continue 'search;
            }

            if self.config.checks.value {
                self.check_invariants()?;
            }

            if self.sync_grounder()? {
                if self.is_explored() {
                    return Ok(None);
                }
                continue 'search;
            }

            if self.config.reboot.value
                && self.reboot.is_reboot_scheduled()
                && self.assignment.level() > 0
                && self.counters.fresh_additions > 0
            {
                self.perform_reboot();
                continue 'search;
            }

            if let DecisionOk::Literal(_) = self.make_decision() {
                continue 'search;
            }

            if self.close() {
                continue 'search;
            }

            if self.assignment.mbt_count() == 0 {
                let answer_set = AnswerSet::from_atoms(
                    self.assignment
                        .atoms_with(Truth::True)
                        .filter(|atom| !self.atom_db.kind(*atom).is_body()),
                );

                self.state = ContextState::AnswerSet;
                self.counters.answer_sets += 1;
                self.reboot.answer_set_found();
                log::info!("Answer set {}: {answer_set}", self.counters.answer_sets);
                return Ok(Some(answer_set));
            }

            self.counters.statistics.mbt_at_fixpoint += 1;
            let target = self
                .assignment
                .atoms_with(Truth::MustBeTrue)
                .next()
                .ok_or(err::InconsistencyError::NotMustBeTrue(0))?;

            if let JustificationResult::Unfounded(nogood) = self.justify(target)? {
                self.reboot.new_justification_nogood();
                self.reboot.new_nogood();
                if let NoGoodOk::Unsatisfiable = self.add_nogood(nogood)? {
                    return Ok(None);
                }
                self.reboot.backtrack_justified();
            }
        }
    }

    /// Resolves a conflict on the nogood with the given key.
    ///
    /// Returns false if the conflict cannot be resolved, and so the search space has been explored.
    fn handle_conflict(&mut self, key: NoGoodKey) -> Result<bool, ErrorKind> {
        self.counters.total_conflicts += 1;
        self.reboot.conflict_encountered();

        if self.after_closing {
            self.counters.statistics.conflicts_after_closing += 1;
            if !self.backtrack_chronologically() {
                return Ok(false);
            }
        } else {
            match self.conflict_analysis(key)? {
                AnalysisResult::Unsatisfiable => return Ok(false),

                AnalysisResult::Learnt {
                    nogood,
                    backjump_level,
                    lbd,
                } => {
                    self.backjump(backjump_level);
                    self.reboot.new_learned_nogood();
                    self.reboot.new_nogood();
                    if let NoGoodOk::Unsatisfiable = self.insert_nogood(nogood, Some(lbd))? {
                        return Ok(false);
                    }
                }
            }
        }

        let conflicts = self.counters.total_conflicts;
        if conflicts % std::cmp::max(1, self.config.decay_period.value as usize) == 0 {
            self.atom_db.decay_activity();
            self.nogood_db.decay_activity();
        }

        let interval = self.config.reduction_interval.value as usize;
        if interval > 0 && conflicts % interval == 0 {
            self.reduce()?;
        }

        Ok(true)
    }

    /// Asks the grounder for nogoods, if the assignment has changed since the grounder was last asked.
    ///
    /// Returns true if anything was added to the context.
    fn sync_grounder(&mut self) -> Result<bool, ErrorKind> {
        let modifications = self.assignment.modifications();
        if self.synced == Some(modifications) {
            return Ok(false);
        }
        let Some(grounder) = self.grounder.as_mut() else {
            return Ok(false);
        };

        let batch = grounder.update(&self.assignment);
        self.synced = Some(modifications);
        if batch.is_empty() {
            return Ok(false);
        }

        log::trace!(target: targets::GROUNDING, "Update with {} nogoods", batch.nogoods.len());
        self.ingest(batch)?;
        self.synced = Some(self.assignment.modifications());
        Ok(true)
    }

    fn perform_reboot(&mut self) {
        log::trace!(target: targets::REBOOT, "Reboot from level {}", self.assignment.level());
        self.unwind_to(0);

        let measure = SearchMeasure {
            propagations: self.counters.fresh_propagations,
            decisions: self.counters.fresh_decisions,
        };
        self.reboot.reboot_performed(&measure);

        self.counters.reboots += 1;
        self.counters.fresh_propagations = 0;
        self.counters.fresh_decisions = 0;
        self.counters.fresh_additions = 0;
    }
}
