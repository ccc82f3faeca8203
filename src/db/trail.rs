use crate::structures::{atom::Atom, literal::CLiteral, truth::Truth};

use super::LevelIndex;

/// A record of an assignment, in the order assignments were made.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TrailEntry {
    /// The atom assigned.
    pub atom: Atom,

    /// The value assigned.
    pub truth: Truth,

    /// Whether the entry records the promotion of a must-be-true atom to true.
    pub promotion: bool,
}

/// A decision, one for each decision level above zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Choice {
    /// The decision, as a literal which holds.
    pub literal: CLiteral,

    /// Whether the decision is the inverse of some earlier decision, taken after chronological backtracking.
    pub backtracked: bool,
}

/// The trail of assignments, split into decision levels, and the queue of assignments to propagate.
#[derive(Default)]
pub struct Trail {
    /// Entries, in order of assignment.
    pub entries: Vec<TrailEntry>,

    /// The index of the first entry of each level above zero.
    pub level_indicies: Vec<usize>,

    /// The decision made at each level above zero.
    pub choices: Vec<Choice>,

    /// The index of the next entry to propagate.
    pub q_head: usize,
}

impl Trail {
    /// The current level.
    pub fn level(&self) -> LevelIndex {
        self.level_indicies.len() as LevelIndex
    }

    /// Opens a fresh level with the given choice.
    pub fn open_level(&mut self, choice: Choice) {
        self.level_indicies.push(self.entries.len());
        self.choices.push(choice);
    }

    /// Stores an entry at the top level.
    pub fn push(&mut self, entry: TrailEntry) {
        self.entries.push(entry);
    }

    /// The choice made at the current level, if any.
    pub fn top_choice(&self) -> Option<&Choice> {
        self.choices.last()
    }

    /// The index of the first entry of the given level.
    pub fn level_start(&self, level: LevelIndex) -> usize {
        match level {
            0 => 0,
            _ => self
                .level_indicies
                .get(level as usize - 1)
                .copied()
                .unwrap_or(self.entries.len()),
        }
    }

    /// The next entry to propagate, if any.
    pub fn next_unpropagated(&self) -> Option<TrailEntry> {
        self.entries.get(self.q_head).copied()
    }

    /// Removes the levels above `level`, returning the removed entries in order of assignment.
    ///
    /// The head of the propagation queue is kept within the remaining entries.
    pub fn clear_levels_above(&mut self, level: LevelIndex) -> Vec<TrailEntry> {
        if level >= self.level() {
            return Vec::default();
        }
        let start = self.level_indicies[level as usize];
        self.level_indicies.truncate(level as usize);
        self.choices.truncate(level as usize);
        self.q_head = std::cmp::min(self.q_head, start);
        self.entries.split_off(start)
    }
}
