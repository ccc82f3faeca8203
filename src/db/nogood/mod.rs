/*!
A database of nogoods.

Nogoods are stored as [StoredNoGood]s, each the nogood together with the position of its watches, an activity, and an lbd.
Original nogoods are kept in one vector and additions (learnt nogoods) in another.

# Watches

The watches of a stored nogood are indicies into the literals of the nogood:
- Two *weak* watches, on nogoods with at least three literals.
- One *strong* watch, on headed nogoods with at least three literals, always on a literal other than the head.

Which nogoods watch a literal is recorded in the [watch lists](crate::db::watches).
Nogoods with one or two literals are not watched in the database, see [propagation](crate::procedures::propagate).

# Removal

Additions may be removed, after which the index of the addition is never reused.
Watch lists are not updated on removal, instead any stale key found on a watch list is dropped when next met.
*/

use crate::{
    config::{Activity, Config, ConfigOption, LBD},
    db::keys::{FormulaIndex, NoGoodKey},
    misc::log::targets::{self},
    structures::{
        literal::CLiteral,
        nogood::{NoGood, NoGoodKind},
    },
    types::err::{self},
};

/// A nogood stored in the database.
#[derive(Clone, Debug)]
pub struct StoredNoGood {
    nogood: NoGood,

    /// The indicies of the weakly watched literals.
    pub watches: [usize; 2],

    /// The index of the strongly watched literal, for headed nogoods.
    pub strong_watch: usize,

    /// The lbd of the nogood when stored.
    pub lbd: LBD,

    /// The activity of the nogood.
    pub activity: Activity,
}

impl StoredNoGood {
    pub fn nogood(&self) -> &NoGood {
        &self.nogood
    }

    pub fn literals(&self) -> &[CLiteral] {
        self.nogood.literals()
    }

    pub fn literal_at(&self, index: usize) -> CLiteral {
        self.nogood.literals()[index]
    }

    pub fn size(&self) -> usize {
        self.nogood.size()
    }
}

/// The nogood database.
pub struct NoGoodDB {
    original: Vec<StoredNoGood>,

    addition: Vec<Option<StoredNoGood>>,

    /// A count of additions which have not been removed.
    addition_count: usize,

    bump: ConfigOption<Activity>,

    decay: ConfigOption<Activity>,
}

impl NoGoodDB {
    pub fn new(config: &Config) -> Self {
        NoGoodDB {
            original: Vec::default(),
            addition: Vec::default(),
            addition_count: 0,
            bump: config.nogood_bump.clone(),
            decay: config.nogood_decay.clone(),
        }
    }

    /// Stores a nogood, returning the key to the nogood.
    ///
    /// Learnt nogoods are stored as additions, and all other nogoods as originals.
    /// Watches are initialised to the first literals of the nogood, and are expected to be revised by the caller.
    pub fn store(&mut self, nogood: NoGood, lbd: LBD) -> Result<NoGoodKey, err::NoGoodDBError> {
        let stored = StoredNoGood {
            watches: [0, std::cmp::min(1, nogood.size().saturating_sub(1))],
            strong_watch: std::cmp::min(1, nogood.size().saturating_sub(1)),
            lbd,
            activity: 0.0,
            nogood,
        };

        let key = match stored.nogood.kind() {
            NoGoodKind::Learnt => {
                let index = FormulaIndex::try_from(self.addition.len())
                    .map_err(|_| err::NoGoodDBError::StorageExhausted)?;
                self.addition.push(Some(stored));
                self.addition_count += 1;
                NoGoodKey::Addition(index)
            }
            _ => {
                let index = FormulaIndex::try_from(self.original.len())
                    .map_err(|_| err::NoGoodDBError::StorageExhausted)?;
                self.original.push(stored);
                NoGoodKey::Original(index)
            }
        };

        log::trace!(target: targets::NOGOOD_DB, "Stored {key}: {}", self.get(key)?.nogood);
        Ok(key)
    }

    /// The nogood with the given key.
    pub fn get(&self, key: NoGoodKey) -> Result<&StoredNoGood, err::NoGoodDBError> {
        let stored = match key {
            NoGoodKey::Original(index) => self.original.get(index as usize),
            NoGoodKey::Addition(index) => self
                .addition
                .get(index as usize)
                .and_then(|stored| stored.as_ref()),
        };
        stored.ok_or(err::NoGoodDBError::Missing(key))
    }

    /// The nogood with the given key, mutably.
    pub fn get_mut(&mut self, key: NoGoodKey) -> Result<&mut StoredNoGood, err::NoGoodDBError> {
        let stored = match key {
            NoGoodKey::Original(index) => self.original.get_mut(index as usize),
            NoGoodKey::Addition(index) => self
                .addition
                .get_mut(index as usize)
                .and_then(|stored| stored.as_mut()),
        };
        stored.ok_or(err::NoGoodDBError::Missing(key))
    }

    /// Whether a nogood with the given key is stored.
    pub fn contains(&self, key: NoGoodKey) -> bool {
        self.get(key).is_ok()
    }

    /// Removes an addition, returning the nogood.
    pub fn remove(&mut self, key: NoGoodKey) -> Result<NoGood, err::NoGoodDBError> {
        match key {
            NoGoodKey::Original(_) => {
                log::error!(target: targets::NOGOOD_DB, "Attempt to remove original {key}");
                Err(err::NoGoodDBError::Missing(key))
            }
            NoGoodKey::Addition(index) => {
                match self.addition.get_mut(index as usize).and_then(|slot| slot.take()) {
                    Some(stored) => {
                        self.addition_count -= 1;
                        Ok(stored.nogood)
                    }
                    None => Err(err::NoGoodDBError::Missing(key)),
                }
            }
        }
    }

    /// A count of original nogoods.
    pub fn original_count(&self) -> usize {
        self.original.len()
    }

    /// A count of additions which have not been removed.
    pub fn addition_count(&self) -> usize {
        self.addition_count
    }

    /// Iterates over the keys of all stored nogoods.
    pub fn keys(&self) -> impl Iterator<Item = NoGoodKey> + '_ {
        let original = (0..self.original.len()).map(|index| NoGoodKey::Original(index as FormulaIndex));
        let addition = self
            .addition
            .iter()
            .enumerate()
            .filter(|(_, stored)| stored.is_some())
            .map(|(index, _)| NoGoodKey::Addition(index as FormulaIndex));
        original.chain(addition)
    }

    /// Iterates over the keys and nogoods of all additions which have not been removed.
    pub fn additions(&self) -> impl Iterator<Item = (NoGoodKey, &StoredNoGood)> + '_ {
        self.addition.iter().enumerate().filter_map(|(index, stored)| {
            stored
                .as_ref()
                .map(|stored| (NoGoodKey::Addition(index as FormulaIndex), stored))
        })
    }

    /// Bumps the activity of a nogood, rescaling all activities if needed.
    pub fn bump_activity(&mut self, key: NoGoodKey) {
        let bump = self.bump.value;
        let max = self.bump.max;
        let Ok(stored) = self.get_mut(key) else {
            return;
        };
        stored.activity += bump;

        if stored.activity > max {
            let factor = 1.0 / stored.activity;
            for stored in self.original.iter_mut() {
                stored.activity *= factor;
            }
            for stored in self.addition.iter_mut().flatten() {
                stored.activity *= factor;
            }
            self.bump.value *= factor;
        }
    }

    /// Increases the bump applied to nogoods, so as to decay the relative activity of nogoods already bumped.
    pub fn decay_activity(&mut self) {
        self.bump.value *= 1.0 / (1.0 - self.decay.value);
    }
}
