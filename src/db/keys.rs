/// The index to a nogood.
pub type FormulaIndex = u32;

/// A key to access a nogood stored in the nogood database.
///
/// Nogoods are split by whether they may be removed.
/// Original nogoods (from the program, support and enumeration nogoods, etc.) persist for the life of a context, while additions (learnt nogoods) may be removed during a reduction.
/// The index of a removed addition is never reused, so a key held by a stale watch is detected rather than misread.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NoGoodKey {
    /// The key to an original nogood.
    Original(FormulaIndex),

    /// The key to an addition.
    Addition(FormulaIndex),
}

impl NoGoodKey {
    /// Extracts the index from a key.
    pub fn index(&self) -> usize {
        match self {
            Self::Original(i) | Self::Addition(i) => *i as usize,
        }
    }
}

impl std::fmt::Display for NoGoodKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Original(i) => write!(f, "o{i}"),
            Self::Addition(i) => write!(f, "a{i}"),
        }
    }
}
