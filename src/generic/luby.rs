/*!
An iterator over the Luby sequence, 1, 1, 2, 1, 1, 2, 4, 1, …

See <https://oeis.org/A182105> for details.

The iterator tracks a pair: a count of completed runs `u` and the current value `v`.
If `v` is the lowest set bit of `u` a run has finished, so `u` is incremented and `v` restarts at 1, otherwise `v` doubles.
This follows Knuth's 'reluctant doubling' formulation of the sequence.
*/

/// Representation used for numbers in a luby sequence.
pub type LubyRepresentation = u32;

/// Foundation of the iterator.
#[derive(Clone, Debug)]
pub struct Luby {
    runs: LubyRepresentation,
    value: LubyRepresentation,
}

impl Default for Luby {
    fn default() -> Self {
        Luby { runs: 0, value: 0 }
    }
}

impl Iterator for Luby {
    type Item = LubyRepresentation;

    fn next(&mut self) -> Option<Self::Item> {
        if self.runs & self.runs.wrapping_neg() == self.value {
            self.runs = self.runs.checked_add(1)?;
            self.value = 1;
        } else {
            self.value = self.value.checked_add(self.value)?;
        }

        Some(self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // https://oeis.org/A182105
    const LUBY_SLICE: &[LubyRepresentation] = &[
        1, 1, 2, 1, 1, 2, 4, 1, 1, 2, 1, 1, 2, 4, 8, 1, 1, 2, 1, 1, 2, 4, 1, 1, 2, 1, 1, 2, 4, 8,
        16, 1, 1, 2, 1, 1, 2, 4, 1, 1, 2, 1, 1, 2, 4, 8, 1, 1, 2, 1, 1, 2, 4, 1, 1, 2, 1, 1, 2, 4,
        8, 16, 32, 1, 1, 2,
    ];

    #[test]
    fn luby() {
        let luby = Luby::default();
        for (value, known_value) in luby.zip(LUBY_SLICE) {
            assert_eq!(value, *known_value)
        }
    }
}
