use crate::generic::luby::{Luby, LubyRepresentation};

use super::{RebootStrategy, SearchMeasure};

/// Reboot when the count of learnt and enumeration nogoods since the last reboot reaches `scale` times the next element of the Luby sequence.
///
/// So, with a scale of 1, reboots are scheduled after 1, 1, 2, 1, 1, 2, 4, … nogoods.
pub struct LubyLearned {
    scale: u32,
    luby: Luby,
    target: u64,
    learned: u64,
}

impl LubyLearned {
    pub fn new(scale: u32) -> Self {
        let mut luby = Luby::default();
        let first = luby.next().unwrap_or(LubyRepresentation::MAX);
        LubyLearned {
            scale,
            luby,
            target: scale as u64 * first as u64,
            learned: 0,
        }
    }
}

impl RebootStrategy for LubyLearned {
    fn is_reboot_scheduled(&self) -> bool {
        self.learned >= self.target
    }

    fn reboot_performed(&mut self, _measure: &SearchMeasure) {
        self.learned = 0;
        let next = self.luby.next().unwrap_or(LubyRepresentation::MAX);
        self.target = self.scale as u64 * next as u64;
    }

    fn new_learned_nogood(&mut self) {
        self.learned += 1;
    }

    fn new_enumeration_nogood(&mut self) {
        self.learned += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nogoods_until_reboot(strategy: &mut LubyLearned) -> u32 {
        let mut count = 0;
        while !strategy.is_reboot_scheduled() {
            strategy.new_learned_nogood();
            count += 1;
        }
        strategy.reboot_performed(&SearchMeasure::default());
        count
    }

    #[test]
    fn unit_scale() {
        let mut strategy = LubyLearned::new(1);
        let counts = (0..7)
            .map(|_| nogoods_until_reboot(&mut strategy))
            .collect::<Vec<_>>();
        assert_eq!(counts, vec![1, 1, 2, 1, 1, 2, 4]);
    }

    #[test]
    fn scaled() {
        let mut strategy = LubyLearned::new(3);
        assert_eq!(nogoods_until_reboot(&mut strategy), 3);
        assert_eq!(nogoods_until_reboot(&mut strategy), 3);
        assert_eq!(nogoods_until_reboot(&mut strategy), 6);
    }

    #[test]
    fn enumeration_counts() {
        let mut strategy = LubyLearned::new(1);
        strategy.new_justification_nogood();
        strategy.conflict_encountered();
        assert!(!strategy.is_reboot_scheduled());
        strategy.new_enumeration_nogood();
        assert!(strategy.is_reboot_scheduled());
    }
}
