use super::{RebootStrategy, SearchMeasure};

/// Reboot every `interval` iterations of a solve.
pub struct FixedIteration {
    interval: u32,
    iterations: u32,
}

impl FixedIteration {
    pub fn new(interval: u32) -> Self {
        FixedIteration {
            interval,
            iterations: 0,
        }
    }
}

impl RebootStrategy for FixedIteration {
    fn is_reboot_scheduled(&self) -> bool {
        self.iterations >= self.interval
    }

    fn reboot_performed(&mut self, _measure: &SearchMeasure) {
        self.iterations = 0;
    }

    fn next_iteration(&mut self) {
        self.iterations = self.iterations.saturating_add(1);
    }
}

/// Reboot every `interval` learnt nogoods.
pub struct FixedLearned {
    interval: u32,
    learned: u32,
}

impl FixedLearned {
    pub fn new(interval: u32) -> Self {
        FixedLearned {
            interval,
            learned: 0,
        }
    }
}

impl RebootStrategy for FixedLearned {
    fn is_reboot_scheduled(&self) -> bool {
        self.learned >= self.interval
    }

    fn reboot_performed(&mut self, _measure: &SearchMeasure) {
        self.learned = 0;
    }

    fn new_learned_nogood(&mut self) {
        self.learned = self.learned.saturating_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_learned_ignores_other_events() {
        let mut strategy = FixedLearned::new(2);
        strategy.next_iteration();
        strategy.decision_made();
        strategy.conflict_encountered();
        strategy.new_enumeration_nogood();
        strategy.answer_set_found();
        strategy.new_learned_nogood();
        assert!(!strategy.is_reboot_scheduled());

        strategy.new_learned_nogood();
        assert!(strategy.is_reboot_scheduled());

        strategy.reboot_performed(&SearchMeasure::default());
        assert!(!strategy.is_reboot_scheduled());
    }

    #[test]
    fn fixed_iteration() {
        let mut strategy = FixedIteration::new(3);
        for _ in 0..3 {
            assert!(!strategy.is_reboot_scheduled());
            strategy.next_iteration();
        }
        assert!(strategy.is_reboot_scheduled());
        strategy.new_learned_nogood();
        strategy.reboot_performed(&SearchMeasure::default());
        assert!(!strategy.is_reboot_scheduled());
    }
}
