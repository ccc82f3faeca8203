use super::{RebootStrategy, SearchMeasure};

/// The factor applied to the interval after each reboot.
const SCALING_FACTOR: f64 = 0.7;

/// The least interval.
const MINIMUM_INTERVAL: f64 = 5.0;

/// Reboot when the count of nogoods added during the search (learnt, enumeration, or justification) reaches an interval which adapts to the efficiency of the search.
///
/// After each reboot the efficiency of the search since the previous reboot is compared to the efficiency before.
/// If the efficiency improved the interval shrinks, as rebooting appears to help, and otherwise the interval grows.
/// The interval never falls below a minimum, and the first interval is kept as there is nothing to compare.
pub struct DynamicLearnedInterval {
    interval: f64,
    added: u32,
    previous_efficiency: Option<f64>,
}

impl DynamicLearnedInterval {
    pub fn new(interval: u32) -> Self {
        DynamicLearnedInterval {
            interval: f64::max(interval as f64, MINIMUM_INTERVAL),
            added: 0,
            previous_efficiency: None,
        }
    }

    /// The current interval, rounded down.
    pub fn interval(&self) -> u32 {
        self.interval as u32
    }
}

impl RebootStrategy for DynamicLearnedInterval {
    fn is_reboot_scheduled(&self) -> bool {
        self.added as f64 >= self.interval
    }

    fn reboot_performed(&mut self, measure: &SearchMeasure) {
        let efficiency = measure.efficiency();
        if let Some(previous) = self.previous_efficiency {
            match efficiency > previous {
                true => self.interval *= SCALING_FACTOR,
                false => self.interval /= SCALING_FACTOR,
            }
            self.interval = f64::max(self.interval, MINIMUM_INTERVAL);
        }
        self.previous_efficiency = Some(efficiency);
        self.added = 0;
    }

    fn new_nogood(&mut self) {
        self.added = self.added.saturating_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn measure(propagations: usize, decisions: usize) -> SearchMeasure {
        SearchMeasure {
            propagations,
            decisions,
        }
    }

    #[test]
    fn adapts() {
        let mut strategy = DynamicLearnedInterval::new(20);

        strategy.reboot_performed(&measure(10, 10));
        assert_eq!(strategy.interval(), 20);

        strategy.reboot_performed(&measure(30, 10));
        assert_eq!(strategy.interval(), 14);

        strategy.reboot_performed(&measure(10, 10));
        assert_eq!(strategy.interval(), 20);
    }

    #[test]
    fn floored() {
        let mut strategy = DynamicLearnedInterval::new(6);
        strategy.reboot_performed(&measure(1, 1));
        strategy.reboot_performed(&measure(2, 1));
        assert_eq!(strategy.interval(), 5);
        strategy.reboot_performed(&measure(3, 1));
        assert_eq!(strategy.interval(), 5);
    }

    #[test]
    fn scheduled_by_any_nogood() {
        let mut strategy = DynamicLearnedInterval::new(5);

        // A learnt nogood.
        strategy.new_learned_nogood();
        strategy.new_nogood();

        // An enumeration nogood.
        strategy.new_enumeration_nogood();
        strategy.new_nogood();

        // A justification nogood.
        strategy.new_justification_nogood();
        strategy.new_nogood();

        strategy.new_enumeration_nogood();
        strategy.new_nogood();
        assert!(!strategy.is_reboot_scheduled());

        strategy.new_enumeration_nogood();
        strategy.new_nogood();
        assert!(strategy.is_reboot_scheduled());

        strategy.reboot_performed(&measure(1, 1));
        assert!(!strategy.is_reboot_scheduled());
    }

    #[test]
    fn events_without_nogoods() {
        let mut strategy = DynamicLearnedInterval::new(5);
        for _ in 0..10 {
            strategy.new_learned_nogood();
            strategy.conflict_encountered();
            strategy.answer_set_found();
        }
        assert!(!strategy.is_reboot_scheduled());
    }
}
