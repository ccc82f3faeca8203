use super::{RebootStrategy, SearchMeasure};

/// Reboot immediately after an answer set is found.
#[derive(Default)]
pub struct AnswerSetFound {
    scheduled: bool,
}

impl RebootStrategy for AnswerSetFound {
    fn is_reboot_scheduled(&self) -> bool {
        self.scheduled
    }

    fn reboot_performed(&mut self, _measure: &SearchMeasure) {
        self.scheduled = false;
    }

    fn answer_set_found(&mut self) {
        self.scheduled = true;
    }
}

/// Reboot after any complete assignment, whether an answer set or an assignment with an unfounded set.
#[derive(Default)]
pub struct CompleteAssignment {
    scheduled: bool,
}

impl RebootStrategy for CompleteAssignment {
    fn is_reboot_scheduled(&self) -> bool {
        self.scheduled
    }

    fn reboot_performed(&mut self, _measure: &SearchMeasure) {
        self.scheduled = false;
    }

    fn backtrack_justified(&mut self) {
        self.scheduled = true;
    }

    fn answer_set_found(&mut self) {
        self.scheduled = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answer_set_found() {
        let mut strategy = AnswerSetFound::default();
        strategy.backtrack_justified();
        strategy.new_learned_nogood();
        assert!(!strategy.is_reboot_scheduled());
        strategy.answer_set_found();
        assert!(strategy.is_reboot_scheduled());
        strategy.reboot_performed(&SearchMeasure::default());
        assert!(!strategy.is_reboot_scheduled());
    }

    #[test]
    fn complete_assignment() {
        let mut strategy = CompleteAssignment::default();
        strategy.new_justification_nogood();
        assert!(!strategy.is_reboot_scheduled());
        strategy.backtrack_justified();
        assert!(strategy.is_reboot_scheduled());
        strategy.reboot_performed(&SearchMeasure::default());
        strategy.answer_set_found();
        assert!(strategy.is_reboot_scheduled());
    }
}
