use std::collections::HashMap;

/// Hints allowed per quiz question.
pub const MAX_HINTS_PER_QUESTION: u8 = 3;

/// Per-question hint counters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HintBudget {
    used: HashMap<usize, u8>,
}

impl HintBudget {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn used(&self, question: usize) -> u8 {
        self.used.get(&question).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn remaining(&self, question: usize) -> u8 {
        MAX_HINTS_PER_QUESTION.saturating_sub(self.used(question))
    }

    #[must_use]
    pub fn can_request(&self, question: usize) -> bool {
        self.remaining(question) > 0
    }

    /// Counts one hint against `question`; returns the new count, or `None` if the
    /// budget was already spent (the counter is left unchanged).
    pub fn record(&mut self, question: usize) -> Option<u8> {
        if !self.can_request(question) {
            return None;
        }
        let count = self.used.entry(question).or_insert(0);
        *count += 1;
        Some(*count)
    }

    pub fn clear(&mut self) {
        self.used.clear();
    }
}
