use std::fmt;

use tutor_core::model::Session;

/// Aggregated view of quiz progress, useful for UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizProgress {
    pub total: usize,
    pub answered: usize,
    pub score: usize,
    pub is_complete: bool,
}

impl QuizProgress {
    #[must_use]
    pub fn of(session: &Session) -> Self {
        Self {
            total: session.quiz().len(),
            answered: session.current_question_index(),
            score: session.score(),
            is_complete: session.is_complete(),
        }
    }

    #[must_use]
    pub fn final_score(&self) -> FinalScore {
        FinalScore {
            score: self.score,
            total: self.total,
        }
    }
}

/// Score shown on the completion screen, rendered as `Final Score: s/n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FinalScore {
    pub score: usize,
    pub total: usize,
}

impl fmt::Display for FinalScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Final Score: {}/{}", self.score, self.total)
    }
}
