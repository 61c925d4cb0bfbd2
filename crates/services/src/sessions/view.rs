use tutor_core::model::{DifficultyGrade, Page, Session, Subject};

use crate::ai::is_failure;
use super::progress::{FinalScore, QuizProgress};

/// Presentation-agnostic snapshot of what the current page should show.
///
/// No pre-formatted strings beyond the generated texts themselves; the front-end
/// decides how to lay them out.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionScreen {
    Home,
    Tutorial(TutorialScreen),
    Quiz(QuizScreen),
}

#[derive(Debug, Clone, PartialEq)]
pub struct TutorialScreen {
    pub subject: Option<Subject>,
    pub concept: String,
    pub grade: DifficultyGrade,
    /// Difficulty meter position in `(0, 1]`.
    pub meter: f32,
    pub lesson: String,
    /// The lesson text is a generation failure message.
    pub lesson_failed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizScreen {
    /// The quiz could not be built from the generated text.
    Empty,
    Question {
        number: usize,
        total: usize,
        text: String,
        score: usize,
        hints_used: u8,
        hints_remaining: u8,
    },
    Feedback {
        number: usize,
        total: usize,
        is_correct: bool,
        body: String,
        score: usize,
    },
    Completed(FinalScore),
}

impl SessionScreen {
    #[must_use]
    pub fn from_session(session: &Session) -> Self {
        match session.page() {
            Page::Home => SessionScreen::Home,
            Page::Tutorial => SessionScreen::Tutorial(TutorialScreen {
                subject: session.subject(),
                concept: session.concept().to_string(),
                grade: session.grade(),
                meter: session.grade().meter(),
                lesson: session.lesson().to_string(),
                lesson_failed: is_failure(session.lesson()),
            }),
            Page::Quiz => SessionScreen::Quiz(QuizScreen::from_session(session)),
        }
    }
}

impl QuizScreen {
    fn from_session(session: &Session) -> Self {
        let progress = QuizProgress::of(session);
        if progress.total == 0 {
            return QuizScreen::Empty;
        }
        let index = session.current_question_index();
        let number = index + 1;

        if let Some(feedback) = session.pending_feedback() {
            return QuizScreen::Feedback {
                number,
                total: progress.total,
                is_correct: feedback.is_correct(),
                body: feedback.body().to_string(),
                score: progress.score,
            };
        }

        match session.current_question() {
            Some(question) => QuizScreen::Question {
                number,
                total: progress.total,
                text: question.question().to_string(),
                score: progress.score,
                hints_used: session.hints().used(index),
                hints_remaining: session.hints_remaining(),
            },
            None => QuizScreen::Completed(progress.final_score()),
        }
    }
}
