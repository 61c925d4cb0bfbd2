use std::sync::Arc;

use tracing::debug;
use tutor_core::model::Feedback;

use crate::ai::{TextGenerator, prompts};

/// Delegates answer grading to the generation service.
#[derive(Clone)]
pub struct GradingService {
    generator: Arc<dyn TextGenerator>,
}

impl GradingService {
    #[must_use]
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// Grade `student_answer` using the lesson as the only knowledge source.
    ///
    /// The verdict comes from the reply's first line; the whole reply is kept as
    /// feedback text. A failed generation grades as incorrect.
    pub async fn evaluate(&self, question: &str, student_answer: &str, lesson: &str) -> Feedback {
        let prompt = prompts::grading(question, student_answer, lesson);
        let reply = self.generator.generate(&prompt).await;
        let feedback = Feedback::from_reply(reply);
        debug!(correct = feedback.is_correct(), "graded answer");
        feedback
    }
}
