use std::sync::Arc;

use tracing::{debug, info};
use tutor_core::model::{LessonRequest, QuestionAnswer, parse_quiz};

use crate::ai::{TextGenerator, is_failure, prompts};

/// Generates tutorials and the quiz that goes with them.
#[derive(Clone)]
pub struct LessonService {
    generator: Arc<dyn TextGenerator>,
}

impl LessonService {
    #[must_use]
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// One generation call for the requested lesson.
    ///
    /// A failure text is never sent back for simplification; the lesson is generated
    /// from scratch instead.
    pub async fn generate_lesson(&self, request: &LessonRequest) -> String {
        let (prompt, simplify) = match request {
            LessonRequest::Simplify {
                signature,
                previous,
            } if !is_failure(previous) => (prompts::simpler_lesson(signature, previous), true),
            _ => (prompts::lesson(request.signature()), false),
        };
        let signature = request.signature();
        info!(
            subject = %signature.subject(),
            concept = signature.concept(),
            grade = signature.grade().value(),
            simplify,
            "generating lesson"
        );
        self.generator.generate(&prompt).await
    }

    /// Two sequential calls, questions then answers scoped to those questions,
    /// parsed into at most ten pairs.
    pub async fn generate_quiz(&self, lesson: &str) -> Vec<QuestionAnswer> {
        let questions = self
            .generator
            .generate(&prompts::quiz_questions(lesson))
            .await;
        let answers = self
            .generator
            .generate(&prompts::quiz_answers(lesson, &questions))
            .await;

        let quiz = parse_quiz(&questions, &answers);
        debug!(pairs = quiz.len(), "parsed quiz");
        quiz
    }
}
