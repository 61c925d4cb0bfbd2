use std::sync::Arc;

use crate::ai::{TextGenerator, prompts};

/// Produces advisory hints. Budgeting is the session's job, not this service's.
#[derive(Clone)]
pub struct HintService {
    generator: Arc<dyn TextGenerator>,
}

impl HintService {
    #[must_use]
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// Returns the generated hint verbatim.
    pub async fn generate_hint(&self, question: &str, reference_answer: &str, lesson: &str) -> String {
        self.generator
            .generate(&prompts::hint(question, reference_answer, lesson))
            .await
    }
}
