use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::ai::client::TextGenerator;

/// Replays canned replies in order and records every prompt it receives.
///
/// Useful for tests and offline demos. Once the script runs out it answers with
/// the fallback reply.
#[derive(Clone, Default)]
pub struct ScriptedGenerator {
    inner: Arc<Mutex<ScriptState>>,
}

#[derive(Default)]
struct ScriptState {
    replies: VecDeque<String>,
    fallback: String,
    prompts: Vec<String>,
}

impl ScriptedGenerator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_replies<I, S>(replies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let generator = Self::new();
        for reply in replies {
            generator.push_reply(reply);
        }
        generator
    }

    #[must_use]
    pub fn with_fallback(self, fallback: impl Into<String>) -> Self {
        if let Ok(mut state) = self.inner.lock() {
            state.fallback = fallback.into();
        }
        self
    }

    pub fn push_reply(&self, reply: impl Into<String>) {
        if let Ok(mut state) = self.inner.lock() {
            state.replies.push_back(reply.into());
        }
    }

    /// Prompts received so far, oldest first.
    #[must_use]
    pub fn prompts(&self) -> Vec<String> {
        self.inner
            .lock()
            .map(|state| state.prompts.clone())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn calls(&self) -> usize {
        self.inner.lock().map(|state| state.prompts.len()).unwrap_or(0)
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    async fn generate(&self, prompt: &str) -> String {
        let Ok(mut state) = self.inner.lock() else {
            return String::new();
        };
        state.prompts.push(prompt.to_string());
        match state.replies.pop_front() {
            Some(reply) => reply,
            None => state.fallback.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn replays_in_order_then_falls_back() {
        let generator = ScriptedGenerator::with_replies(["one", "two"]).with_fallback("done");
        assert_eq!(generator.generate("a").await, "one");
        assert_eq!(generator.generate("b").await, "two");
        assert_eq!(generator.generate("c").await, "done");
        assert_eq!(generator.calls(), 3);
        assert_eq!(generator.prompts(), vec!["a", "b", "c"]);
    }
}
