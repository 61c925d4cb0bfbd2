use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::ai::config::GenerationConfig;
use crate::error::{ConfigError, GenerationError};

/// Prefix of every text produced in place of a failed generation.
pub const FAILURE_MARKER: &str = "❌ Error contacting API";

/// Anything that turns a prompt into generated text.
///
/// Implementations never fail: a failed call yields a failure text (see
/// [`failure_text`]) that callers treat like any other generated text.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> String;
}

/// Renders a generation failure as displayable text.
#[must_use]
pub fn failure_text(reason: &impl std::fmt::Display) -> String {
    format!("{FAILURE_MARKER}: {reason}")
}

/// Whether `text` is a failure text rather than model output.
#[must_use]
pub fn is_failure(text: &str) -> bool {
    text.starts_with(FAILURE_MARKER)
}

/// Chat-completion client: one POST per prompt, no retries.
#[derive(Clone)]
pub struct GenerationClient {
    client: Client,
    config: GenerationConfig,
}

impl GenerationClient {
    /// # Errors
    ///
    /// Returns `ConfigError::Client` if the HTTP client cannot be built.
    pub fn new(config: GenerationConfig) -> Result<Self, ConfigError> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(ConfigError::Client)?;
        Ok(Self { client, config })
    }

    #[must_use]
    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// Generate text from a prompt, keeping the failure typed.
    ///
    /// # Errors
    ///
    /// Returns `GenerationError` when the request fails, times out, returns a
    /// non-success status, or carries no message content.
    pub async fn try_generate(&self, prompt: &str) -> Result<String, GenerationError> {
        let payload = ChatRequest {
            model: self.config.model(),
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
        };

        debug!(model = self.config.model(), prompt_len = prompt.len(), "sending generation request");
        let response = self
            .client
            .post(self.config.endpoint("chat/completions"))
            .bearer_auth(self.config.api_key())
            .json(&payload)
            .send()
            .await
            .map_err(classify)?;

        if !response.status().is_success() {
            return Err(GenerationError::HttpStatus(response.status()));
        }

        let raw = response.text().await.map_err(classify)?;
        let body: ChatResponse = serde_json::from_str(&raw)?;
        let content = body
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|content| content.trim().to_string())
            .filter(|content| !content.is_empty())
            .ok_or(GenerationError::EmptyResponse)?;

        Ok(content)
    }

    /// Makes one authenticated request to check the key before the app starts.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::CredentialRejected` on 401/403. Network problems and
    /// other statuses are logged and tolerated; generation calls report them later.
    pub async fn verify_credentials(&self) -> Result<(), ConfigError> {
        let result = self
            .client
            .get(self.config.endpoint("models"))
            .bearer_auth(self.config.api_key())
            .send()
            .await;

        match result {
            Ok(response) => match response.status() {
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                    Err(ConfigError::CredentialRejected(response.status()))
                }
                status if status.is_success() => Ok(()),
                status => {
                    warn!(%status, "credential check returned an unexpected status");
                    Ok(())
                }
            },
            Err(err) => {
                warn!(error = %err, "credential check could not reach the API");
                Ok(())
            }
        }
    }
}

#[async_trait]
impl TextGenerator for GenerationClient {
    async fn generate(&self, prompt: &str) -> String {
        match self.try_generate(prompt).await {
            Ok(text) => text,
            Err(err) => {
                warn!(error = %err, "generation failed");
                failure_text(&err)
            }
        }
    }
}

fn classify(err: reqwest::Error) -> GenerationError {
    if err.is_timeout() {
        GenerationError::Timeout
    } else {
        GenerationError::Http(err)
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessageResponse,
}

#[derive(Debug, Deserialize)]
struct ChatMessageResponse {
    content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_body_has_a_single_user_message() {
        let payload = ChatRequest {
            model: "openai/gpt-oss-20b:free",
            messages: vec![ChatMessage {
                role: "user",
                content: "Explain gravity",
            }],
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["model"], "openai/gpt-oss-20b:free");
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["messages"][0]["content"], "Explain gravity");
        assert_eq!(json["messages"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn response_content_is_read_from_the_first_choice() {
        let raw = r#"{"choices":[{"message":{"role":"assistant","content":"  Hello  "}}]}"#;
        let body: ChatResponse = serde_json::from_str(raw).unwrap();
        let content = body.choices.into_iter().next().unwrap().message.content;
        assert_eq!(content.as_deref(), Some("  Hello  "));
    }

    #[test]
    fn failure_text_carries_the_marker() {
        let text = failure_text(&GenerationError::Timeout);
        assert!(is_failure(&text));
        assert_eq!(text, "❌ Error contacting API: request timed out");
        assert!(!is_failure("Newton's first law says..."));
    }

    #[tokio::test]
    async fn unreachable_endpoint_becomes_failure_text() {
        let config = GenerationConfig::new("sk-test")
            .unwrap()
            .with_base_url("http://127.0.0.1:9")
            .unwrap();
        let client = GenerationClient::new(config).unwrap();

        let text = client.generate("hello").await;
        assert!(is_failure(&text), "got {text:?}");
    }
}
