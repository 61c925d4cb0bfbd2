/// Token a grading reply must open with to count as a correct answer.
pub const CORRECT_VERDICT: &str = "correct";

const VERDICT_TOKENS: [&str; 2] = [CORRECT_VERDICT, "incorrect"];
const VERDICT_PUNCTUATION: [char; 6] = [':', '!', '.', ',', '-', ';'];

/// Classifies a grading reply.
///
/// Takes the first non-empty line, trims and lower-cases it, and checks whether it
/// starts with `correct`. This is a prefix match: `"Correctly identified..."` also
/// counts as correct, while `"INCORRECT"` does not. All verdict parsing goes through
/// this function.
#[must_use]
pub fn verdict_is_correct(reply: &str) -> bool {
    reply
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .is_some_and(|line| line.to_lowercase().starts_with(CORRECT_VERDICT))
}

/// Result of grading one submitted answer, shown until the learner moves on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    is_correct: bool,
    text: String,
}

impl Feedback {
    #[must_use]
    pub fn new(is_correct: bool, text: impl Into<String>) -> Self {
        Self {
            is_correct,
            text: text.into(),
        }
    }

    /// Builds feedback from a raw grading reply, keeping the full reply as text.
    #[must_use]
    pub fn from_reply(reply: impl Into<String>) -> Self {
        let text = reply.into();
        Self {
            is_correct: verdict_is_correct(&text),
            text,
        }
    }

    #[must_use]
    pub fn is_correct(&self) -> bool {
        self.is_correct
    }

    /// The full reply, verdict line included.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The reply without its leading `CORRECT`/`INCORRECT` token; this is what the
    /// learner reads. Text sharing the verdict line is kept, so `"CORRECT good job"`
    /// reads `"good job"`. A reply that opens with no verdict token is shown whole.
    #[must_use]
    pub fn body(&self) -> &str {
        let trimmed = self.text.trim();
        let token_end = trimmed
            .find(|c: char| !c.is_alphabetic())
            .unwrap_or(trimmed.len());
        let (token, rest) = trimmed.split_at(token_end);
        if VERDICT_TOKENS
            .iter()
            .any(|verdict| token.eq_ignore_ascii_case(verdict))
        {
            rest.trim_start_matches(|c: char| c.is_whitespace() || VERDICT_PUNCTUATION.contains(&c))
        } else {
            trimmed
        }
    }
}
