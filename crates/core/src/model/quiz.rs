//! Turning generated question and answer listings into quiz items.

/// Upper bound on the number of questions in one quiz.
pub const MAX_QUIZ_QUESTIONS: usize = 10;

/// Answer text the generator uses when a question cannot be answered from the lesson.
pub const INSUFFICIENT_ANSWER: &str = "insufficient";

const SEPARATORS: [char; 4] = [')', '.', ':', '-'];

/// A quiz question with its reference answer.
///
/// The answer is only ever used for grading context and hints; it is never
/// displayed to the learner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionAnswer {
    question: String,
    answer: String,
}

impl QuestionAnswer {
    #[must_use]
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }

    #[must_use]
    pub fn question(&self) -> &str {
        &self.question
    }

    #[must_use]
    pub fn answer(&self) -> &str {
        &self.answer
    }
}

/// Removes list numbering such as `3)`, `4.`, `10:`, `7 -`, a bare `12 ` or a `-`
/// bullet from the start of a line.
///
/// Decimal and signed numbers (`9.8 m/s^2`, `-5 degrees`) are not item labels and
/// stay. A label is never stripped when nothing would remain. Stripping repeats until
/// nothing more matches, which makes the function idempotent.
#[must_use]
pub fn strip_numbering(line: &str) -> &str {
    let mut current = line.trim();
    while let Some(rest) = strip_once(current) {
        current = rest;
    }
    current
}

fn strip_once(line: &str) -> Option<&str> {
    let digits_end = line
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(line.len());
    let (digits, rest) = line.split_at(digits_end);
    let numbered = !digits.is_empty();
    let after_digits = if numbered { rest.trim_start() } else { rest };

    let body = strip_separator(numbered, after_digits).or_else(|| {
        // "12 What is X"
        (numbered && after_digits.len() < rest.len()).then_some(after_digits)
    })?;
    (!body.is_empty()).then_some(body)
}

fn strip_separator(numbered: bool, text: &str) -> Option<&str> {
    let separator = text.chars().next().filter(|c| SEPARATORS.contains(c))?;
    let after = &text[separator.len_utf8()..];
    let body = after.trim_start();
    let spaced = body.len() < after.len();
    // "1.5" and "-5" are numbers, not item labels.
    (spaced || (numbered && !body.starts_with(|c: char| c.is_ascii_digit()))).then_some(body)
}

fn listing_lines(raw: &str) -> impl Iterator<Item = &str> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(strip_numbering)
}

fn is_insufficient(answer: &str) -> bool {
    answer.trim().to_lowercase() == INSUFFICIENT_ANSWER
}

/// Pairs generated questions with generated answers line by line.
///
/// Blank lines are skipped and numbering is stripped on both sides. Pairing stops at
/// the shorter listing, pairs whose answer is `insufficient` are dropped, and at
/// most [`MAX_QUIZ_QUESTIONS`] pairs are kept. Short output yields a short quiz.
#[must_use]
pub fn parse_quiz(raw_questions: &str, raw_answers: &str) -> Vec<QuestionAnswer> {
    listing_lines(raw_questions)
        .zip(listing_lines(raw_answers))
        .filter(|(_, answer)| !is_insufficient(answer))
        .take(MAX_QUIZ_QUESTIONS)
        .map(|(question, answer)| QuestionAnswer::new(question, answer))
        .collect()
}
