use chrono::{DateTime, Utc};
use std::fmt;
use thiserror::Error;

use crate::model::feedback::Feedback;
use crate::model::grade::DifficultyGrade;
use crate::model::hints::{HintBudget, MAX_HINTS_PER_QUESTION};
use crate::model::ids::SessionId;
use crate::model::quiz::{MAX_QUIZ_QUESTIONS, QuestionAnswer};
use crate::model::subject::Subject;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

/// Rejected session transitions. A rejected call never mutates the session.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("expected the {expected} page, but the session is on {actual}")]
    WrongPage { expected: Page, actual: Page },

    #[error("concept cannot be empty")]
    EmptyConcept,

    #[error("answer cannot be empty")]
    BlankAnswer,

    #[error("feedback for the current question is still showing")]
    FeedbackPending,

    #[error("no feedback is showing")]
    NoFeedbackPending,

    #[error("quiz already completed")]
    Completed,

    #[error("quiz is not completed yet")]
    NotCompleted,

    #[error("no more hints allowed for question {question}")]
    HintLimitReached { question: usize },
}

//
// ─── PAGES & SIGNATURES ───────────────────────────────────────────────────────
//

/// Screen the session is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Page {
    #[default]
    Home,
    Tutorial,
    Quiz,
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Page::Home => "home",
            Page::Tutorial => "tutorial",
            Page::Quiz => "quiz",
        })
    }
}

/// The inputs a lesson was generated from. A lesson is stale when the session's
/// current signature differs from the one recorded with the lesson.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LessonSignature {
    subject: Subject,
    concept: String,
    grade: DifficultyGrade,
}

impl LessonSignature {
    #[must_use]
    pub fn new(subject: Subject, concept: impl Into<String>, grade: DifficultyGrade) -> Self {
        Self {
            subject,
            concept: concept.into(),
            grade,
        }
    }

    #[must_use]
    pub fn subject(&self) -> Subject {
        self.subject
    }

    #[must_use]
    pub fn concept(&self) -> &str {
        &self.concept
    }

    #[must_use]
    pub fn grade(&self) -> DifficultyGrade {
        self.grade
    }
}

/// Which prompt the next lesson generation should use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LessonRequest {
    /// A new tutorial for the signature.
    Fresh(LessonSignature),
    /// A simpler re-explanation of the lesson currently shown.
    Simplify {
        signature: LessonSignature,
        previous: String,
    },
}

impl LessonRequest {
    #[must_use]
    pub fn signature(&self) -> &LessonSignature {
        match self {
            LessonRequest::Fresh(signature) | LessonRequest::Simplify { signature, .. } => {
                signature
            }
        }
    }
}

//
// ─── SESSION ──────────────────────────────────────────────────────────────────
//

/// One learner's run through home, tutorial and quiz.
///
/// All transitions are synchronous and side-effect free; generation calls are made
/// by the services layer, which feeds results back through `store_lesson`,
/// `begin_quiz`, `record_feedback` and `record_hint`.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    id: SessionId,
    page: Page,
    subject: Option<Subject>,
    concept: String,
    grade: DifficultyGrade,
    lesson: String,
    lesson_signature: Option<LessonSignature>,
    rewrite_requested: bool,
    quiz: Vec<QuestionAnswer>,
    current_question: usize,
    score: usize,
    hints: HintBudget,
    pending_feedback: Option<Feedback>,
    started_at: DateTime<Utc>,
    quiz_started_at: Option<DateTime<Utc>>,
}

impl Session {
    #[must_use]
    pub fn new(id: SessionId, started_at: DateTime<Utc>) -> Self {
        Self {
            id,
            page: Page::Home,
            subject: None,
            concept: String::new(),
            grade: DifficultyGrade::default(),
            lesson: String::new(),
            lesson_signature: None,
            rewrite_requested: false,
            quiz: Vec::new(),
            current_question: 0,
            score: 0,
            hints: HintBudget::new(),
            pending_feedback: None,
            started_at,
            quiz_started_at: None,
        }
    }

    // ── accessors ────────────────────────────────────────────────────────────

    #[must_use]
    pub fn id(&self) -> SessionId {
        self.id
    }

    #[must_use]
    pub fn page(&self) -> Page {
        self.page
    }

    #[must_use]
    pub fn subject(&self) -> Option<Subject> {
        self.subject
    }

    #[must_use]
    pub fn concept(&self) -> &str {
        &self.concept
    }

    #[must_use]
    pub fn grade(&self) -> DifficultyGrade {
        self.grade
    }

    #[must_use]
    pub fn lesson(&self) -> &str {
        &self.lesson
    }

    /// Signature recorded with the current lesson, `None` once invalidated.
    #[must_use]
    pub fn lesson_signature(&self) -> Option<&LessonSignature> {
        self.lesson_signature.as_ref()
    }

    #[must_use]
    pub fn quiz(&self) -> &[QuestionAnswer] {
        &self.quiz
    }

    #[must_use]
    pub fn current_question_index(&self) -> usize {
        self.current_question
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&QuestionAnswer> {
        self.quiz.get(self.current_question)
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.score
    }

    #[must_use]
    pub fn hints(&self) -> &HintBudget {
        &self.hints
    }

    #[must_use]
    pub fn pending_feedback(&self) -> Option<&Feedback> {
        self.pending_feedback.as_ref()
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn quiz_started_at(&self) -> Option<DateTime<Utc>> {
        self.quiz_started_at
    }

    /// True once every question has been answered. Derived, never stored.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.current_question == self.quiz.len()
    }

    /// Signature built from the session's current subject, concept and grade.
    #[must_use]
    pub fn current_signature(&self) -> Option<LessonSignature> {
        self.subject
            .map(|subject| LessonSignature::new(subject, self.concept.clone(), self.grade))
    }

    /// Whether the tutorial page needs a (re)generated lesson.
    #[must_use]
    pub fn needs_lesson(&self) -> bool {
        self.page == Page::Tutorial && self.lesson_signature != self.current_signature()
    }

    /// The lesson generation the tutorial page is waiting for, if any.
    #[must_use]
    pub fn lesson_request(&self) -> Option<LessonRequest> {
        if !self.needs_lesson() {
            return None;
        }
        let signature = self.current_signature()?;
        if self.rewrite_requested && !self.lesson.is_empty() {
            Some(LessonRequest::Simplify {
                signature,
                previous: self.lesson.clone(),
            })
        } else {
            Some(LessonRequest::Fresh(signature))
        }
    }

    // ── home → tutorial ──────────────────────────────────────────────────────

    /// Leaves the home page for the tutorial on the chosen topic.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::WrongPage` outside the home page and
    /// `SessionError::EmptyConcept` for a blank concept.
    pub fn start_tutorial(
        &mut self,
        subject: Subject,
        concept: &str,
        grade: DifficultyGrade,
    ) -> Result<(), SessionError> {
        self.expect_page(Page::Home)?;
        let concept = concept.trim();
        if concept.is_empty() {
            return Err(SessionError::EmptyConcept);
        }

        self.subject = Some(subject);
        self.concept = concept.to_string();
        self.grade = grade;
        self.lesson.clear();
        self.lesson_signature = None;
        self.rewrite_requested = false;
        self.clear_quiz();
        self.page = Page::Tutorial;
        Ok(())
    }

    // ── tutorial ─────────────────────────────────────────────────────────────

    /// Lowers the grade by one (clamped). Returns whether the grade changed.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::WrongPage` outside the tutorial page.
    pub fn make_easier(&mut self) -> Result<bool, SessionError> {
        self.expect_page(Page::Tutorial)?;
        Ok(self.set_grade(self.grade.easier()))
    }

    /// Raises the grade by one (clamped). Returns whether the grade changed.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::WrongPage` outside the tutorial page.
    pub fn make_harder(&mut self) -> Result<bool, SessionError> {
        self.expect_page(Page::Tutorial)?;
        Ok(self.set_grade(self.grade.harder()))
    }

    fn set_grade(&mut self, grade: DifficultyGrade) -> bool {
        let changed = grade != self.grade;
        if changed {
            // the old lesson no longer fits the new grade
            self.rewrite_requested = false;
        }
        self.grade = grade;
        changed
    }

    /// Drops the recorded signature so the next staleness check regenerates the
    /// lesson, asking for a simpler explanation.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::WrongPage` outside the tutorial page.
    pub fn request_better_tutorial(&mut self) -> Result<(), SessionError> {
        self.expect_page(Page::Tutorial)?;
        self.lesson_signature = None;
        self.rewrite_requested = true;
        Ok(())
    }

    /// Stores a generated lesson for `signature` and invalidates any existing quiz.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::WrongPage` outside the tutorial page.
    pub fn store_lesson(
        &mut self,
        signature: LessonSignature,
        lesson: impl Into<String>,
    ) -> Result<(), SessionError> {
        self.expect_page(Page::Tutorial)?;
        self.lesson = lesson.into();
        self.lesson_signature = Some(signature);
        self.rewrite_requested = false;
        self.clear_quiz();
        Ok(())
    }

    /// Enters the quiz with freshly parsed questions. An empty quiz is allowed.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::WrongPage` outside the tutorial page.
    pub fn begin_quiz(
        &mut self,
        mut quiz: Vec<QuestionAnswer>,
        now: DateTime<Utc>,
    ) -> Result<(), SessionError> {
        self.expect_page(Page::Tutorial)?;
        quiz.truncate(MAX_QUIZ_QUESTIONS);
        self.clear_quiz();
        self.quiz = quiz;
        self.quiz_started_at = Some(now);
        self.page = Page::Quiz;
        Ok(())
    }

    fn clear_quiz(&mut self) {
        self.quiz.clear();
        self.current_question = 0;
        self.score = 0;
        self.hints.clear();
        self.pending_feedback = None;
        self.quiz_started_at = None;
    }

    // ── quiz ─────────────────────────────────────────────────────────────────

    fn expect_open_question(&self) -> Result<&QuestionAnswer, SessionError> {
        self.expect_page(Page::Quiz)?;
        if self.pending_feedback.is_some() {
            return Err(SessionError::FeedbackPending);
        }
        self.current_question().ok_or(SessionError::Completed)
    }

    /// Checks that `answer` may be graded against the current question.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::BlankAnswer` for a whitespace-only answer, or a guard
    /// error when the quiz is not waiting for an answer.
    pub fn check_submission(&self, answer: &str) -> Result<&QuestionAnswer, SessionError> {
        let question = self.expect_open_question()?;
        if answer.trim().is_empty() {
            return Err(SessionError::BlankAnswer);
        }
        Ok(question)
    }

    /// Shows grading feedback for the current question, scoring it if correct.
    ///
    /// # Errors
    ///
    /// Returns a guard error when the quiz is not waiting for an answer.
    pub fn record_feedback(&mut self, feedback: Feedback) -> Result<(), SessionError> {
        self.expect_open_question()?;
        if feedback.is_correct() {
            self.score += 1;
        }
        self.pending_feedback = Some(feedback);
        Ok(())
    }

    /// Checks that a hint may be generated for the current question.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::HintLimitReached` once three hints were used, or a
    /// guard error when the quiz is not waiting for an answer.
    pub fn check_hint(&self) -> Result<&QuestionAnswer, SessionError> {
        let question = self.expect_open_question()?;
        if !self.hints.can_request(self.current_question) {
            return Err(SessionError::HintLimitReached {
                question: self.current_question,
            });
        }
        Ok(question)
    }

    /// Counts a served hint against the current question; returns the hint number.
    ///
    /// # Errors
    ///
    /// Same as [`Session::check_hint`].
    pub fn record_hint(&mut self) -> Result<u8, SessionError> {
        self.check_hint()?;
        let question = self.current_question;
        self.hints
            .record(question)
            .ok_or(SessionError::HintLimitReached { question })
    }

    #[must_use]
    pub fn hints_remaining(&self) -> u8 {
        if self.current_question < self.quiz.len() {
            self.hints.remaining(self.current_question)
        } else {
            MAX_HINTS_PER_QUESTION
        }
    }

    /// Dismisses the feedback and moves to the next question.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NoFeedbackPending` unless feedback is showing.
    pub fn next_question(&mut self) -> Result<(), SessionError> {
        self.expect_page(Page::Quiz)?;
        if self.pending_feedback.take().is_none() {
            return Err(SessionError::NoFeedbackPending);
        }
        self.current_question += 1;
        Ok(())
    }

    /// Returns to the home page with a clean slate once the quiz is complete.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotCompleted` while questions remain.
    pub fn restart(&mut self, now: DateTime<Utc>) -> Result<(), SessionError> {
        self.expect_page(Page::Quiz)?;
        if !self.is_complete() {
            return Err(SessionError::NotCompleted);
        }
        *self = Self::new(self.id, now);
        Ok(())
    }

    /// Guard used before any page-specific event.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::WrongPage` when the session is elsewhere.
    pub fn expect_page(&self, expected: Page) -> Result<(), SessionError> {
        if self.page == expected {
            Ok(())
        } else {
            Err(SessionError::WrongPage {
                expected,
                actual: self.page,
            })
        }
    }
}

//
// ─── TESTS ────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::fixed_now;

    fn grade(value: u8) -> DifficultyGrade {
        DifficultyGrade::new(value).unwrap()
    }

    fn tutorial_session() -> Session {
        let mut session = Session::new(SessionId::new(), fixed_now());
        session
            .start_tutorial(Subject::Physics, "Newton's Laws", grade(6))
            .unwrap();
        session
    }

    fn lesson_for(session: &mut Session, text: &str) {
        let request = session.lesson_request().unwrap();
        session
            .store_lesson(request.signature().clone(), text)
            .unwrap();
    }

    fn quiz_session(pairs: &[(&str, &str)]) -> Session {
        let mut session = tutorial_session();
        lesson_for(&mut session, "lesson");
        let quiz = pairs
            .iter()
            .map(|(q, a)| QuestionAnswer::new(*q, *a))
            .collect();
        session.begin_quiz(quiz, fixed_now()).unwrap();
        session
    }

    #[test]
    fn start_tutorial_records_topic_for_every_grade() {
        for g in 1..=12 {
            let mut session = Session::new(SessionId::new(), fixed_now());
            session
                .start_tutorial(Subject::Biology, "Cells", grade(g))
                .unwrap();
            assert_eq!(session.page(), Page::Tutorial);
            assert_eq!(session.grade().value(), g);
            assert_eq!(session.subject(), Some(Subject::Biology));
            assert_eq!(session.concept(), "Cells");
        }
    }

    #[test]
    fn blank_concept_stays_home() {
        let mut session = Session::new(SessionId::new(), fixed_now());
        let err = session
            .start_tutorial(Subject::Physics, "   ", grade(3))
            .unwrap_err();
        assert_eq!(err, SessionError::EmptyConcept);
        assert_eq!(session.page(), Page::Home);
    }

    #[test]
    fn new_tutorial_needs_a_fresh_lesson() {
        let session = tutorial_session();
        assert!(session.needs_lesson());
        assert!(matches!(
            session.lesson_request(),
            Some(LessonRequest::Fresh(_))
        ));
    }

    #[test]
    fn stored_lesson_is_current_until_grade_changes() {
        let mut session = tutorial_session();
        lesson_for(&mut session, "Forces and motion");
        assert!(!session.needs_lesson());

        assert!(session.make_harder().unwrap());
        assert_eq!(session.grade().value(), 7);
        assert!(session.needs_lesson());

        lesson_for(&mut session, "Harder lesson");
        assert!(!session.needs_lesson());
        assert_eq!(session.lesson_signature().unwrap().grade().value(), 7);
    }

    #[test]
    fn going_back_to_the_recorded_grade_is_not_stale() {
        let mut session = tutorial_session();
        lesson_for(&mut session, "Forces");
        session.make_harder().unwrap();
        session.make_easier().unwrap();
        assert!(!session.needs_lesson());
    }

    #[test]
    fn easier_is_a_no_op_at_grade_one() {
        let mut session = Session::new(SessionId::new(), fixed_now());
        session
            .start_tutorial(Subject::Mathematics, "Counting", grade(1))
            .unwrap();
        lesson_for(&mut session, "1, 2, 3");

        assert!(!session.make_easier().unwrap());
        assert!(!session.make_easier().unwrap());
        assert_eq!(session.grade().value(), 1);
        assert!(!session.needs_lesson());
    }

    #[test]
    fn better_tutorial_forces_a_simplify_request() {
        let mut session = tutorial_session();
        lesson_for(&mut session, "Dense lesson");
        session.request_better_tutorial().unwrap();

        assert!(session.needs_lesson());
        match session.lesson_request() {
            Some(LessonRequest::Simplify { previous, .. }) => assert_eq!(previous, "Dense lesson"),
            other => panic!("unexpected request: {other:?}"),
        }

        lesson_for(&mut session, "Simple lesson");
        assert!(!session.needs_lesson());
        assert!(session.lesson_request().is_none());
    }

    #[test]
    fn grade_change_cancels_a_pending_simplify() {
        let mut session = tutorial_session();
        lesson_for(&mut session, "Grade 6 lesson");
        session.request_better_tutorial().unwrap();
        session.make_harder().unwrap();

        assert_eq!(
            session.lesson_request(),
            Some(LessonRequest::Fresh(LessonSignature::new(
                Subject::Physics,
                "Newton's Laws",
                grade(7),
            )))
        );
    }

    #[test]
    fn unchanged_grade_keeps_a_pending_simplify() {
        let mut session = Session::new(SessionId::new(), fixed_now());
        session
            .start_tutorial(Subject::Physics, "Waves", grade(12))
            .unwrap();
        lesson_for(&mut session, "Hard lesson");
        session.request_better_tutorial().unwrap();
        assert!(!session.make_harder().unwrap());

        assert!(matches!(
            session.lesson_request(),
            Some(LessonRequest::Simplify { .. })
        ));
    }

    #[test]
    fn regenerating_the_lesson_drops_the_quiz() {
        let mut session = quiz_session(&[("Q", "A")]);
        assert_eq!(session.quiz().len(), 1);

        // the quiz page has no difficulty controls; put the session back on the tutorial
        session.page = Page::Tutorial;
        session.make_harder().unwrap();
        lesson_for(&mut session, "new lesson");
        assert!(session.quiz().is_empty());
    }

    #[test]
    fn difficulty_controls_are_tutorial_only() {
        let mut session = Session::new(SessionId::new(), fixed_now());
        assert_eq!(
            session.make_harder(),
            Err(SessionError::WrongPage {
                expected: Page::Tutorial,
                actual: Page::Home
            })
        );
        assert_eq!(session.grade().value(), 1);
    }

    #[test]
    fn begin_quiz_resets_progress() {
        let session = quiz_session(&[("What is 2+2?", "4"), ("What is 3+3?", "6")]);
        assert_eq!(session.page(), Page::Quiz);
        assert_eq!(session.current_question_index(), 0);
        assert_eq!(session.score(), 0);
        assert!(session.pending_feedback().is_none());
        assert_eq!(session.quiz_started_at(), Some(fixed_now()));
    }

    #[test]
    fn empty_quiz_is_enterable_and_already_complete() {
        let mut session = quiz_session(&[]);
        assert_eq!(session.page(), Page::Quiz);
        assert!(session.is_complete());
        assert_eq!(
            session.check_submission("anything").unwrap_err(),
            SessionError::Completed
        );
        session.restart(fixed_now()).unwrap();
        assert_eq!(session.page(), Page::Home);
    }

    #[test]
    fn blank_submission_is_rejected_without_changes() {
        let session = quiz_session(&[("Q", "A")]);
        let before = session.clone();
        assert_eq!(
            session.check_submission("  \t ").unwrap_err(),
            SessionError::BlankAnswer
        );
        assert_eq!(session, before);
    }

    #[test]
    fn feedback_pauses_until_next_question() {
        let mut session = quiz_session(&[("What is 2+2?", "4")]);
        session.check_submission("4").unwrap();
        session
            .record_feedback(Feedback::from_reply("CORRECT good job"))
            .unwrap();

        assert_eq!(session.score(), 1);
        assert_eq!(
            session.pending_feedback(),
            Some(&Feedback::new(true, "CORRECT good job"))
        );
        assert_eq!(session.current_question_index(), 0);
        assert_eq!(
            session.check_submission("4").unwrap_err(),
            SessionError::FeedbackPending
        );
        assert_eq!(session.check_hint().unwrap_err(), SessionError::FeedbackPending);

        session.next_question().unwrap();
        assert!(session.pending_feedback().is_none());
        assert_eq!(session.current_question_index(), 1);
        assert!(session.is_complete());
    }

    #[test]
    fn next_question_requires_feedback() {
        let mut session = quiz_session(&[("Q", "A")]);
        assert_eq!(
            session.next_question().unwrap_err(),
            SessionError::NoFeedbackPending
        );
        assert_eq!(session.current_question_index(), 0);
    }

    #[test]
    fn incorrect_feedback_does_not_score() {
        let mut session = quiz_session(&[("Q", "A")]);
        session
            .record_feedback(Feedback::from_reply("INCORRECT\nThink about forces."))
            .unwrap();
        assert_eq!(session.score(), 0);
        assert!(!session.pending_feedback().unwrap().is_correct());
    }

    #[test]
    fn all_correct_answers_reach_full_score() {
        let pairs: Vec<(String, String)> = (0..4)
            .map(|i| (format!("Q{i}"), format!("A{i}")))
            .collect();
        let refs: Vec<(&str, &str)> = pairs.iter().map(|(q, a)| (q.as_str(), a.as_str())).collect();
        let mut session = quiz_session(&refs);

        for _ in 0..4 {
            session.check_submission("answer").unwrap();
            session
                .record_feedback(Feedback::from_reply("Correct"))
                .unwrap();
            session.next_question().unwrap();
        }
        assert_eq!(session.score(), 4);
        assert!(session.is_complete());
        assert_eq!(session.current_question_index(), 4);
    }

    #[test]
    fn hints_stop_after_three() {
        let mut session = quiz_session(&[("Q", "A"), ("Q2", "A2")]);
        assert_eq!(session.record_hint(), Ok(1));
        assert_eq!(session.record_hint(), Ok(2));
        assert_eq!(session.record_hint(), Ok(3));
        assert_eq!(
            session.check_hint().unwrap_err(),
            SessionError::HintLimitReached { question: 0 }
        );
        assert_eq!(
            session.record_hint(),
            Err(SessionError::HintLimitReached { question: 0 })
        );
        assert_eq!(session.hints().used(0), 3);
        assert_eq!(session.hints_remaining(), 0);

        session
            .record_feedback(Feedback::from_reply("incorrect"))
            .unwrap();
        session.next_question().unwrap();
        assert_eq!(session.hints_remaining(), 3);
        assert_eq!(session.record_hint(), Ok(1));
    }

    #[test]
    fn restart_requires_completion_and_keeps_id() {
        let mut session = quiz_session(&[("Q", "A")]);
        let id = session.id();
        assert_eq!(
            session.restart(fixed_now()).unwrap_err(),
            SessionError::NotCompleted
        );

        session
            .record_feedback(Feedback::from_reply("correct"))
            .unwrap();
        session.next_question().unwrap();
        session.restart(fixed_now()).unwrap();

        assert_eq!(session.id(), id);
        assert_eq!(session.page(), Page::Home);
        assert!(session.lesson().is_empty());
        assert!(session.quiz().is_empty());
        assert_eq!(session.score(), 0);
    }
}
