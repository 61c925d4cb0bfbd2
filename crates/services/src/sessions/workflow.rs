use std::sync::Arc;

use storage::repository::SessionRepository;
use tracing::{info, warn};
use tutor_core::Clock;
use tutor_core::model::{
    DifficultyGrade, Feedback, Page, Session, SessionError, SessionId, Subject,
};

use crate::ai::TextGenerator;
use crate::error::SessionServiceError;
use crate::grading_service::GradingService;
use crate::hint_service::HintService;
use crate::lesson_service::LessonService;
use super::progress::QuizProgress;
use super::view::SessionScreen;

/// Outcome of the tutorial staleness check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LessonSync {
    /// The stored lesson matches the current signature; nothing was generated.
    Current,
    /// A new lesson was generated and stored.
    Regenerated,
}

/// Result of submitting an answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Graded(Feedback),
    /// Blank answer: warning only, the session is unchanged.
    BlankAnswer,
}

/// Result of asking for a hint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HintOutcome {
    Hint { number: u8, remaining: u8, text: String },
    /// Budget spent: warning only, nothing generated, counter unchanged.
    LimitReached,
}

/// Drives sessions through their pages, making the generation calls each
/// transition needs and persisting the result.
///
/// Every operation loads the session, applies one event to completion and saves it
/// back. Rejected transitions leave the stored session untouched.
#[derive(Clone)]
pub struct SessionLoopService {
    clock: Clock,
    sessions: Arc<dyn SessionRepository>,
    lessons: LessonService,
    grading: GradingService,
    hints: HintService,
}

impl SessionLoopService {
    #[must_use]
    pub fn new(
        clock: Clock,
        generator: Arc<dyn TextGenerator>,
        sessions: Arc<dyn SessionRepository>,
    ) -> Self {
        Self {
            clock,
            sessions,
            lessons: LessonService::new(Arc::clone(&generator)),
            grading: GradingService::new(Arc::clone(&generator)),
            hints: HintService::new(generator),
        }
    }

    /// Create a session on the home page.
    ///
    /// # Errors
    ///
    /// Returns `SessionServiceError::Storage` if the session cannot be stored.
    pub async fn create_session(&self) -> Result<SessionId, SessionServiceError> {
        let session = Session::new(SessionId::new(), self.clock.now());
        self.sessions.save_session(&session).await?;
        info!(session = %session.id(), "session created");
        Ok(session.id())
    }

    /// Snapshot of the stored session.
    ///
    /// # Errors
    ///
    /// Returns `SessionServiceError::Storage` if the session is unknown.
    pub async fn session(&self, id: SessionId) -> Result<Session, SessionServiceError> {
        Ok(self.sessions.get_session(id).await?)
    }

    /// Discard a session entirely.
    ///
    /// # Errors
    ///
    /// Returns `SessionServiceError::Storage` on store failures.
    pub async fn end_session(&self, id: SessionId) -> Result<(), SessionServiceError> {
        Ok(self.sessions.delete_session(id).await?)
    }

    /// Home → Tutorial, then generate the first lesson.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::EmptyConcept` or a page guard error; storage errors
    /// otherwise.
    pub async fn start_tutorial(
        &self,
        id: SessionId,
        subject: Subject,
        concept: &str,
        grade: DifficultyGrade,
    ) -> Result<LessonSync, SessionServiceError> {
        let mut session = self.sessions.get_session(id).await?;
        session.start_tutorial(subject, concept, grade)?;
        info!(session = %id, %subject, concept = session.concept(), grade = grade.value(), "tutorial started");
        let sync = self.sync_loaded(&mut session).await?;
        self.sessions.save_session(&session).await?;
        Ok(sync)
    }

    /// Regenerate the lesson if, and only if, its signature is out of date.
    ///
    /// Calling this repeatedly without changing the topic or grade makes at most one
    /// generation call. Outside the tutorial page this is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `SessionServiceError::Storage` on store failures.
    pub async fn sync_lesson(&self, id: SessionId) -> Result<LessonSync, SessionServiceError> {
        let mut session = self.sessions.get_session(id).await?;
        let sync = self.sync_loaded(&mut session).await?;
        if sync == LessonSync::Regenerated {
            self.sessions.save_session(&session).await?;
        }
        Ok(sync)
    }

    async fn sync_loaded(&self, session: &mut Session) -> Result<LessonSync, SessionServiceError> {
        let Some(request) = session.lesson_request() else {
            return Ok(LessonSync::Current);
        };
        let lesson = self.lessons.generate_lesson(&request).await;
        session.store_lesson(request.signature().clone(), lesson)?;
        Ok(LessonSync::Regenerated)
    }

    /// Lower the difficulty; the lesson is regenerated on the next sync.
    ///
    /// # Errors
    ///
    /// Returns a page guard error outside the tutorial page.
    pub async fn make_easier(&self, id: SessionId) -> Result<DifficultyGrade, SessionServiceError> {
        self.adjust_grade(id, Session::make_easier).await
    }

    /// Raise the difficulty; the lesson is regenerated on the next sync.
    ///
    /// # Errors
    ///
    /// Returns a page guard error outside the tutorial page.
    pub async fn make_harder(&self, id: SessionId) -> Result<DifficultyGrade, SessionServiceError> {
        self.adjust_grade(id, Session::make_harder).await
    }

    async fn adjust_grade(
        &self,
        id: SessionId,
        adjust: fn(&mut Session) -> Result<bool, SessionError>,
    ) -> Result<DifficultyGrade, SessionServiceError> {
        let mut session = self.sessions.get_session(id).await?;
        if adjust(&mut session)? {
            self.sessions.save_session(&session).await?;
            info!(session = %id, grade = session.grade().value(), "difficulty changed");
        }
        Ok(session.grade())
    }

    /// Ask for a simpler re-explanation; generated on the next sync.
    ///
    /// # Errors
    ///
    /// Returns a page guard error outside the tutorial page.
    pub async fn request_better_tutorial(&self, id: SessionId) -> Result<(), SessionServiceError> {
        let mut session = self.sessions.get_session(id).await?;
        session.request_better_tutorial()?;
        self.sessions.save_session(&session).await?;
        Ok(())
    }

    /// Tutorial → Quiz: generate questions, then answers, and start the quiz.
    ///
    /// An unusable generation yields an empty quiz rather than an error.
    ///
    /// # Errors
    ///
    /// Returns a page guard error outside the tutorial page.
    pub async fn start_quiz(&self, id: SessionId) -> Result<QuizProgress, SessionServiceError> {
        let mut session = self.sessions.get_session(id).await?;
        session.expect_page(Page::Tutorial)?;
        self.sync_loaded(&mut session).await?;

        let quiz = self.lessons.generate_quiz(session.lesson()).await;
        if quiz.is_empty() {
            warn!(session = %id, "no usable quiz questions were generated");
        }
        session.begin_quiz(quiz, self.clock.now())?;
        self.sessions.save_session(&session).await?;
        info!(session = %id, questions = session.quiz().len(), "quiz started");
        Ok(QuizProgress::of(&session))
    }

    /// Grade an answer to the current question and pause on the feedback.
    ///
    /// # Errors
    ///
    /// Returns a guard error when the quiz is not waiting for an answer.
    pub async fn submit_answer(
        &self,
        id: SessionId,
        answer: &str,
    ) -> Result<SubmitOutcome, SessionServiceError> {
        let mut session = self.sessions.get_session(id).await?;
        let question = match session.check_submission(answer) {
            Ok(question) => question.question().to_string(),
            Err(SessionError::BlankAnswer) => {
                warn!(session = %id, "blank answer submitted");
                return Ok(SubmitOutcome::BlankAnswer);
            }
            Err(err) => return Err(err.into()),
        };

        let feedback = self
            .grading
            .evaluate(&question, answer.trim(), session.lesson())
            .await;
        session.record_feedback(feedback.clone())?;
        self.sessions.save_session(&session).await?;
        Ok(SubmitOutcome::Graded(feedback))
    }

    /// Generate a hint for the current question if its budget allows.
    ///
    /// # Errors
    ///
    /// Returns a guard error when the quiz is not waiting for an answer.
    pub async fn request_hint(&self, id: SessionId) -> Result<HintOutcome, SessionServiceError> {
        let mut session = self.sessions.get_session(id).await?;
        let (question, reference) = match session.check_hint() {
            Ok(pair) => (pair.question().to_string(), pair.answer().to_string()),
            Err(SessionError::HintLimitReached { question }) => {
                warn!(session = %id, question, "hint limit reached");
                return Ok(HintOutcome::LimitReached);
            }
            Err(err) => return Err(err.into()),
        };

        let text = self
            .hints
            .generate_hint(&question, &reference, session.lesson())
            .await;
        let number = session.record_hint()?;
        self.sessions.save_session(&session).await?;
        Ok(HintOutcome::Hint {
            number,
            remaining: session.hints_remaining(),
            text,
        })
    }

    /// Dismiss the feedback and move to the next question.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NoFeedbackPending` unless feedback is showing.
    pub async fn next_question(&self, id: SessionId) -> Result<QuizProgress, SessionServiceError> {
        let mut session = self.sessions.get_session(id).await?;
        session.next_question()?;
        self.sessions.save_session(&session).await?;
        Ok(QuizProgress::of(&session))
    }

    /// Quiz → Home once every question has been answered.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotCompleted` while questions remain.
    pub async fn restart(&self, id: SessionId) -> Result<(), SessionServiceError> {
        let mut session = self.sessions.get_session(id).await?;
        session.restart(self.clock.now())?;
        self.sessions.save_session(&session).await?;
        info!(session = %id, "session restarted");
        Ok(())
    }

    /// Run the staleness check, then describe what the current page shows.
    ///
    /// # Errors
    ///
    /// Returns `SessionServiceError::Storage` on store failures.
    pub async fn screen(&self, id: SessionId) -> Result<SessionScreen, SessionServiceError> {
        self.sync_lesson(id).await?;
        let session = self.sessions.get_session(id).await?;
        Ok(SessionScreen::from_session(&session))
    }
}
