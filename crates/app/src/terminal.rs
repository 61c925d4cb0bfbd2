use std::io;
use std::sync::Arc;

use services::{
    HintOutcome, QuizScreen, SessionLoopService, SessionScreen, SessionServiceError,
    SubmitOutcome, TutorialScreen,
};
use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tutor_core::model::{
    DifficultyGrade, MAX_HINTS_PER_QUESTION, SessionError, SessionId, Subject,
};

const HINT_COMMAND: &str = ":hint";

/// Errors that end a terminal session.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TerminalError {
    #[error("terminal i/o failed: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Session(#[from] SessionServiceError),
}

/// Home-page choices fixed from the command line.
#[derive(Debug, Clone, Copy, Default)]
pub struct HomeDefaults {
    pub subject: Option<Subject>,
    pub grade: Option<DifficultyGrade>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TutorialCommand {
    Easier,
    Harder,
    Better,
    Quiz,
    Exit,
}

impl TutorialCommand {
    fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "e" | "easier" => Some(Self::Easier),
            "h" | "harder" => Some(Self::Harder),
            "b" | "better" => Some(Self::Better),
            "q" | "quiz" => Some(Self::Quiz),
            "x" | "exit" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Line-oriented front-end: renders each screen, reads one event, hands it to the
/// session loop, repeats.
pub struct Terminal<R, W> {
    input: R,
    output: W,
    session_loop: Arc<SessionLoopService>,
    defaults: HomeDefaults,
}

impl<R, W> Terminal<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(
        input: R,
        output: W,
        session_loop: Arc<SessionLoopService>,
        defaults: HomeDefaults,
    ) -> Self {
        Self {
            input,
            output,
            session_loop,
            defaults,
        }
    }

    /// Runs one session until the learner exits or input ends.
    pub async fn run(&mut self) -> Result<(), TerminalError> {
        let id = self.session_loop.create_session().await?;
        loop {
            let flow = match self.session_loop.screen(id).await? {
                SessionScreen::Home => self.home(id).await?,
                SessionScreen::Tutorial(screen) => self.tutorial(id, &screen).await?,
                SessionScreen::Quiz(screen) => self.quiz(id, screen).await?,
            };
            if flow == Flow::Quit {
                break;
            }
        }
        self.session_loop.end_session(id).await?;
        self.say("Goodbye!").await?;
        Ok(())
    }

    async fn home(&mut self, id: SessionId) -> Result<Flow, TerminalError> {
        self.say("\n=== Guided Learning Tutor ===").await?;

        let subject = match self.defaults.subject {
            Some(subject) => subject,
            None => {
                for (index, subject) in Subject::ALL.iter().enumerate() {
                    self.say(&format!("  {}. {subject}", index + 1)).await?;
                }
                let Some(raw) = self.ask("Subject: ").await? else {
                    return Ok(Flow::Quit);
                };
                match parse_subject(&raw) {
                    Some(subject) => subject,
                    None => {
                        self.say(&format!("Unknown subject: {}", raw.trim())).await?;
                        return Ok(Flow::Continue);
                    }
                }
            }
        };

        let grade = match self.defaults.grade {
            Some(grade) => grade,
            None => {
                let prompt = format!(
                    "Grade [{}-{}, default {}]: ",
                    DifficultyGrade::MIN,
                    DifficultyGrade::MAX,
                    DifficultyGrade::default().value()
                );
                let Some(raw) = self.ask(&prompt).await? else {
                    return Ok(Flow::Quit);
                };
                if raw.trim().is_empty() {
                    DifficultyGrade::default()
                } else if let Ok(grade) = raw.parse::<DifficultyGrade>() {
                    grade
                } else {
                    self.say(&format!("Invalid grade: {}", raw.trim())).await?;
                    return Ok(Flow::Continue);
                }
            }
        };

        let Some(concept) = self.ask("Concept to learn: ").await? else {
            return Ok(Flow::Quit);
        };

        self.say("Generating tutorial...").await?;
        match self
            .session_loop
            .start_tutorial(id, subject, &concept, grade)
            .await
        {
            Ok(_) => Ok(Flow::Continue),
            Err(SessionServiceError::Session(SessionError::EmptyConcept)) => {
                self.say("Please enter a concept.").await?;
                Ok(Flow::Continue)
            }
            Err(err) => Err(err.into()),
        }
    }

    async fn tutorial(
        &mut self,
        id: SessionId,
        screen: &TutorialScreen,
    ) -> Result<Flow, TerminalError> {
        let subject = screen.subject.map(Subject::as_str).unwrap_or_default();
        self.say(&format!(
            "\n=== {subject}: {} ===\n{} {}\n",
            screen.concept,
            screen.grade,
            meter_bar(screen.grade)
        ))
        .await?;
        self.say(&screen.lesson).await?;

        let Some(raw) = self
            .ask("\n[e] easier  [h] harder  [b] better explanation  [q] quiz  [x] exit > ")
            .await?
        else {
            return Ok(Flow::Quit);
        };

        match TutorialCommand::parse(&raw) {
            Some(TutorialCommand::Easier) => {
                self.session_loop.make_easier(id).await?;
            }
            Some(TutorialCommand::Harder) => {
                self.session_loop.make_harder(id).await?;
            }
            Some(TutorialCommand::Better) => {
                self.session_loop.request_better_tutorial(id).await?;
            }
            Some(TutorialCommand::Quiz) => {
                self.say("Generating quiz...").await?;
                self.session_loop.start_quiz(id).await?;
            }
            Some(TutorialCommand::Exit) => return Ok(Flow::Quit),
            None => self.say(&format!("Unknown command: {}", raw.trim())).await?,
        }
        Ok(Flow::Continue)
    }

    async fn quiz(&mut self, id: SessionId, screen: QuizScreen) -> Result<Flow, TerminalError> {
        match screen {
            QuizScreen::Empty => {
                self.say("\nNo quiz questions could be generated from this tutorial.")
                    .await?;
                self.restart_or_quit(id).await
            }
            QuizScreen::Question {
                number,
                total,
                text,
                score,
                hints_remaining,
                ..
            } => {
                self.say(&format!("\nQuestion {number}/{total} (score {score})\n{text}"))
                    .await?;
                let prompt =
                    format!("Your answer ({HINT_COMMAND} for a hint, {hints_remaining} left) > ");
                let Some(raw) = self.ask(&prompt).await? else {
                    return Ok(Flow::Quit);
                };
                if raw.trim() == HINT_COMMAND {
                    self.hint(id).await?;
                } else if self.session_loop.submit_answer(id, &raw).await?
                    == SubmitOutcome::BlankAnswer
                {
                    self.say("Please enter an answer.").await?;
                }
                Ok(Flow::Continue)
            }
            QuizScreen::Feedback {
                is_correct, body, ..
            } => {
                let verdict = if is_correct {
                    "✅ Correct!"
                } else {
                    "❌ Incorrect."
                };
                self.say(&format!("{verdict}\n{body}")).await?;
                if self.ask("Press Enter for the next question > ").await?.is_none() {
                    return Ok(Flow::Quit);
                }
                self.session_loop.next_question(id).await?;
                Ok(Flow::Continue)
            }
            QuizScreen::Completed(final_score) => {
                self.say(&format!("\n🎉 Quiz complete! {final_score}")).await?;
                self.restart_or_quit(id).await
            }
        }
    }

    async fn hint(&mut self, id: SessionId) -> Result<(), TerminalError> {
        match self.session_loop.request_hint(id).await? {
            HintOutcome::Hint { number, text, .. } => {
                self.say(&format!(
                    "💡 Hint {number}/{MAX_HINTS_PER_QUESTION}: {}",
                    text.trim()
                ))
                .await?;
            }
            HintOutcome::LimitReached => {
                self.say("No more hints for this question.").await?;
            }
        }
        Ok(())
    }

    async fn restart_or_quit(&mut self, id: SessionId) -> Result<Flow, TerminalError> {
        let Some(raw) = self.ask("Press Enter to start over, or x to exit > ").await? else {
            return Ok(Flow::Quit);
        };
        if TutorialCommand::parse(&raw) == Some(TutorialCommand::Exit) {
            return Ok(Flow::Quit);
        }
        self.session_loop.restart(id).await?;
        Ok(Flow::Continue)
    }

    async fn say(&mut self, text: &str) -> io::Result<()> {
        self.output.write_all(text.as_bytes()).await?;
        self.output.write_all(b"\n").await?;
        self.output.flush().await
    }

    /// `None` once input is exhausted.
    async fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.output.write_all(prompt.as_bytes()).await?;
        self.output.flush().await?;

        let mut line = String::new();
        if self.input.read_line(&mut line).await? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

fn parse_subject(raw: &str) -> Option<Subject> {
    let raw = raw.trim();
    if let Ok(number) = raw.parse::<usize>() {
        return number
            .checked_sub(1)
            .and_then(|index| Subject::ALL.get(index))
            .copied();
    }
    raw.parse().ok()
}

fn meter_bar(grade: DifficultyGrade) -> String {
    let filled = usize::from(grade.value());
    let empty = usize::from(DifficultyGrade::MAX) - filled;
    format!("[{}{}]", "#".repeat(filled), ".".repeat(empty))
}
