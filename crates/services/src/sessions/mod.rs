mod progress;
mod view;
mod workflow;

// Public API of the session subsystem.
pub use progress::{FinalScore, QuizProgress};
pub use view::{QuizScreen, SessionScreen, TutorialScreen};
pub use workflow::{HintOutcome, LessonSync, SessionLoopService, SubmitOutcome};
