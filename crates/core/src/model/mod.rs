mod feedback;
mod grade;
mod hints;
mod ids;
pub mod quiz;
mod session;
mod subject;

pub use feedback::{CORRECT_VERDICT, Feedback, verdict_is_correct};
pub use grade::{DifficultyGrade, GradeError};
pub use hints::{HintBudget, MAX_HINTS_PER_QUESTION};
pub use ids::{ParseSessionIdError, SessionId};
pub use quiz::{INSUFFICIENT_ANSWER, MAX_QUIZ_QUESTIONS, QuestionAnswer, parse_quiz, strip_numbering};
pub use session::{LessonRequest, LessonSignature, Page, Session, SessionError};
pub use subject::{Subject, SubjectError};
