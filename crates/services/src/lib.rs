#![forbid(unsafe_code)]

pub mod ai;
pub mod app_services;
pub mod error;
pub mod grading_service;
pub mod hint_service;
pub mod lesson_service;
pub mod sessions;

pub use tutor_core::Clock;

pub use app_services::AppServices;
pub use error::{AppServicesError, ConfigError, GenerationError, SessionServiceError};
pub use grading_service::GradingService;
pub use hint_service::HintService;
pub use lesson_service::LessonService;

pub use sessions::{
    FinalScore, HintOutcome, LessonSync, QuizProgress, QuizScreen, SessionLoopService,
    SessionScreen, SubmitOutcome, TutorialScreen,
};
