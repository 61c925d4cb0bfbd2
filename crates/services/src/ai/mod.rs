pub mod client;
pub mod config;
pub mod prompts;
pub mod scripted;

pub use client::{FAILURE_MARKER, GenerationClient, TextGenerator, failure_text, is_failure};
pub use config::GenerationConfig;
pub use scripted::ScriptedGenerator;
