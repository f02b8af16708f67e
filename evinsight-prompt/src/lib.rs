//! Request builder for EV insight prompts.
//!
//! Turns an [`InsightTask`] into the single user prompt sent to the
//! completion endpoint. Rendering is pure and deterministic; missing vehicle
//! fields become `Unknown` rather than failing.

pub mod format;
mod task;
mod template;

pub use task::{build_prompt, GenerationParams, InsightTask, TaskKind};
pub use template::PromptTemplate;
