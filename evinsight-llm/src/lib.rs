//! Insight client for EV range predictions.
//!
//! [`InsightClient`] renders an [`InsightTask`] into a prompt, sends it to an
//! OpenAI-compatible chat completion endpoint and returns an
//! [`InsightResult`]. Failures never escape [`InsightClient::generate`]; they
//! become a short `"Unable to ..."` message instead.
//!
//! Environment variables:
//! - `HF_TOK` (required)
//! - `EVINSIGHT_BASE_URL` (optional, defaults to the Hugging Face router)
//! - `EVINSIGHT_MODEL` (optional)
//! - `EVINSIGHT_TIMEOUT_SECS` (optional)

pub mod config;
mod insight;
pub mod openai_compatible;
mod result;

pub use config::InsightConfig;
pub use insight::InsightClient;
pub use openai_compatible::{ChatCompletionRequest, OpenAiCompatibleBuilder, OpenAiCompatibleClient};
pub use result::{InsightResult, MAX_REASON_CHARS};

pub use evinsight_core::{CompletionLlm, InsightError, VehicleInfo, VehicleType};
pub use evinsight_prompt::{InsightTask, TaskKind};
