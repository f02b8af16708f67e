//! Shared types for EV range insights: the error type, chat completion
//! primitives, the vehicle data model and the range-prediction seam.

mod error;
mod llm;
mod predictor;
mod vehicle;

pub use error::InsightError;
pub use llm::{CompletionLlm, CompletionRequest, CompletionResponse, Message, Role};
pub use predictor::{RangeAnalysis, RangePredictor};
pub use vehicle::{VehicleInfo, VehicleType};
