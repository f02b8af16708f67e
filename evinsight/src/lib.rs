//! EV range insights: prompt building and an LLM-backed insight client.
//!
//! ```no_run
//! use evinsight::{InsightClient, InsightConfig, InsightTask};
//!
//! # async fn run() -> Result<(), evinsight::InsightError> {
//! let client = InsightClient::from_config(InsightConfig::from_env()?)?;
//! let tips = client
//!     .generate(&InsightTask::MaintenanceTips {
//!         vehicle_type: "BEV".to_string(),
//!         age_years: 2,
//!     })
//!     .await;
//! println!("{tips}");
//! # Ok(())
//! # }
//! ```

pub use evinsight_prompt as prompt;

pub use evinsight_core::{
    CompletionLlm, CompletionRequest, CompletionResponse, InsightError, Message, RangeAnalysis,
    RangePredictor, Role, VehicleInfo, VehicleType,
};
pub use evinsight_prompt::{build_prompt, GenerationParams, InsightTask, TaskKind};

#[cfg(feature = "client")]
pub use evinsight_llm as llm;

#[cfg(feature = "client")]
pub use evinsight_llm::{InsightClient, InsightConfig, InsightResult, OpenAiCompatibleClient};
