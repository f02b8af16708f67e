use tracing::Instrument;

use evinsight_core::{CompletionLlm, CompletionRequest, InsightError, Message, VehicleInfo};
use evinsight_prompt::InsightTask;

use crate::config::InsightConfig;
use crate::openai_compatible::OpenAiCompatibleClient;
use crate::InsightResult;

/// Generates EV insights through a completion backend.
///
/// Every call is an independent single-turn round trip: no retries, no
/// conversation memory. The client is cheap to clone and safe to share across
/// tasks.
#[derive(Clone, Debug)]
pub struct InsightClient<L = OpenAiCompatibleClient> {
    llm: L,
    model: String,
}

impl InsightClient<OpenAiCompatibleClient> {
    pub fn from_config(config: InsightConfig) -> Result<Self, InsightError> {
        let mut builder = OpenAiCompatibleClient::builder()
            .base_url(&config.base_url)?
            .api_key(config.api_key_value());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self::new(builder.build()?, config.model))
    }

    pub fn from_env() -> Result<Self, InsightError> {
        Self::from_config(InsightConfig::from_env()?)
    }
}

impl<L: CompletionLlm> InsightClient<L> {
    pub fn new(llm: L, model: impl Into<String>) -> Self {
        Self {
            llm,
            model: model.into(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// One round trip for `task`, surfacing the failure instead of a
    /// fallback.
    pub async fn try_generate(&self, task: &InsightTask) -> Result<String, InsightError> {
        let params = task.params();
        let request = CompletionRequest {
            model: self.model.clone(),
            messages: vec![Message::user(task.build_prompt())],
            max_tokens: params.max_tokens,
            temperature: params.temperature,
        };
        let response = self.llm.complete(request).await?;
        Ok(response.content)
    }

    /// Never fails: endpoint problems come back as
    /// [`InsightResult::Unavailable`].
    pub async fn generate(&self, task: &InsightTask) -> InsightResult {
        let kind = task.kind();
        let span = tracing::info_span!("insight_generate", task = %kind, model = %self.model);

        async {
            match self.try_generate(task).await {
                Ok(text) => {
                    tracing::debug!(chars = text.len(), "insight generated");
                    InsightResult::Generated(text)
                }
                Err(err) => {
                    tracing::warn!(error = %err, "insight generation failed");
                    InsightResult::unavailable(kind, &err)
                }
            }
        }
        .instrument(span)
        .await
    }

    pub async fn vehicle_recommendation(
        &self,
        vehicle: &VehicleInfo,
        predicted_range_miles: f64,
    ) -> String {
        self.generate(&InsightTask::Recommendation {
            vehicle: vehicle.clone(),
            predicted_range_miles,
        })
        .await
        .into_text()
    }

    pub async fn maintenance_tips(&self, vehicle_type: &str, age_years: u32) -> String {
        self.generate(&InsightTask::MaintenanceTips {
            vehicle_type: vehicle_type.to_string(),
            age_years,
        })
        .await
        .into_text()
    }

    pub async fn charging_strategy(
        &self,
        predicted_range_miles: f64,
        daily_commute_miles: f64,
    ) -> String {
        self.generate(&InsightTask::ChargingStrategy {
            predicted_range_miles,
            daily_commute_miles,
        })
        .await
        .into_text()
    }

    pub async fn answer_question(&self, question: &str) -> String {
        self.generate(&InsightTask::Question {
            text: question.to_string(),
        })
        .await
        .into_text()
    }

    pub async fn compare_vehicles(
        &self,
        vehicle_a: &VehicleInfo,
        range_a: f64,
        vehicle_b: &VehicleInfo,
        range_b: f64,
    ) -> String {
        self.generate(&InsightTask::Comparison {
            vehicle_a: vehicle_a.clone(),
            range_a,
            vehicle_b: vehicle_b.clone(),
            range_b,
        })
        .await
        .into_text()
    }
}
