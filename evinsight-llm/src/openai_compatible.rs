//! OpenAI-compatible chat completion client
//!
//! Works against any endpoint speaking the `/chat/completions` format
//! (Hugging Face router, OpenAI, DeepSeek, Together, ...).

use std::time::Duration;

use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use url::Url;

use evinsight_core::{CompletionLlm, CompletionRequest, CompletionResponse, InsightError, Message};

/// Request body for the chat completions endpoint
#[derive(Serialize, Debug, Clone)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<Message>,
    pub max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

impl From<CompletionRequest> for ChatCompletionRequest {
    fn from(request: CompletionRequest) -> Self {
        Self {
            model: request.model,
            messages: request.messages,
            max_tokens: request.max_tokens,
            temperature: request.temperature,
        }
    }
}

/// Non-streaming response from chat completions
#[derive(Deserialize, Debug, Clone)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    pub choices: Vec<Choice>,
    #[serde(default)]
    pub usage: Option<Usage>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Choice {
    #[serde(default)]
    pub index: u32,
    pub message: ResponseMessage,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct ResponseMessage {
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

/// OpenAI-style error response
#[derive(Deserialize, Debug, Clone)]
pub struct OpenAiError {
    pub error: ErrorDetail,
}

#[derive(Deserialize, Debug, Clone)]
pub struct ErrorDetail {
    pub message: String,
    #[serde(rename = "type", default)]
    pub error_type: Option<String>,
}

#[derive(Clone, Debug)]
pub struct OpenAiCompatibleClient {
    http: Client,
    base_url: String,
    api_key: SecretString,
    timeout: Option<Duration>,
}

#[derive(Default)]
pub struct OpenAiCompatibleBuilder {
    base_url: Option<Url>,
    api_key: Option<SecretString>,
    timeout: Option<Duration>,
}

impl OpenAiCompatibleBuilder {
    pub fn base_url(mut self, value: impl AsRef<str>) -> Result<Self, InsightError> {
        let url = Url::parse(value.as_ref())
            .map_err(|err| InsightError::InvalidConfig(format!("invalid base_url: {err}")))?;
        self.base_url = Some(url);
        Ok(self)
    }

    pub fn api_key(mut self, value: impl Into<String>) -> Self {
        self.api_key = Some(SecretString::new(value.into()));
        self
    }

    /// Deadline for a whole request. Without one the transport default
    /// applies.
    pub fn timeout(mut self, value: Duration) -> Self {
        self.timeout = Some(value);
        self
    }

    pub fn build(self) -> Result<OpenAiCompatibleClient, InsightError> {
        let base_url = self
            .base_url
            .ok_or_else(|| InsightError::InvalidConfig("base_url is required".to_string()))?;
        let api_key = self
            .api_key
            .ok_or_else(|| InsightError::InvalidConfig("api_key is required".to_string()))?;
        if api_key.expose_secret().trim().is_empty() {
            return Err(InsightError::InvalidConfig(
                "api_key cannot be empty".to_string(),
            ));
        }

        let mut http = Client::builder();
        if let Some(timeout) = self.timeout {
            http = http.timeout(timeout);
        }
        let http = http
            .build()
            .map_err(|err| InsightError::InvalidConfig(err.to_string()))?;

        Ok(OpenAiCompatibleClient {
            http,
            base_url: base_url.as_str().trim_end_matches('/').to_string(),
            api_key,
            timeout: self.timeout,
        })
    }
}

impl OpenAiCompatibleClient {
    pub fn builder() -> OpenAiCompatibleBuilder {
        OpenAiCompatibleBuilder::default()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    fn map_send_error(&self, err: reqwest::Error) -> InsightError {
        match self.timeout {
            Some(timeout) if err.is_timeout() => InsightError::Timeout(timeout),
            _ => InsightError::Transport(err.to_string()),
        }
    }

    pub async fn chat(
        &self,
        request: &ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, InsightError> {
        let response = self
            .http
            .post(self.completions_url())
            .bearer_auth(self.api_key.expose_secret())
            .json(request)
            .send()
            .await
            .map_err(|err| self.map_send_error(err))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = match serde_json::from_str::<OpenAiError>(&body) {
                Ok(parsed) => parsed.error.message,
                Err(_) if body.trim().is_empty() => status
                    .canonical_reason()
                    .unwrap_or("unknown endpoint error")
                    .to_string(),
                Err(_) => body,
            };
            return Err(InsightError::Api {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<ChatCompletionResponse>()
            .await
            .map_err(|err| match self.timeout {
                Some(timeout) if err.is_timeout() => InsightError::Timeout(timeout),
                _ => InsightError::Malformed(err.to_string()),
            })
    }
}

#[async_trait::async_trait]
impl CompletionLlm for OpenAiCompatibleClient {
    async fn complete(
        &self,
        request: CompletionRequest,
    ) -> Result<CompletionResponse, InsightError> {
        let response = self.chat(&request.into()).await?;

        if let Some(usage) = &response.usage {
            tracing::debug!(
                prompt_tokens = usage.prompt_tokens,
                completion_tokens = usage.completion_tokens,
                total_tokens = usage.total_tokens,
                "completion usage"
            );
        }

        let content = response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(InsightError::EmptyResponse)?;

        Ok(CompletionResponse { content })
    }
}
