use serde::{Deserialize, Serialize};

use crate::InsightError;

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// A single-turn completion request as handed to a [`CompletionLlm`].
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<Message>,
    pub max_tokens: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct CompletionResponse {
    pub content: String,
}

/// Backend that turns a completion request into generated text.
///
/// The HTTP client in `evinsight-llm` is the production implementation;
/// tests substitute in-memory fakes.
#[async_trait::async_trait]
pub trait CompletionLlm: Send + Sync + 'static {
    async fn complete(&self, request: CompletionRequest)
        -> Result<CompletionResponse, InsightError>;
}

#[async_trait::async_trait]
impl<T> CompletionLlm for std::sync::Arc<T>
where
    T: CompletionLlm + ?Sized,
{
    async fn complete(
        &self,
        request: CompletionRequest,
    ) -> Result<CompletionResponse, InsightError> {
        (**self).complete(request).await
    }
}
