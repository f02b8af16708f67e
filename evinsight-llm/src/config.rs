use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

use evinsight_core::InsightError;

pub const DEFAULT_BASE_URL: &str = "https://router.huggingface.co/v1";
pub const DEFAULT_MODEL: &str = "deepseek-ai/DeepSeek-V3.2-Exp:novita";

/// Required: bearer credential for the inference endpoint.
pub const API_KEY_ENV: &str = "HF_TOK";
pub const BASE_URL_ENV: &str = "EVINSIGHT_BASE_URL";
pub const MODEL_ENV: &str = "EVINSIGHT_MODEL";
pub const TIMEOUT_ENV: &str = "EVINSIGHT_TIMEOUT_SECS";

/// Endpoint settings, fixed for the lifetime of the client built from them.
#[derive(Clone, Debug)]
pub struct InsightConfig {
    pub api_key: SecretString,
    pub base_url: String,
    pub model: String,
    pub timeout: Option<Duration>,
}

impl InsightConfig {
    pub fn new(api_key: SecretString) -> Self {
        Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout: None,
        }
    }

    pub fn with_base_url(mut self, value: impl Into<String>) -> Self {
        self.base_url = value.into();
        self
    }

    pub fn with_model(mut self, value: impl Into<String>) -> Self {
        self.model = value.into();
        self
    }

    pub fn with_timeout(mut self, value: Duration) -> Self {
        self.timeout = Some(value);
        self
    }

    /// Reads the process environment. A missing or blank `HF_TOK` is a
    /// configuration error; callers should stop before serving requests.
    pub fn from_env() -> Result<Self, InsightError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, InsightError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_ENV)
            .filter(|value| !value.trim().is_empty())
            .ok_or_else(|| {
                InsightError::InvalidConfig(format!(
                    "{API_KEY_ENV} is not set; an API key is required for AI insights"
                ))
            })?;

        let mut config = Self::new(SecretString::new(api_key));
        if let Some(base_url) = lookup(BASE_URL_ENV).filter(|v| !v.trim().is_empty()) {
            config.base_url = base_url;
        }
        if let Some(model) = lookup(MODEL_ENV).filter(|v| !v.trim().is_empty()) {
            config.model = model;
        }
        if let Some(raw) = lookup(TIMEOUT_ENV) {
            let secs = raw.trim().parse::<u64>().map_err(|err| {
                InsightError::InvalidConfig(format!("invalid {TIMEOUT_ENV} '{raw}': {err}"))
            })?;
            if secs == 0 {
                return Err(InsightError::InvalidConfig(format!(
                    "{TIMEOUT_ENV} must be greater than 0"
                )));
            }
            config.timeout = Some(Duration::from_secs(secs));
        }
        Ok(config)
    }

    pub(crate) fn api_key_value(&self) -> &str {
        self.api_key.expose_secret()
    }
}
