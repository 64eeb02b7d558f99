//! Google Gemini assessment client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::error::{AssessError, Result};
use crate::protocol::{GeminiRequest, GeminiResponse};
use crate::provider::AssessmentProvider;
use advisor_core::{Assessment, Config};

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Non-streaming `generateContent` client. No internal retry: one call to
/// [`AssessmentProvider::assess`] is one upstream request.
pub struct GeminiClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    timeout: Duration,
}

impl GeminiClient {
    /// Create a new client with an API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set a custom base URL (e.g., for proxies or alternative endpoints).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the model name.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Bound the whole request/parse round trip.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build a client from loaded configuration. A missing API key is a
    /// fatal startup condition, not something to recover from later.
    pub fn from_config(config: &Config) -> Result<Self> {
        let api_key = config.api_key.clone().ok_or(AssessError::MissingApiKey)?;
        let mut client = GeminiClient::new(api_key);
        if let Some(base) = &config.api_base {
            client = client.with_base_url(base.clone());
        }
        if let Some(model) = &config.model {
            client = client.with_model(model.clone());
        }
        if let Some(secs) = config.request_timeout_secs {
            client = client.with_timeout(Duration::from_secs(secs));
        }
        Ok(client)
    }

    async fn request_assessment(&self, prompt: &str) -> Result<Assessment> {
        let request = GeminiRequest::for_assessment(prompt);
        log::debug!(
            "Gemini request: {}",
            serde_json::to_string_pretty(&request).unwrap_or_default()
        );

        // key goes in the query string, never in logs
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(AssessError::Http)?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.map_err(AssessError::Http)?;

            if status == 401 || status == 403 {
                return Err(AssessError::Auth(format!(
                    "Gemini authentication failed: {}. Please check your API key.",
                    text
                )));
            }

            return Err(AssessError::Api(format!(
                "Gemini API error: HTTP {}: {}",
                status, text
            )));
        }

        let raw = response.text().await.map_err(AssessError::Http)?;
        let body: GeminiResponse = serde_json::from_str(&raw)
            .map_err(|err| AssessError::Contract(format!("malformed response envelope: {err}")))?;

        let text = body.text().ok_or(AssessError::EmptyResponse)?;
        log::debug!("Gemini response text: {}", text);

        let assessment: Assessment = serde_json::from_str(text.trim()).map_err(|err| {
            AssessError::Contract(format!(
                "response does not match the assessment schema: {err}"
            ))
        })?;
        Ok(assessment)
    }
}

#[async_trait]
impl AssessmentProvider for GeminiClient {
    async fn assess(&self, prompt: &str) -> Result<Assessment> {
        match tokio::time::timeout(self.timeout, self.request_assessment(prompt)).await {
            Ok(outcome) => outcome,
            Err(_) => Err(AssessError::Timeout(self.timeout.as_secs())),
        }
    }
}
