//! Gemini `generateContent` client.
//!
//! Every call sends a prompt plus a JSON response schema and expects the
//! candidate text to be JSON conforming to that schema. There is no retry
//! and no schema repair: anything else is a [`ContentFetchError`].

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::{Duration, Instant};

use crate::config::{CredentialStatus, SecureString, ServiceConfig};
use crate::model::{DetailFields, PhilosopherDetail, PhilosopherSummary};

use super::error::ContentFetchError;
use super::request::{ContentRequest, GenerateContentResponse, SummaryList};
use super::traits::ContentSource;

/// Client for the Gemini API.
pub struct GeminiClient {
    client: Client,
    base_url: String,
    model: String,
    api_key: Option<SecureString>,
    unconfigured_reason: String,
    philosopher_count: u32,
}

impl GeminiClient {
    /// Create a client from service settings.
    ///
    /// A missing API key is not an error here; every fetch then fails with
    /// [`ContentFetchError::NotConfigured`] so the screens can show it.
    pub fn new(config: &ServiceConfig, philosopher_count: u32) -> Result<Self, ContentFetchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(u64::from(config.timeout_seconds)))
            .connect_timeout(Duration::from_secs(u64::from(config.connect_timeout_seconds)))
            .build()?;

        let (api_key, unconfigured_reason) = match config.resolve_credential() {
            CredentialStatus::Configured(key) => (Some(key), String::new()),
            CredentialStatus::Unconfigured { reason } => {
                tracing::warn!(reason = %reason, "Gemini API key missing");
                (None, reason)
            }
        };

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            model: config.model.clone(),
            api_key,
            unconfigured_reason,
            philosopher_count,
        })
    }

    /// Check if an API key was resolved.
    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// Get the model name.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Full `generateContent` endpoint for the configured model.
    pub fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }

    /// Send `request` and parse the candidate text as `T`.
    async fn generate<T: DeserializeOwned>(
        &self,
        request: &ContentRequest,
    ) -> Result<T, ContentFetchError> {
        let Some(api_key) = &self.api_key else {
            return Err(ContentFetchError::NotConfigured {
                reason: self.unconfigured_reason.clone(),
            });
        };

        let url = self.endpoint();
        tracing::debug!(url = %url, model = %self.model, "Sending generateContent request");

        let start = Instant::now();
        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", api_key.expose())
            .json(&request.to_body())
            .send()
            .await?;

        let status = response.status();
        let latency_ms = start.elapsed().as_millis() as u64;

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());

            tracing::error!(
                status = %status,
                latency_ms,
                error = %error_text,
                "Content service API error"
            );

            return Err(ContentFetchError::Api {
                status: status.as_u16(),
                message: error_text,
            });
        }

        let body = response.text().await?;
        let envelope: GenerateContentResponse = serde_json::from_str(&body)
            .map_err(|e| ContentFetchError::InvalidEnvelope(e.to_string()))?;
        let text = envelope.text().ok_or(ContentFetchError::EmptyResponse)?;

        tracing::debug!(latency_ms, text_len = text.len(), "Received generateContent response");

        serde_json::from_str(&text).map_err(ContentFetchError::Parse)
    }
}

#[async_trait]
impl ContentSource for GeminiClient {
    fn name(&self) -> &'static str {
        "gemini"
    }

    async fn fetch_summary_list(&self) -> Result<Vec<PhilosopherSummary>, ContentFetchError> {
        let request = ContentRequest::summary_list(self.philosopher_count);
        let list: SummaryList = self.generate(&request).await.inspect_err(|err| {
            tracing::error!(error = %err, "Error fetching philosophers");
        })?;
        Ok(list.philosophers)
    }

    async fn fetch_detail(
        &self,
        summary: &PhilosopherSummary,
    ) -> Result<PhilosopherDetail, ContentFetchError> {
        let request = ContentRequest::detail(summary);
        let fields: DetailFields = self.generate(&request).await.inspect_err(|err| {
            tracing::error!(error = %err, name = %summary.name, "Error fetching details");
        })?;
        Ok(PhilosopherDetail::merge(summary.clone(), fields))
    }
}
