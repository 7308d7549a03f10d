//! HTTP provider for the DevOps Genie inference service
//!
//! Talks to the two read-only endpoints the service exposes:
//! `GET /models` and `GET /model_response?model_name=..&question=..`.

use crate::config::ApiConfig;
use crate::error::{GenieError, Result};
use crate::providers::Provider;

use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Response};
use serde::Deserialize;
use std::time::Duration;

/// Inference service provider
///
/// # Examples
///
/// ```no_run
/// use genie::config::ApiConfig;
/// use genie::providers::{GenieProvider, Provider};
///
/// # async fn example() -> genie::error::Result<()> {
/// let provider = GenieProvider::new(&ApiConfig::default())?;
/// let models = provider.list_models().await?;
/// let answer = provider.ask(&models[0], "What is GitOps?").await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct GenieProvider {
    client: Client,
    base_url: String,
}

/// Body of `/models`: a bare list on success, an object on upstream failure
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ModelsResponse {
    Models(Vec<String>),
    Failure { error: String },
}

/// Body of `/model_response`
#[derive(Debug, Deserialize)]
struct ModelResponse {
    #[serde(default)]
    answer: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

impl GenieProvider {
    /// Create a new provider from API configuration
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails
    ///
    /// # Examples
    ///
    /// ```
    /// use genie::config::ApiConfig;
    /// use genie::providers::GenieProvider;
    ///
    /// let provider = GenieProvider::new(&ApiConfig::default());
    /// assert!(provider.is_ok());
    /// ```
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| GenieError::Config(format!("Failed to create HTTP client: {}", e)))?;

        let base_url = config.base_url.trim_end_matches('/').to_string();
        tracing::info!("Initialized Genie provider: base_url={}", base_url);

        Ok(Self { client, base_url })
    }

    /// The base URL without a trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    async fn check_status(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        tracing::error!("Genie API returned error {}: {}", status, body);
        Err(GenieError::HttpStatus {
            status: status.as_u16(),
        }
        .into())
    }
}

fn transport_error(e: reqwest::Error) -> GenieError {
    tracing::warn!("Request to Genie API failed: {}", e);
    if e.is_timeout() {
        GenieError::Transport(format!("request timed out: {}", e))
    } else {
        GenieError::Transport(e.to_string())
    }
}

#[async_trait]
impl Provider for GenieProvider {
    async fn list_models(&self) -> Result<Vec<String>> {
        let url = self.url("models");
        tracing::debug!("Fetching models from {}", url);

        let response = self
            .client
            .get(&url)
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(transport_error)?;

        let response = Self::check_status(response).await?;
        let body: ModelsResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse models response: {}", e);
            GenieError::MalformedResponse(format!("expected a list of model names: {}", e))
        })?;

        match body {
            ModelsResponse::Models(models) => {
                tracing::debug!("Fetched {} models", models.len());
                Ok(models)
            }
            ModelsResponse::Failure { error } => {
                tracing::warn!("Genie API reported a model listing failure: {}", error);
                Err(GenieError::Upstream(error).into())
            }
        }
    }

    async fn ask(&self, model: &str, question: &str) -> Result<Option<String>> {
        let url = self.url("model_response");
        tracing::debug!(model = %model, "Sending question to {}", url);

        let response = self
            .client
            .get(&url)
            .query(&[("model_name", model), ("question", question)])
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(transport_error)?;

        let response = Self::check_status(response).await?;
        let body: ModelResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse model response: {}", e);
            GenieError::MalformedResponse(e.to_string())
        })?;

        match body.answer {
            Some(answer) if !answer.is_empty() => Ok(Some(answer)),
            _ => {
                if let Some(error) = body.error {
                    tracing::warn!(model = %model, "Genie API reported a failure: {}", error);
                }
                Ok(None)
            }
        }
    }

    fn endpoint(&self) -> String {
        self.base_url.clone()
    }
}
