//! Client abstraction for the text-generation service.
//!
//! A single trait ([`GenerationClient`]) with one method: submit a prompt,
//! receive the generated text. The concrete implementation talks to an
//! Ollama-compatible endpoint over HTTP. Errors at the HTTP boundary are
//! logged and degrade to an empty string; callers decide whether an empty
//! response is fatal for their stage.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, error, info};

#[cfg(any(test, feature = "test-generation-mocks"))]
use mockall::automock;

/// Trait for submitting prompts to a text-generation backend.
/// Implemented by the real HTTP client and by deterministic test mocks.
#[cfg_attr(any(test, feature = "test-generation-mocks"), automock)]
#[async_trait]
pub trait GenerationClient: Send + Sync {
    /// Submit a prompt to the given model and return the raw response text.
    /// An empty string signals that the call failed or produced nothing.
    async fn generate(&self, model: &str, prompt: &str) -> String;
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    response: String,
}

/// HTTP client for an Ollama-style `/api/generate` endpoint.
pub struct OllamaClient {
    client: reqwest::Client,
    endpoint: String,
}

impl OllamaClient {
    pub fn new(endpoint: &str, timeout_secs: u64) -> Result<Self, anyhow::Error> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;
        Ok(Self {
            client,
            endpoint: endpoint.to_string(),
        })
    }
}

#[async_trait]
impl GenerationClient for OllamaClient {
    async fn generate(&self, model: &str, prompt: &str) -> String {
        let payload = GenerateRequest {
            model,
            prompt,
            stream: false,
        };

        info!(
            endpoint = %self.endpoint,
            model = model,
            prompt_len = prompt.len(),
            "Submitting prompt to generation service"
        );

        let response = match self.client.post(&self.endpoint).json(&payload).send().await {
            Ok(resp) => resp,
            Err(e) => {
                error!(error = ?e, endpoint = %self.endpoint, "Generation request failed");
                return String::new();
            }
        };

        let response = match response.error_for_status() {
            Ok(resp) => resp,
            Err(e) => {
                error!(error = ?e, endpoint = %self.endpoint, "Generation service returned error status");
                return String::new();
            }
        };

        match response.json::<GenerateResponse>().await {
            Ok(body) => {
                debug!(response_len = body.response.len(), "Generation response received");
                body.response
            }
            Err(e) => {
                error!(error = ?e, "Failed to decode generation response body");
                String::new()
            }
        }
    }
}
