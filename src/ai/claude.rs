//! Anthropic Messages API backend

use crate::ai::prompt_template::PromptRequest;
use crate::ai::{BackendReply, ReasoningBackend};
use crate::config::Config;
use crate::error::{OrchestratorError, Result};
use async_trait::async_trait;
use std::time::Duration;

const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Anthropic Claude API client
#[derive(Clone)]
pub struct ClaudeBackend {
    api_key: String,
    client: reqwest::Client,
    base_url: String,
    model: String,
}

impl ClaudeBackend {
    /// 설정으로부터 생성 (API 키가 없으면 `ConfigError`)
    pub fn from_config(config: &Config) -> Result<Self> {
        let api_key = config.api_key.clone().ok_or_else(|| {
            OrchestratorError::ConfigError(
                "ANTHROPIC_API_KEY environment variable not set".to_string(),
            )
        })?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| OrchestratorError::ConfigError(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            api_key,
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn messages_url(&self) -> String {
        format!("{}/v1/messages", self.base_url)
    }

    fn request_body(&self, request: &PromptRequest) -> serde_json::Value {
        serde_json::json!({
            "model": &self.model,
            "max_tokens": request.max_tokens,
            "system": request.system,
            "messages": [{"role": "user", "content": &request.user}]
        })
    }
}

#[async_trait]
impl ReasoningBackend for ClaudeBackend {
    fn name(&self) -> &str {
        "anthropic"
    }

    async fn complete(&self, request: &PromptRequest) -> Result<BackendReply> {
        tracing::debug!(model = %self.model, "sending request to Anthropic");

        let response = self
            .client
            .post(self.messages_url())
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("content-type", "application/json")
            .json(&self.request_body(request))
            .send()
            .await
            .map_err(|e| OrchestratorError::BackendFailure(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(OrchestratorError::BackendFailure(format!(
                "Anthropic API error {}: {}",
                status, body
            )));
        }

        response
            .json::<BackendReply>()
            .await
            .map_err(|e| OrchestratorError::BackendFailure(format!("Unreadable Anthropic reply: {}", e)))
    }
}
