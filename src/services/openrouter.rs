//! OpenRouter chat-completions client
//!
//! The one outbound network call in the system. It phrases an
//! already-computed recommendation; every number in the prompt was
//! decided by the engine before this runs.

use async_trait::async_trait;
use serde_json::json;
use tracing::debug;

use crate::error::{ExplainerError, ExplainerResult};
use crate::services::response_parser;
use crate::traits::ExplanationService;
use crate::types::Explanation;

const OPENROUTER_API_URL: &str = "https://openrouter.ai/api/v1/chat/completions";

/// Keeps explanations short; the template asks for two brief sections.
const MAX_TOKENS: u32 = 200;

/// Explanation client backed by the OpenRouter chat-completions API.
#[derive(Debug, Clone)]
pub struct OpenRouterClient {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
    model: String,
    referer: String,
}

impl OpenRouterClient {
    pub fn new(api_key: String, model: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url: OPENROUTER_API_URL.to_string(),
            api_key,
            model,
            referer: "http://localhost:8080".to_string(),
        }
    }

    /// Point the client at a different endpoint (test servers).
    pub fn with_api_url(mut self, api_url: String) -> Self {
        self.api_url = api_url;
        self
    }
}

#[async_trait]
impl ExplanationService for OpenRouterClient {
    async fn explain(&self, prompt: &str) -> ExplainerResult<Explanation> {
        let request_body = json!({
            "model": self.model,
            "messages": [
                {
                    "role": "user",
                    "content": prompt
                }
            ],
            "max_tokens": MAX_TOKENS
        });

        let response = self
            .client
            .post(&self.api_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            // OpenRouter attributes traffic by these two headers
            .header("HTTP-Referer", &self.referer)
            .header("X-Title", "priceadvisor")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<serde_json::Value>(&body)
                .ok()
                .and_then(|value| {
                    value
                        .get("error")
                        .and_then(|error| error.get("message"))
                        .and_then(|message| message.as_str())
                        .map(|message| message.to_string())
                })
                .unwrap_or(body);

            return Err(ExplainerError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let response_json: serde_json::Value = response.json().await?;

        let content = response_json
            .get("choices")
            .and_then(|choices| choices.get(0))
            .and_then(|choice| choice.get("message"))
            .and_then(|message| message.get("content"))
            .and_then(|content| content.as_str())
            .ok_or(ExplainerError::EmptyResponse)?;

        debug!(model = %self.model, "explanation response received");

        response_parser::parse_explanation(content)
    }
}
