//! Anthropic Claude client speaking the Messages API

use crate::config::ModelSettings;
use crate::llm::client::{LLMClient, ProviderId};
use crate::types::{AppError, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

const ANTHROPIC_API_BASE: &str = "https://api.anthropic.com";
const ANTHROPIC_VERSION: &str = "2023-06-01";

pub struct AnthropicClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

impl AnthropicClient {
    pub fn new(api_key: String, settings: &ModelSettings) -> Self {
        Self::with_base_url(api_key, ANTHROPIC_API_BASE, settings)
    }

    /// Create a client against a custom base URL. Used by tests to point at
    /// a local mock server.
    pub fn with_base_url(api_key: String, base_url: &str, settings: &ModelSettings) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            model: settings.model.clone(),
            temperature: settings.temperature,
            max_tokens: settings.max_tokens,
        }
    }

    /// Concatenate the text blocks of a response, skipping any other block
    /// kinds.
    fn extract_text_content(content: &[ContentBlock]) -> String {
        content
            .iter()
            .filter_map(|block| match block.kind.as_str() {
                "text" => Some(block.text.as_str()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("")
    }
}

#[async_trait]
impl LLMClient for AnthropicClient {
    async fn generate_with_system(&self, system: &str, prompt: &str) -> Result<String> {
        let request = MessagesRequest {
            model: &self.model,
            max_tokens: self.max_tokens,
            temperature: self.temperature,
            system,
            messages: vec![Message {
                role: "user",
                content: prompt,
            }],
        };

        let response = self
            .http
            .post(format!("{}/v1/messages", self.base_url))
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&request)
            .send()
            .await
            .map_err(|e| AppError::LLM(format!("Anthropic API error: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::LLM(format!(
                "Anthropic API error {}: {}",
                status, body
            )));
        }

        let parsed: MessagesResponse = response
            .json()
            .await
            .map_err(|e| AppError::LLM(format!("Invalid Anthropic response: {}", e)))?;

        Ok(Self::extract_text_content(&parsed.content))
    }

    fn model_name(&self) -> &str {
        &self.model
    }

    fn provider(&self) -> ProviderId {
        ProviderId::Anthropic
    }
}

// ============= Wire Types =============

#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    temperature: f32,
    system: &'a str,
    messages: Vec<Message<'a>>,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: String,
}
