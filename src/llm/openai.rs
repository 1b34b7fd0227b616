//! OpenAI-compatible chat completion client
//!
//! Serves two registry entries: `openai` against the default API base and
//! `xai` against the xAI base, which speaks the same chat completion
//! protocol.

use crate::config::ModelSettings;
use crate::llm::client::{LLMClient, ProviderId};
use crate::types::{AppError, Result};
use async_openai::{
    Client,
    config::OpenAIConfig,
    types::chat::{
        ChatCompletionRequestMessage, ChatCompletionRequestSystemMessage,
        ChatCompletionRequestUserMessage, CreateChatCompletionRequestArgs,
    },
};
use async_trait::async_trait;

/// API base for xAI's OpenAI-compatible endpoint.
pub const XAI_API_BASE: &str = "https://api.x.ai/v1";

pub struct OpenAIClient {
    client: Client<OpenAIConfig>,
    provider: ProviderId,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

impl OpenAIClient {
    /// Create a client against the default OpenAI API base.
    pub fn new(api_key: String, settings: &ModelSettings) -> Self {
        let config = OpenAIConfig::new().with_api_key(api_key);
        Self::from_config(ProviderId::OpenAI, config, settings)
    }

    /// Create a client against a custom OpenAI-compatible API base.
    pub fn with_api_base(
        provider: ProviderId,
        api_key: String,
        api_base: &str,
        settings: &ModelSettings,
    ) -> Self {
        let config = OpenAIConfig::new()
            .with_api_key(api_key)
            .with_api_base(api_base);
        Self::from_config(provider, config, settings)
    }

    fn from_config(provider: ProviderId, config: OpenAIConfig, settings: &ModelSettings) -> Self {
        Self {
            client: Client::with_config(config),
            provider,
            model: settings.model.clone(),
            temperature: settings.temperature,
            max_tokens: settings.max_tokens,
        }
    }
}

#[async_trait]
impl LLMClient for OpenAIClient {
    async fn generate_with_system(&self, system: &str, prompt: &str) -> Result<String> {
        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .temperature(self.temperature)
            .max_completion_tokens(self.max_tokens)
            .messages(vec![
                ChatCompletionRequestMessage::System(ChatCompletionRequestSystemMessage::from(
                    system.to_string(),
                )),
                ChatCompletionRequestMessage::User(ChatCompletionRequestUserMessage::from(
                    prompt.to_string(),
                )),
            ])
            .build()
            .map_err(|e| AppError::LLM(format!("Failed to build request: {}", e)))?;

        let response = self
            .client
            .chat()
            .create(request)
            .await
            .map_err(|e| {
                AppError::LLM(format!("{} API error: {}", self.provider.display_name(), e))
            })?;

        response
            .choices
            .first()
            .and_then(|choice| choice.message.content.clone())
            .ok_or_else(|| {
                AppError::LLM(format!(
                    "No response from {}",
                    self.provider.display_name()
                ))
            })
    }

    fn model_name(&self) -> &str {
        &self.model
    }

    fn provider(&self) -> ProviderId {
        self.provider
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> ModelSettings {
        ModelSettings {
            model: "gpt-4o".to_string(),
            temperature: 0.3,
            max_tokens: 256,
        }
    }

    #[test]
    fn test_client_creation() {
        let client = OpenAIClient::new("test-key".to_string(), &settings());
        assert_eq!(client.model_name(), "gpt-4o");
        assert_eq!(client.provider(), ProviderId::OpenAI);
    }

    #[test]
    fn test_xai_client_uses_xai_provider_id() {
        let client = OpenAIClient::with_api_base(
            ProviderId::XAi,
            "test-key".to_string(),
            XAI_API_BASE,
            &settings(),
        );
        assert_eq!(client.provider(), ProviderId::XAi);
    }
}
