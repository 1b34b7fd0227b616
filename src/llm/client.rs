//! Provider-agnostic LLM client abstractions

use crate::config::{ApiKeys, ModelSettings};
use crate::types::{AppError, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::anthropic::AnthropicClient;
use super::gemini::GeminiClient;
use super::openai::{OpenAIClient, XAI_API_BASE};

/// Common interface for all LLM providers.
///
/// Implementations hold their credentials and model settings; a single call
/// carries only the system prompt and the user prompt. Construction never
/// touches the network, so a client can be built for a provider whose
/// credential is missing and will fail at invocation time instead.
#[async_trait]
pub trait LLMClient: Send + Sync {
    /// Generate a completion for `prompt` under the given system prompt.
    async fn generate_with_system(&self, system: &str, prompt: &str) -> Result<String>;

    /// Model identifier this client was configured with.
    fn model_name(&self) -> &str;

    /// Provider this client talks to.
    fn provider(&self) -> ProviderId;
}

// ============= Provider Registry =============

/// The closed set of supported providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderId {
    OpenAI,
    Anthropic,
    XAi,
    Google,
}

impl ProviderId {
    /// Every registered provider, in registry order.
    pub const ALL: [ProviderId; 4] = [
        ProviderId::OpenAI,
        ProviderId::Anthropic,
        ProviderId::XAi,
        ProviderId::Google,
    ];

    /// Canonical lowercase identifier used in configuration files.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderId::OpenAI => "openai",
            ProviderId::Anthropic => "anthropic",
            ProviderId::XAi => "xai",
            ProviderId::Google => "google",
        }
    }

    /// Human-facing provider name as it appears in aggregated output.
    pub fn display_name(&self) -> &'static str {
        match self {
            ProviderId::OpenAI => "OpenAI",
            ProviderId::Anthropic => "Anthropic",
            ProviderId::XAi => "xAI",
            ProviderId::Google => "Google",
        }
    }
}

impl fmt::Display for ProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderId {
    type Err = AppError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "openai" => Ok(ProviderId::OpenAI),
            "anthropic" => Ok(ProviderId::Anthropic),
            "xai" => Ok(ProviderId::XAi),
            "google" => Ok(ProviderId::Google),
            other => Err(AppError::UnknownProvider(other.to_string())),
        }
    }
}

// ============= Model Factory =============

/// Builds boxed [`LLMClient`] instances for any registered provider.
///
/// The factory is the only place that knows which concrete client backs
/// which provider. xAI rides on the OpenAI-compatible client with its own
/// API base.
pub struct ModelFactory {
    api_keys: ApiKeys,
}

impl ModelFactory {
    pub fn new(api_keys: ApiKeys) -> Self {
        Self { api_keys }
    }

    /// Create a client for `provider` configured with `settings`.
    pub fn create_model(
        &self,
        provider: ProviderId,
        settings: &ModelSettings,
    ) -> Result<Box<dyn LLMClient>> {
        let api_key = self
            .api_keys
            .for_provider(provider)
            .unwrap_or_default()
            .to_string();

        let client: Box<dyn LLMClient> = match provider {
            ProviderId::OpenAI => Box::new(OpenAIClient::new(api_key, settings)),
            ProviderId::XAi => Box::new(OpenAIClient::with_api_base(
                ProviderId::XAi,
                api_key,
                XAI_API_BASE,
                settings,
            )),
            ProviderId::Anthropic => Box::new(AnthropicClient::new(api_key, settings)),
            ProviderId::Google => Box::new(GeminiClient::new(api_key, settings)),
        };

        Ok(client)
    }
}
