//! Persona-bound experts
//!
//! An expert pairs one provider-backed model with a persona. The fixed
//! roster binds `openai` to the technical persona, `anthropic` to the
//! creative persona, and `xai` to the business persona.

use crate::config::ConsiliumConfig;
use crate::llm::{LLMClient, ModelFactory, ProviderId};
use crate::types::{ExpertReply, Result};
use std::collections::HashMap;
use tracing::{error, info};

/// A persona-bound expert holding its own model handle.
pub struct Expert {
    model: Box<dyn LLMClient>,
    style_prompt: String,
}

impl Expert {
    /// Bind `model` to `persona`. The persona text is folded into the
    /// system prompt used for every invocation.
    pub fn new(model: Box<dyn LLMClient>, persona: &str) -> Self {
        Self {
            model,
            style_prompt: format!("You are an expert with style: {}.", persona),
        }
    }

    /// Ask the expert to answer `query`.
    ///
    /// Infallible by contract: a provider error is folded into
    /// [`ExpertReply::Failed`] so one unavailable provider cannot abort the
    /// run.
    pub async fn invoke(&self, query: &str) -> ExpertReply {
        match self
            .model
            .generate_with_system(&self.style_prompt, query)
            .await
        {
            Ok(text) => ExpertReply::success(text),
            Err(e) => {
                error!(
                    provider = %self.model.provider(),
                    model = self.model.model_name(),
                    error = %e,
                    "Expert invocation failed"
                );
                ExpertReply::failed(e.to_string())
            }
        }
    }

    /// System prompt this expert answers under.
    pub fn style_prompt(&self) -> &str {
        &self.style_prompt
    }

    /// Provider backing this expert.
    pub fn provider(&self) -> ProviderId {
        self.model.provider()
    }
}

/// Logical map key for a provider's expert, e.g. `openai_expert`.
pub fn expert_key(provider: ProviderId) -> String {
    format!("{}_expert", provider.as_str())
}

/// Build the expert roster from configuration.
///
/// Returns a map keyed by [`expert_key`]. Construction is synchronous and
/// does not call any provider.
pub fn create_experts(
    config: &ConsiliumConfig,
    factory: &ModelFactory,
) -> Result<HashMap<String, Expert>> {
    let personas = &config.personas;
    let roster = [
        (ProviderId::OpenAI, personas.technical.as_str()),
        (ProviderId::Anthropic, personas.creative.as_str()),
        (ProviderId::XAi, personas.business.as_str()),
    ];

    let mut experts = HashMap::new();
    for (provider, persona) in roster {
        let settings = config.providers.for_provider(provider);
        let model = factory.create_model(provider, settings)?;
        info!(provider = %provider, model = %settings.model, "Created expert");
        experts.insert(expert_key(provider), Expert::new(model, persona));
    }

    Ok(experts)
}
