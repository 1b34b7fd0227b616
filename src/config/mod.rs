//! TOML-based configuration for Consilium
//!
//! Configuration is loaded once at startup from a TOML file
//! (`consilium.toml` by default) and is immutable afterwards: the expert
//! assembly and supervisor handle are built from it exactly once per
//! process. API credentials are deliberately kept out of the file and come
//! from the environment instead (see [`ApiKeys`]).

use crate::llm::ProviderId;
use crate::types::{AppError, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;

/// Root configuration structure loaded from consilium.toml
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsiliumConfig {
    #[serde(default)]
    pub server: ServerConfig,

    /// Per-provider model settings for the closed provider set
    pub providers: ProvidersConfig,

    /// Supervisor model used by the analysis stages
    pub supervisor: SupervisorConfig,

    /// Persona strings bound to the three experts
    pub personas: PersonasConfig,

    /// Task prompts for the analysis stages; absent keys fall back to a
    /// generated instruction
    #[serde(default)]
    pub prompts: PromptsConfig,
}

impl ConsiliumConfig {
    /// Load and validate configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|e| {
            AppError::Configuration(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: Self = toml::from_str(&raw).map_err(|e| {
            AppError::Configuration(format!(
                "Failed to parse config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Startup validation beyond what serde enforces structurally.
    pub fn validate(&self) -> Result<()> {
        self.supervisor.provider_id()?;

        for (name, settings) in self
            .providers
            .entries()
            .into_iter()
            .chain([("supervisor", &self.supervisor.settings)])
        {
            if settings.model.trim().is_empty() {
                return Err(AppError::Configuration(format!(
                    "'{}' has an empty model identifier",
                    name
                )));
            }
        }

        Ok(())
    }
}

// ============= Server Configuration =============

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            log_level: default_log_level(),
        }
    }
}

// ============= Provider Configuration =============

/// Model settings for one provider: which model to call and how.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelSettings {
    /// Model name/identifier to use with the provider
    pub model: String,

    #[serde(default = "default_temperature")]
    pub temperature: f32,

    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
}

fn default_temperature() -> f32 {
    0.0
}

fn default_max_tokens() -> u32 {
    512
}

/// Settings for every provider in the closed set.
///
/// The set is fixed, so this is a struct rather than a map: a config file
/// must describe all four providers and cannot introduce new ones.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProvidersConfig {
    pub openai: ModelSettings,
    pub anthropic: ModelSettings,
    pub xai: ModelSettings,
    pub google: ModelSettings,
}

impl ProvidersConfig {
    pub fn for_provider(&self, provider: ProviderId) -> &ModelSettings {
        match provider {
            ProviderId::OpenAI => &self.openai,
            ProviderId::Anthropic => &self.anthropic,
            ProviderId::XAi => &self.xai,
            ProviderId::Google => &self.google,
        }
    }

    fn entries(&self) -> [(&'static str, &ModelSettings); 4] {
        [
            ("openai", &self.openai),
            ("anthropic", &self.anthropic),
            ("xai", &self.xai),
            ("google", &self.google),
        ]
    }
}

// ============= Supervisor Configuration =============

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupervisorConfig {
    /// Provider identifier the supervisor model is created from
    #[serde(default = "default_supervisor_provider")]
    pub provider: String,

    #[serde(flatten)]
    pub settings: ModelSettings,
}

fn default_supervisor_provider() -> String {
    "google".to_string()
}

impl SupervisorConfig {
    pub fn provider_id(&self) -> Result<ProviderId> {
        self.provider.parse()
    }
}

// ============= Persona Configuration =============

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonasConfig {
    pub technical: String,
    pub creative: String,
    pub business: String,
}

// ============= Prompt Configuration =============

/// Task prompts for the five analysis stages.
///
/// Every key is optional; a missing key never fails configuration loading.
/// Stage task resolution (including the generated fallback) lives on
/// [`crate::workflow::AnalysisStage`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PromptsConfig {
    pub consensus_task: Option<String>,
    pub charts_task: Option<String>,
    pub tools_task: Option<String>,
    pub questions_task: Option<String>,
    pub meta_task: Option<String>,
}

// ============= API Credentials =============

/// Credential mapping for the provider set, read from the environment.
///
/// Missing entries stay `None` and are passed through as absent credentials;
/// the provider rejects the call at invocation time. Nothing is validated
/// here.
#[derive(Debug, Clone, Default)]
pub struct ApiKeys {
    pub openai: Option<String>,
    pub anthropic: Option<String>,
    pub xai: Option<String>,
    pub google: Option<String>,
}

impl ApiKeys {
    pub fn from_env() -> Self {
        Self {
            openai: env::var("OPENAI_API_KEY").ok(),
            anthropic: env::var("ANTHROPIC_API_KEY").ok(),
            xai: env::var("XAI_API_KEY").ok(),
            google: env::var("GOOGLE_API_KEY").ok(),
        }
    }

    pub fn for_provider(&self, provider: ProviderId) -> Option<&str> {
        match provider {
            ProviderId::OpenAI => self.openai.as_deref(),
            ProviderId::Anthropic => self.anthropic.as_deref(),
            ProviderId::XAi => self.xai.as_deref(),
            ProviderId::Google => self.google.as_deref(),
        }
    }
}
