//! LLM provider clients and abstractions
//!
//! This module provides a unified interface for the four providers the
//! system calls. Provider-specific implementations hide behind a common
//! trait, so the rest of the application works with any supported LLM.
//!
//! # Architecture
//!
//! The module follows a factory pattern:
//! - [`LLMClient`] - The core trait that all providers implement
//! - [`ProviderId`] - The closed provider registry
//! - [`ModelFactory`] - Creates boxed clients from provider id plus settings
//!
//! # Example
//!
//! ```ignore
//! use consilium::config::ApiKeys;
//! use consilium::llm::{ModelFactory, ProviderId};
//!
//! let factory = ModelFactory::new(ApiKeys::from_env());
//! let client = factory.create_model(ProviderId::OpenAI, &settings)?;
//!
//! let answer = client.generate_with_system("Be brief.", "What is 2+2?").await?;
//! ```

/// Core LLM client trait, provider registry, and factory.
pub mod client;

/// Anthropic Messages API client.
pub mod anthropic;
/// Google Gemini generateContent client.
pub mod gemini;
/// OpenAI-compatible chat completion client, shared with xAI.
pub mod openai;

pub use anthropic::AnthropicClient;
pub use client::{LLMClient, ModelFactory, ProviderId};
pub use gemini::GeminiClient;
pub use openai::{OpenAIClient, XAI_API_BASE};
