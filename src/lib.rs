//! # Consilium - Multi-Expert LLM Analysis Server
//!
//! A fan-out/fan-in analysis service: one query is answered concurrently by
//! three persona-bound experts on different LLM providers, then a supervisor
//! model runs five analysis stages over the collected answers and the
//! results are aggregated into a single record.
//!
//! ## Overview
//!
//! Consilium can be used in two ways:
//!
//! 1. **As a standalone server** - Run the `consilium-server` binary
//! 2. **As a library** - Drive the workflow from your own Rust project
//!
//! ### Basic Example
//!
//! ```rust,ignore
//! use consilium::config::{ApiKeys, ConsiliumConfig};
//! use consilium::llm::ModelFactory;
//! use consilium::workflow::WorkflowRunner;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ConsiliumConfig::load("consilium.toml")?;
//!     let factory = ModelFactory::new(ApiKeys::from_env());
//!     let runner = WorkflowRunner::from_config(&config, &factory)?;
//!
//!     let results = runner.run_full_workflow("Explain quantum entanglement").await?;
//!     println!("{}", results.consensus_analysis);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! - [`api`] - REST API handlers and routes
//! - [`config`] - TOML configuration and API credentials
//! - [`experts`] - Persona-bound expert panel
//! - [`llm`] - LLM client implementations
//! - [`workflow`] - Fan-out/fan-in workflow execution
//! - [`types`] - Common types and error handling
//!
//! ## Failure Model
//!
//! Expert calls are fail-soft: a provider error degrades that expert's slot
//! to a sentinel and the run continues. Supervisor stages are fail-hard: a
//! stage error aborts the run and names the failing stage.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

/// HTTP API handlers and routes.
pub mod api;
/// TOML configuration and API credentials.
pub mod config;
/// Persona-bound expert panel.
pub mod experts;
/// LLM provider clients and abstractions.
pub mod llm;
/// Core types (requests, responses, errors).
pub mod types;
/// Fan-out/fan-in workflow execution.
pub mod workflow;

// Re-export commonly used types
pub use config::{ApiKeys, ConsiliumConfig};
pub use experts::{Expert, create_experts};
pub use llm::{LLMClient, ModelFactory, ProviderId};
pub use types::{AppError, ExpertReply, Result, WorkflowResults};
pub use workflow::{AnalysisStage, ExpertResponses, WorkflowRunner};

use std::sync::Arc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Loaded configuration, immutable for the process lifetime
    pub config: Arc<ConsiliumConfig>,
    /// Workflow runner holding the expert panel and the supervisor handle
    pub workflow: Arc<WorkflowRunner>,
}
