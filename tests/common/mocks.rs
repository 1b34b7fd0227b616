//! Mock implementations for testing.
//!
//! Provides a configurable mock LLM client plus a scripted supervisor that
//! records every call, so workflow tests can run without any network
//! dependencies.

use async_trait::async_trait;
use consilium::llm::{LLMClient, ProviderId};
use consilium::types::{AppError, Result};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

/// Mock LLM client with a fixed response.
///
/// Can be configured to answer after a delay or to simulate a provider
/// failure.
///
/// # Examples
///
/// ```ignore
/// let client = MockLLMClient::new("Hello, world!");
/// let slow = MockLLMClient::new("later").with_delay(Duration::from_millis(30));
/// let broken = MockLLMClient::failing();
/// ```
#[derive(Clone)]
pub struct MockLLMClient {
    response: String,
    provider: ProviderId,
    delay: Option<Duration>,
    should_fail: bool,
}

impl MockLLMClient {
    /// Create a mock client that returns the given response.
    pub fn new(response: &str) -> Self {
        Self {
            response: response.to_string(),
            provider: ProviderId::OpenAI,
            delay: None,
            should_fail: false,
        }
    }

    /// Create a mock client that always returns an error.
    pub fn failing() -> Self {
        Self {
            response: String::new(),
            provider: ProviderId::OpenAI,
            delay: None,
            should_fail: true,
        }
    }

    /// Report `provider` from the client.
    pub fn with_provider(mut self, provider: ProviderId) -> Self {
        self.provider = provider;
        self
    }

    /// Sleep for `delay` before answering.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

#[async_trait]
impl LLMClient for MockLLMClient {
    async fn generate_with_system(&self, _system: &str, _prompt: &str) -> Result<String> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        if self.should_fail {
            return Err(AppError::LLM("Mock LLM failure".to_string()));
        }

        Ok(self.response.clone())
    }

    fn model_name(&self) -> &str {
        "mock-model"
    }

    fn provider(&self) -> ProviderId {
        self.provider
    }
}

/// One recorded supervisor invocation.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub system: String,
    pub prompt: String,
    pub started_at: Instant,
    pub ended_at: Instant,
}

/// Scripted supervisor client.
///
/// Plays back a queue of responses call by call and records every call it
/// receives. Grab the call log with [`ScriptedSupervisor::calls`] before
/// boxing the client into a runner.
pub struct ScriptedSupervisor {
    script: Mutex<VecDeque<std::result::Result<String, String>>>,
    fallback: Option<String>,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl ScriptedSupervisor {
    /// Supervisor answering every call with the same text.
    pub fn answering(response: &str) -> Self {
        Self {
            script: Mutex::new(VecDeque::new()),
            fallback: Some(response.to_string()),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Supervisor playing back `script` in order; `Err` entries become
    /// provider errors. Calls past the end of the script fail.
    pub fn scripted(script: Vec<std::result::Result<&str, &str>>) -> Self {
        Self {
            script: Mutex::new(
                script
                    .into_iter()
                    .map(|entry| entry.map(str::to_string).map_err(str::to_string))
                    .collect(),
            ),
            fallback: None,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Shared handle to the call log.
    pub fn calls(&self) -> Arc<Mutex<Vec<RecordedCall>>> {
        Arc::clone(&self.calls)
    }
}

#[async_trait]
impl LLMClient for ScriptedSupervisor {
    async fn generate_with_system(&self, system: &str, prompt: &str) -> Result<String> {
        let started_at = Instant::now();

        let outcome = match self.script.lock().unwrap().pop_front() {
            Some(entry) => entry,
            None => match &self.fallback {
                Some(text) => Ok(text.clone()),
                None => Err("Script exhausted".to_string()),
            },
        };

        self.calls.lock().unwrap().push(RecordedCall {
            system: system.to_string(),
            prompt: prompt.to_string(),
            started_at,
            ended_at: Instant::now(),
        });

        outcome.map_err(AppError::LLM)
    }

    fn model_name(&self) -> &str {
        "scripted-supervisor"
    }

    fn provider(&self) -> ProviderId {
        ProviderId::Google
    }
}
