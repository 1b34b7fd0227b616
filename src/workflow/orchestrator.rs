//! Fan-out/fan-in workflow execution

use crate::config::{ConsiliumConfig, PromptsConfig};
use crate::experts::{Expert, create_experts, expert_key};
use crate::llm::{LLMClient, ModelFactory, ProviderId};
use crate::types::{AppError, ExpertReply, Result, WorkflowResults};
use crate::workflow::stages::AnalysisStage;
use std::collections::HashMap;
use std::fmt;
use tracing::info;

/// Replies from the full expert panel, one slot per roster member.
///
/// Slots are named rather than keyed so downstream formatting is
/// deterministic: every projection walks the panel in fixed display order.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpertResponses {
    pub openai: ExpertReply,
    pub anthropic: ExpertReply,
    pub xai: ExpertReply,
}

impl ExpertResponses {
    /// Display-name/reply pairs in fixed panel order.
    pub fn entries(&self) -> [(&'static str, &ExpertReply); 3] {
        [
            (ProviderId::OpenAI.display_name(), &self.openai),
            (ProviderId::Anthropic.display_name(), &self.anthropic),
            (ProviderId::XAi.display_name(), &self.xai),
        ]
    }

    /// Content for the consensus stage: one `Name: answer` line per expert.
    ///
    /// Failed experts contribute their sentinel text, so the supervisor
    /// always sees all three lines.
    pub fn consensus_content(&self) -> String {
        self.entries()
            .iter()
            .map(|(name, reply)| format!("{}: {}", name, reply.text()))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Flattened transcript consumed by the non-consensus stages: one
    /// `Name:` header line followed by the answer, per expert.
    pub fn combined_text(&self) -> String {
        self.entries()
            .iter()
            .map(|(name, reply)| format!("{}:\n{}", name, reply.text()))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Drives the two-phase pipeline: concurrent expert fan-out, then the five
/// supervisor analysis stages in order.
///
/// Built once per process; the expert models and the supervisor handle are
/// created at startup and reused by every request.
pub struct WorkflowRunner {
    openai_expert: Expert,
    anthropic_expert: Expert,
    xai_expert: Expert,
    supervisor: Box<dyn LLMClient>,
    prompts: PromptsConfig,
}

impl fmt::Debug for WorkflowRunner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WorkflowRunner").finish_non_exhaustive()
    }
}

impl WorkflowRunner {
    /// Assemble a runner from an expert map and a supervisor handle.
    ///
    /// The map must contain the full roster under the [`expert_key`] names;
    /// a missing entry is a configuration error surfaced at startup.
    pub fn new(
        mut experts: HashMap<String, Expert>,
        supervisor: Box<dyn LLMClient>,
        prompts: PromptsConfig,
    ) -> Result<Self> {
        let mut take = |provider: ProviderId| {
            experts.remove(&expert_key(provider)).ok_or_else(|| {
                AppError::Configuration(format!("Missing expert '{}'", expert_key(provider)))
            })
        };

        Ok(Self {
            openai_expert: take(ProviderId::OpenAI)?,
            anthropic_expert: take(ProviderId::Anthropic)?,
            xai_expert: take(ProviderId::XAi)?,
            supervisor,
            prompts,
        })
    }

    /// Build the runner from configuration: the expert roster and the
    /// supervisor model handle, each created exactly once.
    pub fn from_config(config: &ConsiliumConfig, factory: &ModelFactory) -> Result<Self> {
        let experts = create_experts(config, factory)?;

        let supervisor_provider = config.supervisor.provider_id()?;
        let supervisor = factory.create_model(supervisor_provider, &config.supervisor.settings)?;
        info!(
            provider = %supervisor_provider,
            model = %config.supervisor.settings.model,
            "Created supervisor"
        );

        Self::new(experts, supervisor, config.prompts.clone())
    }

    /// Fan the query out to the whole panel and wait for every reply.
    ///
    /// All three invocations make progress concurrently on the current
    /// task; the slowest expert bounds the phase. Failures arrive as
    /// [`ExpertReply::Failed`] slots, never as errors.
    pub async fn gather_expert_responses(&self, query: &str) -> ExpertResponses {
        let (openai, anthropic, xai) = futures::join!(
            self.openai_expert.invoke(query),
            self.anthropic_expert.invoke(query),
            self.xai_expert.invoke(query),
        );

        ExpertResponses {
            openai,
            anthropic,
            xai,
        }
    }

    /// Run one supervisor analysis stage over `content`.
    ///
    /// A supervisor failure is fatal to the run, unlike expert failures.
    pub async fn analyze(&self, stage: AnalysisStage, content: &str) -> Result<String> {
        info!(stage = %stage, "Running analysis stage");

        let system = stage.system_prompt(&self.prompts);
        self.supervisor
            .generate_with_system(&system, content)
            .await
            .map_err(|e| AppError::Stage {
                stage: stage.name(),
                message: e.to_string(),
            })
    }

    /// Execute the complete pipeline for `query` and aggregate every stage
    /// output.
    pub async fn run_full_workflow(&self, query: &str) -> Result<WorkflowResults> {
        info!("Dispatching query to expert panel");
        let responses = self.gather_expert_responses(query).await;
        info!(
            openai_ok = responses.openai.is_success(),
            anthropic_ok = responses.anthropic.is_success(),
            xai_ok = responses.xai.is_success(),
            "Expert responses collected"
        );

        let consensus_analysis = self
            .analyze(AnalysisStage::Consensus, &responses.consensus_content())
            .await?;

        // Stages 2-5 share one flattened transcript, built once.
        let combined = responses.combined_text();
        let charts_mindmaps = self.analyze(AnalysisStage::Charts, &combined).await?;
        let analysis_tools = self.analyze(AnalysisStage::Tools, &combined).await?;
        let related_questions = self.analyze(AnalysisStage::Questions, &combined).await?;
        let meta_analysis = self.analyze(AnalysisStage::Meta, &combined).await?;

        info!("Workflow complete");

        Ok(WorkflowResults {
            openai: responses.openai,
            anthropic: responses.anthropic,
            xai: responses.xai,
            consensus_analysis,
            charts_mindmaps,
            analysis_tools,
            related_questions,
            meta_analysis,
        })
    }
}
