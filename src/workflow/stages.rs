//! Analysis stage definitions

use crate::config::PromptsConfig;
use std::fmt;

/// The five supervisor analysis stages, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnalysisStage {
    /// Points of agreement across the expert answers.
    Consensus,
    /// Chart and mindmap suggestions.
    Charts,
    /// Analysis tool recommendations.
    Tools,
    /// Related follow-up questions.
    Questions,
    /// Meta-analysis over the whole response set.
    Meta,
}

impl AnalysisStage {
    /// Every stage, in the order the pipeline runs them.
    pub const ALL: [AnalysisStage; 5] = [
        AnalysisStage::Consensus,
        AnalysisStage::Charts,
        AnalysisStage::Tools,
        AnalysisStage::Questions,
        AnalysisStage::Meta,
    ];

    /// Stage name as it appears in prompts, logs, and error messages.
    pub fn name(&self) -> &'static str {
        match self {
            AnalysisStage::Consensus => "consensus",
            AnalysisStage::Charts => "charts",
            AnalysisStage::Tools => "tools",
            AnalysisStage::Questions => "questions",
            AnalysisStage::Meta => "meta",
        }
    }

    /// Task instruction for this stage.
    ///
    /// Uses the configured prompt when present, otherwise a generated
    /// generic instruction. Never fails on an absent key.
    pub fn task(&self, prompts: &PromptsConfig) -> String {
        let configured = match self {
            AnalysisStage::Consensus => prompts.consensus_task.as_deref(),
            AnalysisStage::Charts => prompts.charts_task.as_deref(),
            AnalysisStage::Tools => prompts.tools_task.as_deref(),
            AnalysisStage::Questions => prompts.questions_task.as_deref(),
            AnalysisStage::Meta => prompts.meta_task.as_deref(),
        };

        match configured {
            Some(task) => task.to_string(),
            None => format!("Perform {} analysis.", self.name()),
        }
    }

    /// System prompt the supervisor receives for this stage.
    pub fn system_prompt(&self, prompts: &PromptsConfig) -> String {
        format!(
            "You are a supervisor analyzing {}. {}",
            self.name(),
            self.task(prompts)
        )
    }
}

impl fmt::Display for AnalysisStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
