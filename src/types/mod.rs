use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ============= API Request/Response Types =============

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AnalyzeRequest {
    pub query: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AnalyzeResponse {
    pub query: String,
    pub results: WorkflowResults,
    pub duration_ms: u64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

// ============= Workflow Types =============

/// Outcome of a single expert invocation.
///
/// Expert calls are fail-soft: a failure is carried here as structured data
/// instead of aborting the fan-out phase. Downstream analysis stages consume
/// the textual projection ([`ExpertReply::text`]), which substitutes a fixed
/// sentinel for failed replies so the pipeline can proceed on degraded input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ExpertReply {
    Success { text: String },
    Failed { reason: String },
}

impl ExpertReply {
    /// Text substituted for a failed expert in downstream stage content.
    pub const FAILURE_TEXT: &'static str = "Error: Could not invoke expert";

    pub fn success(text: impl Into<String>) -> Self {
        Self::Success { text: text.into() }
    }

    pub fn failed(reason: impl Into<String>) -> Self {
        Self::Failed {
            reason: reason.into(),
        }
    }

    /// The reply text as seen by the analysis stages.
    pub fn text(&self) -> &str {
        match self {
            Self::Success { text } => text,
            Self::Failed { .. } => Self::FAILURE_TEXT,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

/// Aggregate produced by one full workflow run.
///
/// The shape is fixed: three tagged expert replies plus five analysis
/// outputs. There is no partial-success variant; a run either yields a fully
/// populated aggregate or fails with a stage error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct WorkflowResults {
    pub openai: ExpertReply,
    pub anthropic: ExpertReply,
    pub xai: ExpertReply,
    pub consensus_analysis: String,
    pub charts_mindmaps: String,
    pub analysis_tools: String,
    pub related_questions: String,
    pub meta_analysis: String,
}

// ============= Error Types =============

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Unknown provider: {0}")]
    UnknownProvider(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("LLM error: {0}")]
    LLM(String),

    #[error("Analysis stage '{stage}' failed: {message}")]
    Stage {
        stage: &'static str,
        message: String,
    },

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::UnknownProvider(_) => {
                (axum::http::StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
            AppError::Configuration(_) => {
                (axum::http::StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
            AppError::LLM(_) => (axum::http::StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
            AppError::Stage { .. } => {
                (axum::http::StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
            AppError::InvalidInput(msg) => (axum::http::StatusCode::UNPROCESSABLE_ENTITY, msg),
        };

        let body = serde_json::json!({
            "error": message
        });

        (status, axum::Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
