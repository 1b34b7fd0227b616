//! Two-phase analysis workflow
//!
//! Phase 1 fans the query out to the expert panel concurrently and waits
//! for the complete response set. Phase 2 runs the five supervisor analysis
//! stages one after another and aggregates every output into a
//! [`crate::types::WorkflowResults`].
//!
//! The phases treat failure differently: an expert failure degrades its
//! slot to a sentinel and the run continues, while a supervisor stage
//! failure aborts the run.

/// Workflow runner and expert response aggregation.
pub mod orchestrator;
/// Analysis stage registry and prompt derivation.
pub mod stages;

pub use orchestrator::{ExpertResponses, WorkflowRunner};
pub use stages::AnalysisStage;
