//! Workflow integration tests using mock providers.

mod common;

use common::mocks::{MockLLMClient, RecordedCall, ScriptedSupervisor};
use consilium::config::PromptsConfig;
use consilium::experts::{Expert, expert_key};
use consilium::llm::ProviderId;
use consilium::types::ExpertReply;
use consilium::workflow::WorkflowRunner;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

fn panel(
    openai: MockLLMClient,
    anthropic: MockLLMClient,
    xai: MockLLMClient,
) -> HashMap<String, Expert> {
    let mut experts = HashMap::new();
    experts.insert(
        expert_key(ProviderId::OpenAI),
        Expert::new(
            Box::new(openai.with_provider(ProviderId::OpenAI)),
            "technical",
        ),
    );
    experts.insert(
        expert_key(ProviderId::Anthropic),
        Expert::new(
            Box::new(anthropic.with_provider(ProviderId::Anthropic)),
            "creative",
        ),
    );
    experts.insert(
        expert_key(ProviderId::XAi),
        Expert::new(Box::new(xai.with_provider(ProviderId::XAi)), "business"),
    );
    experts
}

fn fixed_panel() -> HashMap<String, Expert> {
    panel(
        MockLLMClient::new("A1"),
        MockLLMClient::new("A2"),
        MockLLMClient::new("A3"),
    )
}

fn runner(
    experts: HashMap<String, Expert>,
    supervisor: ScriptedSupervisor,
) -> (WorkflowRunner, Arc<Mutex<Vec<RecordedCall>>>) {
    let calls = supervisor.calls();
    let runner = WorkflowRunner::new(experts, Box::new(supervisor), PromptsConfig::default())
        .expect("full roster");
    (runner, calls)
}

#[tokio::test(start_paused = true)]
async fn test_fan_out_waits_for_the_slowest_expert() {
    let experts = panel(
        MockLLMClient::new("A1").with_delay(Duration::from_millis(30)),
        MockLLMClient::new("A2").with_delay(Duration::from_millis(10)),
        MockLLMClient::new("A3").with_delay(Duration::from_millis(20)),
    );
    let (runner, _calls) = runner(experts, ScriptedSupervisor::answering("ok"));

    let start = tokio::time::Instant::now();
    let responses = runner.gather_expert_responses("q").await;
    let elapsed = start.elapsed();

    assert_eq!(responses.openai, ExpertReply::success("A1"));
    assert_eq!(responses.anthropic, ExpertReply::success("A2"));
    assert_eq!(responses.xai, ExpertReply::success("A3"));

    // Concurrent fan-out is bounded by the slowest expert, not the sum.
    assert!(elapsed >= Duration::from_millis(30));
    assert!(elapsed < Duration::from_millis(60));
}

#[tokio::test]
async fn test_consensus_stage_receives_exact_content() {
    let (runner, calls) = runner(fixed_panel(), ScriptedSupervisor::answering("ok"));

    runner
        .run_full_workflow("Explain quantum entanglement")
        .await
        .unwrap();

    let calls = calls.lock().unwrap();
    assert_eq!(calls[0].prompt, "OpenAI: A1\nAnthropic: A2\nxAI: A3");
    assert_eq!(
        calls[0].system,
        "You are a supervisor analyzing consensus. Perform consensus analysis."
    );
}

#[tokio::test]
async fn test_later_stages_share_the_flattened_transcript() {
    let (runner, calls) = runner(fixed_panel(), ScriptedSupervisor::answering("ok"));

    runner.run_full_workflow("q").await.unwrap();

    let calls = calls.lock().unwrap();
    assert_eq!(calls.len(), 5);
    for call in &calls[1..] {
        assert_eq!(call.prompt, "OpenAI:\nA1\nAnthropic:\nA2\nxAI:\nA3");
    }
}

#[tokio::test]
async fn test_stages_run_sequentially_in_pipeline_order() {
    let (runner, calls) = runner(fixed_panel(), ScriptedSupervisor::answering("ok"));

    runner.run_full_workflow("q").await.unwrap();

    let calls = calls.lock().unwrap();
    let stages = ["consensus", "charts", "tools", "questions", "meta"];
    for (call, stage) in calls.iter().zip(stages) {
        assert!(
            call.system
                .starts_with(&format!("You are a supervisor analyzing {}.", stage)),
            "unexpected system prompt: {}",
            call.system
        );
    }

    for pair in calls.windows(2) {
        assert!(pair[0].ended_at <= pair[1].started_at);
    }
}

#[tokio::test]
async fn test_expert_failure_degrades_to_sentinel() {
    let experts = panel(
        MockLLMClient::new("A1"),
        MockLLMClient::failing(),
        MockLLMClient::new("A3"),
    );
    let (runner, calls) = runner(experts, ScriptedSupervisor::answering("ok"));

    let results = runner.run_full_workflow("q").await.unwrap();

    assert!(!results.anthropic.is_success());
    assert_eq!(results.anthropic.text(), ExpertReply::FAILURE_TEXT);

    // The supervisor still sees all three slots, with the sentinel in place.
    let calls = calls.lock().unwrap();
    assert_eq!(
        calls[0].prompt,
        "OpenAI: A1\nAnthropic: Error: Could not invoke expert\nxAI: A3"
    );
}

#[tokio::test]
async fn test_aggregate_contains_every_stage_output() {
    let supervisor = ScriptedSupervisor::scripted(vec![
        Ok("S-consensus"),
        Ok("S-charts"),
        Ok("S-tools"),
        Ok("S-questions"),
        Ok("S-meta"),
    ]);
    let (runner, _calls) = runner(fixed_panel(), supervisor);

    let results = runner.run_full_workflow("q").await.unwrap();

    assert_eq!(results.openai, ExpertReply::success("A1"));
    assert_eq!(results.anthropic, ExpertReply::success("A2"));
    assert_eq!(results.xai, ExpertReply::success("A3"));
    assert_eq!(results.consensus_analysis, "S-consensus");
    assert_eq!(results.charts_mindmaps, "S-charts");
    assert_eq!(results.analysis_tools, "S-tools");
    assert_eq!(results.related_questions, "S-questions");
    assert_eq!(results.meta_analysis, "S-meta");
}

#[tokio::test]
async fn test_stage_failure_aborts_the_run() {
    let supervisor =
        ScriptedSupervisor::scripted(vec![Ok("S1"), Ok("S2"), Err("quota exhausted")]);
    let calls = supervisor.calls();
    let (runner, _) = runner(fixed_panel(), supervisor);

    let err = runner.run_full_workflow("q").await.unwrap_err();

    assert!(err.to_string().contains("tools"));
    assert!(err.to_string().contains("quota exhausted"));

    // Later stages were never invoked.
    assert_eq!(calls.lock().unwrap().len(), 3);
}

#[tokio::test]
async fn test_configured_prompt_reaches_the_supervisor() {
    let supervisor = ScriptedSupervisor::answering("ok");
    let calls = supervisor.calls();
    let prompts = PromptsConfig {
        consensus_task: Some("List only points of full agreement.".to_string()),
        ..Default::default()
    };
    let runner = WorkflowRunner::new(fixed_panel(), Box::new(supervisor), prompts).unwrap();

    runner.run_full_workflow("q").await.unwrap();

    let calls = calls.lock().unwrap();
    assert_eq!(
        calls[0].system,
        "You are a supervisor analyzing consensus. List only points of full agreement."
    );
    // Unconfigured stages keep the generated instruction.
    assert_eq!(
        calls[1].system,
        "You are a supervisor analyzing charts. Perform charts analysis."
    );
}
