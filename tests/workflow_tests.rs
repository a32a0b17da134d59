use anyhow::{anyhow, Result};
use async_trait::async_trait;

use random_number_workflow::number::{self, Parity};
use random_number_workflow::random_number::RandomNumberWorkflow;
use random_number_workflow::workflow::{
    execute_workflow, task, Workflow, WorkflowResult, WorkflowState,
};

#[tokio::test]
async fn test_task_execution_returns_value() {
    let task = task::task("double", || async { Ok(21 * 2) });
    assert_eq!(task.name(), "double");
    assert!(!task.id().is_empty());

    let value = task.execute().await.unwrap();
    assert_eq!(value, 42);
}

#[tokio::test]
async fn test_task_execution_propagates_errors() {
    let task = task::task::<i64, _, _>("broken", || async { Err(anyhow!("boom")) });

    let result = task.execute().await;
    assert_eq!(result.unwrap_err().to_string(), "boom");
}

#[test]
fn test_workflow_state_tracking() {
    let mut state = WorkflowState::new(Some("Test".to_string()), None);
    assert_eq!(state.name.as_deref(), Some("Test"));
    assert_eq!(state.status(), "initialized");
    assert!(state.updated_at.is_none());

    state.set_status("running");
    assert_eq!(state.status(), "running");
    assert!(state.updated_at.is_some());

    state.set_metadata("answer", 42);
    assert_eq!(state.metadata()["answer"], serde_json::json!(42));

    state.record_error("WorkflowError", "something broke");
    let error = state.error.as_ref().unwrap();
    assert_eq!(error["type"], serde_json::json!("WorkflowError"));
    assert_eq!(error["message"], serde_json::json!("something broke"));
}

#[test]
fn test_workflow_result_success_and_failure() {
    let success = WorkflowResult::success("done");
    assert!(success.is_success());
    assert!(success.error().is_none());
    assert_eq!(success.value, Some(serde_json::json!("done")));

    let failed = WorkflowResult::failed("it broke");
    assert!(!failed.is_success());
    assert_eq!(failed.error().as_deref(), Some("it broke"));
    assert_eq!(failed.output(), "No output available");
}

#[tokio::test]
async fn test_seeded_workflow_is_deterministic() {
    let mut first = RandomNumberWorkflow::with_seed(1234);
    let mut second = RandomNumberWorkflow::with_seed(1234);

    first.run().await.unwrap();
    second.run().await.unwrap();

    let number = first.generated_number().unwrap();
    assert!((number::MIN..=number::MAX).contains(&number));
    assert_eq!(first.generated_number(), second.generated_number());
    assert_eq!(first.classification(), second.classification());
}

#[tokio::test]
async fn test_check_step_receives_the_generated_number() {
    let mut workflow = RandomNumberWorkflow::with_seed(99);
    workflow.run().await.unwrap();

    let number = workflow.generated_number().unwrap();
    let parity = workflow.classification().unwrap();

    // The classification must be the parity of the value the generator produced
    assert_eq!(parity, Parity::of(number));

    // And the state metadata must agree with both steps
    let metadata = workflow.state().metadata();
    assert_eq!(metadata["generated_number"], serde_json::json!(number));
    assert_eq!(metadata["parity"], serde_json::json!(parity.as_str()));
    assert_eq!(workflow.state().status(), "completed");
    assert_eq!(
        workflow.state().name.as_deref(),
        Some("RandomNumberWorkflow")
    );
}

#[tokio::test]
async fn test_execute_workflow_end_to_end() {
    let workflow = RandomNumberWorkflow::with_seed(7);

    let result = execute_workflow(workflow).await.unwrap();
    assert!(result.is_success());
    assert!(result.duration_ms().is_some());

    let value = result.value.unwrap();
    let number = value["number"].as_i64().unwrap();
    assert!((number::MIN..=number::MAX).contains(&number));

    let expected_parity = if number % 2 == 0 { "even" } else { "odd" };
    assert_eq!(value["parity"].as_str().unwrap(), expected_parity);
}

// A workflow whose run always fails, for driver error handling
struct FailingWorkflow {
    state: WorkflowState,
}

#[async_trait]
impl Workflow for FailingWorkflow {
    async fn run(&mut self) -> Result<WorkflowResult> {
        Err(anyhow!("nothing to generate"))
    }

    fn state(&self) -> &WorkflowState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut WorkflowState {
        &mut self.state
    }
}

#[tokio::test]
async fn test_execute_workflow_surfaces_failures() {
    let workflow = FailingWorkflow {
        state: WorkflowState::new(Some("FailingWorkflow".to_string()), None),
    };

    let result = execute_workflow(workflow).await;
    assert_eq!(result.unwrap_err().to_string(), "nothing to generate");
}
