use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use tracing::{error, info, instrument};

use super::state::{WorkflowResult, WorkflowState};

/// Trait for workflow implementations
#[async_trait]
pub trait Workflow: Send + Sync + 'static {
    /// Run the workflow
    async fn run(&mut self) -> Result<WorkflowResult>;

    /// Get the workflow state
    fn state(&self) -> &WorkflowState;

    /// Get mutable reference to the workflow state
    fn state_mut(&mut self) -> &mut WorkflowState;

    /// Update the workflow status
    async fn update_status(&mut self, status: &str) {
        self.state_mut().update_status(status);
    }
}

/// Execute a workflow to completion with logging and status bookkeeping
#[instrument(skip(workflow), fields(workflow.type = std::any::type_name::<W>()))]
pub async fn execute_workflow<W: Workflow>(mut workflow: W) -> Result<WorkflowResult> {
    let started_at = Utc::now();
    match workflow.state().name.as_deref() {
        Some(name) => info!("Starting workflow: {}", name),
        None => info!("Starting workflow"),
    }

    // Mark workflow as running
    workflow.update_status("running").await;

    // Execute the workflow
    match workflow.run().await {
        Ok(mut result) => {
            info!("Workflow completed successfully");
            workflow.update_status("completed").await;

            // Stamp timings if the workflow did not set them itself
            if result.start_time.is_none() {
                result.start_time = Some(started_at);
            }
            if result.end_time.is_none() {
                result.end_time = Some(Utc::now());
            }

            Ok(result)
        }
        Err(err) => {
            error!("Workflow failed: {}", err);
            workflow
                .state_mut()
                .record_error("WorkflowError", &err.to_string());
            workflow.update_status("failed").await;
            Err(err)
        }
    }
}
