//! The example workflow: generate a random number, then check its parity.
//!
//! Two sequential tasks wired by a single data dependency: the check task
//! receives the exact integer produced by the generation task for that run.

use std::collections::HashMap;

use anyhow::Result;
use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::json;
use tracing::info;

use crate::number::{self, Parity};
use crate::workflow::{task, Workflow, WorkflowResult, WorkflowState};

/// A workflow that generates a random number between 1 and 100 and
/// reports whether it is even or odd.
#[derive(Debug)]
pub struct RandomNumberWorkflow {
    state: WorkflowState,
    seed: Option<u64>,
    generated: Option<i64>,
    classification: Option<Parity>,
}

impl RandomNumberWorkflow {
    /// Create a new workflow using the thread-local RNG.
    pub fn new() -> Self {
        Self::build(None)
    }

    /// Create a workflow with a fixed RNG seed for reproducible runs.
    pub fn with_seed(seed: u64) -> Self {
        Self::build(Some(seed))
    }

    fn build(seed: Option<u64>) -> Self {
        let mut metadata = HashMap::new();
        metadata.insert(
            "description".to_string(),
            json!("A simple workflow that generates and checks a random number"),
        );
        metadata.insert("tags".to_string(), json!(["random_number"]));

        Self {
            state: WorkflowState::new(Some("RandomNumberWorkflow".to_string()), Some(metadata)),
            seed,
            generated: None,
            classification: None,
        }
    }

    /// The number produced by the generation step, once it has run.
    pub fn generated_number(&self) -> Option<i64> {
        self.generated
    }

    /// The parity reported by the check step, once it has run.
    pub fn classification(&self) -> Option<Parity> {
        self.classification
    }

    // Create the generation task
    fn create_generate_task(&self) -> task::WorkflowTask<i64> {
        let seed = self.seed;

        task::task("generate_random_number", move || async move {
            let number = match seed {
                Some(seed) => number::generate(&mut StdRng::seed_from_u64(seed)),
                None => number::generate(&mut rand::thread_rng()),
            };

            info!("Generated random number: {}", number);
            Ok(number)
        })
    }

    // Create the check task for a generated number
    fn create_check_task(&self, number: i64) -> task::WorkflowTask<Parity> {
        task::task("check_number", move || async move {
            let parity = Parity::of(number);
            info!("{}", number::classification_message(number));
            Ok(parity)
        })
    }
}

impl Default for RandomNumberWorkflow {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Workflow for RandomNumberWorkflow {
    async fn run(&mut self) -> Result<WorkflowResult> {
        self.state.set_status("generating");
        let generate_task = self.create_generate_task();
        let number = generate_task.execute().await?;
        self.generated = Some(number);
        self.state.set_metadata("generated_number", json!(number));

        self.state.set_status("checking");
        let check_task = self.create_check_task(number);
        let parity = check_task.execute().await?;
        self.classification = Some(parity);
        self.state.set_metadata("parity", json!(parity.as_str()));

        self.state.set_status("completed");

        Ok(WorkflowResult::success(json!({
            "number": number,
            "parity": parity.as_str(),
        })))
    }

    fn state(&self) -> &WorkflowState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut WorkflowState {
        &mut self.state
    }
}
