//! Minimal workflow harness for sequential task execution.
//!
//! This module provides just enough orchestration to express a linear
//! workflow: named tasks, a state record, and a driver that runs a
//! workflow to completion with logging. There is no scheduling, no
//! retrying, and no parallelism.

/// Workflow trait and execution driver
pub mod engine;
/// State management for workflows
pub mod state;
/// Task definition and execution for workflows
pub mod task;

// Re-export key components
pub use engine::{execute_workflow, Workflow};
pub use state::{WorkflowResult, WorkflowState};
pub use task::{task, WorkflowTask};
