#![deny(missing_docs)]
#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::bare_urls)]

//! An example workflow built on a minimal task-orchestration harness.
//!
//! The workflow has two sequential steps: generate a pseudo-random integer
//! between 1 and 100, then check whether it is even or odd and report the
//! result. The value produced by the generation step is handed directly to
//! the check step; there is no other coupling between them.
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use random_number_workflow::random_number::RandomNumberWorkflow;
//! use random_number_workflow::workflow::execute_workflow;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     tracing_subscriber::fmt().init();
//!
//!     let workflow = RandomNumberWorkflow::new();
//!     let result = execute_workflow(workflow).await?;
//!     println!("{}", result.output());
//!
//!     Ok(())
//! }
//! ```

/// Random number generation and parity classification
pub mod number;
/// The random number workflow definition
pub mod random_number;
/// Task execution and workflow state management
pub mod workflow;
