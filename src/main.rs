//! Runs the random number workflow from the command line.
//!
//! An optional first argument fixes the RNG seed so a run can be
//! reproduced exactly.

use anyhow::{Context, Result};
use colored::Colorize;

use random_number_workflow::random_number::RandomNumberWorkflow;
use random_number_workflow::workflow::execute_workflow;

#[tokio::main]
async fn main() -> Result<()> {
    // Set up console logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    println!("\n{}", "Random Number Workflow".bold().green());
    println!(
        "{}",
        "Generates a random number between 1 and 100 and checks whether it is even or odd."
            .yellow()
    );

    // An optional seed argument makes the run reproducible
    let seed = match std::env::args().nth(1) {
        Some(arg) => Some(
            arg.parse::<u64>()
                .with_context(|| format!("invalid seed argument: {}", arg))?,
        ),
        None => None,
    };

    let workflow = match seed {
        Some(seed) => RandomNumberWorkflow::with_seed(seed),
        None => RandomNumberWorkflow::new(),
    };

    println!("\n{}", "Starting workflow execution...".cyan());

    match execute_workflow(workflow).await {
        Ok(result) => {
            println!("\n{}", "Workflow Result:".bold().green());
            println!("{}", result.output());
            println!(
                "Workflow completed in {} ms",
                result.duration_ms().unwrap_or(0)
            );
        }
        Err(e) => {
            println!("\n{}", "Workflow Error:".bold().red());
            println!("{:?}", e);
        }
    }

    Ok(())
}
