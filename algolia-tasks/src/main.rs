//! Algolia Task Entry Point
//!
//! Reads one JSON task definition from the file given as first argument, or
//! from stdin, runs it and prints the output JSON on stdout.

use algolia_tasks::{Settings, TaskDefinition, TaskError, TaskRunner};
use dotenv::dotenv;
use std::env;
use std::io::{self, Read, Write};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize tracing/logging on stderr.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("algolia_tasks=info,algolia_repository=info"));

    let json = env::var("LOG_FORMAT")
        .map(|format| format.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_writer(io::stderr),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_writer(io::stderr)
                    .pretty(),
            )
            .init();
    }
}

fn read_definition(path: Option<String>) -> Result<TaskDefinition, TaskError> {
    let input = match path {
        Some(path) => std::fs::read_to_string(&path)
            .map_err(|e| TaskError::input(format!("Cannot read '{}': {}", path, e)))?,
        None => {
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .map_err(|e| TaskError::input(format!("Cannot read stdin: {}", e)))?;
            input
        }
    };
    TaskDefinition::from_json(&input)
}

async fn run() -> Result<(), TaskError> {
    let settings = Settings::from_env()?;
    let runner = TaskRunner::new(settings)?;
    let definition = read_definition(env::args().nth(1))?;

    let output = runner.run(&definition).await?;

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", output.to_json_pretty()?)
        .map_err(|e| TaskError::output(e.to_string()))?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), TaskError> {
    dotenv().ok();
    init_tracing();

    info!(
        service_name = "algolia-task",
        service_version = env!("CARGO_PKG_VERSION"),
        "Starting Algolia task"
    );

    run().await.map_err(|e| {
        error!(error = %e, "Algolia task failed");
        e
    })
}
