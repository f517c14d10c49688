// src/main.rs

use bootstrap_runner::errors::{BootstrapError, Result};
use bootstrap_runner::{cli, logging, run};

#[tokio::main]
async fn main() {
    if let Err(err) = run_main().await {
        report_failure(&err);
        std::process::exit(1);
    }
}

async fn run_main() -> Result<()> {
    let args = cli::parse();
    logging::init_logging(args.log_level)?;
    run(args).await
}

/// The only place that turns an error into console output and an exit code.
fn report_failure(err: &BootstrapError) {
    tracing::error!(error = %err, "bootstrap failed");
    match err.failed_command() {
        Some(command) => eprintln!("Error running command: {command}"),
        None => eprintln!("bootstrap error: {err}"),
    }
}
