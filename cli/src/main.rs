//! CLI for the issue transfer tool.
//!
//! Moves every open issue from a source repository to a destination
//! repository within the same GitHub account.

use clap::Parser;
use issue_transfer::{RunSummary, Runner, RunnerConfig, RunnerError};
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Issue Transfer - Move all open issues from one repository to another.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Owner of both repositories (user or organization).
    #[arg(long)]
    owner: String,

    /// Repository to move issues out of.
    #[arg(long)]
    source_repo: String,

    /// Repository to move issues into.
    #[arg(long)]
    destination_repo: String,

    /// GitHub Personal Access Token with the repo scope.
    #[arg(long, env = "GITHUB_PERSONAL_ACCESS_TOKEN", hide_env_values = true)]
    token: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    init_tracing();

    // Parse arguments
    let args = Args::parse();

    // Run the main logic
    match run(args).await {
        Ok(summary) => {
            print_summary(&summary);
            ExitCode::from(0)
        }
        Err(e) => {
            error!(error = %e, "Critical failure");
            ExitCode::from(2)
        }
    }
}

/// Initializes tracing with environment filter support.
///
/// Sets up the global tracing subscriber with:
/// - Compact log formatting (single-line output)
/// - Log level filtering via `RUST_LOG` env var (defaults to "info")
///
/// Diagnostics go through tracing; the per-issue transfer lines stay on
/// plain stdout so they can be piped or captured separately.
fn init_tracing() {
    tracing_subscriber::registry()
        // Use compact formatting without module target paths for cleaner output.
        // Diagnostics go to stderr; stdout is reserved for the transfer lines.
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        // Allow runtime log filtering via RUST_LOG env var (e.g., RUST_LOG=debug)
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        // Register as the global default subscriber
        .init();
}

/// Main execution logic.
async fn run(args: Args) -> Result<RunSummary, RunnerError> {
    let config = RunnerConfig::new(
        args.owner,
        args.source_repo,
        args.destination_repo,
        args.token,
    );
    let runner = Runner::new(config)?;
    runner.run().await
}

/// Prints the final run summary.
fn print_summary(summary: &RunSummary) {
    println!("\nSummary:");
    println!("  Open issues found: {}", summary.issues_found);
    println!("  Issues transferred: {}", summary.issues_transferred);
}
