//! Orchestrates issue migration runs.
//!
//! The driver composes the three API operations in fixed order: resolve the
//! destination repository ID once, enumerate every open issue in the source
//! repository, then transfer them one at a time in enumeration order. All
//! awaits are sequential; nothing runs concurrently.

mod config;
mod error;

pub use config::RunnerConfig;
pub use error::RunnerError;

use crate::issues::list_open_issue_ids;
use crate::repository::resolve_repository_id;
use crate::summary::RunSummary;
use crate::transfer::transfer_issue;
use octocrab::Octocrab;
use tracing::info;

/// Fixed label preceding each transferred-issue URL on stdout.
const TRANSFER_OUTPUT_LABEL: &str = "転送先";

/// Orchestrates a full migration run.
pub struct Runner {
    config: RunnerConfig,
    octocrab: Octocrab,
}

impl Runner {
    /// Builds a runner from the provided configuration.
    pub fn new(config: RunnerConfig) -> Result<Self, RunnerError> {
        let octocrab = Octocrab::builder()
            .personal_token(config.token().to_string())
            .build()?;
        Ok(Self { config, octocrab })
    }

    /// Builds a runner that talks to a custom API endpoint.
    ///
    /// Used by tests to point the client at a mock server.
    pub fn with_base_uri(config: RunnerConfig, base_uri: &str) -> Result<Self, RunnerError> {
        let octocrab = Octocrab::builder()
            .personal_token(config.token().to_string())
            .base_uri(base_uri)?
            .build()?;
        Ok(Self { config, octocrab })
    }

    /// Executes the full migration flow.
    ///
    /// Each successful transfer prints one line to stdout with the issue's
    /// destination URL. The first failure at any stage aborts the remaining
    /// transfers immediately; issues after the failing one are never
    /// attempted and no partial summary is produced.
    pub async fn run(&self) -> Result<RunSummary, RunnerError> {
        let destination_id = resolve_repository_id(
            &self.octocrab,
            self.config.owner(),
            self.config.destination_repo(),
        )
        .await?;

        let issue_ids = list_open_issue_ids(
            &self.octocrab,
            self.config.owner(),
            self.config.source_repo(),
        )
        .await?;

        let mut summary = RunSummary::new(issue_ids.len());

        if issue_ids.is_empty() {
            info!(
                source = %self.config.source_repo(),
                "No open issues to transfer"
            );
            return Ok(summary);
        }

        for issue_id in &issue_ids {
            let transferred = transfer_issue(&self.octocrab, issue_id, &destination_id).await?;
            println!("{TRANSFER_OUTPUT_LABEL} {}", transferred.url);
            summary.record_transfer();
        }

        info!(
            count = summary.issues_transferred,
            destination = %self.config.destination_repo(),
            "Migration complete"
        );
        Ok(summary)
    }
}
