//! Issue transfer via the `transferIssue` mutation.
//!
//! Moves one issue into the destination repository. Labels on the issue that
//! do not yet exist in the destination are created as part of the transfer.
//! The mutation is not idempotent: once an issue has moved, a second transfer
//! with the same ID fails because the issue no longer exists at the source.

mod error;
mod transferred_issue;

pub use error::TransferError;
pub use transferred_issue::TransferredIssue;

use crate::graphql;
use crate::types::{IssueId, RepositoryId};
use octocrab::Octocrab;
use serde::Deserialize;
use serde_json::json;
use tracing::{info, info_span, Instrument};

const TRANSFER_ISSUE_MUTATION: &str = r#"
mutation ($issueId: ID!, $repositoryId: ID!, $createLabelsIfMissing: Boolean) {
  transferIssue(input: { issueId: $issueId, repositoryId: $repositoryId, createLabelsIfMissing: $createLabelsIfMissing }) {
    issue { url number }
  }
}
"#;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TransferData {
    transfer_issue: Option<TransferPayload>,
}

#[derive(Deserialize)]
struct TransferPayload {
    issue: Option<TransferredIssue>,
}

/// Transfers one issue into the destination repository.
///
/// # Arguments
///
/// * `octocrab` - Authenticated GitHub client
/// * `issue_id` - Node ID of the issue to move
/// * `destination` - Node ID of the repository to move it into
///
/// # Returns
///
/// A [`TransferredIssue`] with the issue's URL and number at its new
/// location.
///
/// # Errors
///
/// Returns [`TransferError`] if the issue was already transferred or closed
/// in a way incompatible with transfer, the destination repository ID is
/// invalid, or the credential lacks write access to either repository.
/// Failures are not retried and not caught here; they propagate to the
/// driver, which aborts the remaining issues.
pub async fn transfer_issue(
    octocrab: &Octocrab,
    issue_id: &IssueId,
    destination: &RepositoryId,
) -> Result<TransferredIssue, TransferError> {
    let span = info_span!("transfer_issue", issue_id = %issue_id);

    async {
        let data: TransferData = graphql::execute(
            octocrab,
            TRANSFER_ISSUE_MUTATION,
            json!({
                "issueId": issue_id,
                "repositoryId": destination,
                "createLabelsIfMissing": true,
            }),
        )
        .await?;

        let issue = data
            .transfer_issue
            .and_then(|payload| payload.issue)
            .ok_or(TransferError::IssueMissing)?;

        info!(number = issue.number, url = %issue.url, "Issue transferred");
        Ok(issue)
    }
    .instrument(span)
    .await
}
