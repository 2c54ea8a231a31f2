//! Transferred issue information.

use serde::Deserialize;
use url::Url;

/// An issue at its new location after a successful transfer.
#[derive(Debug, Clone, Deserialize)]
pub struct TransferredIssue {
    /// URL of the issue in the destination repository.
    pub url: Url,

    /// Issue number assigned in the destination repository.
    pub number: u64,
}
