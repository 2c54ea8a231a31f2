//! Issue transfer error types.

use thiserror::Error;

/// Errors that can occur while transferring an issue.
#[derive(Debug, Error)]
pub enum TransferError {
    /// GraphQL request failure, including mutation errors reported by the
    /// API (issue already transferred, invalid destination, missing write
    /// access).
    #[error(transparent)]
    GraphQl(#[from] crate::graphql::GraphQlError),

    /// The mutation completed without returning the transferred issue.
    #[error("Transfer mutation returned no issue")]
    IssueMissing,
}
