//! GraphQL execution error types.

use thiserror::Error;

/// Errors that can occur while executing a GraphQL request.
#[derive(Debug, Error)]
pub enum GraphQlError {
    /// Transport or HTTP-level GitHub API error.
    #[error("GitHub API error: {0}")]
    GitHubError(#[from] octocrab::Error),

    /// The queried object does not exist or is not visible to the credential.
    #[error("Not found: {message}")]
    NotFound { message: String },

    /// The API reported an error in the response envelope.
    #[error("GraphQL error: {message}")]
    Api { message: String },

    /// The `data` payload could not be decoded into the expected shape.
    #[error("Malformed GraphQL response: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    /// The response carried neither errors nor a usable `data` payload.
    #[error("GraphQL response missing data")]
    MissingData,
}
