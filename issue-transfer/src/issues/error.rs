//! Issue enumeration error types.

use thiserror::Error;

/// Errors that can occur while enumerating open issues.
///
/// Any page failing aborts the enumeration; no partial sequence is returned.
#[derive(Debug, Error)]
pub enum EnumerationError {
    /// GraphQL request failure.
    #[error(transparent)]
    GraphQl(#[from] crate::graphql::GraphQlError),

    /// The response carried no repository for the owner/name pair.
    #[error("Repository {owner}/{name} not found")]
    RepositoryMissing { owner: String, name: String },

    /// A page reported that more pages exist but carried no cursor to
    /// fetch them, which would silently truncate the enumeration.
    #[error("Issue page reported a next page but no cursor")]
    MissingCursor,
}
