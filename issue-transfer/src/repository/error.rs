//! Repository resolution error types.

use thiserror::Error;

/// Errors that can occur while resolving a repository ID.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// GraphQL request failure.
    #[error(transparent)]
    GraphQl(#[from] crate::graphql::GraphQlError),

    /// The response carried no repository for the owner/name pair.
    #[error("Repository {owner}/{name} not found")]
    RepositoryMissing { owner: String, name: String },
}
