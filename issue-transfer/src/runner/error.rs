//! Runner error types.

/// Errors that can occur while running a migration.
///
/// Every variant is fail-fast: whichever stage errors first aborts the run,
/// and issues after the failing one are never attempted.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// GitHub API client initialization errors.
    #[error(transparent)]
    Octocrab(#[from] octocrab::Error),

    /// Destination repository resolution errors.
    #[error(transparent)]
    Resolve(#[from] crate::repository::ResolveError),

    /// Source issue enumeration errors.
    #[error(transparent)]
    Enumeration(#[from] crate::issues::EnumerationError),

    /// Issue transfer errors.
    #[error(transparent)]
    Transfer(#[from] crate::transfer::TransferError),
}
