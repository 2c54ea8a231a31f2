//! Runner configuration.

/// Configuration for one migration run.
///
/// Both repositories must belong to the same owner; cross-account transfers
/// are not supported by the underlying mutation.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Owner of both repositories (user or organization).
    owner: String,
    /// Repository the issues are moved out of.
    source_repo: String,
    /// Repository the issues are moved into.
    destination_repo: String,
    /// GitHub token used for API calls.
    token: String,
}

impl RunnerConfig {
    /// Creates a new configuration for a run.
    pub fn new(owner: String, source_repo: String, destination_repo: String, token: String) -> Self {
        Self {
            owner,
            source_repo,
            destination_repo,
            token,
        }
    }

    /// Returns the repository owner.
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Returns the source repository name.
    pub fn source_repo(&self) -> &str {
        &self.source_repo
    }

    /// Returns the destination repository name.
    pub fn destination_repo(&self) -> &str {
        &self.destination_repo
    }

    /// Returns the configured GitHub token.
    pub fn token(&self) -> &str {
        &self.token
    }
}
