//! Core identifier types.
//!
//! The GitHub GraphQL API addresses repositories and issues by opaque node
//! IDs. These newtypes keep the two ID spaces apart: a [`RepositoryId`] only
//! ever names the transfer destination, an [`IssueId`] only ever names an
//! issue in the source repository. Neither is inspected or mutated locally.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque GraphQL node ID of a repository.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RepositoryId(String);

impl RepositoryId {
    /// Returns the raw node ID string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RepositoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for RepositoryId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for RepositoryId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Opaque GraphQL node ID of an issue.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IssueId(String);

impl IssueId {
    /// Returns the raw node ID string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IssueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for IssueId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for IssueId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}
