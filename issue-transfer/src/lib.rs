#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod graphql;
pub mod issues;
pub mod repository;
pub mod runner;
pub mod summary;
pub mod transfer;
pub mod types;

pub use graphql::GraphQlError;
pub use issues::{list_open_issue_ids, EnumerationError, IssuePage};
pub use repository::{resolve_repository_id, ResolveError};
pub use runner::{Runner, RunnerConfig, RunnerError};
pub use summary::RunSummary;
pub use transfer::{transfer_issue, TransferError, TransferredIssue};
pub use types::{IssueId, RepositoryId};
