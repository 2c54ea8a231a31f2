//! Destination repository resolution.
//!
//! Maps an (owner, name) pair to the opaque repository node ID that the
//! transfer mutation expects as its destination.

mod error;

pub use error::ResolveError;

use crate::graphql;
use crate::types::RepositoryId;
use octocrab::Octocrab;
use serde::Deserialize;
use serde_json::json;
use tracing::{info, info_span, Instrument};

const REPOSITORY_ID_QUERY: &str = r#"
query ($owner: String!, $name: String!) {
  repository(owner: $owner, name: $name) {
    id
  }
}
"#;

#[derive(Deserialize)]
struct RepositoryData {
    repository: Option<RepositoryNode>,
}

#[derive(Deserialize)]
struct RepositoryNode {
    id: RepositoryId,
}

/// Resolves the GraphQL node ID of a repository.
///
/// Issues a single query; the returned ID is stable for as long as the
/// repository is neither deleted nor recreated.
///
/// # Arguments
///
/// * `octocrab` - Authenticated GitHub client
/// * `owner` - Repository owner (user or organization)
/// * `name` - Repository name
///
/// # Errors
///
/// Returns [`ResolveError`] if the repository does not exist, the owner name
/// is invalid, or the credential lacks read access. No retry is attempted.
pub async fn resolve_repository_id(
    octocrab: &Octocrab,
    owner: &str,
    name: &str,
) -> Result<RepositoryId, ResolveError> {
    let span = info_span!("resolve_repository", owner = %owner, name = %name);

    async {
        let data: RepositoryData = graphql::execute(
            octocrab,
            REPOSITORY_ID_QUERY,
            json!({ "owner": owner, "name": name }),
        )
        .await?;

        let repository = data
            .repository
            .ok_or_else(|| ResolveError::RepositoryMissing {
                owner: owner.to_string(),
                name: name.to_string(),
            })?;

        info!(repository_id = %repository.id, "Resolved repository");
        Ok(repository.id)
    }
    .instrument(span)
    .await
}
