//! Open issue enumeration.
//!
//! Collects the node ID of every OPEN issue in the source repository by
//! walking the paginated `issues` connection 100 at a time, accumulating
//! until the API reports no further pages.

mod error;
mod page;

pub use error::EnumerationError;
pub use page::IssuePage;

use crate::graphql;
use crate::types::IssueId;
use octocrab::Octocrab;
use serde_json::json;
use tracing::{debug, info, info_span, Instrument};

/// Issues requested per page. GitHub caps connection pages at 100 nodes.
const PAGE_SIZE: u32 = 100;

const OPEN_ISSUES_QUERY: &str = r#"
query ($owner: String!, $name: String!, $first: Int!, $after: String, $states: [IssueState!]) {
  repository(owner: $owner, name: $name) {
    issues(first: $first, after: $after, states: $states) {
      pageInfo { endCursor hasNextPage }
      nodes { id }
    }
  }
}
"#;

/// Enumerates the node IDs of every open issue in a repository.
///
/// Pages are fetched sequentially, never concurrently; each page's IDs are
/// appended in the order the API returned them. A repository with no open
/// issues yields an empty vector after a single request.
///
/// # Arguments
///
/// * `octocrab` - Authenticated GitHub client
/// * `owner` - Repository owner (user or organization)
/// * `name` - Source repository name
///
/// # Errors
///
/// Returns [`EnumerationError`] if any page request fails. The enumeration
/// aborts entirely; no partial sequence is returned and there is no resume.
pub async fn list_open_issue_ids(
    octocrab: &Octocrab,
    owner: &str,
    name: &str,
) -> Result<Vec<IssueId>, EnumerationError> {
    let span = info_span!("list_open_issues", owner = %owner, name = %name);

    async {
        let mut ids = Vec::new();
        let mut cursor: Option<String> = None;

        loop {
            let page = fetch_page(octocrab, owner, name, cursor.as_deref()).await?;
            debug!(count = page.ids.len(), "Fetched issue page");
            ids.extend(page.ids);

            match page.next_cursor {
                Some(next) => cursor = Some(next),
                None => break,
            }
        }

        info!(count = ids.len(), "Enumerated open issues");
        Ok(ids)
    }
    .instrument(span)
    .await
}

/// Fetches a single page of open-issue IDs.
async fn fetch_page(
    octocrab: &Octocrab,
    owner: &str,
    name: &str,
    after: Option<&str>,
) -> Result<IssuePage, EnumerationError> {
    let data: page::IssuesData = graphql::execute(
        octocrab,
        OPEN_ISSUES_QUERY,
        json!({
            "owner": owner,
            "name": name,
            "first": PAGE_SIZE,
            "after": after,
            "states": ["OPEN"],
        }),
    )
    .await?;

    let repository = data
        .repository
        .ok_or_else(|| EnumerationError::RepositoryMissing {
            owner: owner.to_string(),
            name: name.to_string(),
        })?;

    repository.issues.into_page()
}
