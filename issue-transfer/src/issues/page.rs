//! Issue page types.

use super::EnumerationError;
use crate::types::IssueId;
use serde::Deserialize;

/// One page of open-issue IDs together with its pagination state.
#[derive(Debug, Clone)]
pub struct IssuePage {
    /// Issue node IDs in the order the API returned them.
    pub ids: Vec<IssueId>,

    /// Cursor to pass as `after` for the next page, if one exists.
    pub next_cursor: Option<String>,
}

#[derive(Deserialize)]
pub(super) struct IssuesData {
    pub repository: Option<IssuesRepository>,
}

#[derive(Deserialize)]
pub(super) struct IssuesRepository {
    pub issues: IssueConnection,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct IssueConnection {
    pub page_info: PageInfo,
    pub nodes: Vec<IssueNode>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct PageInfo {
    pub end_cursor: Option<String>,
    pub has_next_page: bool,
}

#[derive(Deserialize)]
pub(super) struct IssueNode {
    pub id: IssueId,
}

impl IssueConnection {
    /// Flattens the decoded connection into an [`IssuePage`].
    ///
    /// The cursor is only carried over when the API reports a further page,
    /// so `next_cursor: None` doubles as the loop's termination signal.
    ///
    /// # Errors
    ///
    /// Returns [`EnumerationError::MissingCursor`] if the page claims more
    /// pages exist but carries no cursor; ending the loop there would return
    /// a truncated sequence as if it were complete.
    pub(super) fn into_page(self) -> Result<IssuePage, EnumerationError> {
        let next_cursor = if self.page_info.has_next_page {
            match self.page_info.end_cursor {
                Some(cursor) => Some(cursor),
                None => return Err(EnumerationError::MissingCursor),
            }
        } else {
            None
        };

        Ok(IssuePage {
            ids: self.nodes.into_iter().map(|node| node.id).collect(),
            next_cursor,
        })
    }
}
