//! GraphQL request execution.
//!
//! GitHub's GraphQL endpoint reports query failures inside a 200 response
//! envelope, so the `errors` array has to be inspected before `data` is
//! decoded into a typed result.

mod error;

pub use error::GraphQlError;

use octocrab::Octocrab;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use tracing::debug;

/// Executes a GraphQL query or mutation and decodes the `data` payload.
///
/// # Arguments
///
/// * `octocrab` - Authenticated GitHub client
/// * `query` - GraphQL document to execute
/// * `variables` - Variables object passed alongside the document
///
/// # Errors
///
/// Returns [`GraphQlError`] if the request fails at the transport level, the
/// API reports an error in the response envelope, or the `data` payload does
/// not match the expected shape.
pub(crate) async fn execute<T: DeserializeOwned>(
    octocrab: &Octocrab,
    query: &str,
    variables: Value,
) -> Result<T, GraphQlError> {
    let payload = json!({
        "query": query,
        "variables": variables,
    });

    let response: Value = octocrab.graphql(&payload).await?;

    if let Some(errors) = response.get("errors").and_then(Value::as_array) {
        debug!(count = errors.len(), "GraphQL response reported errors");
        return Err(map_errors(errors));
    }

    let data = response
        .get("data")
        .filter(|data| !data.is_null())
        .ok_or(GraphQlError::MissingData)?;

    Ok(serde_json::from_value(data.clone())?)
}

/// Maps the `errors` array of a response envelope to a [`GraphQlError`].
///
/// Only the first error is surfaced. A `NOT_FOUND` type (or extension code)
/// gets its own variant; everything else is reported as-is.
fn map_errors(errors: &[Value]) -> GraphQlError {
    let Some(first) = errors.first() else {
        return GraphQlError::Api {
            message: "unknown GraphQL error".to_string(),
        };
    };

    let message = first
        .get("message")
        .and_then(Value::as_str)
        .unwrap_or("unknown GraphQL error")
        .to_string();
    let error_type = first
        .get("type")
        .or_else(|| first.get("extensions").and_then(|ext| ext.get("code")))
        .and_then(Value::as_str)
        .unwrap_or("");

    if error_type == "NOT_FOUND" {
        GraphQlError::NotFound { message }
    } else {
        GraphQlError::Api { message }
    }
}
