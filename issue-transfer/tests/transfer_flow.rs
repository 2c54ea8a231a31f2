//! End-to-end tests against a mocked GitHub GraphQL endpoint.
//!
//! The client is pointed at a wiremock server; individual mocks are told
//! apart by the GraphQL document in the request body (the resolver query,
//! the issues query, and the transfer mutation each carry a distinctive
//! substring).

use std::collections::HashSet;

use issue_transfer::{
    list_open_issue_ids, resolve_repository_id, GraphQlError, ResolveError, Runner, RunnerConfig,
    RunnerError,
};
use octocrab::Octocrab;
use serde_json::{json, Value};
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config() -> RunnerConfig {
    RunnerConfig::new(
        "octocat".to_string(),
        "old-repo".to_string(),
        "new-repo".to_string(),
        "test_token".to_string(),
    )
}

fn client(server: &MockServer) -> Octocrab {
    Octocrab::builder()
        .personal_token("test_token".to_string())
        .base_uri(server.uri())
        .unwrap()
        .build()
        .unwrap()
}

fn repository_id_response(id: &str) -> Value {
    json!({ "data": { "repository": { "id": id } } })
}

fn issue_page_response(ids: &[String], end_cursor: Option<&str>, has_next_page: bool) -> Value {
    json!({
        "data": {
            "repository": {
                "issues": {
                    "pageInfo": { "endCursor": end_cursor, "hasNextPage": has_next_page },
                    "nodes": ids.iter().map(|id| json!({ "id": id })).collect::<Vec<_>>(),
                }
            }
        }
    })
}

fn transfer_response(url: &str, number: u64) -> Value {
    json!({
        "data": {
            "transferIssue": {
                "issue": { "url": url, "number": number }
            }
        }
    })
}

fn ids(range: std::ops::RangeInclusive<usize>) -> Vec<String> {
    range.map(|i| format!("ISSUE{i}")).collect()
}

async fn mount_resolver(server: &MockServer, id: &str, expected_calls: u64) {
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(body_string_contains("repository(owner:"))
        .respond_with(ResponseTemplate::new(200).set_body_json(repository_id_response(id)))
        .expect(expected_calls)
        .mount(server)
        .await;
}

#[tokio::test]
async fn transfers_three_issues_in_order() {
    let server = MockServer::start().await;

    // Transfer mocks go first so they win over the broader query mocks.
    for (id, number) in [("ISSUE1", 1), ("ISSUE2", 2), ("ISSUE3", 3)] {
        let url = format!("https://github.com/octocat/new-repo/issues/{number}");
        Mock::given(method("POST"))
            .and(path("/graphql"))
            .and(body_string_contains("transferIssue"))
            .and(body_string_contains(format!("\"{id}\"")))
            .respond_with(ResponseTemplate::new(200).set_body_json(transfer_response(&url, number)))
            .expect(1)
            .mount(&server)
            .await;
    }

    // Only issues in the OPEN state may be requested.
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(body_string_contains("issues("))
        .and(body_string_contains("\"OPEN\""))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(issue_page_response(&ids(1..=3), Some("C3"), false)),
        )
        .expect(1)
        .mount(&server)
        .await;

    mount_resolver(&server, "R_DEST", 1).await;

    let runner = Runner::with_base_uri(config(), &server.uri()).unwrap();
    let summary = runner.run().await.unwrap();

    assert_eq!(summary.issues_found, 3);
    assert_eq!(summary.issues_transferred, 3);
    assert!(summary.is_complete());

    // Transfers must run in enumeration order, one at a time.
    let transfer_order: Vec<String> = server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .filter_map(|request| {
            let body = String::from_utf8_lossy(&request.body).to_string();
            if !body.contains("transferIssue") {
                return None;
            }
            ["ISSUE1", "ISSUE2", "ISSUE3"]
                .iter()
                .find(|id| body.contains(&format!("\"{id}\"")))
                .map(|id| id.to_string())
        })
        .collect();
    assert_eq!(transfer_order, ["ISSUE1", "ISSUE2", "ISSUE3"]);
}

#[tokio::test]
async fn enumerates_150_issues_across_two_pages() {
    let server = MockServer::start().await;

    // Second page first: its matcher is the more specific one (carries the
    // cursor returned by page one).
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(body_string_contains("\"CURSOR1\""))
        .and(body_string_contains("\"OPEN\""))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(issue_page_response(&ids(101..=150), Some("CURSOR2"), false)),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(body_string_contains("issues("))
        .and(body_string_contains("\"OPEN\""))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(issue_page_response(&ids(1..=100), Some("CURSOR1"), true)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let issue_ids = list_open_issue_ids(&client(&server), "octocat", "old-repo")
        .await
        .unwrap();

    assert_eq!(issue_ids.len(), 150);
    assert_eq!(issue_ids[0].as_str(), "ISSUE1");
    assert_eq!(issue_ids[99].as_str(), "ISSUE100");
    assert_eq!(issue_ids[100].as_str(), "ISSUE101");
    assert_eq!(issue_ids[149].as_str(), "ISSUE150");

    // No duplicates, no omissions.
    let unique: HashSet<&str> = issue_ids.iter().map(|id| id.as_str()).collect();
    assert_eq!(unique.len(), 150);
}

#[tokio::test]
async fn empty_repository_performs_no_transfers() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(body_string_contains("transferIssue"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    // A repository with zero open issues still costs exactly one page query.
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(body_string_contains("issues("))
        .and(body_string_contains("\"OPEN\""))
        .respond_with(ResponseTemplate::new(200).set_body_json(issue_page_response(&[], None, false)))
        .expect(1)
        .mount(&server)
        .await;

    mount_resolver(&server, "R_DEST", 1).await;

    let runner = Runner::with_base_uri(config(), &server.uri()).unwrap();
    let summary = runner.run().await.unwrap();

    assert_eq!(summary.issues_found, 0);
    assert_eq!(summary.issues_transferred, 0);
}

#[tokio::test]
async fn aborts_on_first_transfer_failure() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(body_string_contains("transferIssue"))
        .and(body_string_contains("\"ISSUE1\""))
        .respond_with(ResponseTemplate::new(200).set_body_json(transfer_response(
            "https://github.com/octocat/new-repo/issues/1",
            1,
        )))
        .expect(1)
        .mount(&server)
        .await;

    // The API reports mutation failures inside a 200 envelope.
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(body_string_contains("transferIssue"))
        .and(body_string_contains("\"ISSUE2\""))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "transferIssue": null },
            "errors": [{
                "type": "UNPROCESSABLE",
                "message": "Issue has already been transferred"
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    // Issues after the failing one must never be attempted.
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(body_string_contains("transferIssue"))
        .and(body_string_contains("\"ISSUE3\""))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(body_string_contains("issues("))
        .and(body_string_contains("\"OPEN\""))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(issue_page_response(&ids(1..=3), None, false)),
        )
        .expect(1)
        .mount(&server)
        .await;

    mount_resolver(&server, "R_DEST", 1).await;

    let runner = Runner::with_base_uri(config(), &server.uri()).unwrap();
    let error = runner.run().await.unwrap_err();

    assert!(matches!(error, RunnerError::Transfer(_)));
}

#[tokio::test]
async fn resolver_is_stable_across_calls() {
    let server = MockServer::start().await;
    mount_resolver(&server, "R_DEST", 2).await;

    let octocrab = client(&server);
    let first = resolve_repository_id(&octocrab, "octocat", "new-repo")
        .await
        .unwrap();
    let second = resolve_repository_id(&octocrab, "octocat", "new-repo")
        .await
        .unwrap();

    assert_eq!(first, second);
    assert_eq!(first.as_str(), "R_DEST");
}

#[tokio::test]
async fn missing_repository_surfaces_as_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "repository": null },
            "errors": [{
                "type": "NOT_FOUND",
                "message": "Could not resolve to a Repository with the name 'octocat/missing'."
            }]
        })))
        .mount(&server)
        .await;

    let error = resolve_repository_id(&client(&server), "octocat", "missing")
        .await
        .unwrap_err();

    assert!(matches!(
        error,
        ResolveError::GraphQl(GraphQlError::NotFound { .. })
    ));
}
