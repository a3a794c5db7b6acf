// End-to-end cleanup runs against a mock registry
mod common;

use dusty::RegistryError;
use dusty::cli::Runner;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_catalog(mock_server: &MockServer, repositories: &[&str]) {
    Mock::given(method("GET"))
        .and(path("/acr/v1/_catalog"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "repositories": repositories })),
        )
        .mount(mock_server)
        .await;
}

async fn mount_tags(mock_server: &MockServer, repository: &str, tags: &[(&str, &str)]) {
    Mock::given(method("GET"))
        .and(path(format!("/acr/v1/{}/_tags", repository)))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::tags_body(repository, tags)))
        .mount(mock_server)
        .await;
}

async fn expect_tag_delete(
    mock_server: &MockServer,
    repository: &str,
    tag: &str,
    status: u16,
    times: u64,
) {
    Mock::given(method("DELETE"))
        .and(path(format!("/acr/v1/{}/_tags/{}", repository, tag)))
        .respond_with(ResponseTemplate::new(status))
        .expect(times)
        .mount(mock_server)
        .await;
}

async fn delete_count(mock_server: &MockServer) -> usize {
    mock_server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .filter(|request| request.method.as_str() == "DELETE")
        .count()
}

#[tokio::test]
async fn test_keeps_newest_tags_per_repository() {
    let mock_server = MockServer::start().await;
    mount_catalog(&mock_server, &["foo", "bar"]).await;
    mount_tags(
        &mock_server,
        "foo",
        &[
            ("b", "2024-01-02T00:00:00Z"),
            ("c", "2024-01-03T00:00:00Z"),
            ("a", "2024-01-01T00:00:00Z"),
        ],
    )
    .await;
    mount_tags(&mock_server, "bar", &[]).await;
    expect_tag_delete(&mock_server, "foo", "a", 202, 1).await;
    expect_tag_delete(&mock_server, "foo", "b", 202, 0).await;
    expect_tag_delete(&mock_server, "foo", "c", 202, 0).await;

    let summary = Runner::new(common::config(&mock_server.uri(), 2, false, false))
        .run()
        .await
        .unwrap();

    assert_eq!(summary.repositories, 2);
    assert_eq!(summary.deleted, 1);
    assert_eq!(delete_count(&mock_server).await, 1);
}

#[tokio::test]
async fn test_dry_run_issues_no_deletes() {
    let mock_server = MockServer::start().await;
    mount_catalog(&mock_server, &["foo"]).await;
    mount_tags(
        &mock_server,
        "foo",
        &[
            ("a", "2024-01-01T00:00:00Z"),
            ("b", "2024-01-02T00:00:00Z"),
            ("c", "2024-01-03T00:00:00Z"),
        ],
    )
    .await;

    let summary = Runner::new(common::config(&mock_server.uri(), 1, true, false))
        .run()
        .await
        .unwrap();

    assert_eq!(summary.would_delete, 2);
    assert_eq!(summary.deleted, 0);
    assert_eq!(delete_count(&mock_server).await, 0);
}

#[tokio::test]
async fn test_rejected_delete_terminates_run() {
    let mock_server = MockServer::start().await;
    mount_catalog(&mock_server, &["foo"]).await;
    mount_tags(
        &mock_server,
        "foo",
        &[
            ("x", "2024-01-01T00:00:00Z"),
            ("y", "2024-01-02T00:00:00Z"),
            ("z", "2024-01-03T00:00:00Z"),
        ],
    )
    .await;
    expect_tag_delete(&mock_server, "foo", "x", 500, 1).await;
    expect_tag_delete(&mock_server, "foo", "y", 202, 0).await;

    let err = Runner::new(common::config(&mock_server.uri(), 1, false, false))
        .run()
        .await
        .unwrap_err();

    assert!(matches!(err, RegistryError::Delete { status: 500, .. }));
    let message = err.to_string();
    assert!(message.contains("x"));
    assert!(message.contains("500"));
}

#[tokio::test]
async fn test_manifest_phase_follows_tag_phase() {
    let mock_server = MockServer::start().await;
    mount_catalog(&mock_server, &["multi"]).await;
    mount_tags(
        &mock_server,
        "multi",
        &[("old", "2024-01-01T00:00:00Z"), ("new", "2024-01-02T00:00:00Z")],
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/acr/v1/multi/_manifests"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::manifests_body(
            "multi",
            &[
                ("sha256:new", "2024-01-02T00:00:00Z"),
                ("sha256:old", "2024-01-01T00:00:00Z"),
            ],
        )))
        .expect(1)
        .mount(&mock_server)
        .await;
    expect_tag_delete(&mock_server, "multi", "old", 202, 1).await;
    Mock::given(method("DELETE"))
        .and(path("/v2/multi/manifests/sha256:old"))
        .respond_with(ResponseTemplate::new(202))
        .expect(1)
        .mount(&mock_server)
        .await;

    let summary = Runner::new(common::config(&mock_server.uri(), 1, false, true))
        .run()
        .await
        .unwrap();
    assert_eq!(summary.deleted, 2);

    let order: Vec<String> = mock_server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .map(|request| request.url.path().to_string())
        .collect();
    let tag_delete = order.iter().position(|p| p == "/acr/v1/multi/_tags/old").unwrap();
    let manifest_list = order.iter().position(|p| p == "/acr/v1/multi/_manifests").unwrap();
    assert!(tag_delete < manifest_list);
}

#[tokio::test]
async fn test_catalog_failure_is_fatal() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/acr/v1/_catalog"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let err = Runner::new(common::config(&mock_server.uri(), 1, false, false))
        .run()
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(503));
}
