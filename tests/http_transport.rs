// Integration tests for the HTTP transport and registry client
mod common;

use dusty::cli::{AuthConfig, RegistryConfig};
use dusty::registry::{ItemKind, RegistryClient};
use dusty::RegistryError;
use wiremock::matchers::{basic_auth, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(uri: &str) -> RegistryClient {
    RegistryClient::builder(RegistryConfig::new(uri.to_string()).with_timeout(Some(10)))
        .with_auth(AuthConfig::new(common::USER.to_string(), common::SECRET.to_string()))
        .build()
        .expect("client builds")
}

#[tokio::test]
async fn test_catalog_request_uses_basic_auth() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/acr/v1/_catalog"))
        .and(basic_auth(common::USER, common::SECRET))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"repositories": ["foo", "bar"]})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let catalog = client(&mock_server.uri()).list_repositories().await.unwrap();
    assert_eq!(catalog.repositories, vec!["foo", "bar"]);
}

#[tokio::test]
async fn test_tag_listing_decodes() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/acr/v1/foo/_tags"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::tags_body(
            "foo",
            &[("v1", "2021-01-05T16:47:13.8372468Z")],
        )))
        .mount(&mock_server)
        .await;

    let set = client(&mock_server.uri()).list_tags("foo").await.unwrap();
    assert_eq!(set.image_name, "foo");
    assert_eq!(set.tags[0].name, "v1");
    assert_eq!(set.tags[0].digest, "sha256:v1");
}

#[tokio::test]
async fn test_unauthorized_listing_reports_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/acr/v1/_catalog"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&mock_server)
        .await;

    let err = client(&mock_server.uri()).list_repositories().await.unwrap_err();
    assert!(matches!(err, RegistryError::Request { status: 401, .. }));
}

#[tokio::test]
async fn test_manifest_delete_uses_distribution_path() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/v2/foo/manifests/sha256:abc"))
        .respond_with(ResponseTemplate::new(202))
        .expect(1)
        .mount(&mock_server)
        .await;

    client(&mock_server.uri())
        .delete(ItemKind::Manifest, "foo", "sha256:abc")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_connection_failure_is_transport_error() {
    // nothing listens on the discard port
    let err = client("http://127.0.0.1:9").list_repositories().await.unwrap_err();
    assert!(matches!(err, RegistryError::Transport { .. }));
}
