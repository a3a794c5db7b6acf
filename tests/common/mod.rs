// Shared test utilities
use dusty::cli::{Args, RetentionConfig};
use serde_json::{Value, json};

pub const USER: &str = "client-id";
pub const SECRET: &str = "client-secret";

/// Validated configuration pointing at a mock registry
#[allow(dead_code)]
pub fn config(uri: &str, limit: i64, dry_run: bool, manifests: bool) -> RetentionConfig {
    RetentionConfig::from_args(Args {
        registry: Some(uri.to_string()),
        limit: Some(limit),
        user: Some(USER.to_string()),
        password: Some(SECRET.to_string()),
        dry_run,
        manifests,
        ..Default::default()
    })
    .expect("valid test configuration")
}

/// `_tags` body with one tag per (name, createdTime)
pub fn tags_body(repository: &str, tags: &[(&str, &str)]) -> Value {
    let tags: Vec<Value> = tags
        .iter()
        .map(|(name, created)| {
            json!({
                "name": name,
                "digest": format!("sha256:{}", name),
                "createdTime": created,
                "lastUpdateTime": created,
                "signed": false,
                "changeableAttributes": {
                    "deleteEnabled": true,
                    "writeEnabled": true,
                    "readEnabled": true,
                    "listEnabled": true
                }
            })
        })
        .collect();
    json!({"registry": "test.azurecr.io", "imageName": repository, "tags": tags})
}

/// `_manifests` body with one manifest per (digest, createdTime)
#[allow(dead_code)]
pub fn manifests_body(repository: &str, manifests: &[(&str, &str)]) -> Value {
    let manifests: Vec<Value> = manifests
        .iter()
        .map(|(digest, created)| {
            json!({
                "digest": digest,
                "imageSize": 1024,
                "createdTime": created,
                "lastUpdateTime": created,
                "architecture": "amd64",
                "os": "linux",
                "mediaType": "application/vnd.docker.distribution.manifest.v2+json",
                "configMediaType": "application/vnd.docker.container.image.v1+json",
                "tags": []
            })
        })
        .collect();
    json!({"registry": "test.azurecr.io", "imageName": repository, "manifests": manifests})
}
