//! Wire types for the `acr/v1` listing endpoints

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of item a retention phase works on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKind {
    Tag,
    Manifest,
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemKind::Tag => write!(f, "tag"),
            ItemKind::Manifest => write!(f, "manifest"),
        }
    }
}

/// Response of `GET /acr/v1/_catalog`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryCatalog {
    #[serde(default)]
    pub repositories: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChangeableAttributes {
    pub delete_enabled: bool,
    pub write_enabled: bool,
    pub read_enabled: bool,
    pub list_enabled: bool,
}

/// A named, mutable pointer to a manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
    #[serde(default)]
    pub digest: String,
    #[serde(rename = "createdTime")]
    pub created_at: DateTime<Utc>,
    /// Informational only and passed through verbatim
    #[serde(rename = "lastUpdateTime", default)]
    pub last_updated_at: String,
    #[serde(default)]
    pub signed: bool,
    #[serde(rename = "changeableAttributes", default)]
    pub attributes: ChangeableAttributes,
}

/// Response of `GET /acr/v1/{repo}/_tags`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RepositoryTagSet {
    pub registry: String,
    pub image_name: String,
    pub tags: Vec<Tag>,
}

/// A content-addressed image descriptor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    pub digest: String,
    #[serde(rename = "imageSize", default)]
    pub size_bytes: u64,
    #[serde(rename = "createdTime")]
    pub created_at: DateTime<Utc>,
    /// Informational only and passed through verbatim
    #[serde(rename = "lastUpdateTime", default)]
    pub last_updated_at: String,
    #[serde(default)]
    pub architecture: String,
    #[serde(default)]
    pub os: String,
    #[serde(default)]
    pub media_type: String,
    #[serde(default)]
    pub config_media_type: String,
    #[serde(rename = "tags", default)]
    pub associated_tags: Vec<String>,
    #[serde(rename = "changeableAttributes", default)]
    pub attributes: ChangeableAttributes,
}

/// Response of `GET /acr/v1/{repo}/_manifests`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RepositoryManifestSet {
    pub registry: String,
    pub image_name: String,
    pub manifests: Vec<Manifest>,
}
