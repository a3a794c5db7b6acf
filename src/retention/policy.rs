//! Keep-newest-N selection

use crate::error::handlers::ValidationErrorHandler;
use crate::error::Result;
use crate::registry::model::{ItemKind, Manifest, Tag};
use chrono::{DateTime, Utc};

/// Anything that can be ordered by creation time and deleted by reference
pub trait Retainable {
    const KIND: ItemKind;

    fn created_at(&self) -> DateTime<Utc>;

    /// Name for tags, digest for manifests
    fn reference(&self) -> &str;
}

impl Retainable for Tag {
    const KIND: ItemKind = ItemKind::Tag;

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn reference(&self) -> &str {
        &self.name
    }
}

impl Retainable for Manifest {
    const KIND: ItemKind = ItemKind::Manifest;

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn reference(&self) -> &str {
        &self.digest
    }
}

/// How many items of each kind survive per repository
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetentionPolicy {
    keep: usize,
}

impl RetentionPolicy {
    /// Rejects a non-positive keep-count
    pub fn new(keep: i64) -> Result<Self> {
        let keep = ValidationErrorHandler::validate_keep(keep)?;
        Ok(Self { keep })
    }

    pub fn keep(&self) -> usize {
        self.keep
    }

    pub fn apply<T: Retainable>(&self, items: Vec<T>) -> Selection<T> {
        select(items, self.keep)
    }
}

/// Output of [`select`]: both halves ordered oldest first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection<T> {
    pub delete: Vec<T>,
    pub retain: Vec<T>,
}

impl<T> Selection<T> {
    pub fn is_empty(&self) -> bool {
        self.delete.is_empty()
    }
}

/// Sort oldest first. Ties keep the order the sort leaves them in.
pub fn sort_by_creation<T: Retainable>(items: &mut [T]) {
    items.sort_by_key(|item| item.created_at());
}

/// Everything but the `keep` newest items is selected for deletion.
///
/// `keep == 0` selects everything.
pub fn select<T: Retainable>(mut items: Vec<T>, keep: usize) -> Selection<T> {
    sort_by_creation(&mut items);
    let cut = items.len().saturating_sub(keep);
    let retain = items.split_off(cut);
    Selection {
        delete: items,
        retain,
    }
}
