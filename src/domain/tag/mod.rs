// src/domain/tag/mod.rs
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TagId(pub i64);

impl TagId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("tag id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<TagId> for i64 {
    fn from(value: TagId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagName(String);

impl TagName {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::invalid_field("name", "tag name cannot be empty"));
        }
        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for TagName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone)]
pub struct Tag {
    pub id: TagId,
    pub name: TagName,
}

#[async_trait]
pub trait TagRepository: Send + Sync {
    async fn insert(&self, name: TagName) -> DomainResult<Tag>;
    async fn list(&self) -> DomainResult<Vec<Tag>>;
    /// Subset of `ids` that exist.
    async fn find_existing(&self, ids: &[TagId]) -> DomainResult<Vec<TagId>>;
}
