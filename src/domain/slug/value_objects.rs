// src/domain/slug/value_objects.rs
use crate::domain::content::RecordId;
use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

pub const SLUG_MAX_LEN: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Slug(String);

impl Slug {
    /// Accepts any non-blank value; surrounding whitespace is dropped.
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::invalid_field("slug", "slug cannot be empty"));
        }
        if trimmed.len() == value.len() {
            Ok(Self(value))
        } else {
            Ok(Self(trimmed.to_owned()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Comparison key used by the uniqueness check and the storage index.
    pub fn normalized(&self) -> String {
        self.0.trim().to_lowercase()
    }

    pub fn matches(&self, other: &Self) -> bool {
        self.normalized() == other.normalized()
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Slug> for String {
    fn from(value: Slug) -> Self {
        value.0
    }
}

/// Minimal projection returned by slug lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlugOwner {
    pub id: RecordId,
    pub slug: Slug,
}
