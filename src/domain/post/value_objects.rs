// src/domain/post/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use serde_json::{Value, json};

/// Rich-text document body: a JSON array of block nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct PostContent(Value);

impl PostContent {
    pub fn new(value: Value) -> DomainResult<Self> {
        match value {
            Value::Array(ref blocks) if blocks.iter().all(Value::is_object) => Ok(Self(value)),
            _ => Err(DomainError::invalid_field(
                "content",
                "content must be an array of document blocks",
            )),
        }
    }

    /// A document holding a single empty paragraph.
    pub fn empty() -> Self {
        Self(json!([{ "type": "paragraph", "children": [{ "text": "" }] }]))
    }

    pub const fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_inner(self) -> Value {
        self.0
    }
}

impl Default for PostContent {
    fn default() -> Self {
        Self::empty()
    }
}

/// Reference to an uploaded banner in the image store (public id or URL).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BannerImage(String);

impl BannerImage {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::invalid_field("banner", "banner reference cannot be empty"));
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
