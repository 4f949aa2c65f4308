// src/domain/content/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use utoipa::ToSchema;

/// Identifier of a page, post or grant listing. Assigned by storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordId(pub i64);

impl RecordId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("record id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<RecordId> for i64 {
    fn from(value: RecordId) -> Self {
        value.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Title(String);

impl Title {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::invalid_field("title", "title is required"));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Mandatory free-text field. Remembers which field it belongs to so a blank
/// value can be reported against it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequiredText(String);

impl RequiredText {
    pub fn new(field: &'static str, value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::invalid_field(
                field,
                format!("{field} is required"),
            ));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum PublishState {
    Published,
    #[default]
    Draft,
}

impl PublishState {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Published => "published",
            Self::Draft => "draft",
        }
    }

    pub const fn is_published(self) -> bool {
        matches!(self, Self::Published)
    }
}

impl FromStr for PublishState {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "published" => Ok(Self::Published),
            "draft" => Ok(Self::Draft),
            other => Err(DomainError::Validation(format!(
                "unknown publish state '{other}'"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_title_is_a_field_error() {
        let err = Title::new("  ").unwrap_err();
        assert!(matches!(err, DomainError::InvalidField { field: "title", .. }));
    }

    #[test]
    fn required_text_names_its_field() {
        let err = RequiredText::new("grant_amount", "").unwrap_err();
        match err {
            DomainError::InvalidField { field, message } => {
                assert_eq!(field, "grant_amount");
                assert_eq!(message, "grant_amount is required");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn publish_state_parses() {
        assert_eq!("draft".parse::<PublishState>().unwrap(), PublishState::Draft);
        assert!("live".parse::<PublishState>().is_err());
        assert_eq!(PublishState::default(), PublishState::Draft);
    }
}
