// src/application/error.rs
use crate::domain::{errors::DomainError, slug::SlugError};
use serde::Serialize;
use std::fmt;
use thiserror::Error;
use utoipa::ToSchema;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldErrorKind {
    /// The submitted value is unusable.
    Invalid,
    /// The value collides with another record.
    Conflict,
    /// The value could not be checked right now.
    Unavailable,
}

/// A rejection attached to one input field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct FieldError {
    pub field: String,
    pub message: String,
    #[serde(skip)]
    pub kind: FieldErrorKind,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>, kind: FieldErrorKind) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            kind,
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl From<SlugError> for FieldError {
    fn from(err: SlugError) -> Self {
        let kind = match err {
            SlugError::Missing => FieldErrorKind::Invalid,
            SlugError::Conflict(_) => FieldErrorKind::Conflict,
            SlugError::Unverifiable => FieldErrorKind::Unavailable,
        };
        Self::new(SlugError::FIELD, err.to_string(), kind)
    }
}

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(DomainError),

    #[error("{0}")]
    Field(FieldError),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("resource not found: {0}")]
    NotFound(String),

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("infrastructure failure: {0}")]
    Infrastructure(String),
}

impl ApplicationError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn infrastructure(msg: impl Into<String>) -> Self {
        Self::Infrastructure(msg.into())
    }

    pub fn field(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Field(FieldError::new(field, message, FieldErrorKind::Invalid))
    }

    /// The field-level rejection carried by this error, if any.
    pub const fn as_field(&self) -> Option<&FieldError> {
        match self {
            Self::Field(err) => Some(err),
            _ => None,
        }
    }
}

impl From<SlugError> for ApplicationError {
    fn from(err: SlugError) -> Self {
        Self::Field(err.into())
    }
}

impl From<DomainError> for ApplicationError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::InvalidField { field, message } => {
                Self::Field(FieldError::new(field, message, FieldErrorKind::Invalid))
            }
            // The unique index caught a slug the pre-check let through.
            DomainError::DuplicateSlug(collection) => SlugError::Conflict(collection).into(),
            DomainError::NotFound(msg) => Self::NotFound(msg),
            DomainError::Conflict(msg) => Self::Conflict(msg),
            other => Self::Domain(other),
        }
    }
}
