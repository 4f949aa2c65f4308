// src/domain/slug/errors.rs
use super::SluggedCollection;
use thiserror::Error;

/// Rejections raised while assigning a slug. Each maps to a field-level
/// message on `slug`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SlugError {
    #[error(
        "Slug is required. Please provide a title to auto-generate a slug or enter a custom slug."
    )]
    Missing,
    #[error(
        "This slug is already used by another {}. Please choose a different slug or modify the title to generate a unique slug.",
        .0.label()
    )]
    Conflict(SluggedCollection),
    #[error("Unable to validate slug uniqueness. Please try again.")]
    Unverifiable,
}

impl SlugError {
    pub const FIELD: &'static str = "slug";
}
