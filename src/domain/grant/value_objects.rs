// src/domain/grant/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
pub enum BadgeColor {
    #[default]
    #[serde(rename = "grant-turmeric")]
    Turmeric,
    #[serde(rename = "grant-urgent")]
    Urgent,
}

impl BadgeColor {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Turmeric => "grant-turmeric",
            Self::Urgent => "grant-urgent",
        }
    }
}

impl FromStr for BadgeColor {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        match s {
            "grant-turmeric" => Ok(Self::Turmeric),
            "grant-urgent" => Ok(Self::Urgent),
            other => Err(DomainError::invalid_field(
                "badge_color",
                format!("unknown badge color '{other}'"),
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum CardBackground {
    #[default]
    LightSky,
    LightForest,
    TurmericLight,
}

impl CardBackground {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LightSky => "light-sky",
            Self::LightForest => "light-forest",
            Self::TurmericLight => "turmeric-light",
        }
    }
}

impl FromStr for CardBackground {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        match s {
            "light-sky" => Ok(Self::LightSky),
            "light-forest" => Ok(Self::LightForest),
            "turmeric-light" => Ok(Self::TurmericLight),
            other => Err(DomainError::invalid_field(
                "background_color",
                format!("unknown background color '{other}'"),
            )),
        }
    }
}

/// Whether the grant card and its dedicated page are shown on the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Visible,
    Hidden,
}

impl Visibility {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Visible => "visible",
            Self::Hidden => "hidden",
        }
    }
}

impl FromStr for Visibility {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        match s {
            "visible" => Ok(Self::Visible),
            "hidden" => Ok(Self::Hidden),
            other => Err(DomainError::invalid_field(
                "visibility",
                format!("unknown visibility '{other}'"),
            )),
        }
    }
}
