// src/domain/content/hero.rs
use super::RequiredText;
use crate::domain::errors::{DomainError, DomainResult};
use url::Url;

pub const CTA_URL_MAX_LEN: usize = 2000;

const CTA_URL_FIELD: &str = "cta_button_url";
const PASSTHROUGH_PREFIXES: [&str; 4] = ["/", "#", "mailto:", "tel:"];

/// Call-to-action link target. Accepts absolute URLs, site-relative paths,
/// in-page anchors, `mailto:` and `tel:` links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CtaUrl(String);

impl CtaUrl {
    pub fn new(raw: impl Into<String>) -> DomainResult<Self> {
        let raw = raw.into();
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(DomainError::invalid_field(
                CTA_URL_FIELD,
                "cta_button_url is required",
            ));
        }

        let normalized = Self::normalize(raw);
        if normalized.len() > CTA_URL_MAX_LEN {
            return Err(DomainError::invalid_field(
                CTA_URL_FIELD,
                format!("URL must be at most {CTA_URL_MAX_LEN} characters"),
            ));
        }

        Self::validate(&normalized)?;
        Ok(Self(normalized))
    }

    /// Bare hosts such as `example.org/apply` get an `https://` scheme.
    fn normalize(raw: &str) -> String {
        if raw.starts_with("http") || PASSTHROUGH_PREFIXES.iter().any(|p| raw.starts_with(p)) {
            raw.to_owned()
        } else {
            format!("https://{raw}")
        }
    }

    fn validate(value: &str) -> DomainResult<()> {
        if PASSTHROUGH_PREFIXES.iter().any(|p| value.starts_with(p)) {
            return Ok(());
        }
        Url::parse(value)
            .map(|_| ())
            .map_err(|_| DomainError::invalid_field(CTA_URL_FIELD, "Please enter a valid URL"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Hero block shown at the top of the home page and every page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroSection {
    pub heading: Option<String>,
    pub subheading: Option<String>,
    pub cta_button_text: RequiredText,
    pub cta_button_url: CtaUrl,
}

impl HeroSection {
    pub fn new(
        heading: Option<String>,
        subheading: Option<String>,
        cta_button_text: impl Into<String>,
        cta_button_url: impl Into<String>,
    ) -> DomainResult<Self> {
        Ok(Self {
            heading: heading.filter(|h| !h.trim().is_empty()),
            subheading: subheading.filter(|s| !s.trim().is_empty()),
            cta_button_text: RequiredText::new("cta_button_text", cta_button_text)?,
            cta_button_url: CtaUrl::new(cta_button_url)?,
        })
    }
}
