// src/domain/content/mod.rs
pub mod hero;
pub mod value_objects;

pub use hero::{CTA_URL_MAX_LEN, CtaUrl, HeroSection};
pub use value_objects::{PublishState, RecordId, RequiredText, Title};
