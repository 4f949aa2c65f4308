// src/domain/slug/mod.rs
pub mod collection;
pub mod errors;
pub mod repository;
pub mod services;
pub mod value_objects;

pub use collection::SluggedCollection;
pub use errors::SlugError;
pub use repository::SlugLookup;
pub use services::{SlugAssignmentService, SlugRequest};
pub use value_objects::{SLUG_MAX_LEN, Slug, SlugOwner};
