// src/domain/page/mod.rs
pub mod entity;
pub mod repository;

pub use entity::{NewPage, Page, PageUpdate};
pub use repository::{PageReadRepository, PageWriteRepository};
