// src/domain/grant/mod.rs
pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{GrantCard, GrantType, GrantTypeUpdate, NewGrantType};
pub use repository::{GrantTypeReadRepository, GrantTypeWriteRepository};
pub use value_objects::{BadgeColor, CardBackground, Visibility};
