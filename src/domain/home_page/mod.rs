// src/domain/home_page/mod.rs
pub mod entity;
pub mod repository;

pub use entity::HomePage;
pub use repository::HomePageRepository;
