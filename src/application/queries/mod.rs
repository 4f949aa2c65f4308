// src/application/queries/mod.rs
pub mod grants;
pub mod home_page;
pub mod pages;
pub mod posts;
pub mod slugs;
pub mod users;
