// src/domain/mod.rs
pub mod content;
pub mod errors;
pub mod grant;
pub mod home_page;
pub mod page;
pub mod post;
pub mod slug;
pub mod tag;
pub mod user;
