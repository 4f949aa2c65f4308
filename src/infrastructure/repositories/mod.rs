// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_grant;
mod postgres_home_page;
mod postgres_page;
mod postgres_post;
mod postgres_slug_lookup;
mod postgres_tag;
mod postgres_user;

pub use error::map_sqlx;
pub use postgres_grant::{PostgresGrantTypeReadRepository, PostgresGrantTypeWriteRepository};
pub use postgres_home_page::PostgresHomePageRepository;
pub use postgres_page::{PostgresPageReadRepository, PostgresPageWriteRepository};
pub use postgres_post::{PostgresPostReadRepository, PostgresPostWriteRepository};
pub use postgres_slug_lookup::PostgresSlugLookup;
pub use postgres_tag::PostgresTagRepository;
pub use postgres_user::PostgresUserRepository;
