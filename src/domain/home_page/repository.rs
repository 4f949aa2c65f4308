// src/domain/home_page/repository.rs
use crate::domain::errors::DomainResult;
use crate::domain::home_page::entity::HomePage;
use async_trait::async_trait;

#[async_trait]
pub trait HomePageRepository: Send + Sync {
    async fn get(&self) -> DomainResult<Option<HomePage>>;
    /// Insert or replace the singleton row.
    async fn save(&self, home: HomePage) -> DomainResult<HomePage>;
    /// Insert `home` only when no row exists yet. Returns whether it was inserted.
    async fn insert_if_absent(&self, home: HomePage) -> DomainResult<bool>;
}
