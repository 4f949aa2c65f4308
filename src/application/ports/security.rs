// src/application/ports/security.rs
use crate::application::ApplicationResult;
use async_trait::async_trait;

#[async_trait]
pub trait PasswordHasher: Send + Sync {
    /// One-way hash suitable for storing in `users.password_hash`.
    async fn hash(&self, password: &str) -> ApplicationResult<String>;
}
