// src/domain/user/repository.rs
use crate::domain::errors::DomainResult;
use crate::domain::user::{
    entity::{NewUser, User},
    value_objects::UserId,
};
use async_trait::async_trait;

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fails with `DomainError::Conflict` when the email is already registered.
    async fn insert(&self, new_user: NewUser) -> DomainResult<User>;

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>>;

    async fn list(&self) -> DomainResult<Vec<User>>;
}
