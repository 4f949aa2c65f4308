// tests/support/mocks/security.rs
use async_trait::async_trait;
use grant_cms::application::{ApplicationResult, ports::security::PasswordHasher};

/// Prefixes instead of hashing so tests can assert on the stored value.
#[derive(Clone, Debug, Default)]
pub struct PlainPasswordHasher;

#[async_trait]
impl PasswordHasher for PlainPasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        Ok(format!("plain:{password}"))
    }
}
