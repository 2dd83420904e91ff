use crate::application::app_error::AppResult;
use async_trait::async_trait;

/// One-way hashing of user passwords. Only the hash is ever stored.
#[async_trait]
pub trait CredentialsHasher: Send + Sync {
    async fn hash_password(&self, password_text: &str) -> AppResult<String>;
    async fn verify_password(&self, password_text: &str, password_hash: &str) -> AppResult<bool>;
}
