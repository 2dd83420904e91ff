use crate::application::{
    app_error::{AppError, AppResult},
    interface::crypto::CredentialsHasher,
};
use argon2::{
    password_hash::{
        rand_core::OsRng,
        SaltString
    },
    Argon2,
    PasswordHash,
    PasswordHasher,
    PasswordVerifier
};
use async_trait::async_trait;

/// Argon2id with the crate defaults. Hashing runs on the blocking pool.
#[derive(Default, Clone)]
pub struct ArgonPasswordHasher {
    hasher: Argon2<'static>,
}

#[async_trait]
impl CredentialsHasher for ArgonPasswordHasher {
    async fn hash_password(&self, password_text: &str) -> AppResult<String> {
        let password_text = password_text.to_owned();
        let hasher = self.hasher.clone();
        tokio::task::spawn_blocking(move || {
            let salt = SaltString::generate(&mut OsRng);
            hasher
                .hash_password(password_text.as_bytes(), &salt)
                .map(|h| h.to_string())
                .map_err(|_| AppError::PasswordHashError)
        })
        .await
        .map_err(|_| AppError::PasswordHashError)?
    }

    async fn verify_password(&self, password_text: &str, password_hash: &str) -> AppResult<bool> {
        let password_text = password_text.to_owned();
        let password_hash = password_hash.to_owned();
        let hasher = self.hasher.clone();
        tokio::task::spawn_blocking(move || {
            let parsed_hash = PasswordHash::new(&password_hash).map_err(|_| AppError::InvalidCredentials)?;
            Ok(hasher.verify_password(password_text.as_bytes(), &parsed_hash).is_ok())
        })
        .await
        .map_err(|_| AppError::InvalidCredentials)?
    }
}
