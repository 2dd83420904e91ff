use crate::{
    application::app_error::AppResult,
    domain::entities::{
        id::Id,
        profile::Profile,
        user::User
    }
};
use async_trait::async_trait;

#[async_trait]
pub trait ProfileWriter: Send + Sync {
    async fn insert(&self, profile: Profile) -> AppResult<Id<Profile>>;
}

#[async_trait]
pub trait ProfileReader: Send + Sync {
    async fn find_by_user_id(&self, user_id: &Id<User>) -> AppResult<Option<Profile>>;
    async fn is_username_taken(&self, username: &str) -> AppResult<bool>;
    async fn count(&self) -> AppResult<i64>;
}
