use std::sync::Arc;

use tracing::{info, warn};
use validator::Validate;

use crate::application::app_error::{AppError, AppResult};
use crate::application::dto::id::IdDTO;
use crate::application::dto::user::{CreateUserDTO, CredentialsDTO, UserDTO};
use crate::application::interface::crypto::CredentialsHasher;
use crate::application::interface::db::DBSession;
use crate::application::interface::gateway::user::{UserReader, UserWriter};
use crate::domain::entities::id::Id;
use crate::domain::entities::user::User;

#[derive(Clone)]
pub struct CreateUserInteractor {
    db_session: Arc<dyn DBSession>,
    user_reader: Arc<dyn UserReader>,
    user_writer: Arc<dyn UserWriter>,
    hasher: Arc<dyn CredentialsHasher>,
}

impl CreateUserInteractor {
    pub fn new(
        db_session: Arc<dyn DBSession>,
        user_reader: Arc<dyn UserReader>,
        user_writer: Arc<dyn UserWriter>,
        hasher: Arc<dyn CredentialsHasher>,
    ) -> Self {
        Self {
            db_session,
            user_reader,
            user_writer,
            hasher,
        }
    }

    pub async fn execute(&self, dto: CreateUserDTO) -> AppResult<IdDTO> {
        dto.validate()?;
        if self.user_reader.is_email_taken(&dto.email).await? {
            warn!("Registration attempt with existing email: {}", dto.email);
            return Err(AppError::UserAlreadyExists);
        }
        let password_hash = self.hasher.hash_password(&dto.password_text).await?;
        let user = User::new(dto.first_name, dto.last_name, dto.email, password_hash);
        let user_id = self.user_writer.insert(user).await?;
        self.db_session.commit().await?;
        info!("User {} created", user_id);
        Ok(IdDTO {
            id: user_id.value.to_string(),
        })
    }
}

#[derive(Clone)]
pub struct GetUserInteractor {
    user_reader: Arc<dyn UserReader>,
}

impl GetUserInteractor {
    pub fn new(user_reader: Arc<dyn UserReader>) -> Self {
        Self { user_reader }
    }

    pub async fn execute(&self, dto: IdDTO) -> AppResult<UserDTO> {
        let user_id: Id<User> = dto.id.try_into()?;
        let user = self
            .user_reader
            .find_by_id(&user_id)
            .await?
            .ok_or(AppError::UserNotFound)?;
        Ok(user.into())
    }
}

#[derive(Clone)]
pub struct CountUsersInteractor {
    user_reader: Arc<dyn UserReader>,
}

impl CountUsersInteractor {
    pub fn new(user_reader: Arc<dyn UserReader>) -> Self {
        Self { user_reader }
    }

    pub async fn execute(&self) -> AppResult<i64> {
        self.user_reader.count().await
    }
}

#[derive(Clone)]
pub struct VerifyCredentialsInteractor {
    user_reader: Arc<dyn UserReader>,
    hasher: Arc<dyn CredentialsHasher>,
}

impl VerifyCredentialsInteractor {
    pub fn new(user_reader: Arc<dyn UserReader>, hasher: Arc<dyn CredentialsHasher>) -> Self {
        Self { user_reader, hasher }
    }

    pub async fn execute(&self, dto: CredentialsDTO) -> AppResult<bool> {
        let user = self.user_reader.find_by_email(&dto.email).await?.ok_or_else(|| {
            warn!("Credentials check for non-existent email: {}", dto.email);
            AppError::InvalidCredentials
        })?;
        self.hasher.verify_password(&dto.password_text, &user.password_hash).await
    }
}
