use std::sync::Arc;

use tracing::{info, warn};
use validator::Validate;

use crate::application::app_error::{AppError, AppResult};
use crate::application::dto::id::IdDTO;
use crate::application::dto::profile::{CreateUserWithProfileDTO, ProfileDTO, UserWithProfileDTO};
use crate::application::interface::crypto::CredentialsHasher;
use crate::application::interface::db::DBSession;
use crate::application::interface::gateway::profile::{ProfileReader, ProfileWriter};
use crate::application::interface::gateway::user::{UserReader, UserWriter};
use crate::domain::entities::id::Id;
use crate::domain::entities::profile::Profile;
use crate::domain::entities::user::User;

/// Creates a user and its profile in one transaction. The profile is keyed by
/// the id of the user inserted just before it.
#[derive(Clone)]
pub struct CreateUserWithProfileInteractor {
    db_session: Arc<dyn DBSession>,
    user_reader: Arc<dyn UserReader>,
    user_writer: Arc<dyn UserWriter>,
    profile_reader: Arc<dyn ProfileReader>,
    profile_writer: Arc<dyn ProfileWriter>,
    hasher: Arc<dyn CredentialsHasher>,
}

impl CreateUserWithProfileInteractor {
    pub fn new(
        db_session: Arc<dyn DBSession>,
        user_reader: Arc<dyn UserReader>,
        user_writer: Arc<dyn UserWriter>,
        profile_reader: Arc<dyn ProfileReader>,
        profile_writer: Arc<dyn ProfileWriter>,
        hasher: Arc<dyn CredentialsHasher>,
    ) -> Self {
        Self {
            db_session,
            user_reader,
            user_writer,
            profile_reader,
            profile_writer,
            hasher,
        }
    }

    pub async fn execute(&self, dto: CreateUserWithProfileDTO) -> AppResult<UserWithProfileDTO> {
        dto.validate()?;
        if self.user_reader.is_email_taken(&dto.user.email).await? {
            warn!("Registration attempt with existing email: {}", dto.user.email);
            return Err(AppError::UserAlreadyExists);
        }
        if self.profile_reader.is_username_taken(&dto.username).await? {
            warn!("Registration attempt with existing username: {}", dto.username);
            return Err(AppError::UsernameAlreadyExists);
        }
        let password_hash = self.hasher.hash_password(&dto.user.password_text).await?;
        let user = User::new(dto.user.first_name, dto.user.last_name, dto.user.email, password_hash);

        let user_id = self.user_writer.insert(user).await?;
        let profile = Profile::new(user_id.clone(), dto.username, dto.photo, dto.bio);
        let profile_id = match self.profile_writer.insert(profile).await {
            Ok(profile_id) => profile_id,
            Err(e) => {
                self.db_session.rollback().await?;
                return Err(e);
            }
        };
        self.db_session.commit().await?;

        info!("User {} created with profile {}", user_id, profile_id);
        Ok(UserWithProfileDTO {
            user_id: user_id.value.to_string(),
            profile_id: profile_id.value.to_string(),
        })
    }
}

#[derive(Clone)]
pub struct GetProfileInteractor {
    profile_reader: Arc<dyn ProfileReader>,
}

impl GetProfileInteractor {
    pub fn new(profile_reader: Arc<dyn ProfileReader>) -> Self {
        Self { profile_reader }
    }

    /// Looks the profile up by the owning user's id.
    pub async fn execute(&self, dto: IdDTO) -> AppResult<ProfileDTO> {
        let user_id: Id<User> = dto.id.try_into()?;
        let profile = self
            .profile_reader
            .find_by_user_id(&user_id)
            .await?
            .ok_or(AppError::ProfileNotFound)?;
        Ok(profile.into())
    }
}

#[derive(Clone)]
pub struct CountProfilesInteractor {
    profile_reader: Arc<dyn ProfileReader>,
}

impl CountProfilesInteractor {
    pub fn new(profile_reader: Arc<dyn ProfileReader>) -> Self {
        Self { profile_reader }
    }

    pub async fn execute(&self) -> AppResult<i64> {
        self.profile_reader.count().await
    }
}
