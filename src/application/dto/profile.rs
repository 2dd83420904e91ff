use chrono::{DateTime, Utc};
use validator::Validate;

use crate::application::dto::user::CreateUserDTO;
use crate::domain::entities::profile::Profile;

#[derive(Debug, Clone, Validate)]
pub struct CreateUserWithProfileDTO {
    #[validate(nested)]
    pub user: CreateUserDTO,
    #[validate(length(min = 1, max = 50, message = "Username must be between 1 and 50 characters"))]
    pub username: String,
    pub photo: Option<String>,
    #[validate(length(max = 500, message = "Bio must be at most 500 characters"))]
    pub bio: Option<String>,
}

#[derive(Debug, Clone)]
pub struct UserWithProfileDTO {
    pub user_id: String,
    pub profile_id: String,
}

#[derive(Debug, Clone)]
pub struct ProfileDTO {
    pub id: String,
    pub user_id: String,
    pub username: String,
    pub photo: Option<String>,
    pub bio: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Profile> for ProfileDTO {
    fn from(profile: Profile) -> Self {
        Self {
            id: profile.id.value.to_string(),
            user_id: profile.user_id.value.to_string(),
            username: profile.username,
            photo: profile.photo,
            bio: profile.bio,
            created_at: profile.created_at,
            updated_at: profile.updated_at,
        }
    }
}
