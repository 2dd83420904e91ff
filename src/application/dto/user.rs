use chrono::{DateTime, Utc};
use validator::Validate;

use crate::domain::entities::user::User;

#[derive(Debug, Clone, Validate)]
pub struct CreateUserDTO {
    #[validate(length(min = 1, max = 100, message = "First name must be between 1 and 100 characters"))]
    pub first_name: String,
    #[validate(length(min = 1, max = 100, message = "Last name must be between 1 and 100 characters"))]
    pub last_name: String,
    #[validate(email(message = "Email must be a valid address"))]
    pub email: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters long"))]
    pub password_text: String,
}

#[derive(Debug)]
pub struct CredentialsDTO {
    pub email: String,
    pub password_text: String,
}

#[derive(Debug, Clone)]
pub struct UserDTO {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserDTO {
    fn from(user: User) -> Self {
        Self {
            id: user.id.value.to_string(),
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}
