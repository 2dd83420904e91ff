use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),

    #[error("Validation error: {0}")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("Invalid id: {0}")]
    InvalidId(String),

    #[error("Failed to hash password")]
    PasswordHashError,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("User with this email already exists")]
    UserAlreadyExists,

    #[error("Username is already taken")]
    UsernameAlreadyExists,

    #[error("User not found")]
    UserNotFound,

    #[error("Profile not found")]
    ProfileNotFound,
}

pub type AppResult<T> = Result<T, AppError>;
