use chrono::{DateTime, Utc};

use crate::domain::entities::{id::Id, user::User};

#[derive(Debug, Clone)]
pub struct Profile {
    pub id: Id<Profile>,
    pub user_id: Id<User>,
    pub username: String,
    pub photo: Option<String>,
    pub bio: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    pub fn new(user_id: Id<User>, username: String, photo: Option<String>, bio: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Id::generate(),
            user_id,
            username,
            photo,
            bio,
            created_at: now,
            updated_at: now,
        }
    }
}
