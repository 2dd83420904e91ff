use async_trait::async_trait;
use futures::FutureExt;
use sqlx::Row;
use sqlx::sqlite::SqliteRow;
use uuid::Uuid;

use crate::adapter::db::session::SqlxSession;
use crate::application::app_error::AppResult;
use crate::application::interface::gateway::profile::{ProfileReader, ProfileWriter};
use crate::domain::entities::id::Id;
use crate::domain::entities::profile::Profile;
use crate::domain::entities::user::User;

#[derive(Clone)]
pub struct ProfileGateway {
    session: SqlxSession,
}

impl ProfileGateway {
    pub fn new(session: SqlxSession) -> Self {
        Self { session }
    }

    fn find_profile(result: Option<SqliteRow>) -> AppResult<Option<Profile>> {
        match result {
            Some(row) => Ok(Some(Profile {
                id: Id::new(row.try_get("id")?),
                user_id: Id::new(row.try_get("user_id")?),
                username: row.try_get("username")?,
                photo: row.try_get("photo")?,
                bio: row.try_get("bio")?,
                created_at: row.try_get("created_at")?,
                updated_at: row.try_get("updated_at")?,
            })),
            None => Ok(None),
        }
    }
}

#[async_trait]
impl ProfileWriter for ProfileGateway {
    async fn insert(&self, profile: Profile) -> AppResult<Id<Profile>> {
        self.session
            .with_tx(|tx| {
                async move {
                    let result = sqlx::query(
                        r#"
                            INSERT INTO profiles
                                (id, user_id, username, photo, bio, created_at, updated_at)
                            VALUES
                                (?1, ?2, ?3, ?4, ?5, ?6, ?7)
                            RETURNING
                                id
                        "#,
                    )
                    .bind(profile.id.value)
                    .bind(profile.user_id.value)
                    .bind(&profile.username)
                    .bind(&profile.photo)
                    .bind(&profile.bio)
                    .bind(profile.created_at)
                    .bind(profile.updated_at)
                    .fetch_one(tx.as_mut())
                    .await?;
                    let id: Uuid = result.try_get("id")?;
                    Ok(Id::new(id))
                }
                .boxed()
            })
            .await
    }
}

#[async_trait]
impl ProfileReader for ProfileGateway {
    async fn find_by_user_id(&self, user_id: &Id<User>) -> AppResult<Option<Profile>> {
        self.session
            .with_tx(|tx| {
                let user_id = user_id.value;
                async move {
                    let result = sqlx::query(
                        r#"
                            SELECT
                                id, user_id, username, photo, bio, created_at, updated_at
                            FROM
                                profiles
                            WHERE user_id = ?1
                        "#,
                    )
                    .bind(user_id)
                    .fetch_optional(tx.as_mut())
                    .await?;

                    Self::find_profile(result)
                }
                .boxed()
            })
            .await
    }

    async fn is_username_taken(&self, username: &str) -> AppResult<bool> {
        self.session
            .with_tx(|tx| {
                let username = username.to_owned();
                async move {
                    let result = sqlx::query(
                        r#"
                            SELECT EXISTS(
                                SELECT
                                    id
                                FROM
                                    profiles
                                WHERE username = ?1
                            ) AS is_taken
                        "#,
                    )
                    .bind(&username)
                    .fetch_one(tx.as_mut())
                    .await?;
                    let is_taken: bool = result.try_get("is_taken")?;
                    Ok(is_taken)
                }
                .boxed()
            })
            .await
    }

    async fn count(&self) -> AppResult<i64> {
        self.session
            .with_tx(|tx| {
                async move {
                    let result = sqlx::query("SELECT COUNT(*) AS total FROM profiles")
                        .fetch_one(tx.as_mut())
                        .await?;
                    let total: i64 = result.try_get("total")?;
                    Ok(total)
                }
                .boxed()
            })
            .await
    }
}
