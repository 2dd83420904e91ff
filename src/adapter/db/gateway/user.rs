use async_trait::async_trait;
use futures::FutureExt;
use sqlx::Row;
use sqlx::sqlite::SqliteRow;
use uuid::Uuid;

use crate::adapter::db::session::SqlxSession;
use crate::application::app_error::AppResult;
use crate::application::interface::gateway::user::{UserReader, UserWriter};
use crate::domain::entities::id::Id;
use crate::domain::entities::user::User;

#[derive(Clone)]
pub struct UserGateway {
    session: SqlxSession,
}

impl UserGateway {
    pub fn new(session: SqlxSession) -> Self {
        Self { session }
    }

    fn find_user(result: Option<SqliteRow>) -> AppResult<Option<User>> {
        match result {
            Some(row) => Ok(Some(User {
                id: Id::new(row.try_get("id")?),
                first_name: row.try_get("first_name")?,
                last_name: row.try_get("last_name")?,
                email: row.try_get("email")?,
                password_hash: row.try_get("password_hash")?,
                created_at: row.try_get("created_at")?,
                updated_at: row.try_get("updated_at")?,
            })),
            None => Ok(None),
        }
    }
}

#[async_trait]
impl UserWriter for UserGateway {
    async fn insert(&self, user: User) -> AppResult<Id<User>> {
        self.session
            .with_tx(|tx| {
                async move {
                    let result = sqlx::query(
                        r#"
                            INSERT INTO users
                                (id, first_name, last_name, email, password_hash, created_at, updated_at)
                            VALUES
                                (?1, ?2, ?3, ?4, ?5, ?6, ?7)
                            RETURNING
                                id
                        "#,
                    )
                    .bind(user.id.value)
                    .bind(&user.first_name)
                    .bind(&user.last_name)
                    .bind(&user.email)
                    .bind(&user.password_hash)
                    .bind(user.created_at)
                    .bind(user.updated_at)
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
impl UserReader for UserGateway {
    async fn find_by_id(&self, user_id: &Id<User>) -> AppResult<Option<User>> {
        self.session
            .with_tx(|tx| {
                let user_id = user_id.value;
                async move {
                    let result = sqlx::query(
                        r#"
                            SELECT
                                id, first_name, last_name, email, password_hash, created_at, updated_at
                            FROM
                                users
                            WHERE id = ?1
                        "#,
                    )
                    .bind(user_id)
                    .fetch_optional(tx.as_mut())
                    .await?;

                    Self::find_user(result)
                }
                .boxed()
            })
            .await
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        self.session
            .with_tx(|tx| {
                let email = email.to_owned();
                async move {
                    let result = sqlx::query(
                        r#"
                            SELECT
                                id, first_name, last_name, email, password_hash, created_at, updated_at
                            FROM
                                users
                            WHERE email = ?1
                        "#,
                    )
                    .bind(&email)
                    .fetch_optional(tx.as_mut())
                    .await?;

                    Self::find_user(result)
                }
                .boxed()
            })
            .await
    }

    async fn is_email_taken(&self, email: &str) -> AppResult<bool> {
        self.session
            .with_tx(|tx| {
                let email = email.to_owned();
                async move {
                    let result = sqlx::query(
                        r#"
                            SELECT EXISTS(
                                SELECT
                                    id
                                FROM
                                    users
                                WHERE email = ?1
                            ) AS is_taken
                        "#,
                    )
                    .bind(&email)
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
                    let result = sqlx::query("SELECT COUNT(*) AS total FROM users")
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
