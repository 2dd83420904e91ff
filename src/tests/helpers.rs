#![cfg(test)]

use sqlx::SqlitePool;
use uuid::Uuid;

pub fn unique_credentials() -> (String, String) {
    let id = Uuid::now_v7().as_simple().to_string();
    let username = format!("t_{}", &id[..16]);
    let email = format!("{}@test.example", &id[..16]);

    (username, email)
}

pub async fn count_rows(pool: &SqlitePool, table: &str) -> i64 {
    sqlx::query_scalar::<_, i64>(&format!("SELECT COUNT(*) FROM {}", table))
        .fetch_one(pool)
        .await
        .expect("count rows")
}

pub async fn find_user_by_email(pool: &SqlitePool, email: &str) -> Option<Uuid> {
    sqlx::query_scalar::<_, Uuid>("SELECT id FROM users WHERE email = ?1")
        .bind(email)
        .fetch_optional(pool)
        .await
        .expect("find user by email")
}

pub async fn find_profile_owner(pool: &SqlitePool, profile_id: Uuid) -> Option<Uuid> {
    sqlx::query_scalar::<_, Uuid>("SELECT user_id FROM profiles WHERE id = ?1")
        .bind(profile_id)
        .fetch_optional(pool)
        .await
        .expect("find profile owner")
}

pub async fn delete_user(pool: &SqlitePool, user_id: Uuid) {
    sqlx::query("DELETE FROM users WHERE id = ?1")
        .bind(user_id)
        .execute(pool)
        .await
        .expect("delete user");
}
