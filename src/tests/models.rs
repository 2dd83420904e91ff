#![cfg(test)]

use rstest::rstest;
use uuid::Uuid;

use crate::adapter::db::gateway::profile::ProfileGateway;
use crate::adapter::db::gateway::user::UserGateway;
use crate::adapter::db::session::SqlxSession;
use crate::application::app_error::AppError;
use crate::application::dto::id::IdDTO;
use crate::application::dto::profile::CreateUserWithProfileDTO;
use crate::application::dto::user::{CreateUserDTO, CredentialsDTO};
use crate::application::interactors::profile::{
    CountProfilesInteractor, CreateUserWithProfileInteractor, GetProfileInteractor,
};
use crate::application::interactors::users::{
    CountUsersInteractor, CreateUserInteractor, GetUserInteractor, VerifyCredentialsInteractor,
};
use crate::application::interface::db::DBSession;
use crate::application::interface::gateway::profile::ProfileWriter;
use crate::application::interface::gateway::user::UserWriter;
use crate::domain::entities::id::Id;
use crate::domain::entities::profile::Profile;
use crate::domain::entities::user::User;
use crate::infra::state::{AppState, FromAppState};
use crate::tests::fixtures::{TestDatabase, db, new_user_with_profile};
use crate::tests::helpers::{count_rows, delete_user, find_profile_owner, find_user_by_email};

fn alice_cooper() -> CreateUserDTO {
    CreateUserDTO {
        first_name: "Alice".to_string(),
        last_name: "Cooper".to_string(),
        email: "a_cooper@poison.net".to_string(),
        password_text: "SchoolsOut".to_string(),
    }
}

async fn user_count(state: &AppState) -> i64 {
    CountUsersInteractor::from_app_state(state)
        .await
        .unwrap()
        .execute()
        .await
        .expect("count users")
}

async fn profile_count(state: &AppState) -> i64 {
    CountProfilesInteractor::from_app_state(state)
        .await
        .unwrap()
        .execute()
        .await
        .expect("count profiles")
}

/// GIVEN a migrated database
/// WHEN a new user is inserted in the users table
/// THEN the row count increases by one
#[rstest]
#[tokio::test]
async fn test_user_table_has_one_more_row(#[future] db: TestDatabase) {
    let db = db.await;

    let row_count_start = user_count(&db.state).await;
    let interactor = CreateUserInteractor::from_app_state(&db.state).await.unwrap();
    interactor.execute(alice_cooper()).await.expect("create user");
    let row_count_end = user_count(&db.state).await;

    assert_eq!(row_count_end - row_count_start, 1);
}

/// GIVEN a migrated database
/// WHEN a new user with a profile is inserted
/// THEN the users and profiles row counts both increase by one and the
/// profile carries the new user's id
#[rstest]
#[tokio::test]
async fn test_new_user_with_profile_added_successfully(
    #[future] db: TestDatabase,
    new_user_with_profile: CreateUserWithProfileDTO,
) {
    let db = db.await;
    let email = new_user_with_profile.user.email.clone();

    let users_start = user_count(&db.state).await;
    let profiles_start = profile_count(&db.state).await;
    let created = CreateUserWithProfileInteractor::from_app_state(&db.state)
        .await
        .unwrap()
        .execute(new_user_with_profile)
        .await
        .expect("create user with profile");
    let users_end = user_count(&db.state).await;
    let profiles_end = profile_count(&db.state).await;

    assert_eq!(users_end - users_start, 1);
    assert_eq!(profiles_end - profiles_start, 1);

    let user_id = find_user_by_email(&db.state.pool, &email).await.expect("user row");
    let profile_id = Uuid::parse_str(&created.profile_id).unwrap();
    assert_eq!(user_id.to_string(), created.user_id);
    assert_eq!(find_profile_owner(&db.state.pool, profile_id).await, Some(user_id));
}

#[rstest]
#[tokio::test]
async fn test_profile_is_found_by_user_id(
    #[future] db: TestDatabase,
    new_user_with_profile: CreateUserWithProfileDTO,
) {
    let db = db.await;
    let username = new_user_with_profile.username.clone();
    let created = CreateUserWithProfileInteractor::from_app_state(&db.state)
        .await
        .unwrap()
        .execute(new_user_with_profile)
        .await
        .unwrap();

    let profile = GetProfileInteractor::from_app_state(&db.state)
        .await
        .unwrap()
        .execute(IdDTO {
            id: created.user_id.clone(),
        })
        .await
        .unwrap();

    assert_eq!(profile.id, created.profile_id);
    assert_eq!(profile.user_id, created.user_id);
    assert_eq!(profile.username, username);
    assert_eq!(profile.photo.as_deref(), Some("vincent.png"));
}

#[rstest]
#[tokio::test]
async fn test_stored_user_round_trips(#[future] db: TestDatabase) {
    let db = db.await;
    let created = CreateUserInteractor::from_app_state(&db.state)
        .await
        .unwrap()
        .execute(alice_cooper())
        .await
        .unwrap();

    let user = GetUserInteractor::from_app_state(&db.state)
        .await
        .unwrap()
        .execute(created.clone())
        .await
        .unwrap();

    assert_eq!(user.id, created.id);
    assert_eq!(user.first_name, "Alice");
    assert_eq!(user.last_name, "Cooper");
    assert_eq!(user.email, "a_cooper@poison.net");
}

#[rstest]
#[tokio::test]
async fn test_password_is_stored_hashed(#[future] db: TestDatabase) {
    let db = db.await;
    CreateUserInteractor::from_app_state(&db.state)
        .await
        .unwrap()
        .execute(alice_cooper())
        .await
        .unwrap();

    let stored: String = sqlx::query_scalar("SELECT password_hash FROM users WHERE email = ?1")
        .bind("a_cooper@poison.net")
        .fetch_one(&db.state.pool)
        .await
        .unwrap();
    assert_ne!(stored, "SchoolsOut");

    let verifier = VerifyCredentialsInteractor::from_app_state(&db.state).await.unwrap();
    let correct = verifier
        .execute(CredentialsDTO {
            email: "a_cooper@poison.net".to_string(),
            password_text: "SchoolsOut".to_string(),
        })
        .await
        .unwrap();
    let wrong = verifier
        .execute(CredentialsDTO {
            email: "a_cooper@poison.net".to_string(),
            password_text: "NoMoreMrNiceGuy".to_string(),
        })
        .await
        .unwrap();

    assert!(correct);
    assert!(!wrong);
}

#[rstest]
#[tokio::test]
async fn test_duplicate_email_is_rejected(#[future] db: TestDatabase) {
    let db = db.await;
    CreateUserInteractor::from_app_state(&db.state)
        .await
        .unwrap()
        .execute(alice_cooper())
        .await
        .unwrap();
    let row_count_start = user_count(&db.state).await;

    let result = CreateUserInteractor::from_app_state(&db.state)
        .await
        .unwrap()
        .execute(alice_cooper())
        .await;

    assert!(matches!(result, Err(AppError::UserAlreadyExists)));
    assert_eq!(user_count(&db.state).await, row_count_start);
}

#[rstest]
#[tokio::test]
async fn test_duplicate_username_is_rejected(
    #[future] db: TestDatabase,
    new_user_with_profile: CreateUserWithProfileDTO,
) {
    let db = db.await;
    let mut second = new_user_with_profile.clone();
    second.user.email = "second@test.example".to_string();
    CreateUserWithProfileInteractor::from_app_state(&db.state)
        .await
        .unwrap()
        .execute(new_user_with_profile)
        .await
        .unwrap();

    let result = CreateUserWithProfileInteractor::from_app_state(&db.state)
        .await
        .unwrap()
        .execute(second)
        .await;

    assert!(matches!(result, Err(AppError::UsernameAlreadyExists)));
    assert_eq!(count_rows(&db.state.pool, "users").await, 1);
    assert_eq!(count_rows(&db.state.pool, "profiles").await, 1);
}

#[rstest]
#[tokio::test]
async fn test_failed_profile_insert_leaves_no_user(#[future] db: TestDatabase) {
    let db = db.await;
    let session = SqlxSession::new_lazy(db.state.pool.clone());
    let user_gateway = UserGateway::new(session.clone());
    let profile_gateway = ProfileGateway::new(session.clone());

    let user = User::new(
        "Alice".to_string(),
        "Cooper".to_string(),
        "a_cooper@poison.net".to_string(),
        "hash".to_string(),
    );
    user_gateway.insert(user).await.unwrap();
    let orphan = Profile::new(Id::generate(), "alice".to_string(), None, None);
    let result = profile_gateway.insert(orphan).await;
    assert!(matches!(result, Err(AppError::DatabaseError(_))));
    session.rollback().await.unwrap();

    assert_eq!(count_rows(&db.state.pool, "users").await, 0);
    assert_eq!(count_rows(&db.state.pool, "profiles").await, 0);
}

#[rstest]
#[tokio::test]
async fn test_second_profile_for_same_user_is_rejected(#[future] db: TestDatabase) {
    let db = db.await;
    let session = SqlxSession::new_lazy(db.state.pool.clone());
    let user_gateway = UserGateway::new(session.clone());
    let profile_gateway = ProfileGateway::new(session.clone());

    let user = User::new(
        "Alice".to_string(),
        "Cooper".to_string(),
        "a_cooper@poison.net".to_string(),
        "hash".to_string(),
    );
    let user_id = user_gateway.insert(user).await.unwrap();
    profile_gateway
        .insert(Profile::new(user_id.clone(), "alice".to_string(), None, None))
        .await
        .unwrap();
    let result = profile_gateway
        .insert(Profile::new(user_id, "alice_again".to_string(), None, None))
        .await;

    assert!(matches!(result, Err(AppError::DatabaseError(_))));
}

#[rstest]
#[tokio::test]
async fn test_deleting_user_removes_profile(
    #[future] db: TestDatabase,
    new_user_with_profile: CreateUserWithProfileDTO,
) {
    let db = db.await;
    let created = CreateUserWithProfileInteractor::from_app_state(&db.state)
        .await
        .unwrap()
        .execute(new_user_with_profile)
        .await
        .unwrap();

    delete_user(&db.state.pool, Uuid::parse_str(&created.user_id).unwrap()).await;

    assert_eq!(count_rows(&db.state.pool, "profiles").await, 0);
    assert_eq!(profile_count(&db.state).await, 0);
}
