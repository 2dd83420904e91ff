use std::sync::Arc;

use async_trait::async_trait;
use sqlx::{Pool, Sqlite};

use crate::adapter::db::gateway::profile::ProfileGateway;
use crate::adapter::db::gateway::user::UserGateway;
use crate::adapter::db::session::SqlxSession;
use crate::application::app_error::AppResult;
use crate::application::interactors::profile::{
    CountProfilesInteractor, CreateUserWithProfileInteractor, GetProfileInteractor,
};
use crate::application::interactors::users::{
    CountUsersInteractor, CreateUserInteractor, GetUserInteractor, VerifyCredentialsInteractor,
};
use crate::application::interface::crypto::CredentialsHasher;
use crate::infra::config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub pool: Pool<Sqlite>,
    pub hasher: Arc<dyn CredentialsHasher>,
    pub config: Arc<AppConfig>,
}

/// Builds a use case with its own `SqlxSession`, so every call gets a fresh
/// unit of work.
#[async_trait]
pub trait FromAppState: Sized {
    async fn from_app_state(state: &AppState) -> AppResult<Self>;
}

// CreateUserInteractor
#[async_trait]
impl FromAppState for CreateUserInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        let user_gateway = UserGateway::new(session.clone());

        Ok(CreateUserInteractor::new(
            Arc::new(session),
            Arc::new(user_gateway.clone()),
            Arc::new(user_gateway),
            state.hasher.clone(),
        ))
    }
}

// CreateUserWithProfileInteractor
#[async_trait]
impl FromAppState for CreateUserWithProfileInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        let user_gateway = UserGateway::new(session.clone());
        let profile_gateway = ProfileGateway::new(session.clone());

        Ok(CreateUserWithProfileInteractor::new(
            Arc::new(session),
            Arc::new(user_gateway.clone()),
            Arc::new(user_gateway),
            Arc::new(profile_gateway.clone()),
            Arc::new(profile_gateway),
            state.hasher.clone(),
        ))
    }
}

// GetUserInteractor
#[async_trait]
impl FromAppState for GetUserInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        let user_gateway = Arc::new(UserGateway::new(session));

        Ok(GetUserInteractor::new(user_gateway))
    }
}

// GetProfileInteractor
#[async_trait]
impl FromAppState for GetProfileInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        let profile_gateway = Arc::new(ProfileGateway::new(session));

        Ok(GetProfileInteractor::new(profile_gateway))
    }
}

// CountUsersInteractor
#[async_trait]
impl FromAppState for CountUsersInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        Ok(CountUsersInteractor::new(Arc::new(UserGateway::new(session))))
    }
}

// CountProfilesInteractor
#[async_trait]
impl FromAppState for CountProfilesInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        Ok(CountProfilesInteractor::new(Arc::new(ProfileGateway::new(session))))
    }
}

// VerifyCredentialsInteractor
#[async_trait]
impl FromAppState for VerifyCredentialsInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        let user_gateway = Arc::new(UserGateway::new(session));

        Ok(VerifyCredentialsInteractor::new(user_gateway, state.hasher.clone()))
    }
}
