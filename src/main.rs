use paralympics_backend::application::interactors::{profile::CountProfilesInteractor, users::CountUsersInteractor};
use paralympics_backend::infra::{
    config::AppConfig,
    init_app_state,
    setup::init_tracing,
    state::FromAppState
};
use std::env;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let path_config = env::var("BASE_CONFIG").unwrap_or_else(|_| "config/base.toml".to_string());
    let config = AppConfig::from_file(path_config)?;
    let _guards = init_tracing(&config)?;
    info!("Preparing database...");
    let state = init_app_state(&config).await?;

    let users = CountUsersInteractor::from_app_state(&state).await?.execute().await?;
    let profiles = CountProfilesInteractor::from_app_state(&state).await?.execute().await?;
    info!(users, profiles, "Database ready at {}", config.db.url);

    state.pool.close().await;
    Ok(())
}
