pub mod api;
pub mod config;
pub mod core_state;
pub mod db;
pub mod models;
pub mod patients;
pub mod prescriptions;
pub mod schedule;
pub mod seed;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

/// Anything that stops the service before or while serving.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("State error: {0}")]
    Core(#[from] core_state::CoreError),
    #[error("Runtime error: {0}")]
    Runtime(#[from] std::io::Error),
    #[error(transparent)]
    Server(#[from] api::ServerError),
}

pub fn run() -> Result<(), StartupError> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let result = start();
    if let Err(e) = &result {
        tracing::error!("{e}");
    }
    result
}

fn start() -> Result<(), StartupError> {
    let config = config::ClinicConfig::from_env()?;
    tracing::info!(
        addr = %config.addr,
        data_dir = %config.data_dir.display(),
        day_boundary = ?config.day_boundary,
        "Configuration loaded"
    );

    let state = core_state::ClinicState::open(&config.database_path(), config.day_boundary)?;
    if config.seed_demo_data && state.seed_if_empty()? {
        tracing::info!("Demo data loaded into empty database");
    }

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    runtime.block_on(api::serve(Arc::new(state), config.addr))?;

    tracing::info!("{} stopped", config::APP_NAME);
    Ok(())
}
