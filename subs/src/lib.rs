use std::sync::Arc;

use common::{
    env_config::Config,
    error::{AppError, Res},
};

pub mod clock;
pub mod mapper;
pub mod repository;
pub mod service;
pub mod validator;

pub mod dtos {
    pub mod sub;
}

pub use service::SubscriptionService;

/// Builds a service over the in-process repository with the system clock.
pub fn in_memory() -> SubscriptionService {
    wire(Arc::new(repository::InMemorySubscriptionRepository::new()))
}

/// Wires the production service: logger, Postgres pool (with migrations),
/// repository, validator, mapper and system clock.
pub async fn bootstrap(config: &Config) -> Res<SubscriptionService> {
    // init logger
    if config.console_logging_enabled {
        logger::setup(&config.log_file)
            .map_err(|e| AppError::Config(format!("Failed to set up logger: {}", e)))?;
    }

    // init db connection
    let pool = db::setup(
        &config.database_url,
        config.is_production(),
        config.db_max_connections,
    )
    .await?;
    log::info!("Connected to database ({})", config.environment);

    Ok(wire(Arc::new(repository::PgSubscriptionRepository::new(
        pool,
    ))))
}

fn wire(repository: Arc<dyn repository::SubscriptionRepository>) -> SubscriptionService {
    let clock: Arc<dyn clock::Clock> = Arc::new(clock::SystemClock);
    SubscriptionService::new(
        repository,
        Arc::new(mapper::CreateSubscriptionMapper),
        Arc::new(validator::CreateSubscriptionValidator::new(clock.clone())),
        clock,
    )
}
