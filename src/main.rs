use anyhow::Context;
use classic_cars_api::{
    config::Config, constants::API_NAME, handlers, repository, repository::CarRepository,
    AppState,
};
use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = Config::from_env();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("{} Starting Classic Cars API on port {}", API_NAME, config.server_port);

    // The schema must exist before the listener binds
    let pool = repository::connect(&config.database_path)
        .await
        .with_context(|| format!("Failed to open database at {}", config.database_path))?;
    let cars = CarRepository::new(pool);
    cars.init_schema()
        .await
        .context("Failed to create cars table")?;

    tracing::info!("{} Connected to database {}", API_NAME, config.database_path);

    if config.seed_sample_data {
        let inserted = cars
            .seed_if_empty()
            .await
            .context("Failed to seed sample cars")?;
        tracing::info!("{} Seeded {} sample cars", API_NAME, inserted);
    }

    let state = AppState::new(cars, config.api_key.as_str());
    let app = handlers::app_with_static(state, &config.static_dir);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    tracing::info!("{} Server listening on {}", API_NAME, addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
