mod api;
mod app;
mod config;
mod container;
mod domain;
mod infrastructure;
mod services;
mod telemetry;
mod usecases;

use config::AppConfig;
use container::Container;
use infrastructure::databases::surrealdb;

use actix_web::HttpServer;
use std::sync::Arc;
use thiserror::Error;

#[cfg(test)]
mod tests;

#[derive(Error, Debug)]
pub enum StartupError {
    #[error(transparent)]
    Database(#[from] ::surrealdb::Error),
    #[error(transparent)]
    Configuration(#[from] figment::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Telemetry(#[from] telemetry::TelemetryError),
    #[error("invalid hashing parameters: {0}")]
    Hashing(String),
}

async fn run() -> Result<(), StartupError> {
    let config = AppConfig::load()?;

    let provider = telemetry::configure(&config.service, &config.logging, &config.telemetry)?;

    let conn = surrealdb::connect(&config.surrealdb).await?;

    let container = Arc::new(
        Container::new(conn, &config.hashing)
            .map_err(|err| StartupError::Hashing(err.to_string()))?,
    );

    tracing::info!(
        host = %config.server.host,
        port = config.server.port,
        "server is running"
    );

    HttpServer::new(move || app::create(Arc::clone(&container)))
        .bind((config.server.host.as_str(), config.server.port))?
        .run()
        .await?;

    telemetry::shutdown(provider)?;

    Ok(())
}

#[actix_web::main]
async fn main() {
    if let Err(err) = run().await {
        panic!("{err}");
    }
}
