mod config;
mod health;
mod modules;
mod shared;

use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::AppConfig;
use crate::health::readiness;
use crate::modules::portfolio::adapter::incoming::web::routes::{
    apply_edit_handler, get_editor_options_handler, get_portfolio_handler,
    reset_portfolio_handler, upload_avatar_handler, upload_project_image_handler,
};
use crate::modules::portfolio::adapter::outgoing::{InMemoryPortfolioStore, UuidIdGenerator};
use crate::modules::portfolio::application::portfolio_use_cases::PortfolioUseCases;
use crate::modules::portfolio::application::services::{
    EditPortfolioService, GetPortfolioService, IngestImageService, ResetPortfolioService,
};
use crate::shared::api::custom_json_config;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub portfolio: PortfolioUseCases,
}

/// One editing session per process: every use case shares the same store.
pub fn build_portfolio_use_cases(
    store: InMemoryPortfolioStore,
    config: &AppConfig,
) -> PortfolioUseCases {
    PortfolioUseCases {
        get: Arc::new(GetPortfolioService::new(store.clone())),
        edit: Arc::new(EditPortfolioService::new(
            store.clone(),
            Arc::new(UuidIdGenerator),
        )),
        ingest_image: Arc::new(IngestImageService::new(
            store.clone(),
            config.image_policy.clone(),
        )),
        reset: Arc::new(ResetPortfolioService::new(store)),
    }
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Try .env.{environment} first, then fall back to .env
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let config = AppConfig::from_env()?;
    let server_url = config.server_url();
    let payload_limit = config.payload_limit_bytes();
    let json_limit = config.json_max_bytes;

    info!(
        "Image limit: {} bytes, upload limit: {} bytes, JSON limit: {} bytes",
        config.image_policy.max_file_size_bytes, payload_limit, json_limit
    );

    let state = AppState {
        portfolio: build_portfolio_use_cases(InMemoryPortfolioStore::new(), &config),
    };

    info!("Server run on: {}", server_url);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::PayloadConfig::new(payload_limit))
            .app_data(custom_json_config(json_limit))
            .configure(init_routes)
    })
    .bind(&server_url)?
    .run()
    .await?;

    Ok(())
}

fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(crate::health::health)
        .service(readiness)
        .service(get_portfolio_handler)
        .service(get_editor_options_handler)
        .service(apply_edit_handler)
        .service(upload_avatar_handler)
        .service(upload_project_image_handler)
        .service(reset_portfolio_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Application error: {e:#}");
        std::process::exit(1);
    }
}
