//! # Token Validation Server
//!
//! Binary that wires together all the components:
//! - Load configuration from environment
//! - Create the validation service
//! - Start the HTTP server

mod config;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use token_hex::{ValidationService, inbound::HttpServer};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing subscriber
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,token_app=debug,token_hex=debug".into());
    let registry = tracing_subscriber::registry().with(filter);
    if std::env::var("LOG_FORMAT").is_ok_and(|format| format == "json") {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    // Load configuration; a missing secret aborts startup
    let config = config::Config::from_env()?;

    tracing::info!("Starting token server on port {}", config.port);

    let service = ValidationService::new(config.secret);
    let server = HttpServer::with_base_path(service, &config.base_path);
    let addr = format!("0.0.0.0:{}", config.port);

    server.run(&addr).await?;

    Ok(())
}
