//! HTTP Server configuration and startup.

use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use token_types::Clock;

use super::handlers::{self, AppState};
use crate::ValidationService;

/// Mount point of the validate route unless configured otherwise.
pub const DEFAULT_BASE_PATH: &str = "/token";

/// HTTP Server for the token validation API.
pub struct HttpServer<C: Clock> {
    state: Arc<AppState<C>>,
    base_path: String,
}

impl<C: Clock> HttpServer<C> {
    /// Creates a new HTTP server mounted at [`DEFAULT_BASE_PATH`].
    pub fn new(service: ValidationService<C>) -> Self {
        Self::with_base_path(service, DEFAULT_BASE_PATH)
    }

    /// Creates a new HTTP server with the validate route under `base_path`.
    pub fn with_base_path(service: ValidationService<C>, base_path: &str) -> Self {
        Self {
            state: Arc::new(AppState { service }),
            base_path: normalize_base_path(base_path),
        }
    }

    /// Path of the validate route, e.g. `/token/validate`.
    pub fn validate_path(&self) -> String {
        format!("{}/validate", self.base_path)
    }

    /// Builds the Axum router with all routes.
    pub fn router(&self) -> Router {
        Router::new()
            .route("/health", get(handlers::health))
            .route(
                &self.validate_path(),
                get(handlers::validate::<C>).options(handlers::validate_preflight),
            )
            .layer(TraceLayer::new_for_http())
            .with_state(self.state.clone())
    }

    /// Runs the server on the given address with graceful shutdown.
    pub async fn run(self, addr: &str) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!(
            "Server listening on {} (validate at {})",
            listener.local_addr()?,
            self.validate_path()
        );

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}

/// `"token/"` and `"/token"` both become `"/token"`; `"/"` becomes `""`.
fn normalize_base_path(base_path: &str) -> String {
    let trimmed = base_path.trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{}", trimmed)
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown...");
}
