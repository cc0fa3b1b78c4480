//! HTTP request handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use token_types::{Clock, HealthResponse, UnauthorizedResponse, ValidateQuery};

use crate::ValidationService;

/// Application state shared across handlers.
pub struct AppState<C: Clock> {
    pub service: ValidationService<C>,
}

/// Health check endpoint.
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy".to_string(),
    })
}

/// CORS preflight for the validate endpoint.
pub async fn validate_preflight() -> StatusCode {
    StatusCode::NO_CONTENT
}

/// Validates the token passed as `?token=` (or `?t=`).
///
/// 200 with an empty body when valid, 401 with a generic body otherwise.
/// The reason only goes to the logs.
#[tracing::instrument(skip_all)]
pub async fn validate<C: Clock>(
    State(state): State<Arc<AppState<C>>>,
    query: Result<Query<ValidateQuery>, QueryRejection>,
) -> Response {
    let query = match query {
        Ok(Query(query)) => query,
        Err(rejection) => {
            tracing::warn!("/validate rejected query string: {}", rejection);
            return unauthorized_response();
        }
    };

    let Some(token) = query.token() else {
        tracing::warn!("/validate missing or invalid token query parameter");
        return unauthorized_response();
    };

    if state.service.validate(token).valid {
        StatusCode::OK.into_response()
    } else {
        unauthorized_response()
    }
}

fn unauthorized_response() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(UnauthorizedResponse::default()),
    )
        .into_response()
}
