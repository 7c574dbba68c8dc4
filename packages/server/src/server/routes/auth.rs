use axum::{extract::Extension, http::StatusCode, response::IntoResponse, Json};
use serde::Deserialize;
use serde_json::json;

use crate::domains::auth::{AuthError, RegistrationError};
use crate::server::app::AppState;

/// Credentials payload for /auth and /registration
#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    pub login: String,
    pub password: String,
}

/// POST /registration
pub async fn register(
    Extension(state): Extension<AppState>,
    Json(body): Json<CredentialsRequest>,
) -> impl IntoResponse {
    match state.gateway.register(&body.login, &body.password).await {
        Ok(identity) => (
            StatusCode::OK,
            format!("User {} is successfully registered", identity.login),
        )
            .into_response(),
        Err(RegistrationError::Internal(err)) => {
            tracing::error!(error = %err, "registration failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
        Err(err) => (StatusCode::BAD_REQUEST, err.to_string()).into_response(),
    }
}

/// POST /auth
pub async fn authenticate(
    Extension(state): Extension<AppState>,
    Json(body): Json<CredentialsRequest>,
) -> impl IntoResponse {
    match state.gateway.authenticate(&body.login, &body.password).await {
        Ok(token) => Json(json!({ "token": token })).into_response(),
        Err(AuthError::Internal(err)) => {
            tracing::error!(error = %err, "authentication failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
        Err(_) => (StatusCode::UNAUTHORIZED, "Bad credentials").into_response(),
    }
}

/// GET /
pub async fn hello() -> &'static str {
    "Hello"
}
