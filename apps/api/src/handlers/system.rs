use axum::Json;
use axum::extract::State;
use gateview_core::AppError;

use crate::dto::{PingResponse, ServiceStatusResponse, TokenResponse};
use crate::error::ApiResult;
use crate::state::AppState;

pub async fn root_handler(State(state): State<AppState>) -> Json<ServiceStatusResponse> {
    Json(ServiceStatusResponse {
        name: state.app_name,
        status: "running",
    })
}

pub async fn ping_handler() -> Json<PingResponse> {
    Json(PingResponse {
        ok: true,
        message: "pong",
    })
}

// TODO: replace with credential-checked issuance of short-lived signed tokens.
pub async fn issue_token_handler(State(state): State<AppState>) -> ApiResult<Json<TokenResponse>> {
    if state.dev_auth_token.trim().is_empty() {
        return Err(AppError::Internal("DEV_AUTH_TOKEN is not configured".to_owned()).into());
    }

    Ok(Json(TokenResponse {
        token: state.dev_auth_token,
    }))
}
