use axum::extract::{Request, State};
use axum::http::header;
use axum::middleware::Next;
use axum::response::Response;
use gateview_application::AuthDecision;
use gateview_core::AppError;

use crate::error::ApiResult;
use crate::state::AppState;

/// Runs every request through the API gate before any handler sees it.
pub async fn require_api_auth(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> ApiResult<Response> {
    let authorization = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    match state
        .auth_gate
        .authorize(request.uri().path(), authorization)?
    {
        AuthDecision::Rejected(rejection) => Err(AppError::from(rejection).into()),
        AuthDecision::OutsideApi | AuthDecision::Allowlisted | AuthDecision::TokenAccepted => {
            Ok(next.run(request).await)
        }
    }
}
