use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use gateview_core::AppError;

use crate::dto::{
    ErrorEventPayload, ErrorLogReceiptResponse, LatestErrorLogsQuery, LatestErrorLogsResponse,
};
use crate::error::ApiResult;
use crate::state::AppState;

pub async fn record_error_log_handler(
    State(state): State<AppState>,
    payload: Result<Json<ErrorEventPayload>, JsonRejection>,
) -> ApiResult<Json<ErrorLogReceiptResponse>> {
    let Json(payload) =
        payload.map_err(|rejection| AppError::Validation(rejection.body_text()))?;

    let receipt = state.error_log_service.record(payload.into()).await?;
    Ok(Json(receipt.into()))
}

pub async fn latest_error_logs_handler(
    State(state): State<AppState>,
    query: Result<Query<LatestErrorLogsQuery>, QueryRejection>,
) -> ApiResult<Json<LatestErrorLogsResponse>> {
    let Query(query) = query.map_err(|rejection| AppError::Validation(rejection.body_text()))?;

    let events = state.error_log_service.latest(query.limit).await?;
    Ok(Json(events.into()))
}
