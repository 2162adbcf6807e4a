use axum::Json;
use axum::extract::{Path, State};

use crate::dto::PlayTicketResponse;
use crate::error::ApiResult;
use crate::state::AppState;

pub async fn issue_play_ticket_handler(
    State(state): State<AppState>,
    Path(stream_id): Path<String>,
) -> ApiResult<Json<PlayTicketResponse>> {
    let ticket = state.ticket_service.issue(&stream_id)?;
    Ok(Json(ticket.into()))
}
