use axum::Json;
use axum::extract::{Path, State};

use crate::dto::{
    GateListResponse, GateResponse, StationListResponse, StationResponse, StreamListResponse,
    StreamResponse,
};
use crate::error::ApiResult;
use crate::state::AppState;

pub async fn list_stations_handler(
    State(state): State<AppState>,
) -> ApiResult<Json<StationListResponse>> {
    let stations = state.catalog_service.list_stations().await?;
    Ok(Json(StationListResponse {
        stations: stations.into_iter().map(StationResponse::from).collect(),
    }))
}

pub async fn get_station_handler(
    State(state): State<AppState>,
    Path(station_id): Path<String>,
) -> ApiResult<Json<StationResponse>> {
    let station = state.catalog_service.station(&station_id).await?;
    Ok(Json(station.into()))
}

pub async fn list_station_gates_handler(
    State(state): State<AppState>,
    Path(station_id): Path<String>,
) -> ApiResult<Json<GateListResponse>> {
    let gates = state.catalog_service.gates_for_station(&station_id).await?;
    Ok(Json(GateListResponse {
        gates: gates.into_iter().map(GateResponse::from).collect(),
    }))
}

pub async fn get_gate_handler(
    State(state): State<AppState>,
    Path(gate_id): Path<String>,
) -> ApiResult<Json<GateResponse>> {
    let gate = state.catalog_service.gate(&gate_id).await?;
    Ok(Json(gate.into()))
}

pub async fn list_gate_streams_handler(
    State(state): State<AppState>,
    Path(gate_id): Path<String>,
) -> ApiResult<Json<StreamListResponse>> {
    let streams = state.catalog_service.streams_for_gate(&gate_id).await?;
    Ok(Json(StreamListResponse {
        streams: streams.into_iter().map(StreamResponse::from).collect(),
    }))
}

pub async fn get_stream_handler(
    State(state): State<AppState>,
    Path(stream_id): Path<String>,
) -> ApiResult<Json<StreamResponse>> {
    let stream = state.catalog_service.stream(&stream_id).await?;
    Ok(Json(stream.into()))
}
