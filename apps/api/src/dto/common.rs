use serde::Serialize;
use ts_rs::TS;

/// Root status payload.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/service-status-response.ts"
)]
pub struct ServiceStatusResponse {
    pub name: String,
    pub status: &'static str,
}

/// Liveness probe payload.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/ping-response.ts"
)]
pub struct PingResponse {
    pub ok: bool,
    pub message: &'static str,
}

/// Development bearer token handed to the UI.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/token-response.ts"
)]
pub struct TokenResponse {
    pub token: String,
}
