use gateview_application::AppendReceipt;
use gateview_domain::{ErrorEvent, ErrorType};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use ts_rs::TS;

/// Playback error report as submitted by the monitoring UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/error-event-payload.ts"
)]
pub struct ErrorEventPayload {
    pub stream_id: String,
    pub error_type: String,
    pub error_message: String,
    #[serde(default)]
    #[ts(type = "number | null")]
    pub status_code: Option<i64>,
    #[serde(default)]
    pub whep_url: Option<String>,
    pub timestamp: String,
    #[serde(default)]
    pub user_agent: Option<String>,
    #[serde(default)]
    #[ts(type = "Record<string, unknown> | null")]
    pub client_info: Option<Map<String, Value>>,
}

impl From<ErrorEventPayload> for ErrorEvent {
    fn from(value: ErrorEventPayload) -> Self {
        Self {
            timestamp: value.timestamp,
            stream_id: value.stream_id,
            error_type: ErrorType::from(value.error_type),
            error_message: value.error_message,
            status_code: value.status_code,
            whep_url: value.whep_url,
            user_agent: value.user_agent,
            client_info: value.client_info,
        }
    }
}

impl From<ErrorEvent> for ErrorEventPayload {
    fn from(value: ErrorEvent) -> Self {
        Self {
            stream_id: value.stream_id,
            error_type: value.error_type.into(),
            error_message: value.error_message,
            status_code: value.status_code,
            whep_url: value.whep_url,
            timestamp: value.timestamp,
            user_agent: value.user_agent,
            client_info: value.client_info,
        }
    }
}

/// Result of a successful ingestion.
#[derive(Debug, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/error-log-receipt-response.ts"
)]
pub struct ErrorLogReceiptResponse {
    pub success: bool,
    pub log_file: String,
    pub message: String,
}

impl From<AppendReceipt> for ErrorLogReceiptResponse {
    fn from(value: AppendReceipt) -> Self {
        Self {
            success: true,
            message: format!("Error logged successfully to {}", value.location),
            log_file: value.location,
        }
    }
}

/// Query parameters for the latest-logs endpoint.
#[derive(Debug, Deserialize)]
pub struct LatestErrorLogsQuery {
    pub limit: Option<usize>,
}

/// Most recent error reports.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/latest-error-logs-response.ts"
)]
pub struct LatestErrorLogsResponse {
    pub logs: Vec<ErrorEventPayload>,
    pub count: usize,
    pub message: String,
}

impl From<Vec<ErrorEvent>> for LatestErrorLogsResponse {
    fn from(value: Vec<ErrorEvent>) -> Self {
        let count = value.len();
        Self {
            logs: value.into_iter().map(ErrorEventPayload::from).collect(),
            count,
            message: format!("Retrieved {count} most recent error logs"),
        }
    }
}
