mod catalog;
mod common;
mod error_logs;

pub use catalog::{
    GateListResponse, GateResponse, PlayTicketResponse, StationListResponse, StationResponse,
    StreamListResponse, StreamResponse,
};
pub use common::{PingResponse, ServiceStatusResponse, TokenResponse};
pub use error_logs::{
    ErrorEventPayload, ErrorLogReceiptResponse, LatestErrorLogsQuery, LatestErrorLogsResponse,
};
