use gateview_domain::{Gate, PlayTicket, Station, Stream};
use serde::Serialize;
use ts_rs::TS;

/// API representation of a station.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/station-response.ts"
)]
pub struct StationResponse {
    pub station_id: String,
    pub name: String,
}

impl From<Station> for StationResponse {
    fn from(value: Station) -> Self {
        Self {
            station_id: value.station_id().as_str().to_owned(),
            name: value.name().as_str().to_owned(),
        }
    }
}

/// Station listing.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/station-list-response.ts"
)]
pub struct StationListResponse {
    pub stations: Vec<StationResponse>,
}

/// API representation of a gate.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/gate-response.ts"
)]
pub struct GateResponse {
    pub gate_id: String,
    pub station_id: String,
    pub name: String,
}

impl From<Gate> for GateResponse {
    fn from(value: Gate) -> Self {
        Self {
            gate_id: value.gate_id().as_str().to_owned(),
            station_id: value.station_id().as_str().to_owned(),
            name: value.name().as_str().to_owned(),
        }
    }
}

/// Gate listing for one station.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/gate-list-response.ts"
)]
pub struct GateListResponse {
    pub gates: Vec<GateResponse>,
}

/// API representation of a camera stream.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/stream-response.ts"
)]
pub struct StreamResponse {
    pub stream_id: String,
    pub gate_id: String,
    pub name: String,
    pub status: String,
}

impl From<Stream> for StreamResponse {
    fn from(value: Stream) -> Self {
        Self {
            stream_id: value.stream_id().as_str().to_owned(),
            gate_id: value.gate_id().as_str().to_owned(),
            name: value.name().as_str().to_owned(),
            status: value.status().as_str().to_owned(),
        }
    }
}

/// Stream listing for one gate.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/stream-list-response.ts"
)]
pub struct StreamListResponse {
    pub streams: Vec<StreamResponse>,
}

/// Issued play ticket.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/play-ticket-response.ts"
)]
pub struct PlayTicketResponse {
    pub stream_id: String,
    pub token: String,
    pub expires_at: String,
}

impl From<PlayTicket> for PlayTicketResponse {
    fn from(value: PlayTicket) -> Self {
        Self {
            stream_id: value.stream_id().to_owned(),
            token: value.token().to_owned(),
            expires_at: value.expires_at_iso(),
        }
    }
}
