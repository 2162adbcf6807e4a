//! Read-only station → gate → stream catalog.

use std::sync::Arc;

use async_trait::async_trait;
use gateview_core::{AppError, AppResult};
use gateview_domain::{Gate, Station, Stream};

/// Repository port for catalog lookups.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// Lists every station.
    async fn list_stations(&self) -> AppResult<Vec<Station>>;

    /// Finds one station by identifier.
    async fn find_station(&self, station_id: &str) -> AppResult<Option<Station>>;

    /// Lists gates belonging to a station.
    async fn list_gates_for_station(&self, station_id: &str) -> AppResult<Vec<Gate>>;

    /// Finds one gate by identifier.
    async fn find_gate(&self, gate_id: &str) -> AppResult<Option<Gate>>;

    /// Lists streams mounted on a gate.
    async fn list_streams_for_gate(&self, gate_id: &str) -> AppResult<Vec<Stream>>;

    /// Finds one stream by identifier.
    async fn find_stream(&self, stream_id: &str) -> AppResult<Option<Stream>>;
}

/// Application service for catalog reads. Missing identifiers are `NotFound`.
#[derive(Clone)]
pub struct CatalogService {
    repository: Arc<dyn CatalogRepository>,
}

impl CatalogService {
    /// Creates a new catalog service.
    #[must_use]
    pub fn new(repository: Arc<dyn CatalogRepository>) -> Self {
        Self { repository }
    }

    /// Lists every station.
    pub async fn list_stations(&self) -> AppResult<Vec<Station>> {
        self.repository.list_stations().await
    }

    /// Returns one station.
    pub async fn station(&self, station_id: &str) -> AppResult<Station> {
        self.repository
            .find_station(station_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("station '{station_id}' does not exist")))
    }

    /// Lists the gates of an existing station.
    pub async fn gates_for_station(&self, station_id: &str) -> AppResult<Vec<Gate>> {
        self.station(station_id).await?;
        self.repository.list_gates_for_station(station_id).await
    }

    /// Returns one gate.
    pub async fn gate(&self, gate_id: &str) -> AppResult<Gate> {
        self.repository
            .find_gate(gate_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("gate '{gate_id}' does not exist")))
    }

    /// Lists the streams of an existing gate.
    pub async fn streams_for_gate(&self, gate_id: &str) -> AppResult<Vec<Stream>> {
        self.gate(gate_id).await?;
        self.repository.list_streams_for_gate(gate_id).await
    }

    /// Returns one stream.
    pub async fn stream(&self, stream_id: &str) -> AppResult<Stream> {
        self.repository
            .find_stream(stream_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("stream '{stream_id}' does not exist")))
    }
}
