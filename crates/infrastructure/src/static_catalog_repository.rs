//! Fixed station → gate → stream catalog compiled into the service.

use async_trait::async_trait;
use gateview_application::CatalogRepository;
use gateview_core::AppResult;
use gateview_domain::{Gate, Station, Stream, StreamStatus};

const STATIONS: [(&str, &str); 3] = [
    ("station-001", "Seoul Station"),
    ("station-002", "Gangnam Station"),
    ("station-003", "Jamsil Station"),
];

/// Gates per station, in station order.
const GATES_PER_STATION: [usize; 3] = [4, 6, 3];

/// Immutable in-memory catalog. Each gate carries exactly one active camera.
#[derive(Debug, Clone)]
pub struct StaticCatalogRepository {
    stations: Vec<Station>,
    gates: Vec<Gate>,
    streams: Vec<Stream>,
}

impl StaticCatalogRepository {
    /// Builds the catalog.
    pub fn new() -> AppResult<Self> {
        let mut stations = Vec::with_capacity(STATIONS.len());
        let mut gates = Vec::new();
        let mut streams = Vec::new();
        let mut gate_number = 0_usize;

        for ((station_id, station_name), gate_count) in STATIONS.into_iter().zip(GATES_PER_STATION)
        {
            stations.push(Station::new(station_id, station_name)?);

            for local_number in 1..=gate_count {
                gate_number += 1;
                let gate_id = format!("gate-{gate_number:03}");
                gates.push(Gate::new(
                    gate_id.as_str(),
                    station_id,
                    format!("Gate {local_number}"),
                )?);
                streams.push(Stream::new(
                    format!("stream-{gate_number:03}"),
                    gate_id,
                    format!("Gate {local_number} Camera"),
                    StreamStatus::Active,
                )?);
            }
        }

        Ok(Self {
            stations,
            gates,
            streams,
        })
    }
}

#[async_trait]
impl CatalogRepository for StaticCatalogRepository {
    async fn list_stations(&self) -> AppResult<Vec<Station>> {
        Ok(self.stations.clone())
    }

    async fn find_station(&self, station_id: &str) -> AppResult<Option<Station>> {
        Ok(self
            .stations
            .iter()
            .find(|station| station.station_id().as_str() == station_id)
            .cloned())
    }

    async fn list_gates_for_station(&self, station_id: &str) -> AppResult<Vec<Gate>> {
        Ok(self
            .gates
            .iter()
            .filter(|gate| gate.station_id().as_str() == station_id)
            .cloned()
            .collect())
    }

    async fn find_gate(&self, gate_id: &str) -> AppResult<Option<Gate>> {
        Ok(self
            .gates
            .iter()
            .find(|gate| gate.gate_id().as_str() == gate_id)
            .cloned())
    }

    async fn list_streams_for_gate(&self, gate_id: &str) -> AppResult<Vec<Stream>> {
        Ok(self
            .streams
            .iter()
            .filter(|stream| stream.gate_id().as_str() == gate_id)
            .cloned()
            .collect())
    }

    async fn find_stream(&self, stream_id: &str) -> AppResult<Option<Stream>> {
        Ok(self
            .streams
            .iter()
            .find(|stream| stream.stream_id().as_str() == stream_id)
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use gateview_application::CatalogRepository;

    use super::StaticCatalogRepository;

    #[tokio::test]
    async fn catalog_shape_matches_station_layout() {
        let Ok(catalog) = StaticCatalogRepository::new() else {
            panic!("static catalog must build");
        };

        assert_eq!(catalog.list_stations().await.unwrap_or_default().len(), 3);
        let gangnam_gates = catalog
            .list_gates_for_station("station-002")
            .await
            .unwrap_or_default();
        assert_eq!(gangnam_gates.len(), 6);
        assert_eq!(
            gangnam_gates
                .first()
                .map(|gate| gate.gate_id().as_str().to_owned()),
            Some("gate-005".to_owned())
        );

        let streams = catalog
            .list_streams_for_gate("gate-013")
            .await
            .unwrap_or_default();
        assert_eq!(streams.len(), 1);
        assert_eq!(
            streams.first().map(|stream| stream.stream_id().as_str().to_owned()),
            Some("stream-013".to_owned())
        );
    }

    #[tokio::test]
    async fn unknown_identifiers_resolve_to_none() {
        let Ok(catalog) = StaticCatalogRepository::new() else {
            panic!("static catalog must build");
        };

        assert!(matches!(catalog.find_station("station-999").await, Ok(None)));
        assert!(matches!(catalog.find_gate("gate-014").await, Ok(None)));
        assert!(matches!(catalog.find_stream("").await, Ok(None)));
    }
}
