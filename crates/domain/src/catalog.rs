use std::fmt::{Display, Formatter};

use gateview_core::{AppResult, NonEmptyString};
use serde::{Deserialize, Serialize};

/// A monitored station.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Station {
    station_id: NonEmptyString,
    name: NonEmptyString,
}

impl Station {
    /// Creates a station with validated fields.
    pub fn new(station_id: impl Into<String>, name: impl Into<String>) -> AppResult<Self> {
        Ok(Self {
            station_id: NonEmptyString::new(station_id)?,
            name: NonEmptyString::new(name)?,
        })
    }

    /// Returns the stable station identifier.
    #[must_use]
    pub fn station_id(&self) -> &NonEmptyString {
        &self.station_id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &NonEmptyString {
        &self.name
    }
}

/// A ticket gate inside a station.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gate {
    gate_id: NonEmptyString,
    station_id: NonEmptyString,
    name: NonEmptyString,
}

impl Gate {
    /// Creates a gate with validated fields.
    pub fn new(
        gate_id: impl Into<String>,
        station_id: impl Into<String>,
        name: impl Into<String>,
    ) -> AppResult<Self> {
        Ok(Self {
            gate_id: NonEmptyString::new(gate_id)?,
            station_id: NonEmptyString::new(station_id)?,
            name: NonEmptyString::new(name)?,
        })
    }

    /// Returns the stable gate identifier.
    #[must_use]
    pub fn gate_id(&self) -> &NonEmptyString {
        &self.gate_id
    }

    /// Returns the owning station identifier.
    #[must_use]
    pub fn station_id(&self) -> &NonEmptyString {
        &self.station_id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &NonEmptyString {
        &self.name
    }
}

/// Reported state of a camera stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StreamStatus {
    /// The stream is publishing.
    Active,
    /// The stream is known but not publishing.
    Inactive,
    /// No status has been observed.
    Unknown,
}

impl StreamStatus {
    /// Returns the wire value.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::Unknown => "unknown",
        }
    }
}

impl Display for StreamStatus {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// A camera stream attached to a gate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stream {
    stream_id: NonEmptyString,
    gate_id: NonEmptyString,
    name: NonEmptyString,
    status: StreamStatus,
}

impl Stream {
    /// Creates a stream with validated fields.
    pub fn new(
        stream_id: impl Into<String>,
        gate_id: impl Into<String>,
        name: impl Into<String>,
        status: StreamStatus,
    ) -> AppResult<Self> {
        Ok(Self {
            stream_id: NonEmptyString::new(stream_id)?,
            gate_id: NonEmptyString::new(gate_id)?,
            name: NonEmptyString::new(name)?,
            status,
        })
    }

    /// Returns the stable stream identifier.
    #[must_use]
    pub fn stream_id(&self) -> &NonEmptyString {
        &self.stream_id
    }

    /// Returns the gate this stream is mounted on.
    #[must_use]
    pub fn gate_id(&self) -> &NonEmptyString {
        &self.gate_id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &NonEmptyString {
        &self.name
    }

    /// Returns the last known status.
    #[must_use]
    pub fn status(&self) -> StreamStatus {
        self.status
    }
}
