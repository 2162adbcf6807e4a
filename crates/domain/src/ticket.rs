use chrono::{DateTime, SecondsFormat, Utc};

/// Short-lived playback credential handed to the player for one stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayTicket {
    stream_id: String,
    token: String,
    expires_at: DateTime<Utc>,
}

impl PlayTicket {
    /// Creates a ticket.
    #[must_use]
    pub fn new(stream_id: impl Into<String>, token: String, expires_at: DateTime<Utc>) -> Self {
        Self {
            stream_id: stream_id.into(),
            token,
            expires_at,
        }
    }

    /// Returns the stream the ticket was issued for.
    #[must_use]
    pub fn stream_id(&self) -> &str {
        self.stream_id.as_str()
    }

    /// Returns the opaque token.
    #[must_use]
    pub fn token(&self) -> &str {
        self.token.as_str()
    }

    /// Returns the expiry instant.
    #[must_use]
    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    /// Returns the expiry as ISO-8601 with a `Z` suffix.
    #[must_use]
    pub fn expires_at_iso(&self) -> String {
        self.expires_at.to_rfc3339_opts(SecondsFormat::Micros, true)
    }
}
