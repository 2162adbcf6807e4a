//! Play-ticket issuance. Tickets are random, short-lived and not persisted.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{DateTime, Duration, Utc};
use gateview_core::{AppError, AppResult};
use gateview_domain::PlayTicket;

const TICKET_TOKEN_BYTES: usize = 24;

/// Issues opaque play tickets for streams.
#[derive(Debug, Clone)]
pub struct TicketService {
    ttl: Duration,
}

impl TicketService {
    /// Creates a ticket service whose tickets live for `ttl`.
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self { ttl }
    }

    /// Issues a ticket expiring `ttl` from now.
    pub fn issue(&self, stream_id: &str) -> AppResult<PlayTicket> {
        self.issue_at(stream_id, Utc::now())
    }

    /// Issues a ticket expiring `ttl` after `now`.
    pub fn issue_at(&self, stream_id: &str, now: DateTime<Utc>) -> AppResult<PlayTicket> {
        let mut bytes = [0u8; TICKET_TOKEN_BYTES];
        getrandom::fill(&mut bytes)
            .map_err(|error| AppError::Internal(format!("failed to generate play ticket: {error}")))?;

        Ok(PlayTicket::new(
            stream_id,
            URL_SAFE_NO_PAD.encode(bytes),
            now + self.ttl,
        ))
    }
}

impl Default for TicketService {
    fn default() -> Self {
        Self::new(Duration::minutes(5))
    }
}
