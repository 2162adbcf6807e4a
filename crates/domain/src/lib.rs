//! Domain entities and invariants.

#![forbid(unsafe_code)]

mod catalog;
mod error_event;
mod ticket;

pub use catalog::{Gate, Station, Stream, StreamStatus};
pub use error_event::{ErrorEvent, ErrorType, LogLimit, PartitionDate, parse_event_timestamp};
pub use ticket::PlayTicket;
