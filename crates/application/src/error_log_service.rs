//! Error-log ingestion and retrieval.
//!
//! Events are partitioned by the UTC calendar date of their own timestamp and
//! appended to the matching partition. Reads return the most recently appended
//! events first: partitions newest date first, each partition tail-first.

mod ports;
mod service;


pub use ports::{AppendReceipt, ErrorLogRepository};
pub use service::{ErrorLogService, ErrorLogSettings};
