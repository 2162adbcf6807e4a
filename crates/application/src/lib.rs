//! Application services and ports.

#![forbid(unsafe_code)]

mod auth_gate_service;
mod catalog_service;
mod error_log_service;
mod ticket_service;

pub use auth_gate_service::{AuthDecision, AuthGate, AuthGatePolicy, AuthRejection, TokenVerifier};
pub use catalog_service::{CatalogRepository, CatalogService};
pub use error_log_service::{AppendReceipt, ErrorLogRepository, ErrorLogService, ErrorLogSettings};
pub use ticket_service::TicketService;
