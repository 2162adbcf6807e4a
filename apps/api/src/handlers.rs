pub mod catalog;
pub mod error_logs;
pub mod system;
pub mod tickets;
