//! Request authorization gate for the API prefix.
//!
//! Requests outside the prefix pass untouched; allowlisted paths pass without
//! credentials; everything else needs a bearer token accepted by the
//! configured [`TokenVerifier`]. The gate holds no mutable state.

mod policy;
mod ports;
mod service;

#[cfg(test)]
mod tests;

pub use policy::AuthGatePolicy;
pub use ports::TokenVerifier;
pub use service::{AuthDecision, AuthGate, AuthRejection};
