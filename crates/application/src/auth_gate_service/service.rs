use std::sync::Arc;

use gateview_core::{AppError, AppResult, parse_bearer_authorization};
use thiserror::Error;
use tracing::debug;

use super::policy::AuthGatePolicy;
use super::ports::TokenVerifier;

/// Outcome of running one request through the gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthDecision {
    /// The path is outside the API prefix.
    OutsideApi,
    /// The path is on the allowlist.
    Allowlisted,
    /// A bearer token was presented and accepted.
    TokenAccepted,
    /// The request must not reach its handler.
    Rejected(AuthRejection),
}

impl AuthDecision {
    /// Whether the request may proceed.
    #[must_use]
    pub fn is_pass(self) -> bool {
        !matches!(self, Self::Rejected(_))
    }
}

/// Why a request was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthRejection {
    /// No header, or not of the form `Bearer <token>`.
    #[error("Missing Authorization Bearer token")]
    MissingCredential,
    /// A token was presented but not accepted.
    #[error("Invalid token")]
    InvalidCredential,
}

impl From<AuthRejection> for AppError {
    fn from(value: AuthRejection) -> Self {
        Self::Unauthorized(value.to_string())
    }
}

/// Stateless per-request authorization gate.
#[derive(Clone)]
pub struct AuthGate {
    policy: Arc<AuthGatePolicy>,
    verifier: Arc<dyn TokenVerifier>,
}

impl AuthGate {
    /// Creates a gate from its policy and token verification strategy.
    #[must_use]
    pub fn new(policy: AuthGatePolicy, verifier: Arc<dyn TokenVerifier>) -> Self {
        Self {
            policy: Arc::new(policy),
            verifier,
        }
    }

    /// Returns the gate policy.
    #[must_use]
    pub fn policy(&self) -> &AuthGatePolicy {
        &self.policy
    }

    /// Classifies a request by path and raw `Authorization` header value.
    ///
    /// Only verifier malfunction is returned as `Err`.
    pub fn authorize(&self, path: &str, authorization: Option<&str>) -> AppResult<AuthDecision> {
        if !self.policy.is_gated(path) {
            return Ok(AuthDecision::OutsideApi);
        }

        if self.policy.is_public(path) {
            return Ok(AuthDecision::Allowlisted);
        }

        let Some(token) = authorization.and_then(parse_bearer_authorization) else {
            debug!(path, "rejected request without bearer token");
            return Ok(AuthDecision::Rejected(AuthRejection::MissingCredential));
        };

        if self.verifier.verify(&token)? {
            Ok(AuthDecision::TokenAccepted)
        } else {
            debug!(path, "rejected request with invalid bearer token");
            Ok(AuthDecision::Rejected(AuthRejection::InvalidCredential))
        }
    }
}
