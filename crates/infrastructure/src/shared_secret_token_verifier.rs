//! Development bearer-token strategy: one shared secret, exact match.

use gateview_application::TokenVerifier;
use gateview_core::{AppResult, BearerToken, NonEmptyString};

/// Accepts exactly one configured secret. With no secret configured, every
/// token is rejected.
#[derive(Clone)]
pub struct SharedSecretTokenVerifier {
    secret: Option<NonEmptyString>,
}

impl SharedSecretTokenVerifier {
    /// Creates a verifier; a blank secret disables token acceptance.
    #[must_use]
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: NonEmptyString::new(secret).ok(),
        }
    }

    /// Whether a secret is configured.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.secret.is_some()
    }
}

impl TokenVerifier for SharedSecretTokenVerifier {
    fn verify(&self, token: &BearerToken) -> AppResult<bool> {
        Ok(self
            .secret
            .as_ref()
            .is_some_and(|secret| constant_time_eq(secret.as_str(), token.as_str())))
    }
}

fn constant_time_eq(left: &str, right: &str) -> bool {
    let (left, right) = (left.as_bytes(), right.as_bytes());
    if left.len() != right.len() {
        return false;
    }

    left.iter()
        .zip(right)
        .fold(0u8, |difference, (left, right)| difference | (left ^ right))
        == 0
}
