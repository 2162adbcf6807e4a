use gateview_core::{AppResult, BearerToken};

/// Strategy port for bearer token validation.
///
/// The shipped implementation compares against a shared development secret;
/// a signed-token verifier (signature, expiry, audience) plugs in here.
pub trait TokenVerifier: Send + Sync {
    /// Returns whether the token is acceptable.
    ///
    /// `Err` is reserved for verifier malfunction, not for rejected tokens.
    fn verify(&self, token: &BearerToken) -> AppResult<bool>;
}
