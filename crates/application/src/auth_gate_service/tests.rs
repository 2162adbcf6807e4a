use std::sync::Arc;

use gateview_core::{AppError, AppResult, BearerToken};

use super::{AuthDecision, AuthGate, AuthGatePolicy, AuthRejection, TokenVerifier};

struct FixedTokenVerifier(&'static str);

impl TokenVerifier for FixedTokenVerifier {
    fn verify(&self, token: &BearerToken) -> AppResult<bool> {
        Ok(token.as_str() == self.0)
    }
}

struct BrokenVerifier;

impl TokenVerifier for BrokenVerifier {
    fn verify(&self, _token: &BearerToken) -> AppResult<bool> {
        Err(AppError::Internal("key set unavailable".to_owned()))
    }
}

fn gate() -> AuthGate {
    let Ok(policy) = AuthGatePolicy::new("/api/v1") else {
        panic!("default prefix must be valid");
    };
    AuthGate::new(policy, Arc::new(FixedTokenVerifier("dev-secret")))
}

#[test]
fn allowlisted_path_passes_without_header() {
    let decision = gate().authorize("/api/v1/error-logs/mediamtx", None);
    assert_eq!(decision.ok(), Some(AuthDecision::Allowlisted));

    let decision = gate().authorize("/api/v1/ping", Some("Bearer wrong"));
    assert_eq!(decision.ok(), Some(AuthDecision::Allowlisted));
}

#[test]
fn paths_outside_prefix_are_not_gated() {
    for path in ["/", "/health", "/api/v10/stations", "/api"] {
        let decision = gate().authorize(path, None);
        assert_eq!(decision.ok(), Some(AuthDecision::OutsideApi), "path {path}");
    }
}

#[test]
fn protected_path_without_header_is_missing_credential() {
    let decision = gate().authorize("/api/v1/stations", None);
    assert_eq!(
        decision.ok(),
        Some(AuthDecision::Rejected(AuthRejection::MissingCredential))
    );
}

#[test]
fn malformed_header_counts_as_missing_credential() {
    for header in ["dev-secret", "Basic dev-secret", "Bearer", "Bearer a b"] {
        let decision = gate().authorize("/api/v1/stations", Some(header));
        assert_eq!(
            decision.ok(),
            Some(AuthDecision::Rejected(AuthRejection::MissingCredential)),
            "header {header:?}"
        );
    }
}

#[test]
fn configured_secret_is_accepted_and_others_rejected() {
    let accepted = gate().authorize("/api/v1/stations", Some("bearer dev-secret"));
    assert_eq!(accepted.ok(), Some(AuthDecision::TokenAccepted));

    let rejected = gate().authorize("/api/v1/stations", Some("Bearer dev-secret2"));
    assert_eq!(
        rejected.ok(),
        Some(AuthDecision::Rejected(AuthRejection::InvalidCredential))
    );
}

#[test]
fn prefix_root_itself_is_gated() {
    let decision = gate().authorize("/api/v1", None);
    assert_eq!(
        decision.ok(),
        Some(AuthDecision::Rejected(AuthRejection::MissingCredential))
    );
}

#[test]
fn verifier_failure_is_an_error_not_a_rejection() {
    let Ok(policy) = AuthGatePolicy::with_public_paths("/api/v1", Vec::<String>::new()) else {
        panic!("prefix must be valid");
    };
    let gate = AuthGate::new(policy, Arc::new(BrokenVerifier));

    let result = gate.authorize("/api/v1/stations", Some("Bearer anything"));
    assert!(matches!(result, Err(AppError::Internal(_))));
}

#[test]
fn rejection_maps_to_unauthorized_with_stable_message() {
    let error = AppError::from(AuthRejection::InvalidCredential);
    assert!(matches!(error, AppError::Unauthorized(ref message) if message == "Invalid token"));
    assert!(!AuthDecision::Rejected(AuthRejection::MissingCredential).is_pass());
    assert!(AuthDecision::TokenAccepted.is_pass());
}

#[test]
fn policy_rejects_malformed_prefix() {
    for prefix in ["api/v1", "/api/v1/", "/", ""] {
        assert!(AuthGatePolicy::new(prefix).is_err(), "prefix {prefix:?}");
    }
}
