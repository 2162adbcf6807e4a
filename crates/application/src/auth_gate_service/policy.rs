use std::collections::BTreeSet;

use gateview_core::{AppError, AppResult};

/// Immutable gate configuration built once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthGatePolicy {
    api_prefix: String,
    public_paths: BTreeSet<String>,
}

impl AuthGatePolicy {
    /// Creates a policy for `api_prefix` with the standard public allowlist:
    /// ping, token issuance, API docs and the error-log endpoints.
    pub fn new(api_prefix: impl Into<String>) -> AppResult<Self> {
        let api_prefix = validate_prefix(api_prefix.into())?;
        let public_paths = [
            format!("{api_prefix}/ping"),
            format!("{api_prefix}/token"),
            format!("{api_prefix}/openapi.json"),
            "/docs".to_owned(),
            "/redoc".to_owned(),
            format!("{api_prefix}/error-logs/mediamtx"),
            format!("{api_prefix}/error-logs/mediamtx/latest"),
        ];

        Ok(Self {
            api_prefix,
            public_paths: public_paths.into_iter().collect(),
        })
    }

    /// Creates a policy with an explicit allowlist of exact paths.
    pub fn with_public_paths<I, S>(api_prefix: impl Into<String>, public_paths: I) -> AppResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Ok(Self {
            api_prefix: validate_prefix(api_prefix.into())?,
            public_paths: public_paths.into_iter().map(Into::into).collect(),
        })
    }

    /// Returns the API prefix.
    #[must_use]
    pub fn api_prefix(&self) -> &str {
        self.api_prefix.as_str()
    }

    /// Returns the exact-match allowlist.
    #[must_use]
    pub fn public_paths(&self) -> &BTreeSet<String> {
        &self.public_paths
    }

    /// Whether `path` lies under the API prefix.
    ///
    /// Matches whole segments only: `/api/v1` gates `/api/v1/x` but not
    /// `/api/v10`.
    #[must_use]
    pub fn is_gated(&self, path: &str) -> bool {
        match path.strip_prefix(self.api_prefix.as_str()) {
            Some(rest) => rest.is_empty() || rest.starts_with('/'),
            None => false,
        }
    }

    /// Whether `path` is on the allowlist.
    #[must_use]
    pub fn is_public(&self, path: &str) -> bool {
        self.public_paths.contains(path)
    }
}

fn validate_prefix(api_prefix: String) -> AppResult<String> {
    if !api_prefix.starts_with('/') || api_prefix.len() < 2 || api_prefix.ends_with('/') {
        return Err(AppError::Validation(format!(
            "API prefix must start with '/' and must not end with '/', got '{api_prefix}'"
        )));
    }

    Ok(api_prefix)
}
