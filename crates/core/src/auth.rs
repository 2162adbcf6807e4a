use std::fmt::{Debug, Formatter};

/// Credential extracted from an `Authorization: Bearer <token>` header.
///
/// The raw value is never printed by `Debug`.
#[derive(Clone, PartialEq, Eq)]
pub struct BearerToken(String);

impl BearerToken {
    /// Returns the raw token value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Debug for BearerToken {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str("BearerToken(..)")
    }
}

/// Parses an `Authorization` header value of the form `Bearer <token>`.
///
/// The scheme is matched case-insensitively. The value must consist of exactly
/// two space-separated parts and the token part must be non-empty.
#[must_use]
pub fn parse_bearer_authorization(header_value: &str) -> Option<BearerToken> {
    let (scheme, token) = header_value.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }

    let token = token.trim();
    if token.is_empty() || token.contains(char::is_whitespace) {
        return None;
    }

    Some(BearerToken(token.to_owned()))
}
