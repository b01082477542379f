//! Bearer token type for authenticated API requests.

use std::fmt;

/// An opaque bearer token proving authentication.
///
/// Issued by the remote API on login or registration. The token is only ever
/// transmitted as an `Authorization` header value; absent means
/// unauthenticated.
///
/// # Security
///
/// - Never logged or displayed in Debug output
/// - Treat as opaque; do not parse or inspect
#[derive(Clone)]
pub struct AuthToken(String);

impl AuthToken {
    /// Create a new token from its raw string value.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns the token value for use in authorization headers.
    ///
    /// # Security
    ///
    /// Use only when constructing HTTP authorization headers or when
    /// persisting the token to the session store.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Hide token value in Debug output
impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AuthToken").field(&"[REDACTED]").finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_hides_value_in_debug() {
        let token = AuthToken::new("eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...");
        let debug = format!("{:?}", token);
        assert!(!debug.contains("eyJ"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn token_round_trips_raw_value() {
        let token = AuthToken::new("opaque-value");
        assert_eq!(token.as_str(), "opaque-value");
    }
}
