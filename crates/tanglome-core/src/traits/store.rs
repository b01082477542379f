//! Token storage trait.

use crate::Result;
use crate::tokens::AuthToken;

/// The durable storage boundary for the session credential.
///
/// One opaque string under a single well-known key. No network access and
/// no validation logic; the session provider owns all policy.
pub trait TokenStore: Send + Sync {
    /// Returns the stored token, or `None` if absent.
    ///
    /// Never fails: any retrieval problem is reported as absent, so a
    /// corrupt or unreadable store degrades to "signed out".
    fn load(&self) -> Option<AuthToken>;

    /// Persists the token, overwriting any prior value.
    fn save(&self, token: &AuthToken) -> Result<()>;

    /// Removes the stored token. Succeeds when nothing is stored.
    fn clear(&self) -> Result<()>;
}
