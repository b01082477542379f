//! In-memory token storage.

use std::sync::Mutex;

use tanglome_core::{AuthToken, Result, TokenStore};

/// Token storage held in process memory.
///
/// Nothing survives a restart; intended for tests and for embedders that
/// manage persistence themselves.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with a token, as if persisted earlier.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Mutex::new(Some(token.into())),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<AuthToken> {
        self.token.lock().unwrap().as_deref().map(AuthToken::new)
    }

    fn save(&self, token: &AuthToken) -> Result<()> {
        *self.token.lock().unwrap() = Some(token.as_str().to_string());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        *self.token.lock().unwrap() = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip() {
        let store = MemoryTokenStore::new();
        assert!(store.load().is_none());

        store.save(&AuthToken::new("tok")).unwrap();
        assert_eq!(store.load().unwrap().as_str(), "tok");

        store.clear().unwrap();
        assert!(store.load().is_none());
    }

    #[test]
    fn seeded_store_loads_token() {
        let store = MemoryTokenStore::with_token("persisted");
        assert_eq!(store.load().unwrap().as_str(), "persisted");
    }
}
