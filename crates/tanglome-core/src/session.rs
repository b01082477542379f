//! Session state machine.

use crate::profile::UserProfile;
use crate::tokens::AuthToken;

/// The resolved state of the client session.
///
/// The shape enforces the pairing invariant: a profile can never exist
/// without the credential that produced it, and a validated credential
/// always carries its profile. `Initializing` holds a persisted credential
/// that has not yet been validated against the remote API.
#[derive(Debug, Clone, Default)]
pub enum SessionState {
    /// No credential. Guarded navigation redirects to sign-in.
    #[default]
    Unauthenticated,

    /// A persisted credential awaiting startup validation.
    Initializing {
        /// The credential read from durable storage.
        token: AuthToken,
    },

    /// A validated credential and the profile it resolves to.
    Authenticated {
        /// The live credential.
        token: AuthToken,
        /// The profile associated with the credential.
        user: UserProfile,
    },
}

impl SessionState {
    /// True iff the session is fully authenticated.
    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated { .. })
    }

    /// True iff the authenticated user holds the author role.
    pub fn is_author(&self) -> bool {
        match self {
            SessionState::Authenticated { user, .. } => user.role.is_author(),
            _ => false,
        }
    }

    /// True iff the user may create content.
    ///
    /// Currently identical to [`is_author`](Self::is_author); the alias is
    /// kept for call-site clarity at the boundary.
    pub fn can_create_content(&self) -> bool {
        self.is_author()
    }

    /// True only while startup validation is in flight.
    pub fn loading(&self) -> bool {
        matches!(self, SessionState::Initializing { .. })
    }

    /// The current profile, if validated.
    pub fn user(&self) -> Option<&UserProfile> {
        match self {
            SessionState::Authenticated { user, .. } => Some(user),
            _ => None,
        }
    }

    /// The current credential, validated or not.
    pub fn token(&self) -> Option<&AuthToken> {
        match self {
            SessionState::Initializing { token } => Some(token),
            SessionState::Authenticated { token, .. } => Some(token),
            SessionState::Unauthenticated => None,
        }
    }
}
