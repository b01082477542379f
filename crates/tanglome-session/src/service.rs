//! The session service: single owner of session state.

use std::fmt;
use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, info, instrument, warn};

use tanglome_core::error::AuthError;
use tanglome_core::{
    AuthGateway, AuthSession, AuthToken, Credentials, PasswordChange, PasswordReset,
    ProfileUpdate, Registration, Result, SessionState, TokenStore, UserProfile,
};

use crate::sequence::ArrivalSequencer;

/// The process-wide owner of the session.
///
/// Composes a [`TokenStore`] and an [`AuthGateway`] into a subscribable
/// session object. All session reads and mutations go through this service;
/// storage is never touched by anything else. Cheap to clone: the
/// composition root constructs one instance and hands out clones.
pub struct SessionService<S, G> {
    inner: Arc<Inner<S, G>>,
}

struct Inner<S, G> {
    store: S,
    gateway: G,
    state: watch::Sender<SessionState>,
    // One sequencer per mutation kind: credential-establishing responses
    // (login/register/startup validation) and profile-replacing responses
    // (update/refresh).
    credential_seq: ArrivalSequencer,
    profile_seq: ArrivalSequencer,
}

impl<S, G> SessionService<S, G>
where
    S: TokenStore,
    G: AuthGateway,
{
    /// Create the service, reading any persisted credential.
    ///
    /// Never performs a network call: with no stored credential the session
    /// is `Unauthenticated` immediately; with one it is `Initializing`
    /// until [`initialize`](Self::initialize) resolves it.
    pub fn new(store: S, gateway: G) -> Self {
        let initial = match store.load() {
            Some(token) => SessionState::Initializing { token },
            None => SessionState::Unauthenticated,
        };

        let (state, _) = watch::channel(initial);

        Self {
            inner: Arc::new(Inner {
                store,
                gateway,
                state,
                credential_seq: ArrivalSequencer::default(),
                profile_seq: ArrivalSequencer::default(),
            }),
        }
    }

    /// Run the startup validation check.
    ///
    /// No-op unless the session is `Initializing`. A validation failure is
    /// absorbed rather than returned: the stored credential is cleared and
    /// the session resolves to `Unauthenticated`.
    #[instrument(skip(self))]
    pub async fn initialize(&self) {
        let token = {
            match &*self.inner.state.borrow() {
                SessionState::Initializing { token } => token.clone(),
                _ => return,
            }
        };

        match self.inner.gateway.validate_session(&token).await {
            Ok(user) => {
                info!("Startup validation succeeded");
                let arrival = self.inner.credential_seq.arrival();
                self.inner.state.send_modify(|state| {
                    // A login that raced ahead of validation wins
                    if state.loading() && self.inner.credential_seq.try_apply(arrival) {
                        *state = SessionState::Authenticated { token, user };
                    }
                });
            }
            Err(e) => {
                debug!(error = %e, "Startup validation failed, clearing stored credential");
                if let Err(e) = self.inner.store.clear() {
                    warn!(error = %e, "Failed to clear stored credential");
                }
                self.inner.state.send_modify(|state| {
                    if state.loading() {
                        *state = SessionState::Unauthenticated;
                    }
                });
            }
        }
    }

    /// Exchange credentials for an authenticated session.
    ///
    /// On success the credential is persisted and the session becomes
    /// `Authenticated` as one logical operation. On failure the state is
    /// unchanged and the error carries the server's message.
    #[instrument(skip(self, password))]
    pub async fn login(&self, email: &str, password: &str) -> Result<UserProfile> {
        let credentials = Credentials::new(email, password);
        let session = self.inner.gateway.login(&credentials).await?;
        Ok(self.establish(session))
    }

    /// Create an account and sign in as one operation.
    #[instrument(skip(self, registration), fields(email = registration.email()))]
    pub async fn register(&self, registration: &Registration) -> Result<UserProfile> {
        let session = self.inner.gateway.register(registration).await?;
        Ok(self.establish(session))
    }

    /// Apply a successful credential exchange.
    fn establish(&self, session: AuthSession) -> UserProfile {
        let AuthSession { token, user } = session;
        let profile = user.clone();
        let token_for_store = token.clone();

        let arrival = self.inner.credential_seq.arrival();
        let mut applied = false;
        self.inner.state.send_modify(|state| {
            if self.inner.credential_seq.try_apply(arrival) {
                *state = SessionState::Authenticated { token, user };
                applied = true;
            }
        });

        if applied {
            // The in-memory session stays valid even if persistence fails;
            // only continuity across restarts is lost.
            if let Err(e) = self.inner.store.save(&token_for_store) {
                warn!(error = %e, "Failed to persist credential");
            }
        }

        profile
    }

    /// Sign out. Synchronous, unconditional, idempotent.
    #[instrument(skip(self))]
    pub fn logout(&self) {
        if let Err(e) = self.inner.store.clear() {
            warn!(error = %e, "Failed to clear stored credential");
        }

        self.inner.state.send_if_modified(|state| {
            if matches!(state, SessionState::Unauthenticated) {
                false
            } else {
                *state = SessionState::Unauthenticated;
                true
            }
        });
    }

    /// Replace profile fields on the live session.
    ///
    /// The server's response becomes the new profile; the credential is
    /// untouched. A blank name is rejected by the gateway before any
    /// request is issued.
    #[instrument(skip(self, update))]
    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<UserProfile> {
        let token = self.token().ok_or(AuthError::NotAuthenticated)?;
        let user = self.inner.gateway.update_profile(&token, update).await?;

        let replacement = user.clone();
        let arrival = self.inner.profile_seq.arrival();
        self.inner.state.send_modify(|state| {
            // A profile can only be replaced while its credential is live
            if let SessionState::Authenticated { user: current, .. } = state {
                if self.inner.profile_seq.try_apply(arrival) {
                    *current = replacement;
                }
            }
        });

        Ok(user)
    }

    /// Change the account password. Session state is unaffected.
    #[instrument(skip(self, change))]
    pub async fn change_password(&self, change: &PasswordChange) -> Result<()> {
        let token = self.token().ok_or(AuthError::NotAuthenticated)?;
        self.inner.gateway.change_password(&token, change).await
    }

    /// Request a password-reset email for the given address.
    #[instrument(skip(self))]
    pub async fn request_password_reset(&self, email: &str) -> Result<String> {
        self.inner.gateway.request_password_reset(email).await
    }

    /// Complete a password reset with an emailed reset token.
    #[instrument(skip(self, reset))]
    pub async fn complete_password_reset(&self, reset: &PasswordReset) -> Result<String> {
        self.inner.gateway.complete_password_reset(reset).await
    }

    /// Re-fetch the profile for the live session.
    ///
    /// Failures are logged and ignored; the session never regresses here.
    #[instrument(skip(self))]
    pub async fn refresh_profile(&self) {
        let token = match &*self.inner.state.borrow() {
            SessionState::Authenticated { token, .. } => token.clone(),
            _ => return,
        };

        match self.inner.gateway.validate_session(&token).await {
            Ok(user) => {
                let arrival = self.inner.profile_seq.arrival();
                self.inner.state.send_modify(|state| {
                    if let SessionState::Authenticated { user: current, .. } = state {
                        if self.inner.profile_seq.try_apply(arrival) {
                            *current = user;
                        }
                    }
                });
            }
            Err(e) => warn!(error = %e, "Failed to refresh profile"),
        }
    }

    /// The current resolved state.
    pub fn snapshot(&self) -> SessionState {
        self.inner.state.borrow().clone()
    }

    /// Subscribe to state transitions.
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.inner.state.subscribe()
    }

    /// True iff the session is fully authenticated.
    pub fn is_authenticated(&self) -> bool {
        self.inner.state.borrow().is_authenticated()
    }

    /// True iff the authenticated user holds the author role.
    pub fn is_author(&self) -> bool {
        self.inner.state.borrow().is_author()
    }

    /// True iff the user may create content. Alias of
    /// [`is_author`](Self::is_author), kept for call-site clarity.
    pub fn can_create_content(&self) -> bool {
        self.is_author()
    }

    /// True only while startup validation is in flight.
    pub fn loading(&self) -> bool {
        self.inner.state.borrow().loading()
    }

    /// The current profile, if validated.
    pub fn user(&self) -> Option<UserProfile> {
        self.inner.state.borrow().user().cloned()
    }

    /// The current credential, validated or not.
    pub fn token(&self) -> Option<AuthToken> {
        self.inner.state.borrow().token().cloned()
    }
}

impl<S, G> Clone for SessionService<S, G> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S, G> fmt::Debug for SessionService<S, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // SessionState's Debug already redacts the token
        f.debug_struct("SessionService")
            .field("state", &*self.inner.state.borrow())
            .finish()
    }
}
