//! Shared test support: a scripted gateway and a shareable store.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::oneshot;

use tanglome_core::error::Rejection;
use tanglome_core::{
    AuthGateway, AuthSession, AuthToken, Credentials, Error, PasswordChange, PasswordReset,
    ProfileUpdate, Registration, Result, Role, SocialLinks, TokenStore, UserProfile,
};
use tanglome_store::MemoryTokenStore;

/// Build a minimal profile for tests.
pub fn profile(name: &str, role: &str) -> UserProfile {
    UserProfile {
        id: format!("id-{}", name.to_lowercase()),
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        role: Role::new(role),
        bio: None,
        company: None,
        position: None,
        website: None,
        social_links: SocialLinks::default(),
        created_at: None,
    }
}

/// A scripted response: an optional gate to hold the response in flight,
/// and the outcome (`Err` is a rejection message).
type Scripted<T> = (
    Option<oneshot::Receiver<()>>,
    std::result::Result<T, String>,
);

#[derive(Default)]
struct Script {
    validate: VecDeque<Scripted<UserProfile>>,
    login: VecDeque<Scripted<AuthSession>>,
    register: VecDeque<Scripted<AuthSession>>,
    update: VecDeque<Scripted<UserProfile>>,
    change_password: VecDeque<Scripted<()>>,
    forgot: VecDeque<Scripted<String>>,
    reset: VecDeque<Scripted<String>>,
}

#[derive(Default)]
struct Counters {
    validate: AtomicUsize,
    login: AtomicUsize,
    register: AtomicUsize,
    update: AtomicUsize,
    change_password: AtomicUsize,
    forgot: AtomicUsize,
    reset: AtomicUsize,
}

/// A gateway that replays queued responses, panicking on unscripted calls.
///
/// Cloneable so tests can keep a handle for scripting and inspection while
/// the service owns its own clone.
#[derive(Clone, Default)]
pub struct MockGateway {
    inner: Arc<MockInner>,
}

#[derive(Default)]
struct MockInner {
    script: Mutex<Script>,
    counters: Counters,
}

impl MockGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn queue_validate_ok(&self, user: UserProfile) {
        self.script().validate.push_back((None, Ok(user)));
    }

    pub fn queue_validate_err(&self, message: &str) {
        self.script()
            .validate
            .push_back((None, Err(message.to_string())));
    }

    pub fn queue_login_ok(&self, token: &str, user: UserProfile) {
        self.script().login.push_back((None, Ok(auth_session(token, user))));
    }

    pub fn queue_login_err(&self, message: &str) {
        self.script()
            .login
            .push_back((None, Err(message.to_string())));
    }

    /// Queue a successful login whose response is held until the returned
    /// sender fires, so tests can decide response-arrival order.
    pub fn queue_login_gated(&self, token: &str, user: UserProfile) -> oneshot::Sender<()> {
        let (release, gate) = oneshot::channel();
        self.script()
            .login
            .push_back((Some(gate), Ok(auth_session(token, user))));
        release
    }

    pub fn queue_register_ok(&self, token: &str, user: UserProfile) {
        self.script()
            .register
            .push_back((None, Ok(auth_session(token, user))));
    }

    pub fn queue_update_ok(&self, user: UserProfile) {
        self.script().update.push_back((None, Ok(user)));
    }

    pub fn queue_update_err(&self, message: &str) {
        self.script()
            .update
            .push_back((None, Err(message.to_string())));
    }

    pub fn queue_change_password_ok(&self) {
        self.script().change_password.push_back((None, Ok(())));
    }

    pub fn queue_forgot_ok(&self, message: &str) {
        self.script()
            .forgot
            .push_back((None, Ok(message.to_string())));
    }

    pub fn queue_reset_ok(&self, message: &str) {
        self.script().reset.push_back((None, Ok(message.to_string())));
    }

    pub fn login_calls(&self) -> usize {
        self.inner.counters.login.load(Ordering::SeqCst)
    }

    pub fn validate_calls(&self) -> usize {
        self.inner.counters.validate.load(Ordering::SeqCst)
    }

    pub fn update_calls(&self) -> usize {
        self.inner.counters.update.load(Ordering::SeqCst)
    }

    /// Total network calls across every operation.
    pub fn total_calls(&self) -> usize {
        let c = &self.inner.counters;
        c.validate.load(Ordering::SeqCst)
            + c.login.load(Ordering::SeqCst)
            + c.register.load(Ordering::SeqCst)
            + c.update.load(Ordering::SeqCst)
            + c.change_password.load(Ordering::SeqCst)
            + c.forgot.load(Ordering::SeqCst)
            + c.reset.load(Ordering::SeqCst)
    }

    fn script(&self) -> std::sync::MutexGuard<'_, Script> {
        self.inner.script.lock().unwrap()
    }
}

fn auth_session(token: &str, user: UserProfile) -> AuthSession {
    AuthSession {
        token: AuthToken::new(token),
        user,
    }
}

/// Wait on the gate if present, then surface the scripted outcome.
async fn run<T>(entry: Scripted<T>) -> Result<T> {
    let (gate, result) = entry;
    if let Some(gate) = gate {
        let _ = gate.await;
    }
    result.map_err(|message| Error::Rejected(Rejection::new(400, Some(message))))
}

#[async_trait]
impl AuthGateway for MockGateway {
    async fn validate_session(&self, _token: &AuthToken) -> Result<UserProfile> {
        self.inner.counters.validate.fetch_add(1, Ordering::SeqCst);
        let entry = self
            .script()
            .validate
            .pop_front()
            .expect("unexpected validate_session call");
        run(entry).await
    }

    async fn login(&self, _credentials: &Credentials) -> Result<AuthSession> {
        self.inner.counters.login.fetch_add(1, Ordering::SeqCst);
        let entry = self.script().login.pop_front().expect("unexpected login call");
        run(entry).await
    }

    async fn register(&self, _registration: &Registration) -> Result<AuthSession> {
        self.inner.counters.register.fetch_add(1, Ordering::SeqCst);
        let entry = self
            .script()
            .register
            .pop_front()
            .expect("unexpected register call");
        run(entry).await
    }

    async fn update_profile(
        &self,
        _token: &AuthToken,
        update: &ProfileUpdate,
    ) -> Result<UserProfile> {
        // Gateway contract: a blank name is rejected before any request
        update.validate()?;
        self.inner.counters.update.fetch_add(1, Ordering::SeqCst);
        let entry = self
            .script()
            .update
            .pop_front()
            .expect("unexpected update_profile call");
        run(entry).await
    }

    async fn change_password(&self, _token: &AuthToken, _change: &PasswordChange) -> Result<()> {
        self.inner.counters.change_password.fetch_add(1, Ordering::SeqCst);
        let entry = self
            .script()
            .change_password
            .pop_front()
            .expect("unexpected change_password call");
        run(entry).await
    }

    async fn request_password_reset(&self, _email: &str) -> Result<String> {
        self.inner.counters.forgot.fetch_add(1, Ordering::SeqCst);
        let entry = self
            .script()
            .forgot
            .pop_front()
            .expect("unexpected request_password_reset call");
        run(entry).await
    }

    async fn complete_password_reset(&self, _reset: &PasswordReset) -> Result<String> {
        self.inner.counters.reset.fetch_add(1, Ordering::SeqCst);
        let entry = self
            .script()
            .reset
            .pop_front()
            .expect("unexpected complete_password_reset call");
        run(entry).await
    }
}

/// A memory store that tests can keep a handle to while the service owns
/// its own clone, including across simulated reloads.
#[derive(Clone, Default)]
pub struct SharedMemoryStore {
    inner: Arc<MemoryTokenStore>,
}

impl SharedMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: &str) -> Self {
        Self {
            inner: Arc::new(MemoryTokenStore::with_token(token)),
        }
    }

    /// The raw stored token, if any.
    pub fn stored(&self) -> Option<String> {
        self.inner.load().map(|t| t.as_str().to_string())
    }
}

impl TokenStore for SharedMemoryStore {
    fn load(&self) -> Option<AuthToken> {
        self.inner.load()
    }

    fn save(&self, token: &AuthToken) -> Result<()> {
        self.inner.save(token)
    }

    fn clear(&self) -> Result<()> {
        self.inner.clear()
    }
}
