//! Auth gateway trait.

use std::fmt;

use async_trait::async_trait;

use crate::Result;
use crate::credentials::Credentials;
use crate::profile::{ProfileUpdate, UserProfile};
use crate::tokens::AuthToken;

/// A successful credential exchange: the issued token and its profile.
#[derive(Debug, Clone)]
pub struct AuthSession {
    /// The bearer token issued by the remote API.
    pub token: AuthToken,
    /// The profile of the authenticated principal.
    pub user: UserProfile,
}

/// Input for account registration.
pub struct Registration {
    name: String,
    email: String,
    password: String,
    confirm_password: String,
}

impl Registration {
    /// Create a registration request.
    ///
    /// Password agreement is checked by the remote API, mirroring the
    /// sign-up form; no local pre-check is applied.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        confirm_password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
            confirm_password: confirm_password.into(),
        }
    }

    /// Returns the display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the account email address.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the chosen password.
    pub fn password(&self) -> &str {
        &self.password
    }

    /// Returns the password confirmation.
    pub fn confirm_password(&self) -> &str {
        &self.confirm_password
    }
}

// Intentionally hide passwords in Debug output
impl fmt::Debug for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .field("confirm_password", &"[REDACTED]")
            .finish()
    }
}

/// Input for a password change on a live session.
pub struct PasswordChange {
    current_password: String,
    new_password: String,
    confirm_password: String,
}

impl PasswordChange {
    /// Create a password change request.
    pub fn new(
        current_password: impl Into<String>,
        new_password: impl Into<String>,
        confirm_password: impl Into<String>,
    ) -> Self {
        Self {
            current_password: current_password.into(),
            new_password: new_password.into(),
            confirm_password: confirm_password.into(),
        }
    }

    /// Returns the current password.
    pub fn current_password(&self) -> &str {
        &self.current_password
    }

    /// Returns the new password.
    pub fn new_password(&self) -> &str {
        &self.new_password
    }

    /// Returns the new password confirmation.
    pub fn confirm_password(&self) -> &str {
        &self.confirm_password
    }
}

impl fmt::Debug for PasswordChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasswordChange")
            .field("current_password", &"[REDACTED]")
            .field("new_password", &"[REDACTED]")
            .field("confirm_password", &"[REDACTED]")
            .finish()
    }
}

/// Input for completing a password reset with an emailed reset token.
pub struct PasswordReset {
    reset_token: String,
    new_password: String,
    confirm_password: String,
}

impl PasswordReset {
    /// Create a password reset completion request.
    pub fn new(
        reset_token: impl Into<String>,
        new_password: impl Into<String>,
        confirm_password: impl Into<String>,
    ) -> Self {
        Self {
            reset_token: reset_token.into(),
            new_password: new_password.into(),
            confirm_password: confirm_password.into(),
        }
    }

    /// Returns the reset token from the password-reset email.
    pub fn reset_token(&self) -> &str {
        &self.reset_token
    }

    /// Returns the new password.
    pub fn new_password(&self) -> &str {
        &self.new_password
    }

    /// Returns the new password confirmation.
    pub fn confirm_password(&self) -> &str {
        &self.confirm_password
    }
}

impl fmt::Debug for PasswordReset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasswordReset")
            .field("reset_token", &"[REDACTED]")
            .field("new_password", &"[REDACTED]")
            .field("confirm_password", &"[REDACTED]")
            .finish()
    }
}

/// Stateless operations against the remote auth API.
///
/// Each operation sends exactly one request and maps every outcome to
/// `Result`: server-rejection messages pass through verbatim, transport
/// failures collapse to a generic message, and nothing panics or escapes
/// as a raw transport error. Implementations never touch storage; applying
/// results is the session provider's job.
#[async_trait]
pub trait AuthGateway: Send + Sync {
    /// Resolve a credential to its profile.
    ///
    /// A failure means the credential is invalid or expired and the caller
    /// must clear it.
    async fn validate_session(&self, token: &AuthToken) -> Result<UserProfile>;

    /// Exchange credentials for a token and profile.
    async fn login(&self, credentials: &Credentials) -> Result<AuthSession>;

    /// Create an account and sign in as one operation.
    async fn register(&self, registration: &Registration) -> Result<AuthSession>;

    /// Replace profile fields, returning the refreshed profile.
    ///
    /// A blank name is rejected locally with `"Name is required"` before
    /// any request is issued.
    async fn update_profile(
        &self,
        token: &AuthToken,
        update: &ProfileUpdate,
    ) -> Result<UserProfile>;

    /// Change the account password. Acknowledgement only.
    async fn change_password(&self, token: &AuthToken, change: &PasswordChange) -> Result<()>;

    /// Request a password-reset email. Returns the server's informational
    /// message.
    async fn request_password_reset(&self, email: &str) -> Result<String>;

    /// Complete a password reset with an emailed token. Returns the
    /// server's informational message.
    async fn complete_password_reset(&self, reset: &PasswordReset) -> Result<String>;
}
