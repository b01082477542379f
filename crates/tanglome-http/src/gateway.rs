//! HTTP-backed auth gateway implementation.

use async_trait::async_trait;
use tracing::{debug, instrument};

use tanglome_core::{
    ApiUrl, AuthGateway, AuthSession, AuthToken, Credentials, PasswordChange, PasswordReset,
    ProfileUpdate, Registration, Result, UserProfile,
};

use crate::client::HttpClient;
use crate::endpoints::*;

/// A network-backed [`AuthGateway`] for the Tanglome REST API.
///
/// Stateless: every operation is one request, and results are returned to
/// the caller rather than applied anywhere. Rejections keep the server's
/// message; a rejection without one falls back to a fixed per-operation
/// phrase.
#[derive(Debug, Clone)]
pub struct HttpGateway {
    client: HttpClient,
}

impl HttpGateway {
    /// Create a new gateway for the given API base URL.
    pub fn new(api: ApiUrl) -> Self {
        Self {
            client: HttpClient::new(api),
        }
    }

    /// Returns the API base URL for this gateway.
    pub fn api(&self) -> &ApiUrl {
        self.client.api()
    }
}

#[async_trait]
impl AuthGateway for HttpGateway {
    #[instrument(skip(self, token))]
    async fn validate_session(&self, token: &AuthToken) -> Result<UserProfile> {
        debug!("Validating session");
        let response: UserResponse = self.client.get_authed(AUTH_ME, token.as_str()).await?;
        Ok(response.user)
    }

    #[instrument(skip(self, credentials), fields(email = credentials.email()))]
    async fn login(&self, credentials: &Credentials) -> Result<AuthSession> {
        debug!("Logging in");

        let request = LoginRequest {
            email: credentials.email(),
            password: credentials.password(),
        };

        let response: AuthResponse = self
            .client
            .post(AUTH_LOGIN, &request)
            .await
            .map_err(|e| e.with_default_message("Login failed"))?;

        Ok(AuthSession {
            token: AuthToken::new(response.token),
            user: response.user,
        })
    }

    #[instrument(skip(self, registration), fields(email = registration.email()))]
    async fn register(&self, registration: &Registration) -> Result<AuthSession> {
        debug!("Registering account");

        let request = RegisterRequest {
            name: registration.name(),
            email: registration.email(),
            password: registration.password(),
            confirm_password: registration.confirm_password(),
        };

        let response: AuthResponse = self
            .client
            .post(AUTH_REGISTER, &request)
            .await
            .map_err(|e| e.with_default_message("Registration failed"))?;

        Ok(AuthSession {
            token: AuthToken::new(response.token),
            user: response.user,
        })
    }

    #[instrument(skip(self, token, update))]
    async fn update_profile(
        &self,
        token: &AuthToken,
        update: &ProfileUpdate,
    ) -> Result<UserProfile> {
        // Local pre-check: a blank name never reaches the network
        update.validate()?;

        debug!("Updating profile");

        let response: UserResponse = self
            .client
            .put_authed(AUTH_PROFILE, update, token.as_str())
            .await
            .map_err(|e| e.with_default_message("Profile update failed"))?;

        Ok(response.user)
    }

    #[instrument(skip(self, token, change))]
    async fn change_password(&self, token: &AuthToken, change: &PasswordChange) -> Result<()> {
        debug!("Changing password");

        let request = ChangePasswordRequest {
            current_password: change.current_password(),
            new_password: change.new_password(),
            confirm_password: change.confirm_password(),
        };

        self.client
            .put_authed_no_response(AUTH_PASSWORD, &request, token.as_str())
            .await
            .map_err(|e| e.with_default_message("Password change failed"))
    }

    #[instrument(skip(self, email))]
    async fn request_password_reset(&self, email: &str) -> Result<String> {
        debug!("Requesting password reset");

        let request = ForgotPasswordRequest { email };

        let response: MessageResponse = self
            .client
            .post(AUTH_FORGOT_PASSWORD, &request)
            .await
            .map_err(|e| e.with_default_message("Password reset request failed"))?;

        Ok(response.message)
    }

    #[instrument(skip(self, reset))]
    async fn complete_password_reset(&self, reset: &PasswordReset) -> Result<String> {
        debug!("Completing password reset");

        let request = ResetPasswordRequest {
            token: reset.reset_token(),
            new_password: reset.new_password(),
            confirm_password: reset.confirm_password(),
        };

        let response: MessageResponse = self
            .client
            .post(AUTH_RESET_PASSWORD, &request)
            .await
            .map_err(|e| e.with_default_message("Password reset failed"))?;

        Ok(response.message)
    }
}
