//! Remote API endpoint paths and wire types.

use tanglome_core::UserProfile;

/// Session validation endpoint (GET, bearer).
pub(crate) const AUTH_ME: &str = "auth/me";

/// Login endpoint (POST).
pub(crate) const AUTH_LOGIN: &str = "auth/login";

/// Registration endpoint (POST).
pub(crate) const AUTH_REGISTER: &str = "auth/register";

/// Profile update endpoint (PUT, bearer).
pub(crate) const AUTH_PROFILE: &str = "auth/profile";

/// Password change endpoint (PUT, bearer).
pub(crate) const AUTH_PASSWORD: &str = "auth/password";

/// Password reset request endpoint (POST).
pub(crate) const AUTH_FORGOT_PASSWORD: &str = "auth/forgot-password";

/// Password reset completion endpoint (POST).
pub(crate) const AUTH_RESET_PASSWORD: &str = "auth/reset-password";

/// Request body for login.
#[derive(Debug, serde::Serialize)]
pub(crate) struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Request body for registration.
#[derive(Debug, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RegisterRequest<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
    pub confirm_password: &'a str,
}

/// Response from login and registration.
#[derive(Debug, serde::Deserialize)]
pub(crate) struct AuthResponse {
    pub token: String,
    pub user: UserProfile,
}

/// Response carrying a user profile.
#[derive(Debug, serde::Deserialize)]
pub(crate) struct UserResponse {
    pub user: UserProfile,
}

/// Request body for a password change.
#[derive(Debug, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ChangePasswordRequest<'a> {
    pub current_password: &'a str,
    pub new_password: &'a str,
    pub confirm_password: &'a str,
}

/// Request body for a password reset request.
#[derive(Debug, serde::Serialize)]
pub(crate) struct ForgotPasswordRequest<'a> {
    pub email: &'a str,
}

/// Request body for completing a password reset.
#[derive(Debug, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ResetPasswordRequest<'a> {
    pub token: &'a str,
    pub new_password: &'a str,
    pub confirm_password: &'a str,
}

/// Response carrying an informational message.
#[derive(Debug, serde::Deserialize)]
pub(crate) struct MessageResponse {
    #[serde(default)]
    pub message: String,
}

/// Error body shape for non-2xx responses.
#[derive(Debug, serde::Deserialize)]
pub(crate) struct ApiErrorResponse {
    pub message: Option<String>,
}
