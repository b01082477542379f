//! Error types for the Tanglome client.
//!
//! This module provides a unified error type with explicit variants for
//! transport, remote rejection, authentication, input validation, and
//! storage errors.

use std::fmt;
use thiserror::Error;

/// Fixed message shown to users for transport-level failures.
///
/// Raw transport detail (DNS, TLS, connection strings) is kept in the error
/// for logs but never surfaced to the UI.
const TRANSPORT_MESSAGE: &str = "Unable to reach the server. Please try again.";

/// The unified error type for Tanglome client operations.
///
/// This error type covers all possible failure modes in the client,
/// with explicit variants to allow callers to handle specific cases.
#[derive(Debug, Error)]
pub enum Error {
    /// Network transport errors (connection, timeout, malformed response).
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// The remote API rejected the request with a non-2xx status.
    #[error("rejected: {0}")]
    Rejected(#[from] Rejection),

    /// Authentication state errors (operation requires a live session).
    #[error("authentication error: {0}")]
    Auth(#[from] AuthError),

    /// Input validation errors, rejected before any network call.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),

    /// Durable storage errors from the token store.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

impl Error {
    /// Returns a human-readable message suitable for direct display.
    ///
    /// Server-supplied rejection messages pass through verbatim; transport
    /// and storage failures collapse to a generic phrase.
    pub fn user_message(&self) -> String {
        match self {
            Error::Transport(_) | Error::Storage(_) => TRANSPORT_MESSAGE.to_string(),
            Error::Rejected(rejection) => rejection
                .message
                .clone()
                .unwrap_or_else(|| "Request failed".to_string()),
            Error::Auth(AuthError::NotAuthenticated) => {
                "You must be signed in to do that.".to_string()
            }
            Error::InvalidInput(err) => err.to_string(),
        }
    }

    /// Fill in a fallback rejection message when the server supplied none.
    ///
    /// Leaves every other variant, and rejections that already carry a
    /// message, untouched.
    pub fn with_default_message(self, fallback: &str) -> Self {
        match self {
            Error::Rejected(Rejection {
                status,
                message: None,
            }) => Error::Rejected(Rejection {
                status,
                message: Some(fallback.to_string()),
            }),
            other => other,
        }
    }
}

/// Transport-level errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network connection failed.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request timed out.
    #[error("request timed out")]
    Timeout,

    /// Response body could not be decoded.
    #[error("malformed response: {message}")]
    Decode { message: String },

    /// Generic HTTP error.
    #[error("HTTP error: {message}")]
    Http { message: String },
}

/// A non-2xx response from the remote API.
///
/// The message, when present, is the server-supplied human-readable string
/// and passes through to callers verbatim.
#[derive(Debug)]
pub struct Rejection {
    /// HTTP status code.
    pub status: u16,
    /// Error message from the server.
    pub message: Option<String>,
}

impl Rejection {
    /// Create a new rejection.
    pub fn new(status: u16, message: Option<String>) -> Self {
        Self { status, message }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {}", self.status)?;
        if let Some(ref message) = self.message {
            write!(f, ": {}", message)?;
        }
        Ok(())
    }
}

impl std::error::Error for Rejection {}

/// Authentication state errors.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The operation requires an authenticated session.
    #[error("not signed in")]
    NotAuthenticated,
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// A profile update was submitted without a name.
    #[error("Name is required")]
    MissingName,

    /// Invalid API base URL.
    #[error("invalid API URL '{value}': {reason}")]
    ApiUrl { value: String, reason: String },
}

/// Durable storage errors.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing the token file failed.
    #[error("token storage I/O: {message}")]
    Io { message: String },

    /// No platform data directory could be determined.
    #[error("could not determine data directory")]
    NoDataDir,
}
