//! tanglome-core - Core types and traits for the Tanglome auth client.

pub mod credentials;
pub mod error;
pub mod guard;
pub mod profile;
pub mod session;
pub mod tokens;
pub mod traits;
pub mod types;

pub use credentials::Credentials;
pub use error::Error;
pub use guard::{RouteDecision, RouteRequirements};
pub use profile::{ProfileUpdate, SocialLinks, UserProfile};
pub use session::SessionState;
pub use tokens::AuthToken;
pub use traits::{
    AuthGateway, AuthSession, PasswordChange, PasswordReset, Registration, TokenStore,
};
pub use types::{ApiUrl, Role};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
