//! Core traits for storage and gateway behavior.

mod gateway;
mod store;

pub use gateway::{AuthGateway, AuthSession, PasswordChange, PasswordReset, Registration};
pub use store::TokenStore;
