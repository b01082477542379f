//! User role type.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The role of an authenticated principal.
///
/// The set of roles is owned by the remote API, so this is an open string
/// newtype rather than an enum: a role this client has never seen still
/// deserializes, it just grants no capabilities. The well-known values are
/// exposed as constants.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Role(String);

impl Role {
    /// An ordinary registered user.
    pub const USER: &'static str = "user";
    /// A user who may author content.
    pub const AUTHOR: &'static str = "author";
    /// An administrator.
    pub const ADMIN: &'static str = "admin";

    /// Create a role from its wire value.
    pub fn new(role: impl Into<String>) -> Self {
        Self(role.into())
    }

    /// Returns the wire value of this role.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true for the author role.
    pub fn is_author(&self) -> bool {
        self.0 == Self::AUTHOR
    }

    /// Returns true for the admin role.
    pub fn is_admin(&self) -> bool {
        self.0 == Self::ADMIN
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Role {
    fn from(role: &str) -> Self {
        Self::new(role)
    }
}
