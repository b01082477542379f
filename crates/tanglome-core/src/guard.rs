//! Route guard decisions.

use crate::session::SessionState;

/// Access requirements declared by a navigation target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteRequirements {
    /// The route requires an authenticated session.
    pub require_auth: bool,
    /// The route additionally requires the author role.
    /// Only consulted when `require_auth` is set.
    pub require_author: bool,
}

impl RouteRequirements {
    /// A route anyone may view.
    pub fn public() -> Self {
        Self {
            require_auth: false,
            require_author: false,
        }
    }

    /// A route for any signed-in user.
    pub fn authenticated() -> Self {
        Self {
            require_auth: true,
            require_author: false,
        }
    }

    /// A route for signed-in authors only.
    pub fn author_only() -> Self {
        Self {
            require_auth: true,
            require_author: true,
        }
    }

    /// Decide access from already-resolved session state.
    ///
    /// This is synchronous and never waits on `loading`: callers must not
    /// evaluate guarded routes until startup validation has resolved,
    /// otherwise a momentarily-unauthenticated user would be redirected.
    pub fn evaluate(&self, session: &SessionState) -> RouteDecision {
        if !self.require_auth {
            return RouteDecision::Render;
        }
        if !session.is_authenticated() {
            return RouteDecision::RedirectToSignIn;
        }
        if self.require_author && !session.can_create_content() {
            return RouteDecision::AccessDenied;
        }
        RouteDecision::Render
    }
}

/// Signed-in access is the common case for guarded routes.
impl Default for RouteRequirements {
    fn default() -> Self {
        Self::authenticated()
    }
}

/// The outcome of evaluating a navigation target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    /// Render the requested view.
    Render,
    /// Redirect to the sign-in view.
    RedirectToSignIn,
    /// Render the access-denied view.
    AccessDenied,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::UserProfile;
    use crate::tokens::AuthToken;
    use crate::types::Role;

    fn signed_in(role: &str) -> SessionState {
        SessionState::Authenticated {
            token: AuthToken::new("t"),
            user: UserProfile {
                id: "u1".to_string(),
                name: "Alice".to_string(),
                email: "alice@example.com".to_string(),
                role: Role::new(role),
                bio: None,
                company: None,
                position: None,
                website: None,
                social_links: Default::default(),
                created_at: None,
            },
        }
    }

    #[test]
    fn unauthenticated_user_is_redirected() {
        let state = SessionState::Unauthenticated;
        assert_eq!(
            RouteRequirements::authenticated().evaluate(&state),
            RouteDecision::RedirectToSignIn
        );
        // Redirect wins over access-denied for author routes
        assert_eq!(
            RouteRequirements::author_only().evaluate(&state),
            RouteDecision::RedirectToSignIn
        );
    }

    #[test]
    fn non_author_is_denied_on_author_routes() {
        let state = signed_in("user");
        assert_eq!(
            RouteRequirements::author_only().evaluate(&state),
            RouteDecision::AccessDenied
        );
        assert_eq!(
            RouteRequirements::authenticated().evaluate(&state),
            RouteDecision::Render
        );
    }

    #[test]
    fn author_renders_everywhere() {
        let state = signed_in("author");
        assert_eq!(
            RouteRequirements::author_only().evaluate(&state),
            RouteDecision::Render
        );
        assert_eq!(
            RouteRequirements::authenticated().evaluate(&state),
            RouteDecision::Render
        );
        assert_eq!(
            RouteRequirements::public().evaluate(&state),
            RouteDecision::Render
        );
    }

    #[test]
    fn public_routes_ignore_session_state() {
        assert_eq!(
            RouteRequirements::public().evaluate(&SessionState::Unauthenticated),
            RouteDecision::Render
        );
        // require_author without require_auth is not consulted
        let odd = RouteRequirements {
            require_auth: false,
            require_author: true,
        };
        assert_eq!(
            odd.evaluate(&SessionState::Unauthenticated),
            RouteDecision::Render
        );
    }
}
