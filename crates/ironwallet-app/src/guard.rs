//! Route guard
//!
//! Decides whether a protected view may render for the current session.

use ironwallet_client::SessionContext;
use ironwallet_types::SessionState;
use tracing::debug;

use crate::route::Route;

/// Outcome of a guard check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// Render the requested view
    Allow,
    /// Send the user to the login view instead
    RedirectToLogin,
}

/// Presence check on the session credential.
///
/// The guard only asks whether a credential is stored, not whether the
/// backend still accepts it. An expired or revoked credential therefore
/// passes, the protected view renders, and its first API call comes back 401;
/// the session coordinator then clears the session and lands on login. No
/// request is made to validate the credential up front.
#[derive(Debug, Clone)]
pub struct RouteGuard {
    session: SessionContext,
}

impl RouteGuard {
    /// Create a guard reading the given session.
    pub fn new(session: SessionContext) -> Self {
        Self { session }
    }

    /// Evaluate a route against the live session.
    pub fn check(&self, route: Route) -> GuardDecision {
        Self::decide(route, &self.session.get())
    }

    /// Evaluate a route against an explicit session state.
    ///
    /// Public routes always pass.
    pub fn decide(route: Route, state: &SessionState) -> GuardDecision {
        if !route.is_protected() || state.is_authenticated() {
            return GuardDecision::Allow;
        }
        debug!(route = %route, "No credential for protected route");
        GuardDecision::RedirectToLogin
    }

    /// The session this guard reads.
    pub fn session(&self) -> &SessionContext {
        &self.session
    }
}
