//! View router
//!
//! Resolves a requested path to what should be shown: the view itself, a
//! redirect, or a not-found result.

use ironwallet_types::SessionState;
use tracing::debug;

use crate::guard::{GuardDecision, RouteGuard};
use crate::route::{normalize_path, Route};

/// What to do with paths outside the route table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotFoundPolicy {
    /// Resolve to [`Resolution::NotFound`]
    #[default]
    NotFound,
    /// Redirect to the landing page
    RedirectToLanding,
}

/// Result of resolving a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Show this view
    Render(Route),
    /// Show `to` instead of what was requested
    Redirect {
        /// Normalized path that was requested
        from: String,
        /// Route to show instead
        to: Route,
    },
    /// Path matches nothing
    NotFound(String),
}

impl Resolution {
    /// Route that ends up displayed, if any.
    pub fn target(&self) -> Option<Route> {
        match self {
            Self::Render(route) | Self::Redirect { to: route, .. } => Some(*route),
            Self::NotFound(_) => None,
        }
    }

    /// Check if the requested view was replaced by login.
    pub fn is_login_redirect(&self) -> bool {
        matches!(self, Self::Redirect { to: Route::Login, .. })
    }
}

/// Maps paths to views, consulting the guard for protected ones.
#[derive(Debug, Clone)]
pub struct ViewRouter {
    guard: RouteGuard,
    not_found: NotFoundPolicy,
}

impl ViewRouter {
    /// Create a router with the default not-found policy.
    pub fn new(guard: RouteGuard) -> Self {
        Self {
            guard,
            not_found: NotFoundPolicy::default(),
        }
    }

    /// Set the not-found policy.
    #[must_use]
    pub fn with_not_found_policy(mut self, policy: NotFoundPolicy) -> Self {
        self.not_found = policy;
        self
    }

    /// Resolve a path against the live session.
    pub fn resolve(&self, path: &str) -> Resolution {
        resolve_with(path, &self.guard.session().get(), self.not_found)
    }

    /// The guard in use.
    pub fn guard(&self) -> &RouteGuard {
        &self.guard
    }
}

/// Resolve a path against an explicit session state.
pub fn resolve_with(path: &str, state: &SessionState, policy: NotFoundPolicy) -> Resolution {
    let normalized = normalize_path(path);

    let Some(route) = Route::from_normalized(normalized) else {
        debug!(path = %normalized, "No route matches");
        return match policy {
            NotFoundPolicy::NotFound => Resolution::NotFound(normalized.to_string()),
            NotFoundPolicy::RedirectToLanding => Resolution::Redirect {
                from: normalized.to_string(),
                to: Route::Landing,
            },
        };
    };

    match RouteGuard::decide(route, state) {
        GuardDecision::Allow => Resolution::Render(route),
        GuardDecision::RedirectToLogin => Resolution::Redirect {
            from: normalized.to_string(),
            to: Route::Login,
        },
    }
}
