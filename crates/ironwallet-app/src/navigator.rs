//! Navigator
//!
//! Holds the active location and a bounded back-history. Every move goes
//! through the [`ViewRouter`], including moves back through history, so a
//! protected entry visited before logout resolves to login afterwards.

use std::collections::VecDeque;
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::watch;
use tracing::debug;

use crate::route::Route;
use crate::router::{Resolution, ViewRouter};

/// Default number of history entries kept.
pub const DEFAULT_HISTORY_LIMIT: usize = 50;

/// What is on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    /// A known route
    Route(Route),
    /// The not-found page for a path
    NotFound(String),
}

/// The active location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    /// Path shown in the address bar
    pub path: String,
    /// View rendered at that path
    pub view: View,
}

impl Location {
    /// Location of a known route.
    pub fn route(route: Route) -> Self {
        Self {
            path: route.path().to_string(),
            view: View::Route(route),
        }
    }

    /// Route rendered here, if any.
    pub fn current_route(&self) -> Option<Route> {
        match self.view {
            View::Route(route) => Some(route),
            View::NotFound(_) => None,
        }
    }

    fn from_resolution(resolution: &Resolution) -> Self {
        match resolution {
            Resolution::Render(route) | Resolution::Redirect { to: route, .. } => {
                Self::route(*route)
            }
            Resolution::NotFound(path) => Self {
                path: path.clone(),
                view: View::NotFound(path.clone()),
            },
        }
    }
}

struct Inner {
    router: ViewRouter,
    current: watch::Sender<Location>,
    history: Mutex<VecDeque<Location>>,
    history_limit: usize,
}

/// Cloneable handle to the client's navigation state.
#[derive(Clone)]
pub struct Navigator {
    inner: Arc<Inner>,
}

impl std::fmt::Debug for Navigator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Navigator")
            .field("current", &*self.inner.current.borrow())
            .field("history", &self.inner.history.lock().len())
            .finish_non_exhaustive()
    }
}

impl Navigator {
    /// Start on the landing page.
    pub fn new(router: ViewRouter) -> Self {
        Self::with_history_limit(router, DEFAULT_HISTORY_LIMIT)
    }

    /// Start on the landing page with a custom history bound.
    pub fn with_history_limit(router: ViewRouter, history_limit: usize) -> Self {
        let (current, _) = watch::channel(Location::route(Route::Landing));
        Self {
            inner: Arc::new(Inner {
                router,
                current,
                history: Mutex::new(VecDeque::new()),
                history_limit,
            }),
        }
    }

    /// Active location.
    pub fn current(&self) -> Location {
        self.inner.current.borrow().clone()
    }

    /// Route currently rendered, if any.
    pub fn current_route(&self) -> Option<Route> {
        self.inner.current.borrow().current_route()
    }

    /// Number of entries that [`back`](Self::back) can return to.
    pub fn history_len(&self) -> usize {
        self.inner.history.lock().len()
    }

    /// Subscribe to location changes.
    pub fn subscribe(&self) -> watch::Receiver<Location> {
        self.inner.current.subscribe()
    }

    /// The router used for every move.
    pub fn router(&self) -> &ViewRouter {
        &self.inner.router
    }

    /// Go to a path, pushing the current location onto history.
    ///
    /// Guard redirects are followed: the returned resolution says what was
    /// requested and what is now shown.
    pub fn navigate(&self, path: &str) -> Resolution {
        // Resolve under the lock so a concurrent replace_with_login cannot be
        // overwritten by a decision made against the old session.
        let mut history = self.inner.history.lock();
        let resolution = self.inner.router.resolve(path);
        let next = Location::from_resolution(&resolution);
        debug!(requested = %path, shown = %next.path, "Navigating");

        let previous = self.inner.current.send_replace(next.clone());
        if previous != next {
            history.push_back(previous);
            while history.len() > self.inner.history_limit {
                history.pop_front();
            }
        }
        resolution
    }

    /// Go to a known route.
    pub fn navigate_to(&self, route: Route) -> Resolution {
        self.navigate(route.path())
    }

    /// Replace the active view with login without adding a history entry.
    ///
    /// Idempotent; returns whether the view changed.
    pub fn replace_with_login(&self) -> bool {
        let _history = self.inner.history.lock();
        let login = Location::route(Route::Login);
        let previous = self.inner.current.send_replace(login.clone());
        let changed = previous != login;
        if changed {
            debug!(from = %previous.path, "Active view replaced with login");
        }
        changed
    }

    /// Return to the previous location, re-checking it against the guard.
    pub fn back(&self) -> Option<Resolution> {
        let mut history = self.inner.history.lock();
        let previous = history.pop_back()?;
        let resolution = self.inner.router.resolve(&previous.path);
        self.inner
            .current
            .send_replace(Location::from_resolution(&resolution));
        Some(resolution)
    }
}
