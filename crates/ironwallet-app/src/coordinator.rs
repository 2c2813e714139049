//! Session coordinator
//!
//! The one place that ends a session. Both an HTTP 401 from any backend call
//! and an explicit logout run the same sequence:
//!
//! 1. clear the stored credential and profile
//! 2. drop every cached query
//! 3. replace the active view with login
//!
//! Each step is idempotent, so concurrent 401s converge on the same state.

use std::sync::{Arc, Weak};

use ironwallet_client::{
    CachedWalletClient, SessionContext, UnauthorizedEvent, UnauthorizedListener,
};
use tracing::{info, warn};

use crate::navigator::Navigator;

/// Why a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    /// The user logged out
    Logout,
    /// The backend rejected the credential
    Unauthorized,
}

/// Clears the session and redirects to login.
#[derive(Debug)]
pub struct SessionCoordinator {
    session: SessionContext,
    cache: CachedWalletClient,
    navigator: Navigator,
}

impl SessionCoordinator {
    pub fn new(session: SessionContext, cache: CachedWalletClient, navigator: Navigator) -> Self {
        Self {
            session,
            cache,
            navigator,
        }
    }

    /// Create a coordinator and subscribe it to the gateway's 401 signal.
    ///
    /// The gateway holds only a weak reference, so dropping the returned
    /// handle unsubscribes in effect.
    pub fn install(
        session: SessionContext,
        cache: CachedWalletClient,
        navigator: Navigator,
    ) -> Arc<Self> {
        let coordinator = Arc::new(Self::new(session, cache.clone(), navigator));
        cache
            .inner()
            .add_unauthorized_listener(Arc::new(WeakListener(Arc::downgrade(&coordinator))));
        coordinator
    }

    /// Run the end-of-session sequence.
    pub fn end_session(&self, reason: EndReason) {
        let was_authenticated = self.session.is_authenticated();

        if let Err(e) = self.session.clear() {
            // In-memory state is already anonymous; only the stored copy lingers.
            warn!(error = %e, "Failed to remove stored credentials");
        }
        self.cache.invalidate_all();
        self.navigator.replace_with_login();

        match reason {
            EndReason::Logout => info!("Logged out"),
            EndReason::Unauthorized if was_authenticated => {
                info!("Session rejected by backend, returned to login")
            }
            EndReason::Unauthorized => {}
        }
    }
}

impl UnauthorizedListener for SessionCoordinator {
    fn on_unauthorized(&self, _event: &UnauthorizedEvent) {
        self.end_session(EndReason::Unauthorized);
    }
}

struct WeakListener(Weak<SessionCoordinator>);

impl UnauthorizedListener for WeakListener {
    fn on_unauthorized(&self, event: &UnauthorizedEvent) {
        if let Some(coordinator) = self.0.upgrade() {
            coordinator.on_unauthorized(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guard::RouteGuard;
    use crate::route::Route;
    use crate::router::ViewRouter;
    use ironwallet_client::{CacheConfig, ClientConfig, Endpoint, WalletClient};
    use ironwallet_types::{ProfileSummary, Session, UserRole};

    fn setup() -> (SessionContext, Navigator, Arc<SessionCoordinator>) {
        let session = SessionContext::in_memory();
        session
            .set(Session::new("tok", ProfileSummary::new("A", UserRole::User)))
            .unwrap();
        let client = WalletClient::connect(ClientConfig::default(), session.clone()).unwrap();
        let cache = CachedWalletClient::new(client, CacheConfig::default());
        let navigator = Navigator::new(ViewRouter::new(RouteGuard::new(session.clone())));
        navigator.navigate("/dashboard");
        let coordinator = SessionCoordinator::install(session.clone(), cache, navigator.clone());
        (session, navigator, coordinator)
    }

    #[test]
    fn test_end_session_clears_then_redirects() {
        let (session, navigator, coordinator) = setup();
        assert_eq!(navigator.current_route(), Some(Route::Dashboard));

        coordinator.end_session(EndReason::Logout);
        assert!(!session.is_authenticated());
        assert_eq!(navigator.current_route(), Some(Route::Login));

        coordinator.end_session(EndReason::Unauthorized);
        assert!(!session.is_authenticated());
        assert_eq!(navigator.current_route(), Some(Route::Login));
    }

    #[test]
    fn test_end_session_wins_over_concurrent_navigation() {
        for _ in 0..200 {
            let (session, navigator, coordinator) = setup();
            let nav = navigator.clone();
            let watched = session.clone();
            let worker = std::thread::spawn(move || {
                while watched.is_authenticated() {
                    nav.navigate("/dashboard");
                    nav.navigate("/deposit");
                }
            });

            coordinator.end_session(EndReason::Unauthorized);
            worker.join().unwrap();

            assert!(!session.is_authenticated());
            assert_eq!(navigator.current_route(), Some(Route::Login));
        }
    }

    #[test]
    fn test_listener_path() {
        let (session, navigator, coordinator) = setup();
        coordinator.on_unauthorized(&UnauthorizedEvent {
            endpoint: Endpoint::GetProfile,
            had_credential: true,
        });
        assert!(!session.is_authenticated());
        assert_eq!(navigator.current_route(), Some(Route::Login));
    }
}
