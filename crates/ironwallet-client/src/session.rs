//! Session context
//!
//! [`SessionContext`] is the single owner of the client's "logged in" belief.
//! It wraps a [`CredentialStore`], keeps the current [`SessionState`] in a
//! `watch` channel so observers see every transition, and serializes writers
//! so the credential and profile snapshot always change together.

use std::sync::Arc;

use ironwallet_types::{ProfileSummary, Session, SessionState};
use parking_lot::Mutex;
use tokio::sync::watch;
use tracing::{debug, warn};

use crate::store::{CredentialStore, MemoryCredentialStore, StoreError};

struct Inner {
    store: Arc<dyn CredentialStore>,
    state: watch::Sender<SessionState>,
    write_lock: Mutex<()>,
}

/// Cloneable handle to the shared session.
///
/// All clones observe the same state.
#[derive(Clone)]
pub struct SessionContext {
    inner: Arc<Inner>,
}

impl std::fmt::Debug for SessionContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionContext")
            .field("authenticated", &self.is_authenticated())
            .finish_non_exhaustive()
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::in_memory()
    }
}

impl SessionContext {
    /// Open a session over a store, loading whatever it currently holds.
    ///
    /// A store that cannot be read yields an anonymous session.
    pub fn new(store: Arc<dyn CredentialStore>) -> Self {
        let initial = match store.load() {
            Ok(session) => SessionState::from(session),
            Err(e) => {
                warn!(error = %e, "Failed to read stored credentials, starting anonymous");
                SessionState::Anonymous
            }
        };
        let (state, _) = watch::channel(initial);

        Self {
            inner: Arc::new(Inner {
                store,
                state,
                write_lock: Mutex::new(()),
            }),
        }
    }

    /// Session backed by a fresh in-memory store.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryCredentialStore::new()))
    }

    /// Current lifecycle state. Never fails.
    pub fn get(&self) -> SessionState {
        self.inner.state.borrow().clone()
    }

    /// Current credential, if any.
    pub fn token(&self) -> Option<String> {
        self.inner.state.borrow().token().map(str::to_owned)
    }

    /// Current profile snapshot, if any.
    pub fn user(&self) -> Option<ProfileSummary> {
        self.inner.state.borrow().user().cloned()
    }

    /// Check if a credential is present.
    pub fn is_authenticated(&self) -> bool {
        self.inner.state.borrow().is_authenticated()
    }

    /// Store a new credential and profile pair.
    ///
    /// On error the previous state is kept.
    pub fn set(&self, session: Session) -> Result<(), StoreError> {
        let _guard = self.inner.write_lock.lock();
        self.inner.store.save(&session)?;
        debug!(user = %session.user.name, "Session stored");
        self.inner
            .state
            .send_replace(SessionState::Authenticated(session));
        Ok(())
    }

    /// Remove the credential and profile. Idempotent.
    ///
    /// The in-memory state becomes anonymous even if the store fails to
    /// delete its copy; the store error is still returned.
    pub fn clear(&self) -> Result<(), StoreError> {
        let _guard = self.inner.write_lock.lock();
        let previous = self.inner.state.send_replace(SessionState::Anonymous);
        if previous.is_authenticated() {
            debug!("Session cleared");
        }
        self.inner.store.clear()
    }

    /// Subscribe to state transitions.
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.inner.state.subscribe()
    }
}
