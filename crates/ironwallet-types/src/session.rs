//! Session types

use serde::{Deserialize, Serialize};

use crate::ProfileSummary;

/// An authenticated session: the bearer credential and the profile snapshot
/// issued alongside it.
///
/// The two halves are only ever constructed, stored and dropped together.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Opaque bearer credential
    pub token: String,
    /// Profile snapshot captured at login
    pub user: ProfileSummary,
}

impl Session {
    /// Create a new session
    pub fn new(token: impl Into<String>, user: ProfileSummary) -> Self {
        Self {
            token: token.into(),
            user,
        }
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("token", &"[REDACTED]")
            .field("user", &self.user)
            .finish()
    }
}

/// Lifecycle of the client's session: `Anonymous -> Authenticated -> Anonymous`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    /// No credential stored (visitor, logged out, or invalidated)
    #[default]
    Anonymous,
    /// A credential is stored; it has not necessarily been validated
    Authenticated(Session),
}

impl SessionState {
    /// Check if a credential is present
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    /// The stored credential, if any
    pub fn token(&self) -> Option<&str> {
        match self {
            Self::Authenticated(session) => Some(session.token.as_str()),
            Self::Anonymous => None,
        }
    }

    /// The stored profile snapshot, if any
    pub fn user(&self) -> Option<&ProfileSummary> {
        match self {
            Self::Authenticated(session) => Some(&session.user),
            Self::Anonymous => None,
        }
    }

    /// The session, if authenticated
    pub fn session(&self) -> Option<&Session> {
        match self {
            Self::Authenticated(session) => Some(session),
            Self::Anonymous => None,
        }
    }
}

impl From<Option<Session>> for SessionState {
    fn from(session: Option<Session>) -> Self {
        session.map_or(Self::Anonymous, Self::Authenticated)
    }
}
