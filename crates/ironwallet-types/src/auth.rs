//! Authentication request/response types

use serde::{Deserialize, Serialize};

use crate::{ProfileSummary, Session};

/// Body of `POST /auth/login`
#[derive(Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Account identifier
    pub email: String,
    /// Account secret
    pub password: String,
}

impl LoginRequest {
    /// Create a login request
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Body of `POST /auth/signup`
#[derive(Clone, Serialize, Deserialize)]
pub struct SignupRequest {
    /// Display name
    pub name: String,
    /// Account identifier
    pub email: String,
    /// Contact phone number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Account secret
    pub password: String,
}

impl std::fmt::Debug for SignupRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignupRequest")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("phone", &self.phone)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Response of a successful login or signup
#[derive(Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    /// Issued bearer credential
    #[serde(alias = "credential", alias = "access_token")]
    pub token: String,
    /// Profile snapshot
    #[serde(alias = "profile")]
    pub user: ProfileSummary,
}

impl AuthResponse {
    /// Convert into the session to persist
    pub fn into_session(self) -> Session {
        Session::new(self.token, self.user)
    }
}

impl std::fmt::Debug for AuthResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthResponse")
            .field("token", &"[REDACTED]")
            .field("user", &self.user)
            .finish()
    }
}
