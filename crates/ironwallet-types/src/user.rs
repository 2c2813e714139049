//! User types

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::Currency;

/// User role for navigation decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Platform administrator
    Admin,
    /// Regular investor; also any role this client does not know
    #[default]
    #[serde(other)]
    User,
}

impl UserRole {
    /// Check if this is the admin role
    pub const fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Admin => "admin",
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identity snapshot captured at login and persisted with the credential.
///
/// May go stale relative to the server until the next profile fetch.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProfileSummary {
    /// Backend user ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Email address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Role
    #[serde(default)]
    pub role: UserRole,
}

impl ProfileSummary {
    /// Create a summary with the given name and role
    pub fn new(name: impl Into<String>, role: UserRole) -> Self {
        Self {
            id: None,
            name: name.into(),
            email: None,
            role,
        }
    }

    /// Set the email address
    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }
}

/// Full user profile as returned by `GET /user/profile`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Backend user ID
    #[serde(default)]
    pub id: String,
    /// Display name
    pub name: String,
    /// Email address (read-only)
    pub email: String,
    /// Contact phone number
    #[serde(default)]
    pub phone: Option<String>,
    /// Role
    #[serde(default)]
    pub role: UserRole,
    /// Account creation time
    #[serde(deserialize_with = "crate::timestamp::deserialize")]
    pub created_at: DateTime<Utc>,
    /// Per-currency balances
    #[serde(default)]
    pub balances: BTreeMap<Currency, f64>,
}

impl UserProfile {
    /// Balance for a currency, zero when the backend omits it
    pub fn balance(&self, currency: Currency) -> f64 {
        self.balances.get(&currency).copied().unwrap_or_default()
    }

    /// Editable fields of this profile
    pub fn editable(&self) -> ProfileUpdate {
        ProfileUpdate {
            name: self.name.clone(),
            phone: self.phone.clone().unwrap_or_default(),
        }
    }
}

/// Mutable profile fields sent with `PUT /user/profile`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProfileUpdate {
    /// Display name
    pub name: String,
    /// Contact phone number
    pub phone: String,
}
