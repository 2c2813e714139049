//! Route classification
//!
//! The static table of views the client knows, and whether each one needs a
//! session.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Access class of a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Access {
    /// Rendered for everyone
    Public,
    /// Rendered only while a credential is stored
    Protected,
}

/// A known view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Route {
    Landing,
    About,
    Products,
    Login,
    Signup,
    Dashboard,
    Investments,
    Deposit,
    Withdraw,
    Transactions,
    Profile,
    Admin,
}

impl Route {
    /// Every route, public first.
    pub const ALL: [Self; 12] = [
        Self::Landing,
        Self::About,
        Self::Products,
        Self::Login,
        Self::Signup,
        Self::Dashboard,
        Self::Investments,
        Self::Deposit,
        Self::Withdraw,
        Self::Transactions,
        Self::Profile,
        Self::Admin,
    ];

    /// Canonical path.
    #[must_use]
    pub const fn path(&self) -> &'static str {
        match self {
            Self::Landing => "/",
            Self::About => "/about",
            Self::Products => "/products",
            Self::Login => "/login",
            Self::Signup => "/signup",
            Self::Dashboard => "/dashboard",
            Self::Investments => "/investments",
            Self::Deposit => "/deposit",
            Self::Withdraw => "/withdraw",
            Self::Transactions => "/transactions",
            Self::Profile => "/profile",
            Self::Admin => "/admin",
        }
    }

    /// Access class.
    #[must_use]
    pub const fn access(&self) -> Access {
        match self {
            Self::Landing | Self::About | Self::Products | Self::Login | Self::Signup => {
                Access::Public
            }
            Self::Dashboard
            | Self::Investments
            | Self::Deposit
            | Self::Withdraw
            | Self::Transactions
            | Self::Profile
            | Self::Admin => Access::Protected,
        }
    }

    /// Check if the route needs a credential.
    #[must_use]
    pub const fn is_protected(&self) -> bool {
        matches!(self.access(), Access::Protected)
    }

    /// Human-readable title.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Landing => "Iron Wallet",
            Self::About => "About Us",
            Self::Products => "Products",
            Self::Login => "Login",
            Self::Signup => "Sign Up",
            Self::Dashboard => "Dashboard",
            Self::Investments => "Investment Plans",
            Self::Deposit => "Deposit",
            Self::Withdraw => "Withdraw",
            Self::Transactions => "Transactions",
            Self::Profile => "Profile",
            Self::Admin => "Admin Panel",
        }
    }

    /// Match a requested path against the table.
    ///
    /// Query string, fragment and a single trailing slash are ignored.
    /// Matching is exact otherwise: `/Dashboard` and `/dashboard/x` are
    /// unknown.
    pub fn from_path(path: &str) -> Option<Self> {
        Self::from_normalized(normalize_path(path))
    }

    /// Exact match of a path already passed through [`normalize_path`].
    pub fn from_normalized(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|route| route.path() == path)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Strip query string, fragment and one trailing slash. The root stays `/`,
/// and an empty path is the root.
pub fn normalize_path(raw: &str) -> &str {
    let end = raw.find(&['?', '#'][..]).unwrap_or(raw.len());
    let path = &raw[..end];

    if path.is_empty() {
        return "/";
    }
    match path.strip_suffix('/') {
        Some("") | None => path,
        Some(trimmed) => trimmed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification_table() {
        let public: Vec<_> = Route::ALL.iter().filter(|r| !r.is_protected()).collect();
        assert_eq!(
            public,
            [
                &Route::Landing,
                &Route::About,
                &Route::Products,
                &Route::Login,
                &Route::Signup
            ]
        );
        assert!(Route::Admin.is_protected());
        assert!(Route::Dashboard.is_protected());
    }

    #[test]
    fn test_paths_round_trip() {
        for route in Route::ALL {
            assert_eq!(Route::from_path(route.path()), Some(route));
        }
    }

    #[test]
    fn test_normalization() {
        assert_eq!(Route::from_path("/dashboard/"), Some(Route::Dashboard));
        assert_eq!(Route::from_path("/deposit?currency=ETH"), Some(Route::Deposit));
        assert_eq!(Route::from_path("/profile#edit"), Some(Route::Profile));
        assert_eq!(Route::from_path(""), Some(Route::Landing));
        assert_eq!(Route::from_path("/?ref=ad"), Some(Route::Landing));
    }

    #[test]
    fn test_unknown_paths() {
        assert_eq!(Route::from_path("/dashboard//"), None);
        assert_eq!(Route::from_path("/Dashboard"), None);
        assert_eq!(Route::from_path("/dashboard/extra"), None);
        assert_eq!(Route::from_path("/nope"), None);
    }
}
