//! Backend endpoint table
//!
//! Every REST call the client makes, with its method, path and whether it
//! carries the session credential.

use reqwest::Method;

use crate::interceptor::CallAuth;

/// A backend REST endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Signup,
    Login,
    GetProfile,
    UpdateProfile,
    DashboardStats,
    AdminStats,
    ListPlans,
    ActivateInvestment,
    Deposit,
    Withdraw,
    ListTransactions,
}

impl Endpoint {
    /// All endpoints.
    pub const ALL: [Self; 11] = [
        Self::Signup,
        Self::Login,
        Self::GetProfile,
        Self::UpdateProfile,
        Self::DashboardStats,
        Self::AdminStats,
        Self::ListPlans,
        Self::ActivateInvestment,
        Self::Deposit,
        Self::Withdraw,
        Self::ListTransactions,
    ];

    /// HTTP method.
    #[must_use]
    pub fn method(&self) -> Method {
        match self {
            Self::Signup
            | Self::Login
            | Self::ActivateInvestment
            | Self::Deposit
            | Self::Withdraw => Method::POST,
            Self::UpdateProfile => Method::PUT,
            Self::GetProfile
            | Self::DashboardStats
            | Self::AdminStats
            | Self::ListPlans
            | Self::ListTransactions => Method::GET,
        }
    }

    /// Path relative to the API root.
    #[must_use]
    pub const fn path(&self) -> &'static str {
        match self {
            Self::Signup => "/auth/signup",
            Self::Login => "/auth/login",
            Self::GetProfile | Self::UpdateProfile => "/user/profile",
            Self::DashboardStats => "/dashboard/stats",
            Self::AdminStats => "/admin/stats",
            Self::ListPlans => "/investment-plans",
            Self::ActivateInvestment => "/investments/activate",
            Self::Deposit => "/transactions/deposit",
            Self::Withdraw => "/transactions/withdraw",
            Self::ListTransactions => "/transactions",
        }
    }

    /// Credential policy: signup and login never carry one.
    #[must_use]
    pub const fn auth(&self) -> CallAuth {
        match self {
            Self::Signup | Self::Login => CallAuth::Anonymous,
            _ => CallAuth::Attach,
        }
    }

    /// Name for metric labels and log fields.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Signup => "signup",
            Self::Login => "login",
            Self::GetProfile => "get_profile",
            Self::UpdateProfile => "update_profile",
            Self::DashboardStats => "dashboard_stats",
            Self::AdminStats => "admin_stats",
            Self::ListPlans => "list_plans",
            Self::ActivateInvestment => "activate_investment",
            Self::Deposit => "deposit",
            Self::Withdraw => "withdraw",
            Self::ListTransactions => "list_transactions",
        }
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.method(), self.path())
    }
}
