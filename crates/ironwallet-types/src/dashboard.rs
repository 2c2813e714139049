//! Dashboard aggregate types

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::Currency;

/// Aggregates returned by `GET /dashboard/stats`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DashboardStats {
    /// Per-currency balances
    #[serde(default)]
    pub balances: BTreeMap<Currency, f64>,
    /// Total amount locked in plans
    #[serde(default)]
    pub total_invested: f64,
    /// Number of running plans
    #[serde(default)]
    pub active_investments: u32,
    /// Earnings accrued so far
    #[serde(default)]
    pub total_earnings: f64,
}

impl DashboardStats {
    /// Invested capital plus earnings
    pub fn portfolio_value(&self) -> f64 {
        self.total_invested + self.total_earnings
    }
}

/// Platform-wide aggregates for the admin view.
///
/// Contract only: the backend does not serve `GET /admin/stats` yet.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AdminStats {
    /// Registered users
    #[serde(default)]
    pub total_users: u64,
    /// Investments ever activated
    #[serde(default)]
    pub total_investments: u64,
    /// Transactions ever recorded
    #[serde(default)]
    pub total_transactions: u64,
    /// Capital currently invested
    #[serde(default)]
    pub total_invested: f64,
}
