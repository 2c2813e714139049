//! View models
//!
//! Display-ready data for each protected view, computed from backend
//! records. Nothing here performs I/O.

use std::collections::BTreeMap;

use ironwallet_types::{
    AdminStats, Currency, DashboardStats, ProfileSummary, Transaction, TransactionKind,
};
use serde::Serialize;

use crate::route::Route;

/// Fractions of the invested total shown as the four-week growth series.
const GROWTH_STEPS: [f64; 4] = [0.25, 0.5, 0.75, 1.0];

/// One slice of the portfolio chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortfolioSlice {
    pub currency: Currency,
    pub amount: f64,
}

/// One point of the growth chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GrowthPoint {
    pub label: String,
    pub amount: f64,
}

/// Dashboard contents.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub balances: BTreeMap<Currency, f64>,
    pub total_invested: f64,
    pub active_investments: u32,
    pub total_earnings: f64,
    pub portfolio_value: f64,
    /// Currencies with a positive balance only
    pub portfolio: Vec<PortfolioSlice>,
    pub growth: Vec<GrowthPoint>,
}

impl DashboardView {
    pub fn from_stats(stats: &DashboardStats) -> Self {
        let portfolio = stats
            .balances
            .iter()
            .filter(|(_, amount)| **amount > 0.0)
            .map(|(currency, amount)| PortfolioSlice {
                currency: *currency,
                amount: *amount,
            })
            .collect();

        let growth = GROWTH_STEPS
            .iter()
            .enumerate()
            .map(|(week, fraction)| GrowthPoint {
                label: format!("Week {}", week + 1),
                amount: stats.total_invested * fraction,
            })
            .collect();

        Self {
            balances: stats.balances.clone(),
            total_invested: stats.total_invested,
            active_investments: stats.active_investments,
            total_earnings: stats.total_earnings,
            portfolio_value: stats.portfolio_value(),
            portfolio,
            growth,
        }
    }

    /// Balance for a currency, zero when absent.
    pub fn balance(&self, currency: Currency) -> f64 {
        self.balances.get(&currency).copied().unwrap_or_default()
    }
}

/// One row of the transaction history.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionRow {
    pub id: String,
    pub kind: TransactionKind,
    pub currency: Currency,
    /// `+` for deposits, `-` otherwise
    pub amount: String,
    pub status: &'static str,
    pub date: String,
    /// First 20 characters of the hash followed by `...`
    pub hash: Option<String>,
}

impl From<&Transaction> for TransactionRow {
    fn from(tx: &Transaction) -> Self {
        let sign = match tx.kind {
            TransactionKind::Deposit => '+',
            TransactionKind::Withdrawal | TransactionKind::Investment => '-',
        };

        Self {
            id: tx.id.clone(),
            kind: tx.kind,
            currency: tx.currency,
            amount: format!("{sign}{}", tx.amount),
            status: tx.status.label(),
            date: tx.created_at.format("%Y-%m-%d %H:%M").to_string(),
            hash: tx.short_hash().map(|hash| format!("{hash}...")),
        }
    }
}

/// Rows for the transaction history view.
pub fn transaction_rows(transactions: &[Transaction]) -> Vec<TransactionRow> {
    transactions.iter().map(TransactionRow::from).collect()
}

/// A navigation menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MenuItem {
    pub label: &'static str,
    pub route: Route,
}

const STANDARD_MENU: [MenuItem; 6] = [
    MenuItem { label: "Dashboard", route: Route::Dashboard },
    MenuItem { label: "Investment Plans", route: Route::Investments },
    MenuItem { label: "Deposit", route: Route::Deposit },
    MenuItem { label: "Withdraw", route: Route::Withdraw },
    MenuItem { label: "Transactions", route: Route::Transactions },
    MenuItem { label: "Profile", route: Route::Profile },
];

/// Menu for the signed-in user. Admins get an extra `Admin Panel` entry.
///
/// This only hides the entry; `/admin` itself is guarded like any other
/// protected route.
pub fn menu_for(user: &ProfileSummary) -> Vec<MenuItem> {
    let mut items = STANDARD_MENU.to_vec();
    if user.role.is_admin() {
        items.push(MenuItem {
            label: "Admin Panel",
            route: Route::Admin,
        });
    }
    items
}

/// Admin panel contents.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdminView {
    pub stats: AdminStats,
    /// False while the backend does not serve the statistics
    pub live: bool,
}

impl AdminView {
    /// Zeros, shown until the backend serves `/admin/stats`.
    pub fn placeholder() -> Self {
        Self {
            stats: AdminStats::default(),
            live: false,
        }
    }

    pub fn from_stats(stats: AdminStats) -> Self {
        Self { stats, live: true }
    }
}

/// Configured receiving addresses per currency.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DepositAddresses {
    addresses: BTreeMap<Currency, String>,
}

impl DepositAddresses {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, currency: Currency, address: impl Into<String>) -> Self {
        self.insert(currency, address);
        self
    }

    /// Set the address for a currency; blank addresses are ignored.
    pub fn insert(&mut self, currency: Currency, address: impl Into<String>) {
        let address = address.into();
        let address = address.trim();
        if !address.is_empty() {
            self.addresses.insert(currency, address.to_string());
        }
    }

    pub fn get(&self, currency: Currency) -> Option<&str> {
        self.addresses.get(&currency).map(String::as_str)
    }
}

/// Deposit view for the selected currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DepositView {
    pub currency: Currency,
    /// `None` when no address is configured for the currency
    pub address: Option<String>,
}

impl DepositView {
    pub fn new(currency: Currency, addresses: &DepositAddresses) -> Self {
        Self {
            currency,
            address: addresses.get(currency).map(str::to_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ironwallet_types::{TransactionStatus, UserRole};

    #[test]
    fn test_dashboard_slices_and_growth() {
        let stats = DashboardStats {
            balances: BTreeMap::from([
                (Currency::Btc, 0.5),
                (Currency::Eth, 0.0),
                (Currency::Usdt, 1200.0),
            ]),
            total_invested: 1000.0,
            active_investments: 2,
            total_earnings: 50.0,
        };
        let view = DashboardView::from_stats(&stats);

        assert_eq!(view.portfolio.len(), 2);
        assert!(view.portfolio.iter().all(|s| s.currency != Currency::Eth));
        assert_eq!(view.portfolio_value, 1050.0);
        let amounts: Vec<f64> = view.growth.iter().map(|p| p.amount).collect();
        assert_eq!(amounts, [250.0, 500.0, 750.0, 1000.0]);
        assert_eq!(view.growth[3].label, "Week 4");
    }

    #[test]
    fn test_transaction_row() {
        let tx: Transaction = serde_json::from_value(serde_json::json!({
            "id": "t1",
            "type": "investment",
            "currency": "USDT",
            "amount": 250.0,
            "status": "completed",
            "created_at": "2024-06-01T12:30:00Z",
            "hash": "0123456789abcdefghijklmnop"
        }))
        .unwrap();

        let row = TransactionRow::from(&tx);
        assert_eq!(row.amount, "-250");
        assert_eq!(row.status, "Completed");
        assert_eq!(row.date, "2024-06-01 12:30");
        assert_eq!(row.hash.as_deref(), Some("0123456789abcdefghij..."));
        assert_eq!(tx.status, TransactionStatus::Completed);
    }

    #[test]
    fn test_menu_admin_entry() {
        let user = ProfileSummary::new("A", UserRole::User);
        assert_eq!(menu_for(&user).len(), 6);

        let admin = ProfileSummary::new("Root", UserRole::Admin);
        let items = menu_for(&admin);
        assert_eq!(items.len(), 7);
        assert_eq!(items[6].route, Route::Admin);
    }

    #[test]
    fn test_deposit_view() {
        let addresses = DepositAddresses::new()
            .with(Currency::Btc, "bc1qexample")
            .with(Currency::Eth, "   ");
        assert_eq!(
            DepositView::new(Currency::Btc, &addresses).address.as_deref(),
            Some("bc1qexample")
        );
        assert_eq!(DepositView::new(Currency::Eth, &addresses).address, None);
    }

    #[test]
    fn test_admin_placeholder() {
        let view = AdminView::placeholder();
        assert!(!view.live);
        assert_eq!(view.stats.total_users, 0);
    }
}
