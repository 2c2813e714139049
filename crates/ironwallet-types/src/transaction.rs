//! Transaction types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::Currency;

/// Number of hash characters shown in history rows
const SHORT_HASH_LEN: usize = 20;

/// Kind of ledger movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Incoming funds
    Deposit,
    /// Outgoing funds
    Withdrawal,
    /// Funds locked into a plan
    Investment,
}

impl TransactionKind {
    /// Capitalized label for display
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Deposit => "Deposit",
            Self::Withdrawal => "Withdrawal",
            Self::Investment => "Investment",
        }
    }
}

/// Settlement status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    /// Settled
    Completed,
    /// Awaiting confirmation or approval
    Pending,
    /// Rejected or failed on chain
    Failed,
}

impl TransactionStatus {
    /// Capitalized label for display
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Completed => "Completed",
            Self::Pending => "Pending",
            Self::Failed => "Failed",
        }
    }
}

/// History entry from `GET /transactions`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Transaction ID
    pub id: String,
    /// Kind of movement
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    /// Currency moved
    pub currency: Currency,
    /// Unsigned amount
    pub amount: f64,
    /// Settlement status
    pub status: TransactionStatus,
    /// Creation time
    #[serde(deserialize_with = "crate::timestamp::deserialize")]
    pub created_at: DateTime<Utc>,
    /// On-chain hash, when known
    #[serde(default, alias = "transaction_hash")]
    pub hash: Option<String>,
}

impl Transaction {
    /// Amount with the sign the user sees: deposits credit, everything else debits
    pub fn signed_amount(&self) -> f64 {
        match self.kind {
            TransactionKind::Deposit => self.amount,
            TransactionKind::Withdrawal | TransactionKind::Investment => -self.amount,
        }
    }

    /// Leading characters of the hash for compact display
    pub fn short_hash(&self) -> Option<&str> {
        self.hash.as_deref().map(|hash| {
            hash.char_indices()
                .nth(SHORT_HASH_LEN)
                .map_or(hash, |(idx, _)| &hash[..idx])
        })
    }
}

/// Body of `POST /transactions/deposit`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepositRequest {
    /// Currency sent
    pub currency: Currency,
    /// Amount sent
    pub amount: f64,
}

/// Body of `POST /transactions/withdraw`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WithdrawRequest {
    /// Currency requested
    pub currency: Currency,
    /// Amount requested
    pub amount: f64,
    /// Destination wallet address
    pub address: String,
}
