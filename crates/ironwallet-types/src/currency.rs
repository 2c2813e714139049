//! Supported currencies

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// Crypto currencies accepted by the platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// Bitcoin
    Btc,
    /// Ether
    Eth,
    /// Tether (TRC-20)
    Usdt,
}

impl Currency {
    /// All supported currencies, in display order.
    pub const ALL: [Self; 3] = [Self::Btc, Self::Eth, Self::Usdt];

    /// Ticker symbol as sent on the wire.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Btc => "BTC",
            Self::Eth => "ETH",
            Self::Usdt => "USDT",
        }
    }
}

impl Default for Currency {
    fn default() -> Self {
        Self::Btc
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "BTC" => Ok(Self::Btc),
            "ETH" => Ok(Self::Eth),
            "USDT" => Ok(Self::Usdt),
            _ => Err(ValidationError::UnknownCurrency(s.to_string())),
        }
    }
}
