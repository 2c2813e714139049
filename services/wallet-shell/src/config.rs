//! Configuration for the wallet shell.

use std::path::PathBuf;

use ironwallet_app::{DepositAddresses, NotFoundPolicy};
use ironwallet_client::{ClientConfig, FileCredentialStore};
use ironwallet_types::Currency;

/// Wallet shell configuration
#[derive(Debug, Clone)]
pub struct ShellConfig {
    /// Backend client configuration
    pub client: ClientConfig,

    /// Where the session is persisted between invocations
    pub credentials_path: PathBuf,

    /// Receiving addresses shown on the deposit view
    pub deposit_addresses: DepositAddresses,

    /// Handling of unknown paths
    pub not_found: NotFoundPolicy,
}

impl ShellConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let client = ClientConfig::from_env()?;

        let credentials_path = std::env::var("IRONWALLET_CREDENTIALS_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| FileCredentialStore::default_path());

        let not_found = match std::env::var("IRONWALLET_UNKNOWN_ROUTES") {
            Err(_) => NotFoundPolicy::NotFound,
            Ok(value) => parse_not_found(&value)?,
        };

        Ok(Self {
            client,
            credentials_path,
            deposit_addresses: deposit_addresses_from(|key| std::env::var(key).ok()),
            not_found,
        })
    }
}

/// Read `IRONWALLET_DEPOSIT_ADDRESS_<CODE>` for every currency.
fn deposit_addresses_from(lookup: impl Fn(&str) -> Option<String>) -> DepositAddresses {
    let mut addresses = DepositAddresses::new();
    for currency in Currency::ALL {
        let key = format!("IRONWALLET_DEPOSIT_ADDRESS_{currency}");
        if let Some(address) = lookup(&key) {
            addresses.insert(currency, address);
        }
    }
    addresses
}

fn parse_not_found(value: &str) -> Result<NotFoundPolicy, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "" | "not-found" => Ok(NotFoundPolicy::NotFound),
        "landing" => Ok(NotFoundPolicy::RedirectToLanding),
        _ => Err(ConfigError::Invalid("IRONWALLET_UNKNOWN_ROUTES")),
    }
}

/// Configuration error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    Invalid(&'static str),

    #[error(transparent)]
    Client(#[from] ironwallet_client::ConfigError),
}
