//! Unified wallet client
//!
//! [`WalletClient`] owns one [`ApiGateway`] and hands out typed endpoint
//! clients that share its connection pool, session and unauthorized
//! listeners.
//!
//! ```ignore
//! use ironwallet_client::{ClientConfig, SessionContext, WalletClient};
//!
//! let client = WalletClient::connect(ClientConfig::from_env()?, SessionContext::in_memory())?;
//! let plans = client.investments().list_plans().await?;
//! ```

use std::sync::Arc;

use tracing::instrument;

use crate::auth::AuthClient;
use crate::dashboard::DashboardClient;
use crate::gateway::UnauthorizedListener;
use crate::investments::InvestmentClient;
use crate::profile::ProfileClient;
use crate::transactions::TransactionClient;
use crate::{ApiGateway, ClientConfig, ClientError, SessionContext};

/// Unified Iron Wallet client.
#[derive(Debug, Clone)]
pub struct WalletClient {
    gateway: ApiGateway,
}

impl WalletClient {
    /// Create a client for the configured backend.
    ///
    /// No connection is made until the first request.
    #[instrument(skip_all, level = "debug")]
    pub fn connect(config: ClientConfig, session: SessionContext) -> Result<Self, ClientError> {
        Ok(Self::from_gateway(ApiGateway::new(config, session)?))
    }

    /// Wrap an existing gateway.
    pub fn from_gateway(gateway: ApiGateway) -> Self {
        Self { gateway }
    }

    /// Get an auth client.
    #[must_use]
    pub fn auth(&self) -> AuthClient {
        AuthClient::new(self.gateway.clone())
    }

    /// Get a profile client.
    #[must_use]
    pub fn profile(&self) -> ProfileClient {
        ProfileClient::new(self.gateway.clone())
    }

    /// Get a dashboard client.
    #[must_use]
    pub fn dashboard(&self) -> DashboardClient {
        DashboardClient::new(self.gateway.clone())
    }

    /// Get an investment client.
    #[must_use]
    pub fn investments(&self) -> InvestmentClient {
        InvestmentClient::new(self.gateway.clone())
    }

    /// Get a transaction client.
    #[must_use]
    pub fn transactions(&self) -> TransactionClient {
        TransactionClient::new(self.gateway.clone())
    }

    /// Register a listener for 401 responses from any endpoint.
    pub fn add_unauthorized_listener(&self, listener: Arc<dyn UnauthorizedListener>) {
        self.gateway.add_unauthorized_listener(listener);
    }

    /// The underlying gateway.
    #[must_use]
    pub fn gateway(&self) -> &ApiGateway {
        &self.gateway
    }

    /// The session credentials are read from.
    #[must_use]
    pub fn session(&self) -> &SessionContext {
        self.gateway.session()
    }

    /// The client configuration.
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        self.gateway.config()
    }
}
