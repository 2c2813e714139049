//! Transaction endpoints

use ironwallet_types::{Confirmation, DepositRequest, Transaction, WithdrawRequest};
use tracing::{debug, instrument};

use crate::endpoint::Endpoint;
use crate::{ApiGateway, ClientError};

/// Client for deposits, withdrawals and history.
#[derive(Debug, Clone)]
pub struct TransactionClient {
    gateway: ApiGateway,
}

impl TransactionClient {
    /// Create a transaction client over a gateway.
    pub fn new(gateway: ApiGateway) -> Self {
        Self { gateway }
    }

    /// Transaction history, newest first as the backend orders it.
    #[instrument(skip(self), level = "debug")]
    pub async fn list(&self) -> Result<Vec<Transaction>, ClientError> {
        self.gateway.get(Endpoint::ListTransactions).await
    }

    /// Report an incoming deposit.
    #[instrument(skip(self), level = "debug")]
    pub async fn deposit(&self, request: &DepositRequest) -> Result<Confirmation, ClientError> {
        debug!(currency = %request.currency, "Submitting deposit");
        self.gateway.send(Endpoint::Deposit, request).await
    }

    /// Request a withdrawal to an external address.
    #[instrument(skip(self, request), level = "debug", fields(currency = %request.currency))]
    pub async fn withdraw(&self, request: &WithdrawRequest) -> Result<Confirmation, ClientError> {
        self.gateway.send(Endpoint::Withdraw, request).await
    }
}
