//! Dashboard endpoints

use ironwallet_types::{AdminStats, DashboardStats};
use tracing::instrument;

use crate::endpoint::Endpoint;
use crate::{ApiGateway, ClientError};

/// Client for aggregate statistics.
#[derive(Debug, Clone)]
pub struct DashboardClient {
    gateway: ApiGateway,
}

impl DashboardClient {
    /// Create a dashboard client over a gateway.
    pub fn new(gateway: ApiGateway) -> Self {
        Self { gateway }
    }

    /// Balances, invested total, active plan count and earnings.
    #[instrument(skip(self), level = "debug")]
    pub async fn stats(&self) -> Result<DashboardStats, ClientError> {
        self.gateway.get(Endpoint::DashboardStats).await
    }

    /// Platform-wide statistics for administrators.
    ///
    /// The backend does not serve this yet; expect [`ClientError::NotFound`].
    #[instrument(skip(self), level = "debug")]
    pub async fn admin_stats(&self) -> Result<AdminStats, ClientError> {
        self.gateway.get(Endpoint::AdminStats).await
    }
}
