//! Investment plan endpoints

use ironwallet_types::{ActivateInvestment, Confirmation, InvestmentPlan};
use tracing::{debug, instrument};

use crate::endpoint::Endpoint;
use crate::{ApiGateway, ClientError};

/// Client for investment plans.
#[derive(Debug, Clone)]
pub struct InvestmentClient {
    gateway: ApiGateway,
}

impl InvestmentClient {
    /// Create an investment client over a gateway.
    pub fn new(gateway: ApiGateway) -> Self {
        Self { gateway }
    }

    /// List available plans.
    #[instrument(skip(self), level = "debug")]
    pub async fn list_plans(&self) -> Result<Vec<InvestmentPlan>, ClientError> {
        self.gateway.get(Endpoint::ListPlans).await
    }

    /// Lock funds into a plan.
    ///
    /// Amount bounds are checked by the caller; the backend re-checks them.
    #[instrument(skip(self), level = "debug")]
    pub async fn activate(&self, request: &ActivateInvestment) -> Result<Confirmation, ClientError> {
        debug!(plan_id = %request.plan_id, currency = %request.currency, "Activating investment");
        self.gateway.send(Endpoint::ActivateInvestment, request).await
    }
}
