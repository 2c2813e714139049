//! Profile endpoints

use ironwallet_types::{ProfileUpdate, UserProfile};
use tracing::instrument;

use crate::endpoint::Endpoint;
use crate::{ApiGateway, ClientError};

/// Client for the current user's profile.
#[derive(Debug, Clone)]
pub struct ProfileClient {
    gateway: ApiGateway,
}

impl ProfileClient {
    /// Create a profile client over a gateway.
    pub fn new(gateway: ApiGateway) -> Self {
        Self { gateway }
    }

    /// Fetch the full profile with balances.
    #[instrument(skip(self), level = "debug")]
    pub async fn get_profile(&self) -> Result<UserProfile, ClientError> {
        self.gateway.get(Endpoint::GetProfile).await
    }

    /// Save name and phone, returning the updated profile.
    #[instrument(skip(self, update), level = "debug")]
    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<UserProfile, ClientError> {
        self.gateway.send(Endpoint::UpdateProfile, update).await
    }
}
