//! Auth endpoints
//!
//! Signup and login. Both are sent without a credential and return a fresh
//! one; storing it is left to the caller.

use ironwallet_types::{AuthResponse, LoginRequest, SignupRequest};
use tracing::{debug, instrument};

use crate::endpoint::Endpoint;
use crate::{ApiGateway, ClientError};

/// Client for the auth endpoints.
#[derive(Debug, Clone)]
pub struct AuthClient {
    gateway: ApiGateway,
}

impl AuthClient {
    /// Create an auth client over a gateway.
    pub fn new(gateway: ApiGateway) -> Self {
        Self { gateway }
    }

    /// Register a new account.
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn signup(&self, request: &SignupRequest) -> Result<AuthResponse, ClientError> {
        debug!("Signing up");
        self.gateway.send(Endpoint::Signup, request).await
    }

    /// Exchange email and password for a credential.
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ClientError> {
        debug!("Logging in");
        self.gateway.send(Endpoint::Login, request).await
    }
}
