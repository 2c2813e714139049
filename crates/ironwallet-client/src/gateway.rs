//! API gateway
//!
//! [`ApiGateway`] is the single path every backend call takes. On the way out
//! it attaches the request ID and, unless the endpoint is signup or login, the
//! session credential. On the way back it maps statuses to [`ClientError`]
//! and, for HTTP 401 from any endpoint, notifies every registered
//! [`UnauthorizedListener`] before the error reaches the caller.
//!
//! The gateway never clears the session or navigates itself; that is the job
//! of whoever listens.

use std::sync::Arc;

use parking_lot::RwLock;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, instrument, warn};

use crate::config::ClientConfig;
use crate::endpoint::Endpoint;
use crate::error::ClientError;
use crate::interceptor::{CallAuth, CombinedInterceptor};
use crate::metrics::{self, RequestTimer, Status};
use crate::session::SessionContext;

/// Details of a 401 response.
#[derive(Debug, Clone)]
pub struct UnauthorizedEvent {
    /// Endpoint that was rejected
    pub endpoint: Endpoint,
    /// Whether a credential was attached to the rejected request
    pub had_credential: bool,
}

/// Receives the gateway's unauthorized signal.
///
/// Called synchronously, on the task that made the rejected request, before
/// the error is returned. Implementations must be idempotent: concurrent
/// failing requests each deliver their own event.
pub trait UnauthorizedListener: Send + Sync {
    /// Handle a 401 response.
    fn on_unauthorized(&self, event: &UnauthorizedEvent);
}

impl<F> UnauthorizedListener for F
where
    F: Fn(&UnauthorizedEvent) + Send + Sync,
{
    fn on_unauthorized(&self, event: &UnauthorizedEvent) {
        self(event)
    }
}

struct Inner {
    http: reqwest::Client,
    config: ClientConfig,
    session: SessionContext,
    interceptor: CombinedInterceptor,
    listeners: RwLock<Vec<Arc<dyn UnauthorizedListener>>>,
}

/// HTTP gateway to the Iron Wallet backend.
///
/// Cheap to clone; clones share the connection pool, session and listeners.
#[derive(Clone)]
pub struct ApiGateway {
    inner: Arc<Inner>,
}

impl std::fmt::Debug for ApiGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiGateway")
            .field("config", &self.inner.config)
            .field("session", &self.inner.session)
            .field("listeners", &self.inner.listeners.read().len())
            .finish_non_exhaustive()
    }
}

impl ApiGateway {
    /// Create a gateway for the configured backend.
    pub fn new(config: ClientConfig, session: SessionContext) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout())
            .timeout(config.request_timeout())
            .user_agent(config.user_agent())
            .build()
            .map_err(|e| ClientError::connection(format!("failed to build HTTP client: {e}"), false))?;

        debug!(api_base = %config.api_base(), "API gateway initialized");

        Ok(Self {
            inner: Arc::new(Inner {
                http,
                interceptor: CombinedInterceptor::new(session.clone()),
                config,
                session,
                listeners: RwLock::new(Vec::new()),
            }),
        })
    }

    /// The session this gateway reads credentials from.
    pub fn session(&self) -> &SessionContext {
        &self.inner.session
    }

    /// The client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }

    /// Register a listener for 401 responses.
    pub fn add_unauthorized_listener(&self, listener: Arc<dyn UnauthorizedListener>) {
        self.inner.listeners.write().push(listener);
    }

    /// Call an endpoint without a body.
    pub async fn get<T: DeserializeOwned>(&self, endpoint: Endpoint) -> Result<T, ClientError> {
        self.request::<(), T>(endpoint, None).await
    }

    /// Call an endpoint with a JSON body.
    pub async fn send<B, T>(&self, endpoint: Endpoint, body: &B) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.request(endpoint, Some(body)).await
    }

    /// Dispatch a request and decode the JSON response.
    #[instrument(skip(self, body), fields(endpoint = endpoint.as_str()))]
    pub async fn request<B, T>(&self, endpoint: Endpoint, body: Option<&B>) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.inner.config.endpoint(endpoint.path());
        let auth = endpoint.auth();
        let had_credential =
            auth == CallAuth::Attach && self.inner.interceptor.auth().has_token();

        let mut request = self
            .inner
            .interceptor
            .apply(self.inner.http.request(endpoint.method(), &url), auth);
        if let Some(body) = body {
            request = request.json(body);
        }

        debug!(url = %url, credential = had_credential, "Dispatching request");
        let timer = RequestTimer::start(endpoint);

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                let err = match ClientError::from(e) {
                    ClientError::Timeout(_) => {
                        ClientError::Timeout(self.inner.config.request_timeout())
                    }
                    other => other,
                };
                warn!(error = %err, "Request failed before a response was received");
                timer.finish(if matches!(err, ClientError::Timeout(_)) {
                    Status::Timeout
                } else {
                    Status::Error
                });
                return Err(err);
            }
        };

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let err = ClientError::from_response(status, &body);

            if err.is_unauthorized() {
                timer.finish(Status::Unauthorized);
                metrics::record_unauthorized(endpoint);
                warn!(credential = had_credential, "Backend rejected credential");
                self.notify_unauthorized(&UnauthorizedEvent {
                    endpoint,
                    had_credential,
                });
            } else {
                timer.error();
                debug!(status = %status, error = %err, "Backend returned an error");
            }
            return Err(err);
        }

        match response.json::<T>().await {
            Ok(value) => {
                timer.success();
                Ok(value)
            }
            Err(e) => {
                timer.error();
                warn!(error = %e, "Failed to decode response");
                Err(ClientError::Decode(e.to_string()))
            }
        }
    }

    fn notify_unauthorized(&self, event: &UnauthorizedEvent) {
        // Snapshot so listeners may register others without deadlocking.
        let listeners: Vec<_> = self.inner.listeners.read().clone();
        for listener in listeners {
            listener.on_unauthorized(event);
        }
    }
}
