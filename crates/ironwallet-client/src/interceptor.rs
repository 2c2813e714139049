//! Request interceptors
//!
//! Request interceptors for adding authentication headers and other metadata
//! to outgoing HTTP requests.

use reqwest::RequestBuilder;

use crate::session::SessionContext;

/// Header carrying the per-request correlation ID.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Whether a call carries the session credential.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallAuth {
    /// Attach the credential when the session holds one.
    Attach,
    /// Never attach a credential (signup, login).
    Anonymous,
}

/// Transforms a request before it is sent.
pub trait Interceptor: Send + Sync {
    /// Apply this interceptor to the request.
    fn intercept(&self, request: RequestBuilder) -> RequestBuilder;
}

/// Interceptor that adds the session's bearer credential to requests.
///
/// The credential is read at send time, so a login or logout is visible to
/// the very next request.
#[derive(Debug, Clone)]
pub struct AuthInterceptor {
    session: SessionContext,
}

impl AuthInterceptor {
    /// Create an interceptor reading from the given session.
    pub fn new(session: SessionContext) -> Self {
        Self { session }
    }

    /// Check if a credential would be attached right now.
    pub fn has_token(&self) -> bool {
        self.session.is_authenticated()
    }
}

impl Interceptor for AuthInterceptor {
    fn intercept(&self, request: RequestBuilder) -> RequestBuilder {
        match self.session.token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }
}

/// Interceptor that adds request ID for tracing.
#[derive(Debug, Clone, Default)]
pub struct RequestIdInterceptor;

impl RequestIdInterceptor {
    /// Create a new request ID interceptor.
    pub fn new() -> Self {
        Self
    }
}

impl Interceptor for RequestIdInterceptor {
    fn intercept(&self, request: RequestBuilder) -> RequestBuilder {
        request.header(REQUEST_ID_HEADER, uuid::Uuid::new_v4().to_string())
    }
}

/// Combined interceptor that applies the request ID and, when the call
/// permits it, the credential.
#[derive(Debug, Clone)]
pub struct CombinedInterceptor {
    auth: AuthInterceptor,
    request_id: RequestIdInterceptor,
}

impl CombinedInterceptor {
    /// Create a combined interceptor over the given session.
    pub fn new(session: SessionContext) -> Self {
        Self {
            auth: AuthInterceptor::new(session),
            request_id: RequestIdInterceptor::new(),
        }
    }

    /// Get access to the auth interceptor.
    pub fn auth(&self) -> &AuthInterceptor {
        &self.auth
    }

    /// Apply both interceptors according to `auth`.
    pub fn apply(&self, request: RequestBuilder, auth: CallAuth) -> RequestBuilder {
        let request = self.request_id.intercept(request);
        match auth {
            CallAuth::Attach => self.auth.intercept(request),
            CallAuth::Anonymous => request,
        }
    }
}
