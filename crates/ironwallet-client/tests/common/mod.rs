//! Common test utilities for ironwallet-client integration tests

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use ironwallet_client::{
    ClientConfig, SessionContext, UnauthorizedEvent, UnauthorizedListener, WalletClient,
};
use ironwallet_types::{ProfileSummary, Session, UserRole};
use serde_json::{json, Value};
use wiremock::MockServer;

/// Build a client pointed at the mock backend.
pub fn client_for(server: &MockServer, session: SessionContext) -> WalletClient {
    let config = ClientConfig::builder()
        .backend_url(server.uri())
        .build()
        .expect("valid config");
    WalletClient::connect(config, session).expect("client builds")
}

/// Session holding the given credential for a regular user.
pub fn session_with(token: &str) -> SessionContext {
    let session = SessionContext::in_memory();
    session
        .set(Session::new(token, ProfileSummary::new("Alice", UserRole::User)))
        .expect("memory store never fails");
    session
}

/// Listener that counts unauthorized events.
#[derive(Default)]
pub struct CountingListener {
    count: AtomicUsize,
}

impl CountingListener {
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }
}

impl UnauthorizedListener for CountingListener {
    fn on_unauthorized(&self, _event: &UnauthorizedEvent) {
        self.count.fetch_add(1, Ordering::SeqCst);
    }
}

/// Register a fresh counting listener on the client.
pub fn count_unauthorized(client: &WalletClient) -> Arc<CountingListener> {
    let listener = Arc::new(CountingListener::default());
    client.add_unauthorized_listener(listener.clone());
    listener
}

#[allow(dead_code)]
pub fn profile_json(name: &str, phone: &str) -> Value {
    json!({
        "id": "u1",
        "name": name,
        "email": "alice@example.com",
        "phone": phone,
        "role": "user",
        "created_at": "2024-01-15T10:00:00Z",
        "balances": {"BTC": 0.5, "ETH": 0.0, "USDT": 1200.0}
    })
}

#[allow(dead_code)]
pub fn stats_json() -> Value {
    json!({
        "balances": {"BTC": 0.5, "USDT": 1200.0},
        "total_invested": 1000.0,
        "active_investments": 2,
        "total_earnings": 84.5
    })
}
