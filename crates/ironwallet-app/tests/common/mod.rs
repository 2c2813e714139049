//! Common test utilities for ironwallet-app integration tests

use std::sync::Arc;

use ironwallet_app::{DepositAddresses, NotificationLog, WalletApp};
use ironwallet_client::{ClientConfig, CredentialStore, MemoryCredentialStore};
use ironwallet_types::{Currency, ProfileSummary, Session, UserRole};
use serde_json::{json, Value};
use wiremock::{MockServer, Request};

/// An app wired to the mock backend, with handles on its store and log.
pub struct TestApp {
    pub app: WalletApp,
    pub store: Arc<MemoryCredentialStore>,
    pub log: Arc<NotificationLog>,
}

impl TestApp {
    pub fn new(server: &MockServer) -> Self {
        Self::with_store(server, Arc::new(MemoryCredentialStore::new()))
    }

    /// Start with a credential already stored, as after an earlier login.
    pub fn signed_in(server: &MockServer, token: &str, role: UserRole) -> Self {
        let store = Arc::new(MemoryCredentialStore::with_session(Session::new(
            token,
            ProfileSummary::new("Alice", role),
        )));
        Self::with_store(server, store)
    }

    fn with_store(server: &MockServer, store: Arc<MemoryCredentialStore>) -> Self {
        let log = Arc::new(NotificationLog::new());
        let config = ClientConfig::builder()
            .backend_url(server.uri())
            .build()
            .expect("valid config");
        let app = WalletApp::builder(config)
            .store(store.clone())
            .notifier(log.clone())
            .deposit_addresses(DepositAddresses::new().with(Currency::Btc, "bc1qtestaddress"))
            .build()
            .expect("app builds");
        Self { app, store, log }
    }

    /// What the backing store currently holds.
    #[allow(dead_code)]
    pub fn stored(&self) -> Option<Session> {
        self.store.load().expect("memory store never fails")
    }
}

/// Requests the mock backend has seen so far.
pub async fn received(server: &MockServer) -> Vec<Request> {
    server.received_requests().await.unwrap_or_default()
}

#[allow(dead_code)]
pub fn has_credential(request: &Request) -> bool {
    request.headers.get("authorization").is_some()
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
        "balances": {"BTC": 0.5, "ETH": 0.0, "USDT": 1200.0},
        "total_invested": 1000.0,
        "active_investments": 2,
        "total_earnings": 84.5
    })
}

#[allow(dead_code)]
pub fn plan_json(id: &str, min: f64, max: f64) -> Value {
    json!({
        "id": id,
        "name": "Growth",
        "description": "Medium term",
        "rate": 8.0,
        "min_amount": min,
        "max_amount": max,
        "duration_days": 60
    })
}
