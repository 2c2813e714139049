//! Integration tests for the API gateway and endpoint clients.
//!
//! A wiremock server stands in for the wallet backend.

mod common;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use common::{client_for, count_unauthorized, profile_json, session_with, stats_json};
use ironwallet_client::{
    CacheConfig, CachedWalletClient, ClientConfig, ClientError, SessionContext, WalletClient,
};
use ironwallet_types::{Currency, DepositRequest, LoginRequest, ProfileUpdate};
use serde_json::json;
use wiremock::matchers::{body_json, header, header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// =============================================================================
// Request path
// =============================================================================

#[tokio::test]
async fn test_credential_attached_when_session_present() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/transactions"))
        .and(header("authorization", "Bearer tok-abc"))
        .and(header_exists("x-request-id"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, session_with("tok-abc"));
    let transactions = client.transactions().list().await.unwrap();
    assert!(transactions.is_empty());
}

#[tokio::test]
async fn test_no_credential_when_anonymous() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/investment-plans"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let client = client_for(&server, SessionContext::in_memory());
    client.investments().list_plans().await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].headers.get("authorization").is_none());
}

#[tokio::test]
async fn test_login_never_carries_credential() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .and(body_json(json!({"email": "a@example.com", "password": "pw"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "credential": "tok123",
            "user": {"name": "A", "role": "user"}
        })))
        .mount(&server)
        .await;

    let client = client_for(&server, session_with("stale"));
    let response = client
        .auth()
        .login(&LoginRequest::new("a@example.com", "pw"))
        .await
        .unwrap();

    assert_eq!(response.token, "tok123");
    assert_eq!(response.user.name, "A");

    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].headers.get("authorization").is_none());
}

// =============================================================================
// Response path
// =============================================================================

#[tokio::test]
async fn test_unauthorized_notifies_listeners_before_returning() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/dashboard/stats"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"detail": "Could not validate credentials"})),
        )
        .mount(&server)
        .await;

    let client = client_for(&server, session_with("expired"));
    let counter = count_unauthorized(&client);

    let observed = Arc::new(AtomicBool::new(false));
    let flag = observed.clone();
    client.add_unauthorized_listener(Arc::new(move |event: &ironwallet_client::UnauthorizedEvent| {
        assert!(event.had_credential);
        flag.store(true, Ordering::SeqCst);
    }));

    let err = client.dashboard().stats().await.unwrap_err();

    assert!(err.is_unauthorized());
    assert!(observed.load(Ordering::SeqCst));
    assert_eq!(counter.count(), 1);
    // The gateway only signals; clearing is the listener's job.
    assert!(client.session().is_authenticated());
}

#[tokio::test]
async fn test_unauthorized_from_login_still_signals() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"detail": "Invalid credentials"})))
        .mount(&server)
        .await;

    let client = client_for(&server, SessionContext::in_memory());
    let counter = count_unauthorized(&client);

    let err = client
        .auth()
        .login(&LoginRequest::new("a@example.com", "wrong"))
        .await
        .unwrap_err();

    assert_eq!(err.user_message("Login failed"), "Invalid credentials");
    assert_eq!(counter.count(), 1);
}

#[tokio::test]
async fn test_other_statuses_pass_through() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/transactions/deposit"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({"detail": "Deposits are paused"})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/admin/stats"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"detail": "Not Found"})))
        .mount(&server)
        .await;

    let client = client_for(&server, session_with("tok"));
    let counter = count_unauthorized(&client);

    let err = client
        .transactions()
        .deposit(&DepositRequest {
            currency: Currency::Btc,
            amount: 0.1,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Rejected { .. }));
    assert_eq!(err.user_message("Deposit failed"), "Deposits are paused");

    let err = client.dashboard().admin_stats().await.unwrap_err();
    assert!(matches!(err, ClientError::NotFound(_)));

    assert_eq!(counter.count(), 0);
    assert!(client.session().is_authenticated());
}

#[tokio::test]
async fn test_transport_failure_is_connection_error() {
    let config = ClientConfig::builder()
        .backend_url("http://127.0.0.1:9")
        .build()
        .unwrap();
    let client = WalletClient::connect(config, session_with("tok")).unwrap();
    let counter = count_unauthorized(&client);

    let err = client.profile().get_profile().await.unwrap_err();
    assert!(matches!(err, ClientError::Connection { .. }));
    assert_eq!(err.user_message("Failed to load profile"), "Failed to load profile");
    assert_eq!(counter.count(), 0);
}

#[tokio::test]
async fn test_timeout_reports_configured_limit() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/user/profile"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(profile_json("Alice", "555-0100"))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&server)
        .await;

    let config = ClientConfig::builder()
        .backend_url(server.uri())
        .request_timeout(Duration::from_millis(100))
        .build()
        .unwrap();
    let client = WalletClient::connect(config, session_with("tok")).unwrap();

    let err = client.profile().get_profile().await.unwrap_err();
    assert!(matches!(err, ClientError::Timeout(d) if d == Duration::from_millis(100)));
    assert_eq!(err.to_string(), "request timeout after 100ms");
    assert!(client.session().is_authenticated());
}

#[tokio::test]
async fn test_concurrent_unauthorized_each_signal() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let client = client_for(&server, session_with("expired"));
    let counter = count_unauthorized(&client);

    let profile = client.profile();
    let dashboard = client.dashboard();
    let transactions = client.transactions();
    let (a, b, c) = tokio::join!(profile.get_profile(), dashboard.stats(), transactions.list());

    assert!(a.unwrap_err().is_unauthorized());
    assert!(b.unwrap_err().is_unauthorized());
    assert!(c.unwrap_err().is_unauthorized());
    assert_eq!(counter.count(), 3);
}

// =============================================================================
// Query cache
// =============================================================================

#[tokio::test]
async fn test_cached_profile_fetched_once() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/user/profile"))
        .respond_with(ResponseTemplate::new(200).set_body_json(profile_json("Alice", "555")))
        .expect(1)
        .mount(&server)
        .await;

    let cached = CachedWalletClient::new(client_for(&server, session_with("tok")), CacheConfig::default());

    let first = cached.profile().await.unwrap();
    let second = cached.profile().await.unwrap();
    assert_eq!(first, second);
    assert_eq!(first.balance(Currency::Usdt), 1200.0);
}

#[tokio::test]
async fn test_profile_update_reflected_by_next_fetch() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/user/profile"))
        .respond_with(ResponseTemplate::new(200).set_body_json(profile_json("Alice", "555")))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/user/profile"))
        .and(body_json(json!({"name": "Alicia", "phone": "777"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(profile_json("Alicia", "777")))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/user/profile"))
        .respond_with(ResponseTemplate::new(200).set_body_json(profile_json("Alicia", "777")))
        .mount(&server)
        .await;

    let cached = CachedWalletClient::new(client_for(&server, session_with("tok")), CacheConfig::default());
    assert_eq!(cached.profile().await.unwrap().name, "Alice");

    cached
        .update_profile(&ProfileUpdate {
            name: "Alicia".to_string(),
            phone: "777".to_string(),
        })
        .await
        .unwrap();

    let refreshed = cached.profile().await.unwrap();
    assert_eq!(refreshed.name, "Alicia");
    assert_eq!(refreshed.phone.as_deref(), Some("777"));
}

#[tokio::test]
async fn test_deposit_invalidates_balances() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/dashboard/stats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(stats_json()))
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/transactions/deposit"))
        .and(body_json(json!({"currency": "ETH", "amount": 2.0})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "Deposit recorded"})))
        .mount(&server)
        .await;

    let cached = CachedWalletClient::new(client_for(&server, session_with("tok")), CacheConfig::default());
    cached.dashboard_stats().await.unwrap();
    cached.dashboard_stats().await.unwrap();

    let confirmation = cached
        .deposit(&DepositRequest {
            currency: Currency::Eth,
            amount: 2.0,
        })
        .await
        .unwrap();
    assert_eq!(confirmation.message.as_deref(), Some("Deposit recorded"));

    let stats = cached.dashboard_stats().await.unwrap();
    assert_eq!(stats.active_investments, 2);
}

#[tokio::test]
async fn test_cache_is_scoped_to_credential() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/user/profile"))
        .respond_with(ResponseTemplate::new(200).set_body_json(profile_json("Alice", "555")))
        .expect(2)
        .mount(&server)
        .await;

    let session = session_with("first");
    let cached = CachedWalletClient::new(client_for(&server, session.clone()), CacheConfig::default());
    cached.profile().await.unwrap();

    session
        .set(ironwallet_types::Session::new(
            "second",
            ironwallet_types::ProfileSummary::new("Bob", ironwallet_types::UserRole::User),
        ))
        .unwrap();
    cached.profile().await.unwrap();
}
