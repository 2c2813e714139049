//! Session-gated navigation against a mock backend.

mod common;

use common::{has_credential, received, stats_json, TestApp};
use ironwallet_app::{LoginForm, Resolution, Route};
use ironwallet_types::{ProfileSummary, Session, UserRole};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_protected_route_redirects_when_anonymous() {
    let server = MockServer::start().await;
    let t = TestApp::new(&server);

    let resolution = t.app.visit("/dashboard");

    assert!(resolution.is_login_redirect());
    assert_eq!(t.app.navigator().current_route(), Some(Route::Login));
    // Guard checks never touch the backend
    assert!(received(&server).await.is_empty());
}

#[tokio::test]
async fn test_protected_route_renders_with_any_credential() {
    let server = MockServer::start().await;
    let t = TestApp::signed_in(&server, "expired-but-present", UserRole::User);

    assert_eq!(t.app.visit("/transactions"), Resolution::Render(Route::Transactions));
    assert!(received(&server).await.is_empty());
}

#[tokio::test]
async fn test_unauthorized_clears_session_and_lands_on_login() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/dashboard/stats"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"detail": "Could not validate credentials"})),
        )
        .mount(&server)
        .await;

    let t = TestApp::signed_in(&server, "revoked", UserRole::User);
    assert_eq!(t.app.visit("/dashboard"), Resolution::Render(Route::Dashboard));

    let err = t.app.dashboard().await.unwrap_err();

    assert!(err.is_unauthorized());
    assert!(!t.app.session().is_authenticated());
    assert!(t.stored().is_none());
    assert_eq!(t.app.navigator().current_route(), Some(Route::Login));
}

#[tokio::test]
async fn test_concurrent_unauthorized_converge() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let t = TestApp::signed_in(&server, "revoked", UserRole::User);
    t.app.visit("/profile");

    let (profile, stats, plans, history) = tokio::join!(
        t.app.profile(),
        t.app.dashboard(),
        t.app.plans(),
        t.app.transactions(),
    );

    assert!(profile.unwrap_err().is_unauthorized());
    assert!(stats.unwrap_err().is_unauthorized());
    assert!(plans.unwrap_err().is_unauthorized());
    assert!(history.unwrap_err().is_unauthorized());
    assert!(!t.app.session().is_authenticated());
    assert!(t.stored().is_none());
    assert_eq!(t.app.navigator().current_route(), Some(Route::Login));
}

#[tokio::test]
async fn test_login_stores_pair_and_lands_on_dashboard() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "credential": "tok123",
            "user": {"name": "A", "role": "user"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let t = TestApp::new(&server);
    t.app.visit("/login");

    let user = t
        .app
        .login(&LoginForm::new("a@example.com", "secret"))
        .await
        .unwrap();

    let expected = ProfileSummary::new("A", UserRole::User);
    assert_eq!(user, expected);
    assert_eq!(t.stored(), Some(Session::new("tok123", expected)));
    assert_eq!(t.app.navigator().current_route(), Some(Route::Dashboard));
    assert_eq!(t.log.messages(), ["Login successful!"]);

    let requests = received(&server).await;
    assert!(!has_credential(&requests[0]));
}

#[tokio::test]
async fn test_failed_login_shows_backend_detail() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"detail": "Incorrect email or password"})),
        )
        .mount(&server)
        .await;

    let t = TestApp::new(&server);
    t.app.visit("/login");

    let err = t
        .app
        .login(&LoginForm::new("a@example.com", "wrong"))
        .await
        .unwrap_err();

    assert!(err.is_unauthorized());
    assert!(t.stored().is_none());
    assert_eq!(t.app.navigator().current_route(), Some(Route::Login));
    assert_eq!(t.log.messages(), ["Incorrect email or password"]);
}

#[tokio::test]
async fn test_logout_clears_store_and_drops_credential_header() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/dashboard/stats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(stats_json()))
        .mount(&server)
        .await;

    let t = TestApp::signed_in(&server, "tok123", UserRole::User);
    t.app.visit("/investments");
    t.app.dashboard().await.unwrap();

    t.app.logout();

    assert!(t.stored().is_none());
    assert_eq!(t.app.navigator().current_route(), Some(Route::Login));

    // The cache was dropped, so this goes to the backend, without a credential
    t.app.dashboard().await.unwrap();
    let requests = received(&server).await;
    assert_eq!(requests.len(), 2);
    assert!(has_credential(&requests[0]));
    assert!(!has_credential(&requests[1]));
}

#[tokio::test]
async fn test_back_after_logout_is_guarded() {
    let server = MockServer::start().await;
    let t = TestApp::signed_in(&server, "tok123", UserRole::User);

    t.app.visit("/");
    t.app.visit("/withdraw");
    t.app.logout();

    let resolution = t.app.navigator().back().unwrap();
    assert!(resolution.is_login_redirect());
    assert_eq!(t.app.navigator().current_route(), Some(Route::Login));
}

#[tokio::test]
async fn test_session_survives_new_app_instance() {
    let server = MockServer::start().await;
    let first = TestApp::signed_in(&server, "tok123", UserRole::Admin);
    assert_eq!(first.app.visit("/admin"), Resolution::Render(Route::Admin));

    // Same store, as when the shell is invoked again
    let stored = first.stored().unwrap();
    let second = TestApp::signed_in(&server, &stored.token, stored.user.role);
    assert_eq!(second.app.visit("/admin"), Resolution::Render(Route::Admin));
    assert_eq!(second.app.menu().last().unwrap().label, "Admin Panel");
}
