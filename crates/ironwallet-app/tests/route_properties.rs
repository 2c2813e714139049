//! Property tests for route resolution and session clearing.

use ironwallet_app::router::resolve_with;
use ironwallet_app::{NotFoundPolicy, Resolution, Route};
use ironwallet_client::{CredentialStore, FileCredentialStore, SessionContext};
use ironwallet_types::{ProfileSummary, Session, SessionState, UserRole};
use proptest::prelude::*;
use std::sync::Arc;

fn any_route() -> impl Strategy<Value = Route> {
    proptest::sample::select(Route::ALL.to_vec())
}

fn any_role() -> impl Strategy<Value = UserRole> {
    prop_oneof![Just(UserRole::User), Just(UserRole::Admin)]
}

/// Suffixes that must not change which route a path resolves to.
fn decoration() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("/".to_string()),
        "\\?[a-z]{1,6}=[0-9]{1,3}",
        "#[a-z]{1,8}",
    ]
}

proptest! {
    #[test]
    fn protected_route_never_renders_anonymously(route in any_route(), suffix in decoration()) {
        prop_assume!(route.is_protected());
        let path = format!("{}{}", route.path(), suffix);

        let resolution = resolve_with(&path, &SessionState::Anonymous, NotFoundPolicy::NotFound);

        prop_assert!(resolution.is_login_redirect());
        prop_assert_eq!(resolution.target(), Some(Route::Login));
    }

    #[test]
    fn any_credential_renders_every_known_route(
        route in any_route(),
        token in "[A-Za-z0-9._-]{1,64}",
        role in any_role(),
        suffix in decoration(),
    ) {
        let state = SessionState::from(Some(Session::new(token, ProfileSummary::new("A", role))));
        let path = format!("{}{}", route.path(), suffix);

        prop_assert_eq!(
            resolve_with(&path, &state, NotFoundPolicy::NotFound),
            Resolution::Render(route)
        );
    }

    #[test]
    fn public_routes_render_anonymously(route in any_route()) {
        prop_assume!(!route.is_protected());
        prop_assert_eq!(
            resolve_with(route.path(), &SessionState::Anonymous, NotFoundPolicy::NotFound),
            Resolution::Render(route)
        );
    }

    #[test]
    fn doubled_trailing_slash_is_unknown(route in any_route(), role in any_role()) {
        prop_assume!(route != Route::Landing);
        let state = SessionState::from(Some(Session::new("tok", ProfileSummary::new("A", role))));
        let path = format!("{}//", route.path());

        prop_assert!(matches!(
            resolve_with(&path, &state, NotFoundPolicy::NotFound),
            Resolution::NotFound(_)
        ));
        prop_assert_eq!(Route::from_path(&path), None);
    }

    #[test]
    fn unknown_paths_follow_policy(segment in "/zz[a-z]{1,10}") {
        let anonymous = SessionState::Anonymous;
        prop_assert!(matches!(
            resolve_with(&segment, &anonymous, NotFoundPolicy::NotFound),
            Resolution::NotFound(_)
        ));
        prop_assert_eq!(
            resolve_with(&segment, &anonymous, NotFoundPolicy::RedirectToLanding).target(),
            Some(Route::Landing)
        );
    }

    #[test]
    fn clear_is_idempotent(times in 1usize..5, start_signed_in in any::<bool>()) {
        let dir = tempfile::tempdir().unwrap();
        let store = Arc::new(FileCredentialStore::new(dir.path().join("session.json")));
        let session = SessionContext::new(store.clone());
        if start_signed_in {
            session
                .set(Session::new("tok", ProfileSummary::new("A", UserRole::User)))
                .unwrap();
        }

        for _ in 0..times {
            session.clear().unwrap();
            prop_assert!(!session.is_authenticated());
            prop_assert!(store.load().unwrap().is_none());
        }
    }
}
