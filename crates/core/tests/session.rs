//! Session lifecycle: settings changes, hydration and logout.

mod support;

use std::sync::Arc;

use aspire_core::{LoginOutcome, PresentationState, ReconcileOutcome, Session};
use aspire_domain::{ApiReply, AspireError, LoginPayload, ProfileUpdateRequest, ThemeMode};
use support::{
    profile, store, FakeAuthApi, FakeHasher, FakeProfileApi, LoginHarness, MemoryProfileCache,
};

async fn signed_in() -> LoginHarness {
    let mut record = profile("s-1", "a@b.com", "tz1");
    record.theme_mode = Some("light".into());
    let auth = FakeAuthApi::default().login_reply(Ok(ApiReply::ok(LoginPayload {
        profile: record.clone(),
        public_key: None,
    })));
    let harness = LoginHarness::new(auth, FakeHasher::default());
    harness.api.put(record);

    let outcome = harness.flow.login("a@b.com", "secret").await.unwrap();
    assert!(matches!(outcome, LoginOutcome::Authenticated(_)));
    harness
}

#[tokio::test]
async fn settings_change_is_pushed_then_accepted() {
    let harness = signed_in().await;
    let session = harness.flow.session();

    let mut changes = ProfileUpdateRequest::default();
    changes.theme_mode = Some("dark".into());
    let outcome = session.save_settings(changes).await.unwrap();

    assert_eq!(outcome, ReconcileOutcome::Accepted);
    assert_eq!(session.presentation().theme_mode, ThemeMode::Dark);
    assert_eq!(session.store().info().theme_mode.as_deref(), Some("dark"));

    let pushed = harness.api.updates();
    assert_eq!(pushed.len(), 1);
    assert_eq!(pushed[0].student_id, "s-1");
    assert_eq!(pushed[0].email_address, "a@b.com");
}

#[tokio::test]
async fn settings_change_requires_signed_in_student() {
    let api = FakeProfileApi::default();
    let session = Session::new(store(&api, &MemoryProfileCache::default()));

    let err = session.save_settings(ProfileUpdateRequest::default()).await.unwrap_err();

    assert!(matches!(err, AspireError::InvalidInput(_)));
    assert!(api.updates().is_empty());
}

#[tokio::test]
async fn logout_clears_profile_and_presentation() {
    let harness = signed_in().await;
    let session = harness.flow.session();
    session.set_theme_mode(ThemeMode::Dark);

    session.logout().await;

    assert_eq!(harness.cache.stored(), None);
    assert!(session.store().info().is_empty());
    assert_eq!(session.presentation(), PresentationState::default());
}

#[tokio::test]
async fn hydrate_restores_preferences_from_cache() {
    let mut record = profile("s-1", "a@b.com", "tz1");
    record.theme_mode = Some("dark".into());
    let api = FakeProfileApi::default().with_record(record.clone());
    let cache = MemoryProfileCache::default().with_record(record);
    let session = Arc::new(Session::new(store(&api, &cache)));

    let outcome = session.hydrate().await.unwrap();

    assert_eq!(outcome, Some(ReconcileOutcome::Accepted));
    assert_eq!(session.presentation().theme_mode, ThemeMode::Dark);
}
