//! Command handlers driven through a fully wired context.

mod support;

use aspire_app::commands::{self, SettingsChange};
use aspire_app::AppContext;
use aspire_core::{LoginOutcome, ReconcileOutcome};
use aspire_domain::{AspireError, ProfileRecord, ThemeMode};
use serde_json::json;
use support::{config, seed_cache, student_json, student_record};
use tempfile::TempDir;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_student(main: &MockServer, student: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/student"))
        .and(query_param("studentID", "s-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "student": student })))
        .mount(main)
        .await;
}

#[tokio::test]
async fn context_opens_store_on_disk() {
    let main = MockServer::start().await;
    let hashing = MockServer::start().await;
    let dir = TempDir::new().unwrap();

    let ctx = AppContext::new(config(&main, &hashing, &dir)).unwrap();

    ctx.health_check().unwrap();
    assert!(dir.path().join("aspire.db").exists());
    assert_eq!(ctx.profiles().info(), ProfileRecord::default());
}

#[tokio::test]
async fn login_survives_a_restart() {
    let main = MockServer::start().await;
    let hashing = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/hash"))
        .respond_with(ResponseTemplate::new(200).set_body_string("h4sh"))
        .mount(&hashing)
        .await;
    Mock::given(method("POST"))
        .and(path("/validate/login"))
        .and(body_json(json!({ "email_address": "a@b.com", "password": "h4sh" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(student_json()))
        .expect(1)
        .mount(&main)
        .await;
    mount_student(&main, student_json()).await;
    let dir = TempDir::new().unwrap();

    let first = AppContext::new(config(&main, &hashing, &dir)).unwrap();
    let outcome = commands::login(&first, "a@b.com", "secret").await.unwrap();
    assert!(matches!(outcome, LoginOutcome::Authenticated(_)));
    drop(first);

    let second = AppContext::new(config(&main, &hashing, &dir)).unwrap();
    let view = commands::show_profile(&second).await.unwrap();

    assert_eq!(view.record, student_record());
    assert_eq!(view.reconciled, Some(ReconcileOutcome::Accepted));
}

#[tokio::test]
async fn show_without_cached_profile_makes_no_request() {
    let main = MockServer::start().await;
    let hashing = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let ctx = AppContext::new(config(&main, &hashing, &dir)).unwrap();

    let view = commands::show_profile(&ctx).await.unwrap();

    assert!(view.record.is_empty());
    assert_eq!(view.reconciled, None);
    assert!(main.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn show_falls_back_to_local_copy_when_server_fails() {
    let main = MockServer::start().await;
    let hashing = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/student"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&main)
        .await;
    let dir = TempDir::new().unwrap();
    let ctx = AppContext::new(config(&main, &hashing, &dir)).unwrap();
    seed_cache(&ctx, &student_record()).await;

    let view = commands::show_profile(&ctx).await.unwrap();

    assert_eq!(view.record, student_record());
    assert_eq!(view.reconciled, None);
}

#[tokio::test]
async fn settings_push_then_reconcile() {
    let main = MockServer::start().await;
    let hashing = MockServer::start().await;
    let mut updated = student_json();
    updated["theme_mode"] = json!("dark");
    mount_student(&main, updated).await;
    Mock::given(method("PUT"))
        .and(path("/students/update"))
        .and(body_json(json!({
            "student_id": "s-1",
            "email_address": "a@b.com",
            "theme_mode": "dark"
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&main)
        .await;
    let dir = TempDir::new().unwrap();
    let ctx = AppContext::new(config(&main, &hashing, &dir)).unwrap();
    seed_cache(&ctx, &student_record()).await;

    let change = SettingsChange { theme_mode: Some("dark".into()), ..SettingsChange::default() };
    let outcome = commands::update_settings(&ctx, change).await.unwrap();

    assert_eq!(outcome, ReconcileOutcome::Accepted);
    assert_eq!(ctx.session.presentation().theme_mode, ThemeMode::Dark);
    assert_eq!(ctx.profiles().info().theme_mode.as_deref(), Some("dark"));
}

#[tokio::test]
async fn settings_reject_unknown_theme_without_network() {
    let main = MockServer::start().await;
    let hashing = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let ctx = AppContext::new(config(&main, &hashing, &dir)).unwrap();
    seed_cache(&ctx, &student_record()).await;

    let change = SettingsChange { theme_mode: Some("neon".into()), ..SettingsChange::default() };
    let err = commands::update_settings(&ctx, change).await.unwrap_err();

    assert!(matches!(err, AspireError::InvalidInput(_)));
    assert!(main.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn settings_require_signed_in_student() {
    let main = MockServer::start().await;
    let hashing = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let ctx = AppContext::new(config(&main, &hashing, &dir)).unwrap();

    let change = SettingsChange { font_style: Some("Ubuntu".into()), ..SettingsChange::default() };
    let err = commands::update_settings(&ctx, change).await.unwrap_err();

    assert!(matches!(err, AspireError::InvalidInput(_)));
}

#[tokio::test]
async fn avatar_upload_records_new_url() {
    let main = MockServer::start().await;
    let hashing = MockServer::start().await;
    let mut updated = student_json();
    updated["profile_picture_url"] = json!("https://cdn.example/s_1.png");
    mount_student(&main, updated).await;
    Mock::given(method("PUT"))
        .and(path("/students/update/image"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "imageURL": "https://cdn.example/s_1.png" })),
        )
        .expect(1)
        .mount(&main)
        .await;
    Mock::given(method("PUT"))
        .and(path("/students/update"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&main)
        .await;
    let dir = TempDir::new().unwrap();
    let image = dir.path().join("me.PNG");
    std::fs::write(&image, b"\x89PNG").unwrap();
    let ctx = AppContext::new(config(&main, &hashing, &dir)).unwrap();
    seed_cache(&ctx, &student_record()).await;

    let url = commands::upload_avatar(&ctx, &image).await.unwrap();

    assert_eq!(url.as_deref(), Some("https://cdn.example/s_1.png"));
    assert_eq!(
        ctx.profiles().info().profile_picture_url.as_deref(),
        Some("https://cdn.example/s_1.png")
    );
}

#[tokio::test]
async fn logout_clears_durable_copy() {
    let main = MockServer::start().await;
    let hashing = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let ctx = AppContext::new(config(&main, &hashing, &dir)).unwrap();
    seed_cache(&ctx, &student_record()).await;

    commands::logout(&ctx).await.unwrap();

    assert_eq!(ctx.profiles().get_cached_info().await, None);
    assert!(ctx.storage.get("studentInfo").unwrap().is_none());
}
