mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::TestApp;

#[tokio::test]
async fn register_returns_token_and_user() {
    let app = TestApp::new().await;

    let (status, body) = app
        .post(
            "/accounts/register/",
            None,
            Some(json!({ "email": "new@example.com", "password": "password123" })),
        )
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert!(body["token"].as_str().is_some_and(|t| !t.is_empty()));
    assert_eq!(body["user"]["email"], "new@example.com");
    assert!(body["user"]["id"].as_i64().is_some());
    assert!(body["user"].get("password").is_none());
}

#[tokio::test]
async fn duplicate_registration_is_rejected_and_first_token_still_works() {
    let app = TestApp::new().await;
    let token = app.register("dup@example.com").await;

    let (status, body) = app
        .post(
            "/accounts/register/",
            None,
            Some(json!({ "email": "dup@example.com", "password": "another123" })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].is_string());

    let (status, _) = app.get("/manager/", Some(&token)).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn register_validates_email_and_password() {
    let app = TestApp::new().await;

    let (status, _) = app
        .post(
            "/accounts/register/",
            None,
            Some(json!({ "email": "not-an-email", "password": "password123" })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app
        .post(
            "/accounts/register/",
            None,
            Some(json!({ "email": "short@example.com", "password": "123" })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = app
        .post("/accounts/register/", None, Some(json!({ "email": "x@example.com" })))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn login_succeeds_with_correct_credentials() {
    let app = TestApp::new().await;
    app.register("login@example.com").await;

    let (status, body) = app
        .post(
            "/accounts/login/",
            None,
            Some(json!({ "username": "login@example.com", "password": "password123" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    let token = body["token"].as_str().unwrap();
    assert_eq!(body["user"]["email"], "login@example.com");

    let (status, _) = app.get("/", Some(token)).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn login_failures_look_the_same() {
    let app = TestApp::new().await;
    app.register("real@example.com").await;

    let (wrong_status, wrong_body) = app
        .post(
            "/accounts/login/",
            None,
            Some(json!({ "username": "real@example.com", "password": "wrongpass" })),
        )
        .await;
    let (ghost_status, ghost_body) = app
        .post(
            "/accounts/login/",
            None,
            Some(json!({ "username": "ghost@example.com", "password": "wrongpass" })),
        )
        .await;

    assert_eq!(wrong_status, StatusCode::UNAUTHORIZED);
    assert_eq!(ghost_status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_body, ghost_body);
}

#[tokio::test]
async fn logout_requires_token() {
    let app = TestApp::new().await;
    let token = app.register("out@example.com").await;

    let (status, _) = app.post("/accounts/logout/", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, body) = app.post("/accounts/logout/", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn password_change_flow() {
    let app = TestApp::new().await;
    let token = app.register("pw@example.com").await;

    let (status, _) = app
        .post(
            "/accounts/password_change/",
            Some(&token),
            Some(json!({ "old_password": "wrong-old", "new_password": "newpass123" })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app
        .post(
            "/accounts/password_change/",
            Some(&token),
            Some(json!({ "old_password": "password123", "new_password": "newpass123" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = app
        .post(
            "/accounts/login/",
            None,
            Some(json!({ "username": "pw@example.com", "password": "password123" })),
        )
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = app
        .post(
            "/accounts/login/",
            None,
            Some(json!({ "username": "pw@example.com", "password": "newpass123" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn malformed_tokens_are_rejected() {
    let app = TestApp::new().await;

    let (status, body) = app.get("/manager/", Some("garbage")).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert!(body["message"].is_string());

    let (status, _) = app.get("/settings/", None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn health_is_public() {
    let app = TestApp::new().await;
    let (status, _) = app.get("/health", None).await;
    assert_eq!(status, StatusCode::OK);
}
