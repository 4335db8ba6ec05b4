mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::TestApp;
use ticker_portfolio::db;

#[tokio::test]
async fn settings_returns_profile_without_password() {
    let app = TestApp::new().await;
    let token = app.register("profile@example.com").await;

    let (status, body) = app.get("/settings/", Some(&token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["username"], "profile@example.com");
    assert_eq!(body["email"], "profile@example.com");
    assert!(body["id"].as_i64().is_some());
    assert!(body.get("password").is_none());
}

#[tokio::test]
async fn deleting_account_cascades_and_invalidates_token() {
    let app = TestApp::new().await;
    let token = app.register("gone@example.com").await;

    let (_, settings) = app.get("/settings/", Some(&token)).await;
    let user_id = settings["id"].as_i64().unwrap();

    for ticker in ["PETR4", "VALE3"] {
        app.post(
            "/manager/create/",
            Some(&token),
            Some(json!({ "ticker": ticker, "quantity": 10, "average_price": 20.0 })),
        )
        .await;
    }
    assert_eq!(db::asset_queries::count_for_user(&app.pool, user_id).await.unwrap(), 2);

    let (status, body) = app.post("/settings/delete/", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["deleted"], true);
    assert!(body["message"].is_string());

    assert_eq!(db::asset_queries::count_for_user(&app.pool, user_id).await.unwrap(), 0);

    let (status, _) = app.get("/manager/", Some(&token)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    let (status, _) = app.post("/settings/delete/", Some(&token), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn other_accounts_survive_deletion() {
    let app = TestApp::new().await;
    let leaving = app.register("leaving@example.com").await;
    let staying = app.register("staying@example.com").await;

    app.post(
        "/manager/create/",
        Some(&staying),
        Some(json!({ "ticker": "ITUB4", "quantity": 1, "average_price": 25.0 })),
    )
    .await;

    let (status, _) = app.post("/settings/delete/", Some(&leaving), None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = app.get("/manager/", Some(&staying)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);
}
