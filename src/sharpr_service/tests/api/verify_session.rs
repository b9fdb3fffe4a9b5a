use serde_json::json;
use sharpr_core::Role;

use crate::helpers::{ADMIN_EMAIL, ADMIN_PASSWORD, TestApp, session_token};

#[tokio::test]
async fn should_return_role_for_parent_session() {
    let app = TestApp::new().await;
    app.seed_user("ada@sharpr.org", "secret123", Role::Parent)
        .await;

    let response = app
        .login_parent(&json!({ "email": "ada@sharpr.org", "password": "secret123" }))
        .await;
    let token = session_token(&response).expect("No session cookie found");

    let response = app.verify_session(Some(&token)).await;
    assert_eq!(response.status().as_u16(), 200);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["role"], "parent");
}

#[tokio::test]
async fn should_return_role_for_admin_session() {
    let app = TestApp::new().await;

    let response = app
        .login_admin(&json!({ "email": ADMIN_EMAIL, "password": ADMIN_PASSWORD }))
        .await;
    let token = session_token(&response).expect("No session cookie found");

    let response = app.verify_session(Some(&token)).await;
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["role"], "admin");
}

#[tokio::test]
async fn should_return_401_without_valid_session() {
    let app = TestApp::new().await;

    assert_eq!(app.verify_session(None).await.status().as_u16(), 401);
    assert_eq!(
        app.verify_session(Some("not-a-jwt")).await.status().as_u16(),
        401
    );
}
