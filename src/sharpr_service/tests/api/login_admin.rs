use std::time::Instant;

use serde_json::json;

use crate::helpers::{ADMIN_DELAY, ADMIN_EMAIL, ADMIN_PASSWORD, TestApp, error_message, session_token};

#[tokio::test]
async fn should_return_200_for_exact_admin_credentials() {
    let app = TestApp::new().await;

    let started = Instant::now();
    let response = app
        .login_admin(&json!({ "email": ADMIN_EMAIL, "password": ADMIN_PASSWORD }))
        .await;

    assert!(started.elapsed() >= ADMIN_DELAY);
    assert_eq!(response.status().as_u16(), 200);
    assert!(session_token(&response).is_some());

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["role"], "admin");
    assert_eq!(body["redirect"], "/admin_dashboard");
    assert_eq!(body["noticeDelayMs"], 0);
}

#[tokio::test]
async fn should_return_401_for_any_deviation() {
    let app = TestApp::new().await;

    let test_cases = [
        json!({ "email": "Admin@sharpr.org", "password": ADMIN_PASSWORD }),
        json!({ "email": ADMIN_EMAIL, "password": "Sharpr#2025" }),
        json!({ "email": ADMIN_EMAIL, "password": "" }),
        json!({ "email": "", "password": "" }),
    ];

    for test_case in test_cases {
        let started = Instant::now();
        let response = app.login_admin(&test_case).await;

        assert!(started.elapsed() >= ADMIN_DELAY, "Answered early for {test_case}");
        assert_eq!(response.status().as_u16(), 401, "Failed for input: {test_case}");
        assert!(session_token(&response).is_none());
        assert_eq!(error_message(response).await, "Invalid email or password");
    }
}

#[tokio::test]
async fn should_not_consult_parent_accounts() {
    let app = TestApp::new().await;
    app.seed_user(ADMIN_EMAIL, "parent-password", sharpr_core::Role::Admin)
        .await;

    let response = app
        .login_admin(&json!({ "email": ADMIN_EMAIL, "password": "parent-password" }))
        .await;

    assert_eq!(response.status().as_u16(), 401);
}
