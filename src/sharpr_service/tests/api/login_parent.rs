use serde_json::json;
use sharpr_core::Role;

use crate::helpers::{TestApp, error_message, session_token};

#[tokio::test]
async fn should_return_200_and_redirect_for_parent() {
    let app = TestApp::new().await;
    app.seed_user("ada@sharpr.org", "secret123", Role::Parent)
        .await;

    let response = app
        .login_parent(&json!({ "email": "ada@sharpr.org", "password": "secret123" }))
        .await;

    assert_eq!(response.status().as_u16(), 200);
    let token = session_token(&response).expect("No session cookie found");
    assert!(!token.is_empty());

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["role"], "parent");
    assert_eq!(body["redirect"], "/parent_dashboard");
    assert_eq!(body["noticeDelayMs"], 1500);
}

#[tokio::test]
async fn should_return_400_for_empty_fields() {
    let app = TestApp::new().await;

    let test_cases = [
        json!({ "email": "", "password": "secret123" }),
        json!({ "email": "   ", "password": "secret123" }),
        json!({ "email": "ada@sharpr.org", "password": "" }),
        json!({}),
    ];

    for test_case in test_cases {
        let response = app.login_parent(&test_case).await;
        assert_eq!(response.status().as_u16(), 400, "Failed for input: {test_case}");
        assert_eq!(
            error_message(response).await,
            "Please enter your email and password"
        );
    }
}

#[tokio::test]
async fn should_return_401_for_wrong_password_or_unknown_account() {
    let app = TestApp::new().await;
    app.seed_user("ada@sharpr.org", "secret123", Role::Parent)
        .await;

    let test_cases = [
        json!({ "email": "ada@sharpr.org", "password": "wrong-password" }),
        json!({ "email": "nobody@sharpr.org", "password": "secret123" }),
        json!({ "email": "not-an-email", "password": "secret123" }),
    ];

    for test_case in test_cases {
        let response = app.login_parent(&test_case).await;
        assert_eq!(response.status().as_u16(), 401, "Failed for input: {test_case}");
        assert!(session_token(&response).is_none());
        assert_eq!(error_message(response).await, "Invalid email or password");
    }
}

#[tokio::test]
async fn should_return_401_for_non_parent_roles() {
    let app = TestApp::new().await;
    app.seed_user("admin@sharpr.org", "secret123", Role::Admin)
        .await;
    app.seed_user("tutor@sharpr.org", "secret123", Role::Other("tutor".to_owned()))
        .await;

    for email in ["admin@sharpr.org", "tutor@sharpr.org"] {
        let response = app
            .login_parent(&json!({ "email": email, "password": "secret123" }))
            .await;
        assert_eq!(response.status().as_u16(), 401, "Failed for {email}");
        assert!(session_token(&response).is_none());
        assert_eq!(
            error_message(response).await,
            "This account is not authorized to sign in here"
        );
    }
}

#[tokio::test]
async fn should_return_401_when_record_is_missing() {
    use secrecy::Secret;
    use sharpr_core::{Credentials, IdentityProvider};

    let app = TestApp::new().await;
    let credentials = Credentials::new(
        Secret::new("orphan@sharpr.org".to_owned()),
        Secret::new("secret123".to_owned()),
    )
    .unwrap();
    app.identity_provider
        .create_account(&credentials)
        .await
        .unwrap();

    let response = app
        .login_parent(&json!({ "email": "orphan@sharpr.org", "password": "secret123" }))
        .await;

    assert_eq!(response.status().as_u16(), 401);
}

#[tokio::test]
async fn should_return_json_error_for_malformed_body() {
    let app = TestApp::new().await;

    let response = app
        .login_parent(&json!({ "email": 42, "password": ["secret123"] }))
        .await;

    assert_eq!(response.status().as_u16(), 400);
    assert_eq!(
        response
            .headers()
            .get("content-type")
            .and_then(|value| value.to_str().ok()),
        Some("application/json")
    );
    assert_eq!(
        error_message(response).await,
        "Request body is not valid JSON for this form"
    );
}
