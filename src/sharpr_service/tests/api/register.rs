use fake::{
    Fake,
    faker::{internet::en::SafeEmail, name::en::Name},
};
use serde_json::json;
use sharpr_core::{DocumentStore, Role, UserId};

use crate::helpers::{TestApp, error_message, session_token};

#[tokio::test]
async fn should_return_404_when_registration_is_disabled() {
    let app = TestApp::new().await;

    let response = app
        .register(&json!({
            "name": "Ada",
            "email": "ada@sharpr.org",
            "password": "secret123"
        }))
        .await;

    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn should_return_404_for_unparseable_body_when_disabled() {
    let app = TestApp::new().await;

    let response = app.register(&json!({ "name": "Ada" })).await;

    assert_eq!(response.status().as_u16(), 404);
    assert_eq!(error_message(response).await, "Not found");
}

#[tokio::test]
async fn should_return_json_error_for_missing_fields() {
    let app = TestApp::with_registration().await;

    let response = app.register(&json!({ "name": "Ada" })).await;

    assert_eq!(response.status().as_u16(), 400);
    assert_eq!(
        error_message(response).await,
        "Request body is not valid JSON for this form"
    );
}

#[tokio::test]
async fn should_return_201_and_allow_parent_login() {
    let app = TestApp::with_registration().await;
    let name: String = Name().fake();
    let email: String = SafeEmail().fake();

    let response = app
        .register(&json!({ "name": name, "email": email, "password": "secret123" }))
        .await;
    assert_eq!(response.status().as_u16(), 201);

    let body: serde_json::Value = response.json().await.unwrap();
    let user_id = UserId::new(body["userId"].as_str().unwrap());
    let record = app.document_store.get_user(&user_id).await.unwrap();
    assert_eq!(record.role(), &Role::Parent);
    assert_eq!(record.name(), name.trim());

    let response = app
        .login_parent(&json!({ "email": email, "password": "secret123" }))
        .await;
    assert_eq!(response.status().as_u16(), 200);
    assert!(session_token(&response).is_some());
}

#[tokio::test]
async fn should_return_409_for_existing_account() {
    let app = TestApp::with_registration().await;
    let body = json!({ "name": "Ada", "email": "ada@sharpr.org", "password": "secret123" });

    assert_eq!(app.register(&body).await.status().as_u16(), 201);

    let response = app.register(&body).await;
    assert_eq!(response.status().as_u16(), 409);
    assert_eq!(
        error_message(response).await,
        "An account with this email already exists"
    );
}

#[tokio::test]
async fn should_return_400_for_invalid_fields() {
    let app = TestApp::with_registration().await;

    let test_cases = [
        (
            json!({ "name": "A", "email": "ada@sharpr.org", "password": "secret123" }),
            "Name must be at least 2 characters",
        ),
        (
            json!({ "name": "Ada", "email": "ada@sharpr", "password": "secret123" }),
            "Email is not a valid email address",
        ),
        (
            json!({ "email": "ada@sharpr.org", "password": "secret123" }),
            "Name is required",
        ),
    ];

    for (test_case, expected) in test_cases {
        let response = app.register(&test_case).await;
        assert_eq!(response.status().as_u16(), 400, "Failed for input: {test_case}");
        assert_eq!(error_message(response).await, expected);
    }
}
