use serde_json::json;

use crate::helpers::{TestApp, error_message};

#[tokio::test]
async fn should_forward_valid_enquiry_to_inbox() {
    let app = TestApp::new().await;

    let response = app
        .contact(&json!({
            "name": "Grace",
            "email": "grace@example.com",
            "message": "Do you run weekend sessions?"
        }))
        .await;

    assert_eq!(response.status().as_u16(), 200);

    let sent = app.email_client.sent.lock().await;
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].recipient, "hello@sharpr.org");
    assert_eq!(sent[0].subject, "New enquiry from Grace");
    assert!(sent[0].content.contains("grace@example.com"));
}

#[tokio::test]
async fn should_return_every_field_error_at_once() {
    let app = TestApp::new().await;

    let response = app
        .contact(&json!({ "name": "G", "email": "grace", "message": "" }))
        .await;

    assert_eq!(response.status().as_u16(), 400);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["fields"]["name"], "Name must be at least 2 characters");
    assert_eq!(body["fields"]["email"], "Email is not a valid email address");
    assert_eq!(body["fields"]["message"], "Message is required");
    assert!(app.email_client.sent.lock().await.is_empty());
}

#[tokio::test]
async fn should_report_only_failing_fields() {
    let app = TestApp::new().await;

    let response = app
        .contact(&json!({
            "name": "Grace",
            "email": "grace@example.com",
            "message": "Too short"
        }))
        .await;

    assert_eq!(response.status().as_u16(), 400);

    let body: serde_json::Value = response.json().await.unwrap();
    let fields = body["fields"].as_object().unwrap();
    assert_eq!(fields.len(), 1);
    assert_eq!(fields["message"], "Message must be at least 10 characters");
}

#[tokio::test]
async fn should_return_json_error_for_wrong_field_types() {
    let app = TestApp::new().await;

    let response = app
        .contact(&json!({ "name": ["Grace"], "email": 7, "message": null }))
        .await;

    assert_eq!(response.status().as_u16(), 400);
    assert_eq!(
        error_message(response).await,
        "Request body is not valid JSON for this form"
    );
    assert!(app.email_client.sent.lock().await.is_empty());
}
