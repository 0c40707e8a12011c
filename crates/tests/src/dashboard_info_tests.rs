use axum::http::StatusCode;
use backend::BackendClient;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common::spawn_backend;

const SUCCESS_BODY: &str = r#"{"success":true,"name":"Alice","subject":"Math"}"#;

#[tokio::test]
async fn posts_user_identity_as_json_body() {
    let mock = spawn_backend(StatusCode::OK, SUCCESS_BODY).await;
    let client = BackendClient::new(mock.host.clone());

    client
        .get_dashboard_info("alice")
        .await
        .expect("fetch should succeed");

    assert_eq!(mock.hit_count(), 1);
    assert_eq!(mock.last_body(), Some(json!({"user": "alice"})));
    assert_eq!(mock.last_content_type().as_deref(), Some("application/json"));
}

#[tokio::test]
async fn success_payload_maps_name_and_subject() {
    let mock = spawn_backend(StatusCode::OK, SUCCESS_BODY).await;
    let client = BackendClient::new(mock.host.clone());

    let info = client.get_dashboard_info("alice").await.unwrap();

    assert!(info.success);
    assert_eq!(info.name.as_deref(), Some("Alice"));
    assert_eq!(info.subject.as_deref(), Some("Math"));
}

#[tokio::test]
async fn reported_failure_decodes_with_absent_fields() {
    let mock = spawn_backend(StatusCode::OK, r#"{"success":false}"#).await;
    let client = BackendClient::new(mock.host.clone());

    let info = client.get_dashboard_info("alice").await.unwrap();

    // A backend-reported failure is still a decoded payload, not an error.
    assert!(!info.success);
    assert_eq!(info.name, None);
    assert_eq!(info.subject, None);
    assert_eq!(mock.hit_count(), 1);
}

#[tokio::test]
async fn each_call_is_exactly_one_request() {
    let mock = spawn_backend(StatusCode::OK, SUCCESS_BODY).await;
    let client = BackendClient::new(mock.host.clone());

    client.get_dashboard_info("alice").await.unwrap();
    assert_eq!(mock.hit_count(), 1);

    // A changed user identity performs exactly one new request.
    client.get_dashboard_info("bob").await.unwrap();
    assert_eq!(mock.hit_count(), 2);
    assert_eq!(mock.last_body(), Some(json!({"user": "bob"})));
}
