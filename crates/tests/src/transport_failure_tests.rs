use axum::http::StatusCode;
use backend::BackendClient;
use pretty_assertions::assert_eq;
use shared_types::AppErrorKind;

use crate::common::spawn_backend;

#[tokio::test]
async fn http_500_is_a_transport_error_without_retry() {
    let mock = spawn_backend(StatusCode::INTERNAL_SERVER_ERROR, "").await;
    let client = BackendClient::new(mock.host.clone());

    let err = client.get_dashboard_info("alice").await.unwrap_err();

    assert!(err.is_transport());
    assert_eq!(mock.hit_count(), 1);
}

#[tokio::test]
async fn non_json_body_is_a_decode_error() {
    let mock = spawn_backend(StatusCode::OK, "<html>maintenance</html>").await;
    let client = BackendClient::new(mock.host.clone());

    let err = client.get_dashboard_info("alice").await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Decode);
}

#[tokio::test]
async fn valid_json_with_wrong_shape_is_a_decode_error() {
    let mock = spawn_backend(StatusCode::OK, r#"{"name":"Alice"}"#).await;
    let client = BackendClient::new(mock.host.clone());

    let err = client.get_dashboard_info("alice").await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Decode);
}

#[tokio::test]
async fn connection_refused_is_a_transport_error() {
    // Bind then immediately drop a listener so the port is known-dead.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = BackendClient::new(format!("http://{addr}"));
    let err = client.get_dashboard_info("alice").await.unwrap_err();

    assert!(err.is_transport());
}
