use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::post;
use axum::Router;
use serde_json::Value;

/// Shared state of one mock backend instance.
#[derive(Clone)]
struct MockState {
    hits: Arc<AtomicUsize>,
    last_body: Arc<Mutex<Option<Value>>>,
    last_content_type: Arc<Mutex<Option<String>>>,
    response_status: StatusCode,
    response_body: String,
}

/// A mock dashboard backend bound to an OS-assigned port.
///
/// Records every request so tests can assert on the wire contract: the
/// request count, the JSON body, and the content type.
pub struct MockBackend {
    pub host: String,
    hits: Arc<AtomicUsize>,
    last_body: Arc<Mutex<Option<Value>>>,
    last_content_type: Arc<Mutex<Option<String>>>,
}

impl MockBackend {
    pub fn hit_count(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    pub fn last_body(&self) -> Option<Value> {
        self.last_body.lock().unwrap().clone()
    }

    pub fn last_content_type(&self) -> Option<String> {
        self.last_content_type.lock().unwrap().clone()
    }
}

/// Serve `POST /api/getdashboardinfo`, answering every request with the
/// given status and raw body.
pub async fn spawn_backend(status: StatusCode, body: impl Into<String>) -> MockBackend {
    let state = MockState {
        hits: Arc::new(AtomicUsize::new(0)),
        last_body: Arc::new(Mutex::new(None)),
        last_content_type: Arc::new(Mutex::new(None)),
        response_status: status,
        response_body: body.into(),
    };

    let router = Router::new()
        .route("/api/getdashboardinfo", post(dashboard_info))
        .with_state(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind mock backend");
    let addr = listener.local_addr().expect("mock backend addr");

    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve mock backend");
    });

    MockBackend {
        host: format!("http://{addr}"),
        hits: state.hits,
        last_body: state.last_body,
        last_content_type: state.last_content_type,
    }
}

async fn dashboard_info(
    State(state): State<MockState>,
    headers: HeaderMap,
    body: String,
) -> impl IntoResponse {
    state.hits.fetch_add(1, Ordering::SeqCst);
    *state.last_content_type.lock().unwrap() = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    *state.last_body.lock().unwrap() = serde_json::from_str(&body).ok();

    (state.response_status, state.response_body.clone())
}
