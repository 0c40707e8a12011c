use shared_types::{AppError, DashboardInfo, DashboardInfoRequest};

use crate::config;

/// Path of the dashboard-info endpoint on the backend host.
const DASHBOARD_INFO_PATH: &str = "/api/getdashboardinfo";

/// HTTP client for the external dashboard backend.
///
/// The backend is an opaque service; this client owns the wire contract
/// (method, path, body shape) and the mapping of failures onto
/// [`AppError`]. On wasm targets reqwest rides on the browser fetch API,
/// so dropping an in-flight future aborts the request.
pub struct BackendClient {
    host: String,
    http: reqwest::Client,
}

impl BackendClient {
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: config::normalize_host(&host.into()),
            http: reqwest::Client::new(),
        }
    }

    /// Client pointed at the deployment-configured host.
    pub fn from_env() -> Self {
        Self::new(config::backend_host())
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.host, path)
    }

    /// Fetch a student's dashboard info: `POST /api/getdashboardinfo`
    /// with body `{"user": <user>}`.
    ///
    /// Exactly one request, no retries. A connection failure or non-2xx
    /// status maps to `Transport`; a 2xx body that fails to decode maps
    /// to `Decode`. A decoded payload with `success: false` is NOT an
    /// error here; the caller decides how to surface it.
    pub async fn get_dashboard_info(&self, user: &str) -> Result<DashboardInfo, AppError> {
        let url = self.endpoint(DASHBOARD_INFO_PATH);
        tracing::debug!(%url, user, "requesting dashboard info");

        let response = self
            .http
            .post(&url)
            .json(&DashboardInfoRequest {
                user: user.to_string(),
            })
            .send()
            .await
            .map_err(|e| AppError::transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%status, "dashboard info request rejected");
            return Err(AppError::transport(format!("backend returned {status}")));
        }

        response.json::<DashboardInfo>().await.map_err(|e| {
            if e.is_decode() {
                AppError::decode(e.to_string())
            } else {
                AppError::transport(e.to_string())
            }
        })
    }
}
