use serde::{Deserialize, Serialize};

/// Request body for the dashboard-info endpoint.
///
/// The backend keys everything off the opaque `user` identifier supplied
/// by the route; the client never interprets it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardInfoRequest {
    pub user: String,
}

/// Decoded payload from `POST /api/getdashboardinfo`.
///
/// `name` and `subject` are optional on the wire: a backend-reported
/// failure (`success: false`) typically omits both. Unknown fields are
/// ignored so the backend can grow the payload without breaking clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardInfo {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
}

/// Profile view state owned by the dashboard page.
///
/// Written at most once per effective mount; `None` fields render as an
/// explicit placeholder, never as a stringified absent value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileInfo {
    pub name: Option<String>,
    pub subject: Option<String>,
}

impl From<DashboardInfo> for ProfileInfo {
    fn from(info: DashboardInfo) -> Self {
        Self {
            name: info.name,
            subject: info.subject,
        }
    }
}

/// Static assessment figures shown on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssessmentScores {
    pub initial: u32,
    pub current: u32,
    pub target: u32,
}

/// One labelled sample of the monthly progress series.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendPoint {
    pub label: String,
    /// Assessment score for the period.
    pub score: f64,
    /// Practice effort for the period.
    pub effort: f64,
    /// Projected score for the period.
    pub projected: f64,
}

impl TrendPoint {
    pub fn new(label: impl Into<String>, score: f64, effort: f64, projected: f64) -> Self {
        Self {
            label: label.into(),
            score,
            effort,
            projected,
        }
    }
}
