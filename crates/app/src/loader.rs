use std::time::Duration;

use shared_types::{AppError, DashboardInfo, ProfileInfo};

/// Message shown when the dashboard payload cannot be used as-is.
pub const FETCH_FAILED_NOTICE: &str = "An error occurred while fetching data!";

/// How long the failure toast stays up before auto-dismissing.
pub const TOAST_AUTO_DISMISS: Duration = Duration::from_millis(2000);

/// What the dashboard should do with a finished fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    /// Write the profile. `notify` is set when the backend reported
    /// failure; the write still happens with whatever fields arrived.
    Apply { profile: ProfileInfo, notify: bool },
    /// Transport or decode failure: notify, keep the view pending.
    Discard,
}

/// Map the client result onto the single allowed state transition.
///
/// A decoded payload always applies (the backend owns the fields); only a
/// call with no usable payload at all is discarded. Both failure shapes
/// surface the same transient notice, and neither triggers a retry.
pub fn resolve(result: Result<DashboardInfo, AppError>) -> LoadOutcome {
    match result {
        Ok(info) => {
            let notify = !info.success;
            if notify {
                tracing::warn!("backend reported failure for dashboard info");
            }
            LoadOutcome::Apply {
                profile: ProfileInfo::from(info),
                notify,
            }
        }
        Err(err) => {
            tracing::warn!(%err, "dashboard info fetch failed");
            LoadOutcome::Discard
        }
    }
}
