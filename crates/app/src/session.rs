use dioxus::prelude::*;

use crate::routes::Route;

/// Local-storage key written by the enrollment/login flow. This app only
/// ever reads it.
const SESSION_MARKER_KEY: &str = "studia_session";

/// Read the raw session marker from browser local storage.
///
/// An eval failure (no document, storage unavailable) reads as no marker.
pub async fn read_marker() -> Option<String> {
    let script = format!("return localStorage.getItem({SESSION_MARKER_KEY:?});");
    match document::eval(&script).await {
        Ok(value) => value.as_str().map(str::to_string),
        Err(_) => None,
    }
}

/// Presence decision over the raw stored value. Empty strings count as
/// absent so a cleared-but-not-removed key still redirects.
pub fn marker_present(marker: Option<&str>) -> bool {
    marker.is_some_and(|m| !m.is_empty())
}

/// Mount-time session check.
///
/// Returns `None` until the storage read resolves, then `Some(present)`.
/// When the marker is absent the hook navigates to the landing route; the
/// dashboard loader treats anything but `Some(true)` as "do not fetch".
pub fn use_session_guard() -> Signal<Option<bool>> {
    let mut confirmed = use_signal(|| None);

    use_future(move || async move {
        let present = marker_present(read_marker().await.as_deref());
        if !present {
            tracing::info!("no session marker, redirecting to landing");
            navigator().push(Route::Landing {});
        }
        confirmed.set(Some(present));
    });

    confirmed
}
