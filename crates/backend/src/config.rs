use std::sync::OnceLock;

static HOST: OnceLock<String> = OnceLock::new();

/// Base host of the dashboard backend, e.g. `https://api.studia.example`.
///
/// Injected at build time through the `STUDIA_BACKEND_HOST` environment
/// variable so deployments pick the host without a code change. Unset or
/// empty means same-origin relative URLs, which is what the hosted web
/// build wants.
pub fn backend_host() -> &'static str {
    HOST.get_or_init(|| normalize_host(option_env!("STUDIA_BACKEND_HOST").unwrap_or_default()))
}

/// Trim whitespace and any trailing slash so endpoint paths join cleanly.
pub(crate) fn normalize_host(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}
