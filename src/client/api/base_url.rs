//! Base URL resolution for API calls.
//!
//! The resolver is a pure function over [`ExecutionContext`] so it behaves the same in
//! the browser, during server rendering and in tests. Only [`ExecutionContext::detect`]
//! touches the environment.

/// Base URL used when neither a browser origin nor a configured app URL is available.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Everything the base URL depends on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecutionContext {
    /// Origin of the page the client runs in, absent outside a browser.
    pub origin: Option<String>,
    /// Public app URL configured at build time through `APP_URL`.
    pub app_url: Option<String>,
}

impl ExecutionContext {
    /// Captures the context of the running client.
    pub fn detect() -> Self {
        Self {
            origin: browser_origin(),
            app_url: option_env!("APP_URL").map(str::to_string),
        }
    }
}

#[cfg(feature = "web")]
fn browser_origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}

#[cfg(not(feature = "web"))]
fn browser_origin() -> Option<String> {
    None
}

/// Picks the base URL API requests are sent to.
///
/// Preference order: a non-empty origin, then a non-empty app URL, then
/// [`DEFAULT_BASE_URL`]. Trailing slashes are removed so paths can be appended directly.
pub fn resolve_base_url(context: &ExecutionContext) -> String {
    non_empty(&context.origin)
        .or_else(|| non_empty(&context.app_url))
        .unwrap_or(DEFAULT_BASE_URL)
        .to_string()
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(|v| v.trim().trim_end_matches('/'))
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context(origin: Option<&str>, app_url: Option<&str>) -> ExecutionContext {
        ExecutionContext {
            origin: origin.map(str::to_string),
            app_url: app_url.map(str::to_string),
        }
    }

    #[test]
    fn prefers_origin() {
        let ctx = context(Some("https://tahfidz.example"), Some("https://app.example"));

        assert_eq!(resolve_base_url(&ctx), "https://tahfidz.example");
    }

    #[test]
    fn falls_back_to_app_url_without_origin() {
        let ctx = context(None, Some("https://app.example"));

        assert_eq!(resolve_base_url(&ctx), "https://app.example");
    }

    #[test]
    fn treats_empty_values_as_absent() {
        let ctx = context(Some(""), Some("  "));

        assert_eq!(resolve_base_url(&ctx), DEFAULT_BASE_URL);
    }

    #[test]
    fn falls_back_to_default() {
        assert_eq!(
            resolve_base_url(&ExecutionContext::default()),
            "http://localhost:8080"
        );
    }

    #[test]
    fn trims_trailing_slashes() {
        let ctx = context(None, Some("https://app.example/"));

        assert_eq!(resolve_base_url(&ctx), "https://app.example");
    }
}
