//! Compile-time deployment configuration.
///
/// When `PUBLIC_URL` is set at compile time (e.g., `/catalog` when hosted under
/// a subdirectory), generated URLs are prefixed accordingly. Local builds
/// without `PUBLIC_URL` fall back to root-anchored paths.
#[must_use]
pub fn asset_path(relative: &str) -> String {
    asset_path_with_base(relative, option_env!("PUBLIC_URL").unwrap_or(""))
}

/// Base path for the router.
///
/// Returns `None` when no base path is configured so the router falls back to root.
#[must_use]
pub fn router_base() -> Option<String> {
    router_base_with_base(option_env!("PUBLIC_URL").unwrap_or(""))
}

/// Origin prefix for API calls. Empty means same origin (`/api/...`).
#[must_use]
pub fn api_base() -> String {
    api_base_with_base(option_env!("CATALOG_API_BASE").unwrap_or(""))
}

fn asset_path_with_base(relative: &str, base: &str) -> String {
    // Absolute image URLs from the API pass through untouched.
    if relative.starts_with("http://") || relative.starts_with("https://") {
        return relative.to_string();
    }
    let base = base.trim_end_matches('/');
    let rel = relative.trim_start_matches('/');

    if base.is_empty() {
        format!("/{rel}")
    } else {
        format!("{base}/{rel}")
    }
}

fn router_base_with_base(base: &str) -> Option<String> {
    let base = base.trim_end_matches('/').trim();
    if base.is_empty() {
        None
    } else {
        Some(base.to_string())
    }
}

fn api_base_with_base(base: &str) -> String {
    base.trim().trim_end_matches('/').to_string()
}
