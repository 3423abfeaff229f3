//! Compile-time configuration of the frontend.

/// Base URL for static assets
/// - For local development: "/"
/// - For the mock demo build: "/post_viewer/"
#[cfg(not(feature = "mock"))]
pub const BASE_URL: &str = "/";

#[cfg(feature = "mock")]
pub const BASE_URL: &str = "/post_viewer/";

/// REST API root. Set `POST_VIEWER_API_BASE` at build time for production.
#[cfg(not(feature = "mock"))]
pub const API_BASE: &str = match option_env!("POST_VIEWER_API_BASE") {
    Some(url) => url,
    None => "http://localhost:3000/api",
};

/// `localStorage` key holding the persisted auth token.
pub const TOKEN_STORAGE_KEY: &str = "token";

/// Bundled avatar shown when an author's image is missing or broken.
pub const DEFAULT_AVATAR: &str = "static/avatar.svg";

/// Helper function to construct asset paths
pub fn asset_path(path: &str) -> String {
    // Remove leading slash if present
    let path = path.strip_prefix('/').unwrap_or(path);
    format!("{}{}", BASE_URL, path)
}
