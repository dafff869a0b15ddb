//! API utilities for frontend-gateway communication
//!
//! Provides helper functions for constructing API URLs.

/// `trunk serve` port (see `[serve] port` in Trunk.toml).
pub const TRUNK_SERVE_PORT: &str = "3080";

/// Default gateway port, the one `trunk serve` pages talk to.
pub const DEV_GATEWAY_PORT: u16 = 3000;

/// Get the base URL for API requests
///
/// The gateway serves the built UI itself, so the API lives on the page's own
/// origin and relative URLs are enough, whatever `[server] port` is. Only a
/// page served by `trunk serve` points across to the gateway.
///
/// # Returns
/// - Empty string when the page comes from the gateway (or there is no window)
/// - API base URL like "http://localhost:3000" under `trunk serve`
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    let port = location.port().unwrap_or_default();
    select_base(&protocol, &hostname, &port)
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url(IndexDocument::endpoint());
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

fn select_base(protocol: &str, hostname: &str, page_port: &str) -> String {
    if page_port == TRUNK_SERVE_PORT {
        format!("{}//{}:{}", protocol, hostname, DEV_GATEWAY_PORT)
    } else {
        String::new()
    }
}
