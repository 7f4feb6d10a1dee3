//! API utilities for frontend-backend communication
//!
//! The employee backend lives at a fixed local address. It can only be
//! changed at build time through the `EMPLOYEE_API_BASE` environment variable.

/// Address used when `EMPLOYEE_API_BASE` is not set at build time
pub const DEFAULT_API_BASE: &str = "http://localhost:3001";

/// Get the base URL for API requests, without a trailing slash
pub fn api_base() -> String {
    option_env!("EMPLOYEE_API_BASE")
        .unwrap_or(DEFAULT_API_BASE)
        .trim_end_matches('/')
        .to_string()
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust
/// # use frontend::shared::api_utils::api_url;
/// let url = api_url("/employees");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// URL of a single employee, with the id percent-encoded
pub fn employee_url(id: &str) -> String {
    api_url(&format!("/employees/{}", urlencoding::encode(id)))
}
