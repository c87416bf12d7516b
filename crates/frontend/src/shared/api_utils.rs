//! API utilities for frontend-backend communication
//!
//! The import form is served by the same origin that accepts the upload,
//! so endpoints are kept relative unless configured as absolute URLs.

use wasm_bindgen::{JsCast, JsValue};

/// Endpoint used when nothing else is configured
pub const DEFAULT_IMPORT_ENDPOINT: &str = "/import";

/// Normalize a configured endpoint into a request URL
///
/// # Example
/// ```rust
/// use frontend::shared::api_utils::api_url;
///
/// assert_eq!(api_url("import"), "/import");
/// assert_eq!(api_url("https://assets.example.com/import"), "https://assets.example.com/import");
/// ```
pub fn api_url(endpoint: &str) -> String {
    let endpoint = endpoint.trim();
    if endpoint.is_empty() {
        return DEFAULT_IMPORT_ENDPOINT.to_string();
    }
    if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
        return endpoint.to_string();
    }
    if endpoint.starts_with('/') {
        endpoint.to_string()
    } else {
        format!("/{}", endpoint)
    }
}

/// Human readable text of a `JsValue` thrown by a browser API
pub fn js_error_message(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_url_relative() {
        assert_eq!(api_url("/import"), "/import");
        assert_eq!(api_url("2281/pr3import"), "/2281/pr3import");
        assert_eq!(api_url("  /import  "), "/import");
    }

    #[test]
    fn test_api_url_absolute() {
        assert_eq!(
            api_url("http://localhost:8080/import"),
            "http://localhost:8080/import"
        );
    }

    #[test]
    fn test_api_url_empty_falls_back() {
        assert_eq!(api_url(""), DEFAULT_IMPORT_ENDPOINT);
        assert_eq!(api_url("   "), DEFAULT_IMPORT_ENDPOINT);
    }
}
