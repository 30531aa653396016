//! API utilities for talking to the listing endpoint
//!
//! Provides helpers for constructing request URLs.

/// Get the origin of the current page
///
/// # Returns
/// - Origin like "http://localhost:8080" or "https://example.com"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    window.location().origin().unwrap_or_default()
}

/// Build a full API URL from an endpoint and query pairs
///
/// Relative endpoints are resolved against [`api_base`]; absolute ones are
/// used as is. Values are percent-encoded.
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/wp-json/wp/v2/resource", &[("per_page", "100".into())]);
/// ```
pub fn api_url(endpoint: &str, query: &[(&str, String)]) -> String {
    let base = if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
        String::new()
    } else {
        api_base()
    };
    format!("{}{}", base, with_query(endpoint, query))
}

/// Appends query pairs to a path that may already carry a query string
pub fn with_query(path: &str, query: &[(&str, String)]) -> String {
    if query.is_empty() {
        return path.to_string();
    }
    let pairs = query
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&");
    let separator = if path.contains('?') { '&' } else { '?' };
    format!("{}{}{}", path, separator, pairs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_query() {
        assert_eq!(
            with_query("/wp-json/wp/v2/resource", &[("per_page", "100".to_string())]),
            "/wp-json/wp/v2/resource?per_page=100"
        );
        assert_eq!(
            with_query("/index.php?rest_route=/wp/v2/resource", &[("per_page", "50".to_string())]),
            "/index.php?rest_route=/wp/v2/resource&per_page=50"
        );
        assert_eq!(with_query("/api", &[]), "/api");
    }

    #[test]
    fn test_absolute_endpoint_is_kept() {
        assert_eq!(
            api_url("https://cms.example.com/wp-json/wp/v2/resource", &[("per_page", "12".to_string())]),
            "https://cms.example.com/wp-json/wp/v2/resource?per_page=12"
        );
    }
}
