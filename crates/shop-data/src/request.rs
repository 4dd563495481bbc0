//! HTTP request builder.

use std::collections::HashMap;

/// A GET request under construction.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    pub(crate) url: String,
    pub(crate) headers: HashMap<String, String>,
}

impl RequestBuilder {
    /// Create a GET request for `url`.
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            headers: HashMap::new(),
        }
    }

    fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Set the Accept header.
    pub fn accept(self, content_type: impl Into<String>) -> Self {
        self.header("Accept", content_type)
    }

    /// Get the target URL.
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accept_header() {
        let builder = RequestBuilder::get("https://example.com").accept("application/json");
        assert_eq!(builder.url(), "https://example.com");
        assert_eq!(
            builder.headers.get("Accept").map(String::as_str),
            Some("application/json")
        );
    }

    #[test]
    fn test_accept_replaces_previous_value() {
        let builder = RequestBuilder::get("https://example.com")
            .accept("text/html")
            .accept("application/json");
        assert_eq!(builder.headers.len(), 1);
        assert_eq!(builder.headers["Accept"], "application/json");
    }
}
