//! Outgoing request snapshot.
//!
//! This module provides the [`ZboziApiRequest`] value object describing one
//! request sent to the Zboží API, as handed to the logging observer.

use std::collections::HashMap;
use std::fmt;

/// HTTP methods used by the Zboží API.
///
/// Every endpoint of the API is a `POST`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum HttpMethod {
    /// HTTP POST method.
    Post,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Post => f.write_str("POST"),
        }
    }
}

/// An immutable snapshot of one request sent to the Zboží API.
///
/// The transport builds this snapshot first and derives the wire request from
/// it, so the snapshot shows exactly what was sent.
///
/// # Example
///
/// ```rust
/// use std::collections::HashMap;
/// use zbozi_api::clients::{HttpMethod, ZboziApiRequest};
/// use serde_json::json;
///
/// let mut headers = HashMap::new();
/// headers.insert("X-PartnerToken".to_string(), vec!["token".to_string()]);
///
/// let request = ZboziApiRequest::new(
///     HttpMethod::Post,
///     "https://www.slevomat.cz/zbozi-api/v1/order/42/mark-en-route",
///     headers,
///     Some(json!({"autoMarkDelivered": true})),
/// );
///
/// assert_eq!(request.header("X-PartnerToken"), Some("token"));
/// assert_eq!(request.header("x-partnertoken"), None);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ZboziApiRequest {
    method: HttpMethod,
    url: String,
    headers: HashMap<String, Vec<String>>,
    body: Option<serde_json::Value>,
}

impl ZboziApiRequest {
    /// Creates a new request snapshot.
    #[must_use]
    pub fn new(
        method: HttpMethod,
        url: impl Into<String>,
        headers: HashMap<String, Vec<String>>,
        body: Option<serde_json::Value>,
    ) -> Self {
        Self {
            method,
            url: url.into(),
            headers,
            body,
        }
    }

    /// Returns the HTTP method.
    #[must_use]
    pub const fn method(&self) -> HttpMethod {
        self.method
    }

    /// Returns the full target URL.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Returns all headers. A header may carry multiple values.
    #[must_use]
    pub const fn headers(&self) -> &HashMap<String, Vec<String>> {
        &self.headers
    }

    /// Returns the first value of a header.
    ///
    /// The lookup is an exact, case-sensitive match on the header name.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(name)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the JSON body, if one was sent.
    #[must_use]
    pub const fn body(&self) -> Option<&serde_json::Value> {
        self.body.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn headers(pairs: &[(&str, &[&str])]) -> HashMap<String, Vec<String>> {
        pairs
            .iter()
            .map(|(name, values)| {
                (
                    (*name).to_string(),
                    values.iter().map(|v| (*v).to_string()).collect(),
                )
            })
            .collect()
    }

    #[test]
    fn test_http_method_display() {
        assert_eq!(HttpMethod::Post.to_string(), "POST");
    }

    #[test]
    fn test_header_returns_first_value() {
        let request = ZboziApiRequest::new(
            HttpMethod::Post,
            "https://example.com",
            headers(&[("Accept", &["application/json", "text/plain"])]),
            None,
        );

        assert_eq!(request.header("Accept"), Some("application/json"));
    }

    #[test]
    fn test_header_lookup_is_case_sensitive() {
        let request = ZboziApiRequest::new(
            HttpMethod::Post,
            "https://example.com",
            headers(&[("X-ApiSecret", &["secret"])]),
            None,
        );

        assert_eq!(request.header("X-ApiSecret"), Some("secret"));
        assert_eq!(request.header("x-apisecret"), None);
        assert_eq!(request.header("X-Missing"), None);
    }

    #[test]
    fn test_header_with_no_values() {
        let request = ZboziApiRequest::new(
            HttpMethod::Post,
            "https://example.com",
            headers(&[("X-Empty", &[])]),
            None,
        );

        assert_eq!(request.header("X-Empty"), None);
    }

    #[test]
    fn test_accessors() {
        let request = ZboziApiRequest::new(
            HttpMethod::Post,
            "https://example.com/order/1/mark-delivered",
            HashMap::new(),
            Some(json!({"note": null})),
        );

        assert_eq!(request.method(), HttpMethod::Post);
        assert_eq!(request.url(), "https://example.com/order/1/mark-delivered");
        assert!(request.headers().is_empty());
        assert_eq!(request.body(), Some(&json!({"note": null})));
    }
}
