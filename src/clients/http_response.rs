//! Incoming response snapshot.
//!
//! This module provides the [`ZboziApiResponse`] value object holding the
//! status code and the decoded JSON body of one API response.

/// A decoded JSON object.
pub type JsonObject = serde_json::Map<String, serde_json::Value>;

/// A response from the Zboží API.
///
/// The body is only decoded for status codes whose first digit is `2` or `4`.
/// For every other status code, and whenever the body was ignored, `body()`
/// returns `None`.
///
/// # Example
///
/// ```rust
/// use zbozi_api::clients::ZboziApiResponse;
/// use serde_json::json;
///
/// let body = json!({"expectedDeliveryDate": "2012-01-01"});
/// let response = ZboziApiResponse::new(200, body.as_object().cloned());
///
/// assert!(response.is_success());
/// assert_eq!(response.get("expectedDeliveryDate"), Some(&json!("2012-01-01")));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ZboziApiResponse {
    status_code: u16,
    body: Option<JsonObject>,
}

impl ZboziApiResponse {
    /// Creates a new response snapshot.
    #[must_use]
    pub const fn new(status_code: u16, body: Option<JsonObject>) -> Self {
        Self { status_code, body }
    }

    /// Creates a response snapshot without a body.
    #[must_use]
    pub const fn without_body(status_code: u16) -> Self {
        Self::new(status_code, None)
    }

    /// Returns the HTTP status code.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        self.status_code
    }

    /// Returns the decoded body, if any.
    #[must_use]
    pub const fn body(&self) -> Option<&JsonObject> {
        self.body.as_ref()
    }

    /// Returns the value stored under `key` in the body.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.body.as_ref().and_then(|body| body.get(key))
    }

    /// Returns the first digit of the status code.
    #[must_use]
    pub const fn status_class(&self) -> u16 {
        status_class(self.status_code)
    }

    /// Returns `true` if the status code is in the 2xx range.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status_class() == 2
    }

    /// Returns `true` if the status code is in the 4xx range.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        self.status_class() == 4
    }
}

/// Returns the first digit of a three-digit HTTP status code.
pub(crate) const fn status_class(status_code: u16) -> u16 {
    status_code / 100
}

/// Returns `true` if a response with this status code carries a JSON body.
pub(crate) const fn has_json_body(status_code: u16) -> bool {
    matches!(status_class(status_code), 2 | 4)
}
