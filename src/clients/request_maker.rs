//! Transport layer for Zboží API communication.
//!
//! This module provides the [`RequestMaker`] type, which sends authenticated
//! requests, classifies transport failures and decodes response bodies.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use crate::clients::errors::{ConnectionError, ResponseError, ZboziApiError};
use crate::clients::http_request::{HttpMethod, ZboziApiRequest};
use crate::clients::http_response::{has_json_body, JsonObject, ZboziApiResponse};
use crate::config::ZboziConfig;
use crate::error::{ConfigError, TypeValidationError};

/// Crate version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Header carrying the partner token.
pub const HEADER_PARTNER_TOKEN: &str = "X-PartnerToken";
/// Header carrying the API secret.
pub const HEADER_API_SECRET: &str = "X-ApiSecret";
/// User agent header.
pub const HEADER_USER_AGENT: &str = "User-Agent";

const HEADER_CONTENT_TYPE: &str = "Content-Type";

/// Observer invoked with every outgoing request and its response.
///
/// The response is `None` when no HTTP response was obtained. On the
/// invalid-JSON path the observer receives the response without its body.
/// The observer runs inline on the calling thread.
pub type ZboziApiLogger = Arc<dyn Fn(&ZboziApiRequest, Option<&ZboziApiResponse>) + Send + Sync>;

/// Sends requests to the Zboží API.
///
/// The request maker handles:
/// - Authentication headers and the `User-Agent`
/// - Timeout, TLS verification, redirect and content decoding settings
/// - Classifying transport failures versus obtained responses
/// - Decoding JSON bodies of 2xx/4xx responses
/// - Invoking the logging observer exactly once per call
///
/// Calls block the current thread until the response arrives or the timeout
/// elapses. Nothing is retried.
///
/// # Example
///
/// ```rust,no_run
/// use zbozi_api::{ZboziConfig, PartnerToken, ApiSecret, ApiUrl};
/// use zbozi_api::clients::RequestMaker;
///
/// let config = ZboziConfig::builder()
///     .partner_token(PartnerToken::new("token").unwrap())
///     .api_secret(ApiSecret::new("secret").unwrap())
///     .api_url(ApiUrl::sandbox())
///     .build()
///     .unwrap();
///
/// let request_maker = RequestMaker::new(&config).unwrap();
/// let response = request_maker
///     .send_post_request("https://www.slevomat.cz/zbozi-api/v1-test/order/1/mark-pending", None)
///     .unwrap();
/// println!("{}", response.status_code());
/// ```
pub struct RequestMaker {
    client: reqwest::blocking::Client,
    default_headers: HashMap<String, Vec<String>>,
    logger: Option<ZboziApiLogger>,
}

// Verify RequestMaker is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RequestMaker>();
};

impl RequestMaker {
    /// Creates a new request maker from the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::HttpClient`] if the underlying HTTP client
    /// cannot be created (e.g., TLS initialization failure).
    pub fn new(config: &ZboziConfig) -> Result<Self, ConfigError> {
        let timeout = match config.timeout_in_seconds() {
            0 => None,
            seconds => Some(Duration::from_secs(seconds)),
        };

        let client = reqwest::blocking::Client::builder()
            .use_rustls_tls()
            .danger_accept_invalid_certs(false)
            .redirect(reqwest::redirect::Policy::none())
            .gzip(true)
            .timeout(timeout)
            .build()
            .map_err(|error| ConfigError::HttpClient {
                reason: error.to_string(),
            })?;

        let mut default_headers = HashMap::new();
        default_headers.insert(
            HEADER_PARTNER_TOKEN.to_string(),
            vec![config.partner_token().as_ref().to_string()],
        );
        default_headers.insert(
            HEADER_API_SECRET.to_string(),
            vec![config.api_secret().as_ref().to_string()],
        );
        default_headers.insert(
            HEADER_USER_AGENT.to_string(),
            vec![user_agent(config.user_agent_prefix())],
        );

        Ok(Self {
            client,
            default_headers,
            logger: config.logger().cloned(),
        })
    }

    /// Returns the headers attached to every request.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, Vec<String>> {
        &self.default_headers
    }

    /// Sends a `POST` request and returns the decoded response.
    ///
    /// The body is serialized to JSON when present and omitted otherwise.
    /// Responses with any status code are returned; interpreting the status
    /// is left to [`validate_response`](crate::clients::validate_response).
    ///
    /// # Errors
    ///
    /// Returns [`ZboziApiError`] if:
    /// - No HTTP response was obtained (`Connection`)
    /// - A 2xx/4xx body is not valid JSON (`Response`)
    /// - A 2xx/4xx body is valid JSON but not an object (`TypeValidation`)
    pub fn send_post_request(
        &self,
        url: &str,
        body: Option<serde_json::Value>,
    ) -> Result<ZboziApiResponse, ZboziApiError> {
        let request = self.build_request(url, body);

        tracing::debug!(url = %request.url(), "Sending request to Slevomat API");

        let mut req_builder = self.client.post(request.url());
        for (name, values) in request.headers() {
            for value in values {
                req_builder = req_builder.header(name.as_str(), value.as_str());
            }
        }
        if let Some(body) = request.body() {
            req_builder = req_builder.body(body.to_string());
        }

        // Redirects are disabled and error statuses are not turned into
        // errors, so every Err here means no response was obtained.
        let (status_code, body_text) = match req_builder
            .send()
            .and_then(|res| Ok((res.status().as_u16(), res.text()?)))
        {
            Ok(received) => received,
            Err(error) => {
                tracing::warn!(
                    url = %request.url(),
                    error = %error,
                    "Connection to Slevomat API failed"
                );
                self.log(&request, None);
                return Err(ConnectionError::new(error).into());
            }
        };

        tracing::debug!(url = %request.url(), status = status_code, "Received response from Slevomat API");

        match decode_response(status_code, &body_text) {
            Ok(response) => {
                self.log(&request, Some(&response));
                Ok(response)
            }
            Err(error) => {
                tracing::warn!(
                    url = %request.url(),
                    status = status_code,
                    error = %error,
                    "Slevomat API returned an undecodable body"
                );
                self.log(&request, Some(&ZboziApiResponse::without_body(status_code)));
                Err(error)
            }
        }
    }

    fn build_request(&self, url: &str, body: Option<serde_json::Value>) -> ZboziApiRequest {
        let mut headers = self.default_headers.clone();
        if body.is_some() {
            headers.insert(
                HEADER_CONTENT_TYPE.to_string(),
                vec!["application/json".to_string()],
            );
        }
        ZboziApiRequest::new(HttpMethod::Post, url, headers, body)
    }

    fn log(&self, request: &ZboziApiRequest, response: Option<&ZboziApiResponse>) {
        if let Some(logger) = &self.logger {
            logger(request, response);
        }
    }
}

impl std::fmt::Debug for RequestMaker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestMaker")
            .field("client", &self.client)
            .field("logger", &self.logger.is_some())
            .finish_non_exhaustive()
    }
}

/// Builds the `User-Agent` value, e.g. `SlevomatZboziApiClient/0.1.0 Rust 1.70`.
fn user_agent(prefix: Option<&str>) -> String {
    let prefix = prefix.map_or(String::new(), |prefix| format!("{prefix} | "));
    let rust_version = env!("CARGO_PKG_RUST_VERSION");
    format!("{prefix}SlevomatZboziApiClient/{SDK_VERSION} Rust {rust_version}")
}

/// Decodes a raw response into a [`ZboziApiResponse`].
///
/// Only 2xx and 4xx bodies are decoded. Empty text and JSON `null` yield no body.
fn decode_response(status_code: u16, body_text: &str) -> Result<ZboziApiResponse, ZboziApiError> {
    if !has_json_body(status_code) || body_text.trim().is_empty() {
        return Ok(ZboziApiResponse::without_body(status_code));
    }

    let value: serde_json::Value = serde_json::from_str(body_text)
        .map_err(|source| ResponseError::InvalidJson { source })?;

    let body: Option<JsonObject> = match value {
        serde_json::Value::Null => None,
        serde_json::Value::Object(object) => Some(object),
        other => {
            return Err(TypeValidationError::unexpected_json("Object", &other).into());
        }
    };

    Ok(ZboziApiResponse::new(status_code, body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ApiSecret, ApiUrl, PartnerToken};
    use serde_json::json;

    fn create_test_config() -> ZboziConfig {
        ZboziConfig::builder()
            .partner_token(PartnerToken::new("sfdsfsdfwerwers").unwrap())
            .api_secret(ApiSecret::new("qwrwerwerwerwewer").unwrap())
            .api_url(ApiUrl::sandbox())
            .build()
            .unwrap()
    }

    #[test]
    fn test_default_headers_carry_credentials() {
        let request_maker = RequestMaker::new(&create_test_config()).unwrap();
        let headers = request_maker.default_headers();

        assert_eq!(
            headers.get(HEADER_PARTNER_TOKEN),
            Some(&vec!["sfdsfsdfwerwers".to_string()])
        );
        assert_eq!(
            headers.get(HEADER_API_SECRET),
            Some(&vec!["qwrwerwerwerwewer".to_string()])
        );
    }

    #[test]
    fn test_user_agent_header_format() {
        let user_agent = user_agent(None);
        assert!(user_agent.starts_with("SlevomatZboziApiClient/"));
        assert!(user_agent.contains(SDK_VERSION));
        assert!(user_agent.contains("Rust"));
    }

    #[test]
    fn test_user_agent_with_prefix() {
        assert!(user_agent(Some("MyShop/2.0")).starts_with("MyShop/2.0 | SlevomatZboziApiClient/"));
    }

    #[test]
    fn test_build_request_adds_content_type_only_with_body() {
        let request_maker = RequestMaker::new(&create_test_config()).unwrap();

        let without_body = request_maker.build_request("https://example.com/a", None);
        assert_eq!(without_body.header(HEADER_CONTENT_TYPE), None);
        assert!(without_body.body().is_none());

        let with_body =
            request_maker.build_request("https://example.com/a", Some(json!({"autoMarkDelivered": true})));
        assert_eq!(with_body.header(HEADER_CONTENT_TYPE), Some("application/json"));
        assert_eq!(with_body.header(HEADER_PARTNER_TOKEN), Some("sfdsfsdfwerwers"));
        assert_eq!(with_body.method(), HttpMethod::Post);
    }

    #[test]
    fn test_decode_response_for_2xx_json() {
        let response = decode_response(200, r#"{"expectedDeliveryDate":"2012-01-01"}"#).unwrap();
        assert_eq!(response.status_code(), 200);
        assert_eq!(
            response.get("expectedDeliveryDate"),
            Some(&json!("2012-01-01"))
        );
    }

    #[test]
    fn test_decode_response_for_4xx_json() {
        let response =
            decode_response(404, r#"{"status":3,"messages":["OrderId #45445 not found."]}"#).unwrap();
        assert_eq!(response.get("status"), Some(&json!(3)));
    }

    #[test]
    fn test_decode_response_ignores_body_for_other_status_classes() {
        let response = decode_response(500, "<html>Server error</html>").unwrap();
        assert_eq!(response.status_code(), 500);
        assert!(response.body().is_none());

        let response = decode_response(302, r#"{"valid":"json"}"#).unwrap();
        assert!(response.body().is_none());
    }

    #[test]
    fn test_decode_response_empty_and_null_bodies() {
        assert!(decode_response(204, "").unwrap().body().is_none());
        assert!(decode_response(200, "  \n").unwrap().body().is_none());
        assert!(decode_response(200, "null").unwrap().body().is_none());
    }

    #[test]
    fn test_decode_response_rejects_invalid_json() {
        let error = decode_response(200, r#"{"someData":xxx}"#).unwrap_err();
        assert!(matches!(
            error,
            ZboziApiError::Response(ResponseError::InvalidJson { .. })
        ));
        assert!(error.to_string().contains("invalid JSON data"));
    }

    #[test]
    fn test_decode_response_rejects_non_object_json() {
        let error = decode_response(200, "[1, 2, 3]").unwrap_err();
        assert!(matches!(
            error,
            ZboziApiError::TypeValidation(TypeValidationError::UnexpectedType {
                expected: "Object",
                given: "array"
            })
        ));
    }

    #[test]
    fn test_request_maker_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RequestMaker>();
    }
}
