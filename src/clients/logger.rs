//! A ready-made logging observer backed by `tracing`.
//!
//! The crate never installs a subscriber; events emitted here go wherever the
//! application routes `tracing` output.
//!
//! # Example
//!
//! ```rust
//! use zbozi_api::{ZboziConfig, PartnerToken, ApiSecret, ApiUrl};
//! use zbozi_api::clients::tracing_logger;
//!
//! let config = ZboziConfig::builder()
//!     .partner_token(PartnerToken::new("token").unwrap())
//!     .api_secret(ApiSecret::new("secret").unwrap())
//!     .api_url(ApiUrl::sandbox())
//!     .logger(tracing_logger())
//!     .build()
//!     .unwrap();
//! ```

use crate::clients::http_request::ZboziApiRequest;
use crate::clients::http_response::ZboziApiResponse;
use crate::clients::request_maker::{HEADER_API_SECRET, HEADER_PARTNER_TOKEN};

const MASK: &str = "*****";
const NONE: &str = "-";

/// Returns an observer emitting one `info` event per API call.
///
/// The event records the method, URL, partner token, request body and the
/// response (status code and body). The API secret is masked.
#[must_use]
pub fn tracing_logger() -> impl Fn(&ZboziApiRequest, Option<&ZboziApiResponse>) + Send + Sync + 'static
{
    |request: &ZboziApiRequest, response: Option<&ZboziApiResponse>| {
        tracing::info!(
            method = %request.method(),
            url = %request.url(),
            partner_token = request.header(HEADER_PARTNER_TOKEN).unwrap_or(NONE),
            api_secret = request.header(HEADER_API_SECRET).map_or(NONE, |_| MASK),
            request_body = %describe_request_body(request),
            response = %describe_response(response),
            "Slevomat API call"
        );
    }
}

fn describe_request_body(request: &ZboziApiRequest) -> String {
    request
        .body()
        .map_or_else(|| NONE.to_string(), ToString::to_string)
}

/// Renders a response as `<status> <body>`, or `-` when none was obtained.
fn describe_response(response: Option<&ZboziApiResponse>) -> String {
    match response {
        None => NONE.to_string(),
        Some(response) => match response.body() {
            Some(body) => format!(
                "{} {}",
                response.status_code(),
                serde_json::Value::Object(body.clone())
            ),
            None => response.status_code().to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::http_request::HttpMethod;
    use serde_json::json;
    use std::collections::HashMap;

    #[test]
    fn test_describe_response_without_response() {
        assert_eq!(describe_response(None), "-");
    }

    #[test]
    fn test_describe_response_with_and_without_body() {
        let body = json!({"status": 3});
        let with_body = ZboziApiResponse::new(404, body.as_object().cloned());
        assert_eq!(describe_response(Some(&with_body)), r#"404 {"status":3}"#);

        let without_body = ZboziApiResponse::without_body(500);
        assert_eq!(describe_response(Some(&without_body)), "500");
    }

    #[test]
    fn test_describe_request_body() {
        let request = ZboziApiRequest::new(HttpMethod::Post, "https://example.com", HashMap::new(), None);
        assert_eq!(describe_request_body(&request), "-");

        let request = ZboziApiRequest::new(
            HttpMethod::Post,
            "https://example.com",
            HashMap::new(),
            Some(json!({"autoMarkDelivered": false})),
        );
        assert_eq!(describe_request_body(&request), r#"{"autoMarkDelivered":false}"#);
    }

    #[test]
    fn test_tracing_logger_runs_without_subscriber() {
        let logger = tracing_logger();
        let request = ZboziApiRequest::new(HttpMethod::Post, "https://example.com", HashMap::new(), None);
        logger(&request, None);
        logger(&request, Some(&ZboziApiResponse::without_body(200)));
    }
}
