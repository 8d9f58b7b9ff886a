//! Request/response pipeline for the Zboží API.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`RequestMaker`]: The blocking transport sending authenticated requests
//! - [`ZboziApiRequest`]: A snapshot of one outgoing request
//! - [`ZboziApiResponse`]: A snapshot of one decoded response
//! - [`validate_response`] and [`expected_delivery_date`]: Response classification
//! - [`ZboziApiLogger`]: The observer invoked once per call
//! - [`ZboziApiError`]: The unified error returned by every call
//!
//! # Example
//!
//! ```rust,no_run
//! use zbozi_api::{ZboziConfig, PartnerToken, ApiSecret, ApiUrl};
//! use zbozi_api::clients::{validate_response, RequestMaker};
//!
//! let config = ZboziConfig::builder()
//!     .partner_token(PartnerToken::new("token").unwrap())
//!     .api_secret(ApiSecret::new("secret").unwrap())
//!     .api_url(ApiUrl::sandbox())
//!     .build()
//!     .unwrap();
//!
//! let request_maker = RequestMaker::new(&config).unwrap();
//! let url = format!("{}/order/7048475959/mark-delivered", config.api_url());
//! let response = request_maker.send_post_request(&url, None)?;
//! validate_response(&response)?;
//! # Ok::<(), zbozi_api::ZboziApiError>(())
//! ```
//!
//! # Retry Behavior
//!
//! None. Every failure is returned to the caller immediately;
//! [`ZboziApiError::is_retryable`] tells which ones may succeed on a repeat.

mod errors;
mod http_request;
mod http_response;
mod logger;
mod request_maker;
mod response_validator;

pub use errors::{
    ConnectionError, InvalidRequestError, InvalidRequestType, ResponseError, ZboziApiError,
};
pub use http_request::{HttpMethod, ZboziApiRequest};
pub use http_response::{JsonObject, ZboziApiResponse};
pub use logger::tracing_logger;
pub use request_maker::{
    RequestMaker, ZboziApiLogger, HEADER_API_SECRET, HEADER_PARTNER_TOKEN, HEADER_USER_AGENT,
    SDK_VERSION,
};
pub use response_validator::{expected_delivery_date, validate_response};
