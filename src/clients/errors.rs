//! Error types for Zboží API calls.
//!
//! # Error Handling
//!
//! Every API call returns [`ZboziApiError`], a closed set of failure kinds:
//!
//! - [`ConnectionError`]: No HTTP response was obtained (DNS failure, timeout,
//!   refused connection). Usually worth retrying.
//! - [`ResponseError`]: The response is structurally unexpected (invalid JSON,
//!   missing fields, unknown status, unexpected HTTP status code).
//! - [`InvalidRequestError`]: The server rejected the request under one of the
//!   business rules listed in [`InvalidRequestType`]. Fix the request.
//! - [`TypeValidationError`]: A value failed a shape check before sending or
//!   while decoding the response.
//!
//! # Example
//!
//! ```rust,no_run
//! # use zbozi_api::{ZboziApiClient, ZboziConfig, PartnerToken, ApiSecret, ApiUrl};
//! use zbozi_api::{InvalidRequestType, ZboziApiError};
//! # let config = ZboziConfig::builder()
//! #     .partner_token(PartnerToken::new("t").unwrap())
//! #     .api_secret(ApiSecret::new("s").unwrap())
//! #     .api_url(ApiUrl::sandbox())
//! #     .build()
//! #     .unwrap();
//! # let client = ZboziApiClient::new(&config).unwrap();
//!
//! match client.mark_delivered("7048475959") {
//!     Ok(()) => println!("OK"),
//!     Err(ZboziApiError::Connection(e)) => println!("{e}, retry later"),
//!     Err(ZboziApiError::InvalidRequest(e)) if e.kind() == InvalidRequestType::OrderNotFound => {
//!         println!("Unknown order: {}", e.message());
//!     }
//!     Err(e) => println!("{e}"),
//! }
//! ```

use std::fmt;

use thiserror::Error;

use crate::error::TypeValidationError;

/// No HTTP response was obtained from the API.
///
/// Wraps the underlying transport error.
#[derive(Debug, Error)]
#[error("Connection to Slevomat API failed.")]
pub struct ConnectionError {
    #[source]
    source: reqwest::Error,
}

impl ConnectionError {
    pub(crate) const fn new(source: reqwest::Error) -> Self {
        Self { source }
    }

    /// Returns `true` if the connection failed because the timeout elapsed.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        self.source.is_timeout()
    }
}

/// The API returned a response the client cannot interpret.
#[derive(Debug, Error)]
pub enum ResponseError {
    /// The body of a 2xx/4xx response is not valid JSON.
    #[error("Slevomat API invalid response: invalid JSON data.")]
    InvalidJson {
        /// The JSON parse error.
        #[source]
        source: serde_json::Error,
    },

    /// A 4xx response body has no `status` key.
    #[error("Slevomat API invalid {code} response: missing status.")]
    MissingStatus {
        /// The HTTP status code.
        code: u16,
    },

    /// A 4xx response body has no `messages` key.
    #[error("Slevomat API invalid {code} response: missing messages.")]
    MissingMessages {
        /// The HTTP status code.
        code: u16,
    },

    /// A 4xx response body carries a `status` outside [`InvalidRequestType`].
    #[error("Slevomat API {code} response contains unknown status {status}.")]
    UnknownStatus {
        /// The HTTP status code.
        code: u16,
        /// The unrecognized `status` value as sent by the server.
        status: String,
    },

    /// The HTTP status code is neither 2xx nor 4xx.
    #[error("Slevomat API responded with unexpected HTTP status code: {code}.")]
    UnexpectedStatusCode {
        /// The HTTP status code.
        code: u16,
    },

    /// A success body has no `expectedDeliveryDate` key.
    #[error("Slevomat API response doesn't contain expectedDeliveryDate.")]
    MissingExpectedDeliveryDate,

    /// The `expectedDeliveryDate` value is not a `YYYY-MM-DD` date.
    #[error("Slevomat API invalid response: invalid expectedDeliveryDate {value}.")]
    InvalidExpectedDeliveryDate {
        /// The value as sent by the server.
        value: String,
    },
}

/// Business-rule violations reported by the API.
///
/// The integer codes are the `status` values of 4xx response bodies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InvalidRequestType {
    /// The request is malformed (`1`).
    BadRequest,
    /// The partner token or API secret is wrong (`2`).
    InvalidCredentials,
    /// The order does not exist (`3`).
    OrderNotFound,
    /// An order item does not exist (`4`).
    OrderItemNotFound,
    /// The order cannot move to the requested state (`5`).
    InvalidStatusChange,
    /// The cancellation cannot be performed (`6`).
    InvalidCancel,
    /// Any other business-rule violation (`7`).
    OtherError,
    /// The order has not been exported to the partner yet (`8`).
    OrderNotExported,
}

impl InvalidRequestType {
    /// All variants, in code order.
    pub const ALL: [Self; 8] = [
        Self::BadRequest,
        Self::InvalidCredentials,
        Self::OrderNotFound,
        Self::OrderItemNotFound,
        Self::InvalidStatusChange,
        Self::InvalidCancel,
        Self::OtherError,
        Self::OrderNotExported,
    ];

    /// Maps a `status` value to its variant.
    #[must_use]
    pub const fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(Self::BadRequest),
            2 => Some(Self::InvalidCredentials),
            3 => Some(Self::OrderNotFound),
            4 => Some(Self::OrderItemNotFound),
            5 => Some(Self::InvalidStatusChange),
            6 => Some(Self::InvalidCancel),
            7 => Some(Self::OtherError),
            8 => Some(Self::OrderNotExported),
            _ => None,
        }
    }

    /// Returns the `status` value for this variant.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::BadRequest => 1,
            Self::InvalidCredentials => 2,
            Self::OrderNotFound => 3,
            Self::OrderItemNotFound => 4,
            Self::InvalidStatusChange => 5,
            Self::InvalidCancel => 6,
            Self::OtherError => 7,
            Self::OrderNotExported => 8,
        }
    }
}

impl fmt::Display for InvalidRequestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::BadRequest => "bad request",
            Self::InvalidCredentials => "invalid credentials",
            Self::OrderNotFound => "order not found",
            Self::OrderItemNotFound => "order item not found",
            Self::InvalidStatusChange => "invalid status change",
            Self::InvalidCancel => "invalid cancel",
            Self::OtherError => "other error",
            Self::OrderNotExported => "order not exported",
        };
        f.write_str(name)
    }
}

/// The API rejected the request under a business rule.
///
/// Carries the ordered messages sent by the server. The `Display` output is
/// the messages joined with `" | "`.
///
/// # Example
///
/// ```rust
/// use zbozi_api::{InvalidRequestError, InvalidRequestType};
///
/// let error = InvalidRequestError::new(
///     InvalidRequestType::BadRequest,
///     vec!["Row 1, missing amount key.".to_string(), "Row 1, missing slevomatId key.".to_string()],
/// );
///
/// assert_eq!(error.to_string(), "Row 1, missing amount key. | Row 1, missing slevomatId key.");
/// assert_eq!(error.messages().len(), 2);
/// ```
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("{}", .messages.join(MESSAGE_SEPARATOR))]
pub struct InvalidRequestError {
    kind: InvalidRequestType,
    messages: Vec<String>,
}

const MESSAGE_SEPARATOR: &str = " | ";

impl InvalidRequestError {
    /// Creates a new business-rule error.
    #[must_use]
    pub const fn new(kind: InvalidRequestType, messages: Vec<String>) -> Self {
        Self { kind, messages }
    }

    /// Returns which business rule was violated.
    #[must_use]
    pub const fn kind(&self) -> InvalidRequestType {
        self.kind
    }

    /// Returns the messages sent by the server, in order.
    #[must_use]
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Returns the messages joined with `" | "`.
    #[must_use]
    pub fn message(&self) -> String {
        self.messages.join(MESSAGE_SEPARATOR)
    }
}

/// Unified error type for all Zboží API calls.
#[derive(Debug, Error)]
pub enum ZboziApiError {
    /// No HTTP response was obtained.
    #[error(transparent)]
    Connection(#[from] ConnectionError),

    /// The response could not be interpreted.
    #[error(transparent)]
    Response(#[from] ResponseError),

    /// The API rejected the request under a business rule.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidRequestError),

    /// A value failed a shape check.
    #[error(transparent)]
    TypeValidation(#[from] TypeValidationError),
}

impl ZboziApiError {
    /// Returns `true` for failures where repeating the same call may succeed.
    ///
    /// Only connection failures qualify. The client itself never retries.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Connection(_))
    }

    /// Returns the business-rule kind for [`ZboziApiError::InvalidRequest`] errors.
    #[must_use]
    pub const fn invalid_request_type(&self) -> Option<InvalidRequestType> {
        match self {
            Self::InvalidRequest(error) => Some(error.kind),
            _ => None,
        }
    }
}
