//! # Slevomat Zboží API Rust client
//!
//! A Rust client for the Slevomat Zboží order-fulfillment API, letting a
//! merchant application move orders through their lifecycle, cancel line
//! items and update shipping addresses.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`ZboziConfig`] and [`ZboziConfigBuilder`]
//! - Validated newtypes for credentials and the API URL
//! - A blocking transport that authenticates requests, decodes JSON bodies and
//!   invokes an optional logging observer ([`clients::RequestMaker`])
//! - Classification of API failures into a typed error ([`ZboziApiError`])
//! - One method per order operation on [`ZboziApiClient`]
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use zbozi_api::{ZboziApiClient, ZboziConfig, PartnerToken, ApiSecret, ApiUrl, ZboziApiError};
//! use zbozi_api::orders::{CancelOrderItem, ShippingAddress};
//!
//! let config = ZboziConfig::builder()
//!     .partner_token(PartnerToken::new("your-partner-token").unwrap())
//!     .api_secret(ApiSecret::new("your-api-secret").unwrap())
//!     .api_url(ApiUrl::sandbox())
//!     .timeout_in_seconds(30)
//!     .logger(zbozi_api::clients::tracing_logger())
//!     .build()
//!     .unwrap();
//!
//! let client = ZboziApiClient::new(&config).unwrap();
//! let order_id = "7048475959";
//!
//! client.mark_pending(order_id)?;
//! let expected = client.mark_en_route(order_id, true)?;
//! println!("Expected delivery: {expected}");
//! let expected = client.mark_getting_ready_for_pickup(order_id, true, true)?;
//! println!("Expected delivery: {expected}");
//! client.mark_ready_for_pickup(order_id, true)?;
//! client.mark_delivered(order_id)?;
//!
//! let items = vec![
//!     CancelOrderItem::new("787887454", 1)?,
//!     CancelOrderItem::new("7844544", 2)?,
//! ];
//! client.cancel_order(order_id, &items, Some("Duvod storna"))?;
//!
//! client.update_shipping_address(order_id, &ShippingAddress {
//!     name: "Petr Novak".to_string(),
//!     street: "Prazska 16".to_string(),
//!     city: "Praha 10".to_string(),
//!     state: "cz".to_string(),
//!     phone: "+420777888999".to_string(),
//!     postal_code: "10200".to_string(),
//!     company: None,
//! })?;
//! # Ok::<(), ZboziApiError>(())
//! ```
//!
//! ## Error Handling
//!
//! ```rust,no_run
//! # use zbozi_api::{ZboziApiClient, ZboziConfig, PartnerToken, ApiSecret, ApiUrl};
//! use zbozi_api::ZboziApiError;
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
//!     Err(ZboziApiError::Connection(e)) => println!("{e} Retry later."),
//!     Err(ZboziApiError::InvalidRequest(e)) => println!("Request error ({}): {e}", e.kind()),
//!     Err(e) => println!("{e}"),
//! }
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Blocking and one-shot**: Each operation is a single request; retrying is
//!   left to the caller

pub mod clients;
pub mod config;
pub mod error;
pub mod orders;

// Re-export public types at crate root for convenience
pub use config::{ApiSecret, ApiUrl, PartnerToken, ZboziConfig, ZboziConfigBuilder};
pub use error::{ConfigError, TypeValidationError};

pub use clients::{
    ConnectionError, InvalidRequestError, InvalidRequestType, ResponseError, ZboziApiError,
    ZboziApiLogger, ZboziApiRequest, ZboziApiResponse,
};

pub use orders::ZboziApiClient;
