//! Configuration types for the Zboží API client.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`ZboziConfig`]: The configuration captured by a client at construction
//! - [`ZboziConfigBuilder`]: A builder for constructing [`ZboziConfig`] instances
//! - [`PartnerToken`]: A validated partner token newtype
//! - [`ApiSecret`]: A validated API secret newtype with masked debug output
//! - [`ApiUrl`]: A validated base URL of the API
//!
//! # Example
//!
//! ```rust
//! use zbozi_api::{ZboziConfig, PartnerToken, ApiSecret, ApiUrl};
//!
//! let config = ZboziConfig::builder()
//!     .partner_token(PartnerToken::new("my-token").unwrap())
//!     .api_secret(ApiSecret::new("my-secret").unwrap())
//!     .api_url(ApiUrl::sandbox())
//!     .timeout_in_seconds(10)
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;

pub use newtypes::{ApiSecret, ApiUrl, PartnerToken};

use std::fmt;
use std::sync::Arc;

use crate::clients::{ZboziApiLogger, ZboziApiRequest, ZboziApiResponse};
use crate::error::ConfigError;

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_IN_SECONDS: u64 = 30;

/// Configuration for the Zboží API client.
///
/// Holds the credentials, the base URL, the request timeout and the optional
/// logging observer. A client captures the configuration at construction and
/// never mutates it.
///
/// # Thread Safety
///
/// `ZboziConfig` is `Clone`, `Send`, and `Sync`.
///
/// # Example
///
/// ```rust
/// use zbozi_api::{ZboziConfig, PartnerToken, ApiSecret, ApiUrl};
///
/// let config = ZboziConfig::builder()
///     .partner_token(PartnerToken::new("token").unwrap())
///     .api_secret(ApiSecret::new("secret").unwrap())
///     .api_url(ApiUrl::new("https://www.slevomat.cz/zbozi-api/v1").unwrap())
///     .build()
///     .unwrap();
///
/// assert_eq!(config.timeout_in_seconds(), 30);
/// ```
#[derive(Clone)]
pub struct ZboziConfig {
    partner_token: PartnerToken,
    api_secret: ApiSecret,
    api_url: ApiUrl,
    timeout_in_seconds: u64,
    user_agent_prefix: Option<String>,
    logger: Option<ZboziApiLogger>,
}

impl ZboziConfig {
    /// Creates a new builder for constructing a `ZboziConfig`.
    #[must_use]
    pub fn builder() -> ZboziConfigBuilder {
        ZboziConfigBuilder::new()
    }

    /// Returns the partner token.
    #[must_use]
    pub const fn partner_token(&self) -> &PartnerToken {
        &self.partner_token
    }

    /// Returns the API secret.
    #[must_use]
    pub const fn api_secret(&self) -> &ApiSecret {
        &self.api_secret
    }

    /// Returns the base API URL.
    #[must_use]
    pub const fn api_url(&self) -> &ApiUrl {
        &self.api_url
    }

    /// Returns the request timeout in seconds. `0` means no timeout.
    #[must_use]
    pub const fn timeout_in_seconds(&self) -> u64 {
        self.timeout_in_seconds
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the logging observer, if configured.
    #[must_use]
    pub const fn logger(&self) -> Option<&ZboziApiLogger> {
        self.logger.as_ref()
    }
}

impl fmt::Debug for ZboziConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ZboziConfig")
            .field("partner_token", &self.partner_token)
            .field("api_secret", &self.api_secret)
            .field("api_url", &self.api_url)
            .field("timeout_in_seconds", &self.timeout_in_seconds)
            .field("user_agent_prefix", &self.user_agent_prefix)
            .field("logger", &self.logger.is_some())
            .finish()
    }
}

// Verify ZboziConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ZboziConfig>();
};

/// Builder for constructing [`ZboziConfig`] instances.
///
/// Required fields are `partner_token`, `api_secret` and `api_url`.
///
/// # Defaults
///
/// - `timeout_in_seconds`: 30
/// - `user_agent_prefix`: `None`
/// - `logger`: `None`
#[derive(Default)]
pub struct ZboziConfigBuilder {
    partner_token: Option<PartnerToken>,
    api_secret: Option<ApiSecret>,
    api_url: Option<ApiUrl>,
    timeout_in_seconds: Option<u64>,
    user_agent_prefix: Option<String>,
    logger: Option<ZboziApiLogger>,
}

impl ZboziConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the partner token (required).
    #[must_use]
    pub fn partner_token(mut self, token: PartnerToken) -> Self {
        self.partner_token = Some(token);
        self
    }

    /// Sets the API secret (required).
    #[must_use]
    pub fn api_secret(mut self, secret: ApiSecret) -> Self {
        self.api_secret = Some(secret);
        self
    }

    /// Sets the base API URL (required).
    #[must_use]
    pub fn api_url(mut self, url: ApiUrl) -> Self {
        self.api_url = Some(url);
        self
    }

    /// Sets the request timeout in seconds. `0` disables the timeout.
    #[must_use]
    pub const fn timeout_in_seconds(mut self, seconds: u64) -> Self {
        self.timeout_in_seconds = Some(seconds);
        self
    }

    /// Sets a prefix prepended to the `User-Agent` header.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Sets the logging observer invoked once per request.
    ///
    /// # Example
    ///
    /// ```rust
    /// use zbozi_api::{ZboziConfig, PartnerToken, ApiSecret, ApiUrl};
    ///
    /// let config = ZboziConfig::builder()
    ///     .partner_token(PartnerToken::new("token").unwrap())
    ///     .api_secret(ApiSecret::new("secret").unwrap())
    ///     .api_url(ApiUrl::sandbox())
    ///     .logger(|request, response| {
    ///         println!("{} {} -> {:?}", request.method(), request.url(), response.map(|r| r.status_code()));
    ///     })
    ///     .build()
    ///     .unwrap();
    ///
    /// assert!(config.logger().is_some());
    /// ```
    #[must_use]
    pub fn logger<F>(mut self, logger: F) -> Self
    where
        F: Fn(&ZboziApiRequest, Option<&ZboziApiResponse>) + Send + Sync + 'static,
    {
        self.logger = Some(Arc::new(logger));
        self
    }

    /// Builds the [`ZboziConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `partner_token`,
    /// `api_secret` or `api_url` are not set.
    pub fn build(self) -> Result<ZboziConfig, ConfigError> {
        let partner_token = self
            .partner_token
            .ok_or(ConfigError::MissingRequiredField {
                field: "partner_token",
            })?;
        let api_secret = self
            .api_secret
            .ok_or(ConfigError::MissingRequiredField {
                field: "api_secret",
            })?;
        let api_url = self
            .api_url
            .ok_or(ConfigError::MissingRequiredField { field: "api_url" })?;

        Ok(ZboziConfig {
            partner_token,
            api_secret,
            api_url,
            timeout_in_seconds: self
                .timeout_in_seconds
                .unwrap_or(DEFAULT_TIMEOUT_IN_SECONDS),
            user_agent_prefix: self.user_agent_prefix,
            logger: self.logger,
        })
    }
}

impl fmt::Debug for ZboziConfigBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ZboziConfigBuilder")
            .field("partner_token", &self.partner_token)
            .field("api_secret", &self.api_secret)
            .field("api_url", &self.api_url)
            .field("timeout_in_seconds", &self.timeout_in_seconds)
            .field("user_agent_prefix", &self.user_agent_prefix)
            .field("logger", &self.logger.is_some())
            .finish()
    }
}
