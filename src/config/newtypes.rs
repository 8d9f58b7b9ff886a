//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use std::fmt;

/// A validated partner token.
///
/// Sent in the `X-PartnerToken` header of every request.
///
/// # Example
///
/// ```rust
/// use zbozi_api::PartnerToken;
///
/// let token = PartnerToken::new("my-partner-token").unwrap();
/// assert_eq!(token.as_ref(), "my-partner-token");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PartnerToken(String);

impl PartnerToken {
    /// Creates a new validated partner token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyPartnerToken`] if the token is empty.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.is_empty() {
            return Err(ConfigError::EmptyPartnerToken);
        }
        Ok(Self(token))
    }
}

impl AsRef<str> for PartnerToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A validated API secret.
///
/// Sent in the `X-ApiSecret` header of every request.
///
/// # Security
///
/// The `Debug` implementation masks the secret value, displaying only
/// `ApiSecret(*****)` instead of the actual secret.
///
/// # Example
///
/// ```rust
/// use zbozi_api::ApiSecret;
///
/// let secret = ApiSecret::new("my-secret").unwrap();
/// assert_eq!(format!("{:?}", secret), "ApiSecret(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiSecret(String);

impl ApiSecret {
    /// Creates a new validated API secret.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiSecret`] if the secret is empty.
    pub fn new(secret: impl Into<String>) -> Result<Self, ConfigError> {
        let secret = secret.into();
        if secret.is_empty() {
            return Err(ConfigError::EmptyApiSecret);
        }
        Ok(Self(secret))
    }
}

impl AsRef<str> for ApiSecret {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiSecret(*****)")
    }
}

/// A validated base URL of the Zboží API.
///
/// The URL must use the `http` or `https` scheme, name a host and carry no
/// query or fragment, since endpoint paths are appended to it. A trailing `/`
/// is removed.
///
/// # Example
///
/// ```rust
/// use zbozi_api::ApiUrl;
///
/// let url = ApiUrl::new("https://www.slevomat.cz/zbozi-api/v1-test/").unwrap();
/// assert_eq!(url.as_ref(), "https://www.slevomat.cz/zbozi-api/v1-test");
/// assert!(ApiUrl::new("https://www.slevomat.cz/zbozi-api/v1?debug=1").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiUrl(String);

impl ApiUrl {
    /// Base URL of the partner test environment.
    pub const SANDBOX: &'static str = "https://www.slevomat.cz/zbozi-api/v1-test";

    /// Creates a new validated API URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidApiUrl`] if the scheme is not `http` or
    /// `https`, the host is missing, or the URL has a query or fragment.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().trim_end_matches('/').to_string();

        let Some(scheme_end) = url.find("://") else {
            return Err(ConfigError::InvalidApiUrl { url });
        };

        let scheme = url[..scheme_end].to_ascii_lowercase();
        if scheme != "http" && scheme != "https" {
            return Err(ConfigError::InvalidApiUrl { url });
        }

        let rest = &url[scheme_end + 3..];
        let has_host = !rest.is_empty() && !rest.starts_with([':', '/']);
        if !has_host || rest.contains(['?', '#']) {
            return Err(ConfigError::InvalidApiUrl { url });
        }

        Ok(Self(url))
    }

    /// Returns the URL of the partner test environment.
    #[must_use]
    pub fn sandbox() -> Self {
        Self(Self::SANDBOX.to_string())
    }
}

impl AsRef<str> for ApiUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ApiUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
