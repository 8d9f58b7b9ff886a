//! Order lifecycle client.

use chrono::NaiveDate;
use serde_json::json;

use crate::clients::{
    expected_delivery_date, validate_response, RequestMaker, ZboziApiError, ZboziApiResponse,
};
use crate::config::{ApiUrl, ZboziConfig};
use crate::error::{ConfigError, TypeValidationError};
use crate::orders::types::{CancelOrderItem, OrderId, ShippingAddress};

/// Client for the order-fulfillment endpoints of the Zboží API.
///
/// Every method issues exactly one blocking `POST` to
/// `<api_url>/order/<order_id>/<action>` and validates the response.
///
/// # Thread Safety
///
/// `ZboziApiClient` is `Send + Sync`; it holds only immutable configuration.
///
/// # Example
///
/// ```rust,no_run
/// use zbozi_api::{ZboziApiClient, ZboziConfig, PartnerToken, ApiSecret, ApiUrl, ZboziApiError};
/// use zbozi_api::orders::CancelOrderItem;
///
/// let config = ZboziConfig::builder()
///     .partner_token(PartnerToken::new("token").unwrap())
///     .api_secret(ApiSecret::new("secret").unwrap())
///     .api_url(ApiUrl::sandbox())
///     .build()
///     .unwrap();
/// let client = ZboziApiClient::new(&config).unwrap();
///
/// client.mark_pending("7048475959")?;
/// let date = client.mark_en_route("7048475959", true)?;
/// println!("Expected delivery: {}", date.format("%-d. %-m. %Y"));
///
/// let items = vec![CancelOrderItem::new("787887454", 1)?];
/// client.cancel_order("7048475959", &items, Some("Duvod storna"))?;
/// # Ok::<(), ZboziApiError>(())
/// ```
#[derive(Debug)]
pub struct ZboziApiClient {
    request_maker: RequestMaker,
    api_url: ApiUrl,
}

// Verify ZboziApiClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ZboziApiClient>();
};

impl ZboziApiClient {
    /// Creates a new client from the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::HttpClient`] if the HTTP client cannot be created.
    pub fn new(config: &ZboziConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            request_maker: RequestMaker::new(config)?,
            api_url: config.api_url().clone(),
        })
    }

    /// Returns the base API URL.
    #[must_use]
    pub const fn api_url(&self) -> &ApiUrl {
        &self.api_url
    }

    /// Marks the order as pending.
    ///
    /// # Errors
    ///
    /// Returns [`ZboziApiError`] if the request fails or the API rejects it.
    pub fn mark_pending(&self, order_id: &str) -> Result<(), ZboziApiError> {
        self.post(order_id, "mark-pending", None).map(drop)
    }

    /// Marks the order as handed to the carrier.
    ///
    /// Returns the expected delivery date.
    ///
    /// # Errors
    ///
    /// Returns [`ZboziApiError`] if the request fails, the API rejects it, or
    /// the response lacks a valid `expectedDeliveryDate`.
    pub fn mark_en_route(
        &self,
        order_id: &str,
        auto_mark_delivered: bool,
    ) -> Result<NaiveDate, ZboziApiError> {
        let body = json!({
            "autoMarkDelivered": auto_mark_delivered,
        });
        let response = self.post(order_id, "mark-en-route", Some(body))?;
        expected_delivery_date(&response)
    }

    /// Marks the order as being prepared for pickup.
    ///
    /// Returns the expected delivery date.
    ///
    /// # Errors
    ///
    /// Returns [`ZboziApiError`] if the request fails, the API rejects it, or
    /// the response lacks a valid `expectedDeliveryDate`.
    pub fn mark_getting_ready_for_pickup(
        &self,
        order_id: &str,
        auto_mark_ready_for_pickup: bool,
        auto_mark_delivered: bool,
    ) -> Result<NaiveDate, ZboziApiError> {
        let body = json!({
            "autoMarkDelivered": auto_mark_delivered,
            "autoMarkReadyForPickup": auto_mark_ready_for_pickup,
        });
        let response = self.post(order_id, "mark-getting-ready-for-pickup", Some(body))?;
        expected_delivery_date(&response)
    }

    /// Marks the order as ready for pickup.
    ///
    /// # Errors
    ///
    /// Returns [`ZboziApiError`] if the request fails or the API rejects it.
    pub fn mark_ready_for_pickup(
        &self,
        order_id: &str,
        auto_mark_delivered: bool,
    ) -> Result<(), ZboziApiError> {
        let body = json!({
            "autoMarkDelivered": auto_mark_delivered,
        });
        self.post(order_id, "mark-ready-for-pickup", Some(body))
            .map(drop)
    }

    /// Marks the order as delivered.
    ///
    /// # Errors
    ///
    /// Returns [`ZboziApiError`] if the request fails or the API rejects it.
    pub fn mark_delivered(&self, order_id: &str) -> Result<(), ZboziApiError> {
        self.post(order_id, "mark-delivered", None).map(drop)
    }

    /// Cancels the given items of the order.
    ///
    /// # Errors
    ///
    /// Returns [`ZboziApiError::TypeValidation`] if `items` is empty, and
    /// [`ZboziApiError`] if the request fails or the API rejects it.
    pub fn cancel_order(
        &self,
        order_id: &str,
        items: &[CancelOrderItem],
        note: Option<&str>,
    ) -> Result<(), ZboziApiError> {
        if items.is_empty() {
            return Err(TypeValidationError::Empty { field: "items" }.into());
        }
        let body = json!({
            "items": items,
            "note": note,
        });
        self.post(order_id, "cancel", Some(body)).map(drop)
    }

    /// Replaces the shipping address of the order.
    ///
    /// # Errors
    ///
    /// Returns [`ZboziApiError`] if the request fails or the API rejects it.
    pub fn update_shipping_address(
        &self,
        order_id: &str,
        address: &ShippingAddress,
    ) -> Result<(), ZboziApiError> {
        let body = json!(address);
        self.post(order_id, "update-shipping-address", Some(body))
            .map(drop)
    }

    /// Sends one action and returns the validated response.
    fn post(
        &self,
        order_id: &str,
        action: &str,
        body: Option<serde_json::Value>,
    ) -> Result<ZboziApiResponse, ZboziApiError> {
        let endpoint = self.endpoint(&OrderId::new(order_id)?, action);
        let response = self.request_maker.send_post_request(&endpoint, body)?;
        validate_response(&response)?;
        Ok(response)
    }

    fn endpoint(&self, order_id: &OrderId, action: &str) -> String {
        format!(
            "{}/order/{}/{}",
            self.api_url,
            order_id.path_segment(),
            action
        )
    }
}
