//! Argument types of the order operations.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::TypeValidationError;

/// An order identifier, as used in endpoint paths.
///
/// Must be non-empty and must not contain `/`.
///
/// # Example
///
/// ```rust
/// use zbozi_api::orders::OrderId;
///
/// let order_id = OrderId::new("7048475959").unwrap();
/// assert_eq!(order_id.as_ref(), "7048475959");
/// assert!(OrderId::new("").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct OrderId(String);

impl OrderId {
    /// Creates a validated order id.
    ///
    /// # Errors
    ///
    /// Returns [`TypeValidationError::Empty`] for an empty id and
    /// [`TypeValidationError::InvalidOrderId`] for an id containing `/`.
    pub fn new(order_id: impl Into<String>) -> Result<Self, TypeValidationError> {
        let order_id = order_id.into();
        if order_id.is_empty() {
            return Err(TypeValidationError::Empty { field: "orderId" });
        }
        if order_id.contains('/') {
            return Err(TypeValidationError::InvalidOrderId { order_id });
        }
        Ok(Self(order_id))
    }

    /// Returns the id percent-encoded for use as a URL path segment.
    #[must_use]
    pub fn path_segment(&self) -> String {
        urlencoding::encode(&self.0).into_owned()
    }
}

impl AsRef<str> for OrderId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One line item to cancel.
///
/// Serializes to `{"slevomatId": ..., "amount": ...}`.
///
/// # Example
///
/// ```rust
/// use zbozi_api::orders::CancelOrderItem;
///
/// let item = CancelOrderItem::new("787887454", 1).unwrap();
/// assert_eq!(
///     serde_json::to_string(&item).unwrap(),
///     r#"{"slevomatId":"787887454","amount":1}"#
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawCancelOrderItem")]
pub struct CancelOrderItem {
    slevomat_id: String,
    amount: u32,
}

/// Unchecked wire form of [`CancelOrderItem`].
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawCancelOrderItem {
    slevomat_id: String,
    amount: u32,
}

impl TryFrom<RawCancelOrderItem> for CancelOrderItem {
    type Error = TypeValidationError;

    fn try_from(raw: RawCancelOrderItem) -> Result<Self, Self::Error> {
        Self::new(raw.slevomat_id, raw.amount)
    }
}

impl CancelOrderItem {
    /// Creates a cancel item for `amount` pieces of the item `slevomat_id`.
    ///
    /// # Errors
    ///
    /// Returns [`TypeValidationError`] if the id is empty or the amount is zero.
    pub fn new(slevomat_id: impl Into<String>, amount: u32) -> Result<Self, TypeValidationError> {
        let slevomat_id = slevomat_id.into();
        if slevomat_id.is_empty() {
            return Err(TypeValidationError::Empty {
                field: "slevomatId",
            });
        }
        if amount == 0 {
            return Err(TypeValidationError::NotPositive {
                field: "amount",
                value: amount,
            });
        }
        Ok(Self {
            slevomat_id,
            amount,
        })
    }

    /// Returns the Slevomat id of the order item.
    #[must_use]
    pub fn slevomat_id(&self) -> &str {
        &self.slevomat_id
    }

    /// Returns the number of pieces to cancel.
    #[must_use]
    pub const fn amount(&self) -> u32 {
        self.amount
    }
}

/// A new shipping address for an order.
///
/// `state` is the country code (e.g. `cz`). `company` is sent as `null` when
/// absent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingAddress {
    /// Recipient name.
    pub name: String,
    /// Street and house number.
    pub street: String,
    /// City.
    pub city: String,
    /// Country code.
    pub state: String,
    /// Contact phone number.
    pub phone: String,
    /// Postal code.
    pub postal_code: String,
    /// Company name, if any.
    pub company: Option<String>,
}
