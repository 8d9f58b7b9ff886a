//! Order lifecycle operations.
//!
//! [`ZboziApiClient`] exposes one method per business operation:
//!
//! | method | action |
//! |---|---|
//! | [`mark_pending`](ZboziApiClient::mark_pending) | `mark-pending` |
//! | [`mark_en_route`](ZboziApiClient::mark_en_route) | `mark-en-route` |
//! | [`mark_getting_ready_for_pickup`](ZboziApiClient::mark_getting_ready_for_pickup) | `mark-getting-ready-for-pickup` |
//! | [`mark_ready_for_pickup`](ZboziApiClient::mark_ready_for_pickup) | `mark-ready-for-pickup` |
//! | [`mark_delivered`](ZboziApiClient::mark_delivered) | `mark-delivered` |
//! | [`cancel_order`](ZboziApiClient::cancel_order) | `cancel` |
//! | [`update_shipping_address`](ZboziApiClient::update_shipping_address) | `update-shipping-address` |

mod client;
mod types;

pub use client::ZboziApiClient;
pub use types::{CancelOrderItem, OrderId, ShippingAddress};
