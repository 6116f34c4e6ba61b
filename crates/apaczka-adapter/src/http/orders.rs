/*
[INPUT]:  Order identifiers and free-form order documents
[OUTPUT]: Raw JSON responses for order lifecycle calls
[POS]:    HTTP layer - order endpoints
[UPDATE]: When adding new order endpoints or changing payload layout
*/

use serde_json::Value;

use crate::http::{ApaczkaClient, Result};
use crate::types::{OrderSendRequest, OrderValuationRequest, OrdersRequest, TurnInRequest};

/// Page returned when the caller does not ask for one
const DEFAULT_PAGE: u32 = 1;
/// Orders per page when the caller does not ask for a limit
const DEFAULT_LIMIT: u32 = 10;

impl ApaczkaClient {
    /// Fetch a single order
    ///
    /// POST order/{id}/
    pub async fn order(&self, id: &str) -> Result<String> {
        self.post_signed_empty(&format!("order/{id}/")).await
    }

    /// List orders page by page
    ///
    /// POST orders/
    /// Defaults to the first page with 10 orders per page.
    pub async fn orders(&self, page: Option<u32>, limit: Option<u32>) -> Result<String> {
        let request = OrdersRequest {
            page: page.unwrap_or(DEFAULT_PAGE),
            limit: limit.unwrap_or(DEFAULT_LIMIT),
        };
        self.post_signed("orders/", &request).await
    }

    /// Price an order document before shipping it
    ///
    /// POST order_valuation/
    pub async fn order_valuation(&self, order: Value) -> Result<String> {
        self.post_signed("order_valuation/", &OrderValuationRequest { order })
            .await
    }

    /// Create a shipment order and hand it to the courier
    ///
    /// POST order_send/
    pub async fn order_send(&self, order: Value) -> Result<String> {
        self.post_signed("order_send/", &OrderSendRequest { order })
            .await
    }

    /// Cancel an order
    ///
    /// POST cancel_order/{id}/
    pub async fn cancel_order(&self, id: &str) -> Result<String> {
        self.post_signed_empty(&format!("cancel_order/{id}/")).await
    }

    /// Register a bulk hand-off of orders to the courier
    ///
    /// POST turn_in/
    pub async fn turn_in(&self, order_ids: Vec<String>) -> Result<String> {
        self.post_signed("turn_in/", &TurnInRequest { order_ids })
            .await
    }
}
