/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust request structs with serialization support
[POS]:    Data layer - payload definitions for signed requests
[UPDATE]: When the gateway payload schema changes or new types are added
*/

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Page selection for the order listing endpoint.
///
/// Field order matters: the serialized text is covered by the request
/// signature, so it must stay `{"page":…,"limit":…}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrdersRequest {
    pub page: u32,
    pub limit: u32,
}

/// Postal code and optional service selector for pickup hours
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PickupHoursRequest {
    pub postal_code: String,
    // No skip attribute: an absent service must serialize as an explicit
    // JSON null, which is what the gateway receives for "any service".
    pub service_id: Option<String>,
}

/// Order document submitted for pricing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderValuationRequest {
    pub order: Value,
}

/// Order document submitted for shipment creation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderSendRequest {
    pub order: Value,
}

/// Customer document submitted for registration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerRegisterRequest {
    pub customer: Value,
}

/// Order identifiers handed over to the courier in bulk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TurnInRequest {
    pub order_ids: Vec<String>,
}
