/*
[INPUT]:  Postal codes, waybill identifiers and point type selectors
[OUTPUT]: Raw JSON responses for carrier service information
[POS]:    HTTP layer - service information endpoints
[UPDATE]: When adding new service endpoints or changing selectors
*/

use crate::http::{ApaczkaClient, Result};
use crate::types::PickupHoursRequest;

impl ApaczkaClient {
    /// Fetch the waybill document for a shipped order
    ///
    /// POST waybill/{id}/
    pub async fn waybill(&self, id: &str) -> Result<String> {
        self.post_signed_empty(&format!("waybill/{id}/")).await
    }

    /// Pickup hours available under a postal code
    ///
    /// POST pickup_hours/
    /// An absent service id is serialized as an explicit `"service_id":null`.
    pub async fn pickup_hours(
        &self,
        postal_code: &str,
        service_id: Option<&str>,
    ) -> Result<String> {
        let request = PickupHoursRequest {
            postal_code: postal_code.to_string(),
            service_id: service_id.map(str::to_string),
        };
        self.post_signed("pickup_hours/", &request).await
    }

    /// Pickup and delivery points, optionally narrowed to one type
    ///
    /// POST points/{type}/
    /// An absent type is sent as the literal `null` path segment.
    pub async fn points(&self, point_type: Option<&str>) -> Result<String> {
        let segment = point_type.unwrap_or("null");
        self.post_signed_empty(&format!("points/{segment}/")).await
    }

    /// Full catalogue of carrier services and their options
    ///
    /// POST service_structure/
    pub async fn service_structure(&self) -> Result<String> {
        self.post_signed_empty("service_structure/").await
    }
}
