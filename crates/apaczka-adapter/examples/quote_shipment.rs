/*
[INPUT]:  APACZKA_APP_ID / APACZKA_APP_SECRET environment variables
[OUTPUT]: Pickup hours and a price quote for a sample parcel
[POS]:    Examples - shipment valuation flow
[UPDATE]: When valuation or pickup endpoints change
*/

use apaczka_adapter::*;
use serde_json::json;

/// Example: quote a parcel before creating the order
///
/// Walks the usual pre-shipment flow: check pickup hours for the sender's
/// postal code, then ask for a valuation of the parcel.
#[tokio::main]
async fn main() {
    println!("=== Apaczka Shipment Quote Example ===\n");

    let (app_id, app_secret) = match (
        std::env::var("APACZKA_APP_ID"),
        std::env::var("APACZKA_APP_SECRET"),
    ) {
        (Ok(id), Ok(secret)) => (id, secret),
        _ => {
            eprintln!("Set APACZKA_APP_ID and APACZKA_APP_SECRET first");
            return;
        }
    };

    let client = match ApaczkaClient::new(Credentials::new(app_id, app_secret)) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    println!("✓ HTTP client created\n");

    let postal_code = "00-950";

    println!("Checking pickup hours for {}...", postal_code);
    match client.pickup_hours(postal_code, None).await {
        Ok(body) => println!("✓ Pickup hours: {}", body),
        Err(e) => println!("✗ Error: {}", e),
    }

    // Minimal order document; the gateway validates the full schema.
    let order = json!({
        "service_id": 21,
        "address": {
            "sender": {
                "country_code": "PL",
                "name": "Nadawca Sp. z o.o.",
                "line1": "Prosta 1",
                "postal_code": postal_code,
                "city": "Warszawa"
            },
            "receiver": {
                "country_code": "PL",
                "name": "Jan Kowalski",
                "line1": "Krakowska 2",
                "postal_code": "30-001",
                "city": "Kraków"
            }
        },
        "shipment": [{
            "dimension1": 30,
            "dimension2": 20,
            "dimension3": 10,
            "weight": 2
        }]
    });

    println!("\nRequesting a valuation...");
    match client.order_valuation(order).await {
        Ok(body) => println!("✓ Valuation: {}", body),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\n✓ Shipment quote example complete");
}
