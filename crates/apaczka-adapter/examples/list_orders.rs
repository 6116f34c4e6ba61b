/*
[INPUT]:  APACZKA_APP_ID / APACZKA_APP_SECRET environment variables
[OUTPUT]: Raw JSON listing of recent orders and available services
[POS]:    Examples - order listing
[UPDATE]: When the orders endpoint changes
*/

use apaczka_adapter::*;

/// Example: list recent orders
///
/// Needs real API credentials issued in the Apaczka panel.
#[tokio::main]
async fn main() {
    println!("=== Apaczka Order Listing Example ===\n");

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

    println!("Fetching the first page of orders...");
    match client.orders(None, None).await {
        Ok(body) => println!("✓ Orders: {}", body),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nFetching the service structure...");
    match client.service_structure().await {
        Ok(body) => println!("✓ Services: {}", body),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\n✓ Order listing example complete");
}
