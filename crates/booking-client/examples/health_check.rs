//! Simple health check example.
//!
//! Run with: cargo run -p booking-client --example health_check
//!
//! Set SPRING_BOOT_BASE_URL to point at a backend other than http://localhost:8080.

use booking_client::{display_message, ApiConfig, BookingClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();

    let config = ApiConfig::from_env()?;
    println!("Checking {}...", config.base_url);

    let client = BookingClient::new(config)?;
    match client.health_check().await {
        Ok(healthy) => println!("Health check: {}", if healthy { "OK" } else { "FAILED" }),
        Err(e) => println!("Health check: {}", display_message(&e)),
    }

    Ok(())
}
