/*
[INPUT]:  Access host, merchant id, API key, and a collector session id
[OUTPUT]: Device, velocity, decision, and info lookups printed to stdout
[POS]:    Examples - full client surface walk-through
[UPDATE]: When adding new endpoints
*/

use kount_access_adapter::*;

/// Example: call every Access endpoint for one collector session.
///
/// Replace the host, merchant id, API key, and session with values issued
/// for your merchant account before running.
#[tokio::main]
async fn main() {
    println!("=== Kount Access Example ===\n");

    let host = "api-sandbox01.kountaccess.com";
    let merchant_id = 123456;
    let api_key = "PUT-YOUR-API-KEY-HERE";
    let session = "abcdef12345678910abcdef123456789";

    let client = match AccessClient::new(host, merchant_id, api_key) {
        Ok(client) => client,
        Err(err) => {
            eprintln!("Failed to create client: {err}");
            return;
        }
    };
    println!("✓ Client created for merchant {merchant_id}\n");

    // Device lookup for the session
    println!("Querying device info...");
    match client.get_device(session, None).await {
        Ok(doc) => println!("✓ Device: {}", doc["device"]),
        Err(err) => println!("✗ Error: {err}"),
    }

    // Velocity data for the session's login attempt
    println!("\nQuerying velocity...");
    match client.get_velocity(session, "greg@test.com", "password", None).await {
        Ok(doc) => println!("✓ Velocity: {}", doc["velocity"]),
        Err(err) => println!("✗ Error: {err}"),
    }

    // Threshold decision for the same credentials
    println!("\nQuerying decision...");
    match client.get_decision(session, "greg@test.com", "password", None).await {
        Ok(doc) => println!("✓ Decision: {}", doc["decision"]["reply"]["ruleEvents"]),
        Err(err) => println!("✗ Error: {err}"),
    }

    // Combined info call selecting every data set
    let flag = InfoDataSet::new()
        .with_info()
        .with_velocity()
        .with_decision()
        .with_trusted_device()
        .with_behavio_sec()
        .build();
    println!("\nQuerying info (flag = {flag})...");
    match client
        .get_info(
            flag,
            session,
            Some("customer-1234"),
            Some("greg@test.com"),
            Some("password"),
            None,
        )
        .await
    {
        Ok(doc) => println!("✓ Info response id: {}", doc["response_id"]),
        Err(err) => println!("✗ Error: {err}"),
    }

    // Mark the device the session came from as trusted
    println!("\nSetting device trust by session...");
    match client
        .set_device_trust_by_session(session, "customer-1234", TrustedState::Trusted, None)
        .await
    {
        Ok(()) => println!("✓ Device trusted"),
        Err(err) => println!("✗ Error: {err}"),
    }

    println!("\n✓ Access example complete");
}
