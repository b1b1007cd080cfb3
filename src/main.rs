//! Labeled API-call simulation.
//!
//! Run with: cargo run
//!
//! Reads `GCP_PROJECT_ID` / `GCP_LOCATION` / `GEMINI_MODEL` (a `.env` file
//! is honored), then issues the canned multi-tenant call volume so labeled
//! billing data lands in Google Cloud for later cost-allocation analysis.

use gemini_tracker::{Client, GeminiTracker, SimulationPlan, VertexConfig};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), gemini_tracker::Error> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = VertexConfig::from_env();
    tracing::info!(
        project_id = %config.project_id,
        location = %config.location,
        model = %config.model,
        "starting labeled call simulation"
    );

    let client = Client::builder().config(config).build().await?;
    let tracker = GeminiTracker::new(client);

    println!("--- Labeled API Call Simulation Start ---");
    SimulationPlan::default_plan().run(&tracker).await?;
    println!("\n--- Labeled API Call Simulation Complete ---");
    println!("\nBilling data with labels has been sent to Google Cloud.");
    println!("Cost allocation shows up in the billing export after a few hours.");

    Ok(())
}
