//! Label configuration walkthrough - try several label shapes against
//! one live endpoint and print what happens.
//!
//! Run with: cargo run --example labels
//!
//! Requires Application Default Credentials and a GCP project with the
//! Vertex AI API enabled.

use gemini_tracker::{Client, GenerateContentRequest, GenerationConfig, Labels, VertexConfig};

#[tokio::main]
async fn main() -> Result<(), gemini_tracker::Error> {
    dotenvy::dotenv().ok();

    let client = Client::builder().config(VertexConfig::from_env()).build().await?;

    let cases: Vec<(&str, Option<Labels>, &str)> = vec![
        (
            "Basic tenant label",
            Some(Labels::new().with("tenant_id", "tenant_a")),
            "Hello, this is a test.",
        ),
        (
            "Multiple labels",
            Some(
                Labels::new()
                    .with("tenant_id", "tenant_b")
                    .with("environment", "production")
                    .with("service", "chatbot"),
            ),
            "What is the weather like?",
        ),
        ("No labels", None, "Simple test without labels."),
    ];

    for (name, labels, prompt) in cases {
        println!("\n--- Testing: {name} ---");
        println!("Labels: {labels:?}");

        let mut request = GenerateContentRequest::new(prompt)
            .with_generation_config(GenerationConfig::deterministic());
        if let Some(labels) = labels {
            request = request.with_labels(labels);
        }

        match client.generate_content(request).await {
            Ok(response) => {
                let text = response.text().unwrap_or_default();
                let preview: String = text.chars().take(100).collect();
                println!("Response: {preview}...");
            }
            Err(e) => println!("Error: {e}"),
        }
    }

    Ok(())
}
