//! # gemini-tracker
//!
//! Tenant-labeled Gemini calls on Vertex AI for cost-allocation analysis.
//!
//! Every tracked call carries a billing label derived from a tenant
//! identifier, so per-tenant spend can later be broken out in the Cloud
//! Billing export. The label value is the identifier lower-cased with
//! hyphens replaced by underscores; the sentinel identifier `no-label`
//! suppresses labeling entirely.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use gemini_tracker::{Client, GeminiTracker};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), gemini_tracker::Error> {
//!     let client = Client::from_env().await?;
//!     let tracker = GeminiTracker::new(client);
//!
//!     let text = tracker
//!         .track_and_generate("tenant-a", "This is a test prompt.")
//!         .await?;
//!     println!("{}", text);
//!     Ok(())
//! }
//! ```

#![deny(rustdoc::broken_intra_doc_links)]

pub mod client;
pub mod config;
pub mod labels;
pub mod simulation;
pub mod tracker;
pub mod types;

pub use client::{Client, ClientBuilder, Credential};
pub use config::VertexConfig;
pub use labels::{Labels, NO_LABEL_TENANT, TENANT_LABEL_KEY, derive_label_value};
pub use simulation::SimulationPlan;
pub use tracker::GeminiTracker;
pub use types::{
    Candidate, Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, Part,
    Role, UsageMetadata,
};

/// Error type for gemini-tracker operations.
///
/// There is no recovery or retry layer here: failures from the underlying
/// API call bubble up unchanged to the caller.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// API returned an error response.
    #[error("API error (HTTP {status}): {message}", status = status.map(|s| s.to_string()).unwrap_or_else(|| "unknown".into()))]
    Api {
        message: String,
        status: Option<u16>,
        error_type: Option<String>,
    },

    /// Authentication failed.
    #[error("Authentication failed: {message}")]
    Auth { message: String },

    /// Network connectivity or request failed.
    #[error("Network request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// JSON serialization or deserialization failed.
    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    /// Failed to parse a response.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Request parameters are invalid (e.g. an illegal billing label).
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl Error {
    pub fn auth(message: impl Into<String>) -> Self {
        Error::Auth {
            message: message.into(),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(
            self,
            Error::Api {
                status: Some(401),
                ..
            } | Error::Auth { .. }
        )
    }

    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Error::Network(_)
                | Error::Api {
                    status: Some(429 | 500..=599),
                    ..
                }
        )
    }
}

/// Result type alias for gemini-tracker operations.
pub type Result<T> = std::result::Result<T, Error>;
