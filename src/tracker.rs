//! Label-deriving request wrapper.

use crate::client::Client;
use crate::labels::Labels;
use crate::types::{GenerateContentRequest, GenerationConfig};
use crate::{Error, Result};

/// Tracks per-tenant Gemini calls by attaching a billing label to each one.
///
/// Given a tenant identifier and a prompt, derives the label mapping (or
/// none, for the sentinel identifier), fixes the sampling temperature at
/// zero, and issues exactly one `generateContent` call. Errors from the
/// underlying call propagate unchanged.
#[derive(Debug, Clone)]
pub struct GeminiTracker {
    client: Client,
}

impl GeminiTracker {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Issue one labeled generation call on behalf of `tenant_id` and
    /// return the generated text.
    pub async fn track_and_generate(&self, tenant_id: &str, prompt: &str) -> Result<String> {
        let labels = Labels::for_tenant(tenant_id);
        tracing::info!(
            tenant_id,
            labeled = labels.is_some(),
            "API call with billing label"
        );

        let mut request = GenerateContentRequest::new(prompt)
            .with_generation_config(GenerationConfig::deterministic());
        if let Some(labels) = labels {
            request = request.with_labels(labels);
        }

        let response = self.client.generate_content(request).await?;
        response
            .text()
            .ok_or_else(|| Error::Parse("response contained no text".into()))
    }
}
