//! Vertex AI client for the Gemini `generateContent` endpoint.

mod auth;

pub use auth::Credential;

use std::sync::Arc;
use std::time::Duration;

use auth::{TokenCache, cached_token, new_token_cache};

use crate::config::VertexConfig;
use crate::types::{GenerateContentRequest, GenerateContentResponse};
use crate::{Error, Result};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(300);

/// A thin client around one remote operation: `generateContent` on Vertex AI.
///
/// No retry, fallback, or batching; a failed call surfaces as-is.
#[derive(Clone)]
pub struct Client {
    http: reqwest::Client,
    credential: Credential,
    config: VertexConfig,
    base_url: Option<String>,
    token_cache: Arc<TokenCache>,
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("project_id", &self.config.project_id)
            .field("location", &self.config.location)
            .field("model", &self.config.model)
            .finish_non_exhaustive()
    }
}

impl Client {
    /// Build a client from environment configuration and Application
    /// Default Credentials.
    pub async fn from_env() -> Result<Self> {
        Self::builder().config(VertexConfig::from_env()).build().await
    }

    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    pub fn config(&self) -> &VertexConfig {
        &self.config
    }

    /// Endpoint URL for the configured model.
    pub fn build_url(&self) -> String {
        let VertexConfig {
            project_id,
            location,
            model,
        } = &self.config;

        if let Some(ref base) = self.base_url {
            return format!(
                "{}/v1/projects/{}/locations/{}/publishers/google/models/{}:generateContent",
                base.trim_end_matches('/'),
                project_id,
                location,
                model
            );
        }

        if self.config.is_global() {
            format!(
                "https://aiplatform.googleapis.com/v1/projects/{}/locations/global/publishers/google/models/{}:generateContent",
                project_id, model
            )
        } else {
            format!(
                "https://{}-aiplatform.googleapis.com/v1/projects/{}/locations/{}/publishers/google/models/{}:generateContent",
                location, project_id, location, model
            )
        }
    }

    /// Issue one `generateContent` call.
    pub async fn generate_content(
        &self,
        request: GenerateContentRequest,
    ) -> Result<GenerateContentResponse> {
        if let Some(ref labels) = request.labels {
            labels.validate()?;
        }

        let url = self.build_url();
        let token = cached_token(&self.token_cache, &self.credential).await?;

        tracing::debug!(model = %self.config.model, labeled = request.labels.is_some(), "generateContent");

        let response = self
            .http
            .post(&url)
            .header("Content-Type", "application/json")
            .bearer_auth(token)
            .json(&request)
            .send()
            .await?;

        let response = check_response(response).await?;
        let json: serde_json::Value = response.json().await?;
        Ok(serde_json::from_value(json)?)
    }
}

async fn check_response(response: reqwest::Response) -> Result<reqwest::Response> {
    if !response.status().is_success() {
        let status = response.status().as_u16();
        let text = response.text().await.unwrap_or_default();
        return Err(Error::Api {
            message: text,
            status: Some(status),
            error_type: None,
        });
    }
    Ok(response)
}

#[derive(Default)]
pub struct ClientBuilder {
    config: Option<VertexConfig>,
    credential: Option<Credential>,
    base_url: Option<String>,
    timeout: Option<Duration>,
}

impl ClientBuilder {
    pub fn config(mut self, config: VertexConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn project(mut self, project_id: impl Into<String>) -> Self {
        self.config = Some(
            self.config
                .unwrap_or_default()
                .with_project(project_id),
        );
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.config = Some(self.config.unwrap_or_default().with_location(location));
        self
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.config = Some(self.config.unwrap_or_default().with_model(model));
        self
    }

    pub fn credential(mut self, credential: Credential) -> Self {
        self.credential = Some(credential);
        self
    }

    /// Override the endpoint host, e.g. for a mock server or gateway.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub async fn build(self) -> Result<Client> {
        let config = self.config.unwrap_or_default();

        let credential = match self.credential {
            Some(credential) => credential,
            None => Credential::adc().await?,
        };

        let http = reqwest::Client::builder()
            .timeout(self.timeout.unwrap_or(DEFAULT_TIMEOUT))
            .build()
            .map_err(Error::Network)?;

        Ok(Client {
            http,
            credential,
            config,
            base_url: self.base_url,
            token_cache: Arc::new(new_token_cache()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn test_client(config: VertexConfig) -> Client {
        Client::builder()
            .config(config)
            .credential(Credential::bearer("test-token"))
            .build()
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_regional_url() {
        let client = test_client(
            VertexConfig::default()
                .with_project("my-project")
                .with_location("us-central1")
                .with_model("gemini-2.5-flash"),
        )
        .await;

        assert_eq!(
            client.build_url(),
            "https://us-central1-aiplatform.googleapis.com/v1/projects/my-project/locations/us-central1/publishers/google/models/gemini-2.5-flash:generateContent"
        );
    }

    #[tokio::test]
    async fn test_global_url() {
        let client = test_client(
            VertexConfig::default()
                .with_project("my-project")
                .with_location("global"),
        )
        .await;

        assert_eq!(
            client.build_url(),
            "https://aiplatform.googleapis.com/v1/projects/my-project/locations/global/publishers/google/models/gemini-2.5-flash:generateContent"
        );
    }

    #[tokio::test]
    async fn test_base_url_override() {
        let client = Client::builder()
            .project("p")
            .location("us-central1")
            .model("m")
            .credential(Credential::bearer("t"))
            .base_url("http://127.0.0.1:9999/")
            .build()
            .await
            .unwrap();

        assert_eq!(
            client.build_url(),
            "http://127.0.0.1:9999/v1/projects/p/locations/us-central1/publishers/google/models/m:generateContent"
        );
    }

    #[tokio::test]
    async fn test_invalid_labels_rejected_before_send() {
        let client = test_client(VertexConfig::default()).await;
        let request = crate::types::GenerateContentRequest::new("hi")
            .with_labels(crate::labels::Labels::new().with("Tenant", "a"));

        let err = client.generate_content(request).await.unwrap_err();
        assert!(matches!(err, Error::InvalidRequest(_)));
    }
}
