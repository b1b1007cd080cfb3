//! Credentials and bearer-token caching.

use std::sync::Arc;
use std::time::{Duration, Instant};

use gcp_auth::TokenProvider;
use secrecy::{ExposeSecret, SecretString};
use tokio::sync::RwLock;

use crate::{Error, Result};

const CLOUD_PLATFORM_SCOPE: &str = "https://www.googleapis.com/auth/cloud-platform";
const TOKEN_TTL: Duration = Duration::from_secs(3600);
const TOKEN_REFRESH_MARGIN: Duration = Duration::from_secs(300);

/// How the client authenticates against Vertex AI.
#[derive(Clone)]
pub enum Credential {
    /// Application Default Credentials resolved through `gcp_auth`.
    Adc(Arc<dyn TokenProvider>),
    /// A fixed bearer token, for tests and API gateways.
    Static(SecretString),
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Credential::Adc(_) => f.write_str("Credential::Adc"),
            Credential::Static(_) => f.write_str("Credential::Static(..)"),
        }
    }
}

impl Credential {
    /// Resolve Application Default Credentials from the environment.
    pub async fn adc() -> Result<Self> {
        let provider = gcp_auth::provider()
            .await
            .map_err(|e| Error::auth(e.to_string()))?;
        Ok(Credential::Adc(provider))
    }

    pub fn bearer(token: impl Into<String>) -> Self {
        Credential::Static(SecretString::from(token.into()))
    }

    /// Fetch a fresh bearer token. Static credentials return as-is.
    pub(crate) async fn fetch_token(&self) -> Result<String> {
        match self {
            Credential::Adc(provider) => {
                let token = provider
                    .token(&[CLOUD_PLATFORM_SCOPE])
                    .await
                    .map_err(|e| Error::auth(e.to_string()))?;
                Ok(token.as_str().to_string())
            }
            Credential::Static(secret) => Ok(secret.expose_secret().to_string()),
        }
    }
}

pub(crate) struct CachedToken {
    token: String,
    expires_at: Instant,
}

impl CachedToken {
    fn new(token: String, ttl: Duration) -> Self {
        Self {
            token,
            expires_at: Instant::now() + ttl - TOKEN_REFRESH_MARGIN,
        }
    }

    fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

pub(crate) type TokenCache = RwLock<Option<CachedToken>>;

pub(crate) fn new_token_cache() -> TokenCache {
    RwLock::new(None)
}

/// Return a cached token, refreshing through the credential when expired.
pub(crate) async fn cached_token(cache: &TokenCache, credential: &Credential) -> Result<String> {
    {
        let cache = cache.read().await;
        if let Some(ref cached) = *cache
            && !cached.is_expired()
        {
            return Ok(cached.token.clone());
        }
    }

    let token = credential.fetch_token().await?;
    *cache.write().await = Some(CachedToken::new(token.clone(), TOKEN_TTL));
    Ok(token)
}
