//! Environment configuration for the Vertex AI backend.

use std::env;

/// Project, location, and model for Gemini on Vertex AI.
///
/// Read once at startup. Defaults match the documented demo setup:
/// project `mml-general`, location `us-central1`, model `gemini-2.5-flash`.
#[derive(Clone, Debug)]
pub struct VertexConfig {
    pub project_id: String,
    pub location: String,
    pub model: String,
}

pub const DEFAULT_PROJECT_ID: &str = "mml-general";
pub const DEFAULT_LOCATION: &str = "us-central1";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

impl Default for VertexConfig {
    fn default() -> Self {
        Self {
            project_id: DEFAULT_PROJECT_ID.into(),
            location: DEFAULT_LOCATION.into(),
            model: DEFAULT_MODEL.into(),
        }
    }
}

impl VertexConfig {
    /// Read configuration from the environment.
    ///
    /// Project: `GCP_PROJECT_ID`, then `GOOGLE_CLOUD_PROJECT`, then
    /// `GCLOUD_PROJECT`. Location: `GCP_LOCATION`, then `CLOUD_ML_REGION`.
    /// Model: `GEMINI_MODEL`.
    pub fn from_env() -> Self {
        Self {
            project_id: env::var("GCP_PROJECT_ID")
                .or_else(|_| env::var("GOOGLE_CLOUD_PROJECT"))
                .or_else(|_| env::var("GCLOUD_PROJECT"))
                .unwrap_or_else(|_| DEFAULT_PROJECT_ID.into()),
            location: env::var("GCP_LOCATION")
                .or_else(|_| env::var("CLOUD_ML_REGION"))
                .unwrap_or_else(|_| DEFAULT_LOCATION.into()),
            model: env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.into()),
        }
    }

    pub fn with_project(mut self, project_id: impl Into<String>) -> Self {
        self.project_id = project_id.into();
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// The regionless global endpoint is used when location is `global`.
    pub fn is_global(&self) -> bool {
        self.location == "global"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = VertexConfig::default();
        assert_eq!(config.project_id, "mml-general");
        assert_eq!(config.location, "us-central1");
        assert_eq!(config.model, "gemini-2.5-flash");
        assert!(!config.is_global());
    }

    #[test]
    fn test_env_fallback_order() {
        // The environment is process-global, so the whole precedence chain
        // is exercised in one test body.
        let vars = [
            "GCP_PROJECT_ID",
            "GOOGLE_CLOUD_PROJECT",
            "GCLOUD_PROJECT",
            "GCP_LOCATION",
            "CLOUD_ML_REGION",
            "GEMINI_MODEL",
        ];
        for var in vars {
            unsafe { env::remove_var(var) };
        }

        let config = VertexConfig::from_env();
        assert_eq!(config.project_id, DEFAULT_PROJECT_ID);
        assert_eq!(config.location, DEFAULT_LOCATION);
        assert_eq!(config.model, DEFAULT_MODEL);

        // Project: GCLOUD_PROJECT is the last fallback, GCP_PROJECT_ID wins.
        unsafe { env::set_var("GCLOUD_PROJECT", "from-gcloud") };
        assert_eq!(VertexConfig::from_env().project_id, "from-gcloud");
        unsafe { env::set_var("GOOGLE_CLOUD_PROJECT", "from-google-cloud") };
        assert_eq!(VertexConfig::from_env().project_id, "from-google-cloud");
        unsafe { env::set_var("GCP_PROJECT_ID", "from-gcp") };
        assert_eq!(VertexConfig::from_env().project_id, "from-gcp");

        // Location: GCP_LOCATION beats CLOUD_ML_REGION.
        unsafe { env::set_var("CLOUD_ML_REGION", "europe-west1") };
        assert_eq!(VertexConfig::from_env().location, "europe-west1");
        unsafe { env::set_var("GCP_LOCATION", "us-east5") };
        assert_eq!(VertexConfig::from_env().location, "us-east5");

        unsafe { env::set_var("GEMINI_MODEL", "gemini-2.5-pro") };
        assert_eq!(VertexConfig::from_env().model, "gemini-2.5-pro");

        for var in vars {
            unsafe { env::remove_var(var) };
        }
    }

    #[test]
    fn test_builder_overrides() {
        let config = VertexConfig::default()
            .with_project("my-project")
            .with_location("global")
            .with_model("gemini-2.5-pro");
        assert_eq!(config.project_id, "my-project");
        assert!(config.is_global());
        assert_eq!(config.model, "gemini-2.5-pro");
    }
}
