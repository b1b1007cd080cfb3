//! Billing labels for per-tenant cost attribution.
//!
//! Labels attached to a `generateContent` call flow into the Cloud Billing
//! export, where per-tenant spend can be grouped and summed. Label keys and
//! values may only contain lowercase letters, digits, underscores, and
//! hyphens, so tenant identifiers are normalized before use.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Label key carrying the tenant identifier.
pub const TENANT_LABEL_KEY: &str = "tenant_id";

/// Sentinel tenant identifier that suppresses labeling entirely.
pub const NO_LABEL_TENANT: &str = "no-label";

/// Maximum length of a label key or value, per the billing system.
const MAX_LABEL_LEN: usize = 63;

/// Derive a billing label value from a tenant identifier.
///
/// The identifier is lower-cased and every hyphen is replaced with an
/// underscore.
pub fn derive_label_value(tenant_id: &str) -> String {
    tenant_id.to_lowercase().replace('-', "_")
}

/// An ordered key/value mapping attached to an API call for cost allocation.
///
/// Ordered so serialized request bodies are deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Labels(BTreeMap<String, String>);

impl Labels {
    pub fn new() -> Self {
        Self::default()
    }

    /// Labels for a tracked call on behalf of `tenant_id`.
    ///
    /// Returns `None` for the [`NO_LABEL_TENANT`] sentinel; otherwise a
    /// single `tenant_id` entry with the derived value.
    pub fn for_tenant(tenant_id: &str) -> Option<Self> {
        if tenant_id == NO_LABEL_TENANT {
            return None;
        }
        Some(Self::new().with(TENANT_LABEL_KEY, derive_label_value(tenant_id)))
    }

    /// Builder method to add a label.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Check every key and value against the billing-label character rules.
    ///
    /// Keys must be non-empty, start with a lowercase letter, and (like
    /// values) be at most 63 characters of lowercase letters, digits,
    /// underscores, or hyphens.
    pub fn validate(&self) -> Result<()> {
        for (key, value) in &self.0 {
            if key.is_empty() {
                return Err(Error::InvalidRequest("empty label key".into()));
            }
            if !key.chars().next().is_some_and(|c| c.is_ascii_lowercase()) {
                return Err(Error::InvalidRequest(format!(
                    "label key '{key}' must start with a lowercase letter"
                )));
            }
            if key.len() > MAX_LABEL_LEN {
                return Err(Error::InvalidRequest(format!(
                    "label key '{key}' exceeds {MAX_LABEL_LEN} characters"
                )));
            }
            if let Some(c) = key.chars().find(|c| !is_label_char(*c)) {
                return Err(Error::InvalidRequest(format!(
                    "label key '{key}' contains illegal character '{c}'"
                )));
            }
            if value.len() > MAX_LABEL_LEN {
                return Err(Error::InvalidRequest(format!(
                    "label value for '{key}' exceeds {MAX_LABEL_LEN} characters"
                )));
            }
            if let Some(c) = value.chars().find(|c| !is_label_char(*c)) {
                return Err(Error::InvalidRequest(format!(
                    "label value '{value}' contains illegal character '{c}'"
                )));
            }
        }
        Ok(())
    }
}

impl FromIterator<(String, String)> for Labels {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

fn is_label_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_label_value() {
        assert_eq!(derive_label_value("tenant-a"), "tenant_a");
        assert_eq!(derive_label_value("Tenant-B"), "tenant_b");
        assert_eq!(derive_label_value("acme"), "acme");
        assert_eq!(derive_label_value("multi-part-id"), "multi_part_id");
    }

    #[test]
    fn test_for_tenant_derives_value() {
        let labels = Labels::for_tenant("Tenant-A").unwrap();
        assert_eq!(labels.get(TENANT_LABEL_KEY), Some("tenant_a"));
        assert_eq!(labels.len(), 1);
    }

    #[test]
    fn test_sentinel_suppresses_labels() {
        assert!(Labels::for_tenant(NO_LABEL_TENANT).is_none());
    }

    #[test]
    fn test_derived_labels_always_validate() {
        for tenant in ["tenant-a", "TENANT-B", "t3nant-42", "a-b-c-d"] {
            let labels = Labels::for_tenant(tenant).unwrap();
            labels.validate().unwrap();
        }
    }

    #[test]
    fn test_validate_rejects_illegal_characters() {
        let labels = Labels::new().with("tenant_id", "Tenant_A");
        assert!(labels.validate().is_err());

        let labels = Labels::new().with("tenant id", "a");
        assert!(labels.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_keys() {
        assert!(Labels::new().with("", "a").validate().is_err());
        assert!(Labels::new().with("1tenant", "a").validate().is_err());
        assert!(Labels::new().with("_tenant", "a").validate().is_err());

        let long = "a".repeat(64);
        assert!(Labels::new().with(long.clone(), "a").validate().is_err());
        assert!(Labels::new().with("k", long).validate().is_err());
    }

    #[test]
    fn test_multiple_labels() {
        let labels = Labels::new()
            .with(TENANT_LABEL_KEY, "tenant_b")
            .with("environment", "production")
            .with("service", "chatbot");
        labels.validate().unwrap();
        assert_eq!(labels.len(), 3);
        assert_eq!(labels.get("service"), Some("chatbot"));
    }

    #[test]
    fn test_serialization_is_a_plain_map() {
        let labels = Labels::new().with("tenant_id", "tenant_a");
        let json = serde_json::to_value(&labels).unwrap();
        assert_eq!(json, serde_json::json!({"tenant_id": "tenant_a"}));
    }
}
