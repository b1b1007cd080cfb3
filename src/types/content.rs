//! Conversation content types.

use serde::{Deserialize, Serialize};

/// Who produced a piece of content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

/// A single turn of conversation content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl Content {
    /// A user turn with a single text part.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Some(Role::User),
            parts: vec![Part::text(text)],
        }
    }
}

/// One part of a content turn. Only text parts are produced by this crate;
/// other part kinds in responses deserialize with `text: None`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Set on thought-summary parts of thinking models.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thought: Option<bool>,
}

impl Part {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            thought: None,
        }
    }

    /// True for parts that contribute to the visible answer.
    pub fn is_answer_text(&self) -> bool {
        self.text.is_some() && !self.thought.unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_content_serialization() {
        let content = Content::user("Hello");
        let json = serde_json::to_value(&content).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "role": "user",
                "parts": [{"text": "Hello"}]
            })
        );
    }

    #[test]
    fn test_thought_parts_excluded_from_answer() {
        let thought = Part {
            text: Some("internal".into()),
            thought: Some(true),
        };
        assert!(!thought.is_answer_text());
        assert!(Part::text("visible").is_answer_text());
    }

    #[test]
    fn test_partless_content_deserializes() {
        let content: Content = serde_json::from_str(r#"{"role":"model"}"#).unwrap();
        assert!(content.parts.is_empty());
    }
}
