//! Wire types for the Vertex AI `generateContent` endpoint.

mod content;
mod generation;

pub use content::{Content, Part, Role};
pub use generation::{
    Candidate, GenerateContentRequest, GenerateContentResponse, GenerationConfig, PromptFeedback,
    UsageMetadata,
};
