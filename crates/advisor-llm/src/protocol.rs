//! Google Gemini wire format.
//!
//! Gemini's `generateContent` API has its own shape:
//! - Messages are called "contents"
//! - Role is "user" or "model" (not "assistant")
//! - Content is an array of "parts"
//! - System instructions are separate from messages
//!
//! # Example request
//! ```json
//! {
//!   "contents": [
//!     {"role": "user", "parts": [{"text": "Analyze..."}]}
//!   ],
//!   "systemInstruction": {
//!     "role": "system",
//!     "parts": [{"text": "You are a CFD advisor"}]
//!   },
//!   "generationConfig": {
//!     "responseMimeType": "application/json",
//!     "responseSchema": {...}
//!   }
//! }
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::schema::{assessment_response_schema, SYSTEM_INSTRUCTION};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeminiRequest {
    pub contents: Vec<GeminiContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<GeminiContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiContent {
    /// "user" or "model"
    pub role: String,
    pub parts: Vec<GeminiPart>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiPart {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Constrains the response to a JSON payload matching a schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub response_mime_type: String,
    pub response_schema: Value,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeminiResponse {
    #[serde(default)]
    pub candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeminiCandidate {
    pub content: GeminiContent,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

impl GeminiContent {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            parts: vec![GeminiPart {
                text: Some(text.into()),
            }],
        }
    }

    fn system(text: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            parts: vec![GeminiPart {
                text: Some(text.into()),
            }],
        }
    }
}

impl GeminiRequest {
    /// The fixed-shape assessment request: one user turn carrying the
    /// assembled prompt, the advisor system instruction, and the strict
    /// response schema.
    pub fn for_assessment(prompt: &str) -> Self {
        Self {
            contents: vec![GeminiContent::user(prompt)],
            system_instruction: Some(GeminiContent::system(SYSTEM_INSTRUCTION)),
            generation_config: Some(GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: assessment_response_schema(),
            }),
        }
    }
}

impl GeminiResponse {
    /// Concatenated text of the first candidate, if any.
    pub fn text(&self) -> Option<String> {
        let candidate = self.candidates.first()?;
        let text: String = candidate
            .content
            .parts
            .iter()
            .filter_map(|part| part.text.as_deref())
            .collect();
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }
}
