//! advisor-llm - Gemini-backed assessment client.
//!
//! The only network seam of the system: one prompt in, one structured
//! [`advisor_core::Assessment`] out. The [`provider::AssessmentProvider`]
//! trait is the injection point for test stubs; automated tests never make
//! real calls.

pub mod client;
pub mod error;
pub mod protocol;
pub mod provider;
pub mod schema;

pub use client::GeminiClient;
pub use error::{AssessError, Result};
pub use provider::AssessmentProvider;
pub use schema::{assessment_response_schema, SYSTEM_INSTRUCTION};
