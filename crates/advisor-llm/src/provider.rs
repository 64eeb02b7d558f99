use async_trait::async_trait;

use crate::error::Result;
use advisor_core::Assessment;

/// The seam between the application and the external assessment service.
///
/// One invocation corresponds to exactly one upstream request; callers are
/// responsible for keeping at most one submission in flight (see
/// `advisor_core::AdvisorSession`).
#[async_trait]
pub trait AssessmentProvider: Send + Sync {
    /// Submit an assembled setup prompt and return the parsed assessment.
    ///
    /// Any transport, authentication, or contract failure surfaces as a
    /// single error value; no partially-initialized assessment is ever
    /// returned.
    async fn assess(&self, prompt: &str) -> Result<Assessment>;
}
