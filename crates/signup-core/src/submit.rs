//! The seam between the form and whatever delivers the payload.

use crate::error::TransportError;
use crate::payload::SubmissionPayload;

/// Path the form posts to, relative to the site's base URL.
pub const SUBMIT_PATH: &str = "/api/submit";

/// What came back from the endpoint. The body is never inspected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitResponse {
    pub status: u16,
}

impl SubmitResponse {
    /// Whether the status is in the 2xx range.
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Delivers one submission.
///
/// Implementations send exactly one request per call: no retries, no
/// deduplication.
#[async_trait::async_trait]
pub trait Submitter: Send + Sync {
    /// Send the payload and report the HTTP status.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] when no response was received.
    async fn submit(&self, payload: &SubmissionPayload) -> Result<SubmitResponse, TransportError>;
}
