//! HTTP transport for the training signup form.
//!
//! [`HttpSubmitter`] implements [`signup_core::Submitter`] by posting the
//! payload as JSON to `{base_url}/api/submit`. One call is one request: no
//! retries, no backoff, and no timeout unless one is configured.
//!
//! # Example
//!
//! ```rust,no_run
//! use signup_client::{ClientConfig, HttpSubmitter};
//! use signup_core::{LeadForm, Variant};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let submitter = HttpSubmitter::new(ClientConfig::from_env())?;
//! let mut form = LeadForm::new(Variant::Team, None);
//! form.state_mut().set_name("Pieter Jansen");
//! let status = form.submit(&submitter).await?;
//! println!("{status:?}");
//! # Ok(())
//! # }
//! ```

mod client;
mod error;

pub use client::HttpSubmitter;
pub use error::ClientError;

use std::time::Duration;

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:3000";
const USER_AGENT: &str = concat!("signup-client/", env!("CARGO_PKG_VERSION"));

/// Configuration for [`HttpSubmitter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Site base URL. Default: `http://127.0.0.1:3000`.
    pub base_url: String,
    /// Request timeout. Default: none (transport default).
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: None,
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `SIGNUP_BASE_URL` — site base URL (default: `http://127.0.0.1:3000`)
    /// - `SIGNUP_TIMEOUT_SECS` — request timeout in seconds (default: unset;
    ///   `0` or an unparsable value also means unset)
    #[must_use]
    pub fn from_env() -> Self {
        let base_url = std::env::var("SIGNUP_BASE_URL")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_owned());

        let timeout = std::env::var("SIGNUP_TIMEOUT_SECS")
            .ok()
            .as_deref()
            .and_then(parse_timeout_secs);

        Self { base_url, timeout }
    }
}

/// Parse a timeout in whole seconds. `0` means no timeout.
#[must_use]
pub fn parse_timeout_secs(value: &str) -> Option<Duration> {
    value
        .trim()
        .parse::<u64>()
        .ok()
        .filter(|secs| *secs > 0)
        .map(Duration::from_secs)
}
