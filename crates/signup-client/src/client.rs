//! `reqwest` implementation of the submission transport.

use reqwest::Url;
use tracing::debug;

use signup_core::submit::SUBMIT_PATH;
use signup_core::{SubmissionPayload, SubmitResponse, Submitter, TransportError};

use crate::{ClientConfig, ClientError, USER_AGENT};

/// Posts submissions to `{base_url}/api/submit`.
#[derive(Debug, Clone)]
pub struct HttpSubmitter {
    endpoint: String,
    client: reqwest::Client,
}

impl HttpSubmitter {
    /// Build a submitter from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidBaseUrl`] if the base URL is not an
    /// absolute http(s) URL, or [`ClientError::Build`] if the HTTP client
    /// cannot be created.
    #[allow(clippy::needless_pass_by_value)]
    pub fn new(cfg: ClientConfig) -> Result<Self, ClientError> {
        let base_url = cfg.base_url.trim().trim_end_matches('/').to_owned();
        let parsed = Url::parse(&base_url).map_err(|e| ClientError::InvalidBaseUrl {
            url: cfg.base_url.clone(),
            reason: e.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ClientError::InvalidBaseUrl {
                url: cfg.base_url.clone(),
                reason: format!("unsupported scheme '{}'", parsed.scheme()),
            });
        }

        let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = cfg.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            endpoint: format!("{base_url}{SUBMIT_PATH}"),
            client,
        })
    }

    /// Full URL submissions are posted to.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait::async_trait]
impl Submitter for HttpSubmitter {
    async fn submit(&self, payload: &SubmissionPayload) -> Result<SubmitResponse, TransportError> {
        // `json` sets `Content-Type: application/json`.
        let result = self.client.post(&self.endpoint).json(payload).send().await;

        match result {
            Ok(resp) => {
                let status = resp.status().as_u16();
                debug!(endpoint = %self.endpoint, status, "submit endpoint responded");
                Ok(SubmitResponse { status })
            }
            Err(e) if e.is_timeout() => Err(TransportError::Timeout {
                url: self.endpoint.clone(),
            }),
            Err(e) if e.is_builder() || e.is_body() => Err(TransportError::Encode {
                reason: e.to_string(),
            }),
            Err(e) => Err(TransportError::Unreachable {
                url: self.endpoint.clone(),
                reason: e.to_string(),
            }),
        }
    }
}
