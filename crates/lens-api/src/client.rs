//! HTTP client for the analysis service.
//!
//! Two calls only: `GET /health` and multipart `POST /analyze`.  No retries,
//! no timeout, no cancellation — a hung request is resolved by the transport
//! or not at all.

use reqwest::multipart;
use thiserror::Error;

use crate::protocol::{AnalysisResult, ErrorBody, HealthReport};

/// Errors from the analysis service or the transport under it.
///
/// `Display` yields exactly the text the UI shows: the service's `detail`
/// message (or the `HTTP <status>` fallback) for service errors, the
/// transport error text otherwise.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Non-2xx response.  `detail` is the body's `detail` field when it
    /// parses, `"HTTP <status>"` when it doesn't.
    #[error("{detail}")]
    Service { status: u16, detail: String },
    /// Request never produced a response.
    #[error("{0}")]
    Transport(String),
}

pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Probe `GET /health`.  Failure is non-fatal to the caller; it only
    /// drives a toast.
    pub async fn health(&self) -> Result<HealthReport, ApiError> {
        let url = format!("{}/health", self.base_url);
        tracing::debug!("health probe: {}", url);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Service {
                status: status.as_u16(),
                detail: format!("HTTP {}", status.as_u16()),
            });
        }

        response
            .json::<HealthReport>()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))
    }

    /// Submit an image for analysis: multipart POST with the payload under
    /// the `file` field.
    pub async fn analyze(
        &self,
        file_name: &str,
        mime: &str,
        bytes: Vec<u8>,
    ) -> Result<AnalysisResult, ApiError> {
        let url = format!("{}/analyze", self.base_url);
        tracing::info!("analyze: {} ({} bytes, {})", url, bytes.len(), mime);

        let part = multipart::Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str(mime)
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let form = multipart::Form::new().part("file", part);

        let response = self
            .http
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|b| b.detail)
                .unwrap_or_else(|| format!("HTTP {}", status.as_u16()));
            tracing::warn!("analyze failed: {} — {}", status, detail);
            return Err(ApiError::Service {
                status: status.as_u16(),
                detail,
            });
        }

        response
            .json::<AnalysisResult>()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_error_displays_detail() {
        let err = ApiError::Service {
            status: 500,
            detail: "model unavailable".to_string(),
        };
        assert_eq!(err.to_string(), "model unavailable");
    }

    #[test]
    fn status_fallback_message_shape() {
        let err = ApiError::Service {
            status: 502,
            detail: format!("HTTP {}", 502),
        };
        assert_eq!(err.to_string(), "HTTP 502");
    }

    #[test]
    fn transport_error_displays_message() {
        let err = ApiError::Transport("connection refused".to_string());
        assert_eq!(err.to_string(), "connection refused");
    }
}
