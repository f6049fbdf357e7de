//! The Gemini `generateContent` client.

use std::time::Duration;

use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use reqwest::{StatusCode, Url};
use tracing::{debug, info, warn};

use crate::config::{ClientConfig, PROMPT};
use crate::error::{Error, Result};
use crate::protocol::{GenerateRequest, GenerateResponse};
use crate::samples;
use crate::traits::ImageAnalyzer;

/// Explicit per-request timeout. Expiry surfaces as [`Error::Transport`].
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Whether the client talks to the real endpoint or serves canned samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Real network calls against the configured endpoint.
    Live,
    /// No usable API key; a sample fortune is returned without any network
    /// traffic. Distinguishable from network failures by construction.
    Offline,
}

/// HTTP client for the multimodal `generateContent` endpoint.
///
/// One outbound call per [`analyze`](GeminiClient::analyze); no retries, no
/// cancellation of in-flight requests. Cheap to clone.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    config: ClientConfig,
    mode: Mode,
}

impl GeminiClient {
    /// Create a client from configuration.
    ///
    /// An empty or placeholder API key selects [`Mode::Offline`].
    pub fn new(config: ClientConfig) -> Result<Self> {
        let mode = if config.is_offline() {
            info!("no API key configured, serving offline sample fortunes");
            Mode::Offline
        } else {
            Mode::Live
        };

        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(Error::Transport)?;

        Ok(Self { http, config, mode })
    }

    /// Create a client with a custom reqwest client (for tests or custom
    /// transport settings).
    pub fn with_client(config: ClientConfig, http: reqwest::Client) -> Self {
        let mode = if config.is_offline() {
            Mode::Offline
        } else {
            Mode::Live
        };
        Self { http, config, mode }
    }

    /// The client's mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Whether this client serves canned samples instead of calling the
    /// network.
    pub fn is_offline(&self) -> bool {
        self.mode == Mode::Offline
    }

    /// Analyze an image and return the interpretation text.
    ///
    /// Encodes the payload as base64, wraps it with the fixed prompt and
    /// generation parameters, POSTs once, and extracts
    /// `candidates[0].content.parts[0].text` verbatim. Output varies between
    /// calls with identical input; callers must not rely on reproducibility.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidUrl`] if the configured endpoint cannot form a URL
    /// - [`Error::Transport`] on connection failure or timeout
    /// - [`Error::Remote`] on any non-200 status (carries status and body)
    /// - [`Error::Malformed`] when the body lacks the expected shape
    pub async fn analyze(&self, image: &[u8]) -> Result<String> {
        if self.mode == Mode::Offline {
            let fortune = samples::pick();
            debug!("offline mode, returning sample fortune");
            return Ok(fortune.to_string());
        }

        let url = self.request_url()?;
        let request = GenerateRequest::new(PROMPT, BASE64.encode(image), self.config.generation);

        debug!(bytes = image.len(), "requesting image analysis");
        let response = self
            .http
            .post(url)
            .json(&request)
            .send()
            .await
            .map_err(Error::Transport)?;

        let status = response.status();
        let body = response.text().await.map_err(Error::Transport)?;

        if status != StatusCode::OK {
            warn!(status = status.as_u16(), %body, "analysis request rejected");
            return Err(Error::Remote {
                status: status.as_u16(),
                body,
            });
        }

        let decoded: GenerateResponse = serde_json::from_str(&body).map_err(|e| {
            warn!(%body, error = %e, "analysis response is not valid JSON");
            Error::malformed(format!("invalid JSON: {e}"))
        })?;

        match decoded.first_text() {
            Some(text) => Ok(text.to_string()),
            None => {
                warn!(%body, "analysis response misses the expected text path");
                Err(Error::malformed(
                    "missing candidates[0].content.parts[0].text",
                ))
            }
        }
    }

    /// Endpoint plus the API key as a query parameter.
    fn request_url(&self) -> Result<Url> {
        let mut url = Url::parse(&self.config.endpoint)
            .map_err(|e| Error::InvalidUrl(format!("{}: {e}", self.config.endpoint)))?;
        url.query_pairs_mut().append_pair("key", &self.config.api_key);
        Ok(url)
    }
}

#[async_trait]
impl ImageAnalyzer for GeminiClient {
    async fn analyze(&self, image: &[u8]) -> Result<String> {
        GeminiClient::analyze(self, image).await
    }
}
