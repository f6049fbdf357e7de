//! Remote image analysis client for the fortuna reading service.
//!
//! This crate turns a raw JPEG payload into a natural-language fortune
//! interpretation by calling a single multimodal generation endpoint
//! (Gemini `generateContent`). It provides:
//!
//! - [`GeminiClient`] - the HTTP client, one attempt per call, explicit
//!   request timeout, no retries
//! - [`ClientConfig`] / [`GenerationConfig`] - endpoint, API key, and the
//!   fixed generation parameters
//! - [`ImageAnalyzer`] - the trait seam the reading service consumes, so
//!   tests can substitute a [`MockAnalyzer`]
//! - an offline demo mode that returns a canned sample fortune when no
//!   usable API key is configured
//!
//! # Example
//!
//! ```no_run
//! use fortuna_client::{ClientConfig, GeminiClient};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = GeminiClient::new(ClientConfig::default())?;
//! assert!(client.is_offline()); // no API key configured
//!
//! let fortune = client.analyze(&[0xFF, 0xD8, 0xFF]).await?;
//! println!("{fortune}");
//! # Ok(())
//! # }
//! ```

mod client;
mod config;
mod error;
mod mock;
mod protocol;
mod samples;
mod traits;

pub use client::{GeminiClient, Mode, REQUEST_TIMEOUT};
pub use config::{ClientConfig, GenerationConfig, DEFAULT_ENDPOINT, KEY_PLACEHOLDER};
pub use error::{Error, Result};
pub use mock::MockAnalyzer;
pub use traits::ImageAnalyzer;
