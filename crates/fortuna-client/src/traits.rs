//! The analyzer trait seam.

use async_trait::async_trait;

use crate::error::Result;

/// Anything that can turn an image into an interpretation text.
///
/// Implemented by [`crate::GeminiClient`] for the real endpoint and by
/// [`crate::MockAnalyzer`] for tests, allowing the reading service to be
/// exercised without a network.
#[async_trait]
pub trait ImageAnalyzer: Send + Sync {
    /// Analyze a raw image payload and return the interpretation text.
    async fn analyze(&self, image: &[u8]) -> Result<String>;
}
