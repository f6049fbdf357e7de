//! Scripted analyzer for testing.
//!
//! [`MockAnalyzer`] implements [`ImageAnalyzer`] with a queue of canned
//! outcomes, so the reading service can be exercised without a network or a
//! credential. Push results in the order they should be returned; once the
//! queue is empty a fixed default text is served.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU32, AtomicU64, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use crate::error::{Error, Result};
use crate::traits::ImageAnalyzer;

const DEFAULT_TEXT: &str = "A calm and steady week lies ahead.";

/// A mock analyzer with scripted outcomes.
///
/// # Example
///
/// ```
/// use fortuna_client::{ImageAnalyzer, MockAnalyzer};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let mock = MockAnalyzer::new();
/// mock.push_ok("Good fortune awaits.");
///
/// let text = mock.analyze(&[0xFF]).await.unwrap();
/// assert_eq!(text, "Good fortune awaits.");
/// assert_eq!(mock.calls(), 1);
/// # }
/// ```
#[derive(Debug, Default)]
pub struct MockAnalyzer {
    outcomes: Mutex<VecDeque<Result<String>>>,
    calls: AtomicU32,
    /// Simulated analysis latency in milliseconds (0 = no delay).
    latency_ms: AtomicU64,
}

impl MockAnalyzer {
    /// Create a mock with an empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful analysis result.
    pub fn push_ok(&self, text: impl Into<String>) {
        self.outcomes
            .lock()
            .unwrap()
            .push_back(Ok(text.into()));
    }

    /// Queue a failure.
    pub fn push_err(&self, error: Error) {
        self.outcomes.lock().unwrap().push_back(Err(error));
    }

    /// Number of `analyze` calls received so far.
    pub fn calls(&self) -> u32 {
        self.calls.load(Ordering::Relaxed)
    }

    /// Add artificial latency to every `analyze` call, so tests can observe
    /// in-flight state.
    pub fn set_latency_ms(&self, millis: u64) {
        self.latency_ms.store(millis, Ordering::Relaxed);
    }
}

#[async_trait]
impl ImageAnalyzer for MockAnalyzer {
    async fn analyze(&self, _image: &[u8]) -> Result<String> {
        self.calls.fetch_add(1, Ordering::Relaxed);

        let latency = self.latency_ms.load(Ordering::Relaxed);
        if latency > 0 {
            tokio::time::sleep(Duration::from_millis(latency)).await;
        }

        match self.outcomes.lock().unwrap().pop_front() {
            Some(outcome) => outcome,
            None => Ok(DEFAULT_TEXT.to_string()),
        }
    }
}
