//! Scriptable Screenshot Provider
//!
//! A capture backend that returns configured outcomes without any external
//! process. Used to substitute the real browser in tests.

use async_trait::async_trait;
use std::time::Duration;
use tokio::sync::Mutex;

use crate::error::{ScreenshotError, ScreenshotResult};
use crate::provider::ScreenshotProvider;

/// Outcome a [`MockScreenshotProvider`] is scripted to produce.
pub enum MockOutcome {
    /// Return these bytes
    Succeed(Vec<u8>),
    /// Fail with a generic capture error
    Fail(String),
    /// Report that the deadline was exceeded
    Timeout,
    /// Never complete, exercising the caller's bound
    Hang,
}

/// Scriptable capture backend recording every URL it is asked for
pub struct MockScreenshotProvider {
    outcome: MockOutcome,
    captured_urls: Mutex<Vec<String>>,
}

impl MockScreenshotProvider {
    /// Create a provider scripted with the given outcome
    pub fn new(outcome: MockOutcome) -> Self {
        Self {
            outcome,
            captured_urls: Mutex::new(Vec::new()),
        }
    }

    /// Provider that succeeds with the given bytes on every call
    pub fn returning(bytes: Vec<u8>) -> Self {
        Self::new(MockOutcome::Succeed(bytes))
    }

    /// Provider that fails every call with the given message
    pub fn failing(message: impl Into<String>) -> Self {
        Self::new(MockOutcome::Fail(message.into()))
    }

    /// Provider that reports the deadline as exceeded on every call
    pub fn timing_out() -> Self {
        Self::new(MockOutcome::Timeout)
    }

    /// Provider that never completes a call
    pub fn hanging() -> Self {
        Self::new(MockOutcome::Hang)
    }

    /// URLs this provider has been asked to capture, in call order
    pub async fn captured_urls(&self) -> Vec<String> {
        self.captured_urls.lock().await.clone()
    }

    /// Number of capture calls received
    pub async fn capture_count(&self) -> usize {
        self.captured_urls.lock().await.len()
    }
}

#[async_trait]
impl ScreenshotProvider for MockScreenshotProvider {
    async fn capture(&self, url: &str, deadline: Duration) -> ScreenshotResult<Vec<u8>> {
        self.captured_urls.lock().await.push(url.to_string());

        match &self.outcome {
            MockOutcome::Succeed(bytes) => Ok(bytes.clone()),
            MockOutcome::Fail(message) => Err(ScreenshotError::CaptureFailed(message.clone())),
            MockOutcome::Timeout => Err(ScreenshotError::Timeout(deadline)),
            MockOutcome::Hang => std::future::pending().await,
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEADLINE: Duration = Duration::from_secs(30);

    #[tokio::test]
    async fn test_mock_provider_name() {
        let provider = MockScreenshotProvider::returning(vec![1, 2, 3]);
        assert_eq!(provider.provider_name(), "mock");
    }

    #[tokio::test]
    async fn test_scripted_timeout_is_distinguishable() {
        let provider = MockScreenshotProvider::timing_out();

        let result = provider.capture("https://example.com", DEADLINE).await;
        match result {
            Err(err) => assert!(err.is_timeout()),
            Ok(_) => panic!("Expected timeout error"),
        }
    }
}
