//! Screenshot Provider Trait
//!
//! Defines the interface for capture backends (headless Chrome, test doubles)

use crate::error::ScreenshotResult;
use async_trait::async_trait;
use std::time::Duration;

/// Screenshot provider trait - implement this for different capture backends
#[async_trait]
pub trait ScreenshotProvider: Send + Sync {
    /// Capture a screenshot of the given URL and return the image bytes.
    ///
    /// `deadline` is the upper bound on wall-clock time for the attempt.
    /// Callers also enforce the bound by dropping the returned future;
    /// the explicit deadline exists so implementations can hand it to
    /// blocking sessions that cannot observe the drop.
    async fn capture(&self, url: &str, deadline: Duration) -> ScreenshotResult<Vec<u8>>;

    /// Get the name of this provider (for logging/debugging)
    fn provider_name(&self) -> &'static str;
}
