//! Headless Chrome Capture Backend

use async_trait::async_trait;
use headless_chrome::protocol::cdp::Page::CaptureScreenshotFormatOption;
use headless_chrome::{Browser, LaunchOptions};
use std::time::{Duration, Instant};
use tracing::{debug, error, info};

use crate::error::{ScreenshotError, ScreenshotResult};
use crate::provider::ScreenshotProvider;

/// Viewport applied to every capture session
const VIEWPORT_WIDTH: u32 = 400;
/// Viewport applied to every capture session
const VIEWPORT_HEIGHT: u32 = 400;
/// JPEG quality factor for the captured image
const SCREENSHOT_QUALITY: u32 = 80;

/// Capture backend driving headless Chrome.
///
/// Each call launches a fresh browser session and tears it down
/// unconditionally before returning; no state is shared between calls.
pub struct ChromeScreenshotProvider;

impl ChromeScreenshotProvider {
    /// Create a new headless Chrome provider
    pub fn new() -> Self {
        Self
    }
}

impl Default for ChromeScreenshotProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ScreenshotProvider for ChromeScreenshotProvider {
    async fn capture(&self, url: &str, deadline: Duration) -> ScreenshotResult<Vec<u8>> {
        debug!("Capturing screenshot of {} using headless Chrome", url);

        let url = url.to_string();

        // headless_chrome is sync, so the whole session runs on a blocking
        // thread. The deadline becomes the browser's idle timeout: the
        // session dies on its own even after the caller stops waiting.
        tokio::task::spawn_blocking(move || {
            let started = Instant::now();

            match capture_sync(&url, deadline) {
                Ok(image) => {
                    info!("Captured {} ({} bytes)", url, image.len());
                    Ok(image)
                }
                Err(err) if started.elapsed() >= deadline => {
                    error!("Capture of {} ran past its {:?} bound: {}", url, deadline, err);
                    Err(ScreenshotError::Timeout(deadline))
                }
                Err(err) => Err(err),
            }
        })
        .await
        .map_err(|e| {
            error!("Screenshot task panicked: {}", e);
            ScreenshotError::CaptureFailed(format!("Task execution failed: {}", e))
        })?
    }

    fn provider_name(&self) -> &'static str {
        "headless-chrome"
    }
}

/// One full browser session: launch, navigate, capture. The `Browser` drops
/// before this returns on every path, ending the session.
fn capture_sync(url: &str, deadline: Duration) -> ScreenshotResult<Vec<u8>> {
    let options = LaunchOptions::default_builder()
        .headless(true) // Must be headless for server environments
        .sandbox(false) // Disable sandbox for Docker compatibility
        .idle_browser_timeout(deadline)
        .window_size(Some((VIEWPORT_WIDTH, VIEWPORT_HEIGHT)))
        .build()
        .map_err(|e| {
            error!("Failed to build launch options: {}", e);
            ScreenshotError::ChromeError(format!("Failed to build options: {}", e))
        })?;

    let browser = Browser::new(options).map_err(|e| {
        error!("Failed to launch Chrome browser: {}", e);
        ScreenshotError::ChromeError(format!("Failed to launch browser: {}", e))
    })?;

    browser
        .new_tab()
        .map_err(|e| {
            error!("Failed to create new tab: {}", e);
            ScreenshotError::ChromeError(format!("Failed to create tab: {}", e))
        })?
        .navigate_to(url)
        .map_err(|e| {
            error!("Failed to navigate to {}: {}", url, e);
            ScreenshotError::ChromeError(format!("Failed to navigate: {}", e))
        })?
        .wait_until_navigated()
        .map_err(|e| {
            error!("Page navigation timeout for {}: {}", url, e);
            ScreenshotError::ChromeError(format!("Navigation timeout: {}", e))
        })?
        .capture_screenshot(
            CaptureScreenshotFormatOption::Jpeg,
            Some(SCREENSHOT_QUALITY),
            None, // Clip region
            true, // Capture beyond viewport (full page)
        )
        .map_err(|e| {
            error!("Failed to capture screenshot: {}", e);
            ScreenshotError::ChromeError(format!("Screenshot capture failed: {}", e))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_name() {
        let provider = ChromeScreenshotProvider::new();
        assert_eq!(provider.provider_name(), "headless-chrome");
    }
}
