//! Pagesnap Screenshot Service
//!
//! Captures web pages as compressed images behind an authenticated HTTP
//! endpoint. The capture backend is pluggable: headless Chrome in
//! production, a scriptable double in tests.

pub mod chrome_provider;
pub mod error;
pub mod handler;
pub mod mock_provider;
pub mod provider;
pub mod response;
pub mod types;

pub use chrome_provider::ChromeScreenshotProvider;
pub use error::{ScreenshotError, ScreenshotResult};
pub use handler::{capture_screenshot, configure_routes, AppState, ScreenshotApiDoc, CAPTURE_TIMEOUT};
pub use mock_provider::{MockOutcome, MockScreenshotProvider};
pub use provider::ScreenshotProvider;
pub use response::{ApiError, ScreenshotImage};
pub use types::{ErrorResponse, ScreenshotRequest};

#[cfg(test)]
mod tests;
