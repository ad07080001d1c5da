//! Screenshot Error Types

use std::time::Duration;
use thiserror::Error;

pub type ScreenshotResult<T> = Result<T, ScreenshotError>;

#[derive(Error, Debug)]
pub enum ScreenshotError {
    #[error("Screenshot capture failed: {0}")]
    CaptureFailed(String),

    #[error("Screenshot capture exceeded its {0:?} bound")]
    Timeout(Duration),

    #[error("Chrome browser error: {0}")]
    ChromeError(String),
}

impl ScreenshotError {
    /// Whether this failure is the deadline-exceeded signal, as opposed to
    /// any other capture error. Callers map the two onto different HTTP
    /// outcomes.
    pub fn is_timeout(&self) -> bool {
        matches!(self, ScreenshotError::Timeout(_))
    }
}
