//! Request and Response Wire Types

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of the screenshot capture request
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ScreenshotRequest {
    /// Address of the page to capture. Not validated here; unreachable or
    /// malformed targets surface as capture failures.
    pub url: String,
}

/// Body of every non-success response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub error: String,
}
