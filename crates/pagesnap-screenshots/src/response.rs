//! HTTP Response Encoding
//!
//! Maps capture outcomes onto HTTP responses: failures become a JSON object
//! with a single "error" field, success becomes the raw image bytes served
//! as a file download. Exactly one response is written per request.

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::types::ErrorResponse;

/// Error categories exposed to callers.
///
/// The messages are part of the service's compatibility surface; clients
/// match them verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiError {
    /// Request method was not POST
    MethodNotAllowed,
    /// Bearer token did not match the configured token
    TokenInvalid,
    /// Request body could not be decoded
    PayloadInvalid,
    /// Capture exceeded its time bound
    Timeout,
    /// Capture failed for any other reason
    CaptureFailed,
}

impl ApiError {
    /// HTTP status code for this category
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::TokenInvalid => StatusCode::UNAUTHORIZED,
            ApiError::PayloadInvalid => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Timeout => StatusCode::GATEWAY_TIMEOUT,
            ApiError::CaptureFailed => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message returned to the caller, verbatim
    pub fn message(&self) -> &'static str {
        match self {
            ApiError::MethodNotAllowed => "Only POST allowed",
            ApiError::TokenInvalid => "Token invalid",
            ApiError::PayloadInvalid => "Payload invalid",
            ApiError::Timeout => "Screenshot generation timed out",
            ApiError::CaptureFailed => "Failed to capture screenshot",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.message().to_string(),
        };

        (self.status(), Json(body)).into_response()
    }
}

/// Successful capture: raw image bytes served as a PNG attachment
pub struct ScreenshotImage(pub Vec<u8>);

impl IntoResponse for ScreenshotImage {
    fn into_response(self) -> Response {
        (
            [
                (header::CONTENT_TYPE, "image/png"),
                (
                    header::CONTENT_DISPOSITION,
                    r#"attachment; filename="screenshot.png""#,
                ),
            ],
            self.0,
        )
            .into_response()
    }
}
