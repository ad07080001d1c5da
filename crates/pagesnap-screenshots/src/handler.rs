//! Screenshot Capture Endpoint
//!
//! The single HTTP entry point: validates method and bearer token, decodes
//! the request body, delegates to the configured capture backend under a
//! fixed time bound, and classifies the outcome into an HTTP response.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, HeaderMap, Method};
use axum::response::{IntoResponse, Response};
use axum::routing::any;
use axum::Router;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info};
use utoipa::OpenApi;

use crate::provider::ScreenshotProvider;
use crate::response::{ApiError, ScreenshotImage};
use crate::types::{ErrorResponse, ScreenshotRequest};

/// Upper bound on a single capture attempt. Fixed and caller-independent.
pub const CAPTURE_TIMEOUT: Duration = Duration::from_secs(30);

/// Shared state for the screenshot endpoint.
///
/// The capture backend is injected at construction; substituting a test
/// double means building a different state, never mutating a global.
pub struct AppState {
    provider: Arc<dyn ScreenshotProvider>,
    auth_token: String,
    capture_timeout: Duration,
}

impl AppState {
    /// Create state with the given backend and expected bearer token
    pub fn new(provider: Arc<dyn ScreenshotProvider>, auth_token: impl Into<String>) -> Self {
        Self {
            provider,
            auth_token: auth_token.into(),
            capture_timeout: CAPTURE_TIMEOUT,
        }
    }

    /// Override the capture bound. Production keeps [`CAPTURE_TIMEOUT`];
    /// tests use this to exercise the timeout path without waiting it out.
    pub fn with_capture_timeout(mut self, timeout: Duration) -> Self {
        self.capture_timeout = timeout;
        self
    }

    /// Name of the active capture backend
    pub fn provider_name(&self) -> &'static str {
        self.provider.provider_name()
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(capture_screenshot),
    components(schemas(ScreenshotRequest, ErrorResponse)),
    info(
        title = "Pagesnap API",
        description = "Captures web pages as compressed images behind a bearer-authenticated endpoint.",
        version = "1.0.0"
    )
)]
pub struct ScreenshotApiDoc;

/// Build the router for the screenshot endpoint.
///
/// Registered with `any` so non-POST methods reach the handler and receive
/// its 405 body instead of axum's default method rejection.
pub fn configure_routes() -> Router<Arc<AppState>> {
    Router::new().route("/screenshot", any(capture_screenshot))
}

#[utoipa::path(
    tag = "Screenshots",
    post,
    path = "/screenshot",
    request_body = ScreenshotRequest,
    responses(
        (status = 200, description = "Captured page returned as a PNG attachment", content_type = "image/png"),
        (status = 401, description = "Bearer token did not match", body = ErrorResponse),
        (status = 405, description = "Request method was not POST", body = ErrorResponse),
        (status = 500, description = "Payload could not be decoded, or the capture failed", body = ErrorResponse),
        (status = 504, description = "Capture exceeded its time bound", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn capture_screenshot(
    State(state): State<Arc<AppState>>,
    method: Method,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    if method != Method::POST {
        return ApiError::MethodNotAllowed.into_response();
    }

    let auth_header = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();
    let presented = auth_header.strip_prefix("Bearer ").unwrap_or(auth_header);

    if presented != state.auth_token {
        return ApiError::TokenInvalid.into_response();
    }

    let request: ScreenshotRequest = match serde_json::from_slice(&body) {
        Ok(request) => request,
        Err(err) => {
            debug!("Rejecting undecodable payload: {}", err);
            return ApiError::PayloadInvalid.into_response();
        }
    };

    debug!("Dispatching capture of {}", request.url);

    let capture = state.provider.capture(&request.url, state.capture_timeout);

    // The timeout is the bounded execution context: when it fires, or when
    // the client disconnects, the capture future is dropped.
    match tokio::time::timeout(state.capture_timeout, capture).await {
        Ok(Ok(image)) => {
            info!("Captured {} ({} bytes)", request.url, image.len());
            ScreenshotImage(image).into_response()
        }
        Ok(Err(err)) if err.is_timeout() => {
            error!("Capture of {} timed out: {}", request.url, err);
            ApiError::Timeout.into_response()
        }
        Ok(Err(err)) => {
            error!("Capture of {} failed: {}", request.url, err);
            ApiError::CaptureFailed.into_response()
        }
        Err(_) => {
            error!(
                "Capture of {} exceeded its {:?} bound",
                request.url, state.capture_timeout
            );
            ApiError::Timeout.into_response()
        }
    }
}
