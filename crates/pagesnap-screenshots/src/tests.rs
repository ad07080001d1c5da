//! Integration tests for the capture backend seam

use super::error::ScreenshotError;
use super::mock_provider::MockScreenshotProvider;
use super::provider::ScreenshotProvider;
use super::response::ApiError;
use axum::http::StatusCode;
use std::sync::Arc;
use std::time::Duration;

const DEADLINE: Duration = Duration::from_secs(30);

#[tokio::test]
async fn test_mock_provider_success() {
    let provider = MockScreenshotProvider::returning(vec![1, 2, 3, 4]);

    let result = provider.capture("https://example.com", DEADLINE).await;
    assert!(result.is_ok());
    assert_eq!(result.unwrap(), vec![1, 2, 3, 4]);

    let captured = provider.captured_urls().await;
    assert_eq!(captured.len(), 1);
    assert_eq!(captured[0], "https://example.com");
}

#[tokio::test]
async fn test_mock_provider_failure() {
    let provider = MockScreenshotProvider::failing("Mock failure");

    let result = provider.capture("https://example.com", DEADLINE).await;
    assert!(result.is_err());

    match result.unwrap_err() {
        ScreenshotError::CaptureFailed(msg) => assert_eq!(msg, "Mock failure"),
        e => panic!("Expected CaptureFailed error, got: {:?}", e),
    }
}

#[tokio::test]
async fn test_mock_provider_timeout_carries_deadline() {
    let provider = MockScreenshotProvider::timing_out();

    let result = provider.capture("https://example.com", DEADLINE).await;
    match result.unwrap_err() {
        ScreenshotError::Timeout(deadline) => assert_eq!(deadline, DEADLINE),
        e => panic!("Expected Timeout error, got: {:?}", e),
    }
}

#[tokio::test]
async fn test_mock_provider_multiple_captures() {
    let provider = MockScreenshotProvider::returning(vec![1, 2, 3, 4]);

    let urls = vec![
        "https://example.com",
        "https://test.com",
        "https://demo.com",
    ];

    for url in &urls {
        let result = provider.capture(url, DEADLINE).await;
        assert!(result.is_ok());
    }

    let captured = provider.captured_urls().await;
    assert_eq!(captured.len(), 3);
    assert_eq!(captured, urls);
}

#[tokio::test]
async fn test_mock_provider_concurrent_captures() {
    let provider = Arc::new(MockScreenshotProvider::returning(vec![1, 2, 3]));

    let mut handles = vec![];
    for i in 0..5 {
        let provider_clone = provider.clone();
        let url = format!("https://example-{}.com", i);
        let handle = tokio::spawn(async move { provider_clone.capture(&url, DEADLINE).await });
        handles.push(handle);
    }

    for handle in handles {
        let result = handle.await.unwrap();
        assert!(result.is_ok());
    }

    assert_eq!(provider.capture_count().await, 5);
}

#[tokio::test]
async fn test_hanging_provider_observes_callers_bound() {
    let provider = MockScreenshotProvider::hanging();

    let result = tokio::time::timeout(
        Duration::from_millis(20),
        provider.capture("https://example.com", Duration::from_millis(20)),
    )
    .await;

    // The call never resolves on its own; the caller's bound fires.
    assert!(result.is_err());
    assert_eq!(provider.capture_count().await, 1);
}

#[test]
fn test_error_display() {
    let error = ScreenshotError::CaptureFailed("test".to_string());
    assert!(format!("{}", error).contains("Screenshot capture failed"));

    let error = ScreenshotError::Timeout(DEADLINE);
    assert!(format!("{}", error).contains("bound"));
    assert!(error.is_timeout());

    let error = ScreenshotError::ChromeError("test".to_string());
    assert!(format!("{}", error).contains("Chrome browser error"));
    assert!(!error.is_timeout());
}

#[test]
fn test_api_error_status_mapping() {
    assert_eq!(
        ApiError::MethodNotAllowed.status(),
        StatusCode::METHOD_NOT_ALLOWED
    );
    assert_eq!(ApiError::TokenInvalid.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        ApiError::PayloadInvalid.status(),
        StatusCode::INTERNAL_SERVER_ERROR
    );
    assert_eq!(ApiError::Timeout.status(), StatusCode::GATEWAY_TIMEOUT);
    assert_eq!(
        ApiError::CaptureFailed.status(),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}

#[test]
fn test_api_error_messages_are_verbatim() {
    assert_eq!(ApiError::MethodNotAllowed.message(), "Only POST allowed");
    assert_eq!(ApiError::TokenInvalid.message(), "Token invalid");
    assert_eq!(ApiError::PayloadInvalid.message(), "Payload invalid");
    assert_eq!(
        ApiError::Timeout.message(),
        "Screenshot generation timed out"
    );
    assert_eq!(
        ApiError::CaptureFailed.message(),
        "Failed to capture screenshot"
    );
}
