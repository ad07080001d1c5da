//! Provider-level tests
//!
//! Exercises the capture backend seam through the trait object, the way the
//! handler consumes it.

use pagesnap_screenshots::{
    ChromeScreenshotProvider, MockOutcome, MockScreenshotProvider, ScreenshotError,
    ScreenshotProvider,
};
use std::sync::Arc;
use std::time::Duration;

const DEADLINE: Duration = Duration::from_secs(30);

#[tokio::test]
async fn test_chrome_provider_creation() {
    let provider = ChromeScreenshotProvider::new();
    assert_eq!(provider.provider_name(), "headless-chrome");
}

#[tokio::test]
async fn test_providers_are_interchangeable_behind_the_trait() {
    let providers: Vec<Arc<dyn ScreenshotProvider>> = vec![
        Arc::new(ChromeScreenshotProvider::new()),
        Arc::new(MockScreenshotProvider::returning(vec![1, 2, 3])),
    ];

    let names: Vec<&str> = providers.iter().map(|p| p.provider_name()).collect();
    assert_eq!(names, vec!["headless-chrome", "mock"]);
}

#[tokio::test]
async fn test_mock_outcome_scripting() {
    let success = MockScreenshotProvider::new(MockOutcome::Succeed(vec![9, 9]));
    assert_eq!(
        success.capture("https://example.com", DEADLINE).await.unwrap(),
        vec![9, 9]
    );

    let failure = MockScreenshotProvider::new(MockOutcome::Fail("boom".to_string()));
    match failure.capture("https://example.com", DEADLINE).await {
        Err(ScreenshotError::CaptureFailed(msg)) => assert_eq!(msg, "boom"),
        other => panic!("Expected CaptureFailed, got: {:?}", other),
    }

    let timeout = MockScreenshotProvider::new(MockOutcome::Timeout);
    let err = timeout
        .capture("https://example.com", DEADLINE)
        .await
        .unwrap_err();
    assert!(err.is_timeout());
}

#[tokio::test]
async fn test_dropping_the_capture_future_cancels_it() {
    let provider = Arc::new(MockScreenshotProvider::hanging());

    {
        let fut = provider.capture("https://example.com", DEADLINE);
        // Poll once so the call is recorded, then drop the future.
        let _ = tokio::time::timeout(Duration::from_millis(10), fut).await;
    }

    assert_eq!(provider.capture_count().await, 1);
}
