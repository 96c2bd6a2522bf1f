//! Mock classification client for tests.

use std::future::Future;
use std::pin::Pin;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use super::{ApiError, ClassificationClient};
use crate::{PendingFile, PredictionResult};

/// A configurable mock response for [`MockClient`].
#[derive(Clone, Debug)]
pub enum MockResponse {
    /// Simulate a successful prediction.
    Predict { label: String, probability: f64 },
    /// Simulate a non-success status carrying a structured `detail` message.
    ServiceError(String),
    /// Simulate a non-success status with no usable body.
    Status(u16),
}

impl MockResponse {
    pub fn predict(label: &str, probability: f64) -> Self {
        Self::Predict {
            label: label.to_string(),
            probability,
        }
    }

    fn into_outcome(self) -> Result<PredictionResult, ApiError> {
        match self {
            Self::Predict { label, probability } => Ok(PredictionResult { label, probability }),
            Self::ServiceError(detail) => Err(ApiError::Service(detail)),
            Self::Status(code) => Err(ApiError::Status(code)),
        }
    }
}

/// A hand-rolled mock implementing [`ClassificationClient`] for tests.
///
/// Supports:
/// - A fixed response (used for every call), **or**
/// - A sequence of responses (one per call, repeating the last if exhausted).
/// - Optional per-call latency.
/// - Per-modality call counting.
pub struct MockClient {
    /// If non-empty, each call pops the next response.
    responses: Mutex<Vec<MockResponse>>,
    /// Fallback when the sequence is exhausted (or single-response mode).
    fallback: MockResponse,
    delay: Option<Duration>,
    text_calls: AtomicUsize,
    file_calls: AtomicUsize,
}

impl MockClient {
    /// Create a mock that always returns `response`.
    pub fn new(response: MockResponse) -> Self {
        Self {
            responses: Mutex::new(Vec::new()),
            fallback: response,
            delay: None,
            text_calls: AtomicUsize::new(0),
            file_calls: AtomicUsize::new(0),
        }
    }

    /// Create a mock that returns responses in order, repeating the last one.
    pub fn with_sequence(mut responses: Vec<MockResponse>) -> Self {
        assert!(
            !responses.is_empty(),
            "sequence must have at least one response"
        );
        // Reverse so we can pop() from the front cheaply.
        responses.reverse();
        let fallback = responses.first().cloned().unwrap();
        Self {
            responses: Mutex::new(responses),
            fallback,
            delay: None,
            text_calls: AtomicUsize::new(0),
            file_calls: AtomicUsize::new(0),
        }
    }

    /// Set simulated network latency per call.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn text_calls(&self) -> usize {
        self.text_calls.load(Ordering::SeqCst)
    }

    pub fn file_calls(&self) -> usize {
        self.file_calls.load(Ordering::SeqCst)
    }

    /// Total calls across both modalities.
    pub fn call_count(&self) -> usize {
        self.text_calls() + self.file_calls()
    }

    fn next_response(&self) -> MockResponse {
        let mut seq = self.responses.lock().unwrap();
        seq.pop().unwrap_or_else(|| self.fallback.clone())
    }

    fn respond(
        &self,
        counter: &AtomicUsize,
    ) -> Pin<Box<dyn Future<Output = Result<PredictionResult, ApiError>> + Send + '_>> {
        counter.fetch_add(1, Ordering::SeqCst);
        let response = self.next_response();
        let delay = self.delay;

        Box::pin(async move {
            if let Some(d) = delay {
                tokio::time::sleep(d).await;
            }
            response.into_outcome()
        })
    }
}

impl ClassificationClient for MockClient {
    fn classify_text<'a>(
        &'a self,
        _text: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<PredictionResult, ApiError>> + Send + 'a>> {
        self.respond(&self.text_calls)
    }

    fn classify_file<'a>(
        &'a self,
        _file: &'a PendingFile,
    ) -> Pin<Box<dyn Future<Output = Result<PredictionResult, ApiError>> + Send + 'a>> {
        self.respond(&self.file_calls)
    }
}
