use serde::Deserialize;
use thiserror::Error;

pub mod api;
pub mod controller;
pub mod input;
pub mod verdict;

// Re-export for convenience
pub use api::{ApiError, ClassificationClient, HttpClient};
pub use controller::{
    Notification, SubmissionController, SubmissionEvent, SubmissionRequest, SubmissionState,
};
pub use input::{InputModality, InputModel, PendingFile, validate_filename};
pub use verdict::{DisplayModel, VerdictCategory, present};

/// A classification verdict as returned by the remote service.
///
/// `probability` is stored exactly as received. The service is inconsistent
/// about units — some deployments send a fraction in [0, 1], others a
/// percentage in [0, 100] — and nothing in the payload says which. The
/// ambiguity is resolved at display time by [`verdict::present`], never at
/// ingestion, so the raw value survives intact.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PredictionResult {
    pub label: String,
    pub probability: f64,
}

/// A local input problem. Caught before anything reaches the network.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter some text to analyze")]
    EmptyText,
    #[error("Please select a file to upload")]
    NoFile,
    #[error("unsupported file type")]
    UnsupportedFileType,
}
