use veridict_core::api::ApiError;
use veridict_core::PredictionResult;

/// Events flowing from spawned network tasks back into the UI loop.
#[derive(Debug)]
pub enum BackendEvent {
    /// The single in-flight classification resolved.
    ClassificationFinished(Result<PredictionResult, ApiError>),
}
