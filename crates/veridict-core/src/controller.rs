//! The submission state machine.
//!
//! [`SubmissionController`] is the only component allowed to mutate
//! [`SubmissionState`], and it owns the [`InputModel`] it validates against.
//! Everything a rendering layer shows is derived from the state snapshots
//! and toasts pushed to subscribers; the controller itself knows nothing
//! about rendering.

use std::sync::Arc;

use crate::api::{ApiError, ClassificationClient};
use crate::input::{InputModality, InputModel, PendingFile};
use crate::{PredictionResult, ValidationError};

/// The authoritative submission state. Exactly one at a time; all derived
/// UI is a function of this.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionState {
    Idle,
    Submitting,
    Succeeded(PredictionResult),
    Failed(String),
}

impl SubmissionState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }

    /// Succeeded or Failed — a state a new submission may start from.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Succeeded(_) | Self::Failed(_))
    }
}

/// A one-shot user notification. Emitted exactly once per terminal
/// transition, never re-emitted on render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    Success { title: String, description: String },
    Error { title: String, description: String },
}

/// Events pushed to subscribers as transitions happen.
#[derive(Debug, Clone)]
pub enum SubmissionEvent {
    /// The state machine moved; carries the new state.
    StateChanged(SubmissionState),
    /// A toast to surface to the user.
    Toast(Notification),
}

/// The payload handed to a driver once a submission clears validation.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionRequest {
    Text(String),
    File(PendingFile),
}

/// Perform the network half of a submission.
///
/// Drivers that run the exchange on a separate task call this with a clone
/// of the controller's client and feed the outcome back via
/// [`SubmissionController::complete`].
pub async fn dispatch<C: ClassificationClient + ?Sized>(
    client: &C,
    request: &SubmissionRequest,
) -> Result<PredictionResult, ApiError> {
    match request {
        SubmissionRequest::Text(text) => client.classify_text(text).await,
        SubmissionRequest::File(file) => client.classify_file(file).await,
    }
}

type Observer = Box<dyn Fn(&SubmissionEvent) + Send + Sync>;

/// Orchestrates validation → request → result/error transitions, enforcing
/// at most one in-flight request.
pub struct SubmissionController<C> {
    input: InputModel,
    state: SubmissionState,
    client: Arc<C>,
    observers: Vec<Observer>,
}

impl<C: ClassificationClient> SubmissionController<C> {
    pub fn new(client: C) -> Self {
        Self::with_shared_client(Arc::new(client))
    }

    pub fn with_shared_client(client: Arc<C>) -> Self {
        Self {
            input: InputModel::new(),
            state: SubmissionState::Idle,
            client,
            observers: Vec::new(),
        }
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    pub fn input(&self) -> &InputModel {
        &self.input
    }

    /// Mutable access to the input model. All mutation still goes through
    /// the model's own operations; the controller reads it at submit time.
    pub fn input_mut(&mut self) -> &mut InputModel {
        &mut self.input
    }

    /// A clone of the client, for drivers that dispatch on a separate task.
    pub fn client(&self) -> Arc<C> {
        Arc::clone(&self.client)
    }

    /// Register an observer for state changes and toasts.
    pub fn subscribe(&mut self, observer: impl Fn(&SubmissionEvent) + Send + Sync + 'static) {
        self.observers.push(Box::new(observer));
    }

    fn emit(&self, event: SubmissionEvent) {
        for observer in &self.observers {
            observer(&event);
        }
    }

    /// Apply a transition and notify subscribers. Terminal states emit
    /// their toast here, once, at transition time.
    fn transition(&mut self, next: SubmissionState) {
        tracing::debug!(from = ?state_name(&self.state), to = ?state_name(&next), "transition");
        self.state = next;
        self.emit(SubmissionEvent::StateChanged(self.state.clone()));

        match &self.state {
            SubmissionState::Succeeded(_) => {
                let description = match self.input.modality() {
                    InputModality::Text => "Your text has been analyzed successfully.",
                    InputModality::File => "Your file has been analyzed successfully.",
                };
                self.emit(SubmissionEvent::Toast(Notification::Success {
                    title: "Analysis Complete".to_string(),
                    description: description.to_string(),
                }));
            }
            SubmissionState::Failed(message) => {
                self.emit(SubmissionEvent::Toast(Notification::Error {
                    title: "Error".to_string(),
                    description: message.clone(),
                }));
            }
            SubmissionState::Idle | SubmissionState::Submitting => {}
        }
    }

    /// Validate the active modality and, if it passes, enter Submitting and
    /// hand back the request payload.
    ///
    /// Returns `None` in two distinct situations: a request is already in
    /// flight (the call is a guarded no-op — nothing is dispatched, nothing
    /// transitions), or validation failed (the machine went straight to
    /// Failed without touching the network).
    pub fn begin_submit(&mut self) -> Option<SubmissionRequest> {
        if self.state.is_submitting() {
            tracing::debug!("submit ignored: request already in flight");
            return None;
        }

        match self.input.modality() {
            InputModality::Text => {
                if self.input.text().trim().is_empty() {
                    self.transition(SubmissionState::Failed(
                        ValidationError::EmptyText.to_string(),
                    ));
                    return None;
                }
                let text = self.input.text().to_string();
                // Entering Submitting discards the previous result/error.
                self.transition(SubmissionState::Submitting);
                Some(SubmissionRequest::Text(text))
            }
            InputModality::File => match self.input.file() {
                None => {
                    self.transition(SubmissionState::Failed(ValidationError::NoFile.to_string()));
                    None
                }
                Some(file) => {
                    let file = file.clone();
                    self.transition(SubmissionState::Submitting);
                    Some(SubmissionRequest::File(file))
                }
            },
        }
    }

    /// Apply the outcome of the dispatched request.
    ///
    /// Only legal while Submitting; the in-flight guard makes any other
    /// arrival a driver bug, which is logged and dropped rather than
    /// allowed to corrupt the current state.
    pub fn complete(&mut self, outcome: Result<PredictionResult, ApiError>) {
        if !self.state.is_submitting() {
            tracing::warn!("completion arrived outside Submitting; dropped");
            return;
        }
        match outcome {
            Ok(result) => self.transition(SubmissionState::Succeeded(result)),
            Err(err) => {
                let message = self.failure_message(&err);
                self.transition(SubmissionState::Failed(message));
            }
        }
    }

    /// Submit the active modality end to end: validation, the single
    /// network exchange, and the terminal transition.
    pub async fn submit(&mut self) {
        let Some(request) = self.begin_submit() else {
            return;
        };
        let client = Arc::clone(&self.client);
        let outcome = dispatch(client.as_ref(), &request).await;
        self.complete(outcome);
    }

    /// Return to Idle, clearing text, file, and any stored result or error.
    /// The modality selection is preserved. While a request is in flight
    /// this is a no-op: there is no cancellation mechanism, so the state
    /// machine waits for the outcome instead.
    pub fn reset(&mut self) {
        if self.state.is_submitting() {
            tracing::debug!("reset ignored while submitting");
            return;
        }
        self.input.clear();
        self.transition(SubmissionState::Idle);
    }

    fn failure_message(&self, err: &ApiError) -> String {
        let message = err.to_string();
        if message.is_empty() {
            match self.input.modality() {
                InputModality::Text => "Failed to analyze text".to_string(),
                InputModality::File => "Failed to analyze file".to_string(),
            }
        } else {
            message
        }
    }
}

fn state_name(state: &SubmissionState) -> &'static str {
    match state {
        SubmissionState::Idle => "Idle",
        SubmissionState::Submitting => "Submitting",
        SubmissionState::Succeeded(_) => "Succeeded",
        SubmissionState::Failed(_) => "Failed",
    }
}
