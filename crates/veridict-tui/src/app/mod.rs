mod file_picker;
mod update;

pub use file_picker::{FileEntry, FilePickerState};

use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::mpsc;

use veridict_core::api::ClassificationClient;
use veridict_core::{
    DisplayModel, InputModel, Notification, PendingFile, SubmissionController, SubmissionEvent,
    SubmissionRequest, SubmissionState, ValidationError, present,
};

use crate::theme::Theme;
use crate::tui_event::BackendEvent;

/// Which screen is currently displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Main,
    FilePicker,
}

/// Input mode determines how keyboard input is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    /// Keystrokes go into the article editor.
    Editing,
}

/// How long a toast stays visible, in ticks (tick rate is 100ms).
const TOAST_TTL_TICKS: usize = 40;

/// A transient notification with its birth tick.
#[derive(Debug, Clone)]
pub struct Toast {
    pub notification: Notification,
    born: usize,
}

/// Main application state. The submission controller lives here, so every
/// transition happens on the event-loop thread; only the network exchange
/// itself runs on a spawned task.
pub struct App<C: ClassificationClient> {
    pub screen: Screen,
    pub input_mode: InputMode,
    controller: SubmissionController<C>,
    /// Controller events arrive here synchronously during controller calls.
    events_rx: mpsc::UnboundedReceiver<SubmissionEvent>,
    /// Display model derived from the latest Succeeded state.
    pub display: Option<DisplayModel>,
    /// Inline error banner: the Failed message or a local validation error.
    pub banner: Option<String>,
    pub toasts: Vec<Toast>,
    /// A request the main loop must hand to a network task.
    pending_request: Option<SubmissionRequest>,
    pub file_picker: FilePickerState,
    pub theme: Theme,
    pub tick: usize,
    pub should_quit: bool,
    pub show_help: bool,
}

impl<C: ClassificationClient> App<C> {
    pub fn new(client: C, theme: Theme) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut controller = SubmissionController::new(client);
        controller.subscribe(move |evt| {
            let _ = tx.send(evt.clone());
        });

        Self {
            screen: Screen::Main,
            input_mode: InputMode::Editing,
            controller,
            events_rx: rx,
            display: None,
            banner: None,
            toasts: Vec::new(),
            pending_request: None,
            file_picker: FilePickerState::new(),
            theme,
            tick: 0,
            should_quit: false,
            show_help: false,
        }
    }

    pub fn submission(&self) -> &SubmissionState {
        self.controller.state()
    }

    pub fn input(&self) -> &InputModel {
        self.controller.input()
    }

    pub fn is_submitting(&self) -> bool {
        self.controller.state().is_submitting()
    }

    pub fn client(&self) -> Arc<C> {
        self.controller.client()
    }

    /// The request produced by the last accepted submit, if the main loop
    /// has not collected it yet.
    pub fn take_pending_request(&mut self) -> Option<SubmissionRequest> {
        self.pending_request.take()
    }

    /// Pre-select a file passed on the command line.
    pub fn seed_file(&mut self, path: PathBuf) -> Result<(), ValidationError> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());
        let size_bytes = std::fs::metadata(&path).map(|m| m.len()).unwrap_or(0);
        self.controller
            .input_mut()
            .set_modality(veridict_core::InputModality::File);
        self.input_mode = InputMode::Normal;
        self.controller.input_mut().select_file(PendingFile {
            name,
            size_bytes,
            path,
        })
    }

    /// Apply a network-task completion.
    pub fn on_backend_event(&mut self, event: BackendEvent) {
        match event {
            BackendEvent::ClassificationFinished(outcome) => {
                self.controller.complete(outcome);
                self.drain_controller_events();
            }
        }
    }

    /// Pull queued controller events into view state. The subscription fires
    /// synchronously inside controller calls, so this drains fully every
    /// time it runs.
    pub(crate) fn drain_controller_events(&mut self) {
        while let Ok(event) = self.events_rx.try_recv() {
            match event {
                SubmissionEvent::StateChanged(state) => match state {
                    SubmissionState::Succeeded(result) => {
                        self.display = Some(present(&result));
                        self.banner = None;
                        // The result card replaces the editor; drop out of
                        // editing so stray keystrokes don't mutate hidden text.
                        self.input_mode = InputMode::Normal;
                    }
                    SubmissionState::Failed(message) => {
                        self.banner = Some(message);
                        self.display = None;
                    }
                    SubmissionState::Submitting | SubmissionState::Idle => {
                        self.display = None;
                        self.banner = None;
                    }
                },
                SubmissionEvent::Toast(notification) => {
                    self.toasts.push(Toast {
                        notification,
                        born: self.tick,
                    });
                }
            }
        }
    }

    fn expire_toasts(&mut self) {
        let tick = self.tick;
        self.toasts
            .retain(|t| tick.wrapping_sub(t.born) < TOAST_TTL_TICKS);
    }
}

#[cfg(test)]
mod tests;
