use veridict_core::api::mock::{MockClient, MockResponse};
use veridict_core::{InputModality, PendingFile, PredictionResult, SubmissionState};

use crate::action::Action;
use crate::theme::Theme;
use crate::tui_event::BackendEvent;

use super::{App, InputMode, Screen};

fn app() -> App<MockClient> {
    App::new(MockClient::new(MockResponse::predict("Real", 0.92)), Theme::hacker())
}

fn type_text(app: &mut App<MockClient>, text: &str) {
    for ch in text.chars() {
        app.update(Action::Input(ch));
    }
}

#[test]
fn starts_in_text_mode_editing() {
    let app = app();
    assert_eq!(app.input().modality(), InputModality::Text);
    assert_eq!(app.input_mode, InputMode::Editing);
    assert!(matches!(app.submission(), SubmissionState::Idle));
}

#[test]
fn typed_characters_land_in_the_editor() {
    let mut app = app();
    type_text(&mut app, "breaking");
    app.update(Action::Input('\x08'));
    assert_eq!(app.input().text(), "breakin");
}

#[test]
fn switching_modality_changes_input_mode() {
    let mut app = app();
    app.update(Action::SwitchModality);
    assert_eq!(app.input().modality(), InputModality::File);
    assert_eq!(app.input_mode, InputMode::Normal);
    app.update(Action::SwitchModality);
    assert_eq!(app.input().modality(), InputModality::Text);
    assert_eq!(app.input_mode, InputMode::Editing);
}

#[test]
fn submitting_empty_text_shows_the_validation_banner() {
    let mut app = app();
    app.update(Action::Submit);
    assert!(app.take_pending_request().is_none());
    assert_eq!(app.banner.as_deref(), Some("Please enter some text to analyze"));
    assert_eq!(app.toasts.len(), 1);
}

#[test]
fn submit_hands_a_request_to_the_main_loop_and_freezes_editing() {
    let mut app = app();
    type_text(&mut app, "some article");
    app.update(Action::Submit);
    assert!(app.is_submitting());
    assert!(app.take_pending_request().is_some());

    // Keystrokes are ignored while the request is in flight.
    app.update(Action::Input('x'));
    assert_eq!(app.input().text(), "some article");
}

#[test]
fn second_submit_while_in_flight_is_ignored() {
    let mut app = app();
    type_text(&mut app, "some article");
    app.update(Action::Submit);
    assert!(app.take_pending_request().is_some());
    app.update(Action::Submit);
    assert!(app.take_pending_request().is_none());
}

#[test]
fn successful_completion_populates_the_result_card() {
    let mut app = app();
    type_text(&mut app, "some article");
    app.update(Action::Submit);
    app.on_backend_event(BackendEvent::ClassificationFinished(Ok(PredictionResult {
        label: "Real".into(),
        probability: 0.92,
    })));

    let display = app.display.as_ref().expect("display model");
    assert_eq!(display.percentage_text, "92.0%");
    assert!(app.banner.is_none());
    // One toast for the success notification.
    assert_eq!(app.toasts.len(), 1);
}

#[test]
fn failed_completion_shows_the_banner_and_no_result() {
    let mut app = app();
    type_text(&mut app, "some article");
    app.update(Action::Submit);
    app.on_backend_event(BackendEvent::ClassificationFinished(Err(
        veridict_core::api::ApiError::Status(500),
    )));

    assert_eq!(app.banner.as_deref(), Some("API error: 500"));
    assert!(app.display.is_none());
}

#[test]
fn reset_clears_the_result_and_returns_to_idle() {
    let mut app = app();
    type_text(&mut app, "some article");
    app.update(Action::Submit);
    app.on_backend_event(BackendEvent::ClassificationFinished(Ok(PredictionResult {
        label: "Fake".into(),
        probability: 87.3,
    })));
    app.update(Action::Reset);

    assert!(matches!(app.submission(), SubmissionState::Idle));
    assert!(app.display.is_none());
    assert_eq!(app.input().text(), "");
}

#[test]
fn picker_rejects_unsupported_files_and_stays_open() {
    let mut app = app();
    app.update(Action::SwitchModality);
    app.screen = Screen::FilePicker;
    app.file_picker.entries = vec![super::FileEntry {
        name: "malware.exe".into(),
        path: "/tmp/malware.exe".into(),
        is_dir: false,
        is_document: false,
        size_bytes: 10,
    }];
    app.file_picker.cursor = 0;

    app.update(Action::DrillIn);
    assert_eq!(app.screen, Screen::FilePicker);
    assert_eq!(app.banner.as_deref(), Some("unsupported file type"));
    assert!(app.input().file().is_none());
}

#[test]
fn picker_accepts_a_document_and_returns_to_main() {
    let mut app = app();
    app.update(Action::SwitchModality);
    app.screen = Screen::FilePicker;
    app.file_picker.entries = vec![super::FileEntry {
        name: "report.pdf".into(),
        path: "/tmp/report.pdf".into(),
        is_dir: false,
        is_document: true,
        size_bytes: 2048,
    }];
    app.file_picker.cursor = 0;

    app.update(Action::DrillIn);
    assert_eq!(app.screen, Screen::Main);
    assert_eq!(app.input().file().map(|f| f.name.as_str()), Some("report.pdf"));
}

#[test]
fn remove_file_clears_the_selection() {
    let mut app = app();
    app.update(Action::SwitchModality);
    app.controller
        .input_mut()
        .select_file(PendingFile {
            name: "report.pdf".into(),
            size_bytes: 1,
            path: "/tmp/report.pdf".into(),
        })
        .unwrap();

    app.update(Action::RemoveFile);
    assert!(app.input().file().is_none());
}

#[test]
fn toasts_expire_after_their_ttl() {
    let mut app = app();
    app.update(Action::Submit); // validation error toast
    assert_eq!(app.toasts.len(), 1);
    for _ in 0..super::TOAST_TTL_TICKS {
        app.update(Action::Tick);
    }
    assert!(app.toasts.is_empty());
}

#[test]
fn help_overlay_swallows_other_actions() {
    let mut app = app();
    app.update(Action::ToggleHelp);
    assert!(app.show_help);
    app.update(Action::SwitchModality);
    assert_eq!(app.input().modality(), InputModality::Text);
    app.update(Action::ToggleHelp);
    assert!(!app.show_help);
}
