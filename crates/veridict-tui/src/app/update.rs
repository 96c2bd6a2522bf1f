use veridict_core::{InputModality, PendingFile};

use crate::action::Action;

use super::{App, InputMode, Screen};
use veridict_core::api::ClassificationClient;

impl<C: ClassificationClient> App<C> {
    /// Advance the application by one action. Returns true when the app
    /// should exit.
    pub fn update(&mut self, action: Action) -> bool {
        match action {
            Action::Quit => {
                self.should_quit = true;
                return true;
            }
            Action::Tick => {
                self.tick = self.tick.wrapping_add(1);
                self.expire_toasts();
                return false;
            }
            Action::Resize(_, _) | Action::None => return false,
            _ => {}
        }

        if self.show_help {
            if matches!(action, Action::ToggleHelp | Action::NavigateBack) {
                self.show_help = false;
            }
            return false;
        }
        if matches!(action, Action::ToggleHelp) {
            self.show_help = true;
            return false;
        }

        match self.screen {
            Screen::Main => self.update_main(action),
            Screen::FilePicker => self.update_picker(action),
        }
        false
    }

    fn update_main(&mut self, action: Action) {
        match action {
            Action::SwitchModality => {
                if self.is_submitting() {
                    return;
                }
                let next = self.input().modality().toggled();
                self.controller.input_mut().set_modality(next);
                self.input_mode = match next {
                    InputModality::Text => InputMode::Editing,
                    InputModality::File => InputMode::Normal,
                };
            }
            Action::Input(ch) => {
                if self.input_mode == InputMode::Editing && !self.is_submitting() {
                    if ch == '\x08' {
                        self.controller.input_mut().pop_char();
                    } else {
                        self.controller.input_mut().push_char(ch);
                    }
                }
            }
            Action::NavigateBack => {
                self.input_mode = InputMode::Normal;
            }
            Action::Submit => {
                if let Some(request) = self.controller.begin_submit() {
                    self.pending_request = Some(request);
                }
                self.drain_controller_events();
            }
            Action::Reset => {
                self.controller.reset();
                self.drain_controller_events();
                // "Analyze another": refocus the editor on the text tab.
                if !self.is_submitting() && self.input().modality() == InputModality::Text {
                    self.input_mode = InputMode::Editing;
                }
            }
            Action::DrillIn => match self.input().modality() {
                InputModality::Text => {
                    if !self.is_submitting() {
                        self.input_mode = InputMode::Editing;
                    }
                }
                InputModality::File => {
                    if !self.is_submitting() {
                        self.file_picker.refresh_entries();
                        self.screen = Screen::FilePicker;
                    }
                }
            },
            Action::RemoveFile => {
                if self.input().modality() == InputModality::File && !self.is_submitting() {
                    self.controller.input_mut().remove_file();
                    self.banner = None;
                }
            }
            _ => {}
        }
    }

    fn update_picker(&mut self, action: Action) {
        match action {
            Action::MoveUp => self.file_picker.move_up(),
            Action::MoveDown => self.file_picker.move_down(),
            Action::GoTop => self.file_picker.go_top(),
            Action::GoBottom => self.file_picker.go_bottom(),
            Action::DrillIn => {
                let Some(entry) = self.file_picker.entry_under_cursor().cloned() else {
                    return;
                };
                if entry.is_dir {
                    self.file_picker.enter_directory();
                    return;
                }
                let file = PendingFile {
                    name: entry.name,
                    size_bytes: entry.size_bytes,
                    path: entry.path,
                };
                // A rejected file keeps the picker open so another choice
                // can be made; the previous selection is untouched.
                match self.controller.input_mut().select_file(file) {
                    Ok(()) => {
                        self.banner = None;
                        self.screen = Screen::Main;
                        self.input_mode = InputMode::Normal;
                    }
                    Err(err) => {
                        self.banner = Some(err.to_string());
                    }
                }
            }
            Action::NavigateBack => {
                self.screen = Screen::Main;
            }
            _ => {}
        }
    }
}
