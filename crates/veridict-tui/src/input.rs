use ratatui::crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::action::Action;
use crate::app::{InputMode, Screen};

/// Map a crossterm terminal event to an action, respecting screen and mode.
pub fn map_event(event: &Event, screen: &Screen, input_mode: &InputMode) -> Action {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            // Ctrl+C always quits regardless of mode
            if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                return Action::Quit;
            }

            match screen {
                Screen::FilePicker => map_key_picker(key),
                Screen::Main => match input_mode {
                    InputMode::Normal => map_key_normal(key),
                    InputMode::Editing => map_key_editing(key),
                },
            }
        }
        Event::Resize(w, h) => Action::Resize(*w, *h),
        _ => Action::None,
    }
}

fn map_key_normal(key: &KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Tab => Action::SwitchModality,
        KeyCode::Char('s') => Action::Submit,
        KeyCode::Char('n') => Action::Reset,
        KeyCode::Char('i') | KeyCode::Enter => Action::DrillIn,
        KeyCode::Char('o') => Action::DrillIn,
        KeyCode::Char('d') => Action::RemoveFile,
        KeyCode::Char('?') => Action::ToggleHelp,
        KeyCode::Esc => Action::NavigateBack,
        _ => Action::None,
    }
}

fn map_key_editing(key: &KeyEvent) -> Action {
    // Ctrl+S submits without leaving the editor.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('s') {
        return Action::Submit;
    }
    match key.code {
        KeyCode::Esc => Action::NavigateBack,
        KeyCode::Tab => Action::SwitchModality,
        KeyCode::Enter => Action::Input('\n'),
        KeyCode::Backspace => Action::Input('\x08'), // sentinel for backspace
        KeyCode::Char(c) => Action::Input(c),
        _ => Action::None,
    }
}

fn map_key_picker(key: &KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Char('j') | KeyCode::Down => Action::MoveDown,
        KeyCode::Char('k') | KeyCode::Up => Action::MoveUp,
        KeyCode::Char('g') | KeyCode::Home => Action::GoTop,
        KeyCode::Char('G') | KeyCode::End => Action::GoBottom,
        KeyCode::Enter => Action::DrillIn,
        KeyCode::Esc => Action::NavigateBack,
        KeyCode::Char('?') => Action::ToggleHelp,
        _ => Action::None,
    }
}
