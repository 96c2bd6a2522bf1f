pub mod editor;
pub mod file_picker;
pub mod help;
pub mod result;
pub mod toast;
pub mod upload;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use veridict_core::InputModality;
use veridict_core::api::ClassificationClient;

use crate::app::{App, InputMode, Screen};

/// Spinner frames for animated progress indication.
const SPINNER_FRAMES: &[char] = &[
    '\u{280B}', '\u{2819}', '\u{2839}', '\u{2838}', '\u{283C}', '\u{2834}', '\u{2826}', '\u{2827}',
    '\u{2807}', '\u{280F}',
];

/// Get the current spinner character based on a tick counter.
pub fn spinner_char(tick: usize) -> char {
    SPINNER_FRAMES[tick % SPINNER_FRAMES.len()]
}

/// Truncate a string to fit in `max_width` columns, appending "\u{2026}" if truncated.
pub fn truncate(s: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }
    if s.len() <= max_width {
        return s.to_string();
    }
    let mut truncated: String = s.chars().take(max_width.saturating_sub(1)).collect();
    truncated.push('\u{2026}');
    truncated
}

/// Top-level render: header, body for the current screen, footer, overlays.
pub fn view<C: ClassificationClient>(f: &mut Frame, app: &App<C>) {
    let chunks = Layout::vertical([
        Constraint::Length(1), // header
        Constraint::Min(8),    // body
        Constraint::Length(1), // footer
    ])
    .split(f.area());

    render_header(f, chunks[0], app);

    match app.screen {
        Screen::Main => render_main(f, chunks[1], app),
        Screen::FilePicker => file_picker::render_in(f, chunks[1], app),
    }

    render_footer(f, chunks[2], app);

    toast::render(f, app);
    if app.show_help {
        help::render(f, &app.theme);
    }
}

fn render_header<C: ClassificationClient>(f: &mut Frame, area: Rect, app: &App<C>) {
    let theme = &app.theme;
    let mut spans = vec![
        Span::styled(" Veridict ", theme.header_style()),
        Span::styled(
            " Fake News Detector",
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        ),
    ];
    if app.is_submitting() {
        spans.push(Span::styled(
            format!("  {} analyzing...", spinner_char(app.tick)),
            Style::default().fg(theme.spinner),
        ));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_main<C: ClassificationClient>(f: &mut Frame, area: Rect, app: &App<C>) {
    let has_banner = app.banner.is_some();

    let mut constraints = vec![Constraint::Length(1)]; // tabs
    if has_banner {
        constraints.push(Constraint::Length(1));
    }
    constraints.push(Constraint::Min(6)); // content

    let chunks = Layout::vertical(constraints).split(area);
    let mut chunk_idx = 0;

    render_tabs(f, chunks[chunk_idx], app);
    chunk_idx += 1;

    if let Some(message) = &app.banner {
        let line = Line::from(Span::styled(
            format!(" \u{26A0} {message}"),
            Style::default()
                .fg(app.theme.error)
                .add_modifier(Modifier::BOLD),
        ));
        f.render_widget(Paragraph::new(line), chunks[chunk_idx]);
        chunk_idx += 1;
    }

    let content = chunks[chunk_idx];
    if let Some(display) = &app.display {
        result::render_in(f, content, app, display);
    } else {
        match app.input().modality() {
            InputModality::Text => editor::render_in(f, content, app),
            InputModality::File => upload::render_in(f, content, app),
        }
    }
}

fn render_tabs<C: ClassificationClient>(f: &mut Frame, area: Rect, app: &App<C>) {
    let theme = &app.theme;
    let active = app.input().modality();

    let tab = |modality: InputModality| -> Span<'static> {
        let label = format!(" [ {} ] ", modality.label());
        if modality == active {
            Span::styled(
                label,
                Style::default()
                    .fg(theme.active)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled(label, Style::default().fg(theme.dim))
        }
    };

    let line = Line::from(vec![
        Span::raw(" "),
        tab(InputModality::Text),
        tab(InputModality::File),
        Span::styled("  Tab to switch", Style::default().fg(theme.dim)),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

fn render_footer<C: ClassificationClient>(f: &mut Frame, area: Rect, app: &App<C>) {
    let theme = &app.theme;

    let text = match app.screen {
        Screen::FilePicker => " j/k:navigate  Enter:open/select  Esc:back  ?:help  q:quit",
        Screen::Main => {
            if app.display.is_some() {
                " n:analyze another  Tab:switch  ?:help  q:quit"
            } else {
                match app.input_mode {
                    InputMode::Editing => {
                        " Ctrl+S:analyze  Esc:done editing  Tab:switch  Ctrl+C:quit"
                    }
                    InputMode::Normal => match app.input().modality() {
                        InputModality::Text => {
                            " s:analyze  i/Enter:edit  Tab:switch  n:clear  ?:help  q:quit"
                        }
                        InputModality::File => {
                            " s:analyze  Enter:browse  d:remove  Tab:switch  n:clear  ?:help  q:quit"
                        }
                    },
                }
            }
        }
    };

    f.render_widget(
        Paragraph::new(Line::from(Span::styled(text, theme.footer_style()))),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::truncate;

    #[test]
    fn truncate_appends_ellipsis() {
        assert_eq!(truncate("breaking news", 8), "breakin\u{2026}");
        assert_eq!(truncate("short", 8), "short");
        assert_eq!(truncate("anything", 0), "");
    }
}
