use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};

use veridict_core::api::ClassificationClient;

use crate::app::App;

/// Render the file picker screen into the given area.
pub fn render_in<C: ClassificationClient>(f: &mut Frame, area: Rect, app: &App<C>) {
    let theme = &app.theme;
    let picker = &app.file_picker;

    let chunks = Layout::vertical([
        Constraint::Length(1), // header
        Constraint::Length(1), // current dir
        Constraint::Min(5),    // file list
        Constraint::Length(2), // selection summary
    ])
    .split(area);

    let header = Line::from(vec![
        Span::styled(" Files ", theme.header_style()),
        Span::styled(
            " > Select a document (.pdf / .docx)",
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        ),
    ]);
    f.render_widget(Paragraph::new(header), chunks[0]);

    let dir_line = Line::from(vec![
        Span::styled(" \u{1F4C1} ", Style::default().fg(theme.active)),
        Span::styled(
            picker.current_dir.display().to_string(),
            Style::default().fg(theme.dim),
        ),
    ]);
    f.render_widget(Paragraph::new(dir_line), chunks[1]);

    // File list, scrolled so the cursor stays visible
    let visible_height = chunks[2].height.saturating_sub(2) as usize;
    let scroll_offset = if picker.cursor >= visible_height && visible_height > 0 {
        picker.cursor - visible_height + 1
    } else {
        0
    };

    let items: Vec<ListItem> = picker
        .entries
        .iter()
        .skip(scroll_offset)
        .take(visible_height)
        .map(|entry| {
            let (icon, style) = if entry.is_dir {
                ("\u{1F4C1} ", Style::default().fg(theme.active))
            } else if entry.is_document {
                ("\u{1F4C4} ", Style::default().fg(theme.text))
            } else {
                ("  ", Style::default().fg(theme.dim))
            };
            ListItem::new(Line::from(vec![
                Span::styled(icon, style),
                Span::styled(&entry.name, style),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border_style())
                .title(" Files "),
        )
        .highlight_style(theme.highlight_style());

    let mut state = ListState::default();
    state.select(Some(picker.cursor.saturating_sub(scroll_offset)));
    f.render_stateful_widget(list, chunks[2], &mut state);

    // Selection summary, or the rejection message
    let summary = if let Some(message) = &app.banner {
        Line::from(Span::styled(
            format!(" \u{26A0} {message}"),
            Style::default()
                .fg(theme.error)
                .add_modifier(Modifier::BOLD),
        ))
    } else if let Some(file) = app.input().file() {
        Line::from(vec![
            Span::styled(
                " Selected: ",
                Style::default()
                    .fg(theme.real)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(&file.name, Style::default().fg(theme.text)),
        ])
    } else {
        Line::from(Span::styled(
            " Navigate to a .pdf or .docx file and press Enter",
            Style::default().fg(theme.dim),
        ))
    };
    f.render_widget(
        Paragraph::new(summary).block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(theme.border_style()),
        ),
        chunks[3],
    );
}
