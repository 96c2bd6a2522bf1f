use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use veridict_core::api::ClassificationClient;

use crate::app::App;
use crate::view::truncate;

/// Render the document upload panel: the selected file, or a drop-zone hint.
pub fn render_in<C: ClassificationClient>(f: &mut Frame, area: Rect, app: &App<C>) {
    let theme = &app.theme;

    let lines: Vec<Line> = match app.input().file() {
        Some(file) => {
            let name = truncate(&file.name, (area.width as usize).saturating_sub(8));
            let size_kb = file.size_bytes as f64 / 1024.0;
            vec![
                Line::from(""),
                Line::from(vec![
                    Span::styled("  \u{1F4C4} ", Style::default().fg(theme.active)),
                    Span::styled(
                        name,
                        Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
                    ),
                ]),
                Line::from(Span::styled(
                    format!("     {size_kb:.1} KB"),
                    Style::default().fg(theme.dim),
                )),
                Line::from(""),
                Line::from(Span::styled(
                    "  s to analyze, d to remove",
                    Style::default().fg(theme.dim),
                )),
            ]
        }
        None => vec![
            Line::from(""),
            Line::from(Span::styled(
                "  No document selected",
                Style::default().fg(theme.dim),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "  Press Enter to browse for a .pdf or .docx file",
                Style::default().fg(theme.text),
            )),
        ],
    };

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border_style())
            .title(" Document "),
    );
    f.render_widget(paragraph, area);
}
