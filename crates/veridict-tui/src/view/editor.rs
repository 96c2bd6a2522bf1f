use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use veridict_core::api::ClassificationClient;

use crate::app::{App, InputMode};

/// Render the article text editor.
pub fn render_in<C: ClassificationClient>(f: &mut Frame, area: Rect, app: &App<C>) {
    let theme = &app.theme;
    let editing = app.input_mode == InputMode::Editing && !app.is_submitting();

    let text = app.input().text();
    let char_count = text.chars().count();

    let border_style = if editing {
        Style::default().fg(theme.active)
    } else {
        theme.border_style()
    };

    let title = if editing {
        " Article Text (editing) ".to_string()
    } else {
        " Article Text ".to_string()
    };

    let mut lines: Vec<Line> = if text.is_empty() && !editing {
        vec![Line::from(Span::styled(
            "Paste or type the news article here, then press s to analyze.",
            Style::default().fg(theme.dim),
        ))]
    } else {
        text.split('\n').map(Line::from).collect()
    };

    // Block cursor on the last line while editing
    if editing {
        if let Some(last) = lines.last_mut() {
            last.spans.push(Span::styled(
                "\u{2588}",
                Style::default().fg(theme.active),
            ));
        }
    }

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(title)
                .title_bottom(Line::from(Span::styled(
                    format!(" {char_count} chars "),
                    Style::default().fg(theme.dim).add_modifier(Modifier::DIM),
                ))),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}
