use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use veridict_core::Notification;
use veridict_core::api::ClassificationClient;

use crate::app::App;

const TOAST_WIDTH: u16 = 40;
const TOAST_HEIGHT: u16 = 4;

/// Render active toasts stacked in the top-right corner.
pub fn render<C: ClassificationClient>(f: &mut Frame, app: &App<C>) {
    let area = f.area();
    if area.width < TOAST_WIDTH + 2 {
        return;
    }
    let theme = &app.theme;
    let x = area.width - TOAST_WIDTH - 1;

    for (i, toast) in app.toasts.iter().enumerate() {
        let y = 1 + (i as u16) * TOAST_HEIGHT;
        if y + TOAST_HEIGHT > area.height {
            break;
        }
        let rect = Rect::new(x, y, TOAST_WIDTH, TOAST_HEIGHT);

        let (title, description, accent) = match &toast.notification {
            Notification::Success { title, description } => (title, description, theme.real),
            Notification::Error { title, description } => (title, description, theme.error),
        };

        let body = Paragraph::new(Line::from(Span::styled(
            description.clone(),
            Style::default().fg(theme.text),
        )))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(accent))
                .title(Span::styled(
                    format!(" {title} "),
                    Style::default().fg(accent).add_modifier(Modifier::BOLD),
                )),
        )
        .wrap(Wrap { trim: true });

        f.render_widget(Clear, rect);
        f.render_widget(body, rect);
    }
}
