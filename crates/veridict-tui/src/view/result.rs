use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use veridict_core::DisplayModel;
use veridict_core::api::ClassificationClient;

use crate::app::App;

/// Render the verdict card for a completed analysis.
pub fn render_in<C: ClassificationClient>(
    f: &mut Frame,
    area: Rect,
    app: &App<C>,
    display: &DisplayModel,
) {
    let theme = &app.theme;
    let color = theme.category_color(display.category);

    let bar_width = (area.width as usize).saturating_sub(6).max(10);
    // `fill` is deliberately unclamped; a service value past 100% draws a
    // bar that runs into the right border and is clipped there.
    let filled = ((display.fill * bar_width as f64).round() as usize).min(bar_width * 2);
    let empty = bar_width.saturating_sub(filled);
    let bar = "\u{2588}".repeat(filled) + &"\u{2591}".repeat(empty);

    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::raw("  "),
            Span::styled(
                format!("{} {}", display.category.glyph(), display.label),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("  Confidence: ", Style::default().fg(theme.text)),
            Span::styled(
                display.percentage_text.clone(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::raw("  "),
            Span::styled(bar, Style::default().fg(color)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "  Model verdict for the submitted content.",
            Style::default().fg(theme.dim),
        )),
        Line::from(Span::styled(
            "  Press n to analyze another article.",
            Style::default().fg(theme.dim),
        )),
    ];

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
            .title(" Result "),
    );
    f.render_widget(paragraph, area);
}
