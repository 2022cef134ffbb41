// Content rendering
// Panel above the tab bar describing the current selection

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tab_bar_components::TabBarPresentable;

use crate::core::App;

/// Lines describing the selected tab and the recent selection events
pub fn content_lines(app: &App) -> Vec<Line<'static>> {
    let tab_bar = app.tab_bar();
    let label = Style::default().fg(Color::DarkGray);
    let value = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);

    let (title, identifier) = match tab_bar.selected_descriptor() {
        Some(descriptor) => (
            descriptor.title().to_string(),
            descriptor.identifier().unwrap_or("-").to_string(),
        ),
        None => ("(no tabs)".to_string(), "-".to_string()),
    };

    let mut lines = vec![
        Line::from(vec![Span::styled("Selected:   ", label), Span::styled(title, value)]),
        Line::from(vec![Span::styled("Identifier: ", label), Span::styled(identifier, value)]),
        Line::from(""),
        Line::from(Span::styled("Recent selections", label.add_modifier(Modifier::UNDERLINED))),
    ];

    let selections = app.recent_selections();
    if selections.is_empty() {
        lines.push(Line::from(Span::styled("  none yet", label)));
    }
    for event in selections.iter().rev() {
        lines.push(Line::from(format!(
            "  #{} {}",
            event.index,
            event.identifier.as_deref().unwrap_or("-")
        )));
    }
    lines
}

/// Render main content box
pub fn render_content(f: &mut Frame, area: Rect, app: &App) {
    let content_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White));

    f.render_widget(Paragraph::new(content_lines(app)).block(content_block), area);
}
