// Layout chrome
// Title header, status line and bindings footer around the tab bar demo

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::config::BindingConfigYaml;

/// Render the title header with borders
pub fn render_title(f: &mut Frame, area: Rect, title: &str) {
    let title_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White));

    let title = Paragraph::new(Line::from(format!(" {}", title)))
        .block(title_block)
        .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    f.render_widget(title, area);
}

/// Render the status bar (dim grey, red when the last action failed)
pub fn render_status_bar(f: &mut Frame, area: Rect, default_text: &str, error: Option<&str>) {
    let (text, color) = match error {
        Some(error) => (format!("Error: {}", error), Color::Red),
        None => (default_text.to_string(), Color::Rgb(0x44, 0x44, 0x44)),
    };
    let status = Paragraph::new(Line::from(text)).style(Style::default().fg(color));
    f.render_widget(status, area);
}

/// Bindings as `key description | key description`
pub fn bindings_line(bindings: &[BindingConfigYaml]) -> Line<'static> {
    let mut spans = Vec::new();
    for (idx, binding) in bindings.iter().enumerate() {
        if idx > 0 {
            spans.push(Span::styled(" | ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(
            binding.key.clone(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(" {}", binding.description),
            Style::default().fg(Color::DarkGray),
        ));
    }
    Line::from(spans)
}

/// Render key bindings (if any)
pub fn render_bindings(f: &mut Frame, area: Rect, bindings: &[BindingConfigYaml]) {
    if bindings.is_empty() || area.width == 0 || area.height == 0 {
        return;
    }
    f.render_widget(Paragraph::new(bindings_line(bindings)), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bindings_line() {
        let bindings = vec![
            BindingConfigYaml { key: "q".to_string(), description: "Quit".to_string() },
            BindingConfigYaml { key: "u".to_string(), description: "Underline".to_string() },
        ];
        let line = bindings_line(&bindings);
        let text: String = line.spans.iter().map(|span| span.content.as_ref()).collect();
        assert_eq!(text, "q Quit | u Underline");
    }
}
