// Tab Button Component
// Draws one tab's icon, title and badge, and tracks the press/release gesture

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
};
use crate::core::{ButtonAppearance, ButtonModel, TabDescriptor};
use crate::utilities::{display_width, truncate_to_width};

/// Pointer gesture progress for a single button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GestureState {
    #[default]
    Idle,
    /// Pointer went down inside the button and has not left it
    Pressed,
}

/// Live view for one tab, keyed by its position in the bar
///
/// Selection, colors, font and inset are pushed in by the container; the
/// button never changes them on its own.
#[derive(Debug, Clone)]
pub struct TabButton {
    index: usize,
    descriptor: TabDescriptor,
    selected: bool,
    appearance: ButtonAppearance,
    gesture: GestureState,
}

impl TabButton {
    pub fn new(index: usize, descriptor: TabDescriptor, appearance: ButtonAppearance) -> Self {
        Self {
            index,
            descriptor,
            selected: false,
            appearance,
            gesture: GestureState::Idle,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn descriptor(&self) -> &TabDescriptor {
        &self.descriptor
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn appearance(&self) -> &ButtonAppearance {
        &self.appearance
    }

    /// Dimmed while a press is in progress
    pub fn is_highlighted(&self) -> bool {
        self.gesture == GestureState::Pressed
    }

    pub(crate) fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    pub(crate) fn set_appearance(&mut self, appearance: ButtonAppearance) {
        self.appearance = appearance;
    }

    /// Pointer went down on this button
    pub fn press(&mut self) {
        self.gesture = GestureState::Pressed;
    }

    /// Pointer was dragged off the button; the pending activation is dropped
    pub fn drag_exit(&mut self) {
        self.gesture = GestureState::Idle;
    }

    /// Pointer released. Yields this button's index if the press completes
    /// inside the button, at most once per press.
    pub fn release(&mut self, inside: bool) -> Option<usize> {
        let pressed = self.gesture == GestureState::Pressed;
        self.gesture = GestureState::Idle;
        (pressed && inside).then_some(self.index)
    }

    pub fn model(&self, x: u16, width: u16) -> ButtonModel {
        ButtonModel::derive(
            self.index,
            &self.descriptor,
            self.selected,
            &self.appearance,
            x,
            width,
        )
    }

    /// Draw the button's content into `area` (the bar's rows minus the underline)
    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        let model = self.model(area.x, area.width);
        self.render_model(&model, area, buf);
    }

    /// Draw an already derived model, adding this button's live highlight
    pub fn render_model(&self, model: &ButtonModel, area: Rect, buf: &mut Buffer) {
        render_button(model, self.is_highlighted(), area, buf);
    }
}

fn render_button(model: &ButtonModel, highlighted: bool, area: Rect, buf: &mut Buffer) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let highlight = if highlighted { Modifier::DIM } else { Modifier::empty() };
    let tint = Style::default().fg(model.tint).add_modifier(highlight);

    // Icon above title, stacked and centered vertically
    let rows = model.icon.is_some() as u16 + model.title.is_some() as u16;
    let top = area.y + area.height.saturating_sub(rows) / 2;
    let mut row = top;

    let mut icon_end = None;
    if let Some(icon) = &model.icon {
        let icon_area_x = area.x + model.icon_inset.min(area.width / 2);
        let icon_area_width = area.width.saturating_sub(model.icon_inset.saturating_mul(2));
        let glyph_width = display_width(icon);
        let x = icon_area_x + icon_area_width.saturating_sub(glyph_width) / 2;
        if row < area.bottom() {
            buf.set_stringn(x, row, icon, area.right().saturating_sub(x) as usize, tint);
        }
        icon_end = Some(x + glyph_width);
        row += 1;
    }

    if let Some(title) = &model.title {
        let title = truncate_to_width(title, area.width);
        let title_width = display_width(&title);
        let x = area.x + (area.width - title_width) / 2;
        if row < area.bottom() {
            let style = tint.add_modifier(model.title_modifier);
            buf.set_stringn(x, row, &title, area.right().saturating_sub(x) as usize, style);
        }
    }

    // Badge hangs off the icon's trailing edge, or the button's when there is no icon
    if let Some(badge) = &model.badge {
        let max_x = area.right().saturating_sub(badge.width).max(area.x);
        let x = icon_end.unwrap_or(max_x).min(max_x);
        let style = Style::default()
            .fg(badge.text_color)
            .bg(badge.color)
            .add_modifier(Modifier::BOLD | highlight);
        buf.set_stringn(x, top, badge.label(), area.right().saturating_sub(x) as usize, style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;

    fn row_text(buf: &Buffer, y: u16) -> String {
        (buf.area.x..buf.area.right())
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_press_release_inside_activates_once() {
        let mut button = TabButton::new(2, TabDescriptor::new("Profile"), ButtonAppearance::default());
        button.press();
        assert!(button.is_highlighted());
        assert_eq!(button.release(true), Some(2));
        assert!(!button.is_highlighted());
        assert_eq!(button.release(true), None);
    }

    #[test]
    fn test_drag_out_cancels_activation() {
        let mut button = TabButton::new(0, TabDescriptor::new("Home"), ButtonAppearance::default());
        button.press();
        button.drag_exit();
        assert!(!button.is_highlighted());
        assert_eq!(button.release(true), None);
    }

    #[test]
    fn test_release_outside_does_not_activate() {
        let mut button = TabButton::new(1, TabDescriptor::new("Search"), ButtonAppearance::default());
        button.press();
        assert_eq!(button.release(false), None);
    }

    #[test]
    fn test_selected_swaps_tint() {
        let appearance = ButtonAppearance {
            selected_color: Color::Cyan,
            unselected_color: Color::Gray,
            ..ButtonAppearance::default()
        };
        let mut button = TabButton::new(0, TabDescriptor::new("Home"), appearance);
        assert_eq!(button.model(0, 10).tint, Color::Gray);

        button.set_selected(true);
        assert_eq!(button.model(0, 10).tint, Color::Cyan);
    }

    #[test]
    fn test_render_icon_and_title_stacked() {
        let descriptor = TabDescriptor::new("Home").with_icon("⌂");
        let button = TabButton::new(0, descriptor, ButtonAppearance::default());
        let area = Rect::new(0, 0, 10, 2);
        let mut buf = Buffer::empty(area);
        button.render(area, &mut buf);

        assert_eq!(row_text(&buf, 0), "    ⌂     ");
        assert_eq!(row_text(&buf, 1), "   Home   ");
    }

    #[test]
    fn test_render_badge_after_icon() {
        let descriptor = TabDescriptor::new("Inbox").with_icon("✉").with_badge("3");
        let appearance = ButtonAppearance {
            badge_color: Color::Red,
            badge_text_color: Color::White,
            ..ButtonAppearance::default()
        };
        let button = TabButton::new(0, descriptor, appearance);
        let area = Rect::new(0, 0, 11, 2);
        let mut buf = Buffer::empty(area);
        button.render(area, &mut buf);

        assert_eq!(row_text(&buf, 0), "     ✉ 3   ");
        assert_eq!(buf[(6, 0)].bg, Color::Red);
        assert_eq!(buf[(7, 0)].fg, Color::White);
    }

    #[test]
    fn test_render_badge_without_icon_at_trailing_edge() {
        let descriptor = TabDescriptor::new("Feed").with_badge("9");
        let button = TabButton::new(0, descriptor, ButtonAppearance::default());
        let area = Rect::new(0, 0, 12, 1);
        let mut buf = Buffer::empty(area);
        button.render(area, &mut buf);

        assert_eq!(row_text(&buf, 0), "    Feed  9 ");
    }

    #[test]
    fn test_hidden_title_renders_icon_only() {
        let descriptor = TabDescriptor::new("Home").with_icon("⌂").with_hidden_title(true);
        let button = TabButton::new(0, descriptor, ButtonAppearance::default());
        let area = Rect::new(0, 0, 5, 1);
        let mut buf = Buffer::empty(area);
        button.render(area, &mut buf);

        assert_eq!(row_text(&buf, 0), "  ⌂  ");
    }

    #[test]
    fn test_long_title_truncated() {
        let button = TabButton::new(0, TabDescriptor::new("Settings"), ButtonAppearance::default());
        let area = Rect::new(0, 0, 5, 1);
        let mut buf = Buffer::empty(area);
        button.render(area, &mut buf);

        assert_eq!(row_text(&buf, 0), "Setti");
    }

    #[test]
    fn test_wide_title_stays_in_its_slot() {
        let button = TabButton::new(0, TabDescriptor::new("日本語"), ButtonAppearance::default());
        let area = Rect::new(0, 0, 4, 1);
        let mut buf = Buffer::empty(Rect::new(0, 0, 8, 1));
        button.render(area, &mut buf);

        assert_eq!(buf[(0, 0)].symbol(), "日");
        assert_eq!(buf[(2, 0)].symbol(), "本");
        assert_eq!(row_text(&buf, 0).trim_end(), "日 本");
        assert!(!row_text(&buf, 0).contains('語'));
    }

    #[test]
    fn test_wide_icon_centered_by_cells() {
        let descriptor = TabDescriptor::new("Cal").with_icon("📅");
        let button = TabButton::new(0, descriptor, ButtonAppearance::default());
        let area = Rect::new(0, 0, 6, 2);
        let mut buf = Buffer::empty(area);
        button.render(area, &mut buf);

        assert_eq!(buf[(2, 0)].symbol(), "📅");
        assert_eq!(row_text(&buf, 1), " Cal  ");
    }

    #[test]
    fn test_highlight_dims_content() {
        let mut button = TabButton::new(0, TabDescriptor::new("Home"), ButtonAppearance::default());
        button.press();
        let area = Rect::new(0, 0, 6, 1);
        let mut buf = Buffer::empty(area);
        button.render(area, &mut buf);

        assert!(buf[(1, 0)].modifier.contains(Modifier::DIM));
    }
}
