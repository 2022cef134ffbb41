// Tab Bar Component
// Row of equally sized tab buttons with an animated underline under the selected tab

use std::time::Instant;

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
    Frame,
};
use crate::core::{
    check_selection, derive_render_state, slot_offset, slot_width, ButtonAppearance,
    Invalidation, RenderModel, ShadowSide, StylingUpdate, TabBarResult, TabBarStyling,
    TabDescriptor, UnderlineAnimator, UnderlinePosition,
};
use crate::elements::tab_button::TabButton;
use crate::utilities::adjust_for_tab_bar;

/// Emitted whenever user interaction selects a tab
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabSelected {
    pub index: usize,
    /// Identifier of the selected tab's descriptor, if it has one
    pub identifier: Option<String>,
}

/// Receives selection events from a tab bar
pub trait TabBarDelegate {
    fn tab_bar_did_select(&mut self, event: &TabSelected);
}

impl<F: FnMut(&TabSelected)> TabBarDelegate for F {
    fn tab_bar_did_select(&mut self, event: &TabSelected) {
        self(event)
    }
}

/// Bounding box for a tab (for click detection)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabBounds {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl TabBounds {
    /// Check if a coordinate (x, y) is within this tab's bounds
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }
}

pub struct TabBar {
    descriptors: Vec<TabDescriptor>,
    selected_index: usize,
    styling: TabBarStyling,
    buttons: Vec<TabButton>,
    underline: UnderlineAnimator,
    /// Area from the last layout pass (for hit testing)
    area: Rect,
    laid_out: bool,
    /// Button that received the current press, if any
    pressed: Option<usize>,
    delegate: Option<Box<dyn TabBarDelegate>>,
}

impl TabBar {
    /// Create a tab bar with the first tab selected
    pub fn new(descriptors: Vec<TabDescriptor>, styling: TabBarStyling) -> Self {
        let mut tab_bar = Self {
            descriptors,
            selected_index: 0,
            styling,
            buttons: Vec::new(),
            underline: UnderlineAnimator::default(),
            area: Rect::default(),
            laid_out: false,
            pressed: None,
            delegate: None,
        };
        tab_bar.rebuild_buttons();
        tab_bar
    }

    pub fn with_selected_index(mut self, index: usize) -> TabBarResult<Self> {
        self.set_selected_index(index, false)?;
        Ok(self)
    }

    /// Register the listener for selection events, replacing any previous one
    pub fn set_delegate(&mut self, delegate: impl TabBarDelegate + 'static) {
        self.delegate = Some(Box::new(delegate));
    }

    pub fn clear_delegate(&mut self) {
        self.delegate = None;
    }

    pub fn descriptors(&self) -> &[TabDescriptor] {
        &self.descriptors
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn selected_descriptor(&self) -> Option<&TabDescriptor> {
        self.descriptors.get(self.selected_index)
    }

    pub fn styling(&self) -> &TabBarStyling {
        &self.styling
    }

    pub fn buttons(&self) -> &[TabButton] {
        &self.buttons
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Width from the last layout pass
    pub fn width(&self) -> u16 {
        self.area.width
    }

    /// Replace the whole tab set
    ///
    /// Every button is rebuilt. Fails without touching anything if the
    /// current selection does not fit the new list. An empty list resets the
    /// selection to 0 so any later list can be set.
    pub fn set_descriptors(&mut self, descriptors: Vec<TabDescriptor>) -> TabBarResult<()> {
        if descriptors.is_empty() {
            self.selected_index = 0;
        } else {
            check_selection(self.selected_index, descriptors.len())?;
        }
        self.descriptors = descriptors;
        self.rebuild_buttons();
        self.underline.snap_to(self.underline_offset());
        Ok(())
    }

    /// Select a tab, springing the underline over when `animated`
    pub fn set_selected_index(&mut self, index: usize, animated: bool) -> TabBarResult<()> {
        self.set_selected_index_at(index, animated, Instant::now())
    }

    /// Same as `set_selected_index` with an explicit animation start time
    pub fn set_selected_index_at(&mut self, index: usize, animated: bool, now: Instant) -> TabBarResult<()> {
        check_selection(index, self.descriptors.len())?;
        self.selected_index = index;
        self.update_selection();

        let offset = self.underline_offset();
        if animated {
            self.underline.animate_to(offset, now);
        } else {
            self.underline.snap_to(offset);
        }
        log::debug!("tab bar selected index {index} (underline at {offset})");
        Ok(())
    }

    /// Called when a button completes an activation gesture
    ///
    /// This is the only way user interaction changes the selection.
    pub fn on_tab_activated(&mut self, index: usize) -> TabBarResult<TabSelected> {
        self.on_tab_activated_at(index, Instant::now())
    }

    pub fn on_tab_activated_at(&mut self, index: usize, now: Instant) -> TabBarResult<TabSelected> {
        self.set_selected_index_at(index, true, now)?;

        let event = TabSelected {
            index,
            identifier: self.descriptors[index].identifier().map(str::to_string),
        };
        if let Some(delegate) = self.delegate.as_mut() {
            delegate.tab_bar_did_select(&event);
        }
        Ok(event)
    }

    /// Apply a partial styling change and refresh only what it affects
    pub fn update(&mut self, update: &StylingUpdate) -> Invalidation {
        let invalidation = self.styling.apply(update);
        if invalidation.touches_buttons() {
            let appearance = ButtonAppearance::from_styling(&self.styling);
            for button in &mut self.buttons {
                button.set_appearance(appearance);
            }
        }
        if !invalidation.is_empty() {
            log::debug!("tab bar styling updated: {invalidation:?}");
        }
        invalidation
    }

    /// Lay the bar out at `width` columns
    ///
    /// The first pass runs the entry animation when `animates_in` is set.
    /// Later width changes move the underline without animating.
    pub fn layout(&mut self, width: u16, now: Instant) {
        self.layout_in(Rect { width, ..self.area }, now);
    }

    /// Lay the bar out in `area`, remembering it for hit testing
    pub fn layout_in(&mut self, area: Rect, now: Instant) {
        let width_changed = area.width != self.area.width;
        self.area = area;

        let offset = self.underline_offset();
        if !self.laid_out {
            self.laid_out = true;
            if self.styling.animates_in {
                self.underline.snap_to(0);
                self.underline.animate_to(offset, now);
            } else {
                self.underline.snap_to(offset);
            }
        } else if width_changed {
            self.underline.snap_to(offset);
        }
    }

    /// Advance animations. Returns true while another frame is needed.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.underline.tick(now)
    }

    pub fn is_animating(&self) -> bool {
        self.underline.is_animating()
    }

    /// Resting underline offset: `width * selected / count`
    pub fn underline_offset(&self) -> u16 {
        slot_offset(self.area.width, self.selected_index, self.descriptors.len())
    }

    pub fn underline_width(&self) -> u16 {
        slot_width(self.area.width, self.descriptors.len())
    }

    /// Underline offset to draw this frame
    pub fn displayed_underline_offset(&self) -> u16 {
        self.underline.current()
    }

    /// Full derived state at the current width
    pub fn render_model(&self) -> TabBarResult<RenderModel> {
        derive_render_state(&self.descriptors, self.selected_index, &self.styling, self.area.width)
    }

    /// Rows the bar needs: tallest button content plus the underline
    pub fn height(&self) -> u16 {
        let content = self
            .descriptors
            .iter()
            .map(|d| d.icon().is_some() as u16 + d.visible_title().is_some() as u16)
            .max()
            .unwrap_or(0)
            .max(1);
        content + self.styling.underline_height
    }

    /// Calculate the bounds of each tab within `area`
    pub fn calculate_tab_bounds(&self, area: Rect) -> Vec<TabBounds> {
        let count = self.descriptors.len();
        (0..count)
            .map(|index| {
                let x = slot_offset(area.width, index, count);
                let next = slot_offset(area.width, index + 1, count);
                TabBounds {
                    x: area.x + x,
                    y: area.y,
                    width: next - x,
                    height: area.height,
                }
            })
            .collect()
    }

    /// Get the index of the tab at the given coordinates (for click handling)
    /// Returns None if no tab was hit
    pub fn get_tab_at(&self, x: u16, y: u16) -> Option<usize> {
        self.calculate_tab_bounds(self.area)
            .iter()
            .position(|bounds| bounds.contains(x, y))
    }

    /// Pointer went down at (x, y)
    pub fn press(&mut self, x: u16, y: u16) {
        self.cancel_press();
        if let Some(index) = self.get_tab_at(x, y) {
            self.buttons[index].press();
            self.pressed = Some(index);
        }
    }

    /// Pointer moved to (x, y) while held down
    pub fn drag(&mut self, x: u16, y: u16) {
        if let Some(index) = self.pressed {
            if self.get_tab_at(x, y) != Some(index) {
                self.buttons[index].drag_exit();
                self.pressed = None;
            }
        }
    }

    /// Pointer released at (x, y); activates the pressed tab if still inside it
    pub fn release(&mut self, x: u16, y: u16) -> TabBarResult<Option<TabSelected>> {
        let Some(index) = self.pressed.take() else {
            return Ok(None);
        };
        let inside = self.get_tab_at(x, y) == Some(index);
        match self.buttons[index].release(inside) {
            Some(activated) => self.on_tab_activated(activated).map(Some),
            None => Ok(None),
        }
    }

    /// Route a terminal mouse event through the press/drag/release gesture
    pub fn handle_mouse(&mut self, event: MouseEvent) -> TabBarResult<Option<TabSelected>> {
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.press(event.column, event.row);
                Ok(None)
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                self.drag(event.column, event.row);
                Ok(None)
            }
            MouseEventKind::Up(MouseButton::Left) => self.release(event.column, event.row),
            _ => Ok(None),
        }
    }

    /// Lay out in `area` and draw the bar
    pub fn render(&mut self, f: &mut Frame, area: Rect) {
        self.layout_in(area, Instant::now());
        f.render_widget(&*self, area);
    }

    fn cancel_press(&mut self) {
        if let Some(index) = self.pressed.take() {
            if let Some(button) = self.buttons.get_mut(index) {
                button.drag_exit();
            }
        }
    }

    fn rebuild_buttons(&mut self) {
        let appearance = ButtonAppearance::from_styling(&self.styling);
        self.pressed = None;
        self.buttons = self
            .descriptors
            .iter()
            .enumerate()
            .map(|(index, descriptor)| TabButton::new(index, descriptor.clone(), appearance))
            .collect();
        self.update_selection();
        log::debug!("tab bar rebuilt {} button(s)", self.buttons.len());
    }

    fn update_selection(&mut self) {
        let selected = self.selected_index;
        for button in &mut self.buttons {
            button.set_selected(button.index() == selected);
        }
    }

    /// Rows covered by the underline, then the rows left for button content
    fn split_rows(&self, area: Rect) -> (Rect, Rect) {
        let height = self.styling.underline_height.min(area.height);
        match self.styling.underline_position {
            UnderlinePosition::Top => (
                Rect { height, ..area },
                Rect { y: area.y + height, height: area.height - height, ..area },
            ),
            UnderlinePosition::Bottom => (
                Rect { y: area.bottom() - height, height, ..area },
                Rect { height: area.height - height, ..area },
            ),
        }
    }

}

/// Thin line just outside the bar on the shadow side
fn render_shadow(side: ShadowSide, area: Rect, buf: &mut Buffer) {
    let (row, symbol) = match side {
        ShadowSide::Top if area.y > buf.area.y => (area.y - 1, "▁"),
        ShadowSide::Bottom if area.bottom() < buf.area.bottom() => (area.bottom(), "▔"),
        _ => return,
    };
    let style = Style::default().fg(Color::DarkGray);
    buf.set_string(area.x, row, symbol.repeat(area.width as usize), style);
}

impl Widget for &TabBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let derived =
            derive_render_state(&self.descriptors, self.selected_index, &self.styling, area.width);
        let model = match derived {
            Ok(model) => model,
            Err(e) => {
                log::error!("tab bar not drawn: {e}");
                return;
            }
        };

        if let Some(color) = model.background.color() {
            buf.set_style(area, Style::default().bg(color));
        }
        render_shadow(model.shadow, area, buf);

        let (underline_area, content_area) = self.split_rows(area);
        for (button_model, button) in model.buttons.iter().zip(&self.buttons) {
            let button_area = Rect {
                x: content_area.x + button_model.x,
                width: button_model.width,
                ..content_area
            };
            button.render_model(button_model, button_area, buf);
        }

        let Some(underline) = model.underline else {
            return;
        };
        if underline_area.height == 0 {
            return;
        }
        // The animated offset is only meaningful at the width it was laid out for
        let offset = if area.width == self.area.width {
            self.underline.current()
        } else {
            underline.offset
        }
        .min(area.width);
        let width = underline.width.min(area.width - offset);
        let symbol = if underline_area.height == 1 { "━" } else { "█" };
        let style = Style::default().fg(underline.color);
        for row in underline_area.top()..underline_area.bottom() {
            buf.set_string(area.x + offset, row, symbol.repeat(width as usize), style);
        }
    }
}

/// Screens that host a tab bar and keep their content clear of it
pub trait TabBarPresentable {
    fn tab_bar(&self) -> &TabBar;

    /// Whether the bar is docked at the top of the screen
    fn tab_bar_on_top(&self) -> bool {
        false
    }

    /// Area left for content once the bar's rows are taken out of `area`
    fn content_area(&self, area: Rect) -> Rect {
        adjust_for_tab_bar(area, self.tab_bar().height(), self.tab_bar_on_top())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;
    use crossterm::event::KeyModifiers;
    use crate::core::{BackgroundMode, TabBarError};

    fn titles(names: &[&str]) -> Vec<TabDescriptor> {
        names.iter().map(|name| TabDescriptor::new(*name)).collect()
    }

    fn home_search_profile(width: u16) -> TabBar {
        let mut tab_bar = TabBar::new(titles(&["Home", "Search", "Profile"]), TabBarStyling::default());
        tab_bar.layout_in(Rect::new(0, 0, width, 2), Instant::now());
        tab_bar
    }

    fn selected_indices(tab_bar: &TabBar) -> Vec<usize> {
        tab_bar.buttons().iter().filter(|b| b.is_selected()).map(|b| b.index()).collect()
    }

    fn row_text(buf: &Buffer, y: u16) -> String {
        (buf.area.x..buf.area.right())
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent { kind, column, row, modifiers: KeyModifiers::NONE }
    }

    #[test]
    fn test_select_profile_moves_underline() {
        let mut tab_bar = home_search_profile(300);
        tab_bar.set_selected_index(2, false).unwrap();

        assert_eq!(tab_bar.underline_offset(), 200);
        assert_eq!(tab_bar.underline_width(), 100);
        assert_eq!(tab_bar.displayed_underline_offset(), 200);
        assert_eq!(selected_indices(&tab_bar), vec![2]);
        assert_eq!(tab_bar.selected_descriptor().unwrap().title(), "Profile");
    }

    #[test]
    fn test_every_index_selects_exactly_one_button() {
        let mut tab_bar = home_search_profile(91);
        for index in 0..3 {
            tab_bar.set_selected_index(index, index % 2 == 0).unwrap();
            assert_eq!(selected_indices(&tab_bar), vec![index]);
            assert_eq!(tab_bar.underline_offset(), (91 * index / 3) as u16);
        }
    }

    #[test]
    fn test_animated_and_instant_share_target() {
        let start = Instant::now();
        let mut animated = home_search_profile(300);
        let mut instant = home_search_profile(300);

        animated.set_selected_index_at(1, true, start).unwrap();
        instant.set_selected_index_at(1, false, start).unwrap();

        assert_eq!(animated.underline_offset(), instant.underline_offset());
        assert!(animated.is_animating());
        assert!(!instant.is_animating());

        animated.tick(start + Duration::from_millis(300));
        assert_eq!(animated.displayed_underline_offset(), 100);
    }

    #[test]
    fn test_out_of_bounds_selection_leaves_state() {
        let mut tab_bar = home_search_profile(300);
        tab_bar.set_selected_index(1, false).unwrap();

        let result = tab_bar.set_selected_index(3, false);
        assert_eq!(result, Err(TabBarError::InvalidSelection { index: 3, count: 3 }));
        assert_eq!(tab_bar.selected_index(), 1);
        assert_eq!(selected_indices(&tab_bar), vec![1]);
        assert_eq!(tab_bar.displayed_underline_offset(), 100);
    }

    #[test]
    fn test_set_descriptors_rebuilds_buttons() {
        let mut tab_bar = home_search_profile(120);
        tab_bar.set_descriptors(titles(&["a", "b", "c", "d"])).unwrap();

        assert_eq!(tab_bar.buttons().len(), 4);
        assert_eq!(tab_bar.buttons()[3].descriptor().title(), "d");
        assert_eq!(tab_bar.underline_width(), 30);
        assert_eq!(selected_indices(&tab_bar), vec![0]);
    }

    #[test]
    fn test_set_descriptors_rejects_stranded_selection() {
        let mut tab_bar = home_search_profile(120);
        tab_bar.set_selected_index(2, false).unwrap();

        let result = tab_bar.set_descriptors(titles(&["only"]));
        assert_eq!(result, Err(TabBarError::InvalidSelection { index: 2, count: 1 }));
        assert_eq!(tab_bar.len(), 3);
        assert_eq!(tab_bar.buttons().len(), 3);
    }

    #[test]
    fn test_empty_descriptors() {
        let mut tab_bar = home_search_profile(120);
        tab_bar.set_selected_index(2, false).unwrap();
        tab_bar.set_descriptors(Vec::new()).unwrap();

        assert!(tab_bar.buttons().is_empty());
        assert_eq!(tab_bar.underline_width(), 0);
        assert_eq!(tab_bar.underline_offset(), 0);
        assert!(tab_bar.set_selected_index(0, false).is_err());
        assert!(tab_bar.render_model().unwrap().underline.is_none());
        assert_eq!(tab_bar.selected_index(), 0);
    }

    #[test]
    fn test_refill_after_emptying() {
        let mut tab_bar = home_search_profile(120);
        tab_bar.set_selected_index(2, false).unwrap();
        tab_bar.set_descriptors(Vec::new()).unwrap();

        tab_bar.set_descriptors(titles(&["x", "y"])).unwrap();
        assert_eq!(tab_bar.len(), 2);
        assert_eq!(selected_indices(&tab_bar), vec![0]);
        assert_eq!(tab_bar.displayed_underline_offset(), 0);

        tab_bar.set_selected_index(1, false).unwrap();
        assert_eq!(tab_bar.underline_offset(), 60);
    }

    #[test]
    fn test_activation_notifies_delegate() {
        let received = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&received);

        let mut tab_bar = TabBar::new(
            vec![
                TabDescriptor::new("Home").with_identifier("home"),
                TabDescriptor::new("Search").with_identifier("search"),
            ],
            TabBarStyling::default(),
        );
        tab_bar.set_delegate(move |event: &TabSelected| sink.borrow_mut().push(event.clone()));

        let event = tab_bar.on_tab_activated(1).unwrap();
        assert_eq!(event, TabSelected { index: 1, identifier: Some("search".to_string()) });
        assert_eq!(received.borrow().as_slice(), &[event]);
        assert_eq!(tab_bar.selected_index(), 1);

        assert!(tab_bar.on_tab_activated(5).is_err());
        assert_eq!(received.borrow().len(), 1);
    }

    #[test]
    fn test_press_release_activates_tab() {
        let mut tab_bar = home_search_profile(30);
        tab_bar.press(25, 0);
        assert!(tab_bar.buttons()[2].is_highlighted());

        let event = tab_bar.release(22, 1).unwrap();
        assert_eq!(event.map(|e| e.index), Some(2));
        assert_eq!(tab_bar.selected_index(), 2);
        assert!(!tab_bar.buttons()[2].is_highlighted());
    }

    #[test]
    fn test_drag_out_cancels_press() {
        let mut tab_bar = home_search_profile(30);
        tab_bar.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 15, 0)).unwrap();
        tab_bar.handle_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), 5, 0)).unwrap();
        let event = tab_bar.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 15, 0)).unwrap();

        assert_eq!(event, None);
        assert_eq!(tab_bar.selected_index(), 0);
    }

    #[test]
    fn test_press_outside_bar_is_ignored() {
        let mut tab_bar = home_search_profile(30);
        tab_bar.press(10, 5);
        assert_eq!(tab_bar.release(10, 5).unwrap(), None);
    }

    #[test]
    fn test_update_pushes_colors_to_buttons() {
        let mut tab_bar = home_search_profile(30);
        let update = StylingUpdate::new().with_tint_color(Color::Green);

        let invalidation = tab_bar.update(&update);
        assert!(invalidation.colors);
        assert!(!invalidation.geometry);
        assert_eq!(tab_bar.buttons()[0].appearance().selected_color, Color::Green);

        assert!(tab_bar.update(&update).is_empty());
    }

    #[test]
    fn test_entry_animation_on_first_layout() {
        let start = Instant::now();
        let mut styling = TabBarStyling::default();
        styling.animates_in = true;
        let mut tab_bar = TabBar::new(titles(&["a", "b", "c"]), styling)
            .with_selected_index(2)
            .unwrap();

        tab_bar.layout(60, start);
        assert!(tab_bar.is_animating());
        assert_eq!(tab_bar.displayed_underline_offset(), 0);

        assert!(!tab_bar.tick(start + Duration::from_millis(300)));
        assert_eq!(tab_bar.displayed_underline_offset(), 40);

        tab_bar.layout(90, start + Duration::from_secs(1));
        assert!(!tab_bar.is_animating());
        assert_eq!(tab_bar.displayed_underline_offset(), 60);
    }

    #[test]
    fn test_height() {
        let tab_bar = TabBar::new(titles(&["a"]), TabBarStyling::default());
        assert_eq!(tab_bar.height(), 2);

        let tab_bar = TabBar::new(
            vec![TabDescriptor::new("Home").with_icon("⌂"), TabDescriptor::new("b")],
            TabBarStyling::default(),
        );
        assert_eq!(tab_bar.height(), 3);
    }

    #[test]
    fn test_render_titles_and_underline() {
        let mut styling = TabBarStyling::default();
        styling.background = BackgroundMode::Opaque;
        let mut tab_bar = TabBar::new(titles(&["Home", "Search", "Profile"]), styling);
        let area = Rect::new(0, 0, 30, 2);
        tab_bar.layout_in(area, Instant::now());
        tab_bar.set_selected_index(2, false).unwrap();

        let mut buf = Buffer::empty(area);
        (&tab_bar).render(area, &mut buf);

        assert_eq!(row_text(&buf, 0), "   Home     Search   Profile  ");
        assert_eq!(row_text(&buf, 1), format!("{}{}", " ".repeat(20), "━".repeat(10)));
        assert_eq!(buf[(20, 1)].fg, Color::Cyan);
    }

    #[test]
    fn test_render_underline_on_top_with_shadow_below() {
        let mut styling = TabBarStyling::default();
        styling.underline_position = UnderlinePosition::Top;
        styling.shadow_side = ShadowSide::Bottom;
        let mut tab_bar = TabBar::new(titles(&["a", "b"]), styling);
        let bar_area = Rect::new(0, 0, 10, 2);
        tab_bar.layout_in(bar_area, Instant::now());

        let mut buf = Buffer::empty(Rect::new(0, 0, 10, 3));
        (&tab_bar).render(bar_area, &mut buf);

        assert_eq!(row_text(&buf, 0), format!("{}{}", "━".repeat(5), " ".repeat(5)));
        assert_eq!(row_text(&buf, 1), "  a    b  ");
        assert_eq!(row_text(&buf, 2), "▔".repeat(10));
        assert_eq!(buf[(0, 1)].bg, crate::utilities::hex_color(0xF2F2F7));
    }

    #[test]
    fn test_render_uses_render_model_geometry() {
        let mut tab_bar = home_search_profile(30);
        tab_bar.set_selected_index(2, false).unwrap();
        let model = tab_bar.render_model().unwrap();

        let area = Rect::new(0, 0, 30, 2);
        let mut buf = Buffer::empty(area);
        (&tab_bar).render(area, &mut buf);

        let profile = &model.buttons[2];
        assert_eq!(profile.x, 20);
        assert_eq!(buf[(profile.x + 1, 0)].symbol(), "P");
        let underline = model.underline.unwrap();
        assert_eq!(buf[(underline.offset, 1)].symbol(), "━");
        assert_eq!(buf[(underline.offset - 1, 1)].symbol(), " ");
    }

    #[test]
    fn test_render_into_wider_area_keeps_underline_on_tab() {
        let mut tab_bar = home_search_profile(30);
        tab_bar.set_selected_index(2, false).unwrap();

        let wide = Rect::new(0, 0, 60, 2);
        let mut buf = Buffer::empty(wide);
        (&tab_bar).render(wide, &mut buf);

        assert_eq!(row_text(&buf, 1), format!("{}{}", " ".repeat(40), "━".repeat(20)));
    }

    struct Screen {
        tab_bar: TabBar,
    }

    impl TabBarPresentable for Screen {
        fn tab_bar(&self) -> &TabBar {
            &self.tab_bar
        }
    }

    #[test]
    fn test_presentable_content_area() {
        let screen = Screen { tab_bar: TabBar::new(titles(&["a"]), TabBarStyling::default()) };
        let content = screen.content_area(Rect::new(0, 0, 40, 20));
        assert_eq!(content, Rect::new(0, 0, 40, 18));
    }
}
