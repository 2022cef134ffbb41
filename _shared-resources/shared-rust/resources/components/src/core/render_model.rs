// Render Model
// Pure derivation of everything a tab bar draws from descriptors, selection and styling
//
// Usage:
//   let model = derive_render_state(&tabs, selected, &styling, area.width)?;
//   // model.buttons[i].selected, model.underline.offset, ...

use ratatui::style::{Color, Modifier};
use crate::core::descriptor::TabDescriptor;
use crate::core::error::{check_selection, TabBarResult};
use crate::core::styling::{BackgroundFill, ShadowSide, TabBarStyling, UnderlinePosition};
use crate::utilities::{capitalize_words, display_width};

/// Cells of padding on each side of a badge's text
pub const BADGE_MARGIN: u16 = 1;

/// Left edge of slot `index` when `width` columns are split into `count` equal slots
pub fn slot_offset(width: u16, index: usize, count: usize) -> u16 {
    if count == 0 {
        return 0;
    }
    (width as u64 * index as u64 / count as u64) as u16
}

/// Nominal width of one slot (the underline width)
pub fn slot_width(width: u16, count: usize) -> u16 {
    if count == 0 {
        return 0;
    }
    (width as u64 / count as u64) as u16
}

/// Colors, font and inset the container pushes to each button
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonAppearance {
    pub selected_color: Color,
    pub unselected_color: Color,
    pub badge_color: Color,
    pub badge_text_color: Color,
    pub inset: u16,
    pub title_font: Option<Modifier>,
}

impl ButtonAppearance {
    pub fn from_styling(styling: &TabBarStyling) -> Self {
        Self {
            selected_color: styling.resolved_selected_color(),
            unselected_color: styling.text_color,
            badge_color: styling.badge_color,
            badge_text_color: styling.badge_text_color,
            inset: styling.internal_margin,
            title_font: styling.title_font,
        }
    }
}

impl Default for ButtonAppearance {
    fn default() -> Self {
        Self::from_styling(&TabBarStyling::default())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AccessibilityTraits {
    pub button: bool,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessibilityInfo {
    pub label: String,
    pub identifier: Option<String>,
    pub traits: AccessibilityTraits,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadgeModel {
    pub text: String,
    /// Text width plus a margin on each side
    pub width: u16,
    pub color: Color,
    pub text_color: Color,
}

impl BadgeModel {
    pub fn new(text: &str, appearance: &ButtonAppearance) -> Self {
        Self {
            text: text.to_string(),
            width: display_width(text) + BADGE_MARGIN * 2,
            color: appearance.badge_color,
            text_color: appearance.badge_text_color,
        }
    }

    /// Padded label as drawn
    pub fn label(&self) -> String {
        let pad = " ".repeat(BADGE_MARGIN as usize);
        format!("{pad}{}{pad}", self.text)
    }
}

/// Derived presentation of one tab button
#[derive(Debug, Clone, PartialEq)]
pub struct ButtonModel {
    pub index: usize,
    /// Column offset relative to the bar
    pub x: u16,
    pub width: u16,
    pub title: Option<String>,
    pub icon: Option<String>,
    pub selected: bool,
    /// Title and icon color
    pub tint: Color,
    pub title_modifier: Modifier,
    pub icon_inset: u16,
    pub badge: Option<BadgeModel>,
    pub accessibility: AccessibilityInfo,
}

impl ButtonModel {
    pub fn derive(
        index: usize,
        descriptor: &TabDescriptor,
        selected: bool,
        appearance: &ButtonAppearance,
        x: u16,
        width: u16,
    ) -> Self {
        let tint = if selected {
            appearance.selected_color
        } else {
            appearance.unselected_color
        };

        Self {
            index,
            x,
            width,
            title: descriptor.visible_title().map(str::to_string),
            icon: descriptor.icon().map(|icon| icon.glyph().to_string()),
            selected,
            tint,
            title_modifier: title_modifier(descriptor, appearance),
            icon_inset: appearance.inset,
            badge: descriptor
                .visible_badge()
                .map(|value| BadgeModel::new(value, appearance)),
            accessibility: AccessibilityInfo {
                label: capitalize_words(descriptor.title()),
                identifier: descriptor.identifier().map(str::to_string),
                traits: AccessibilityTraits {
                    button: true,
                    selected,
                },
            },
        }
    }
}

/// Bold stands in for the larger title face of icon-less tabs
fn title_modifier(descriptor: &TabDescriptor, appearance: &ButtonAppearance) -> Modifier {
    match appearance.title_font {
        Some(font) => font,
        None if descriptor.icon().is_some() => Modifier::empty(),
        None => Modifier::BOLD,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnderlineGeometry {
    pub offset: u16,
    pub width: u16,
    pub height: u16,
    pub position: UnderlinePosition,
    pub color: Color,
}

/// Everything needed to draw the bar for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct RenderModel {
    pub width: u16,
    pub buttons: Vec<ButtonModel>,
    /// Absent when there are no tabs
    pub underline: Option<UnderlineGeometry>,
    pub background: BackgroundFill,
    pub shadow: ShadowSide,
}

impl RenderModel {
    pub fn selected_button(&self) -> Option<&ButtonModel> {
        self.buttons.iter().find(|button| button.selected)
    }
}

/// Derive the full render state of a tab bar
///
/// Fails when `descriptors` is non-empty and `selected_index` is out of range.
pub fn derive_render_state(
    descriptors: &[TabDescriptor],
    selected_index: usize,
    styling: &TabBarStyling,
    width: u16,
) -> TabBarResult<RenderModel> {
    let count = descriptors.len();
    if count > 0 {
        check_selection(selected_index, count)?;
    }

    let appearance = ButtonAppearance::from_styling(styling);
    let buttons = descriptors
        .iter()
        .enumerate()
        .map(|(index, descriptor)| {
            let x = slot_offset(width, index, count);
            let next = slot_offset(width, index + 1, count);
            ButtonModel::derive(
                index,
                descriptor,
                index == selected_index,
                &appearance,
                x,
                next - x,
            )
        })
        .collect();

    let underline = (count > 0).then(|| UnderlineGeometry {
        offset: slot_offset(width, selected_index, count),
        width: slot_width(width, count),
        height: styling.underline_height,
        position: styling.underline_position,
        color: styling.tint_color,
    });

    Ok(RenderModel {
        width,
        buttons,
        underline,
        background: styling.background_fill(),
        shadow: styling.shadow_side,
    })
}
