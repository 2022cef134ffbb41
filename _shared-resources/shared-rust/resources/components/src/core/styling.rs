// Tab Bar Styling
// Immutable configuration object for a tab bar plus partial updates

use ratatui::style::{Color, Modifier};
use crate::utilities::hex_color;

/// Which edge of the bar the underline sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnderlinePosition {
    Top,
    #[default]
    Bottom,
}

impl UnderlinePosition {
    pub fn from_str(position: &str) -> Option<Self> {
        match position.to_lowercase().as_str() {
            "top" => Some(UnderlinePosition::Top),
            "bottom" => Some(UnderlinePosition::Bottom),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            UnderlinePosition::Top => UnderlinePosition::Bottom,
            UnderlinePosition::Bottom => UnderlinePosition::Top,
        }
    }
}

/// Which edge of the bar casts the shadow line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShadowSide {
    #[default]
    Top,
    Bottom,
}

impl ShadowSide {
    pub fn from_str(side: &str) -> Option<Self> {
        match side.to_lowercase().as_str() {
            "top" => Some(ShadowSide::Top),
            "bottom" => Some(ShadowSide::Bottom),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackgroundMode {
    /// Light translucent backdrop
    #[default]
    LightTranslucent,
    /// Dark translucent backdrop
    DarkTranslucent,
    /// Solid fill with `background_color` (terminal default when unset)
    Opaque,
}

impl BackgroundMode {
    pub fn from_str(mode: &str) -> Option<Self> {
        match mode.to_lowercase().as_str() {
            "light" | "light_translucent" => Some(BackgroundMode::LightTranslucent),
            "dark" | "dark_translucent" => Some(BackgroundMode::DarkTranslucent),
            "opaque" => Some(BackgroundMode::Opaque),
            _ => None,
        }
    }

    /// Next mode in light → dark → opaque order
    pub fn cycled(self) -> Self {
        match self {
            BackgroundMode::LightTranslucent => BackgroundMode::DarkTranslucent,
            BackgroundMode::DarkTranslucent => BackgroundMode::Opaque,
            BackgroundMode::Opaque => BackgroundMode::LightTranslucent,
        }
    }
}

/// Resolved background for the render model
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackgroundFill {
    LightBlur,
    DarkBlur,
    Opaque(Option<Color>),
}

impl BackgroundFill {
    /// Cell background color, `None` leaves the terminal background alone
    pub fn color(&self) -> Option<Color> {
        match self {
            BackgroundFill::LightBlur => Some(hex_color(0xF2F2F7)),
            BackgroundFill::DarkBlur => Some(hex_color(0x1C1C1E)),
            BackgroundFill::Opaque(color) => *color,
        }
    }
}

/// Full styling for a tab bar
#[derive(Debug, Clone, PartialEq)]
pub struct TabBarStyling {
    pub text_color: Color,
    /// Falls back to `tint_color` when unset
    pub selected_text_color: Option<Color>,
    /// Host accent color; also colors the underline
    pub tint_color: Color,
    /// Underline thickness in rows
    pub underline_height: u16,
    pub underline_position: UnderlinePosition,
    pub shadow_side: ShadowSide,
    pub background: BackgroundMode,
    pub background_color: Option<Color>,
    /// Columns trimmed from each side of an icon's area
    pub internal_margin: u16,
    /// Overrides the default title look (bold without icon, plain with)
    pub title_font: Option<Modifier>,
    pub badge_color: Color,
    pub badge_text_color: Color,
    /// Slide the underline in from the leading edge on first layout
    pub animates_in: bool,
}

impl Default for TabBarStyling {
    fn default() -> Self {
        Self {
            text_color: Color::Black,
            selected_text_color: None,
            tint_color: Color::Cyan,
            underline_height: 1,
            underline_position: UnderlinePosition::Bottom,
            shadow_side: ShadowSide::Top,
            background: BackgroundMode::LightTranslucent,
            background_color: None,
            internal_margin: 0,
            title_font: None,
            badge_color: Color::Red,
            badge_text_color: Color::White,
            animates_in: false,
        }
    }
}

impl TabBarStyling {
    pub fn resolved_selected_color(&self) -> Color {
        self.selected_text_color.unwrap_or(self.tint_color)
    }

    pub fn background_fill(&self) -> BackgroundFill {
        match self.background {
            BackgroundMode::LightTranslucent => BackgroundFill::LightBlur,
            BackgroundMode::DarkTranslucent => BackgroundFill::DarkBlur,
            BackgroundMode::Opaque => BackgroundFill::Opaque(self.background_color),
        }
    }

    /// Apply a partial update in place and report what has to be recomputed
    pub fn apply(&mut self, update: &StylingUpdate) -> Invalidation {
        let mut invalidation = Invalidation::default();

        invalidation.colors |= assign(&mut self.text_color, update.text_color);
        invalidation.colors |= assign(&mut self.selected_text_color, update.selected_text_color);
        invalidation.colors |= assign(&mut self.tint_color, update.tint_color);
        invalidation.colors |= assign(&mut self.badge_color, update.badge_color);
        invalidation.colors |= assign(&mut self.badge_text_color, update.badge_text_color);

        invalidation.geometry |= assign(&mut self.underline_height, update.underline_height);
        invalidation.geometry |= assign(&mut self.underline_position, update.underline_position);
        invalidation.geometry |= assign(&mut self.shadow_side, update.shadow_side);

        invalidation.background |= assign(&mut self.background, update.background);
        invalidation.background |= assign(&mut self.background_color, update.background_color);

        invalidation.insets |= assign(&mut self.internal_margin, update.internal_margin);
        invalidation.fonts |= assign(&mut self.title_font, update.title_font);

        // Only consulted on first layout, nothing to redraw
        assign(&mut self.animates_in, update.animates_in);

        invalidation
    }
}

fn assign<T: PartialEq>(field: &mut T, value: Option<T>) -> bool {
    match value {
        Some(value) if *field != value => {
            *field = value;
            true
        }
        _ => false,
    }
}

/// Partial styling change; `None` fields are left as they are
///
/// Fields that are optional in `TabBarStyling` take `Some(None)` to reset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StylingUpdate {
    pub text_color: Option<Color>,
    pub selected_text_color: Option<Option<Color>>,
    pub tint_color: Option<Color>,
    pub underline_height: Option<u16>,
    pub underline_position: Option<UnderlinePosition>,
    pub shadow_side: Option<ShadowSide>,
    pub background: Option<BackgroundMode>,
    pub background_color: Option<Option<Color>>,
    pub internal_margin: Option<u16>,
    pub title_font: Option<Option<Modifier>>,
    pub badge_color: Option<Color>,
    pub badge_text_color: Option<Color>,
    pub animates_in: Option<bool>,
}

impl StylingUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text_color(mut self, color: Color) -> Self {
        self.text_color = Some(color);
        self
    }

    pub fn with_selected_text_color(mut self, color: Option<Color>) -> Self {
        self.selected_text_color = Some(color);
        self
    }

    pub fn with_tint_color(mut self, color: Color) -> Self {
        self.tint_color = Some(color);
        self
    }

    pub fn with_underline_height(mut self, height: u16) -> Self {
        self.underline_height = Some(height);
        self
    }

    pub fn with_underline_position(mut self, position: UnderlinePosition) -> Self {
        self.underline_position = Some(position);
        self
    }

    pub fn with_shadow_side(mut self, side: ShadowSide) -> Self {
        self.shadow_side = Some(side);
        self
    }

    pub fn with_background(mut self, mode: BackgroundMode) -> Self {
        self.background = Some(mode);
        self
    }

    pub fn with_background_color(mut self, color: Option<Color>) -> Self {
        self.background_color = Some(color);
        self
    }

    pub fn with_internal_margin(mut self, margin: u16) -> Self {
        self.internal_margin = Some(margin);
        self
    }

    pub fn with_title_font(mut self, font: Option<Modifier>) -> Self {
        self.title_font = Some(font);
        self
    }

    pub fn with_badge_colors(mut self, background: Color, text: Color) -> Self {
        self.badge_color = Some(background);
        self.badge_text_color = Some(text);
        self
    }

    pub fn with_animates_in(mut self, animates_in: bool) -> Self {
        self.animates_in = Some(animates_in);
        self
    }
}

/// Derived state an update has made stale
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Invalidation {
    /// Title, icon, underline and badge colors
    pub colors: bool,
    /// Title font
    pub fonts: bool,
    /// Icon insets
    pub insets: bool,
    /// Underline size/edge and shadow side
    pub geometry: bool,
    pub background: bool,
}

impl Invalidation {
    pub fn is_empty(&self) -> bool {
        !(self.colors || self.fonts || self.insets || self.geometry || self.background)
    }

    /// Anything the buttons themselves must pick up
    pub fn touches_buttons(&self) -> bool {
        self.colors || self.fonts || self.insets
    }
}
