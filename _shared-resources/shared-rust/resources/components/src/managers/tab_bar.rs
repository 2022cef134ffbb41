// Tab Bar Manager
// Provides YAML configuration helpers and OOP-style tab bar manager wrapper

use std::time::{Duration, Instant};

use ratatui::style::Modifier;
use serde::Deserialize;
use crate::core::{
    BackgroundMode, ShadowSide, TabBarResult, TabBarStyling, TabDescriptor, UnderlinePosition,
};
use crate::elements::tab_bar::{TabBar, TabSelected};
use crate::utilities::parse_color;

// ┌────────────────────────────────────────────────────────────────────────────────────────────────┐
// │                                    YAML Configuration Structures                               │
// └────────────────────────────────────────────────────────────────────────────────────────────────┘

/// Tab bar configuration from YAML
///
/// Every styling field is optional; missing or unrecognised values keep the
/// widget defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TabBarConfigYaml {
    /// List of tabs
    #[serde(default)]
    pub tabs: Vec<TabConfigYaml>,
    /// Initially selected tab (defaults to the first)
    pub selected: Option<usize>,
    /// Unselected title/icon color (e.g., "black")
    pub text_color: Option<String>,
    /// Selected title/icon color (defaults to the tint color)
    pub selected_text_color: Option<String>,
    /// Underline color
    pub tint_color: Option<String>,
    /// Underline thickness in rows
    pub underline_height: Option<u16>,
    /// "top" or "bottom"
    pub underline_position: Option<String>,
    /// Side the separator line is drawn on: "top" or "bottom"
    pub shadow: Option<String>,
    /// "light", "dark" or "opaque"
    pub background: Option<String>,
    /// Fill color for the opaque background
    pub background_color: Option<String>,
    /// Horizontal inset of each icon inside its button
    pub internal_margin: Option<u16>,
    /// Title face override: "bold", "italic", "underlined", "dim" or "plain"
    pub title_font: Option<String>,
    /// Badge pill color
    pub badge_color: Option<String>,
    /// Badge text color
    pub badge_text_color: Option<String>,
    /// Spring the underline in from the leading edge on first layout
    pub animates_in: Option<bool>,
}

/// Tab configuration from YAML
#[derive(Debug, Clone, Deserialize)]
pub struct TabConfigYaml {
    /// Tab display title
    pub title: String,
    /// Optional icon glyph drawn above the title
    pub icon: Option<String>,
    /// Draw the icon only
    #[serde(default)]
    pub hide_title: bool,
    /// Badge text; empty means no badge
    pub badge: Option<String>,
    /// Tab ID reported with selection events
    pub id: Option<String>,
}

// ┌────────────────────────────────────────────────────────────────────────────────────────────────┐
// │                                    Configuration Conversion Functions                          │
// └────────────────────────────────────────────────────────────────────────────────────────────────┘

/// Parse a title face name
pub fn parse_title_font(font: &str) -> Option<Modifier> {
    match font.to_lowercase().as_str() {
        "bold" => Some(Modifier::BOLD),
        "italic" => Some(Modifier::ITALIC),
        "underlined" | "underline" => Some(Modifier::UNDERLINED),
        "dim" | "light" => Some(Modifier::DIM),
        "plain" | "regular" => Some(Modifier::empty()),
        _ => None,
    }
}

/// Resolve an optional named value, warning and returning None when it does not parse
fn resolve<T>(field: &str, value: Option<&String>, parse: impl Fn(&str) -> Option<T>) -> Option<T> {
    let value = value?;
    let parsed = parse(value);
    if parsed.is_none() {
        log::warn!("tab bar config: unknown {field} '{value}', using default");
    }
    parsed
}

/// Convert YAML tab bar configuration to widget styling
pub fn convert_styling(config: &TabBarConfigYaml) -> TabBarStyling {
    let mut styling = TabBarStyling::default();

    if let Some(color) = resolve("text_color", config.text_color.as_ref(), parse_color) {
        styling.text_color = color;
    }
    if let Some(color) = resolve("selected_text_color", config.selected_text_color.as_ref(), parse_color) {
        styling.selected_text_color = Some(color);
    }
    if let Some(color) = resolve("tint_color", config.tint_color.as_ref(), parse_color) {
        styling.tint_color = color;
    }
    if let Some(height) = config.underline_height {
        styling.underline_height = height;
    }
    if let Some(position) = resolve("underline_position", config.underline_position.as_ref(), UnderlinePosition::from_str) {
        styling.underline_position = position;
    }
    if let Some(side) = resolve("shadow", config.shadow.as_ref(), ShadowSide::from_str) {
        styling.shadow_side = side;
    }
    if let Some(mode) = resolve("background", config.background.as_ref(), BackgroundMode::from_str) {
        styling.background = mode;
    }
    styling.background_color = resolve("background_color", config.background_color.as_ref(), parse_color);
    if let Some(margin) = config.internal_margin {
        styling.internal_margin = margin;
    }
    styling.title_font = resolve("title_font", config.title_font.as_ref(), parse_title_font);
    if let Some(color) = resolve("badge_color", config.badge_color.as_ref(), parse_color) {
        styling.badge_color = color;
    }
    if let Some(color) = resolve("badge_text_color", config.badge_text_color.as_ref(), parse_color) {
        styling.badge_text_color = color;
    }
    if let Some(animates_in) = config.animates_in {
        styling.animates_in = animates_in;
    }

    styling
}

/// Convert YAML tab configurations to descriptors
pub fn create_descriptors(config: &TabBarConfigYaml) -> Vec<TabDescriptor> {
    config
        .tabs
        .iter()
        .map(|tab| {
            let mut descriptor = TabDescriptor::new(tab.title.clone()).with_hidden_title(tab.hide_title);
            if let Some(icon) = &tab.icon {
                descriptor = descriptor.with_icon(icon.as_str());
            }
            if let Some(badge) = &tab.badge {
                descriptor = descriptor.with_badge(badge.clone());
            }
            if let Some(id) = &tab.id {
                descriptor = descriptor.with_identifier(id.clone());
            }
            descriptor
        })
        .collect()
}

/// Create a tab bar from YAML configuration
/// Fails when `selected` does not name one of the configured tabs
pub fn create_tab_bar_from_config(config: &TabBarConfigYaml) -> TabBarResult<TabBar> {
    let tab_bar = TabBar::new(create_descriptors(config), convert_styling(config));
    match config.selected {
        Some(index) => tab_bar.with_selected_index(index),
        None => Ok(tab_bar),
    }
}

// ┌────────────────────────────────────────────────────────────────────────────────────────────────┐
// │                            Tab Bar Manager - OOP Style Tab Bar Operations                      │
// └────────────────────────────────────────────────────────────────────────────────────────────────┘

/// Minimum gap between keyboard navigations (hardware bounce guard)
/// Key repeat events are filtered at the event handler level
const DEBOUNCE_DURATION: Duration = Duration::from_millis(50);

/// Tab Bar Manager wrapper for keyboard-driven tab bar operations
/// Every selection it makes goes through the bar's activation path, so the
/// delegate hears about it
pub struct TabBarManager {
    tab_bar: TabBar,
    last_navigation_time: Option<Instant>,
}

impl TabBarManager {
    pub fn new(tab_bar: TabBar) -> Self {
        Self {
            tab_bar,
            last_navigation_time: None,
        }
    }

    /// Create a new tab bar from config
    pub fn create(config: &TabBarConfigYaml) -> TabBarResult<Self> {
        create_tab_bar_from_config(config).map(Self::new)
    }

    pub fn tab_bar(&self) -> &TabBar {
        &self.tab_bar
    }

    pub fn tab_bar_mut(&mut self) -> &mut TabBar {
        &mut self.tab_bar
    }

    /// Navigate to the previous tab
    pub fn navigate_previous(&mut self) -> TabBarResult<Option<TabSelected>> {
        self.navigate(-1, Instant::now())
    }

    /// Navigate to the next tab
    pub fn navigate_next(&mut self) -> TabBarResult<Option<TabSelected>> {
        self.navigate(1, Instant::now())
    }

    /// Move the selection one tab in `direction`, wrapping at either end
    /// Returns None if there are no tabs or the call was debounced
    pub fn navigate(&mut self, direction: i32, now: Instant) -> TabBarResult<Option<TabSelected>> {
        let count = self.tab_bar.len();
        if count == 0 {
            return Ok(None);
        }
        if let Some(last_time) = self.last_navigation_time {
            if now.saturating_duration_since(last_time) < DEBOUNCE_DURATION {
                return Ok(None);
            }
        }

        let current_index = self.tab_bar.selected_index();
        let new_index = if direction < 0 {
            if current_index > 0 {
                current_index - 1
            } else {
                count - 1
            }
        } else {
            (current_index + 1) % count
        };

        let event = self.tab_bar.on_tab_activated_at(new_index, now)?;
        self.last_navigation_time = Some(now);
        Ok(Some(event))
    }

    /// Set the active tab by index
    pub fn set_active(&mut self, index: usize) -> TabBarResult<TabSelected> {
        self.tab_bar.on_tab_activated(index)
    }
}
