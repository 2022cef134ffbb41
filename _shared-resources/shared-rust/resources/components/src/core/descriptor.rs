// Tab Descriptors
// Immutable data describing a single tab: title, icon, badge and identifier

use crate::utilities::display_width;

/// Glyph shown above a tab's title (the terminal stand-in for an image)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Icon(String);

impl Icon {
    pub fn new(glyph: impl Into<String>) -> Self {
        Self(glyph.into())
    }

    pub fn glyph(&self) -> &str {
        &self.0
    }

    /// Width of the glyph in cells
    pub fn width(&self) -> u16 {
        display_width(&self.0)
    }
}

impl From<&str> for Icon {
    fn from(glyph: &str) -> Self {
        Self::new(glyph)
    }
}

/// Rendering data for one `TabButton`
///
/// Built once and never mutated. The container keeps its own copy of the
/// ordered list, so callers are free to drop theirs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabDescriptor {
    title: String,
    icon: Option<Icon>,
    hide_title: bool,
    badge_value: Option<String>,
    identifier: Option<String>,
}

impl TabDescriptor {
    /// Title-only tab. The title doubles as the accessibility label.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            icon: None,
            hide_title: false,
            badge_value: None,
            identifier: None,
        }
    }

    pub fn with_icon(mut self, icon: impl Into<Icon>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Show only the icon. The title is still used for accessibility.
    pub fn with_hidden_title(mut self, hide_title: bool) -> Self {
        self.hide_title = hide_title;
        self
    }

    pub fn with_badge(mut self, badge_value: impl Into<String>) -> Self {
        self.badge_value = Some(badge_value.into());
        self
    }

    /// Stable identifier, independent of the (possibly translated) title
    pub fn with_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = Some(identifier.into());
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn icon(&self) -> Option<&Icon> {
        self.icon.as_ref()
    }

    pub fn hide_title(&self) -> bool {
        self.hide_title
    }

    pub fn badge_value(&self) -> Option<&str> {
        self.badge_value.as_deref()
    }

    pub fn identifier(&self) -> Option<&str> {
        self.identifier.as_deref()
    }

    /// Badge text to draw, if any. An empty value draws nothing.
    pub fn visible_badge(&self) -> Option<&str> {
        self.badge_value().filter(|value| !value.is_empty())
    }

    /// Title text to draw, if any
    pub fn visible_title(&self) -> Option<&str> {
        if self.hide_title {
            None
        } else {
            Some(&self.title)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_sets_all_fields() {
        let tab = TabDescriptor::new("Inbox")
            .with_icon("✉")
            .with_badge("3")
            .with_identifier("tab.inbox");

        assert_eq!(tab.title(), "Inbox");
        assert_eq!(tab.icon().map(Icon::glyph), Some("✉"));
        assert_eq!(tab.badge_value(), Some("3"));
        assert_eq!(tab.identifier(), Some("tab.inbox"));
        assert!(!tab.hide_title());
    }

    #[test]
    fn test_empty_badge_is_not_visible() {
        let tab = TabDescriptor::new("Inbox").with_badge("");
        assert_eq!(tab.badge_value(), Some(""));
        assert_eq!(tab.visible_badge(), None);
    }

    #[test]
    fn test_hidden_title() {
        let tab = TabDescriptor::new("Home").with_icon("⌂").with_hidden_title(true);
        assert_eq!(tab.visible_title(), None);
        assert_eq!(tab.title(), "Home");
    }
}
