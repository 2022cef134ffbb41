// Helper utilities for TUI components
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::text::Span;

/// Convert hex color to ratatui Color
pub fn hex_color(hex: u32) -> Color {
    Color::Rgb(
        ((hex >> 16) & 0xFF) as u8,
        ((hex >> 8) & 0xFF) as u8,
        (hex & 0xFF) as u8,
    )
}

/// Parse a color name or `#rrggbb` string
pub fn parse_color(color: &str) -> Option<Color> {
    let color = color.trim();
    if let Some(hex) = color.strip_prefix('#') {
        if hex.len() == 6 {
            return u32::from_str_radix(hex, 16).ok().map(hex_color);
        }
        return None;
    }

    let parsed = match color.to_lowercase().as_str() {
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "white" => Color::White,
        "gray" | "grey" => Color::Gray,
        "dark_gray" | "darkgray" | "dark_grey" => Color::DarkGray,
        // Dark colors using RGB values (ratatui doesn't have Dark* variants)
        "dark_red" | "darkred" => Color::Rgb(139, 0, 0),
        "dark_green" | "darkgreen" => Color::Rgb(0, 100, 0),
        "dark_yellow" | "darkyellow" => Color::Rgb(184, 134, 11),
        "dark_blue" | "darkblue" => Color::Rgb(0, 0, 139),
        "dark_magenta" | "darkmagenta" => Color::Rgb(139, 0, 139),
        "dark_cyan" | "darkcyan" => Color::Rgb(0, 139, 139),
        _ => return None,
    };
    Some(parsed)
}

/// Uppercase the first letter of every word and lowercase the rest
pub fn capitalize_words(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut at_word_start = true;
    for c in text.chars() {
        if c.is_alphanumeric() {
            if at_word_start {
                result.extend(c.to_uppercase());
            } else {
                result.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            result.push(c);
            at_word_start = true;
        }
    }
    result
}

/// Width of `text` in terminal cells (wide glyphs count twice)
pub fn display_width(text: &str) -> u16 {
    Span::raw(text).width().min(u16::MAX as usize) as u16
}

/// Longest prefix of `text` that fits in `max_width` cells
pub fn truncate_to_width(text: &str, max_width: u16) -> String {
    let mut result = String::new();
    let mut used = 0;
    let mut buf = [0u8; 4];
    for c in text.chars() {
        let width = display_width(c.encode_utf8(&mut buf));
        if used + width > max_width {
            break;
        }
        used += width;
        result.push(c);
    }
    result
}

/// Content area left over once a tab bar of `bar_height` rows is docked at
/// the bottom (or top) of `area`
pub fn adjust_for_tab_bar(area: Rect, bar_height: u16, bar_on_top: bool) -> Rect {
    let height = area.height.saturating_sub(bar_height);
    let y = if bar_on_top {
        area.y.saturating_add(area.height - height)
    } else {
        area.y
    };
    Rect { x: area.x, y, width: area.width, height }
}
