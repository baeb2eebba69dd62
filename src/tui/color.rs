//! Style-tag → terminal color mapping.

use crossterm::style::Color;

use crate::format::StyleTag;

/// Foreground color for a style tag: cyan banners, green titles, yellow
/// prompts and detail rows, magenta result values, red alerts.
pub fn color_for(tag: StyleTag) -> Color {
    match tag {
        StyleTag::Banner => Color::Cyan,
        StyleTag::Title => Color::Green,
        StyleTag::Prompt => Color::Yellow,
        StyleTag::Value => Color::Magenta,
        StyleTag::Alert => Color::Red,
    }
}
