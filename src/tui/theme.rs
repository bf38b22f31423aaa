//! TUI color theme
//!
//! Tier highlighting mirrors the classic profiler palette: light coral for
//! the worst performers of a sibling group, light salmon for the next tier.

use ratatui::style::Color;

use crate::domain::ColorTag;

pub const TOP_TIER: Color = Color::Rgb(240, 128, 128); // light coral
pub const SECOND_TIER: Color = Color::Rgb(255, 160, 122); // light salmon
pub const ACCENT: Color = Color::Rgb(255, 191, 0);
pub const BORDER: Color = Color::Rgb(0, 180, 0);
pub const TEXT: Color = Color::White;
pub const TEXT_DIM: Color = Color::Rgb(130, 130, 130);

/// Row highlight color for a node's rank tag, if any.
#[must_use]
pub fn tag_color(tag: ColorTag) -> Option<Color> {
    match tag {
        ColorTag::TopTier => Some(TOP_TIER),
        ColorTag::SecondTier => Some(SECOND_TIER),
        ColorTag::None => None,
    }
}
