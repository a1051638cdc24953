//! Theme module for the portfolio TUI
//!
//! Centralized color palette plus the per-section background themes the
//! theme switcher selects between. The section palettes are muted tints
//! over the base background so the page shifts ambience as the most
//! visible section changes.

use ratatui::style::Color;
use ratatui::symbols::border;

use crate::models::SectionId;

// ============================================================================
// Background Colors - Night Gallery Palette
// ============================================================================

/// Primary background color - near-black neutral (#0a0a0c)
pub const BG_PRIMARY: Color = Color::Rgb(10, 10, 12);

/// Secondary background color - raised card surface (#141418)
pub const BG_SECONDARY: Color = Color::Rgb(20, 20, 24);

/// Tertiary background color - highlighted/active card (#1e1e24)
pub const BG_TERTIARY: Color = Color::Rgb(30, 30, 36);

/// Subtle border color (#26262e)
pub const BORDER_SUBTLE: Color = Color::Rgb(38, 38, 46);

// ============================================================================
// Accent Colors - Lime Primary
// ============================================================================

/// Primary accent - lime (#bef264)
pub const LIME_PRIMARY: Color = Color::Rgb(190, 242, 100);

/// Dimmed lime for secondary accents (#7a9e3f)
pub const LIME_DIM: Color = Color::Rgb(122, 158, 63);

// ============================================================================
// Text Colors
// ============================================================================

/// Primary text color - bright (#f5f5f5)
pub const TEXT_PRIMARY: Color = Color::Rgb(245, 245, 245);

/// Secondary text color - muted (#b3b3bd)
pub const TEXT_SECONDARY: Color = Color::Rgb(179, 179, 189);

/// Muted text color - labels and hints (#73737d)
pub const TEXT_MUTED: Color = Color::Rgb(115, 115, 125);

/// Not-yet-revealed text - barely above the background (#34343c)
pub const TEXT_HIDDEN: Color = Color::Rgb(52, 52, 60);

/// Rounded border set used by all cards
pub const ROUNDED_BORDERS: border::Set = border::ROUNDED;

/// Per-section background theme: page fill plus two glow accents used by
/// the decorative blocks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    pub bg: Color,
    pub glow_a: Color,
    pub glow_b: Color,
}

/// Look up the background theme for a section key.
pub fn theme_for(section: SectionId) -> Theme {
    match section {
        SectionId::Top => Theme {
            bg: BG_PRIMARY,
            glow_a: Color::Rgb(42, 42, 48),
            glow_b: Color::Rgb(30, 30, 34),
        },
        SectionId::Highlights => Theme {
            bg: Color::Rgb(16, 12, 26),
            glow_a: Color::Rgb(56, 40, 96),
            glow_b: Color::Rgb(14, 54, 70),
        },
        SectionId::Experience => Theme {
            bg: Color::Rgb(24, 14, 10),
            glow_a: Color::Rgb(88, 46, 34),
            glow_b: Color::Rgb(36, 32, 30),
        },
        SectionId::Projects => Theme {
            bg: Color::Rgb(8, 22, 16),
            glow_a: Color::Rgb(30, 82, 58),
            glow_b: Color::Rgb(32, 36, 32),
        },
        SectionId::Skills => Theme {
            bg: Color::Rgb(24, 20, 6),
            glow_a: Color::Rgb(88, 72, 18),
            glow_b: Color::Rgb(38, 36, 28),
        },
        SectionId::Education => Theme {
            bg: Color::Rgb(6, 16, 26),
            glow_a: Color::Rgb(16, 56, 86),
            glow_b: Color::Rgb(30, 34, 38),
        },
        SectionId::Contact => Theme {
            bg: Color::Rgb(12, 22, 8),
            glow_a: Color::Rgb(48, 84, 30),
            glow_b: Color::Rgb(34, 38, 32),
        },
    }
}

/// Alternate between two colors at a slow pulse, driven by the animation
/// tick. Used for the active story card indicator.
pub fn get_pulse_color(tick: u64, bright: Color, dim: Color) -> Color {
    if (tick / 4) % 2 == 0 {
        bright
    } else {
        dim
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_lookup_covers_every_section() {
        let mut seen = Vec::new();
        for section in [
            SectionId::Top,
            SectionId::Highlights,
            SectionId::Experience,
            SectionId::Projects,
            SectionId::Skills,
            SectionId::Education,
            SectionId::Contact,
        ] {
            seen.push(theme_for(section).bg);
        }
        // Every section carries its own fill.
        for (i, bg) in seen.iter().enumerate() {
            for other in &seen[i + 1..] {
                assert_ne!(bg, other);
            }
        }
    }

    #[test]
    fn test_pulse_alternates() {
        let a = get_pulse_color(0, LIME_PRIMARY, LIME_DIM);
        let b = get_pulse_color(4, LIME_PRIMARY, LIME_DIM);
        assert_ne!(a, b);
        assert_eq!(get_pulse_color(8, LIME_PRIMARY, LIME_DIM), a);
    }
}
