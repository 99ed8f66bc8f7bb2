// marquee-widgets/src/common/theme.rs
use marquee_core::Theme;
use ratatui::{style::Color, widgets::BorderType};

/// Colors one theme family styles its widgets with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemePalette {
    /// Border color for widget frames
    pub border: Color,
    /// Primary text color
    pub text: Color,
    /// Color for interactive accents (button glyphs, checkbox marks)
    pub accent: Color,
}

/// Palette used by every dark-themed widget
pub const DARK_PALETTE: ThemePalette = ThemePalette {
    border: Color::DarkGray,
    text: Color::White,
    accent: Color::Cyan,
};

/// Palette used by every light-themed widget
pub const LIGHT_PALETTE: ThemePalette = ThemePalette {
    border: Color::Gray,
    text: Color::Black,
    accent: Color::Blue,
};

impl ThemePalette {
    /// Get the palette for a theme
    ///
    /// # Arguments
    /// * `theme` - Theme family to style for
    ///
    /// # Returns
    /// The matching palette constant
    pub fn for_theme(theme: Theme) -> ThemePalette {
        match theme {
            Theme::Dark => DARK_PALETTE,
            Theme::Light => LIGHT_PALETTE,
        }
    }
}

/// Border glyph set for a theme
///
/// Dark widgets use heavy borders, light widgets plain ones.
pub fn border_type(theme: Theme) -> BorderType {
    match theme {
        Theme::Dark => BorderType::Thick,
        Theme::Light => BorderType::Plain,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palettes_are_distinct() {
        assert_ne!(DARK_PALETTE, LIGHT_PALETTE);
    }

    #[test]
    fn test_for_theme() {
        assert_eq!(ThemePalette::for_theme(Theme::Dark), DARK_PALETTE);
        assert_eq!(ThemePalette::for_theme(Theme::Light), LIGHT_PALETTE);
    }

    #[test]
    fn test_border_type() {
        assert_eq!(border_type(Theme::Dark), BorderType::Thick);
        assert_eq!(border_type(Theme::Light), BorderType::Plain);
    }
}
