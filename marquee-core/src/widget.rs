// marquee-core/src/widget.rs
use ratatui::{buffer::Buffer, layout::Rect};

/// Visual theme a widget belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    pub fn label(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }
}

/// Core widget trait
pub trait Widget: Send + Sync {
    /// The theme family this widget was created for
    fn theme(&self) -> Theme;

    /// Render the widget to the buffer
    fn render(&mut self, area: Rect, buf: &mut Buffer);
}

/// Produces a matched set of widgets for one theme.
///
/// Every widget obtained from one factory reports that factory's theme; a
/// concrete factory that grows a new widget kind must extend every sibling
/// factory in lockstep to keep the set matched.
pub trait WidgetFactory {
    fn theme(&self) -> Theme;

    fn create_button(&self) -> Box<dyn Widget>;

    fn create_checkbox(&self) -> Box<dyn Widget>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_labels() {
        assert_eq!(Theme::Dark.label(), "dark");
        assert_eq!(Theme::Light.label(), "light");
    }
}
