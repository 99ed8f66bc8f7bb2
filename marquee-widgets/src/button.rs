use marquee_core::{Theme, Widget};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    prelude::Widget as RatatuiWidget,
    style::Style,
    widgets::{Block, Borders, Paragraph},
};

use crate::common::{ThemePalette, border_type};

/// A themed push button
///
/// Carries no state beyond its theme and label; rendering the same button
/// into the same area always produces the same cells.
#[derive(Debug)]
pub struct Button {
    label: String,
    theme: Theme,
}

impl Button {
    pub fn new(theme: Theme) -> Self {
        Self::with_label(theme, "Book Now")
    }

    pub fn with_label(theme: Theme, label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            theme,
        }
    }
}

impl Widget for Button {
    fn theme(&self) -> Theme {
        self.theme
    }

    fn render(&mut self, area: Rect, buf: &mut Buffer) {
        let palette = ThemePalette::for_theme(self.theme);

        let block = Block::default()
            .title(format!(" {} ", self.theme.label()))
            .borders(Borders::ALL)
            .border_type(border_type(self.theme))
            .border_style(Style::default().fg(palette.border));

        let paragraph = Paragraph::new(format!("▶ {}", self.label))
            .block(block)
            .style(Style::default().fg(palette.accent));

        RatatuiWidget::render(paragraph, area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_into(widget: &mut dyn Widget, area: Rect) -> Buffer {
        let mut buf = Buffer::empty(area);
        widget.render(area, &mut buf);
        buf
    }

    fn row_text(buf: &Buffer, y: u16) -> String {
        (buf.area.left()..buf.area.right())
            .map(|x| buf[(x, y)].symbol())
            .collect()
    }

    #[test]
    fn test_render_is_deterministic() {
        let area = Rect::new(0, 0, 24, 3);
        let first = render_into(&mut Button::new(Theme::Dark), area);
        let second = render_into(&mut Button::new(Theme::Dark), area);
        assert_eq!(first, second);
    }

    #[test]
    fn test_themes_render_differently() {
        let area = Rect::new(0, 0, 24, 3);
        let dark = render_into(&mut Button::new(Theme::Dark), area);
        let light = render_into(&mut Button::new(Theme::Light), area);

        assert_ne!(dark, light);
        // Heavy vs plain frame corners
        assert_eq!(dark[(0, 0)].symbol(), "┏");
        assert_eq!(light[(0, 0)].symbol(), "┌");
        assert!(row_text(&dark, 0).contains(" dark "));
        assert!(row_text(&light, 0).contains(" light "));
    }

    #[test]
    fn test_label_is_rendered() {
        let area = Rect::new(0, 0, 24, 3);
        let mut button = Button::with_label(Theme::Light, "Buy Tickets");
        let buf = render_into(&mut button, area);
        assert!(row_text(&buf, 1).contains("▶ Buy Tickets"));
    }

    #[test]
    fn test_reports_its_theme() {
        assert_eq!(Button::new(Theme::Dark).theme(), Theme::Dark);
        assert_eq!(Button::new(Theme::Light).theme(), Theme::Light);
    }
}
