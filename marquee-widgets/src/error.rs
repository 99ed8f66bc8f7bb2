use marquee_core::{Theme, Widget};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    prelude::Widget as RatatuiWidget,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};

use crate::common::ThemePalette;

/// Widget that displays error messages in place of normal content
#[derive(Debug)]
pub struct ErrorWidget {
    message: String,
    title: String,
    theme: Theme,
}

impl ErrorWidget {
    pub fn new(theme: Theme, message: String) -> Self {
        Self {
            title: "Error".to_string(),
            theme,
            message,
        }
    }

    pub fn config_error(theme: Theme, message: String) -> Self {
        Self {
            title: "Configuration Error".to_string(),
            theme,
            message,
        }
    }
}

impl Widget for ErrorWidget {
    fn theme(&self) -> Theme {
        self.theme
    }

    fn render(&mut self, area: Rect, buf: &mut Buffer) {
        let palette = ThemePalette::for_theme(self.theme);

        let block = Block::default()
            .title(self.title.as_str())
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red));

        let paragraph = Paragraph::new(self.message.as_str())
            .block(block)
            .style(Style::default().fg(palette.text));

        RatatuiWidget::render(paragraph, area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_text(buf: &Buffer, y: u16) -> String {
        (buf.area.left()..buf.area.right())
            .map(|x| buf[(x, y)].symbol())
            .collect()
    }

    #[test]
    fn test_message_and_title_are_rendered() {
        let area = Rect::new(0, 0, 40, 3);
        let mut widget =
            ErrorWidget::config_error(Theme::Dark, "Unknown theme 'solarized'".to_string());

        let mut buf = Buffer::empty(area);
        widget.render(area, &mut buf);

        assert!(row_text(&buf, 0).contains("Configuration Error"));
        assert!(row_text(&buf, 1).contains("Unknown theme 'solarized'"));
    }
}
