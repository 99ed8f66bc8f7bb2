// marquee-widgets/src/checkbox.rs
use marquee_core::{Theme, Widget};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    prelude::Widget as RatatuiWidget,
    style::Style,
    widgets::{Block, Borders, Paragraph},
};

use crate::common::{ThemePalette, border_type};

/// A themed checkbox with a toggleable mark
#[derive(Debug)]
pub struct Checkbox {
    label: String,
    theme: Theme,
    checked: bool,
}

impl Checkbox {
    pub fn new(theme: Theme) -> Self {
        Self::with_label(theme, "Accessible seating")
    }

    pub fn with_label(theme: Theme, label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            theme,
            checked: false,
        }
    }

    pub fn toggle(&mut self) {
        self.checked = !self.checked;
    }

    pub fn is_checked(&self) -> bool {
        self.checked
    }
}

impl Widget for Checkbox {
    fn theme(&self) -> Theme {
        self.theme
    }

    fn render(&mut self, area: Rect, buf: &mut Buffer) {
        let palette = ThemePalette::for_theme(self.theme);
        let mark = if self.checked { "x" } else { " " };

        let block = Block::default()
            .title(format!(" {} ", self.theme.label()))
            .borders(Borders::ALL)
            .border_type(border_type(self.theme))
            .border_style(Style::default().fg(palette.border));

        let paragraph = Paragraph::new(format!("[{}] {}", mark, self.label))
            .block(block)
            .style(Style::default().fg(palette.text));

        RatatuiWidget::render(paragraph, area, buf);
    }
}
