use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Widget},
};

use super::text_input::TextInputState;
use super::theme::{ACCENT_PRIMARY, BORDER_DEFAULT, TEXT_FAINT, TEXT_PRIMARY};

pub const SEARCH_PLACEHOLDER: &str = "Найти по ФИО...";

/// Bordered search box above the table
pub struct SearchBar<'a> {
    input: &'a TextInputState,
    focused: bool,
}

impl<'a> SearchBar<'a> {
    pub fn new(input: &'a TextInputState) -> Self {
        Self {
            input,
            focused: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Widget for SearchBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border = if self.focused {
            ACCENT_PRIMARY
        } else {
            BORDER_DEFAULT
        };
        let block = Block::default()
            .title(" Поиск ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border));
        let inner = block.inner(area);
        block.render(area, buf);

        let text_area = Rect {
            x: inner.x + 1,
            width: inner.width.saturating_sub(2),
            ..inner
        };
        self.input.render_with_placeholder(
            text_area,
            buf,
            Style::default().fg(TEXT_PRIMARY),
            self.focused,
            SEARCH_PLACEHOLDER,
            Style::default().fg(TEXT_FAINT),
        );
    }
}
