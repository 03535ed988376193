//! "◀ Страница N из M ▶" page indicator

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::theme::{ACCENT_PRIMARY, TEXT_FAINT, TEXT_SECONDARY};

pub struct Pager {
    page: usize,
    total_pages: usize,
}

impl Pager {
    pub fn new(page: usize, total_pages: usize) -> Self {
        Self { page, total_pages }
    }

    pub fn label(&self) -> String {
        format!("Страница {} из {}", self.page, self.total_pages)
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

fn arrow_style(enabled: bool) -> Style {
    if enabled {
        Style::default()
            .fg(ACCENT_PRIMARY)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(TEXT_FAINT)
    }
}

impl Widget for Pager {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = Line::from(vec![
            Span::styled("◀", arrow_style(self.has_prev())),
            Span::styled(
                format!("  {}  ", self.label()),
                Style::default().fg(TEXT_SECONDARY),
            ),
            Span::styled("▶", arrow_style(self.has_next())),
        ]);
        Paragraph::new(line)
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}
