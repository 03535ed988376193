//! Reusable dialog frame, instruction bar and status line

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use super::key_hints::{render_key_hints, KeyHintBarStyle};
use super::theme::{ACCENT_ERROR, ACCENT_PRIMARY, ACCENT_SUCCESS};

/// A centered dialog frame with title and border
pub struct DialogFrame<'a> {
    title: &'a str,
    width: u16,
    height: u16,
    border_color: Color,
}

impl<'a> DialogFrame<'a> {
    pub fn new(title: &'a str, width: u16, height: u16) -> Self {
        Self {
            title,
            width,
            height,
            border_color: ACCENT_PRIMARY,
        }
    }

    pub fn border_color(mut self, color: Color) -> Self {
        self.border_color = color;
        self
    }

    /// Render the dialog frame and return the inner area for content
    pub fn render(&self, area: Rect, buf: &mut Buffer) -> Rect {
        // Capped to the screen
        let dialog_width = self.width.min(area.width.saturating_sub(4));
        let dialog_height = self.height.min(area.height.saturating_sub(2));

        let dialog_area = Rect {
            x: area.x + area.width.saturating_sub(dialog_width) / 2,
            y: area.y + area.height.saturating_sub(dialog_height) / 2,
            width: dialog_width,
            height: dialog_height,
        };

        Clear.render(dialog_area, buf);

        let block = Block::default()
            .title(format!(" {} ", self.title))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.border_color));

        let inner = block.inner(dialog_area);
        block.render(dialog_area, buf);

        inner
    }
}

/// An instruction bar showing keyboard shortcuts
pub struct InstructionBar<'a> {
    instructions: Vec<(&'a str, &'a str)>,
}

impl<'a> InstructionBar<'a> {
    pub fn new(instructions: Vec<(&'a str, &'a str)>) -> Self {
        Self { instructions }
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        render_key_hints(
            area,
            buf,
            &self.instructions,
            KeyHintBarStyle::instruction_bar(),
        );
    }
}

/// A one-line status message (error, success, or empty)
#[derive(Debug, Clone, Default)]
pub struct StatusLine<'a> {
    error: Option<&'a str>,
    success: Option<&'a str>,
}

impl<'a> StatusLine<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(mut self, msg: &'a str) -> Self {
        self.error = Some(msg);
        self.success = None;
        self
    }

    pub fn success(mut self, msg: &'a str) -> Self {
        self.success = Some(msg);
        self.error = None;
        self
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        let line = if let Some(error) = self.error {
            Line::from(Span::styled(
                format!("  {}", error),
                Style::default().fg(ACCENT_ERROR),
            ))
        } else if let Some(success) = self.success {
            Line::from(Span::styled(
                format!("  {}", success),
                Style::default().fg(ACCENT_SUCCESS),
            ))
        } else {
            Line::default()
        };

        Paragraph::new(line).render(area, buf);
    }
}
