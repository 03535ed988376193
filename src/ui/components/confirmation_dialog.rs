//! Delete confirmation dialog

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use super::dialog::{DialogFrame, InstructionBar};
use super::theme::{ACCENT_ERROR, TEXT_MUTED};

/// What the dialog is asking about
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmationContext {
    /// Deleting the record with this id
    DeleteRecord(String),
}

/// State for the confirmation dialog
#[derive(Debug, Clone)]
pub struct ConfirmationDialogState {
    pub visible: bool,
    pub title: String,
    pub message: String,
    pub confirm_text: String,
    pub cancel_text: String,
    /// Currently selected button (0 = Cancel, 1 = Confirm)
    pub selected: usize,
    pub context: Option<ConfirmationContext>,
}

impl Default for ConfirmationDialogState {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfirmationDialogState {
    pub fn new() -> Self {
        Self {
            visible: false,
            title: String::new(),
            message: String::new(),
            confirm_text: "OK".to_string(),
            cancel_text: "Отмена".to_string(),
            selected: 0,
            context: None,
        }
    }

    /// Ask whether to delete the record with `id`; Cancel starts highlighted
    pub fn show_delete(&mut self, id: impl Into<String>) {
        self.visible = true;
        self.title = "Удаление".to_string();
        self.message = "Удалить запись?".to_string();
        self.confirm_text = "Удалить".to_string();
        self.selected = 0;
        self.context = Some(ConfirmationContext::DeleteRecord(id.into()));
    }

    /// Hide the dialog and hand back its context
    pub fn hide(&mut self) -> Option<ConfirmationContext> {
        self.visible = false;
        self.context.take()
    }

    pub fn toggle_selection(&mut self) {
        self.selected = if self.selected == 0 { 1 } else { 0 };
    }

    pub fn is_confirm_selected(&self) -> bool {
        self.selected == 1
    }

    pub fn is_cancel_selected(&self) -> bool {
        self.selected == 0
    }
}

/// Confirmation dialog widget
pub struct ConfirmationDialog<'a> {
    state: &'a ConfirmationDialogState,
}

impl<'a> ConfirmationDialog<'a> {
    pub fn new(state: &'a ConfirmationDialogState) -> Self {
        Self { state }
    }

    fn message_lines(&self, width: u16) -> u16 {
        if self.state.message.is_empty() {
            return 0;
        }
        let available = width.saturating_sub(4).max(1) as usize;
        self.state.message.width().div_ceil(available).max(1) as u16
    }
}

const DIALOG_WIDTH: u16 = 44;

impl Widget for ConfirmationDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if !self.state.visible {
            return;
        }

        // borders(2) + padding(1) + message + gap(1) + buttons(1) + gap(1) + instructions(1)
        let message_lines = self.message_lines(DIALOG_WIDTH);
        let height = 7 + message_lines;

        let frame = DialogFrame::new(&self.state.title, DIALOG_WIDTH, height)
            .border_color(ACCENT_ERROR);
        let inner = frame.render(area, buf);

        if inner.height < 4 {
            return;
        }

        Paragraph::new(self.state.message.as_str())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(
                Rect {
                    x: inner.x,
                    y: inner.y + 1,
                    width: inner.width,
                    height: message_lines.min(inner.height.saturating_sub(1)),
                },
                buf,
            );

        let cancel_style = if self.state.is_cancel_selected() {
            Style::default()
                .fg(Color::Black)
                .bg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(TEXT_MUTED)
        };
        let confirm_style = if self.state.is_confirm_selected() {
            Style::default()
                .fg(Color::Black)
                .bg(ACCENT_ERROR)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(ACCENT_ERROR)
        };

        let buttons = Line::from(vec![
            Span::styled(format!(" {} ", self.state.cancel_text), cancel_style),
            Span::raw("    "),
            Span::styled(format!(" {} ", self.state.confirm_text), confirm_style),
        ]);
        Paragraph::new(buttons).alignment(Alignment::Center).render(
            Rect {
                x: inner.x,
                y: inner.y + inner.height.saturating_sub(3),
                width: inner.width,
                height: 1,
            },
            buf,
        );

        InstructionBar::new(vec![
            ("←/→", "выбор"),
            ("Enter", "OK"),
            ("Esc", "отмена"),
            ("y/n", "быстро"),
        ])
        .render(
            Rect {
                x: inner.x,
                y: inner.y + inner.height.saturating_sub(1),
                width: inner.width,
                height: 1,
            },
            buf,
        );
    }
}
