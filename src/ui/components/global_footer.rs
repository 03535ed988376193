use ratatui::{buffer::Buffer, layout::Rect};

use super::key_hints::{render_key_hints, KeyHintBarStyle};
use super::theme::{FOOTER_BG, KEY_HINT_BG};
use crate::ui::events::InputMode;

/// Context for determining which footer hints to show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FooterContext {
    #[default]
    Table,
    Search,
    Form,
    Dialog,
}

impl FooterContext {
    pub fn from_input_mode(mode: InputMode) -> Self {
        match mode {
            InputMode::Table => FooterContext::Table,
            InputMode::Search => FooterContext::Search,
            InputMode::Form => FooterContext::Form,
            InputMode::ConfirmDelete => FooterContext::Dialog,
        }
    }
}

/// Bottom line of keyboard shortcuts for the current mode
pub struct GlobalFooter {
    hints: Vec<(&'static str, &'static str)>,
}

impl GlobalFooter {
    pub fn for_context(context: FooterContext) -> Self {
        Self {
            hints: match context {
                FooterContext::Table => Self::table_hints(),
                FooterContext::Search => Self::search_hints(),
                FooterContext::Form => Self::form_hints(),
                FooterContext::Dialog => Self::dialog_hints(),
            },
        }
    }

    pub fn from_input_mode(mode: InputMode) -> Self {
        Self::for_context(FooterContext::from_input_mode(mode))
    }

    pub fn table_hints() -> Vec<(&'static str, &'static str)> {
        vec![
            ("/", "поиск"),
            ("a", "добавить"),
            ("enter", "изменить"),
            ("x", "удалить"),
            ("1/2", "сортировка"),
            ("←→", "страницы"),
            ("q", "выход"),
        ]
    }

    pub fn search_hints() -> Vec<(&'static str, &'static str)> {
        vec![("enter", "к таблице"), ("esc", "сбросить"), ("C-q", "выход")]
    }

    pub fn form_hints() -> Vec<(&'static str, &'static str)> {
        vec![
            ("tab", "следующее поле"),
            ("enter", "OK"),
            ("esc", "отмена"),
        ]
    }

    pub fn dialog_hints() -> Vec<(&'static str, &'static str)> {
        vec![("y", "удалить"), ("n", "отмена")]
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        render_key_hints(
            area,
            buf,
            &self.hints,
            KeyHintBarStyle::footer_bar(KEY_HINT_BG, FOOTER_BG),
        );
    }
}

impl Default for GlobalFooter {
    fn default() -> Self {
        Self::for_context(FooterContext::default())
    }
}
