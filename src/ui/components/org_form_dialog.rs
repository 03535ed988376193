//! Add/edit dialog for an organization record

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::dialog::{DialogFrame, InstructionBar, StatusLine};
use super::text_input::TextInputState;
use super::theme::{ACCENT_PRIMARY, TEXT_FAINT, TEXT_MUTED, TEXT_PRIMARY, TEXT_SECONDARY};
use crate::data::{Address, Organization};

pub const ADD_TITLE: &str = "Добавить организацию";
pub const EDIT_TITLE: &str = "Редактировать организацию";

/// Form inputs in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Director,
    Phone,
    City,
    Street,
    House,
}

impl FormField {
    pub const ALL: [FormField; 6] = [
        FormField::Name,
        FormField::Director,
        FormField::Phone,
        FormField::City,
        FormField::Street,
        FormField::House,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "Название",
            FormField::Director => "ФИО директора",
            FormField::Phone => "Номер телефона",
            FormField::City => "Город",
            FormField::Street => "Улица",
            FormField::House => "Дом",
        }
    }

    fn is_address(&self) -> bool {
        matches!(self, FormField::City | FormField::Street | FormField::House)
    }
}

/// Whether the form creates a record or edits an existing one
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    Add,
    /// Editing; the original record keeps its id
    Edit(String),
}

/// State for the add/edit dialog
#[derive(Debug, Clone, Default)]
pub struct OrgFormState {
    pub visible: bool,
    pub mode: FormMode,
    inputs: [TextInputState; 6],
    focus: usize,
    /// Set when the user tried to submit an incomplete form
    attempted: bool,
}

impl OrgFormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open with empty fields for a new record
    pub fn open_add(&mut self) {
        *self = Self {
            visible: true,
            ..Self::default()
        };
    }

    /// Open pre-filled with an existing record
    pub fn open_edit(&mut self, org: &Organization) {
        let values = [
            &org.name,
            &org.director,
            &org.phone,
            &org.address.city,
            &org.address.street,
            &org.address.house,
        ];
        *self = Self {
            visible: true,
            mode: FormMode::Edit(org.id.clone()),
            inputs: values.map(|v| TextInputState::with_value(v)),
            focus: 0,
            attempted: false,
        };
    }

    pub fn close(&mut self) {
        self.visible = false;
    }

    pub fn title(&self) -> &'static str {
        match self.mode {
            FormMode::Add => ADD_TITLE,
            FormMode::Edit(_) => EDIT_TITLE,
        }
    }

    pub fn focused_field(&self) -> FormField {
        FormField::ALL[self.focus]
    }

    pub fn next_field(&mut self) {
        self.focus = (self.focus + 1) % FormField::ALL.len();
    }

    pub fn prev_field(&mut self) {
        self.focus = (self.focus + FormField::ALL.len() - 1) % FormField::ALL.len();
    }

    pub fn input(&self, field: FormField) -> &TextInputState {
        &self.inputs[field as usize]
    }

    pub fn focused_input_mut(&mut self) -> &mut TextInputState {
        &mut self.inputs[self.focus]
    }

    pub fn set_value(&mut self, field: FormField, value: &str) {
        self.inputs[field as usize].set(value);
    }

    /// OK is enabled only when every field has non-blank text
    pub fn is_valid(&self) -> bool {
        self.inputs.iter().all(|i| !i.value().trim().is_empty())
    }

    /// Build the trimmed record, or `None` while any field is blank
    pub fn submit(&mut self) -> Option<Organization> {
        if !self.is_valid() {
            self.attempted = true;
            // Jump to the first blank field
            if let Some(blank) = self.inputs.iter().position(|i| i.value().trim().is_empty()) {
                self.focus = blank;
            }
            return None;
        }

        let [name, director, phone, city, street, house] =
            self.inputs.clone().map(|i| i.value().trim().to_string());
        let address = Address::new(city, street, house);

        Some(match &self.mode {
            FormMode::Add => Organization::new(name, director, phone, address),
            FormMode::Edit(id) => Organization::with_id(id.clone(), name, director, phone, address),
        })
    }
}

const DIALOG_WIDTH: u16 = 64;
const LABEL_WIDTH: u16 = 18;

/// Add/edit dialog widget
pub struct OrgFormDialog<'a> {
    state: &'a OrgFormState,
}

impl<'a> OrgFormDialog<'a> {
    pub fn new(state: &'a OrgFormState) -> Self {
        Self { state }
    }
}

impl Widget for OrgFormDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if !self.state.visible {
            return;
        }

        // borders(2) + padding(1) + fields(6) + legend(1) + gap(1) + status(1) + buttons(1) + instructions(1)
        let height = 14;
        let inner = DialogFrame::new(self.state.title(), DIALOG_WIDTH, height).render(area, buf);
        if inner.height < 10 || inner.width <= LABEL_WIDTH + 2 {
            return;
        }

        let mut y = inner.y + 1;
        for (idx, field) in FormField::ALL.iter().enumerate() {
            if *field == FormField::City {
                Paragraph::new(Line::from(Span::styled(
                    " Адрес",
                    Style::default().fg(TEXT_MUTED).add_modifier(Modifier::ITALIC),
                )))
                .render(Rect::new(inner.x, y, inner.width, 1), buf);
                y += 1;
            }

            let focused = idx == self.state.focus;
            let indent = if field.is_address() { "   " } else { " " };
            let label_style = if focused {
                Style::default()
                    .fg(ACCENT_PRIMARY)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(TEXT_SECONDARY)
            };
            Paragraph::new(Line::from(Span::styled(
                format!("{indent}{}", field.label()),
                label_style,
            )))
            .render(Rect::new(inner.x, y, LABEL_WIDTH, 1), buf);

            let input_area = Rect::new(
                inner.x + LABEL_WIDTH,
                y,
                inner.width - LABEL_WIDTH - 1,
                1,
            );
            let input = &self.state.inputs[idx];
            let blank = input.value().trim().is_empty();
            let placeholder_style = if self.state.attempted && blank {
                Style::default().fg(Color::Red)
            } else {
                Style::default().fg(TEXT_FAINT)
            };
            input.render_with_placeholder(
                input_area,
                buf,
                Style::default().fg(TEXT_PRIMARY),
                focused,
                "·",
                placeholder_style,
            );
            y += 1;
        }

        let status_y = inner.y + inner.height.saturating_sub(3);
        let status_area = Rect::new(inner.x, status_y, inner.width, 1);
        if self.state.attempted && !self.state.is_valid() {
            StatusLine::new()
                .error("Заполните все поля")
                .render(status_area, buf);
        }

        let ok_style = if self.state.is_valid() {
            Style::default()
                .fg(Color::Black)
                .bg(ACCENT_PRIMARY)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(TEXT_FAINT)
        };
        let buttons = Line::from(vec![
            Span::styled(" Отмена ", Style::default().fg(TEXT_MUTED)),
            Span::raw("    "),
            Span::styled(" OK ", ok_style),
        ]);
        Paragraph::new(buttons)
            .alignment(Alignment::Center)
            .render(Rect::new(inner.x, status_y + 1, inner.width, 1), buf);

        InstructionBar::new(vec![
            ("Tab", "поле"),
            ("Enter", "OK"),
            ("Esc", "отмена"),
        ])
        .render(
            Rect::new(inner.x, inner.y + inner.height.saturating_sub(1), inner.width, 1),
            buf,
        );
    }
}
