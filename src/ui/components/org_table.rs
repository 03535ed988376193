//! Record table with sortable column headers

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Row, StatefulWidget, Table, TableState, Widget},
};

use super::theme::{
    ACCENT_PRIMARY, BORDER_DEFAULT, HEADER_BG, SELECTED_BG, TEXT_MUTED, TEXT_PRIMARY,
};
use crate::data::{Organization, SortDir, SortField};
use crate::util::{sanitize_cell, truncate_to_width};

const COLUMN_SPACING: u16 = 1;

const WIDTHS: [Constraint; 4] = [
    Constraint::Percentage(24),
    Constraint::Percentage(22),
    Constraint::Percentage(18),
    Constraint::Fill(1),
];

/// Header label with an arrow when the column drives the sort
pub fn header_label(
    title: &str,
    column: Option<SortField>,
    sort_field: Option<SortField>,
    sort_dir: SortDir,
) -> String {
    match column {
        Some(field) if Some(field) == sort_field => {
            let arrow = match sort_dir {
                SortDir::Asc => "▲",
                SortDir::Desc => "▼",
            };
            format!("{title} {arrow}")
        }
        _ => title.to_string(),
    }
}

/// Table of the current page of records
pub struct OrgTable<'a> {
    items: &'a [Organization],
    sort_field: Option<SortField>,
    sort_dir: SortDir,
    selected: Option<usize>,
    focused: bool,
}

impl<'a> OrgTable<'a> {
    pub fn new(items: &'a [Organization]) -> Self {
        Self {
            items,
            sort_field: None,
            sort_dir: SortDir::Asc,
            selected: None,
            focused: true,
        }
    }

    pub fn sort(mut self, field: Option<SortField>, dir: SortDir) -> Self {
        self.sort_field = field;
        self.sort_dir = dir;
        self
    }

    pub fn selected(mut self, selected: Option<usize>) -> Self {
        self.selected = selected;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Widget for OrgTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(if self.focused {
                ACCENT_PRIMARY
            } else {
                BORDER_DEFAULT
            }));
        let inner = block.inner(area);
        block.render(area, buf);

        let columns = Layout::horizontal(WIDTHS)
            .spacing(COLUMN_SPACING)
            .split(inner);
        let fit = |text: &str, col: usize| {
            truncate_to_width(&sanitize_cell(text), columns[col].width as usize)
        };

        let headers = [
            ("Название", Some(SortField::Name)),
            ("ФИО директора", Some(SortField::Director)),
            ("Номер телефона", None),
            ("Адрес", None),
        ];
        let header = Row::new(headers.iter().enumerate().map(|(col, (title, field))| {
            fit(
                &header_label(title, *field, self.sort_field, self.sort_dir),
                col,
            )
        }))
        .style(
            Style::default()
                .fg(TEXT_PRIMARY)
                .bg(HEADER_BG)
                .add_modifier(Modifier::BOLD),
        );

        let rows = self.items.iter().map(|org| {
            Row::new([
                fit(&org.name, 0),
                fit(&org.director, 1),
                fit(&org.phone, 2),
                fit(&org.address.composed(), 3),
            ])
        });

        let table = Table::new(rows, WIDTHS)
            .header(header)
            .column_spacing(COLUMN_SPACING)
            .row_highlight_style(Style::default().bg(SELECTED_BG).add_modifier(Modifier::BOLD));

        let mut state = TableState::default().with_selected(self.selected);
        StatefulWidget::render(table, inner, buf, &mut state);

        if self.items.is_empty() && inner.height > 2 {
            Paragraph::new(Line::from("Нет записей"))
                .alignment(Alignment::Center)
                .style(Style::default().fg(TEXT_MUTED))
                .render(Rect::new(inner.x, inner.y + 2, inner.width, 1), buf);
        }
    }
}
