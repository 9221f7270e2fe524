use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, Clear, Row, Table, Widget},
};

use super::helpers::{centered_rect, draw_drop_shadow};

const SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Reading",
        &[
            (" j / \u{2193}", "Scroll down one line"),
            (" k / \u{2191}", "Scroll up one line"),
            (" Ctrl-d / Ctrl-u", "Half page down / up"),
            (" PgDn / PgUp", "Page down / up"),
            (" g / G", "Top / bottom of the page"),
            (" n / p", "Next / previous section"),
        ],
    ),
    (
        "Search",
        &[
            (" Ctrl-K  /", "Open search"),
            (" \u{2191} / \u{2193}", "Move selection"),
            (" Enter", "Go to the selected section"),
            (" Ctrl-u", "Clear the query"),
            (" Esc", "Close search"),
        ],
    ),
    (
        "General",
        &[
            (" t", "Switch theme"),
            (" ?", "Show this help"),
            (" Esc", "Close help / dismiss error"),
            (" q", "Quit"),
        ],
    ),
];

pub struct HelpModal<'a> {
    pub theme: &'a Theme,
}

impl Widget for HelpModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let help_area = centered_rect(70, 80, area);
        if help_area.width == 0 || help_area.height == 0 {
            return;
        }
        draw_drop_shadow(buf, help_area, area);
        Clear.render(help_area, buf);

        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(" HELP - KEYBINDINGS ", self.theme.toc_title),
                Span::raw(" "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border_focus)
            .style(self.theme.palette);

        let key_style = self.theme.footer_key;
        let desc_style = self.theme.palette_description;
        let category_style = self.theme.palette_title;

        let mut rows = Vec::new();
        for (i, (category, bindings)) in SECTIONS.iter().enumerate() {
            if i > 0 {
                rows.push(Row::new(vec![Cell::from(""), Cell::from("")]));
            }
            rows.push(Row::new(vec![
                Cell::from(Span::styled(*category, category_style)),
                Cell::from(""),
            ]));
            for (key, desc) in *bindings {
                rows.push(Row::new(vec![
                    Cell::from(Span::styled(*key, key_style)),
                    Cell::from(Span::styled(*desc, desc_style)),
                ]));
            }
        }

        let table = Table::new(
            rows,
            [Constraint::Percentage(35), Constraint::Percentage(65)],
        )
        .block(block);

        table.render(help_area, buf);
    }
}
