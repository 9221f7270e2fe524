use crate::app::state::SearchPaletteState;
use crate::domain::models::SearchEntry;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Widget},
};

use super::helpers::{draw_drop_shadow, top_third_rect};

const MODAL_WIDTH: u16 = 72;
const MODAL_HEIGHT: u16 = 22;
/// Each result is a title line plus a description line.
const ROWS_PER_RESULT: u16 = 2;

pub const PLACEHOLDER: &str = "Search documentation...";

pub struct SearchPaletteModal<'a> {
    pub state: &'a SearchPaletteState,
    pub entries: &'a [SearchEntry],
    pub theme: &'a Theme,
}

struct PaletteAreas {
    modal: Rect,
    query: Rect,
    separator: Rect,
    results: Rect,
    hints: Rect,
}

fn areas(terminal: Rect) -> PaletteAreas {
    let modal = top_third_rect(MODAL_WIDTH, MODAL_HEIGHT, terminal);
    let inner = Block::default().borders(Borders::ALL).inner(modal);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Query input
            Constraint::Length(1), // Separator
            Constraint::Min(0),    // Results
            Constraint::Length(1), // Key hints
        ])
        .split(inner);
    PaletteAreas {
        modal,
        query: rows[0],
        separator: rows[1],
        results: rows[2],
        hints: rows[3],
    }
}

/// Outer box of the palette, used to tell clicks inside from backdrop
/// clicks.
pub fn modal_area(terminal: Rect) -> Rect {
    areas(terminal).modal
}

/// First result shown so that the selection stays in view.
fn first_visible(selected: usize, capacity: usize) -> usize {
    if capacity == 0 {
        return selected;
    }
    (selected + 1).saturating_sub(capacity)
}

fn capacity(results: Rect) -> usize {
    usize::from(results.height / ROWS_PER_RESULT)
}

/// Maps a click to a position in the current result list.
pub fn result_at(
    terminal: Rect,
    state: &SearchPaletteState,
    column: u16,
    row: u16,
) -> Option<usize> {
    let results = areas(terminal).results;
    if column < results.x || column >= results.right() || row < results.y {
        return None;
    }
    let slot = usize::from((row - results.y) / ROWS_PER_RESULT);
    if slot >= capacity(results) {
        return None;
    }
    let idx = first_visible(state.selected_index, capacity(results)) + slot;
    (idx < state.matches.len()).then_some(idx)
}

impl SearchPaletteModal<'_> {
    fn render_query(&self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        let theme = self.theme;
        let mut spans = vec![Span::styled(" \u{2315} ", theme.palette_prompt)];
        if self.state.query.is_empty() {
            spans.push(Span::styled(
                "_",
                theme.palette_query.add_modifier(Modifier::SLOW_BLINK),
            ));
            spans.push(Span::styled(PLACEHOLDER, theme.palette_placeholder));
        } else {
            spans.push(Span::styled(self.state.query.as_str(), theme.palette_query));
            spans.push(Span::styled(
                "_",
                theme.palette_query.add_modifier(Modifier::SLOW_BLINK),
            ));
        }
        buf.set_line(area.x, area.y, &Line::from(spans), area.width);
    }

    fn render_results(&self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;
        if self.state.matches.is_empty() {
            let message = if self.state.query.is_empty() {
                "Type to search documentation...".to_string()
            } else {
                format!("No results found for \"{}\"", self.state.query)
            };
            if area.height > 1 {
                Line::from(Span::styled(message, theme.palette_empty))
                    .centered()
                    .render(Rect::new(area.x, area.y + 1, area.width, 1), buf);
            }
            return;
        }

        let capacity = capacity(area);
        let first = first_visible(self.state.selected_index, capacity);
        let width = usize::from(area.width);

        for (slot, (pos, &entry_idx)) in self
            .state
            .matches
            .iter()
            .enumerate()
            .skip(first)
            .take(capacity)
            .enumerate()
        {
            let Some(entry) = self.entries.get(entry_idx) else {
                continue;
            };
            let y = area.y + slot as u16 * ROWS_PER_RESULT;
            let selected = pos == self.state.selected_index;

            let (title_style, desc_style, marker) = if selected {
                (
                    theme.palette_selected.add_modifier(Modifier::BOLD),
                    theme.palette_selected,
                    "\u{25B8} ",
                )
            } else {
                (theme.palette_title, theme.palette_description, "  ")
            };

            let title = format!(" {marker}{}", entry.title);
            let desc = format!("    {}", entry.description);
            buf.set_line(
                area.x,
                y,
                &Line::from(Span::styled(format!("{title:<width$}"), title_style)),
                area.width,
            );
            if y + 1 < area.bottom() {
                buf.set_line(
                    area.x,
                    y + 1,
                    &Line::from(Span::styled(format!("{desc:<width$}"), desc_style)),
                    area.width,
                );
            }
        }
    }

    fn render_hints(&self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        let theme = self.theme;
        let left = Line::from(vec![
            Span::styled(" Press ", theme.palette_description),
            Span::styled("\u{21B5}", theme.footer_key),
            Span::styled(" to select", theme.palette_description),
        ]);
        buf.set_line(area.x, area.y, &left, area.width);

        let right = Line::from(vec![
            Span::styled("ESC", theme.footer_key),
            Span::styled(" to close ", theme.palette_description),
        ]);
        let right_width = right.width() as u16;
        if area.width > left.width() as u16 + right_width {
            buf.set_line(area.right() - right_width, area.y, &right, right_width);
        }
    }
}

impl Widget for SearchPaletteModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let layout = areas(area);
        if layout.modal.width < 3 || layout.modal.height < 3 {
            return;
        }

        draw_drop_shadow(buf, layout.modal, area);
        Clear.render(layout.modal, buf);

        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled("SEARCH", self.theme.palette_title),
                Span::raw(" "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border_focus)
            .style(self.theme.palette);
        block.render(layout.modal, buf);

        self.render_query(layout.query, buf);

        if layout.separator.height > 0 {
            let separator = "\u{2500}".repeat(usize::from(layout.separator.width));
            buf.set_string(
                layout.separator.x,
                layout.separator.y,
                separator,
                self.theme.border,
            );
        }

        self.render_results(layout.results, buf);
        self.render_hints(layout.hints, buf);
    }
}
