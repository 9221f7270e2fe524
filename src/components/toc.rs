use crate::domain::models::{SectionId, TocEntry};
use crate::theme::Theme;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Widget},
};

const ITEMS_TOP: u16 = 2;

pub struct Toc<'a> {
    pub entries: &'a [TocEntry],
    pub active: &'a SectionId,
    pub theme: &'a Theme,
}

/// Outline entries in display order with their nesting depth.
pub fn flatten(entries: &[TocEntry]) -> Vec<(usize, &TocEntry)> {
    fn walk<'a>(entries: &'a [TocEntry], depth: usize, out: &mut Vec<(usize, &'a TocEntry)>) {
        for entry in entries {
            out.push((depth, entry));
            walk(&entry.children, depth + 1, out);
        }
    }
    let mut out = Vec::new();
    walk(entries, 0, &mut out);
    out
}

fn inner(area: Rect) -> Rect {
    Block::default().borders(Borders::LEFT).inner(area)
}

/// Maps a terminal cell to the flattened outline entry drawn there.
pub fn entry_at(area: Rect, entries: &[TocEntry], column: u16, row: u16) -> Option<&TocEntry> {
    let inner = inner(area);
    if column < inner.x || column >= inner.right() || row < inner.y + ITEMS_TOP {
        return None;
    }
    if row >= inner.bottom() {
        return None;
    }
    let idx = usize::from(row - inner.y - ITEMS_TOP);
    flatten(entries).get(idx).map(|(_, e)| *e)
}

impl Widget for Toc<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::LEFT)
            .border_style(self.theme.border)
            .style(self.theme.toc);
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.height == 0 {
            return;
        }

        let title = Line::from(Span::styled(" On this page", self.theme.toc_title));
        buf.set_line(inner.x, inner.y, &title, inner.width);

        for (i, (depth, entry)) in flatten(self.entries).into_iter().enumerate() {
            let y = inner.y + ITEMS_TOP + i as u16;
            if y >= inner.bottom() {
                break;
            }
            // Only the top-level entry of the active section is lit
            let style = if depth == 0 && &entry.section_id == self.active {
                self.theme.toc_active
            } else {
                self.theme.toc_item
            };
            let indent = " ".repeat(1 + depth * 2);
            let line = Line::from(Span::styled(format!("{indent}{}", entry.title), style));
            buf.set_line(inner.x, y, &line, inner.width);
        }
    }
}
