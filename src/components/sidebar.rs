use crate::domain::models::{Section, SectionId};
use crate::theme::Theme;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Widget},
};

/// Rows above the first item: title and a spacer.
const ITEMS_TOP: u16 = 2;

pub struct Sidebar<'a> {
    pub sections: &'a [Section],
    pub active: &'a SectionId,
    pub theme: &'a Theme,
}

fn inner(area: Rect) -> Rect {
    Block::default().borders(Borders::RIGHT).inner(area)
}

/// Maps a terminal cell to the section drawn there.
pub fn item_at(area: Rect, count: usize, column: u16, row: u16) -> Option<usize> {
    let inner = inner(area);
    if column < inner.x || column >= inner.right() || row < inner.y + ITEMS_TOP {
        return None;
    }
    let idx = usize::from(row - inner.y - ITEMS_TOP);
    (row < inner.bottom() && idx < count).then_some(idx)
}

impl Widget for Sidebar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::RIGHT)
            .border_style(self.theme.border)
            .style(self.theme.sidebar);
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.height == 0 {
            return;
        }

        let title = Line::from(Span::styled(" GUIDE", self.theme.toc_title));
        buf.set_line(inner.x, inner.y, &title, inner.width);

        let width = usize::from(inner.width);
        for (i, section) in self.sections.iter().enumerate() {
            let y = inner.y + ITEMS_TOP + i as u16;
            if y >= inner.bottom() {
                break;
            }
            let is_active = &section.id == self.active;
            let (marker, style) = if is_active {
                ("\u{258C} ", self.theme.sidebar_active)
            } else {
                ("  ", self.theme.sidebar_item)
            };
            let label = format!("{marker}{}", section.label);
            let line = Line::from(Span::styled(format!("{label:<width$}"), style));
            buf.set_line(inner.x, y, &line, inner.width);
        }
    }
}
