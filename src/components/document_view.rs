use crate::domain::layout::{DocLine, DocumentLayout, LineKind, SpanKind};
use crate::theme::Theme;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState, StatefulWidget, Widget},
};

pub struct DocumentView<'a> {
    pub layout: &'a DocumentLayout,
    pub scroll: usize,
    /// Column range the text is flowed into; the scrollbar takes the
    /// last column of the render area.
    pub text_area: Rect,
    pub theme: &'a Theme,
}

impl DocumentView<'_> {
    fn fragment_style(&self, line: LineKind, kind: SpanKind) -> Style {
        let theme = self.theme;
        match kind {
            SpanKind::Heading(1) => theme.doc_h1,
            SpanKind::Heading(2) => theme.doc_h2,
            SpanKind::Heading(_) => theme.doc_h3,
            SpanKind::Rule => theme.doc_rule,
            SpanKind::CodeBlock => theme.doc_code_block,
            SpanKind::Note => theme.doc_note_bar,
            SpanKind::Code => theme.doc_code,
            SpanKind::Link => theme.doc_link,
            SpanKind::Strong => theme.doc_strong,
            SpanKind::Text if line == LineKind::Note => theme.doc_note,
            SpanKind::Text => theme.doc_text,
        }
    }

    fn render_line(&self, line: &DocLine, y: u16, buf: &mut Buffer) {
        let area = self.text_area;
        // Code and note blocks are shaded across the whole measure
        let fill = match line.kind {
            LineKind::Code => Some(self.theme.doc_code_block),
            LineKind::Note => Some(self.theme.doc_note),
            _ => None,
        };
        if let Some(style) = fill {
            buf.set_style(Rect::new(area.x, y, area.width, 1), style);
        }

        let spans: Vec<Span> = line
            .fragments
            .iter()
            .map(|f| Span::styled(f.text.as_str(), self.fragment_style(line.kind, f.kind)))
            .collect();
        buf.set_line(area.x, y, &Line::from(spans), area.width);
    }
}

impl Widget for DocumentView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let text = self.text_area.intersection(area);
        if text.width == 0 || text.height == 0 {
            return;
        }

        let visible = self
            .layout
            .lines
            .iter()
            .skip(self.scroll)
            .take(usize::from(text.height));
        for (offset, line) in visible.enumerate() {
            self.render_line(line, text.y + offset as u16, buf);
        }

        let max_scroll = self.layout.max_scroll(text.height);
        if max_scroll > 0 && area.width > text.width {
            let mut state = ScrollbarState::new(max_scroll).position(self.scroll.min(max_scroll));
            Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(None)
                .end_symbol(None)
                .style(self.theme.scrollbar)
                .render(area, buf, &mut state);
        }
    }
}
