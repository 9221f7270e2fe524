use crate::theme::Theme;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct Header<'a> {
    pub site_name: &'a str,
    /// Label of the search shortcut, e.g. `Ctrl+K`.
    pub search_hint: String,
    pub theme: &'a Theme,
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let logo = format!(" \u{25A0} {} ", self.site_name);
        let hint = format!(" \u{2315} Search  {} ", self.search_hint);

        let used = Span::raw(&logo).width() + Span::raw(&hint).width();
        let padding = usize::from(area.width).saturating_sub(used);

        let spans = vec![
            Span::styled(logo, self.theme.header_logo),
            Span::styled(" ".repeat(padding), self.theme.header),
            Span::styled(hint, self.theme.header_hint),
        ];

        Paragraph::new(Line::from(spans))
            .style(self.theme.header)
            .render(area, buf);
    }
}
