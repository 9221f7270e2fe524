mod groups;
mod types;

use crate::app::state::AppState;
use crate::theme::Theme;
pub use types::{FooterGroup, FooterItem};

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct Footer<'a> {
    pub state: &'a AppState,
    pub theme: &'a Theme,
}

impl Widget for Footer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;
        let state = self.state;

        // Status segment
        let status_span = if let Some(err) = &state.last_error {
            Span::styled(format!("  ERROR: {err}  "), theme.status_error)
        } else if let Some(msg) = &state.status_message {
            Span::styled(format!("  {msg}  "), theme.status_info)
        } else {
            Span::styled("  READY  ", theme.status_ready)
        };

        let mut spans = vec![status_span, Span::raw(" ")];

        let active = state
            .content
            .section_label(state.active_section())
            .unwrap_or(state.active_section().as_str());
        spans.push(Span::styled(format!(" {active} "), theme.footer_val));
        spans.push(Span::raw("  "));

        let available_width = usize::from(area.width.saturating_sub(2));
        let mut current_width: usize = spans.iter().map(Span::width).sum();

        for group in groups::get_groups(state) {
            if area.width > 100 {
                let label = Span::styled(format!("{}: ", group.name), theme.footer);
                if current_width + label.width() < available_width {
                    current_width += label.width();
                    spans.push(label);
                }
            }

            for item in group.items {
                let key = Span::styled(format!(" {} ", item.key), theme.footer_key);
                let desc = Span::styled(format!(" {} ", item.desc), theme.footer_val);
                let item_width = key.width() + desc.width() + 1;
                if current_width + item_width > available_width {
                    break;
                }
                spans.push(key);
                spans.push(desc);
                spans.push(Span::raw(" "));
                current_width += item_width;
            }
            spans.push(Span::raw(" "));
            current_width += 1;
        }

        Paragraph::new(Line::from(spans))
            .style(theme.footer)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(state: &AppState, width: u16) -> String {
        let area = Rect::new(0, 0, width, 1);
        let mut buf = Buffer::empty(area);
        Footer {
            state,
            theme: &state.theme,
        }
        .render(area, &mut buf);
        (0..width).map(|x| buf[(x, 0)].symbol().to_string()).collect()
    }

    #[test]
    fn test_status_precedence() {
        let mut state = AppState::default();
        assert!(render(&state, 120).contains("READY"));

        state.set_status("Theme: MkDocs Light");
        assert!(render(&state, 120).contains("Theme: MkDocs Light"));

        state.last_error = Some("parsing content file".to_string());
        let line = render(&state, 120);
        assert!(line.contains("ERROR: parsing content file"));
        assert!(line.contains("dismiss"));
    }

    #[test]
    fn test_shows_active_section_label() {
        let mut state = AppState::default();
        state.navigation.active = "dev-server".into();
        assert!(render(&state, 120).contains("Development Server"));
    }
}
