use crate::app::state::{AppMode, AppState};
use crate::components::document_view::DocumentView;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::modals::{dim_area, HelpModal, SearchPaletteModal};
use crate::components::sidebar::Sidebar;
use crate::components::toc::Toc;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    widgets::Block,
    Frame,
};

pub const SIDEBAR_WIDTH: u16 = 26;
pub const TOC_WIDTH: u16 = 28;
/// Narrower terminals drop the sidebar, then the outline.
pub const SIDEBAR_MIN_COLS: u16 = 80;
pub const TOC_MIN_COLS: u16 = 110;
/// Reading measure of the document text.
pub const MAX_TEXT_WIDTH: u16 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppLayout {
    pub header: Rect,
    pub sidebar: Rect,
    pub document: Rect,
    /// Where document lines are drawn, inside `document`.
    pub document_text: Rect,
    pub toc: Rect,
    pub footer: Rect,
}

pub fn get_layout(area: Rect) -> AppLayout {
    let main = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Footer
        ])
        .split(area);

    let sidebar_width = if area.width >= SIDEBAR_MIN_COLS {
        SIDEBAR_WIDTH
    } else {
        0
    };
    let toc_width = if area.width >= TOC_MIN_COLS {
        TOC_WIDTH
    } else {
        0
    };

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(sidebar_width),
            Constraint::Min(0),
            Constraint::Length(toc_width),
        ])
        .split(main[1]);

    let document = body[1];
    // Two columns of left padding, scrollbar plus gutter on the right
    let document_text = Rect {
        x: document.x + 2u16.min(document.width),
        y: document.y,
        width: document.width.saturating_sub(5).min(MAX_TEXT_WIDTH),
        height: document.height,
    };

    AppLayout {
        header: main[0],
        sidebar: body[0],
        document,
        document_text,
        toc: body[2],
        footer: main[2],
    }
}

pub fn draw(f: &mut Frame, app_state: &AppState) {
    let area = f.area();
    if area.width == 0 || area.height == 0 {
        return;
    }
    let theme = &app_state.theme;
    let layout = get_layout(area);

    f.render_widget(Block::default().style(theme.base), area);

    f.render_widget(
        Header {
            site_name: &app_state.content.site_name,
            search_hint: search_hint(app_state),
            theme,
        },
        layout.header,
    );

    if layout.sidebar.width > 0 {
        f.render_widget(
            Sidebar {
                sections: &app_state.content.sections,
                active: app_state.active_section(),
                theme,
            },
            layout.sidebar,
        );
    }

    f.render_widget(
        DocumentView {
            layout: &app_state.layout,
            scroll: app_state.viewport.scroll,
            text_area: layout.document_text,
            theme,
        },
        layout.document,
    );

    if layout.toc.width > 0 {
        f.render_widget(
            Toc {
                entries: &app_state.content.toc,
                active: app_state.active_section(),
                theme,
            },
            layout.toc,
        );
    }

    f.render_widget(
        Footer {
            state: app_state,
            theme,
        },
        layout.footer,
    );

    match (&app_state.search, app_state.mode) {
        (Some(search), _) => {
            dim_area(f.buffer_mut(), area);
            f.render_widget(
                SearchPaletteModal {
                    state: search,
                    entries: &app_state.content.entries,
                    theme,
                },
                area,
            );
        }
        (None, AppMode::Help) => {
            dim_area(f.buffer_mut(), area);
            f.render_widget(HelpModal { theme }, area);
        }
        _ => {}
    }
}

/// Label of the first configured search shortcut, e.g. `Ctrl+K`.
fn search_hint(app_state: &AppState) -> String {
    use crossterm::event::{KeyCode, KeyModifiers};

    let Some(event) = app_state.keymap.search_shortcuts.first() else {
        return String::new();
    };
    let mut label = String::new();
    for (modifier, name) in [
        (KeyModifiers::CONTROL, "Ctrl+"),
        (KeyModifiers::SUPER, "Super+"),
        (KeyModifiers::ALT, "Alt+"),
        (KeyModifiers::SHIFT, "Shift+"),
    ] {
        if event.modifiers.contains(modifier) {
            label.push_str(name);
        }
    }
    match event.code {
        KeyCode::Char(c) => label.extend(c.to_uppercase()),
        KeyCode::F(n) => label.push_str(&format!("F{n}")),
        other => label.push_str(&format!("{other:?}")),
    }
    label
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        let buf = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                out.push_str(buf[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_layout_geometry() {
        let layout = get_layout(Rect::new(0, 0, 100, 30));
        assert_eq!(layout.header.height, 1);
        assert_eq!(layout.footer.y, 29);
        assert_eq!(layout.sidebar.width, SIDEBAR_WIDTH);
        assert_eq!(layout.toc.width, 0);
        assert_eq!(layout.document_text.x, SIDEBAR_WIDTH + 2);
        assert_eq!(layout.document_text.width, 69);
        assert_eq!(layout.document_text.height, 28);

        let wide = get_layout(Rect::new(0, 0, 200, 50));
        assert_eq!(wide.toc.width, TOC_WIDTH);
        assert_eq!(wide.document_text.width, MAX_TEXT_WIDTH);

        let narrow = get_layout(Rect::new(0, 0, 60, 20));
        assert_eq!(narrow.sidebar.width, 0);
        assert_eq!(narrow.document.width, 60);
    }

    #[test]
    fn test_draw_full_frame() {
        let mut state = AppState::default();
        crate::app::reducer::update(&mut state, crate::app::action::Action::Resize(120, 40));
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|f| draw(f, &state)).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("MkDocs"));
        assert!(text.contains("Ctrl+K"));
        assert!(text.contains("Getting Started"));
        assert!(text.contains("On this page"));
        assert!(text.contains("READY"));
    }

    #[test]
    fn test_draw_search_palette_states() {
        let mut state = AppState::default();
        crate::app::reducer::update(&mut state, crate::app::action::Action::Resize(100, 30));
        crate::app::reducer::update(&mut state, crate::app::action::Action::OpenSearch);
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();

        terminal.draw(|f| draw(f, &state)).unwrap();
        let text = buffer_text(&terminal);
        assert!(text.contains("Search documentation..."));
        assert!(text.contains("Press ↵ to select"));

        for c in "zzz".chars() {
            crate::app::reducer::update(&mut state, crate::app::action::Action::SearchInput(c));
        }
        terminal.draw(|f| draw(f, &state)).unwrap();
        assert!(buffer_text(&terminal).contains("No results found for \"zzz\""));
    }

    #[test]
    fn test_draw_tiny_terminal() {
        let state = AppState::default();
        let mut terminal = Terminal::new(TestBackend::new(3, 2)).unwrap();
        terminal.draw(|f| draw(f, &state)).unwrap();
    }
}
