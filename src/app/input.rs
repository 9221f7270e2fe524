use crate::app::{
    action::Action,
    state::{AppMode, AppState},
    ui,
};
use crate::components::modals::search_palette;
use crate::components::{sidebar, toc};
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Position, Rect, Size};

pub fn map_event_to_action(
    event: Event,
    app_state: &AppState,
    terminal_size: Size,
) -> Option<Action> {
    let area = Rect::new(0, 0, terminal_size.width, terminal_size.height);
    match event {
        Event::Resize(w, h) => Some(Action::Resize(w, h)),
        Event::Key(key) => {
            if key.kind == KeyEventKind::Release {
                return None;
            }
            map_key(key, app_state)
        }
        Event::Mouse(mouse) => map_mouse(mouse, app_state, area),
        _ => None,
    }
}

fn map_key(key: KeyEvent, app_state: &AppState) -> Option<Action> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    if ctrl && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match app_state.mode {
        AppMode::Search => {
            // Already open: the global shortcut does nothing
            if app_state.keymap.is_search_shortcut(&key) {
                return None;
            }
            match key.code {
                KeyCode::Esc => Some(Action::CloseSearch),
                KeyCode::Enter => Some(Action::SearchCommit),
                KeyCode::Down => Some(Action::SearchNext),
                KeyCode::Up => Some(Action::SearchPrev),
                KeyCode::Backspace => Some(Action::SearchBackspace),
                KeyCode::Char('n') if ctrl => Some(Action::SearchNext),
                KeyCode::Char('p') if ctrl => Some(Action::SearchPrev),
                KeyCode::Char('u') if ctrl => Some(Action::SearchClear),
                KeyCode::Char(c)
                    if !key
                        .modifiers
                        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER) =>
                {
                    Some(Action::SearchInput(c))
                }
                _ => None,
            }
        }
        AppMode::Help => {
            if app_state.keymap.is_search_shortcut(&key) {
                return Some(Action::OpenSearch);
            }
            match key.code {
                KeyCode::Esc | KeyCode::Char('q' | '?') => Some(Action::ToggleHelp),
                _ => None,
            }
        }
        AppMode::Normal => {
            if app_state.keymap.is_search_shortcut(&key) {
                return Some(Action::OpenSearch);
            }
            app_state.keymap.get_action(key, app_state.mode)
        }
    }
}

fn map_mouse(mouse: MouseEvent, app_state: &AppState, area: Rect) -> Option<Action> {
    let pos = Position::new(mouse.column, mouse.row);
    match app_state.mode {
        AppMode::Search => {
            let search = app_state.search.as_ref()?;
            match mouse.kind {
                MouseEventKind::Down(MouseButton::Left) => {
                    if !search_palette::modal_area(area).contains(pos) {
                        return Some(Action::CloseSearch);
                    }
                    search_palette::result_at(area, search, mouse.column, mouse.row)
                        .map(Action::SearchSelect)
                }
                MouseEventKind::ScrollDown => Some(Action::SearchNext),
                MouseEventKind::ScrollUp => Some(Action::SearchPrev),
                _ => None,
            }
        }
        AppMode::Help => match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => Some(Action::ToggleHelp),
            _ => None,
        },
        AppMode::Normal => {
            let layout = ui::get_layout(area);
            let step = app_state.settings.scroll_step;
            match mouse.kind {
                MouseEventKind::ScrollDown if layout.document.contains(pos) => {
                    Some(Action::ScrollDown(step))
                }
                MouseEventKind::ScrollUp if layout.document.contains(pos) => {
                    Some(Action::ScrollUp(step))
                }
                MouseEventKind::Down(MouseButton::Left) => {
                    let sections = &app_state.content.sections;
                    if layout.sidebar.contains(pos) {
                        return sidebar::item_at(
                            layout.sidebar,
                            sections.len(),
                            mouse.column,
                            mouse.row,
                        )
                        .map(|i| Action::Activate(sections[i].id.clone()));
                    }
                    if layout.toc.contains(pos) {
                        return toc::entry_at(
                            layout.toc,
                            &app_state.content.toc,
                            mouse.column,
                            mouse.row,
                        )
                        .map(|e| Action::Activate(e.section_id.clone()));
                    }
                    if layout.header.contains(pos) {
                        return Some(Action::OpenSearch);
                    }
                    None
                }
                _ => None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    fn click(column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    const SIZE: Size = Size {
        width: 120,
        height: 40,
    };

    fn search_state() -> AppState {
        let mut state = AppState::default();
        crate::app::reducer::update(&mut state, Action::OpenSearch);
        state
    }

    #[test]
    fn test_global_shortcut_by_mode() {
        let ctrl_k = key(KeyCode::Char('k'), KeyModifiers::CONTROL);
        let mut state = AppState::default();
        assert_eq!(
            map_event_to_action(ctrl_k.clone(), &state, SIZE),
            Some(Action::OpenSearch)
        );

        state.mode = AppMode::Help;
        assert_eq!(
            map_event_to_action(ctrl_k.clone(), &state, SIZE),
            Some(Action::OpenSearch)
        );

        let state = search_state();
        assert_eq!(map_event_to_action(ctrl_k, &state, SIZE), None);
    }

    #[test]
    fn test_plain_k_scrolls_in_normal_and_types_in_search() {
        let k = key(KeyCode::Char('k'), KeyModifiers::NONE);
        let state = AppState::default();
        assert_eq!(
            map_event_to_action(k.clone(), &state, SIZE),
            Some(Action::ScrollUp(1))
        );
        let state = search_state();
        assert_eq!(
            map_event_to_action(k, &state, SIZE),
            Some(Action::SearchInput('k'))
        );
    }

    #[test]
    fn test_search_mode_keys() {
        let state = search_state();
        let cases = [
            (key(KeyCode::Esc, KeyModifiers::NONE), Action::CloseSearch),
            (key(KeyCode::Enter, KeyModifiers::NONE), Action::SearchCommit),
            (key(KeyCode::Down, KeyModifiers::NONE), Action::SearchNext),
            (key(KeyCode::Up, KeyModifiers::NONE), Action::SearchPrev),
            (key(KeyCode::Char('n'), KeyModifiers::CONTROL), Action::SearchNext),
            (key(KeyCode::Char('p'), KeyModifiers::CONTROL), Action::SearchPrev),
            (key(KeyCode::Char('u'), KeyModifiers::CONTROL), Action::SearchClear),
            (key(KeyCode::Backspace, KeyModifiers::NONE), Action::SearchBackspace),
            (key(KeyCode::Char('Q'), KeyModifiers::SHIFT), Action::SearchInput('Q')),
            (key(KeyCode::Char('q'), KeyModifiers::NONE), Action::SearchInput('q')),
        ];
        for (event, expected) in cases {
            assert_eq!(map_event_to_action(event, &state, SIZE), Some(expected));
        }
    }

    #[test]
    fn test_ctrl_c_quits_everywhere() {
        let ctrl_c = key(KeyCode::Char('c'), KeyModifiers::CONTROL);
        for state in [AppState::default(), search_state()] {
            assert_eq!(
                map_event_to_action(ctrl_c.clone(), &state, SIZE),
                Some(Action::Quit)
            );
        }
    }

    #[test]
    fn test_release_events_are_ignored() {
        let state = AppState::default();
        let release = Event::Key(KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert_eq!(map_event_to_action(release, &state, SIZE), None);
    }

    #[test]
    fn test_sidebar_and_toc_clicks_activate() {
        let state = AppState::default();
        let layout = ui::get_layout(Rect::new(0, 0, SIZE.width, SIZE.height));

        // Sidebar: border-less top, title row, spacer, then items
        let row = layout.sidebar.y + 2 + 3;
        assert_eq!(
            map_event_to_action(click(layout.sidebar.x + 2, row), &state, SIZE),
            Some(Action::Activate("dev-server".into()))
        );

        // Outline: "Adding pages" is a child of Configuration
        let row = layout.toc.y + 2 + 4;
        assert_eq!(
            map_event_to_action(click(layout.toc.x + 3, row), &state, SIZE),
            Some(Action::Activate("configuration".into()))
        );

        // Document body clicks do nothing
        assert_eq!(
            map_event_to_action(
                click(layout.document_text.x + 1, layout.document_text.y + 1),
                &state,
                SIZE
            ),
            None
        );
    }

    #[test]
    fn test_palette_clicks() {
        let state = search_state();
        let area = Rect::new(0, 0, SIZE.width, SIZE.height);
        let modal = search_palette::modal_area(area);

        assert_eq!(
            map_event_to_action(click(0, 0), &state, SIZE),
            Some(Action::CloseSearch)
        );
        assert_eq!(
            map_event_to_action(click(modal.x + 3, modal.y + 3), &state, SIZE),
            Some(Action::SearchSelect(0))
        );
        // Query row is inside the modal but not a result
        assert_eq!(
            map_event_to_action(click(modal.x + 3, modal.y + 1), &state, SIZE),
            None
        );
    }

    #[test]
    fn test_wheel_scrolls_document() {
        let mut state = AppState::default();
        state.settings.scroll_step = 5;
        let layout = ui::get_layout(Rect::new(0, 0, SIZE.width, SIZE.height));
        let wheel = Event::Mouse(MouseEvent {
            kind: MouseEventKind::ScrollDown,
            column: layout.document.x + 4,
            row: layout.document.y + 4,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(
            map_event_to_action(wheel, &state, SIZE),
            Some(Action::ScrollDown(5))
        );
    }
}
