use super::*;
use crate::app::action::Action;
use crate::app::command::Command;
use crate::app::state::AppState;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use rand::{Rng, SeedableRng};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::io::Write;
use tokio::sync::mpsc;

const CONTENT: &str = r#"
site_name = "Handbook"

[[sections]]
id = "intro"
label = "Intro"

[[sections]]
id = "usage"
label = "Usage"

[[entries]]
section_id = "usage"
title = "Usage"
description = "How to use it"

[[document]]
anchor = "intro"
blocks = [{ kind = "heading", level = 1, text = "Handbook" }]

[[document]]
anchor = "usage"
blocks = [{ kind = "heading", level = 2, text = "Usage" }]
"#;

#[tokio::test]
async fn test_reload_command_success() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(CONTENT.as_bytes()).unwrap();

    let (tx, mut rx) = mpsc::channel(1);
    handle_command(Command::ReloadContent(file.path().to_path_buf()), tx).unwrap();

    let action = rx.recv().await.unwrap();
    let mut state = AppState::default();
    if let Action::ContentReloaded(content) = &action {
        assert_eq!(content.site_name, "Handbook");
    } else {
        panic!("Expected Action::ContentReloaded, got {action:?}");
    }

    crate::app::reducer::update(&mut state, action);
    assert_eq!(state.content.sections.len(), 2);
    assert_eq!(state.active_section().as_str(), "intro");
    assert_eq!(state.navigation.observer.observed().len(), 2);
}

#[tokio::test]
async fn test_reload_command_error_to_state() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"site_name = 3").unwrap();

    let (tx, mut rx) = mpsc::channel(1);
    handle_command(Command::ReloadContent(file.path().to_path_buf()), tx).unwrap();

    let action = rx.recv().await.unwrap();
    let mut state = AppState::default();
    crate::app::reducer::update(&mut state, action);

    // Previous content is kept and the error surfaces in the footer
    assert_eq!(state.content.site_name, "MkDocs");
    let err = state.last_error.expect("reload error recorded");
    assert!(err.contains("parsing content file"));
}

#[tokio::test]
async fn test_search_flow_through_loop() {
    let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
    let mut app_state = AppState::default();
    app_state.settings.smooth_scroll = false;

    let (event_tx, event_rx) = mpsc::channel(100);
    let keys = [
        KeyEvent::new(KeyCode::Char('k'), KeyModifiers::CONTROL),
        KeyEvent::new(KeyCode::Char('s'), KeyModifiers::NONE),
        KeyEvent::new(KeyCode::Char('e'), KeyModifiers::NONE),
        KeyEvent::new(KeyCode::Char('r'), KeyModifiers::NONE),
        KeyEvent::new(KeyCode::Char('v'), KeyModifiers::NONE),
        KeyEvent::new(KeyCode::Char('e'), KeyModifiers::NONE),
        KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE),
    ];
    for key in keys {
        event_tx.send(Ok(Event::Key(key))).await.unwrap();
    }
    event_tx
        .send(Ok(Event::Key(KeyEvent::new(
            KeyCode::Char('q'),
            KeyModifiers::NONE,
        ))))
        .await
        .unwrap();

    tokio::time::timeout(
        std::time::Duration::from_secs(5),
        run_loop_with_events(&mut terminal, app_state, event_rx),
    )
    .await
    .expect("loop finished")
    .unwrap();

    let buf = terminal.backend().buffer();
    let footer: String = (0..buf.area.width)
        .map(|x| buf[(x, buf.area.height - 1)].symbol().to_string())
        .collect();
    assert!(footer.contains("Development Server"));
}

#[tokio::test]
async fn test_keystroke_fuzzing() {
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    let app_state = AppState::default();

    let (event_tx, event_rx) = mpsc::channel(100);

    // Spawn a task to feed random events
    let fuzzer_handle = tokio::spawn(async move {
        let mut rng = rand::rngs::StdRng::seed_from_u64(42);
        for _ in 0..3000 {
            let event = match rng.gen_range(0..100) {
                0..=5 => {
                    let w = rng.gen_range(10..200);
                    let h = rng.gen_range(10..100);
                    Event::Resize(w, h)
                }
                6..=20 => generate_random_mouse(&mut rng, ratatui::layout::Size::new(80, 24)),
                _ => generate_random_key(&mut rng),
            };
            if event_tx.send(Ok(event)).await.is_err() {
                break;
            }
            // Yield to allow the loop to process events
            if rng.gen_bool(0.1) {
                tokio::task::yield_now().await;
            }
        }
        // Ctrl-C quits from every mode
        let _ = event_tx
            .send(Ok(Event::Key(KeyEvent::new(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL,
            ))))
            .await;
    });

    // Run the real loop (with a test backend)
    let result = tokio::time::timeout(
        std::time::Duration::from_secs(30),
        run_loop_with_events(&mut terminal, app_state, event_rx),
    )
    .await;

    match result {
        Ok(res) => res.unwrap(),
        Err(_) => panic!("Fuzzer timed out - possible deadlock or too slow"),
    }

    fuzzer_handle.await.unwrap();
}

fn generate_random_key<R: Rng>(rng: &mut R) -> Event {
    let code = match rng.gen_range(0..20) {
        0 => KeyCode::Esc,
        1 => KeyCode::Enter,
        2 => KeyCode::Left,
        3 => KeyCode::Right,
        4 => KeyCode::Up,
        5 => KeyCode::Down,
        6 => KeyCode::Home,
        7 => KeyCode::End,
        8 => KeyCode::PageUp,
        9 => KeyCode::PageDown,
        10 => KeyCode::Tab,
        11 => KeyCode::BackTab,
        12 => KeyCode::Delete,
        13 => KeyCode::Backspace,
        _ => {
            // Keep the loop alive: no quit key
            let c = match rng.gen_range(b' '..=b'~') as char {
                'q' => 'x',
                c => c,
            };
            KeyCode::Char(c)
        }
    };

    let mut modifiers = KeyModifiers::empty();
    if rng.gen_bool(0.1) && code != KeyCode::Char('c') {
        modifiers.insert(KeyModifiers::CONTROL);
    }
    if rng.gen_bool(0.1) {
        modifiers.insert(KeyModifiers::ALT);
    }
    if rng.gen_bool(0.1) {
        modifiers.insert(KeyModifiers::SHIFT);
    }

    Event::Key(KeyEvent::new(code, modifiers))
}

fn generate_random_mouse<R: Rng>(rng: &mut R, size: ratatui::layout::Size) -> Event {
    use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
    let kind = match rng.gen_range(0..5) {
        0 => MouseEventKind::Down(MouseButton::Left),
        1 => MouseEventKind::Down(MouseButton::Right),
        2 => MouseEventKind::ScrollUp,
        3 => MouseEventKind::ScrollDown,
        _ => MouseEventKind::Moved,
    };

    let column = rng.gen_range(0..size.width);
    let row = rng.gen_range(0..size.height);

    Event::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: crossterm::event::KeyModifiers::empty(),
    })
}
