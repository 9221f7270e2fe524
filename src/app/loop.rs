use crate::app::{
    action::Action, command::Command, input::map_event_to_action, reducer, state::AppState, ui,
};
use crate::domain::content::load_content;

use anyhow::Result;
use crossterm::event::{self, Event};
use notify::{RecommendedWatcher, RecursiveMode, Watcher};
use ratatui::{backend::Backend, Terminal};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::interval;

/// Frame and animation rate.
const TICK_RATE: Duration = Duration::from_millis(50);
const RELOAD_DEBOUNCE: Duration = Duration::from_millis(500);

pub async fn run_loop<B: Backend>(terminal: &mut Terminal<B>, app_state: AppState) -> Result<()> {
    // User input channel
    let (event_tx, event_rx) = mpsc::channel(100);
    tokio::task::spawn_blocking(move || loop {
        match event::read() {
            Ok(evt) => {
                if event_tx.blocking_send(Ok(evt)).is_err() {
                    break;
                }
            }
            Err(e) => {
                let _ = event_tx.blocking_send(Err(e));
                break;
            }
        }
    });

    run_loop_with_events(terminal, app_state, event_rx).await
}

pub async fn run_loop_with_events<B: Backend>(
    terminal: &mut Terminal<B>,
    mut app_state: AppState,
    mut event_rx: mpsc::Receiver<Result<Event, std::io::Error>>,
) -> Result<()> {
    let (action_tx, mut action_rx) = mpsc::channel(100);
    let mut interval = interval(TICK_RATE);

    // Kept alive for the duration of the loop
    let _watcher = match &app_state.content_path {
        Some(path) => Some(watch_content(path, action_tx.clone())?),
        None => None,
    };

    // Lay the document out for the real terminal before the first frame
    let size = terminal.size()?;
    reducer::update(&mut app_state, Action::Resize(size.width, size.height));

    loop {
        // --- 1. Render ---
        terminal.draw(|f| {
            ui::draw(f, &app_state);
        })?;

        // --- 2. Event Handling (TEA Runtime) ---
        let action = tokio::select! {
            _ = interval.tick() => Some(Action::Tick),

            // User Input
            Some(res) = event_rx.recv() => {
                let event = res?;
                map_event_to_action(event, &app_state, terminal.size()?)
            },

            // Async Results
            Some(a) = action_rx.recv() => Some(a),
        };

        // --- 3. Update (Reducer) ---
        if let Some(action) = action {
            let command = reducer::update(&mut app_state, action);

            if app_state.should_quit {
                break;
            }

            if let Some(cmd) = command {
                handle_command(cmd, action_tx.clone())?;
            }
        }
    }

    Ok(())
}

pub(crate) fn handle_command(command: Command, tx: mpsc::Sender<Action>) -> Result<()> {
    match command {
        Command::ReloadContent(path) => {
            tokio::spawn(async move {
                let display = path.display().to_string();
                let result = tokio::task::spawn_blocking(move || load_content(&path)).await;
                let action = match result {
                    Ok(Ok(content)) => Action::ContentReloaded(Box::new(content)),
                    Ok(Err(e)) => Action::ReloadFailed(format!("{e:#}")),
                    Err(e) => Action::ReloadFailed(format!("reloading {display}: {e}")),
                };
                let _ = tx.send(action).await;
            });
        }
    }
    Ok(())
}

/// Watches the directory holding the content file, since editors often
/// replace files instead of writing them in place. Bursts of events are
/// collapsed into a single `ExternalChangeDetected`.
fn watch_content(path: &Path, action_tx: mpsc::Sender<Action>) -> Result<RecommendedWatcher> {
    let file_name = path.file_name().map(|n| n.to_os_string());
    let dir: PathBuf = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map_or_else(|| PathBuf::from("."), Path::to_path_buf);

    let (notify_tx, mut notify_rx) = mpsc::channel(1);
    let mut watcher = notify::recommended_watcher(move |res: notify::Result<notify::Event>| {
        let Ok(event) = res else {
            return;
        };
        let touches_content = event
            .paths
            .iter()
            .any(|p| p.file_name().map(|n| n.to_os_string()) == file_name);
        if touches_content {
            let _ = notify_tx.try_send(());
        }
    })?;
    watcher.watch(&dir, RecursiveMode::NonRecursive)?;
    tracing::debug!(dir = %dir.display(), "watching content directory");

    tokio::spawn(async move {
        let mut pending = false;

        loop {
            if pending {
                tokio::select! {
                    Some(()) = notify_rx.recv() => {}
                    () = tokio::time::sleep(RELOAD_DEBOUNCE) => {
                        let _ = action_tx.send(Action::ExternalChangeDetected).await;
                        pending = false;
                    }
                }
            } else if notify_rx.recv().await.is_some() {
                pending = true;
            } else {
                break;
            }
        }
    });

    Ok(watcher)
}

#[cfg(test)]
#[path = "loop_tests.rs"]
mod tests;
