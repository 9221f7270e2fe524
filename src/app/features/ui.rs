use crate::app::{
    action::{Action, UpdateResult},
    command::Command,
    state::{AppMode, AppState},
};
use crate::theme::Theme;
use std::time::Instant;

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::Quit => {
            state.should_quit = true;
            UpdateResult::Handled(None)
        }
        Action::CancelMode => {
            if state.mode == AppMode::Help {
                state.mode = AppMode::Normal;
            }
            state.last_error = None;
            UpdateResult::Handled(None)
        }
        Action::ToggleHelp => {
            state.mode = match state.mode {
                AppMode::Help => AppMode::Normal,
                AppMode::Normal => AppMode::Help,
                // The palette owns the keyboard while open
                AppMode::Search => AppMode::Search,
            };
            UpdateResult::Handled(None)
        }
        Action::CycleTheme => {
            state.palette_type = state.palette_type.next();
            state.theme = Theme::from_palette_type(state.palette_type);
            state.set_status(format!("Theme: {}", state.palette_type.label()));
            UpdateResult::Handled(None)
        }
        Action::ExternalChangeDetected => match &state.content_path {
            Some(path) => {
                tracing::debug!(path = %path.display(), "content file changed");
                UpdateResult::Handled(Some(Command::ReloadContent(path.clone())))
            }
            None => UpdateResult::Handled(None),
        },
        Action::ContentReloaded(content) => {
            let sections = content.sections.len();
            state.replace_content((**content).clone());
            state.last_error = None;
            let now = chrono::Local::now().format("%H:%M:%S");
            tracing::info!(sections, "content reloaded");
            state.set_status(format!("Reloaded {} at {now}", state.content.site_name));
            UpdateResult::Handled(None)
        }
        Action::ReloadFailed(err) => {
            tracing::warn!("content reload failed: {err}");
            state.last_error = Some(err.clone());
            UpdateResult::Handled(None)
        }
        _ => UpdateResult::NotHandled,
    }
}

/// Drops the status message once its display time is up.
pub fn expire_status(state: &mut AppState, now: Instant) {
    if state.status_clear_time.is_some_and(|t| now >= t) {
        state.status_message = None;
        state.status_clear_time = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::content::default_content;
    use crate::theme::PaletteType;
    use std::path::PathBuf;
    use std::time::Duration;

    #[test]
    fn test_help_toggles_only_from_normal() {
        let mut state = AppState::default();
        update(&mut state, &Action::ToggleHelp);
        assert_eq!(state.mode, AppMode::Help);
        update(&mut state, &Action::ToggleHelp);
        assert_eq!(state.mode, AppMode::Normal);

        state.mode = AppMode::Search;
        update(&mut state, &Action::ToggleHelp);
        assert_eq!(state.mode, AppMode::Search);
    }

    #[test]
    fn test_cancel_clears_error_and_help() {
        let mut state = AppState::default();
        state.mode = AppMode::Help;
        state.last_error = Some("boom".to_string());
        update(&mut state, &Action::CancelMode);
        assert_eq!(state.mode, AppMode::Normal);
        assert_eq!(state.last_error, None);
    }

    #[test]
    fn test_cycle_theme() {
        let mut state = AppState::default();
        update(&mut state, &Action::CycleTheme);
        assert_eq!(state.palette_type, PaletteType::Light);
        assert_eq!(state.theme, Theme::from_palette_type(PaletteType::Light));
        assert_eq!(state.status_message.as_deref(), Some("Theme: MkDocs Light"));
    }

    #[test]
    fn test_external_change_requests_reload_only_with_file() {
        let mut state = AppState::default();
        assert!(matches!(
            update(&mut state, &Action::ExternalChangeDetected),
            UpdateResult::Handled(None)
        ));

        state.content_path = Some(PathBuf::from("/tmp/site.toml"));
        match update(&mut state, &Action::ExternalChangeDetected) {
            UpdateResult::Handled(Some(Command::ReloadContent(p))) => {
                assert_eq!(p, PathBuf::from("/tmp/site.toml"));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_reload_results() {
        let mut state = AppState::default();
        update(&mut state, &Action::ReloadFailed("bad toml".to_string()));
        assert_eq!(state.last_error.as_deref(), Some("bad toml"));

        let mut content = default_content();
        content.site_name = "Handbook".to_string();
        update(&mut state, &Action::ContentReloaded(Box::new(content)));
        assert_eq!(state.last_error, None);
        assert_eq!(state.content.site_name, "Handbook");
        assert!(state
            .status_message
            .as_deref()
            .is_some_and(|m| m.starts_with("Reloaded Handbook at ")));
    }

    #[test]
    fn test_status_expires() {
        let mut state = AppState::default();
        state.set_status("hello");
        expire_status(&mut state, Instant::now());
        assert!(state.status_message.is_some());

        expire_status(&mut state, Instant::now() + Duration::from_secs(4));
        assert_eq!(state.status_message, None);
        assert_eq!(state.status_clear_time, None);
    }
}
