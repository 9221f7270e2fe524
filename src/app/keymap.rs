use super::action::Action;
use super::state::AppMode;
use anyhow::{anyhow, bail, Result};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct KeyConfig {
    /// Bindings that open the search palette from anywhere.
    pub search: Vec<String>,
}

impl Default for KeyConfig {
    fn default() -> Self {
        Self {
            search: vec!["ctrl+k".to_string(), "super+k".to_string()],
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct KeyMap {
    pub search_shortcuts: Vec<KeyEvent>,
    pub normal: HashMap<KeyEvent, Action>,
}

impl KeyMap {
    pub fn from_config(config: &KeyConfig) -> Self {
        let mut search_shortcuts = Vec::new();
        for binding in &config.search {
            match parse_binding(binding) {
                Ok(event) => search_shortcuts.push(event),
                Err(e) => tracing::warn!(binding = %binding, "ignoring search binding: {e}"),
            }
        }
        if search_shortcuts.is_empty() {
            search_shortcuts.push(KeyEvent::new(KeyCode::Char('k'), KeyModifiers::CONTROL));
        }

        let mut normal = HashMap::new();
        normal.insert(key('q'), Action::Quit);
        normal.insert(key('/'), Action::OpenSearch);
        normal.insert(key('?'), Action::ToggleHelp);
        normal.insert(key('t'), Action::CycleTheme);
        normal.insert(code(KeyCode::Esc), Action::CancelMode);

        normal.insert(key('j'), Action::ScrollDown(1));
        normal.insert(code(KeyCode::Down), Action::ScrollDown(1));
        normal.insert(key('k'), Action::ScrollUp(1));
        normal.insert(code(KeyCode::Up), Action::ScrollUp(1));
        normal.insert(ctrl('d'), Action::HalfPageDown);
        normal.insert(ctrl('u'), Action::HalfPageUp);
        normal.insert(code(KeyCode::PageDown), Action::PageDown);
        normal.insert(key(' '), Action::PageDown);
        normal.insert(code(KeyCode::PageUp), Action::PageUp);
        normal.insert(key('g'), Action::ScrollTop);
        normal.insert(code(KeyCode::Home), Action::ScrollTop);
        normal.insert(key('G'), Action::ScrollBottom);
        normal.insert(code(KeyCode::End), Action::ScrollBottom);

        normal.insert(key('n'), Action::NextSection);
        normal.insert(code(KeyCode::Tab), Action::NextSection);
        normal.insert(key('p'), Action::PrevSection);
        normal.insert(code(KeyCode::BackTab), Action::PrevSection);
        normal.insert(
            KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT),
            Action::PrevSection,
        );

        Self {
            search_shortcuts,
            normal,
        }
    }

    #[must_use]
    pub fn is_search_shortcut(&self, event: &KeyEvent) -> bool {
        let event = normalize(*event);
        self.search_shortcuts.iter().any(|s| *s == event)
    }

    pub fn get_action(&self, event: KeyEvent, mode: AppMode) -> Option<Action> {
        match mode {
            AppMode::Normal => self.normal.get(&normalize(event)).cloned(),
            AppMode::Search | AppMode::Help => None,
        }
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        Self::from_config(&KeyConfig::default())
    }
}

fn key(c: char) -> KeyEvent {
    code(KeyCode::Char(c))
}

fn code(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::empty())
}

fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

// Terminals disagree on whether '?' arrives with SHIFT; only letters keep it.
fn normalize(event: KeyEvent) -> KeyEvent {
    let mut modifiers = event.modifiers;
    if let KeyCode::Char(c) = event.code {
        if !c.is_alphabetic() {
            modifiers.remove(KeyModifiers::SHIFT);
        }
    }
    KeyEvent::new(event.code, modifiers)
}

/// Parses bindings such as `ctrl+k`, `super+k` or `alt+shift+p`.
pub fn parse_binding(binding: &str) -> Result<KeyEvent> {
    let parts: Vec<&str> = binding.split('+').map(str::trim).collect();
    let (last, mods) = parts
        .split_last()
        .ok_or_else(|| anyhow!("empty key binding"))?;

    let mut modifiers = KeyModifiers::empty();
    for m in mods {
        match m.to_lowercase().as_str() {
            "ctrl" | "control" => modifiers.insert(KeyModifiers::CONTROL),
            "alt" | "meta" => modifiers.insert(KeyModifiers::ALT),
            "shift" => modifiers.insert(KeyModifiers::SHIFT),
            "super" | "cmd" => modifiers.insert(KeyModifiers::SUPER),
            other => bail!("unknown modifier '{other}' in '{binding}'"),
        }
    }

    let code = match last.to_lowercase().as_str() {
        "esc" => KeyCode::Esc,
        "enter" => KeyCode::Enter,
        "tab" => KeyCode::Tab,
        "space" => KeyCode::Char(' '),
        s if s.chars().count() == 1 => KeyCode::Char(s.chars().next().unwrap_or(' ')),
        s if s.starts_with('f') && s[1..].parse::<u8>().is_ok() => {
            KeyCode::F(s[1..].parse().unwrap_or(1))
        }
        _ => bail!("unknown key '{last}' in '{binding}'"),
    };

    Ok(normalize(KeyEvent::new(code, modifiers)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_binding() {
        assert_eq!(
            parse_binding("ctrl+k").unwrap(),
            KeyEvent::new(KeyCode::Char('k'), KeyModifiers::CONTROL)
        );
        assert_eq!(
            parse_binding("Super + K").unwrap(),
            KeyEvent::new(KeyCode::Char('k'), KeyModifiers::SUPER)
        );
        assert_eq!(
            parse_binding("alt+f5").unwrap(),
            KeyEvent::new(KeyCode::F(5), KeyModifiers::ALT)
        );
        assert!(parse_binding("hyper+k").is_err());
        assert!(parse_binding("ctrl+nope").is_err());
    }

    #[test]
    fn test_search_shortcut_defaults() {
        let keymap = KeyMap::default();
        assert!(keymap.is_search_shortcut(&KeyEvent::new(
            KeyCode::Char('k'),
            KeyModifiers::CONTROL
        )));
        assert!(keymap.is_search_shortcut(&KeyEvent::new(
            KeyCode::Char('k'),
            KeyModifiers::SUPER
        )));
        assert!(!keymap.is_search_shortcut(&KeyEvent::new(
            KeyCode::Char('k'),
            KeyModifiers::NONE
        )));
    }

    #[test]
    fn test_invalid_bindings_fall_back_to_ctrl_k() {
        let keymap = KeyMap::from_config(&KeyConfig {
            search: vec!["bogus+x".to_string()],
        });
        assert_eq!(
            keymap.search_shortcuts,
            vec![KeyEvent::new(KeyCode::Char('k'), KeyModifiers::CONTROL)]
        );
    }

    #[test]
    fn test_shifted_symbols_resolve() {
        let keymap = KeyMap::default();
        let question = KeyEvent::new(KeyCode::Char('?'), KeyModifiers::SHIFT);
        assert_eq!(
            keymap.get_action(question, AppMode::Normal),
            Some(Action::ToggleHelp)
        );
        let big_g = KeyEvent::new(KeyCode::Char('G'), KeyModifiers::SHIFT);
        assert_eq!(
            keymap.get_action(big_g, AppMode::Normal),
            Some(Action::ScrollBottom)
        );
        assert_eq!(keymap.get_action(big_g, AppMode::Search), None);
    }
}
