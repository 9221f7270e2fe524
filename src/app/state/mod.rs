use super::config::Config;
use super::keymap::KeyMap;
use super::observer::{RootMargin, VisibilityObserver};
use crate::domain::content::default_content;
use crate::domain::layout::DocumentLayout;
use crate::domain::models::{Content, SectionId};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

pub mod navigation;
pub mod search;
pub mod viewport;

// Re-exports
pub use navigation::NavigationState;
pub use search::SearchPaletteState;
pub use viewport::ViewportState;

/// Which key bindings are live. `Search` is exactly "palette open".
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AppMode {
    Normal, // Reading and navigating the page
    Search, // Search palette overlay
    Help,   // Keybinding overlay
}

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub smooth_scroll: bool,
    pub scroll_step: u16,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            smooth_scroll: true,
            scroll_step: 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    // --- Status ---
    pub should_quit: bool,
    pub mode: AppMode,
    pub last_error: Option<String>,
    pub status_message: Option<String>,
    pub status_clear_time: Option<Instant>,

    // --- Content (static after load) ---
    pub content: Content,
    pub content_path: Option<PathBuf>,
    pub layout: DocumentLayout,

    // --- Interaction State ---
    pub navigation: NavigationState,
    pub search: Option<SearchPaletteState>,
    pub viewport: ViewportState,
    pub terminal_size: (u16, u16),

    // --- Config ---
    pub settings: Settings,
    pub keymap: Arc<KeyMap>,
    pub palette_type: crate::theme::PaletteType,
    pub theme: crate::theme::Theme,
}

impl AppState {
    #[must_use]
    pub fn new(content: Content, config: &Config) -> Self {
        let mut state = Self {
            keymap: Arc::new(KeyMap::from_config(&config.keys)),
            palette_type: config.theme,
            theme: crate::theme::Theme::from_palette_type(config.theme),
            settings: Settings {
                smooth_scroll: config.smooth_scroll,
                scroll_step: config.scroll_step.max(1),
            },
            ..Default::default()
        };
        state.replace_content(content);
        state
    }

    /// Swaps in new content: re-flows the document and re-attaches the
    /// visibility observer to the sections that now exist.
    pub fn replace_content(&mut self, content: Content) {
        self.layout = DocumentLayout::build(&content.document, self.viewport.width);
        self.navigation.observer.detach();
        self.navigation.observer =
            VisibilityObserver::attach(&content.sections, &self.layout, RootMargin::default());

        let still_exists = content.sections.iter().any(|s| s.id == self.navigation.active)
            || content.has_anchor(&self.navigation.active);
        if !still_exists {
            self.navigation.active = content
                .sections
                .first()
                .map(|s| s.id.clone())
                .unwrap_or_default();
        }

        self.content = content;
        if let Some(search) = &mut self.search {
            search.refilter(&self.content.entries);
        }
        self.viewport.target = None;
        self.viewport.scroll = self
            .viewport
            .scroll
            .min(self.layout.max_scroll(self.viewport.height));
    }

    #[must_use]
    pub fn is_search_open(&self) -> bool {
        self.search.is_some()
    }

    #[must_use]
    pub fn search_query(&self) -> &str {
        self.search.as_ref().map_or("", |s| s.query.as_str())
    }

    #[must_use]
    pub fn selected_result_index(&self) -> usize {
        self.search.as_ref().map_or(0, |s| s.selected_index)
    }

    #[must_use]
    pub fn active_section(&self) -> &SectionId {
        &self.navigation.active
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
        self.status_clear_time = Some(Instant::now() + std::time::Duration::from_secs(3));
    }
}

impl Default for AppState {
    fn default() -> Self {
        let content = default_content();
        let layout = DocumentLayout::build(&content.document, 0);
        let observer = VisibilityObserver::attach(&content.sections, &layout, RootMargin::default());
        let active = content
            .sections
            .first()
            .map(|s| s.id.clone())
            .unwrap_or_default();
        Self {
            should_quit: false,
            mode: AppMode::Normal,
            last_error: None,
            status_message: None,
            status_clear_time: None,
            content,
            content_path: None,
            layout,
            navigation: NavigationState { active, observer },
            search: None,
            viewport: ViewportState::default(),
            terminal_size: (0, 0),
            settings: Settings::default(),
            keymap: Arc::new(KeyMap::default()),
            palette_type: crate::theme::PaletteType::Dark,
            theme: crate::theme::Theme::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::Section;

    #[test]
    fn test_default_state_starts_on_first_section() {
        let state = AppState::default();
        assert_eq!(state.active_section().as_str(), "getting-started");
        assert!(!state.is_search_open());
        assert_eq!(state.search_query(), "");
        assert_eq!(state.selected_result_index(), 0);
        assert_eq!(state.navigation.observer.observed().len(), 5);
    }

    #[test]
    fn test_replace_content_resets_missing_active_section() {
        let mut state = AppState::default();
        state.navigation.active = "dev-server".into();

        let mut content = default_content();
        content.sections = vec![Section {
            id: "installation".into(),
            label: "Installation".to_string(),
        }];
        content.document.retain(|d| d.anchor.as_str() != "dev-server");
        state.replace_content(content);

        assert_eq!(state.active_section().as_str(), "installation");
        assert_eq!(state.navigation.observer.observed().len(), 1);
    }

    #[test]
    fn test_replace_content_keeps_active_document_anchor() {
        let mut state = AppState::default();
        state.navigation.active = "deploying".into();

        state.replace_content(default_content());
        assert_eq!(state.active_section().as_str(), "deploying");
    }
}
