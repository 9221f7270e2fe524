use crate::domain::models::{SearchEntry, SectionId};
use crate::domain::search::{filter_entries, initial_selection};

/// The open search palette. `None` in `AppState` means closed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchPaletteState {
    pub query: String,
    pub matches: Vec<usize>, // Indices into the entry list
    pub selected_index: usize,
}

impl SearchPaletteState {
    /// Opens with an empty query and the selection on the first entry of
    /// the active section.
    #[must_use]
    pub fn open(entries: &[SearchEntry], active: &SectionId) -> Self {
        Self {
            query: String::new(),
            matches: filter_entries(entries, ""),
            selected_index: initial_selection(entries, active),
        }
    }

    /// Replaces the query. The selection resets only when the text changed.
    pub fn set_query(&mut self, entries: &[SearchEntry], query: String) {
        if query == self.query {
            return;
        }
        self.query = query;
        self.refilter(entries);
    }

    pub fn refilter(&mut self, entries: &[SearchEntry]) {
        self.matches = filter_entries(entries, &self.query);
        self.selected_index = 0;
    }

    pub fn select_next(&mut self) {
        if !self.matches.is_empty() {
            self.selected_index = (self.selected_index + 1).min(self.matches.len() - 1);
        }
    }

    pub fn select_prev(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    /// Entry index under the cursor, if there is a result to commit.
    #[must_use]
    pub fn selected_entry(&self) -> Option<usize> {
        self.matches.get(self.selected_index).copied()
    }
}
