use crate::app::{
    action::{Action, UpdateResult},
    features::navigation,
    state::{AppMode, AppState, SearchPaletteState},
};

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::OpenSearch => {
            open(state);
            UpdateResult::Handled(None)
        }
        Action::CloseSearch => {
            close(state);
            UpdateResult::Handled(None)
        }
        Action::SearchInput(c) => {
            edit_query(state, |q| q.push(*c));
            UpdateResult::Handled(None)
        }
        Action::SearchBackspace => {
            edit_query(state, |q| {
                q.pop();
            });
            UpdateResult::Handled(None)
        }
        Action::SearchClear => {
            edit_query(state, String::clear);
            UpdateResult::Handled(None)
        }
        Action::SearchNext => {
            if let Some(search) = &mut state.search {
                search.select_next();
            }
            UpdateResult::Handled(None)
        }
        Action::SearchPrev => {
            if let Some(search) = &mut state.search {
                search.select_prev();
            }
            UpdateResult::Handled(None)
        }
        Action::SearchCommit => {
            let entry = state.search.as_ref().and_then(SearchPaletteState::selected_entry);
            commit(state, entry);
            UpdateResult::Handled(None)
        }
        Action::SearchSelect(row) => {
            let entry = state
                .search
                .as_ref()
                .and_then(|s| s.matches.get(*row).copied());
            commit(state, entry);
            UpdateResult::Handled(None)
        }
        _ => UpdateResult::NotHandled,
    }
}

/// Opens the palette unless it is already open.
fn open(state: &mut AppState) {
    if state.search.is_some() {
        return;
    }
    let palette = SearchPaletteState::open(&state.content.entries, &state.navigation.active);
    tracing::debug!(
        active = %state.navigation.active,
        selected = palette.selected_index,
        "search palette opened"
    );
    state.search = Some(palette);
    state.mode = AppMode::Search;
}

/// Closes the palette and drops the query without committing.
fn close(state: &mut AppState) {
    if state.search.take().is_some() {
        tracing::debug!("search palette closed");
    }
    if state.mode == AppMode::Search {
        state.mode = AppMode::Normal;
    }
}

fn edit_query(state: &mut AppState, edit: impl FnOnce(&mut String)) {
    if let Some(search) = &mut state.search {
        let mut query = search.query.clone();
        edit(&mut query);
        search.set_query(&state.content.entries, query);
    }
}

/// Closes the palette and activates the entry's section. Nothing happens
/// when there is no entry to commit.
fn commit(state: &mut AppState, entry: Option<usize>) {
    let Some(section_id) = entry
        .and_then(|i| state.content.entries.get(i))
        .map(|e| e.section_id.clone())
    else {
        return;
    };
    close(state);
    navigation::activate(state, section_id);
}
