use crate::app::{
    action::{Action, UpdateResult},
    state::{AppState, ViewportState},
    ui,
};
use crate::domain::host::ScrollHost;
use crate::domain::layout::DocumentLayout;
use crate::domain::models::SectionId;
use ratatui::layout::Rect;

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::Activate(id) => {
            activate(state, id.clone());
            UpdateResult::Handled(None)
        }
        Action::NextSection => {
            step_section(state, 1);
            UpdateResult::Handled(None)
        }
        Action::PrevSection => {
            step_section(state, -1);
            UpdateResult::Handled(None)
        }
        Action::ScrollDown(n) => {
            scroll_by(state, *n as isize);
            UpdateResult::Handled(None)
        }
        Action::ScrollUp(n) => {
            scroll_by(state, -(*n as isize));
            UpdateResult::Handled(None)
        }
        Action::HalfPageDown => {
            scroll_by(state, half_page(state));
            UpdateResult::Handled(None)
        }
        Action::HalfPageUp => {
            scroll_by(state, -half_page(state));
            UpdateResult::Handled(None)
        }
        Action::PageDown => {
            scroll_by(state, full_page(state));
            UpdateResult::Handled(None)
        }
        Action::PageUp => {
            scroll_by(state, -full_page(state));
            UpdateResult::Handled(None)
        }
        Action::ScrollTop => {
            jump_to(state, 0);
            UpdateResult::Handled(None)
        }
        Action::ScrollBottom => {
            let max = state.layout.max_scroll(state.viewport.height);
            jump_to(state, max);
            UpdateResult::Handled(None)
        }
        Action::Resize(w, h) => {
            resize(state, *w, *h);
            UpdateResult::Handled(None)
        }
        _ => UpdateResult::NotHandled,
    }
}

/// Makes `id` the active section and starts scrolling to its anchor. An id
/// with no anchor in the document only changes the highlight.
///
/// The scroll this starts never moves the highlight away from `id`: the
/// observer is brought up to date silently, and only later manual scrolling
/// reports sections entering view.
pub fn activate(state: &mut AppState, id: SectionId) {
    tracing::debug!(section = %id, "activate");
    state.navigation.active = id.clone();
    let smooth = state.settings.smooth_scroll;
    if scroll_to_anchor(&mut state.viewport, &state.layout, &id, smooth) && !smooth {
        sync_observer(state);
    }
}

/// Points the viewport at the anchor's first row, clamped to the
/// scrollable range. Returns false without touching the viewport when the
/// anchor is not laid out.
pub fn scroll_to_anchor(
    viewport: &mut ViewportState,
    host: &dyn ScrollHost,
    id: &SectionId,
    smooth: bool,
) -> bool {
    let Some(row) = host.anchor_row(id) else {
        return false;
    };
    let dest = row.min(host.max_scroll(viewport.height));
    if smooth {
        viewport.target = Some(dest);
    } else {
        viewport.scroll = dest;
        viewport.target = None;
    }
    true
}

/// Advances an in-flight smooth scroll. Animations only come from
/// `activate`, so each step keeps the observer in sync without reporting.
pub fn tick(state: &mut AppState) {
    if state.viewport.step_animation() {
        sync_observer(state);
    }
}

fn sync_observer(state: &mut AppState) {
    let _ = state
        .navigation
        .observer
        .observe(state.viewport.scroll, state.viewport.height);
}

/// Feeds the current viewport to the visibility observer. Every target that
/// became visible is activated in report order, so the last one wins.
pub fn observe(state: &mut AppState) {
    let entries = state
        .navigation
        .observer
        .observe(state.viewport.scroll, state.viewport.height);
    for entry in entries.into_iter().filter(|e| e.is_intersecting) {
        tracing::debug!(section = %entry.id, "section entered view");
        state.navigation.active = entry.id;
    }
}

/// Moves to the neighbouring sidebar section. An active anchor without a
/// sidebar entry steps from its place in the document.
fn step_section(state: &mut AppState, delta: isize) {
    let sections = &state.content.sections;
    if sections.is_empty() {
        return;
    }
    let active = &state.navigation.active;
    let last = sections.len() as isize - 1;
    let next = if let Some(i) = sections.iter().position(|s| &s.id == active) {
        i as isize + delta
    } else if let Some(anchor) = state.layout.anchor(active) {
        // Sidebar sections laid out at or above the anchor
        let before = sections
            .iter()
            .filter(|s| {
                state
                    .layout
                    .anchor(&s.id)
                    .is_some_and(|a| a.start <= anchor.start)
            })
            .count() as isize;
        if delta < 0 {
            before + delta
        } else {
            before - 1 + delta
        }
    } else {
        0
    };
    let id = sections[next.clamp(0, last) as usize].id.clone();
    activate(state, id);
}

fn half_page(state: &AppState) -> isize {
    (state.viewport.height / 2).max(1) as isize
}

fn full_page(state: &AppState) -> isize {
    state.viewport.height.saturating_sub(2).max(1) as isize
}

/// Manual scrolling cancels any smooth scroll in flight.
fn scroll_by(state: &mut AppState, delta: isize) {
    let max = state.layout.max_scroll(state.viewport.height);
    let next = (state.viewport.scroll as isize + delta).clamp(0, max as isize) as usize;
    jump_to(state, next);
}

fn jump_to(state: &mut AppState, row: usize) {
    state.viewport.target = None;
    let max = state.layout.max_scroll(state.viewport.height);
    let row = row.min(max);
    if row != state.viewport.scroll {
        state.viewport.scroll = row;
    }
    observe(state);
}

/// Re-flows the document for the new pane size and keeps the reading
/// position on the same section when possible.
pub fn resize(state: &mut AppState, width: u16, height: u16) {
    state.terminal_size = (width, height);
    let pane = ui::get_layout(Rect::new(0, 0, width, height)).document_text;

    if pane.width != state.layout.width {
        let anchor_offset = state
            .layout
            .anchor(&state.navigation.active)
            .map(|a| state.viewport.scroll.saturating_sub(a.start));
        state.layout = DocumentLayout::build(&state.content.document, pane.width);
        state.navigation.observer.relayout(&state.layout);
        if let (Some(offset), Some(a)) =
            (anchor_offset, state.layout.anchor(&state.navigation.active))
        {
            state.viewport.scroll = a.start + offset.min(a.end.saturating_sub(a.start));
        }
    }

    state.viewport.width = pane.width;
    state.viewport.height = pane.height;
    let max = state.layout.max_scroll(pane.height);
    state.viewport.scroll = state.viewport.scroll.min(max);
    state.viewport.target = state.viewport.target.map(|t| t.min(max));
    observe(state);
}
