use crate::app::command::Command;
use crate::domain::models::{Content, SectionId};

#[derive(Debug, Clone)]
pub enum UpdateResult {
    Handled(Option<Command>),
    NotHandled,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // --- System / Terminal ---
    Tick,
    Resize(u16, u16),
    Quit,

    // --- Navigation ---
    Activate(SectionId), // Sidebar / TOC click or search commit
    NextSection,
    PrevSection,
    ScrollDown(u16),
    ScrollUp(u16),
    HalfPageDown,
    HalfPageUp,
    PageDown,
    PageUp,
    ScrollTop,
    ScrollBottom,

    // --- Search Palette ---
    OpenSearch,          // Global shortcut (Ctrl-K)
    CloseSearch,         // ESC or backdrop click
    SearchInput(char),   // Append to the query
    SearchBackspace,     // Drop the last query character
    SearchClear,         // Ctrl-U
    SearchNext,          // Down
    SearchPrev,          // Up
    SearchCommit,        // Enter
    SearchSelect(usize), // Click on a result row

    // --- UI ---
    ToggleHelp,
    CancelMode,
    CycleTheme,

    // --- Async Results ---
    ExternalChangeDetected,       // Content file changed on disk
    ContentReloaded(Box<Content>), // Fresh content parsed
    ReloadFailed(String),
}
