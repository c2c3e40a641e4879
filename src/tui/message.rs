//! Message enum for Elm Architecture (TEA) pattern.
//!
//! All possible user actions in the application are represented as
//! messages, dispatched from key events and processed by `App::update()`.

/// All possible user actions in the application.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    // ─────────────────────────────────────────────────────────────────────────
    // App lifecycle
    // ─────────────────────────────────────────────────────────────────────────
    /// Quit the application
    Quit,
    /// Re-fetch the catalog (the TUI analog of a page reload)
    Reload,

    // ─────────────────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────────────────
    /// Move selection up by one card
    MoveUp,
    /// Move selection down by one card
    MoveDown,
    /// Go to the first card
    GotoTop,
    /// Go to the last card
    GotoBottom,
    /// Page up
    PageUp,
    /// Page down
    PageDown,

    // ─────────────────────────────────────────────────────────────────────────
    // Search mode
    // ─────────────────────────────────────────────────────────────────────────
    /// Enter search mode (edits the live query)
    EnterSearch,
    /// Leave search mode, keeping the current query
    ExitSearch,
    /// Add a character to the query
    SearchInput(char),
    /// Remove the last character from the query
    SearchBackspace,
    /// Clear the text query and the tag selection
    ClearFilters,

    // ─────────────────────────────────────────────────────────────────────────
    // Tag menu
    // ─────────────────────────────────────────────────────────────────────────
    /// Toggle the tag selection menu
    ToggleTagMenu,
    /// Move tag menu selection up
    TagMenuUp,
    /// Move tag menu selection down
    TagMenuDown,
    /// Apply the highlighted tag menu entry
    SelectTag,

    // ─────────────────────────────────────────────────────────────────────────
    // Detail view
    // ─────────────────────────────────────────────────────────────────────────
    /// Open the detail view for the selected card
    OpenDetail,
    /// Close the detail view
    CloseDetail,
    /// Scroll the detail block by delta (positive = down)
    ScrollDetail(i32),
    /// Open the nth link of the detailed idea (0-indexed)
    OpenLink(usize),
    /// Open the contact mail link for the current idea
    OpenContact,
    /// Export the detail page to HTML and open it in the browser
    OpenInBrowser,

    // ─────────────────────────────────────────────────────────────────────────
    // Modals
    // ─────────────────────────────────────────────────────────────────────────
    /// Toggle the help modal
    ToggleHelp,
    /// Close the current modal
    CloseModal,

    /// No operation (unhandled keys, pending chords)
    None,
}
