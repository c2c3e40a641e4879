//! Input dispatch layer for Elm Architecture (TEA) pattern.
//!
//! Maps key events to messages based on current app mode. Handles the
//! gg chord with a non-blocking state machine.

use super::{App, Message};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::Instant;

/// State machine for pending key chords (gg).
///
/// Instead of blocking with `event::poll()` inline, we track the
/// pending key and check for timeout in the main event loop.
#[derive(Debug, Default)]
pub struct InputState {
    /// The first key of a potential chord sequence
    pub pending: Option<KeyCode>,
    /// When the pending key was pressed (for timeout detection)
    pub pending_since: Option<Instant>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if there's a pending chord that has timed out (500ms).
    pub fn has_timed_out(&self) -> bool {
        if let Some(since) = self.pending_since {
            since.elapsed().as_millis() > 500
        } else {
            false
        }
    }

    /// Clear the pending chord state.
    pub fn clear(&mut self) {
        self.pending = None;
        self.pending_since = None;
    }

    /// Set a pending chord key.
    pub fn set_pending(&mut self, key: KeyCode) {
        self.pending = Some(key);
        self.pending_since = Some(Instant::now());
    }
}

/// Map key events to messages based on current app mode.
pub fn dispatch(app: &App, input: &mut InputState, key: KeyEvent) -> Message {
    // Handle pending chords first
    if let Some(pending) = input.pending.take() {
        input.pending_since = None;
        return handle_chord(app, pending, key.code);
    }

    if app.search_mode {
        dispatch_search_mode(key)
    } else if app.show_detail() {
        dispatch_detail_view(input, key)
    } else if app.show_tag_menu() {
        dispatch_tag_menu(key)
    } else if app.show_help() {
        dispatch_help_modal(key)
    } else {
        dispatch_normal_mode(input, key)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Mode-specific dispatch functions
// ─────────────────────────────────────────────────────────────────────────────

/// Handle keys in normal mode (card list).
fn dispatch_normal_mode(input: &mut InputState, key: KeyEvent) -> Message {
    match key.code {
        KeyCode::Char('q') => Message::Quit,
        KeyCode::Char('j') | KeyCode::Down => Message::MoveDown,
        KeyCode::Char('k') | KeyCode::Up => Message::MoveUp,
        KeyCode::Char('G') => Message::GotoBottom,
        KeyCode::Char('g') => {
            input.set_pending(KeyCode::Char('g'));
            Message::None
        }
        KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => Message::PageDown,
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => Message::PageUp,
        KeyCode::Char('/') => Message::EnterSearch,
        KeyCode::Enter => Message::OpenDetail,
        KeyCode::Char('t') => Message::ToggleTagMenu,
        KeyCode::Char('c') => Message::OpenContact,
        KeyCode::Char('r') => Message::Reload,
        KeyCode::Char('?') => Message::ToggleHelp,
        KeyCode::Esc => Message::ClearFilters,
        _ => Message::None,
    }
}

/// Handle keys in search mode.
fn dispatch_search_mode(key: KeyEvent) -> Message {
    match key.code {
        KeyCode::Esc | KeyCode::Enter => Message::ExitSearch,
        KeyCode::Backspace => Message::SearchBackspace,
        KeyCode::Char(c) => Message::SearchInput(c),
        _ => Message::None,
    }
}

/// Handle keys while the detail view is open.
fn dispatch_detail_view(input: &mut InputState, key: KeyEvent) -> Message {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => Message::CloseDetail,
        KeyCode::Char('j') | KeyCode::Down => Message::ScrollDetail(1),
        KeyCode::Char('k') | KeyCode::Up => Message::ScrollDetail(-1),
        KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Message::ScrollDetail(10)
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Message::ScrollDetail(-10)
        }
        KeyCode::Char('G') => Message::ScrollDetail(i32::MAX),
        KeyCode::Char('g') => {
            input.set_pending(KeyCode::Char('g'));
            Message::None
        }
        KeyCode::Char('c') => Message::OpenContact,
        KeyCode::Char('o') => Message::OpenInBrowser,
        KeyCode::Char(c) if c.is_ascii_digit() && c != '0' => {
            Message::OpenLink(c.to_digit(10).unwrap() as usize - 1)
        }
        _ => Message::None,
    }
}

/// Handle keys in the tag menu.
fn dispatch_tag_menu(key: KeyEvent) -> Message {
    match key.code {
        KeyCode::Esc | KeyCode::Char('t') => Message::CloseModal,
        KeyCode::Char('j') | KeyCode::Down => Message::TagMenuDown,
        KeyCode::Char('k') | KeyCode::Up => Message::TagMenuUp,
        KeyCode::Enter => Message::SelectTag,
        _ => Message::None,
    }
}

/// Handle keys in the help modal.
fn dispatch_help_modal(key: KeyEvent) -> Message {
    match key.code {
        KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => Message::CloseModal,
        _ => Message::None,
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Chord handling
// ─────────────────────────────────────────────────────────────────────────────

/// Handle the second key of a chord sequence.
fn handle_chord(app: &App, first: KeyCode, second: KeyCode) -> Message {
    match (first, second) {
        // gg -> go to top (card list and detail view)
        (KeyCode::Char('g'), KeyCode::Char('g')) => {
            if app.show_detail() {
                Message::ScrollDetail(i32::MIN)
            } else {
                Message::GotoTop
            }
        }
        _ => Message::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

    fn key_event(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        }
    }

    fn key_event_ctrl(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        }
    }

    #[test]
    fn test_normal_mode_quit() {
        let mut input = InputState::new();
        let msg = dispatch_normal_mode(&mut input, key_event(KeyCode::Char('q')));
        assert_eq!(msg, Message::Quit);
    }

    #[test]
    fn test_normal_mode_navigation() {
        let mut input = InputState::new();
        assert_eq!(
            dispatch_normal_mode(&mut input, key_event(KeyCode::Char('j'))),
            Message::MoveDown
        );
        assert_eq!(
            dispatch_normal_mode(&mut input, key_event(KeyCode::Char('k'))),
            Message::MoveUp
        );
        assert_eq!(
            dispatch_normal_mode(&mut input, key_event(KeyCode::Char('G'))),
            Message::GotoBottom
        );
        assert_eq!(
            dispatch_normal_mode(&mut input, key_event_ctrl(KeyCode::Char('d'))),
            Message::PageDown
        );
    }

    #[test]
    fn test_normal_mode_open_detail() {
        let mut input = InputState::new();
        assert_eq!(
            dispatch_normal_mode(&mut input, key_event(KeyCode::Enter)),
            Message::OpenDetail
        );
    }

    #[test]
    fn test_chord_pending_state() {
        let mut input = InputState::new();
        let msg = dispatch_normal_mode(&mut input, key_event(KeyCode::Char('g')));
        assert_eq!(msg, Message::None);
        assert!(input.pending.is_some());
        assert!(input.pending_since.is_some());
    }

    #[test]
    fn test_search_mode() {
        assert_eq!(
            dispatch_search_mode(key_event(KeyCode::Esc)),
            Message::ExitSearch
        );
        assert_eq!(
            dispatch_search_mode(key_event(KeyCode::Char('a'))),
            Message::SearchInput('a')
        );
        assert_eq!(
            dispatch_search_mode(key_event(KeyCode::Backspace)),
            Message::SearchBackspace
        );
    }

    #[test]
    fn test_detail_view_links_and_export() {
        let mut input = InputState::new();
        assert_eq!(
            dispatch_detail_view(&mut input, key_event(KeyCode::Char('1'))),
            Message::OpenLink(0)
        );
        assert_eq!(
            dispatch_detail_view(&mut input, key_event(KeyCode::Char('9'))),
            Message::OpenLink(8)
        );
        assert_eq!(
            dispatch_detail_view(&mut input, key_event(KeyCode::Char('0'))),
            Message::None
        );
        assert_eq!(
            dispatch_detail_view(&mut input, key_event(KeyCode::Char('o'))),
            Message::OpenInBrowser
        );
        assert_eq!(
            dispatch_detail_view(&mut input, key_event(KeyCode::Esc)),
            Message::CloseDetail
        );
    }

    #[test]
    fn test_tag_menu() {
        assert_eq!(
            dispatch_tag_menu(key_event(KeyCode::Enter)),
            Message::SelectTag
        );
        assert_eq!(
            dispatch_tag_menu(key_event(KeyCode::Esc)),
            Message::CloseModal
        );
    }

    #[test]
    fn test_input_state_timeout() {
        let mut input = InputState::new();
        input.set_pending(KeyCode::Char('g'));
        assert!(!input.has_timed_out());
    }
}
