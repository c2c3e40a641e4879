//! TUI rendering module.
//!
//! This module handles all UI rendering for the terminal interface:
//!
//! - `layout` - layout calculations and text utilities
//! - `status` - header and status bar rendering
//! - `list` - idea card list rendering
//! - `detail` - detail view modal
//! - `menus` - tag menu and help popup

mod detail;
pub mod layout;
pub mod list;
mod menus;
mod status;

// Re-export the main draw function
pub use self::draw::draw;

mod draw {

    use super::detail::draw_detail_modal;
    use super::list::draw_idea_list;
    use super::menus::{draw_help_popup, draw_tag_menu};
    use super::status::{draw_header, draw_status_bar};
    use crate::tui::App;
    use ratatui::{
        layout::{Constraint, Direction, Layout},
        Frame,
    };

    /// Main draw function - renders the entire TUI.
    pub fn draw(f: &mut Frame, app: &App) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header/search
                Constraint::Min(0),    // Card list
                Constraint::Length(1), // Status bar
            ])
            .split(f.area());

        draw_header(f, app, chunks[0]);
        draw_idea_list(f, app, chunks[1]);
        draw_status_bar(f, app, chunks[2]);

        // Overlays
        if app.show_tag_menu() {
            draw_tag_menu(f, app);
        }

        if app.show_detail() {
            draw_detail_modal(f, app);
        }

        if app.show_help() {
            draw_help_popup(f);
        }
    }
}
