use crate::catalog;
use crate::config::Config;
use crate::data::{filter, unique_tags, Idea, IdeaCatalog};
use crate::render;
use anyhow::Result;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Braille spinner frames for loading animation
pub const SPINNER_FRAMES: &[char] = &['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// Result from the background catalog load task
pub enum LoadResult {
    /// Catalog fetched and decoded
    Loaded(IdeaCatalog),
    /// Fetch or decode failed
    Error(String),
}

/// Active modal state - only one modal can be active at a time.
///
/// `Detail` holds the idea id, not an index: the lookup runs against
/// the in-memory catalog on every draw, and a missing id simply never
/// reaches this state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    None,
    Detail {
        idea_id: String,
    },
    TagMenu,
    Help,
}

pub struct App {
    pub config: Arc<Config>,

    // Catalog state (immutable between loads)
    pub ideas: Vec<Idea>,
    pub last_updated: Option<String>,
    pub available_tags: Vec<String>,

    // Filter state
    pub search_query: String,
    pub selected_tag: Option<String>,
    pub filtered_indices: Vec<usize>,

    // UI state
    pub selected: usize,
    pub search_mode: bool,
    pub modal: ModalState,
    pub detail_scroll: u16,
    pub tag_menu_idx: usize,
    pub error_message: Option<String>,
    pub is_loading: bool,
    pub spinner_frame: usize,

    /// Channel receiver for the background load result
    pub load_rx: Option<mpsc::Receiver<LoadResult>>,
}

// Modal state accessors
impl App {
    pub fn show_detail(&self) -> bool {
        matches!(self.modal, ModalState::Detail { .. })
    }

    pub fn show_tag_menu(&self) -> bool {
        matches!(self.modal, ModalState::TagMenu)
    }

    pub fn show_help(&self) -> bool {
        matches!(self.modal, ModalState::Help)
    }
}

impl App {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
            ideas: Vec::new(),
            last_updated: None,
            available_tags: Vec::new(),
            search_query: String::new(),
            selected_tag: None,
            filtered_indices: Vec::new(),
            selected: 0,
            search_mode: false,
            modal: ModalState::None,
            detail_scroll: 0,
            tag_menu_idx: 0,
            error_message: None,
            is_loading: false,
            spinner_frame: 0,
            load_rx: None,
        }
    }

    /// Process a message and update app state (Elm Architecture update function).
    ///
    /// Returns `Ok(true)` if the app should quit, `Ok(false)` to continue.
    pub fn update(&mut self, msg: super::Message) -> Result<bool> {
        use super::Message;
        match msg {
            Message::Quit => return Ok(true),
            Message::Reload => self.start_load(),

            Message::MoveUp => self.move_selection(-1),
            Message::MoveDown => self.move_selection(1),
            Message::GotoTop => self.selected = 0,
            Message::GotoBottom => {
                self.selected = self.filtered_indices.len().saturating_sub(1);
            }
            Message::PageUp => self.move_selection(-5),
            Message::PageDown => self.move_selection(5),

            Message::EnterSearch => self.search_mode = true,
            Message::ExitSearch => self.search_mode = false,
            Message::SearchInput(c) => {
                self.search_query.push(c);
                self.apply_filters();
            }
            Message::SearchBackspace => {
                self.search_query.pop();
                self.apply_filters();
            }
            Message::ClearFilters => {
                if !self.search_query.is_empty() || self.selected_tag.is_some() {
                    self.search_query.clear();
                    self.selected_tag = None;
                    self.apply_filters();
                }
            }

            Message::ToggleTagMenu => self.toggle_tag_menu(),
            Message::TagMenuUp => self.move_tag_menu(-1),
            Message::TagMenuDown => self.move_tag_menu(1),
            Message::SelectTag => self.select_tag(),

            Message::OpenDetail => {
                if let Some(id) = self.selected_idea().map(|idea| idea.id.clone()) {
                    self.open_idea(&id);
                }
            }
            Message::CloseDetail => self.modal = ModalState::None,
            Message::ScrollDetail(delta) => self.scroll_detail(delta),
            Message::OpenLink(idx) => self.open_link(idx)?,
            Message::OpenContact => self.open_contact()?,
            Message::OpenInBrowser => self.open_in_browser()?,

            Message::ToggleHelp => {
                self.modal = if self.show_help() {
                    ModalState::None
                } else {
                    ModalState::Help
                };
            }
            Message::CloseModal => self.modal = ModalState::None,

            Message::None => {}
        }
        Ok(false)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Catalog loading
    // ─────────────────────────────────────────────────────────────────────────

    /// Start the catalog fetch in the background (non-blocking).
    pub fn start_load(&mut self) {
        // Don't start another load if one is already in flight
        if self.load_rx.is_some() {
            return;
        }

        self.is_loading = true;

        let (tx, rx) = mpsc::channel(1);
        self.load_rx = Some(rx);

        let source = self.config.catalog.source.clone();
        tokio::spawn(async move {
            let result = match catalog::load_catalog(&source).await {
                Ok(catalog) => LoadResult::Loaded(catalog),
                Err(e) => LoadResult::Error(e.to_string()),
            };
            let _ = tx.send(result).await;
        });
    }

    /// Poll for the load result (non-blocking, call from the event-loop tick).
    pub fn poll_load(&mut self) {
        let Some(mut rx) = self.load_rx.take() else {
            return;
        };

        match rx.try_recv() {
            Ok(LoadResult::Loaded(catalog)) => {
                self.install_catalog(catalog);
                self.is_loading = false;
            }
            Ok(LoadResult::Error(msg)) => {
                tracing::error!("Failed to load catalog: {}", msg);
                self.error_message = Some(msg);
                self.is_loading = false;
            }
            Err(_) => {
                // Still in flight, keep polling
                self.load_rx = Some(rx);
            }
        }
    }

    /// Replace the in-memory catalog and rebuild everything derived
    /// from it: tag vocabulary, filtered view, selection.
    pub fn install_catalog(&mut self, catalog: IdeaCatalog) {
        self.available_tags = unique_tags(&catalog.ideas);
        self.last_updated = catalog.last_updated;
        self.ideas = catalog.ideas;
        self.error_message = None;

        // A previously selected tag may no longer exist after reload.
        if let Some(tag) = &self.selected_tag {
            if !self.available_tags.contains(tag) {
                self.selected_tag = None;
            }
        }
        self.apply_filters();
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Filtering
    // ─────────────────────────────────────────────────────────────────────────

    /// Recompute the visible subset. Runs on every input change.
    pub fn apply_filters(&mut self) {
        self.filtered_indices = filter::filter_ideas(
            &self.ideas,
            &self.search_query,
            self.selected_tag.as_deref(),
        );
        if self.selected >= self.filtered_indices.len() {
            self.selected = self.filtered_indices.len().saturating_sub(1);
        }
    }

    /// Results counter text ("1 idea" / "N ideas").
    pub fn count_label(&self) -> String {
        filter::count_label(self.filtered_indices.len())
    }

    /// The idea under the cursor in the filtered list.
    pub fn selected_idea(&self) -> Option<&Idea> {
        self.filtered_indices
            .get(self.selected)
            .and_then(|&idx| self.ideas.get(idx))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Detail view
    // ─────────────────────────────────────────────────────────────────────────

    /// Open the detail view for an idea by id.
    ///
    /// An id not present in the catalog is silently ignored: no state
    /// change, no error.
    pub fn open_idea(&mut self, id: &str) {
        if self.ideas.iter().any(|idea| idea.id == id) {
            self.modal = ModalState::Detail {
                idea_id: id.to_string(),
            };
            self.detail_scroll = 0;
        }
    }

    /// The idea shown in the open detail view, if any.
    pub fn detail_idea(&self) -> Option<&Idea> {
        match &self.modal {
            ModalState::Detail { idea_id } => self.ideas.iter().find(|idea| idea.id == *idea_id),
            _ => None,
        }
    }

    /// The full preformatted text of the open detail view.
    pub fn detail_text(&self) -> Option<String> {
        self.detail_idea()
            .map(|idea| render::detail_text(idea, &self.config.ui.author))
    }

    fn scroll_detail(&mut self, delta: i32) {
        let max = self
            .detail_text()
            .map(|text| text.lines().count().saturating_sub(1) as i64)
            .unwrap_or(0);
        let scrolled = (self.detail_scroll as i64 + delta as i64).clamp(0, max);
        self.detail_scroll = scrolled as u16;
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Tag menu
    // ─────────────────────────────────────────────────────────────────────────

    fn toggle_tag_menu(&mut self) {
        if self.show_tag_menu() {
            self.modal = ModalState::None;
            return;
        }
        // Highlight the active tag (entry 0 is "(all)")
        self.tag_menu_idx = self
            .selected_tag
            .as_deref()
            .and_then(|tag| self.available_tags.iter().position(|t| t == tag))
            .map(|pos| pos + 1)
            .unwrap_or(0);
        self.modal = ModalState::TagMenu;
    }

    fn move_tag_menu(&mut self, delta: i32) {
        let len = self.available_tags.len() + 1; // "(all)" entry
        if len == 0 {
            return;
        }
        let pos = self.tag_menu_idx as i64 + delta as i64;
        self.tag_menu_idx = pos.clamp(0, len as i64 - 1) as usize;
    }

    fn select_tag(&mut self) {
        self.selected_tag = if self.tag_menu_idx == 0 {
            None
        } else {
            self.available_tags.get(self.tag_menu_idx - 1).cloned()
        };
        self.modal = ModalState::None;
        self.apply_filters();
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────────────────

    fn move_selection(&mut self, delta: i32) {
        let len = self.filtered_indices.len();
        if len == 0 {
            return;
        }
        let pos = self.selected as i64 + delta as i64;
        self.selected = pos.clamp(0, len as i64 - 1) as usize;
    }

    // ─────────────────────────────────────────────────────────────────────────
    // External actions
    // ─────────────────────────────────────────────────────────────────────────

    /// Idea the contact/export actions refer to: the detailed idea
    /// when the detail view is open, the selected card otherwise.
    fn action_idea(&self) -> Option<&Idea> {
        self.detail_idea().or_else(|| self.selected_idea())
    }

    fn open_contact(&self) -> Result<()> {
        if let Some(idea) = self.action_idea() {
            let url = render::mailto_url(&self.config.contact.email, &idea.title);
            open_url(&url)?;
        }
        Ok(())
    }

    fn open_link(&self, idx: usize) -> Result<()> {
        if let Some(link) = self.detail_idea().and_then(|idea| idea.links.get(idx)) {
            open_url(&link.url)?;
        }
        Ok(())
    }

    /// Write the escaped HTML detail page to a temp file and open it
    /// in the browser.
    fn open_in_browser(&self) -> Result<()> {
        let Some(idea) = self.detail_idea() else {
            return Ok(());
        };
        let page = render::detail_page(idea, &self.config.ui.author);
        let path = std::env::temp_dir().join(format!("ideadeck-{}.html", safe_file_stem(&idea.id)));
        std::fs::write(&path, page)?;
        open_url(&path.display().to_string())?;
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Ticks
    // ─────────────────────────────────────────────────────────────────────────

    /// Advance spinner frame (call on tick while loading)
    pub fn tick_spinner(&mut self) {
        if self.is_loading {
            self.spinner_frame = (self.spinner_frame + 1) % SPINNER_FRAMES.len();
        }
    }

    /// Get current spinner character
    pub fn spinner_char(&self) -> char {
        SPINNER_FRAMES[self.spinner_frame]
    }
}

/// Reduce an idea id to characters safe in a file name.
fn safe_file_stem(id: &str) -> String {
    id.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '-'
            }
        })
        .collect()
}

fn open_url(url: &str) -> Result<()> {
    // Use xdg-open on Linux, which works in WSL
    std::process::Command::new("xdg-open")
        .arg(url)
        .spawn()
        .or_else(|_| {
            // Fallback to wslview for WSL
            std::process::Command::new("wslview").arg(url).spawn()
        })?;
    Ok(())
}
