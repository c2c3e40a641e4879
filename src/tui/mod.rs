mod app;
pub mod input;
mod message;
mod ui;

use crate::config::Config;
use anyhow::Result;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

pub use app::{App, LoadResult, ModalState};
pub use message::Message;
pub use ui::list::empty_state_text;

pub async fn run(config: Config) -> Result<()> {
    // Check if stdout is a terminal
    if !std::io::IsTerminal::is_terminal(&io::stdout()) {
        anyhow::bail!("ideadeck requires an interactive terminal");
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app state
    let mut app = App::new(config);

    // Initial catalog fetch (non-blocking - UI shows immediately with loading state)
    app.start_load();

    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    let tick_rate = Duration::from_millis(250);
    let mut last_tick = std::time::Instant::now();
    let mut input_state = input::InputState::new();

    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        let timeout = tick_rate.saturating_sub(last_tick.elapsed());

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                let msg = input::dispatch(app, &mut input_state, key);
                if app.update(msg)? {
                    return Ok(()); // Quit requested
                }
            }
        }

        // Handle pending chord timeout (non-blocking)
        if input_state.has_timed_out() {
            input_state.clear();
        }

        if last_tick.elapsed() >= tick_rate {
            app.tick_spinner();

            // Poll for the background load result (non-blocking)
            app.poll_load();

            last_tick = std::time::Instant::now();
        }
    }
}
