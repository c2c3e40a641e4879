//! Detail view modal - the secondary view for exactly one idea.
//!
//! Shows the preformatted detail block in a monospaced,
//! whitespace-preserving paragraph over the list.

use super::layout::{popup_rect, truncate_with_ellipsis};
use crate::tui::App;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

pub fn draw_detail_modal(f: &mut Frame, app: &App) {
    let Some(idea) = app.detail_idea() else {
        return;
    };

    let area = popup_rect(70, 80, 60, 20, f.area());
    f.render_widget(Clear, area);

    let title = format!(
        " {} ",
        truncate_with_ellipsis(&idea.title, area.width.saturating_sub(4) as usize)
    );
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(inner);

    let text = app.detail_text().unwrap_or_default();
    let paragraph = Paragraph::new(text)
        .wrap(Wrap { trim: false })
        .scroll((app.detail_scroll, 0));
    f.render_widget(paragraph, chunks[0]);

    let hints = Line::from(Span::styled(
        " j/k scroll · 1-9 open link · c contact · o open in browser · Esc close ",
        Style::default().fg(Color::DarkGray),
    ));
    f.render_widget(Paragraph::new(hints), chunks[1]);
}
