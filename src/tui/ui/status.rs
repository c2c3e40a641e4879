//! Header and status bar rendering.

use super::layout::display_width;
use crate::tui::App;
use chrono::Datelike;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the application header: search input when editing, otherwise
/// the title with the active filter summary.
pub fn draw_header(f: &mut Frame, app: &App, area: Rect) {
    let border_style = if app.search_mode {
        Style::default().fg(Color::Yellow)
    } else if app.is_loading {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let text = if app.search_mode {
        Line::from(vec![
            Span::styled("Search: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                app.search_query.clone(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("█", Style::default().fg(Color::Yellow)),
        ])
    } else if app.is_loading {
        Line::from(vec![Span::styled(
            format!("{} Loading catalog…", app.spinner_char()),
            Style::default().fg(Color::Cyan),
        )])
    } else {
        let mut spans = vec![Span::styled(
            "Ideas",
            Style::default().add_modifier(Modifier::BOLD),
        )];
        if !app.search_query.is_empty() {
            spans.push(Span::raw("  "));
            spans.push(Span::styled(
                format!("\"{}\"", app.search_query),
                Style::default().fg(Color::Yellow),
            ));
        }
        if let Some(tag) = &app.selected_tag {
            spans.push(Span::raw("  "));
            spans.push(Span::styled(
                format!("[{}]", tag),
                Style::default().fg(Color::Cyan),
            ));
        }
        Line::from(spans)
    };

    f.render_widget(Paragraph::new(text), inner);
}

/// Draw the status bar at the bottom of the screen: the results
/// counter, the catalog's last-updated stamp, key hints, and the year.
pub fn draw_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let width = area.width as usize;

    let mut spans = vec![Span::styled(
        format!(" {} ", app.count_label()),
        Style::default().fg(Color::White),
    )];

    if let Some(err) = &app.error_message {
        spans.push(Span::styled(
            format!("│ {} ", err),
            Style::default().fg(Color::Red),
        ));
    } else if let Some(updated) = &app.last_updated {
        spans.push(Span::styled(
            format!("│ Last updated: {} ", updated),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let hints = if width >= 90 {
        "│ /: search | t: tag | Enter: details | r: reload | ?: help "
    } else if width >= 50 {
        "│ / t Enter r ? "
    } else {
        ""
    };
    if !hints.is_empty() {
        spans.push(Span::styled(hints, Style::default().fg(Color::DarkGray)));
    }

    let used: usize = spans.iter().map(|s| display_width(s.content.as_ref())).sum();
    let year = format!("© {} ", chrono::Local::now().year());
    let year_width = display_width(&year);
    if width > used + year_width {
        spans.push(Span::raw(" ".repeat(width - used - year_width)));
        spans.push(Span::styled(year, Style::default().fg(Color::DarkGray)));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
