//! Menu rendering - tag selection and help popup.

use super::layout::popup_rect;
use crate::tui::App;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Draw the tag selection menu.
///
/// Entry 0 is "(all)"; the rest is the tag vocabulary built once at
/// load time from the unfiltered catalog.
pub fn draw_tag_menu(f: &mut Frame, app: &App) {
    let area = popup_rect(30, 60, 26, 8, f.area());
    f.render_widget(Clear, area);

    let block = Block::default()
        .title(" Filter by tag ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut entries = vec![make_entry("(all)", app.selected_tag.is_none())];
    entries.extend(app.available_tags.iter().map(|tag| {
        let active = app.selected_tag.as_deref() == Some(tag.as_str());
        make_entry(tag, active)
    }));

    let list = List::new(entries).highlight_style(
        Style::default()
            .fg(Color::White)
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    );
    let mut state = ListState::default().with_selected(Some(app.tag_menu_idx));
    f.render_stateful_widget(list, inner, &mut state);
}

fn make_entry(label: &str, active: bool) -> ListItem<'static> {
    let marker = if active { "● " } else { "  " };
    ListItem::new(Line::from(vec![
        Span::styled(marker.to_string(), Style::default().fg(Color::Cyan)),
        Span::raw(label.to_string()),
    ]))
}

/// Draw the help popup.
pub fn draw_help_popup(f: &mut Frame) {
    let area = popup_rect(50, 70, 44, 16, f.area());
    f.render_widget(Clear, area);

    let shortcuts = [
        ("j/k", "move selection"),
        ("gg/G", "first/last card"),
        ("Ctrl-d/u", "page down/up"),
        ("/", "search (live)"),
        ("t", "tag filter menu"),
        ("Esc", "clear filters"),
        ("Enter", "open detail view"),
        ("c", "contact about idea"),
        ("r", "reload catalog"),
        ("q", "quit"),
    ];

    let mut lines = vec![Line::from("")];
    for (key, action) in shortcuts {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {:<9}", key),
                Style::default().fg(Color::Cyan),
            ),
            Span::raw(action),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Esc: Close",
        Style::default().fg(Color::DarkGray),
    )));

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().fg(Color::White));

    f.render_widget(paragraph, area);
}
