//! Idea card list rendering.
//!
//! Each visible idea renders as a self-contained multi-line card:
//! title, metadata line, tag badges, abstract excerpt, and (on the
//! selected card) the contact affordance. The whole list is rebuilt
//! on every draw; there is no incremental patching.

use super::layout::truncate_with_ellipsis;
use crate::data::Idea;
use crate::tui::App;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

pub fn draw_idea_list(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(" Ideas ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    if let Some(text) = empty_state_text(app) {
        let paragraph = Paragraph::new(Line::from(Span::styled(
            text,
            Style::default().fg(Color::DarkGray),
        )))
        .centered();
        f.render_widget(paragraph, inner);
        return;
    }

    let width = inner.width as usize;
    let items: Vec<ListItem> = app
        .filtered_indices
        .iter()
        .enumerate()
        .map(|(pos, &idx)| ListItem::new(card_lines(&app.ideas[idx], width, pos == app.selected)))
        .collect();

    let mut state = ListState::default().with_selected(Some(app.selected));
    f.render_stateful_widget(List::new(items), inner, &mut state);
}

/// Placeholder text when there are no cards to draw.
///
/// Loading and load-failure states replace the grid entirely; an
/// empty filter result shows the "No matches." card.
pub fn empty_state_text(app: &App) -> Option<String> {
    if app.is_loading && app.ideas.is_empty() {
        return Some(format!("{} Loading ideas…", app.spinner_char()));
    }
    if app.error_message.is_some() && app.ideas.is_empty() {
        return Some("Failed to load ideas.".to_string());
    }
    if app.filtered_indices.is_empty() {
        return Some("No matches.".to_string());
    }
    None
}

/// Build the display lines for one idea card.
pub fn card_lines(idea: &Idea, width: usize, selected: bool) -> Vec<Line<'static>> {
    let text_width = width.saturating_sub(2);

    let title_style = if selected {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };
    let marker = if selected { "▸ " } else { "  " };

    let mut lines = vec![Line::from(vec![
        Span::styled(marker.to_string(), title_style),
        Span::styled(
            truncate_with_ellipsis(&idea.title, text_width),
            title_style,
        ),
    ])];

    let meta = format!(
        "Disclosed: {} │ Updated: {} │ Status: {}",
        idea.date_disclosed,
        idea.last_updated,
        idea.status_label()
    );
    lines.push(Line::from(vec![
        Span::raw("  "),
        Span::styled(
            truncate_with_ellipsis(&meta, text_width),
            Style::default().fg(Color::DarkGray),
        ),
    ]));

    if !idea.tags.is_empty() {
        let mut spans = vec![Span::raw("  ")];
        for tag in &idea.tags {
            spans.push(Span::styled(
                format!("[{}]", tag),
                Style::default().fg(Color::Cyan),
            ));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
    }

    if !idea.abstract_text.is_empty() {
        let excerpt = idea.abstract_text.lines().next().unwrap_or("");
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(
                truncate_with_ellipsis(excerpt, text_width),
                Style::default().fg(Color::Gray),
            ),
        ]));
    }

    if selected {
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(
                "Enter details · c contact about this idea",
                Style::default().fg(Color::DarkGray),
            ),
        ]));
    }

    lines.push(Line::from(""));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Idea;

    fn make_idea() -> Idea {
        Idea {
            id: "echo".to_string(),
            title: "Acoustic Mapper".to_string(),
            abstract_text: "Room geometry from echoes.".to_string(),
            tags: vec!["audio".to_string()],
            date_disclosed: "2024-01-01".to_string(),
            last_updated: "2024-02-01".to_string(),
            status: None,
            links: Vec::new(),
        }
    }

    fn line_text(line: &Line) -> String {
        line.spans
            .iter()
            .map(|s| s.content.as_ref())
            .collect::<String>()
    }

    #[test]
    fn card_contains_title_meta_and_tags() {
        let lines = card_lines(&make_idea(), 80, false);
        let text: Vec<String> = lines.iter().map(line_text).collect();

        assert!(text[0].contains("Acoustic Mapper"));
        assert!(text[1].contains("Disclosed: 2024-01-01"));
        // Missing status falls back to the placeholder.
        assert!(text[1].contains("Status: —"));
        assert!(text[2].contains("[audio]"));
        assert!(text[3].contains("Room geometry"));
    }

    #[test]
    fn selected_card_carries_contact_affordance() {
        let selected: Vec<String> = card_lines(&make_idea(), 80, true)
            .iter()
            .map(line_text)
            .collect();
        let unselected: Vec<String> = card_lines(&make_idea(), 80, false)
            .iter()
            .map(line_text)
            .collect();

        assert!(selected.iter().any(|l| l.contains("c contact")));
        assert!(!unselected.iter().any(|l| l.contains("c contact")));
    }

    #[test]
    fn long_title_is_truncated_to_width() {
        let mut idea = make_idea();
        idea.title = "x".repeat(200);
        let lines = card_lines(&idea, 20, false);
        assert!(line_text(&lines[0]).ends_with('…'));
    }
}
