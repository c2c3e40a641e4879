//! Filtering and ordering for the idea list.
//!
//! This module is the single source of truth for the visible subset:
//! the TUI re-runs these functions on every input change, and the
//! integration tests call them directly.

use super::Idea;

/// Normalize a query or haystack: trim and lowercase.
pub fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

/// Indices of ideas passing the text and tag filters, ordered newest
/// disclosure first.
///
/// The tag filter is an exact, case-sensitive membership test; the
/// text filter is a case-insensitive substring match against the
/// idea's haystack. Both must pass. The sort is stable, so ideas with
/// equal (or missing) disclosure dates keep their catalog order.
pub fn filter_ideas(ideas: &[Idea], query: &str, tag: Option<&str>) -> Vec<usize> {
    let query = normalize(query);

    let mut indices: Vec<usize> = ideas
        .iter()
        .enumerate()
        .filter(|(_, idea)| {
            if let Some(tag) = tag {
                if !idea.tags.iter().any(|t| t == tag) {
                    return false;
                }
            }
            query.is_empty() || normalize(&idea.haystack()).contains(&query)
        })
        .map(|(idx, _)| idx)
        .collect();

    // Missing dates are empty strings and therefore sort last under
    // descending order.
    indices.sort_by(|&a, &b| ideas[b].date_disclosed.cmp(&ideas[a].date_disclosed));
    indices
}

/// Results counter text with the correct noun form: "1 idea",
/// otherwise "N ideas" (including zero).
pub fn count_label(count: usize) -> String {
    if count == 1 {
        "1 idea".to_string()
    } else {
        format!("{} ideas", count)
    }
}
