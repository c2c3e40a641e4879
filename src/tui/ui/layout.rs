//! Layout calculations and text utilities for the TUI.

use ratatui::layout::Rect;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Calculate the display width of text (accounting for Unicode).
pub fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

/// Truncate text to a maximum display width.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + ch_width > max_width {
            break;
        }
        out.push(ch);
        used += ch_width;
    }
    out
}

/// Truncate text with an ellipsis if it exceeds max width.
pub fn truncate_with_ellipsis(text: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }
    if display_width(text) <= max_width {
        return text.to_string();
    }
    if max_width == 1 {
        return "…".to_string();
    }
    let truncated = truncate_to_width(text, max_width.saturating_sub(1));
    format!("{truncated}…")
}

/// Calculate a centered popup rectangle within a container.
pub fn popup_rect(
    percent_x: u16,
    percent_y: u16,
    min_width: u16,
    min_height: u16,
    r: Rect,
) -> Rect {
    let max_width = r.width.saturating_sub(2).max(1);
    let max_height = r.height.saturating_sub(2).max(1);

    let target_width = (r.width.saturating_mul(percent_x) / 100).max(min_width);
    let target_height = (r.height.saturating_mul(percent_y) / 100).max(min_height);

    let width = target_width.min(max_width);
    let height = target_height.min(max_height);

    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;

    Rect {
        x,
        y,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_with_ellipsis_short_text_unchanged() {
        assert_eq!(truncate_with_ellipsis("abc", 10), "abc");
    }

    #[test]
    fn truncate_with_ellipsis_adds_marker() {
        assert_eq!(truncate_with_ellipsis("abcdef", 4), "abc…");
        assert_eq!(truncate_with_ellipsis("abcdef", 1), "…");
        assert_eq!(truncate_with_ellipsis("abcdef", 0), "");
    }

    #[test]
    fn popup_rect_centers_within_container() {
        let r = Rect {
            x: 0,
            y: 0,
            width: 100,
            height: 40,
        };
        let popup = popup_rect(50, 50, 10, 5, r);
        assert_eq!(popup.width, 50);
        assert_eq!(popup.height, 20);
        assert_eq!(popup.x, 25);
        assert_eq!(popup.y, 10);
    }
}
