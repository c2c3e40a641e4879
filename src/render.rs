//! Text and markup rendering for the detail view and contact link.
//!
//! The detail view is a monospaced, whitespace-preserving block; the
//! browser export wraps the same block in an HTML `<pre>`. Everything
//! interpolated into markup goes through [`escape_html`] first.

use crate::data::Idea;

/// Escape the five HTML metacharacters (`& < > " '`).
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Assemble the preformatted detail block for one idea.
///
/// Layout: title, author, disclosure/update dates, status, tags,
/// abstract, and a bulleted link list (or a literal "(none)").
pub fn detail_text(idea: &Idea, author: &str) -> String {
    let links = idea
        .links
        .iter()
        .map(|l| format!("- {}: {}", l.label, l.url))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "{title}\n\
         \n\
         Author: {author}\n\
         Initial public disclosure: {disclosed}\n\
         Last updated: {updated}\n\
         Status: {status}\n\
         Tags: {tags}\n\
         \n\
         Abstract:\n\
         {abstract_text}\n\
         \n\
         Links:\n\
         {links}\n",
        title = idea.title,
        author = author,
        disclosed = idea.date_disclosed,
        updated = idea.last_updated,
        status = idea.status_label(),
        tags = idea.tags.join(", "),
        abstract_text = idea.abstract_text,
        links = if links.is_empty() {
            "(none)"
        } else {
            links.as_str()
        },
    )
}

/// Render the detail block as a standalone HTML page.
///
/// This is the one markup-producing path in the crate; both the page
/// title and the block body are escaped.
pub fn detail_page(idea: &Idea, author: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head><meta charset=\"utf-8\"><title>{title}</title></head>\n\
         <body>\n\
         <pre style=\"white-space:pre-wrap;font-family:ui-monospace,Menlo,Consolas,monospace;\
         padding:16px;max-width:900px;margin:0 auto;\">{body}</pre>\n\
         </body>\n\
         </html>\n",
        title = escape_html(&idea.title),
        body = escape_html(&detail_text(idea, author)),
    )
}

/// Mail-composition link with the idea's title percent-encoded into
/// the subject field.
pub fn mailto_url(email: &str, title: &str) -> String {
    format!("mailto:{}?subject={}", email, urlencoding::encode(title))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::IdeaLink;
    use pretty_assertions::assert_eq;

    fn make_idea() -> Idea {
        Idea {
            id: "echo".to_string(),
            title: "Acoustic Mapper".to_string(),
            abstract_text: "Room geometry from echoes.".to_string(),
            tags: vec!["audio".to_string(), "ml".to_string()],
            date_disclosed: "2024-01-01".to_string(),
            last_updated: "2024-02-01".to_string(),
            status: Some("Prototype".to_string()),
            links: vec![IdeaLink {
                label: "Demo".to_string(),
                url: "https://example.com/demo".to_string(),
            }],
        }
    }

    #[test]
    fn detail_text_layout() {
        let text = detail_text(&make_idea(), "Your Name");
        assert_eq!(
            text,
            "Acoustic Mapper\n\
             \n\
             Author: Your Name\n\
             Initial public disclosure: 2024-01-01\n\
             Last updated: 2024-02-01\n\
             Status: Prototype\n\
             Tags: audio, ml\n\
             \n\
             Abstract:\n\
             Room geometry from echoes.\n\
             \n\
             Links:\n\
             - Demo: https://example.com/demo\n"
        );
    }

    #[test]
    fn detail_text_empty_links_and_status() {
        let mut idea = make_idea();
        idea.links.clear();
        idea.status = None;
        let text = detail_text(&idea, "Your Name");
        assert!(text.contains("Links:\n(none)\n"));
        assert!(text.contains("Status: —\n"));
    }

    #[test]
    fn escape_html_covers_all_five_metacharacters() {
        assert_eq!(
            escape_html(r#"<a href="x">&'"#),
            "&lt;a href=&quot;x&quot;&gt;&amp;&#039;"
        );
    }

    #[test]
    fn detail_page_escapes_markup_in_content() {
        let mut idea = make_idea();
        idea.title = "<b>X</b>".to_string();
        let page = detail_page(&idea, "Your Name");
        // The markup must survive as literal text, not as tags.
        assert!(page.contains("&lt;b&gt;X&lt;/b&gt;"));
        assert!(!page.contains("<b>X</b>"));
    }

    #[test]
    fn mailto_url_percent_encodes_subject() {
        assert_eq!(
            mailto_url("me@example.com", "Acoustic Mapper & Friends"),
            "mailto:me@example.com?subject=Acoustic%20Mapper%20%26%20Friends"
        );
    }
}
