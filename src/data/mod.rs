use serde::{Deserialize, Serialize};
use std::collections::HashSet;

pub mod filter;

/// The full idea catalog as published: a list of ideas plus a
/// catalog-level "last updated" stamp. Loaded once per session and
/// immutable afterwards; a reload replaces it wholesale.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdeaCatalog {
    #[serde(default)]
    pub last_updated: Option<String>,
    #[serde(default)]
    pub ideas: Vec<Idea>,
}

/// One disclosed idea.
///
/// Every field except `id` and `title` may be absent in the source
/// document; absence decodes to the documented fallback, never an
/// error.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Idea {
    pub id: String,
    pub title: String,
    #[serde(rename = "abstract", default)]
    pub abstract_text: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Date-strings in a lexicographically sortable format (ISO 8601).
    /// Ordering is plain string comparison, never date parsing.
    #[serde(default)]
    pub date_disclosed: String,
    #[serde(default)]
    pub last_updated: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub links: Vec<IdeaLink>,
}

/// A labeled external link attached to an idea.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdeaLink {
    pub label: String,
    pub url: String,
}

impl Idea {
    /// Status text with the "—" placeholder for missing status.
    pub fn status_label(&self) -> &str {
        self.status.as_deref().unwrap_or("—")
    }

    /// Searchable text of this idea: title, abstract, tags, and
    /// status joined with single spaces. Callers normalize before
    /// matching.
    pub fn haystack(&self) -> String {
        format!(
            "{} {} {} {}",
            self.title,
            self.abstract_text,
            self.tags.join(" "),
            self.status.as_deref().unwrap_or("")
        )
    }
}

/// Distinct tags across the whole catalog, sorted case-insensitively.
///
/// Ideas without tags contribute nothing. Computed once at load time
/// from the unfiltered catalog; the tag menu reads this, not the
/// filtered view.
pub fn unique_tags(ideas: &[Idea]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut tags: Vec<String> = ideas
        .iter()
        .flat_map(|idea| idea.tags.iter())
        .filter(|tag| seen.insert(tag.as_str()))
        .cloned()
        .collect();
    tags.sort_by(|a, b| a.to_lowercase().cmp(&b.to_lowercase()).then(a.cmp(b)));
    tags
}
