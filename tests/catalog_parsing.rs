//! Tests for catalog decoding: shape tolerance and local loading.
//!
//! Every optional field must decode to its documented fallback;
//! absence is never an error.

use ideadeck::catalog::load_catalog;
use ideadeck::data::IdeaCatalog;
use pretty_assertions::assert_eq;

#[test]
fn full_shape_decodes() {
    let json = r#"{
        "lastUpdated": "2024-06-01",
        "ideas": [
            {
                "id": "echo",
                "title": "Acoustic Mapper",
                "abstract": "Room geometry from echoes.",
                "tags": ["audio", "ml"],
                "dateDisclosed": "2024-01-01",
                "lastUpdated": "2024-02-01",
                "status": "Prototype",
                "links": [{"label": "Demo", "url": "https://example.com/demo"}]
            }
        ]
    }"#;

    let catalog: IdeaCatalog = serde_json::from_str(json).unwrap();
    assert_eq!(catalog.last_updated.as_deref(), Some("2024-06-01"));
    assert_eq!(catalog.ideas.len(), 1);

    let idea = &catalog.ideas[0];
    assert_eq!(idea.id, "echo");
    assert_eq!(idea.title, "Acoustic Mapper");
    assert_eq!(idea.abstract_text, "Room geometry from echoes.");
    assert_eq!(idea.tags, vec!["audio", "ml"]);
    assert_eq!(idea.date_disclosed, "2024-01-01");
    assert_eq!(idea.last_updated, "2024-02-01");
    assert_eq!(idea.status.as_deref(), Some("Prototype"));
    assert_eq!(idea.links[0].label, "Demo");
}

#[test]
fn minimal_idea_uses_fallbacks() {
    let json = r#"{
        "ideas": [{"id": "bare", "title": "Bare"}]
    }"#;

    let catalog: IdeaCatalog = serde_json::from_str(json).unwrap();
    assert_eq!(catalog.last_updated, None);

    let idea = &catalog.ideas[0];
    assert_eq!(idea.abstract_text, "");
    assert!(idea.tags.is_empty());
    assert_eq!(idea.date_disclosed, "");
    assert_eq!(idea.last_updated, "");
    assert_eq!(idea.status, None);
    assert!(idea.links.is_empty());
    assert_eq!(idea.status_label(), "—");
}

#[test]
fn empty_document_decodes_to_empty_catalog() {
    let catalog: IdeaCatalog = serde_json::from_str("{}").unwrap();
    assert!(catalog.ideas.is_empty());
    assert_eq!(catalog.last_updated, None);
}

#[test]
fn missing_required_fields_fail_to_decode() {
    // `id` and `title` are the only required idea fields.
    let json = r#"{"ideas": [{"title": "No id"}]}"#;
    assert!(serde_json::from_str::<IdeaCatalog>(json).is_err());
}

#[tokio::test]
async fn load_catalog_reads_local_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ideas.json");
    std::fs::write(
        &path,
        r#"{"lastUpdated": "2024-06-01", "ideas": [{"id": "a", "title": "Alpha"}]}"#,
    )
    .unwrap();

    let catalog = load_catalog(path.to_str().unwrap()).await.unwrap();
    assert_eq!(catalog.ideas.len(), 1);
    assert_eq!(catalog.ideas[0].title, "Alpha");
}

#[tokio::test]
async fn load_catalog_missing_file_is_an_error() {
    let result = load_catalog("/nonexistent/ideas.json").await;
    assert!(result.is_err());
}

#[tokio::test]
async fn load_catalog_invalid_json_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ideas.json");
    std::fs::write(&path, "not json").unwrap();

    let result = load_catalog(path.to_str().unwrap()).await;
    let err = format!("{:#}", result.unwrap_err());
    assert!(err.contains("Failed to decode catalog"));
}
