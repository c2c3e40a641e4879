//! Catalog loading: fetch and decode the idea document.

use crate::data::IdeaCatalog;
use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use std::path::Path;
use std::time::Duration;

/// Shared HTTP client for catalog fetches to enable connection pooling
pub static HTTP_CLIENT: Lazy<reqwest::Client> = Lazy::new(|| {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(10))
        .build()
        .expect("Failed to create HTTP client")
});

/// Load the catalog from an `http(s)://` URL or a filesystem path.
///
/// Remote fetches always revalidate at the source: `Cache-Control:
/// no-store` bypasses intermediate caches. There is no retry and no
/// partial load; any network or decode error is returned as-is for
/// the caller to surface.
pub async fn load_catalog(source: &str) -> Result<IdeaCatalog> {
    let catalog = if source.starts_with("http://") || source.starts_with("https://") {
        fetch_remote(source).await?
    } else {
        read_local(Path::new(source))?
    };

    tracing::debug!(
        ideas = catalog.ideas.len(),
        last_updated = catalog.last_updated.as_deref().unwrap_or(""),
        "catalog loaded from {}",
        source
    );
    Ok(catalog)
}

async fn fetch_remote(url: &str) -> Result<IdeaCatalog> {
    let response = HTTP_CLIENT
        .get(url)
        .header("Cache-Control", "no-store")
        .header("Pragma", "no-cache")
        .send()
        .await
        .with_context(|| format!("Failed to fetch catalog from {}", url))?;

    if !response.status().is_success() {
        anyhow::bail!("Catalog fetch returned {}", response.status());
    }

    response
        .json()
        .await
        .with_context(|| format!("Failed to decode catalog from {}", url))
}

fn read_local(path: &Path) -> Result<IdeaCatalog> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog from {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to decode catalog from {}", path.display()))
}
