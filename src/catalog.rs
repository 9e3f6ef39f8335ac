use std::collections::HashSet;
use std::path::PathBuf;

use anyhow::{Context, Result};
use async_trait::async_trait;

use crate::mapping::{content_item_from_raw, RawContentItem};
use crate::types::ContentItem;

// Bundled catalog shipped with the site
static EMBEDDED_CATALOG: &str = include_str!("../assets/catalog.json");

/// Supplies the raw catalog records. Validation beyond JSON shape happens in
/// [`load_catalog`].
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn load(&self) -> Result<Vec<RawContentItem>>;
    fn describe(&self) -> String;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedCatalog;

#[async_trait]
impl CatalogSource for EmbeddedCatalog {
    async fn load(&self) -> Result<Vec<RawContentItem>> {
        serde_json::from_str(EMBEDDED_CATALOG).context("parsing embedded catalog")
    }

    fn describe(&self) -> String { "embedded".to_string() }
}

#[derive(Debug, Clone)]
pub struct FileCatalog {
    path: PathBuf,
}

impl FileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self { Self { path: path.into() } }
}

#[async_trait]
impl CatalogSource for FileCatalog {
    async fn load(&self) -> Result<Vec<RawContentItem>> {
        let text = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("reading catalog: {}", self.path.display()))?;
        serde_json::from_str(&text).with_context(|| format!("parsing catalog: {}", self.path.display()))
    }

    fn describe(&self) -> String { self.path.display().to_string() }
}

/// Load and resolve every record. Duplicate ids are kept but logged.
pub async fn load_catalog(source: &dyn CatalogSource) -> Result<Vec<ContentItem>> {
    let raw = source.load().await?;
    let mut items = Vec::with_capacity(raw.len());
    let mut seen: HashSet<String> = HashSet::with_capacity(raw.len());
    for (idx, r) in raw.into_iter().enumerate() {
        let id = r.id.clone();
        let item = content_item_from_raw(r)
            .with_context(|| format!("catalog entry #{} (`{}`) in {}", idx, id, source.describe()))?;
        if !seen.insert(item.id.clone()) {
            tracing::warn!(id = %item.id, source = %source.describe(), "duplicate catalog id");
        }
        items.push(item);
    }
    tracing::info!(items = items.len(), source = %source.describe(), "catalog loaded");
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ContentKind;

    #[tokio::test]
    async fn embedded_catalog_loads() {
        let items = load_catalog(&EmbeddedCatalog).await.unwrap();
        assert!(!items.is_empty());
        assert!(items.iter().any(|i| i.kind == ContentKind::LongForm));
        assert!(items.iter().any(|i| i.kind == ContentKind::ShortForm));
        let ids: HashSet<&str> = items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids.len(), items.len());
    }

    struct Fixed(Vec<RawContentItem>);

    #[async_trait]
    impl CatalogSource for Fixed {
        async fn load(&self) -> Result<Vec<RawContentItem>> { Ok(self.0.clone()) }
        fn describe(&self) -> String { "fixed".to_string() }
    }

    #[tokio::test]
    async fn bad_kind_names_the_entry() {
        let src = Fixed(vec![RawContentItem { id: "bad-1".into(), kind: "audio".into(), title: "t".into(), ..Default::default() }]);
        let err = load_catalog(&src).await.unwrap_err();
        let msg = format!("{:#}", err);
        assert!(msg.contains("bad-1"));
        assert!(msg.contains("fixed"));
    }

    #[tokio::test]
    async fn duplicate_ids_are_kept() {
        let r = RawContentItem { id: "dup".into(), kind: "video".into(), title: "t".into(), ..Default::default() };
        let items = load_catalog(&Fixed(vec![r.clone(), r])).await.unwrap();
        assert_eq!(items.len(), 2);
    }
}
