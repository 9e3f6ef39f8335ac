pub mod catalog;
pub mod config;
pub mod filter;
pub mod format;
pub mod mapping;
pub mod sort;
pub mod types;

// --- Library API for embedding ---

/// Convenience re-exports for embedders.
pub mod prelude {
    pub use crate::catalog::{CatalogSource, EmbeddedCatalog, FileCatalog};
    pub use crate::config::RoamerConfig;
    pub use crate::filter::{ContentFilter, CountryList};
    pub use crate::sort::SortOrder;
    pub use crate::types::{ContentItem, ContentKind, FilterCriteria, KindFilter};
    pub use crate::{CatalogStats, Roamer};
}

use std::collections::HashSet;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::catalog::{load_catalog, CatalogSource, EmbeddedCatalog, FileCatalog};
use crate::config::RoamerConfig;
use crate::filter::{derive_popular_tags, ContentFilter, CountryList};
use crate::types::{ContentItem, ContentKind, FilterCriteria};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogStats {
    pub total_items: usize,
    pub long_form: usize,
    pub short_form: usize,
    pub countries: usize,
    pub distinct_tags: usize,
    pub total_views: u64,
}

/// Library entry point. Owns the loaded catalog and the filter engine.
pub struct Roamer {
    catalog: Vec<ContentItem>,
    filter: ContentFilter,
    config: RoamerConfig,
}

impl Roamer {
    /// Load the catalog named by the config (bundled one if none).
    pub async fn open(config: RoamerConfig) -> Result<Self> {
        match config.catalog_path.clone() {
            Some(path) => Self::with_source(&FileCatalog::new(path), config).await,
            None => Self::with_source(&EmbeddedCatalog, config).await,
        }
    }

    pub async fn with_source(source: &dyn CatalogSource, config: RoamerConfig) -> Result<Self> {
        let catalog = load_catalog(source).await?;
        Ok(Self::from_items(catalog, config))
    }

    pub fn from_items(catalog: Vec<ContentItem>, config: RoamerConfig) -> Self {
        let filter = ContentFilter::new(CountryList::with_extra(&config.extra_countries));
        Self { catalog, filter, config }
    }

    pub fn catalog(&self) -> &[ContentItem] { &self.catalog }
    pub fn config(&self) -> &RoamerConfig { &self.config }

    /// Visible items for `criteria`, in catalog order.
    pub fn filter(&self, criteria: &FilterCriteria) -> Vec<&ContentItem> {
        if criteria.is_all_pass() {
            return self.catalog.iter().collect();
        }
        let out = self.filter.filter_items(&self.catalog, criteria);
        tracing::debug!(catalog = self.catalog.len(), matched = out.len(), ?criteria, "filtered catalog");
        out
    }

    pub fn country_of(&self, item: &ContentItem) -> Option<&str> {
        self.filter.derive_country(item.location_hint.as_deref())
    }

    pub fn countries(&self) -> Vec<String> { self.filter.derive_countries(&self.catalog) }

    pub fn popular_tags(&self) -> Vec<String> { self.popular_tags_limit(self.config.popular_tag_limit) }

    pub fn popular_tags_limit(&self, limit: usize) -> Vec<String> { derive_popular_tags(&self.catalog, limit) }

    pub fn stats(&self) -> CatalogStats {
        let long_form = self.catalog.iter().filter(|i| i.kind == ContentKind::LongForm).count();
        let tags: HashSet<&str> = self.catalog.iter().flat_map(|i| i.tags.iter().map(String::as_str)).collect();
        CatalogStats {
            total_items: self.catalog.len(),
            long_form,
            short_form: self.catalog.len() - long_form,
            countries: self.countries().len(),
            distinct_tags: tags.len(),
            total_views: self.catalog.iter().map(|i| i.view_count).fold(0u64, u64::saturating_add),
        }
    }
}
