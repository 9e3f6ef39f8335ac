use std::cmp::Reverse;
use std::fmt;
use std::str::FromStr;

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

use crate::format::parse_published;
use crate::types::ContentItem;

/// Display order applied after filtering. All orders are stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    #[default]
    Catalog,
    Newest,
    MostViewed,
    MostLiked,
    Longest,
}

impl FromStr for SortOrder {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "catalog" | "default" => Ok(Self::Catalog),
            "newest" | "latest" => Ok(Self::Newest),
            "views" | "most-viewed" => Ok(Self::MostViewed),
            "likes" | "most-liked" => Ok(Self::MostLiked),
            "longest" | "duration" => Ok(Self::Longest),
            other => Err(anyhow!(
                "unknown sort `{}` (expected catalog, newest, views, likes, longest)",
                other
            )),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            SortOrder::Catalog => "catalog",
            SortOrder::Newest => "newest",
            SortOrder::MostViewed => "views",
            SortOrder::MostLiked => "likes",
            SortOrder::Longest => "longest",
        })
    }
}

/// Reorder in place. Undated items go last under `Newest`.
pub fn sort_items(items: &mut [&ContentItem], order: SortOrder) {
    match order {
        SortOrder::Catalog => {}
        SortOrder::Newest => {
            // None < Some, so Reverse puts undated last
            items.sort_by_cached_key(|i| Reverse(i.published_at.as_deref().and_then(parse_published)))
        }
        SortOrder::MostViewed => items.sort_by_key(|i| Reverse(i.view_count)),
        SortOrder::MostLiked => items.sort_by_key(|i| Reverse(i.like_count)),
        SortOrder::Longest => items.sort_by_key(|i| Reverse(i.duration_seconds)),
    }
}

/// 1-based page window. Out-of-range pages are empty.
pub fn paginate<T>(items: &[T], page: usize, per_page: usize) -> &[T] {
    if per_page == 0 || page == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(per_page);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(per_page).min(items.len());
    &items[start..end]
}

pub fn page_count(total: usize, per_page: usize) -> usize {
    if per_page == 0 { 0 } else { total.div_ceil(per_page) }
}
