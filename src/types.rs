use std::fmt;
use std::str::FromStr;

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

/// Long-form videos vs. shorts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContentKind {
    LongForm,
    ShortForm,
}

impl ContentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentKind::LongForm => "long-form",
            ContentKind::ShortForm => "short-form",
        }
    }

    /// Accepts the catalog's loose vocabulary ("video", "shorts", ...).
    pub fn from_catalog(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "long-form" | "long" | "video" | "videos" => Some(ContentKind::LongForm),
            "short-form" | "short" | "shorts" => Some(ContentKind::ShortForm),
            _ => None,
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.pad(self.as_str()) }
}

/// A single catalog entry, resolved once at load time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentItem {
    pub id: String,
    pub kind: ContentKind,
    pub title: String,
    pub view_count: u64,
    pub like_count: u64,
    pub comment_count: u64,
    pub duration_seconds: u64,
    pub tags: Vec<String>,
    pub location_hint: Option<String>,
    /// Raw ISO-8601 text; only parsed when formatted.
    pub published_at: Option<String>,
    pub description: Option<String>,
    pub thumbnail_url: Option<String>,
    pub video_url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum KindFilter {
    #[default]
    All,
    LongForm,
    ShortForm,
}

impl KindFilter {
    pub fn accepts(&self, kind: ContentKind) -> bool {
        match self {
            KindFilter::All => true,
            KindFilter::LongForm => kind == ContentKind::LongForm,
            KindFilter::ShortForm => kind == ContentKind::ShortForm,
        }
    }
}

impl FromStr for KindFilter {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(KindFilter::All);
        }
        match ContentKind::from_catalog(s) {
            Some(ContentKind::LongForm) => Ok(KindFilter::LongForm),
            Some(ContentKind::ShortForm) => Ok(KindFilter::ShortForm),
            None => Err(anyhow!("unknown kind `{}` (expected all, long-form, short-form)", s)),
        }
    }
}

/// User-selected filters. The default value lets every item through.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FilterCriteria {
    pub kind: KindFilter,
    /// `None` means all countries.
    #[serde(deserialize_with = "deserialize_country")]
    pub country: Option<String>,
    /// Any selected tag matching any item tag is enough.
    pub tags: Vec<String>,
    pub search_text: String,
}

impl FilterCriteria {
    pub fn with_kind(mut self, kind: KindFilter) -> Self { self.kind = kind; self }

    /// `"all"` (any case) clears the country filter.
    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = normalize_country(country.into());
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_search(mut self, text: impl Into<String>) -> Self { self.search_text = text.into(); self }

    pub fn is_all_pass(&self) -> bool {
        self.kind == KindFilter::All
            && self.country.is_none()
            && self.tags.is_empty()
            && self.search_text.trim().is_empty()
    }
}

fn normalize_country(s: String) -> Option<String> {
    let t = s.trim();
    if t.is_empty() || t.eq_ignore_ascii_case("all") { None } else { Some(t.to_string()) }
}

fn deserialize_country<'de, D>(de: D) -> std::result::Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(de)?;
    Ok(raw.and_then(normalize_country))
}
