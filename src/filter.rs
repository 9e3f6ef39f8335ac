//! Content filter engine.
//!
//! Pure functions over a loaded catalog: the visible subset for a set of
//! [`FilterCriteria`], and the country / popular-tag facets that populate the
//! filter controls. Nothing here keeps state between calls.

use std::collections::HashMap;

use crate::types::{ContentItem, FilterCriteria};

/// Country names recognised in location hints, in matching priority order.
pub const KNOWN_COUNTRIES: &[&str] = &[
    "Sri Lanka",
    "Switzerland",
    "Italy",
    "France",
    "Japan",
    "Thailand",
    "Indonesia",
    "Vietnam",
    "Nepal",
    "India",
    "Norway",
    "Iceland",
    "Peru",
    "Morocco",
];

/// Ordered country vocabulary. First containing name wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryList {
    names: Vec<String>,
}

impl Default for CountryList {
    fn default() -> Self {
        Self { names: KNOWN_COUNTRIES.iter().map(|s| s.to_string()).collect() }
    }
}

impl CountryList {
    /// Defaults followed by `extra` in the given order; blanks and repeats are skipped.
    pub fn with_extra<I, S>(extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut list = Self::default();
        for name in extra {
            let name = name.as_ref().trim();
            if !name.is_empty() && !list.names.iter().any(|n| n == name) {
                list.names.push(name.to_string());
            }
        }
        list
    }

    pub fn names(&self) -> &[String] { &self.names }

    pub fn derive_country(&self, location_hint: Option<&str>) -> Option<&str> {
        let hint = location_hint?;
        self.names.iter().find(|n| hint.contains(n.as_str())).map(String::as_str)
    }
}

/// The engine bound to a country vocabulary.
#[derive(Debug, Clone, Default)]
pub struct ContentFilter {
    countries: CountryList,
}

impl ContentFilter {
    pub fn new(countries: CountryList) -> Self { Self { countries } }

    pub fn countries(&self) -> &CountryList { &self.countries }

    pub fn derive_country(&self, location_hint: Option<&str>) -> Option<&str> {
        self.countries.derive_country(location_hint)
    }

    /// Items matching every active criterion, in catalog order.
    pub fn filter_items<'a, I>(&self, catalog: I, criteria: &FilterCriteria) -> Vec<&'a ContentItem>
    where
        I: IntoIterator<Item = &'a ContentItem>,
    {
        let needle = criteria.search_text.trim().to_lowercase();
        let wanted_tags: Vec<String> = criteria.tags.iter().map(|t| t.to_lowercase()).collect();

        catalog
            .into_iter()
            .filter(|item| criteria.kind.accepts(item.kind))
            .filter(|item| match criteria.country.as_deref() {
                None => true,
                Some(c) => self.derive_country(item.location_hint.as_deref()) == Some(c),
            })
            .filter(|item| wanted_tags.is_empty() || matches_any_tag(item, &wanted_tags))
            .filter(|item| needle.is_empty() || matches_text(item, &needle))
            .collect()
    }

    /// Distinct derived countries in first-seen order.
    pub fn derive_countries<'a, I>(&self, catalog: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a ContentItem>,
    {
        let mut out: Vec<String> = Vec::new();
        for item in catalog {
            if let Some(c) = self.derive_country(item.location_hint.as_deref()) {
                if !out.iter().any(|seen| seen == c) {
                    out.push(c.to_string());
                }
            }
        }
        out
    }
}

/// Filters with the default country vocabulary.
pub fn filter_items<'a, I>(catalog: I, criteria: &FilterCriteria) -> Vec<&'a ContentItem>
where
    I: IntoIterator<Item = &'a ContentItem>,
{
    ContentFilter::default().filter_items(catalog, criteria)
}

/// Country named in `location_hint`, using [`KNOWN_COUNTRIES`].
pub fn derive_country(location_hint: Option<&str>) -> Option<&'static str> {
    let hint = location_hint?;
    KNOWN_COUNTRIES.iter().copied().find(|n| hint.contains(n))
}

pub fn derive_countries<'a, I>(catalog: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a ContentItem>,
{
    ContentFilter::default().derive_countries(catalog)
}

/// The `limit` most frequent tags across the catalog, most frequent first.
/// Equal counts keep the order in which the tags first appear.
pub fn derive_popular_tags<'a, I>(catalog: I, limit: usize) -> Vec<String>
where
    I: IntoIterator<Item = &'a ContentItem>,
{
    let mut counts: Vec<(&'a str, usize)> = Vec::new();
    let mut index: HashMap<&'a str, usize> = HashMap::new();
    for item in catalog {
        for tag in &item.tags {
            match index.get(tag.as_str()) {
                Some(&i) => counts[i].1 += 1,
                None => {
                    index.insert(tag.as_str(), counts.len());
                    counts.push((tag.as_str(), 1));
                }
            }
        }
    }
    // stable: ties stay in first-seen order
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.into_iter().take(limit).map(|(t, _)| t.to_string()).collect()
}

fn matches_any_tag(item: &ContentItem, wanted: &[String]) -> bool {
    item.tags.iter().any(|tag| {
        let tag = tag.to_lowercase();
        wanted.iter().any(|w| tag.contains(w.as_str()))
    })
}

fn matches_text(item: &ContentItem, needle: &str) -> bool {
    item.title.to_lowercase().contains(needle)
        || item.tags.iter().any(|t| t.to_lowercase().contains(needle))
}
