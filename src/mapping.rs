use anyhow::{anyhow, Result};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::types::{ContentItem, ContentKind};

/// One record as it appears in the catalog JSON. Counts may be numbers or
/// numeric strings; optional fields may be missing or `null`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawContentItem {
    pub id: String,
    #[serde(alias = "type")]
    pub kind: String,
    pub title: String,
    #[serde(default, deserialize_with = "lenient_count")]
    pub view_count: u64,
    #[serde(default, deserialize_with = "lenient_count")]
    pub like_count: u64,
    #[serde(default, deserialize_with = "lenient_count")]
    pub comment_count: u64,
    #[serde(default, alias = "duration", deserialize_with = "lenient_count")]
    pub duration_seconds: u64,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default, alias = "location")]
    pub location_hint: Option<String>,
    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, alias = "thumbnail")]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub video_url: Option<String>,
}

/// Parse a count that may be a number, a numeric string, or junk. Junk is 0.
pub fn parse_count(v: &Value) -> u64 {
    match v {
        Value::Number(n) => n.as_u64().or_else(|| n.as_f64().and_then(float_count)).unwrap_or(0),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<u64>().ok().or_else(|| s.parse::<f64>().ok().and_then(float_count)).unwrap_or(0)
        }
        _ => 0,
    }
}

fn float_count(f: f64) -> Option<u64> {
    if f.is_finite() && f >= 0.0 { Some(f.trunc() as u64) } else { None }
}

fn lenient_count<'de, D>(de: D) -> std::result::Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let v = Value::deserialize(de)?;
    Ok(parse_count(&v))
}

fn non_blank(s: Option<String>) -> Option<String> {
    s.and_then(|s| { let t = s.trim(); if t.is_empty() { None } else { Some(t.to_string()) } })
}

pub fn content_item_from_raw(raw: RawContentItem) -> Result<ContentItem> {
    let kind = ContentKind::from_catalog(&raw.kind)
        .ok_or_else(|| anyhow!("item `{}` has unknown kind `{}`", raw.id, raw.kind))?;
    Ok(ContentItem {
        id: raw.id,
        kind,
        title: raw.title,
        view_count: raw.view_count,
        like_count: raw.like_count,
        comment_count: raw.comment_count,
        duration_seconds: raw.duration_seconds,
        tags: raw.tags.unwrap_or_default(),
        location_hint: non_blank(raw.location_hint),
        published_at: non_blank(raw.published_at),
        description: raw.description,
        thumbnail_url: raw.thumbnail_url,
        video_url: raw.video_url,
    })
}
