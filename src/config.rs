use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct RoamerConfig {
    /// JSON catalog to load instead of the bundled one.
    pub catalog_path: Option<PathBuf>,
    pub popular_tag_limit: usize,
    /// Appended to the built-in country list, checked in this order.
    pub extra_countries: Vec<String>,
    pub per_page: usize,
}

impl Default for RoamerConfig {
    fn default() -> Self {
        Self { catalog_path: None, popular_tag_limit: 8, extra_countries: Vec::new(), per_page: 12 }
    }
}

impl RoamerConfig {
    /// Read an explicit config file, or the per-user default if present, then
    /// apply `ROAMER_*` environment overrides.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut cfg = match explicit {
            Some(path) => Self::from_file(path)?,
            None => match default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path).unwrap_or_else(|e| {
                    tracing::warn!(path = %path.display(), "ignoring unreadable config: {:#}", e);
                    Self::default()
                }),
                _ => Self::default(),
            },
        };
        cfg.apply_env(|k| std::env::var(k).ok());
        Ok(cfg)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).with_context(|| format!("reading config: {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("parsing config: {}", path.display()))
    }

    pub fn from_toml(text: &str) -> Result<Self> { Ok(toml::from_str(text)?) }

    /// `lookup` is `std::env::var` in production; tests pass a map.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(p) = lookup("ROAMER_CATALOG").filter(|s| !s.trim().is_empty()) {
            self.catalog_path = Some(PathBuf::from(p));
        }
        if let Some(n) = lookup("ROAMER_POPULAR_TAGS").and_then(|s| s.trim().parse().ok()) {
            self.popular_tag_limit = n;
        }
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("dev", "greenroamer", "roamer").map(|p| p.config_dir().join("config.toml"))
}
