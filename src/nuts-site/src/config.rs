//! Site configuration, loaded from an optional `nuts-site.toml`.
//!
//! All fields are optional; a missing file means defaults. CLI flags
//! override file values where both exist.

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use nuts_pages::SiteMeta;

/// File read from the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "nuts-site.toml";

/// Output directory used when neither flag nor config names one.
pub const DEFAULT_OUT_DIR: &str = "site";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SiteConfig {
    /// Directory that receives the rendered pages.
    #[serde(default)]
    pub out_dir: Option<PathBuf>,

    /// Overrides the site title on every page.
    #[serde(default)]
    pub title: Option<String>,

    /// Absolute base URL used for canonical links.
    #[serde(default)]
    pub base_url: Option<String>,
}

impl SiteConfig {
    /// Load configuration from `path`, or from the default location.
    ///
    /// A missing default file yields `Self::default()`; a missing
    /// explicit path is an error, since the user asked for that file.
    pub fn load(path: Option<&Path>) -> Result<SiteConfig> {
        let (path, explicit) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
        };
        if !path.exists() {
            if explicit {
                bail!("Config file not found: {}", path.display());
            }
            return Ok(SiteConfig::default());
        }
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: SiteConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        Ok(config)
    }

    /// Page metadata with config overrides applied.
    pub fn site_meta(&self) -> SiteMeta {
        let mut meta = SiteMeta::default();
        if let Some(title) = &self.title {
            meta.title = title.clone();
        }
        meta.base_url = self.base_url.clone();
        meta
    }
}
