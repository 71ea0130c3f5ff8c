//! Site assembly: page set, content verification, and shared types.

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use nuts_catalog::{Catalog, CatalogError};

use crate::content;
use crate::html;
use crate::{demo, docs, readme};

/// Errors surfaced while rendering pages.
#[derive(Debug, Error)]
pub enum PagesError {
    /// Authored page copy referenced a command the catalog does not
    /// define.
    #[error("Page content references an unknown command: {0}")]
    Content(#[from] CatalogError),
}

/// One defect in the authored page copy.
///
/// Reported by [`verify_content`] and shown by `nuts-site check`
/// alongside the catalog's own validation issues.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ContentIssue {
    /// A demo step showcases a command with no catalog entry.
    #[error("demo step references unknown command '{command}'")]
    UnknownDemoCommand { command: String },

    /// A demo step's typed line does not start with its command.
    #[error("demo step for '{command}' types '{input}', which does not start with the command")]
    DemoInputMismatch { command: String, input: String },

    /// A feature card showcases a command with no catalog entry.
    #[error("feature '{title}' showcases unknown command '{command}'")]
    UnknownFeatureCommand { title: String, command: String },
}

/// Site-wide settings a page renderer needs.
#[derive(Debug, Clone)]
pub struct SiteMeta {
    /// Site title; the product name unless configuration overrides it.
    pub title: String,
    /// Absolute base URL for canonical links, when deployed somewhere
    /// known.
    pub base_url: Option<String>,
}

impl Default for SiteMeta {
    fn default() -> SiteMeta {
        SiteMeta {
            title: content::SITE_TITLE.to_string(),
            base_url: None,
        }
    }
}

/// One output file of the site build.
#[derive(Debug, Clone)]
pub struct RenderedPage {
    /// File name inside the output directory.
    pub file_name: &'static str,
    /// Full file contents.
    pub contents: String,
}

/// Check all authored copy against the catalog without rendering.
pub fn verify_content(catalog: &Catalog) -> Vec<ContentIssue> {
    let mut issues = demo::verify_demo(catalog);
    for feature in content::FEATURES {
        if catalog.resolve(feature.command).is_err() {
            issues.push(ContentIssue::UnknownFeatureCommand {
                title: feature.title.to_string(),
                command: feature.command.to_string(),
            });
        }
    }
    issues
}

/// Render every page of the site.
///
/// The README ships twice from one string: raw Markdown as `README.md`
/// and an HTML conversion as `readme.html`.
pub fn render_site(catalog: &Catalog, meta: &SiteMeta) -> Result<Vec<RenderedPage>, PagesError> {
    let readme_md = readme::readme_markdown(catalog)?;
    let docs_md = docs::docs_markdown(catalog)?;

    let pages = vec![
        RenderedPage {
            file_name: "index.html",
            contents: html::landing_page(catalog, meta)?,
        },
        RenderedPage {
            file_name: "readme.html",
            contents: html::page_shell(meta, "README", "readme.html", &html::markdown_to_html(&readme_md)),
        },
        RenderedPage {
            file_name: "docs.html",
            contents: html::page_shell(meta, "Commands", "docs.html", &html::markdown_to_html(&docs_md)),
        },
        RenderedPage {
            file_name: "README.md",
            contents: readme_md,
        },
    ];
    debug!(pages = pages.len(), "rendered site");
    Ok(pages)
}
