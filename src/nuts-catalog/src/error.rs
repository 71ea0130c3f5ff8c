//! Error types for catalog lookups.

use thiserror::Error;

/// Errors surfaced by catalog lookup operations.
///
/// These are authoring-time errors: they fire while building or checking
/// the site, never in front of a page reader.
#[derive(Debug, Clone, Error)]
pub enum CatalogError {
    /// The requested name matches no entry, or an alias points at one
    /// that does not exist.
    #[error("Unknown command: {0}")]
    NotFound(String),

    /// A monitoring mode outside `basic` and `smart`.
    #[error("Invalid monitoring mode '{0}' (expected 'basic' or 'smart')")]
    InvalidMode(String),
}
