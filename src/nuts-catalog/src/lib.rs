//! Command reference catalog for the NUTS website.
//!
//! One authored table of commands, one of options, and the monitoring
//! profiles, with lookup and validation on top. Every page generator in
//! the workspace reads this crate and none carries command text of its
//! own, so a change to one command's syntax or example is exactly one
//! edit here.
//!
//! The catalog describes the NUTS shell; it never probes it. All data is
//! `static`, reads are linear scans, and nothing is cached or mutated at
//! runtime.

pub mod catalog;
pub mod entry;
pub mod error;
pub mod monitoring;
pub mod validate;

mod commands;
mod options;

// Re-export the types pages use most.
pub use catalog::{Catalog, resolve_command};
pub use commands::COMMANDS;
pub use entry::{Category, CommandEntry, OptionEntry};
pub use error::CatalogError;
pub use monitoring::{MonitoringMode, MonitoringProfile};
pub use options::OPTIONS;
pub use validate::{ValidationIssue, ValidationReport, validate_catalog};

#[cfg(test)]
mod tests;
