//! Consistency validation for the catalog tables.
//!
//! Runs before anything is rendered or exported. A non-empty report
//! fails `build` and `check`, so an authoring mistake breaks the site
//! build instead of shipping a page that disagrees with the shell.

use serde::Serialize;
use std::collections::HashSet;
use std::fmt;
use thiserror::Error;

use crate::catalog::Catalog;
use crate::entry::Category;

/// One defect found in the authored tables.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValidationIssue {
    /// Two entries in the same category share a name.
    #[error("duplicate command name '{name}' in the {category} category")]
    DuplicateName { category: Category, name: String },

    /// An alias points at a name with no entry.
    #[error("alias '{alias}' points at unknown command '{target}'")]
    UnknownAliasTarget { alias: String, target: String },

    /// An alias points at another alias. Aliases must name a canonical
    /// entry directly so resolution is always a single hop.
    #[error("alias '{alias}' points at alias '{target}'; aliases must name a canonical command")]
    ChainedAlias { alias: String, target: String },

    /// An alias carries its own help text. The canonical entry owns the
    /// text; an alias with text of its own can drift from its target.
    #[error("alias '{alias}' carries its own {field}; only the canonical entry may")]
    AliasCarriesText { alias: String, field: &'static str },

    /// A canonical entry is missing a required piece of help text.
    #[error("command '{name}' has an empty {field}")]
    MissingText { name: String, field: &'static str },

    /// An option references a command with no entry.
    #[error("option '{flag}' applies to unknown command '{target}'")]
    UnknownOptionTarget { flag: String, target: String },

    /// An option references an alias. Options document canonical
    /// commands only.
    #[error("option '{flag}' applies to alias '{target}'; use the canonical name")]
    OptionTargetsAlias { flag: String, target: String },

    /// Two options share a flag.
    #[error("duplicate option flag '{flag}'")]
    DuplicateFlag { flag: String },

    /// An entry appears after a later category has already started.
    #[error("command '{name}' is listed out of category order (expected core, then flow, then config)")]
    CategoryOrder { name: String },
}

/// Everything wrong with a catalog, in table order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    /// The issues found, in the order the tables revealed them.
    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    fn push(&mut self, issue: ValidationIssue) {
        self.issues.push(issue);
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for issue in &self.issues {
            writeln!(f, "  - {issue}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationReport {}

impl Catalog {
    /// Run the consistency pass over this catalog.
    ///
    /// `Ok` when the tables are clean; the full report otherwise.
    pub fn validate(&self) -> Result<(), ValidationReport> {
        let report = validate_catalog(self);
        if report.is_empty() { Ok(()) } else { Err(report) }
    }
}

fn category_rank(category: Category) -> usize {
    match category {
        Category::Core => 0,
        Category::Flow => 1,
        Category::Config => 2,
    }
}

/// Check every consistency rule the catalog promises.
///
/// Rules, in the order they are checked per entry: category blocks run
/// core, flow, config; names are unique within a category; aliases point
/// one hop at an existing canonical entry and carry no text of their
/// own; canonical entries carry syntax, description, and example; flags
/// are unique and apply only to existing canonical commands.
pub fn validate_catalog(catalog: &Catalog) -> ValidationReport {
    let mut report = ValidationReport::default();

    let mut seen_names: HashSet<(Category, String)> = HashSet::new();
    let mut highest_rank = 0usize;

    for entry in catalog.commands() {
        let rank = category_rank(entry.category);
        if rank < highest_rank {
            report.push(ValidationIssue::CategoryOrder {
                name: entry.name.to_string(),
            });
        }
        highest_rank = highest_rank.max(rank);

        if !seen_names.insert((entry.category, entry.name.to_ascii_lowercase())) {
            report.push(ValidationIssue::DuplicateName {
                category: entry.category,
                name: entry.name.to_string(),
            });
        }

        match entry.alias_of {
            Some(target) => {
                for (field, text) in [
                    ("syntax", entry.syntax),
                    ("description", entry.description),
                    ("example", entry.example),
                ] {
                    if !text.is_empty() {
                        report.push(ValidationIssue::AliasCarriesText {
                            alias: entry.name.to_string(),
                            field,
                        });
                    }
                }
                match catalog.find(target) {
                    None => report.push(ValidationIssue::UnknownAliasTarget {
                        alias: entry.name.to_string(),
                        target: target.to_string(),
                    }),
                    Some(resolved) if resolved.is_alias() => {
                        report.push(ValidationIssue::ChainedAlias {
                            alias: entry.name.to_string(),
                            target: target.to_string(),
                        });
                    }
                    Some(_) => {}
                }
            }
            None => {
                for (field, text) in [
                    ("syntax", entry.syntax),
                    ("description", entry.description),
                    ("example", entry.example),
                ] {
                    if text.is_empty() {
                        report.push(ValidationIssue::MissingText {
                            name: entry.name.to_string(),
                            field,
                        });
                    }
                }
            }
        }
    }

    let mut seen_flags: HashSet<&str> = HashSet::new();
    for option in catalog.options() {
        if !seen_flags.insert(option.flag) {
            report.push(ValidationIssue::DuplicateFlag {
                flag: option.flag.to_string(),
            });
        }
        for target in option.applies_to {
            match catalog.find(target) {
                None => report.push(ValidationIssue::UnknownOptionTarget {
                    flag: option.flag.to_string(),
                    target: target.to_string(),
                }),
                Some(resolved) if resolved.is_alias() => {
                    report.push(ValidationIssue::OptionTargetsAlias {
                        flag: option.flag.to_string(),
                        target: target.to_string(),
                    });
                }
                Some(_) => {}
            }
        }
    }

    report
}
