//! Core types for the command reference catalog.

use serde::Serialize;
use std::fmt;

/// Help category a command is listed under.
///
/// Categories render in a fixed order everywhere: Core first, then Flow,
/// then Config. The catalog tables are authored in that order and
/// validation rejects entries that break it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Single-shot commands: requests, tests, monitors.
    Core,
    /// Flow commands: grouping saved requests and replaying them.
    Flow,
    /// Shell and configuration commands.
    Config,
}

impl Category {
    /// All categories, in render order.
    pub const ALL: [Category; 3] = [Category::Core, Category::Flow, Category::Config];

    /// Lowercase identifier used in JSON output and CLI arguments.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Core => "core",
            Category::Flow => "flow",
            Category::Config => "config",
        }
    }

    /// Section heading shown on rendered pages.
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Core => "Core Commands",
            Category::Flow => "Flow Commands",
            Category::Config => "System & Configuration",
        }
    }

    /// Parse a category name, case-insensitively.
    ///
    /// # Examples
    ///
    /// ```
    /// use nuts_catalog::Category;
    ///
    /// assert_eq!(Category::from_str_loose("FLOW"), Some(Category::Flow));
    /// assert_eq!(Category::from_str_loose("kernel"), None);
    /// ```
    pub fn from_str_loose(s: &str) -> Option<Category> {
        match s.to_ascii_lowercase().as_str() {
            "core" => Some(Category::Core),
            "flow" => Some(Category::Flow),
            "config" => Some(Category::Config),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One command in the reference catalog.
///
/// A canonical entry carries the full help text. An alias entry sets
/// [`alias_of`](CommandEntry::alias_of) to the canonical name and leaves
/// `syntax`, `description`, and `example` empty; readers resolve the alias
/// and render the target's text instead. Aliases never chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CommandEntry {
    /// Name as typed at the shell prompt (e.g. "call", "flow run").
    pub name: &'static str,
    /// Usage line, with <required> and [optional] placeholders.
    pub syntax: &'static str,
    /// One-sentence description shown in help listings.
    pub description: &'static str,
    /// A runnable invocation a user could paste into the shell.
    pub example: &'static str,
    /// Category the entry is listed under.
    pub category: Category,
    /// Canonical name this entry is a shorthand for, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias_of: Option<&'static str>,
}

impl CommandEntry {
    /// Whether this entry is a shorthand for another command.
    pub fn is_alias(&self) -> bool {
        self.alias_of.is_some()
    }
}

/// One flag in the option reference.
///
/// Options are documented separately from commands and point back at the
/// canonical command names they modify.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OptionEntry {
    /// Flag as typed, including dashes (e.g. "--smart").
    pub flag: &'static str,
    /// Canonical command names this flag applies to.
    pub applies_to: &'static [&'static str],
    /// What the flag changes about the command's behavior.
    pub effect: &'static str,
}

impl OptionEntry {
    /// Whether this flag modifies the given command.
    pub fn modifies(&self, command: &str) -> bool {
        self.applies_to
            .iter()
            .any(|name| name.eq_ignore_ascii_case(command))
    }
}
