//! Lookup operations over the authored tables.

use crate::commands::COMMANDS;
use crate::entry::{Category, CommandEntry, OptionEntry};
use crate::error::CatalogError;
use crate::options::OPTIONS;

/// A command catalog: one command table plus one option table.
///
/// [`Catalog::builtin`] wraps the authored tables every page reads;
/// tests build catalogs over their own fixture slices. All lookups are
/// linear scans over static data, and name matching is case-insensitive
/// to mirror the NUTS shell.
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    commands: &'static [CommandEntry],
    options: &'static [OptionEntry],
}

impl Catalog {
    /// A catalog over the given tables.
    pub const fn new(
        commands: &'static [CommandEntry],
        options: &'static [OptionEntry],
    ) -> Catalog {
        Catalog { commands, options }
    }

    /// The catalog of authored site content.
    pub const fn builtin() -> Catalog {
        Catalog::new(COMMANDS, OPTIONS)
    }

    /// Every command entry, in authored order. Alias entries included.
    pub fn commands(&self) -> &'static [CommandEntry] {
        self.commands
    }

    /// Every option entry, in authored order.
    pub fn options(&self) -> &'static [OptionEntry] {
        self.options
    }

    /// Entries in one category, in authored order.
    ///
    /// # Examples
    ///
    /// ```
    /// use nuts_catalog::{Catalog, Category};
    ///
    /// let flow: Vec<_> = Catalog::builtin()
    ///     .commands_in(Category::Flow)
    ///     .map(|entry| entry.name)
    ///     .collect();
    /// assert_eq!(flow.first(), Some(&"flow new"));
    /// ```
    pub fn commands_in(&self, category: Category) -> impl Iterator<Item = &'static CommandEntry> {
        let commands = self.commands;
        commands
            .iter()
            .filter(move |entry| entry.category == category)
    }

    /// Entries that are not aliases, in authored order.
    pub fn canonical(&self) -> impl Iterator<Item = &'static CommandEntry> {
        let commands = self.commands;
        commands.iter().filter(|entry| !entry.is_alias())
    }

    /// The entry with the given name, without following aliases.
    pub fn find(&self, name: &str) -> Option<&'static CommandEntry> {
        self.commands
            .iter()
            .find(|entry| entry.name.eq_ignore_ascii_case(name))
    }

    /// The canonical entry for a name, following at most one alias hop.
    ///
    /// Aliases never chain: an alias always names a canonical entry
    /// directly, and [`validate`](crate::validate::validate_catalog)
    /// rejects tables where one does not. Fails with
    /// [`CatalogError::NotFound`] when the name is absent, or when an
    /// alias points at an entry that does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use nuts_catalog::Catalog;
    ///
    /// let entry = Catalog::builtin().resolve("c")?;
    /// assert_eq!(entry.name, "call");
    /// # Ok::<(), nuts_catalog::CatalogError>(())
    /// ```
    pub fn resolve(&self, name: &str) -> Result<&'static CommandEntry, CatalogError> {
        let entry = self
            .find(name)
            .ok_or_else(|| CatalogError::NotFound(name.to_string()))?;
        match entry.alias_of {
            Some(target) => self
                .find(target)
                .ok_or_else(|| CatalogError::NotFound(target.to_string())),
            None => Ok(entry),
        }
    }

    /// Names of the aliases pointing at the given canonical name.
    pub fn aliases_of(&self, name: &str) -> Vec<&'static str> {
        self.commands
            .iter()
            .filter(|entry| {
                entry
                    .alias_of
                    .is_some_and(|target| target.eq_ignore_ascii_case(name))
            })
            .map(|entry| entry.name)
            .collect()
    }

    /// Options that apply to the given command, in authored order.
    pub fn options_for(&self, name: &str) -> Vec<&'static OptionEntry> {
        self.options
            .iter()
            .filter(|option| option.modifies(name))
            .collect()
    }
}

impl Default for Catalog {
    fn default() -> Catalog {
        Catalog::builtin()
    }
}

/// Resolve a name against the builtin catalog.
///
/// Shorthand for `Catalog::builtin().resolve(name)`.
pub fn resolve_command(name: &str) -> Result<&'static CommandEntry, CatalogError> {
    Catalog::builtin().resolve(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_follows_one_alias_hop() {
        let entry = Catalog::builtin().resolve("c").expect("alias should resolve");
        assert_eq!(entry.name, "call");
        assert!(!entry.is_alias());
    }

    #[test]
    fn resolve_is_case_insensitive() {
        let entry = Catalog::builtin()
            .resolve("FLOW RUN")
            .expect("uppercase name should resolve");
        assert_eq!(entry.name, "flow run");
    }

    #[test]
    fn resolve_reports_unknown_names() {
        let err = Catalog::builtin()
            .resolve("teleport")
            .expect_err("unknown name should fail");
        assert!(matches!(err, CatalogError::NotFound(name) if name == "teleport"));
    }

    #[test]
    fn find_does_not_follow_aliases() {
        let entry = Catalog::builtin().find("quit").expect("entry should exist");
        assert_eq!(entry.alias_of, Some("exit"));
    }

    #[test]
    fn listing_is_idempotent() {
        let catalog = Catalog::builtin();
        let first: Vec<&str> = catalog.commands().iter().map(|e| e.name).collect();
        let second: Vec<&str> = catalog.commands().iter().map(|e| e.name).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn options_for_matches_multi_command_flags() {
        let catalog = Catalog::builtin();
        let call_flags: Vec<&str> = catalog.options_for("call").iter().map(|o| o.flag).collect();
        let perf_flags: Vec<&str> = catalog.options_for("perf").iter().map(|o| o.flag).collect();
        assert!(call_flags.contains(&"-H"));
        assert!(perf_flags.contains(&"-H"));
        assert!(perf_flags.contains(&"--users"));
        assert!(!call_flags.contains(&"--users"));
    }
}
