//! Comprehensive tests for the authored catalog content.

use pretty_assertions::assert_eq;

use crate::catalog::{Catalog, resolve_command};
use crate::entry::Category;

// ============================================================================
// Category Content
// ============================================================================

#[test]
fn test_core_canonical_commands_in_order() {
    let names: Vec<&str> = Catalog::builtin()
        .commands_in(Category::Core)
        .filter(|entry| !entry.is_alias())
        .map(|entry| entry.name)
        .collect();
    assert_eq!(
        names,
        vec!["call", "ask", "perf", "security", "monitor", "mock", "save"]
    );
}

#[test]
fn test_flow_category_is_exactly_the_seven_flow_commands() {
    let names: Vec<&str> = Catalog::builtin()
        .commands_in(Category::Flow)
        .map(|entry| entry.name)
        .collect();
    assert_eq!(
        names,
        vec![
            "flow new",
            "flow add",
            "flow run",
            "flow list",
            "flow docs",
            "flow mock",
            "flow story",
        ]
    );
}

#[test]
fn test_config_category_contains_shell_commands_and_aliases() {
    let catalog = Catalog::builtin();
    let names: Vec<&str> = catalog
        .commands_in(Category::Config)
        .map(|entry| entry.name)
        .collect();
    assert_eq!(
        names,
        vec![
            "config api-key",
            "config show",
            "daemon",
            "help",
            "exit",
            "configure",
            "quit",
        ]
    );
}

#[test]
fn test_category_listing_includes_alias_entries() {
    let catalog = Catalog::builtin();
    assert!(
        catalog
            .commands_in(Category::Core)
            .any(|entry| entry.name == "c")
    );
}

#[test]
fn test_categories_appear_in_render_order() {
    let mut highest = 0usize;
    for entry in Catalog::builtin().commands() {
        let rank = Category::ALL
            .iter()
            .position(|c| *c == entry.category)
            .expect("category should be in ALL");
        assert!(
            rank >= highest,
            "entry '{}' breaks category order",
            entry.name
        );
        highest = rank;
    }
}

// ============================================================================
// Alias Resolution
// ============================================================================

#[test]
fn test_every_alias_resolves_in_one_hop() {
    let catalog = Catalog::builtin();
    for entry in catalog.commands() {
        let Some(target) = entry.alias_of else {
            continue;
        };
        let resolved = catalog
            .find(target)
            .unwrap_or_else(|| panic!("alias '{}' dangles", entry.name));
        assert!(
            !resolved.is_alias(),
            "alias '{}' chains through '{}'",
            entry.name,
            target
        );
    }
}

#[test]
fn test_shorthand_c_resolves_to_call() {
    let entry = resolve_command("c").expect("c should resolve");
    assert_eq!(entry.name, "call");
    assert_eq!(entry.syntax, "call [METHOD] URL [BODY]");
}

#[test]
fn test_configure_and_quit_resolve_to_their_targets() {
    let catalog = Catalog::builtin();
    let configure = catalog
        .resolve("configure")
        .expect("configure should resolve");
    assert_eq!(configure.name, "config api-key");
    let quit = catalog.resolve("quit").expect("quit should resolve");
    assert_eq!(quit.name, "exit");
}

#[test]
fn test_aliases_of_lists_shorthands() {
    let catalog = Catalog::builtin();
    assert_eq!(catalog.aliases_of("call"), vec!["c"]);
    assert_eq!(catalog.aliases_of("exit"), vec!["quit"]);
    assert_eq!(catalog.aliases_of("config api-key"), vec!["configure"]);
    assert!(catalog.aliases_of("perf").is_empty());
}

#[test]
fn test_canonical_excludes_aliases() {
    let catalog = Catalog::builtin();
    assert!(catalog.canonical().all(|entry| !entry.is_alias()));
    let canonical = catalog.canonical().count();
    let total = catalog.commands().len();
    assert_eq!(total - canonical, 3, "expected exactly three aliases");
}

// ============================================================================
// Option References
// ============================================================================

#[test]
fn test_every_option_target_resolves_to_a_canonical_entry() {
    let catalog = Catalog::builtin();
    for option in catalog.options() {
        for target in option.applies_to {
            let entry = catalog
                .find(target)
                .unwrap_or_else(|| panic!("option '{}' targets unknown '{}'", option.flag, target));
            assert!(
                !entry.is_alias(),
                "option '{}' targets alias '{}'",
                option.flag,
                target
            );
        }
    }
}

#[test]
fn test_flow_run_takes_the_data_flag() {
    let flags: Vec<&str> = Catalog::builtin()
        .options_for("flow run")
        .iter()
        .map(|o| o.flag)
        .collect();
    assert_eq!(flags, vec!["--data"]);
}

// ============================================================================
// Serialization
// ============================================================================

#[test]
fn test_canonical_entry_serializes_without_alias_field() {
    let catalog = Catalog::builtin();
    let call = catalog.find("call").expect("call should exist");
    let json = serde_json::to_value(call).expect("should serialize");
    assert!(json.get("alias_of").is_none());
    assert_eq!(json["name"], "call");
    assert_eq!(json["category"], "core");
}

#[test]
fn test_alias_entry_serializes_with_target() {
    let catalog = Catalog::builtin();
    let c = catalog.find("c").expect("c should exist");
    let json = serde_json::to_value(c).expect("should serialize");
    assert_eq!(json["alias_of"], "call");
}
