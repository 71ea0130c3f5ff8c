//! Subcommand handlers.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, info};

use nuts_catalog::{Catalog, Category, MonitoringProfile, monitoring, validate_catalog};
use nuts_pages::{render_demo_ansi, render_site, verify_content};

use crate::cli::args::{
    BuildArgs, CheckArgs, Cli, Commands, CompletionsArgs, ExportArgs, ListArgs, MonitoringArgs,
    ShowArgs,
};
use crate::config::{DEFAULT_OUT_DIR, SiteConfig};

/// Route a parsed command line to its handler.
pub fn dispatch_command(cli: Cli) -> Result<()> {
    let config = SiteConfig::load(cli.config.as_deref())?;
    match cli.command {
        Commands::Build(args) => run_build(&args, &config),
        Commands::Check(args) => run_check(&args),
        Commands::List(args) => run_list(&args),
        Commands::Show(args) => run_show(&args),
        Commands::Monitoring(args) => run_monitoring(&args),
        Commands::Demo => run_demo(),
        Commands::Export(args) => run_export(&args),
        Commands::Completions(args) => run_completions(&args),
    }
}

fn run_build(args: &BuildArgs, config: &SiteConfig) -> Result<()> {
    let catalog = Catalog::builtin();

    let report = validate_catalog(&catalog);
    let content_issues = verify_content(&catalog);
    let total = report.len() + content_issues.len();
    if total > 0 {
        for issue in report.issues() {
            eprintln!("  - {issue}");
        }
        for issue in &content_issues {
            eprintln!("  - {issue}");
        }
        bail!("refusing to build: {total} validation issue(s)");
    }

    let out_dir = args
        .out_dir
        .clone()
        .or_else(|| config.out_dir.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUT_DIR));
    let meta = config.site_meta();

    let pages = render_site(&catalog, &meta)?;
    std::fs::create_dir_all(&out_dir)?;
    for page in &pages {
        let path = out_dir.join(page.file_name);
        std::fs::write(&path, &page.contents)?;
        debug!(file = %path.display(), bytes = page.contents.len(), "wrote page");
    }

    info!(pages = pages.len(), out_dir = %out_dir.display(), "site build complete");
    println!("Wrote {} page(s) to {}", pages.len(), out_dir.display());
    Ok(())
}

fn run_check(args: &CheckArgs) -> Result<()> {
    let catalog = Catalog::builtin();
    let report = validate_catalog(&catalog);
    let content_issues = verify_content(&catalog);
    let total = report.len() + content_issues.len();

    if args.json {
        let output = serde_json::json!({
            "ok": total == 0,
            "catalog_issues": report.issues(),
            "content_issues": content_issues,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if total == 0 {
        println!(
            "Catalog OK: {} commands, {} options, {} demo steps.",
            catalog.commands().len(),
            catalog.options().len(),
            nuts_pages::DEMO_SCRIPT.len()
        );
    } else {
        println!("Found {total} issue(s):");
        for issue in report.issues() {
            println!("  - {issue}");
        }
        for issue in &content_issues {
            println!("  - {issue}");
        }
    }

    if total > 0 {
        bail!("validation failed with {total} issue(s)");
    }
    Ok(())
}

fn run_list(args: &ListArgs) -> Result<()> {
    let catalog = Catalog::builtin();

    let category = match args.category.as_deref() {
        Some(input) => match Category::from_str_loose(input) {
            Some(category) => Some(category),
            None => bail!("Invalid category '{input}'. Use: core, flow, or config"),
        },
        None => None,
    };

    if args.json {
        let entries: Vec<_> = match category {
            Some(category) => catalog.commands_in(category).collect(),
            None => catalog.commands().iter().collect(),
        };
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    let categories = match category {
        Some(category) => vec![category],
        None => Category::ALL.to_vec(),
    };
    for category in categories {
        let canonical: Vec<_> = catalog
            .commands_in(category)
            .filter(|entry| !entry.is_alias())
            .collect();
        let name_width = canonical.iter().map(|e| e.name.len()).max().unwrap_or(0);
        let syntax_width = canonical.iter().map(|e| e.syntax.len()).max().unwrap_or(0);

        println!("\n{} ({}):", category.display_name(), canonical.len());
        for entry in canonical {
            let aliases = catalog.aliases_of(entry.name);
            let alias_note = if aliases.is_empty() {
                String::new()
            } else {
                format!("  [aliases: {}]", aliases.join(", "))
            };
            println!(
                "  {:<name_width$}  {:<syntax_width$}  {}{alias_note}",
                entry.name, entry.syntax, entry.description
            );
        }
    }
    Ok(())
}

fn run_show(args: &ShowArgs) -> Result<()> {
    let catalog = Catalog::builtin();
    let entry = catalog.resolve(&args.name)?;
    let aliases = catalog.aliases_of(entry.name);
    let options = catalog.options_for(entry.name);

    if args.json {
        let output = serde_json::json!({
            "command": entry,
            "aliases": aliases,
            "options": options,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("{}", entry.name);
    if !entry.name.eq_ignore_ascii_case(&args.name) {
        println!("  (resolved from alias '{}')", args.name);
    }
    println!("  Category:    {}", entry.category.display_name());
    println!("  Syntax:      {}", entry.syntax);
    println!("  Description: {}", entry.description);
    println!("  Example:     {}", entry.example);
    if !aliases.is_empty() {
        println!("  Aliases:     {}", aliases.join(", "));
    }
    if !options.is_empty() {
        println!("  Options:");
        for option in options {
            println!("    {:<12} {}", option.flag, option.effect);
        }
    }
    Ok(())
}

fn run_monitoring(args: &MonitoringArgs) -> Result<()> {
    let selected: Vec<MonitoringProfile> = match args.mode.as_deref() {
        Some(input) => vec![monitoring::describe(input)?],
        None => monitoring::profiles().to_vec(),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&selected)?);
        return Ok(());
    }

    for profile in selected {
        println!("{} monitoring:", profile.mode.display_name());
        println!("  Checks every {} seconds", profile.base_interval_seconds);
        match (
            profile.ai_analysis_every_n_checks,
            profile.effective_ai_interval_seconds(),
        ) {
            (Some(n), Some(effective)) => {
                println!("  AI analysis every {n} checks (every {effective} seconds)");
            }
            _ => println!("  No AI analysis"),
        }
    }
    Ok(())
}

fn run_demo() -> Result<()> {
    let preview = render_demo_ansi(&Catalog::builtin())?;
    print!("{preview}");
    Ok(())
}

fn run_export(args: &ExportArgs) -> Result<()> {
    let catalog = Catalog::builtin();

    let report = validate_catalog(&catalog);
    if !report.is_empty() {
        for issue in report.issues() {
            eprintln!("  - {issue}");
        }
        bail!("refusing to export: {} validation issue(s)", report.len());
    }

    let doc = serde_json::json!({
        "version": nuts_pages::content::TOOL_VERSION,
        "commands": catalog.commands(),
        "options": catalog.options(),
        "monitoring": monitoring::profiles(),
    });
    let text = if args.pretty {
        serde_json::to_string_pretty(&doc)?
    } else {
        serde_json::to_string(&doc)?
    };

    match &args.out {
        Some(path) => {
            std::fs::write(path, &text)?;
            info!(file = %path.display(), "wrote catalog export");
            println!("Wrote catalog export to {}", path.display());
        }
        None => println!("{text}"),
    }
    Ok(())
}

// Completion output is commonly piped to head; swallow broken pipes so
// that does not panic inside clap_complete.
struct BrokenPipeIgnorer<W: Write> {
    inner: W,
}

impl<W: Write> Write for BrokenPipeIgnorer<W> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        match self.inner.write(buf) {
            Err(e) if e.kind() == std::io::ErrorKind::BrokenPipe => Ok(buf.len()),
            other => other,
        }
    }

    fn flush(&mut self) -> std::io::Result<()> {
        match self.inner.flush() {
            Err(e) if e.kind() == std::io::ErrorKind::BrokenPipe => Ok(()),
            other => other,
        }
    }
}

fn run_completions(args: &CompletionsArgs) -> Result<()> {
    let mut cmd = Cli::command();
    let mut out = BrokenPipeIgnorer {
        inner: std::io::stdout(),
    };
    generate(args.shell, &mut cmd, "nuts-site", &mut out);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    // ========================================================================
    // Build
    // ========================================================================

    #[test]
    fn test_build_writes_the_four_pages() {
        let tmp = TempDir::new().expect("tempdir");
        let args = BuildArgs {
            out_dir: Some(tmp.path().join("site")),
        };
        run_build(&args, &SiteConfig::default()).expect("build should succeed");
        for name in ["index.html", "readme.html", "docs.html", "README.md"] {
            assert!(
                tmp.path().join("site").join(name).exists(),
                "missing output file {name}"
            );
        }
    }

    #[test]
    fn test_build_falls_back_to_config_out_dir() {
        let tmp = TempDir::new().expect("tempdir");
        let config = SiteConfig {
            out_dir: Some(tmp.path().join("public")),
            ..SiteConfig::default()
        };
        run_build(&BuildArgs { out_dir: None }, &config).expect("build should succeed");
        assert!(tmp.path().join("public").join("index.html").exists());
    }

    #[test]
    fn test_built_readme_embeds_catalog_syntax() {
        let tmp = TempDir::new().expect("tempdir");
        let args = BuildArgs {
            out_dir: Some(tmp.path().to_path_buf()),
        };
        run_build(&args, &SiteConfig::default()).expect("build should succeed");
        let readme =
            std::fs::read_to_string(tmp.path().join("README.md")).expect("README should exist");
        assert!(readme.contains("call [METHOD] URL [BODY]"));
        assert!(readme.contains("flow run <flow> [--data FILE]"));
    }

    #[test]
    fn test_build_applies_the_configured_title() {
        let tmp = TempDir::new().expect("tempdir");
        let config = SiteConfig {
            title: Some("NUTS Preview".to_string()),
            ..SiteConfig::default()
        };
        let args = BuildArgs {
            out_dir: Some(tmp.path().to_path_buf()),
        };
        run_build(&args, &config).expect("build should succeed");
        let index =
            std::fs::read_to_string(tmp.path().join("index.html")).expect("index should exist");
        assert!(index.contains("NUTS Preview"));
    }

    // ========================================================================
    // Check, List, Show, Monitoring
    // ========================================================================

    #[test]
    fn test_check_passes_on_the_builtin_catalog() {
        run_check(&CheckArgs { json: false }).expect("check should pass");
        run_check(&CheckArgs { json: true }).expect("json check should pass");
    }

    #[test]
    fn test_list_rejects_unknown_categories() {
        let err = run_list(&ListArgs {
            category: Some("kernel".to_string()),
            json: false,
        })
        .expect_err("should reject unknown category");
        assert!(err.to_string().contains("Invalid category"));
    }

    #[test]
    fn test_list_accepts_each_category() {
        for name in ["core", "flow", "config", "FLOW"] {
            run_list(&ListArgs {
                category: Some(name.to_string()),
                json: true,
            })
            .unwrap_or_else(|e| panic!("list {name} failed: {e}"));
        }
    }

    #[test]
    fn test_show_resolves_aliases() {
        run_show(&ShowArgs {
            name: "c".to_string(),
            json: false,
        })
        .expect("show should resolve the alias");
    }

    #[test]
    fn test_show_fails_on_unknown_names() {
        let err = run_show(&ShowArgs {
            name: "teleport".to_string(),
            json: false,
        })
        .expect_err("should fail");
        assert!(err.to_string().contains("Unknown command"));
    }

    #[test]
    fn test_monitoring_rejects_unknown_modes() {
        let err = run_monitoring(&MonitoringArgs {
            mode: Some("turbo".to_string()),
            json: true,
        })
        .expect_err("should fail");
        assert!(err.to_string().contains("Invalid monitoring mode"));
    }

    // ========================================================================
    // Export
    // ========================================================================

    #[test]
    fn test_export_writes_machine_readable_catalog() {
        let tmp = TempDir::new().expect("tempdir");
        let path = tmp.path().join("catalog.json");
        run_export(&ExportArgs {
            out: Some(path.clone()),
            pretty: true,
        })
        .expect("export should succeed");

        let text = std::fs::read_to_string(&path).expect("export file should exist");
        let doc: serde_json::Value = serde_json::from_str(&text).expect("should be valid JSON");

        let commands = doc["commands"].as_array().expect("commands array");
        let names: Vec<&str> = commands
            .iter()
            .filter_map(|cmd| cmd["name"].as_str())
            .collect();
        for entry in Catalog::builtin().canonical() {
            assert!(names.contains(&entry.name), "export is missing {}", entry.name);
        }

        let c = commands
            .iter()
            .find(|cmd| cmd["name"] == "c")
            .expect("alias entry in export");
        assert_eq!(c["alias_of"], "call");

        let monitoring = doc["monitoring"].as_array().expect("monitoring array");
        assert_eq!(monitoring[0]["mode"], "basic");
        assert!(monitoring[0].get("ai_analysis_every_n_checks").is_none());
        assert_eq!(monitoring[1]["ai_analysis_every_n_checks"], 3);
    }
}
