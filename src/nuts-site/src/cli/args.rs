//! Command-line argument definitions.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::cli::styles::{AFTER_HELP, BEFORE_HELP, get_styles};

/// Log verbosity levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// The level as a `tracing_subscriber` env-filter directive.
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }

    /// Parse a level loosely, accepting common spellings.
    pub fn from_str_loose(s: &str) -> Option<LogLevel> {
        match s.to_ascii_lowercase().as_str() {
            "error" | "err" => Some(LogLevel::Error),
            "warn" | "warning" => Some(LogLevel::Warn),
            "info" => Some(LogLevel::Info),
            "debug" => Some(LogLevel::Debug),
            "trace" => Some(LogLevel::Trace),
            _ => None,
        }
    }
}

/// When to emit color codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Color when stdout is a terminal and NO_COLOR is unset.
    Auto,
    /// Always color.
    Always,
    /// Never color.
    Never,
}

#[derive(Parser, Debug)]
#[command(name = "nuts-site")]
#[command(about = "Build and check the NUTS website", long_about = None)]
#[command(version)]
#[command(styles = get_styles())]
#[command(before_help = BEFORE_HELP, after_help = AFTER_HELP)]
pub struct Cli {
    /// Enable verbose output (debug-level logging)
    #[arg(long = "verbose", short = 'v', global = true)]
    pub verbose: bool,

    /// Enable trace-level logging
    #[arg(long = "trace", global = true)]
    pub trace: bool,

    /// Set log verbosity
    #[arg(
        long = "log-level",
        value_enum,
        default_value = "info",
        global = true,
        value_name = "LEVEL"
    )]
    pub log_level: LogLevel,

    /// Control colored output
    #[arg(long = "color", global = true, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,

    /// Path to the site config file (default ./nuts-site.toml)
    #[arg(long = "config", global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate the catalog, then render every page to the output directory
    #[command(visible_alias = "b", display_order = 1)]
    Build(BuildArgs),

    /// Validate the catalog and page copy without writing anything
    #[command(display_order = 2)]
    Check(CheckArgs),

    /// List catalog commands, optionally for one category
    #[command(visible_alias = "ls", display_order = 3)]
    List(ListArgs),

    /// Show one command, resolving aliases
    #[command(display_order = 4)]
    Show(ShowArgs),

    /// Show the monitoring profiles
    #[command(display_order = 5)]
    Monitoring(MonitoringArgs),

    /// Print the landing-page terminal demo
    #[command(display_order = 6)]
    Demo,

    /// Export the catalog as JSON
    #[command(display_order = 7)]
    Export(ExportArgs),

    /// Generate shell completion scripts
    #[command(display_order = 8)]
    Completions(CompletionsArgs),
}

#[derive(clap::Args, Debug)]
pub struct BuildArgs {
    /// Output directory for the rendered pages
    #[arg(long = "out", short = 'o', value_name = "DIR")]
    pub out_dir: Option<PathBuf>,
}

#[derive(clap::Args, Debug)]
pub struct CheckArgs {
    /// Emit issues as JSON
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(clap::Args, Debug)]
pub struct ListArgs {
    /// Category to list (core, flow, or config)
    #[arg(value_name = "CATEGORY")]
    pub category: Option<String>,

    /// Emit entries as JSON
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(clap::Args, Debug)]
pub struct ShowArgs {
    /// Command name or alias
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Emit the entry as JSON
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(clap::Args, Debug)]
pub struct MonitoringArgs {
    /// Mode to show (basic or smart); both when omitted
    #[arg(value_name = "MODE")]
    pub mode: Option<String>,

    /// Emit profiles as JSON
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(clap::Args, Debug)]
pub struct ExportArgs {
    /// Write to a file instead of stdout
    #[arg(long = "out", short = 'o', value_name = "FILE")]
    pub out: Option<PathBuf>,

    /// Pretty-print the JSON
    #[arg(long = "pretty")]
    pub pretty: bool,
}

#[derive(clap::Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum, value_name = "SHELL")]
    pub shell: clap_complete::Shell,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    // ========================================================================
    // Global Flags
    // ========================================================================

    #[test]
    fn test_cli_parses_verbose_flag() {
        let cli = Cli::try_parse_from(["nuts-site", "--verbose", "check"])
            .expect("should parse --verbose");
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Check(_)));
    }

    #[test]
    fn test_color_defaults_to_auto() {
        let cli = Cli::try_parse_from(["nuts-site", "check"]).expect("should parse");
        assert_eq!(cli.color, ColorMode::Auto);
    }

    #[test]
    fn test_global_flags_work_after_the_subcommand() {
        let cli = Cli::try_parse_from(["nuts-site", "build", "--trace"])
            .expect("should parse trailing global flag");
        assert!(cli.trace);
    }

    #[test]
    fn test_log_level_value_enum() {
        let cli = Cli::try_parse_from(["nuts-site", "--log-level", "debug", "check"])
            .expect("should parse --log-level");
        assert_eq!(cli.log_level, LogLevel::Debug);
    }

    #[test]
    fn test_log_level_loose_parsing() {
        assert_eq!(LogLevel::from_str_loose("WARNING"), Some(LogLevel::Warn));
        assert_eq!(LogLevel::from_str_loose("err"), Some(LogLevel::Error));
        assert_eq!(LogLevel::from_str_loose("chatty"), None);
    }

    // ========================================================================
    // Subcommands
    // ========================================================================

    #[test]
    fn test_build_accepts_an_output_directory() {
        let cli = Cli::try_parse_from(["nuts-site", "build", "--out", "public"])
            .expect("should parse build --out");
        match cli.command {
            Commands::Build(args) => {
                assert_eq!(args.out_dir, Some(PathBuf::from("public")));
            }
            other => panic!("expected build, got {other:?}"),
        }
    }

    #[test]
    fn test_b_is_an_alias_for_build() {
        let cli = Cli::try_parse_from(["nuts-site", "b"]).expect("should parse alias");
        assert!(matches!(cli.command, Commands::Build(_)));
    }

    #[test]
    fn test_list_takes_an_optional_category() {
        let cli = Cli::try_parse_from(["nuts-site", "list", "flow"]).expect("should parse");
        match cli.command {
            Commands::List(args) => assert_eq!(args.category.as_deref(), Some("flow")),
            other => panic!("expected list, got {other:?}"),
        }

        let cli = Cli::try_parse_from(["nuts-site", "ls"]).expect("should parse alias");
        match cli.command {
            Commands::List(args) => assert!(args.category.is_none()),
            other => panic!("expected list, got {other:?}"),
        }
    }

    #[test]
    fn test_show_requires_a_name() {
        assert!(Cli::try_parse_from(["nuts-site", "show"]).is_err());
        let cli = Cli::try_parse_from(["nuts-site", "show", "c", "--json"]).expect("should parse");
        match cli.command {
            Commands::Show(args) => {
                assert_eq!(args.name, "c");
                assert!(args.json);
            }
            other => panic!("expected show, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_subcommand_is_rejected() {
        assert!(Cli::try_parse_from(["nuts-site", "deploy"]).is_err());
    }

    #[test]
    fn test_completions_requires_a_shell() {
        assert!(Cli::try_parse_from(["nuts-site", "completions"]).is_err());
        let cli =
            Cli::try_parse_from(["nuts-site", "completions", "zsh"]).expect("should parse shell");
        assert!(matches!(cli.command, Commands::Completions(_)));
    }
}
