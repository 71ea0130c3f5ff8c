//! NUTS site generator binary.

use anyhow::Result;
use clap::Parser;

use nuts_site::cli::{Cli, ColorMode, LogLevel, dispatch_command};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Resolve the color mode before anything prints
    match cli.color {
        ColorMode::Never => {
            // SAFETY: no other threads are running this early
            unsafe { std::env::set_var("NO_COLOR", "1") };
        }
        ColorMode::Always => {
            // SAFETY: no other threads are running this early
            unsafe { std::env::remove_var("NO_COLOR") };
        }
        ColorMode::Auto => {}
    }

    // Log level precedence: --trace, then --verbose, then the
    // environment, then --log-level
    let log_level = if cli.trace {
        LogLevel::Trace
    } else if cli.verbose {
        LogLevel::Debug
    } else if let Ok(env_level) = std::env::var("NUTS_SITE_LOG") {
        LogLevel::from_str_loose(&env_level).unwrap_or(cli.log_level)
    } else {
        cli.log_level
    };

    tracing_subscriber::fmt()
        .with_env_filter(log_level.as_filter_str())
        .init();

    dispatch_command(cli)
}
