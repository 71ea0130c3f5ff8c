//! Command-line interface: argument definitions, styling, and handlers.

pub mod args;
pub mod handlers;
pub mod styles;

// Re-export main types for convenience
pub use args::{Cli, ColorMode, Commands, LogLevel};
pub use handlers::dispatch_command;
pub use styles::{AFTER_HELP, BEFORE_HELP, get_styles};
