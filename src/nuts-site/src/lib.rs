//! Library surface of the NUTS site generator CLI.
//!
//! The binary in `main.rs` only parses arguments and sets up logging;
//! everything else lives here so tests can drive the same paths.

pub mod cli;
pub mod config;

pub use cli::{Cli, Commands, dispatch_command};
pub use config::SiteConfig;
