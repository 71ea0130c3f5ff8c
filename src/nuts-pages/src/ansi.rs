//! ANSI color helpers for the terminal demo preview.
//!
//! The demo renders twice: colored for `nuts-site demo` on a terminal,
//! and plain for embedding in HTML. Coloring respects `NO_COLOR` and
//! falls back to plain text when stdout is not a TTY.

use std::io::IsTerminal;

/// Whether output to stdout should carry color codes.
pub fn should_colorize() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    std::io::stdout().is_terminal()
}

/// Wrap `text` in the given color code when coloring is on.
pub fn maybe_color(text: &str, color: &str) -> String {
    if should_colorize() {
        format!("{color}{text}{}", colors::RESET)
    } else {
        text.to_string()
    }
}

/// Remove CSI escape sequences from a string.
///
/// Only CSI (`ESC [`) sequences are handled, which is every sequence the
/// site's own renderers emit.
pub fn strip_ansi_codes(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(ch) = chars.next() {
        if ch != '\x1b' {
            out.push(ch);
            continue;
        }
        if chars.next() == Some('[') {
            // Skip parameter bytes up to and including the final byte
            for ch in chars.by_ref() {
                if matches!(ch, '\x40'..='\x7e') {
                    break;
                }
            }
        }
    }
    out
}

/// The color codes the demo renderer uses.
pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const GREEN: &str = "\x1b[32m";
    pub const CYAN: &str = "\x1b[36m";
    pub const BOLD_GREEN: &str = "\x1b[1;32m";
    pub const BOLD_CYAN: &str = "\x1b[1;36m";
}
