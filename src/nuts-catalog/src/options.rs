//! The authored option table.
//!
//! Flags are documented once here and point back at the canonical command
//! names they modify, so the options page and per-command sections always
//! agree on which flag belongs to which command.

use crate::entry::OptionEntry;

/// Every documented flag, grouped by the command it primarily serves.
pub const OPTIONS: &[OptionEntry] = &[
    // Request options
    OptionEntry {
        flag: "-H",
        applies_to: &["call", "perf"],
        effect: "Add a request header (repeatable).",
    },
    // Performance options
    OptionEntry {
        flag: "--users",
        applies_to: &["perf"],
        effect: "Number of concurrent users (default 10).",
    },
    OptionEntry {
        flag: "--duration",
        applies_to: &["perf"],
        effect: "Test duration in seconds (default 30s).",
    },
    // Security options
    OptionEntry {
        flag: "--deep",
        applies_to: &["security"],
        effect: "Perform a deep scan; more thorough but slower.",
    },
    OptionEntry {
        flag: "--auth",
        applies_to: &["security"],
        effect: "Include an authorization header for authenticated endpoints.",
    },
    OptionEntry {
        flag: "--save",
        applies_to: &["security"],
        effect: "Save the report to the given file.",
    },
    // Monitoring options
    OptionEntry {
        flag: "--smart",
        applies_to: &["monitor"],
        effect: "Enable AI analysis of health-check history.",
    },
    // Flow options
    OptionEntry {
        flag: "--data",
        applies_to: &["flow run"],
        effect: "Substitute request variables from a JSON file.",
    },
];
