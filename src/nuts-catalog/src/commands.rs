//! The authored command table.
//!
//! This table is the single source of truth for every command the site
//! mentions. Pages, the terminal demo, and the JSON export all read it;
//! none of them carry command text of their own. Entries are authored in
//! render order: Core, then Flow, then Config, with alias entries at the
//! end of their category block.

use crate::entry::{Category, CommandEntry};

/// Every command in the NUTS shell, in render order.
pub const COMMANDS: &[CommandEntry] = &[
    // Core commands
    CommandEntry {
        name: "call",
        syntax: "call [METHOD] URL [BODY]",
        description: "Execute an HTTP request and pretty-print the response.",
        example: "call GET https://api.example.com/users",
        category: Category::Core,
        alias_of: None,
    },
    CommandEntry {
        name: "ask",
        syntax: "ask \"<description>\"",
        description: "Describe a request in plain English and let the AI build and run it.",
        example: "ask \"test the GitHub API\"",
        category: Category::Core,
        alias_of: None,
    },
    CommandEntry {
        name: "perf",
        syntax: "perf [METHOD] URL [--users N] [--duration Ns]",
        description: "Run a load test with concurrent simulated users and latency stats.",
        example: "perf GET https://api.example.com --users 100 --duration 30s",
        category: Category::Core,
        alias_of: None,
    },
    CommandEntry {
        name: "security",
        syntax: "security URL [--deep] [--auth TOKEN] [--save FILE]",
        description: "Scan an endpoint for security weaknesses and report findings.",
        example: "security https://api.example.com --deep",
        category: Category::Core,
        alias_of: None,
    },
    CommandEntry {
        name: "monitor",
        syntax: "monitor URL [--smart]",
        description: "Watch an endpoint with scheduled health checks.",
        example: "monitor https://api.example.com/health --smart",
        category: Category::Core,
        alias_of: None,
    },
    CommandEntry {
        name: "mock",
        syntax: "mock [PORT]",
        description: "Start a local mock server.",
        example: "mock 8080",
        category: Category::Core,
        alias_of: None,
    },
    CommandEntry {
        name: "save",
        syntax: "save <flow> <name>",
        description: "Save the last request and response into a flow.",
        example: "save my-api get-users",
        category: Category::Core,
        alias_of: None,
    },
    CommandEntry {
        name: "c",
        syntax: "",
        description: "",
        example: "",
        category: Category::Core,
        alias_of: Some("call"),
    },
    // Flow commands
    CommandEntry {
        name: "flow new",
        syntax: "flow new <name>",
        description: "Create an empty flow.",
        example: "flow new my-api",
        category: Category::Flow,
        alias_of: None,
    },
    CommandEntry {
        name: "flow add",
        syntax: "flow add <flow> <METHOD> <path>",
        description: "Add an endpoint to a flow.",
        example: "flow add my-api GET /users",
        category: Category::Flow,
        alias_of: None,
    },
    CommandEntry {
        name: "flow run",
        syntax: "flow run <flow> [--data FILE]",
        description: "Run every request in a flow, in order.",
        example: "flow run my-api",
        category: Category::Flow,
        alias_of: None,
    },
    CommandEntry {
        name: "flow list",
        syntax: "flow list",
        description: "List saved flows.",
        example: "flow list",
        category: Category::Flow,
        alias_of: None,
    },
    CommandEntry {
        name: "flow docs",
        syntax: "flow docs <flow> [format]",
        description: "Generate OpenAPI documentation from a flow (yaml or json).",
        example: "flow docs my-api yaml",
        category: Category::Flow,
        alias_of: None,
    },
    CommandEntry {
        name: "flow mock",
        syntax: "flow mock <flow> [port]",
        description: "Serve a flow's recorded responses, with per-endpoint fixture overrides.",
        example: "flow mock my-api 8080",
        category: Category::Flow,
        alias_of: None,
    },
    CommandEntry {
        name: "flow story",
        syntax: "flow story",
        description: "Record a flow interactively, one request at a time.",
        example: "flow story",
        category: Category::Flow,
        alias_of: None,
    },
    // System and configuration commands
    CommandEntry {
        name: "config api-key",
        syntax: "config api-key",
        description: "Set and verify the Anthropic API key used by the AI commands.",
        example: "config api-key",
        category: Category::Config,
        alias_of: None,
    },
    CommandEntry {
        name: "config show",
        syntax: "config show",
        description: "Show the current configuration with the API key masked.",
        example: "config show",
        category: Category::Config,
        alias_of: None,
    },
    CommandEntry {
        name: "daemon",
        syntax: "daemon [start|stop|status]",
        description: "Manage the background monitoring service.",
        example: "daemon status",
        category: Category::Config,
        alias_of: None,
    },
    CommandEntry {
        name: "help",
        syntax: "help",
        description: "Show the command overview.",
        example: "help",
        category: Category::Config,
        alias_of: None,
    },
    CommandEntry {
        name: "exit",
        syntax: "exit",
        description: "Leave the NUTS shell.",
        example: "exit",
        category: Category::Config,
        alias_of: None,
    },
    CommandEntry {
        name: "configure",
        syntax: "",
        description: "",
        example: "",
        category: Category::Config,
        alias_of: Some("config api-key"),
    },
    CommandEntry {
        name: "quit",
        syntax: "",
        description: "",
        example: "",
        category: Category::Config,
        alias_of: Some("exit"),
    },
];
