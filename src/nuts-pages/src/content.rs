//! Authored site copy: brand strings and feature highlights.
//!
//! Command words here are references into the catalog, checked by
//! [`verify_content`](crate::site::verify_content). The copy never
//! restates syntax or intervals the catalog owns; renderers pull those
//! from the catalog at render time.

/// Product name.
pub const SITE_TITLE: &str = "NUTS";

/// What the acronym stands for.
pub const SITE_SUBTITLE: &str = "Network Universal Testing Suite";

/// One-line pitch under the title.
pub const SITE_TAGLINE: &str = "API testing that speaks plain English.";

/// Name of the installed binary, as typed at an OS shell.
pub const BINARY_NAME: &str = "nuts";

/// Version of the CLI release the pages document.
pub const TOOL_VERSION: &str = "0.1.0";

/// Install command shown on the landing page and README.
pub const INSTALL_COMMAND: &str = "cargo install nuts";

/// Project repository, rendered in page footers.
pub const REPO_URL: &str = "https://github.com/nutscli/nuts";

/// One landing-page highlight.
#[derive(Debug, Clone, Copy)]
pub struct Feature {
    /// Card heading.
    pub title: &'static str,
    /// One or two sentences of copy.
    pub blurb: &'static str,
    /// Catalog command the card showcases; its syntax renders under the
    /// blurb.
    pub command: &'static str,
}

/// Landing-page highlights, in render order.
pub const FEATURES: &[Feature] = &[
    Feature {
        title: "Call anything",
        blurb: "Fire a request at any endpoint and get the response pretty-printed back.",
        command: "call",
    },
    Feature {
        title: "Ask in plain English",
        blurb: "Describe the request you want; the AI builds it, runs it, and explains the result.",
        command: "ask",
    },
    Feature {
        title: "Load test in one line",
        blurb: "Concurrent users and latency percentiles without writing a config file.",
        command: "perf",
    },
    Feature {
        title: "Scan for weak spots",
        blurb: "Security checks for headers, auth handling, and leaky error bodies.",
        command: "security",
    },
    Feature {
        title: "Watch your endpoints",
        blurb: "Scheduled health checks, with an AI read of the history in smart mode.",
        command: "monitor",
    },
    Feature {
        title: "Group calls into flows",
        blurb: "Save related requests together and replay them in order.",
        command: "flow run",
    },
    Feature {
        title: "Mock it till you make it",
        blurb: "Serve recorded responses from any flow while the real backend is still a sketch.",
        command: "flow mock",
    },
];
