//! The landing-page terminal demo.
//!
//! An authored script of shell interactions, rendered two ways: colored
//! for the `nuts-site demo` preview and plain for HTML embedding. Every
//! step names the catalog command it showcases and rendering resolves
//! that name, so a renamed or removed command breaks the demo instead of
//! silently demoing something that no longer exists.

use nuts_catalog::Catalog;

use crate::ansi::{colors, maybe_color};
use crate::content;
use crate::site::{ContentIssue, PagesError};

/// Prompt shown before each typed line.
pub const DEMO_PROMPT: &str = "nuts> ";

/// One scripted interaction.
#[derive(Debug, Clone, Copy)]
pub struct DemoStep {
    /// Catalog command (or alias) this step showcases.
    pub command: &'static str,
    /// Line typed at the prompt. Must start with `command`.
    pub input: &'static str,
    /// Output lines shown beneath the input.
    pub output: &'static [&'static str],
}

/// The authored demo script, in play order.
pub const DEMO_SCRIPT: &[DemoStep] = &[
    DemoStep {
        command: "call",
        input: "call GET https://api.example.com/users",
        output: &[
            "200 OK",
            "[",
            "  { \"id\": 1, \"name\": \"Ada\" },",
            "  { \"id\": 2, \"name\": \"Grace\" }",
            "]",
        ],
    },
    DemoStep {
        command: "c",
        input: "c GET https://api.example.com/users/1",
        output: &["200 OK", "{ \"id\": 1, \"name\": \"Ada\" }"],
    },
    DemoStep {
        command: "ask",
        input: "ask \"is the users endpoint healthy?\"",
        output: &[
            "🤖 Translating to: call GET https://api.example.com/users",
            "200 OK",
        ],
    },
    DemoStep {
        command: "perf",
        input: "perf GET https://api.example.com/users --users 100 --duration 30s",
        output: &[
            "🚄 Running performance test...",
            "Requests: 2847   Errors: 0",
            "p95 latency: 184 ms",
        ],
    },
    DemoStep {
        command: "monitor",
        input: "monitor https://api.example.com/health --smart",
        output: &[
            "📊 Starting smart AI monitoring",
            "🔍 Health check #1: healthy (92 ms)",
            "🔍 Health check #2: healthy (88 ms)",
            "🔍 Health check #3: healthy (90 ms)",
            "🤖 AI analysis: response times stable, no action needed",
        ],
    },
    DemoStep {
        command: "flow run",
        input: "flow run my-api",
        output: &[
            "▶ 1/3  GET  /users     200 OK",
            "▶ 2/3  POST /users     201 Created",
            "▶ 3/3  GET  /users/42  200 OK",
        ],
    },
];

enum LineKind {
    Intro,
    Input,
    Output,
}

struct TranscriptLine {
    kind: LineKind,
    text: String,
}

fn transcript_lines(catalog: &Catalog) -> Result<Vec<TranscriptLine>, PagesError> {
    let mut lines = vec![
        TranscriptLine {
            kind: LineKind::Intro,
            text: format!("$ {}", content::BINARY_NAME),
        },
        TranscriptLine {
            kind: LineKind::Intro,
            text: format!(
                "🥜 {} - {} v{}",
                content::SITE_TITLE,
                content::SITE_SUBTITLE,
                content::TOOL_VERSION
            ),
        },
    ];
    for step in DEMO_SCRIPT {
        // Drift guard: the showcased command must still exist.
        catalog.resolve(step.command)?;
        lines.push(TranscriptLine {
            kind: LineKind::Input,
            text: step.input.to_string(),
        });
        for output in step.output {
            lines.push(TranscriptLine {
                kind: LineKind::Output,
                text: (*output).to_string(),
            });
        }
    }
    Ok(lines)
}

/// The demo as plain text, for HTML embedding.
pub fn render_demo_plain(catalog: &Catalog) -> Result<String, PagesError> {
    let mut out = String::new();
    for line in transcript_lines(catalog)? {
        if matches!(line.kind, LineKind::Input) {
            out.push_str(DEMO_PROMPT);
        }
        out.push_str(&line.text);
        out.push('\n');
    }
    Ok(out)
}

/// The demo with colors, for terminal preview.
///
/// Colorization is gated on `NO_COLOR` and TTY detection, so piping the
/// preview yields the plain form.
pub fn render_demo_ansi(catalog: &Catalog) -> Result<String, PagesError> {
    let mut out = String::new();
    for line in transcript_lines(catalog)? {
        match line.kind {
            LineKind::Intro => out.push_str(&maybe_color(&line.text, colors::DIM)),
            LineKind::Input => {
                out.push_str(&maybe_color(DEMO_PROMPT, colors::BOLD_CYAN));
                out.push_str(&maybe_color(&line.text, colors::BOLD));
            }
            LineKind::Output => out.push_str(&line.text),
        }
        out.push('\n');
    }
    Ok(out)
}

fn input_matches_command(step: &DemoStep) -> bool {
    step.input == step.command
        || step
            .input
            .strip_prefix(step.command)
            .is_some_and(|rest| rest.starts_with(' '))
}

/// Check every step against the catalog without rendering.
pub fn verify_demo(catalog: &Catalog) -> Vec<ContentIssue> {
    let mut issues = Vec::new();
    for step in DEMO_SCRIPT {
        if catalog.resolve(step.command).is_err() {
            issues.push(ContentIssue::UnknownDemoCommand {
                command: step.command.to_string(),
            });
        }
        if !input_matches_command(step) {
            issues.push(ContentIssue::DemoInputMismatch {
                command: step.command.to_string(),
                input: step.input.to_string(),
            });
        }
    }
    issues
}
