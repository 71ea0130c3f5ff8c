//! The README page.
//!
//! Markdown built from the catalog plus the authored copy in
//! [`content`](crate::content). `render_site` ships the raw Markdown as
//! `README.md` and an HTML conversion of the same string as
//! `readme.html`.

use nuts_catalog::{Catalog, Category, CommandEntry, monitoring};

use crate::content;
use crate::demo::DEMO_PROMPT;
use crate::site::PagesError;

// GFM tables split cells on '|' even inside code spans.
fn table_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

fn command_cell(catalog: &Catalog, entry: &CommandEntry) -> String {
    let aliases = catalog.aliases_of(entry.name);
    if aliases.is_empty() {
        return format!("`{}`", entry.name);
    }
    let joined = aliases
        .iter()
        .map(|alias| format!("`{alias}`"))
        .collect::<Vec<_>>()
        .join(", ");
    let label = if aliases.len() == 1 { "alias" } else { "aliases" };
    format!("`{}` ({label}: {joined})", entry.name)
}

/// The README page as Markdown.
pub fn readme_markdown(catalog: &Catalog) -> Result<String, PagesError> {
    let mut md = String::new();

    md.push_str(&format!("# {}\n\n", content::SITE_TITLE));
    md.push_str(&format!(
        "**{}.** {}\n\n",
        content::SITE_SUBTITLE,
        content::SITE_TAGLINE
    ));

    md.push_str("## Install\n\n");
    md.push_str(&format!("```sh\n{}\n```\n\n", content::INSTALL_COMMAND));
    let api_key = catalog.resolve("config api-key")?;
    md.push_str(&format!(
        "The AI commands need an Anthropic API key: run `{}` inside the shell.\n\n",
        api_key.name
    ));

    md.push_str("## Quick start\n\n```sh\n");
    md.push_str(&format!("$ {}\n", content::BINARY_NAME));
    for name in ["call", "perf", "security"] {
        let entry = catalog.resolve(name)?;
        md.push_str(&format!("{DEMO_PROMPT}{}\n", entry.example));
    }
    md.push_str("```\n\n");

    md.push_str("## Commands\n\n");
    for category in Category::ALL {
        md.push_str(&format!("### {}\n\n", category.display_name()));
        md.push_str("| Command | Syntax | Description |\n");
        md.push_str("| --- | --- | --- |\n");
        for entry in catalog.commands_in(category).filter(|e| !e.is_alias()) {
            md.push_str(&format!(
                "| {} | `{}` | {} |\n",
                command_cell(catalog, entry),
                table_cell(entry.syntax),
                table_cell(entry.description)
            ));
        }
        md.push('\n');
    }

    md.push_str("## Options\n\n");
    md.push_str("| Flag | Applies to | Effect |\n");
    md.push_str("| --- | --- | --- |\n");
    for option in catalog.options() {
        let applies = option
            .applies_to
            .iter()
            .map(|name| format!("`{name}`"))
            .collect::<Vec<_>>()
            .join(", ");
        md.push_str(&format!(
            "| `{}` | {applies} | {} |\n",
            option.flag,
            table_cell(option.effect)
        ));
    }
    md.push('\n');

    md.push_str("## Monitoring\n\n");
    let monitor = catalog.resolve("monitor")?;
    md.push_str(&format!(
        "The `{}` command watches an endpoint on a fixed schedule:\n\n",
        monitor.name
    ));
    for profile in monitoring::profiles() {
        let mode = profile.mode.display_name();
        let base = profile.base_interval_seconds;
        match (
            profile.ai_analysis_every_n_checks,
            profile.effective_ai_interval_seconds(),
        ) {
            (Some(n), Some(effective)) => md.push_str(&format!(
                "- **{mode}**: health checks every {base} seconds, plus AI analysis \
                 every {n} checks (one analysis every {effective} seconds).\n"
            )),
            _ => md.push_str(&format!(
                "- **{mode}**: health checks every {base} seconds.\n"
            )),
        }
    }
    md.push('\n');

    md.push_str("## License\n\nMIT\n");
    Ok(md)
}
