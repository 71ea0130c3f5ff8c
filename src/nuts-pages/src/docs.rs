//! The documentation page.
//!
//! One section per canonical command, with its syntax, example, aliases,
//! and applicable options, followed by the monitoring profiles. Entirely
//! derived from the catalog.

use nuts_catalog::{Catalog, Category, monitoring};

use crate::content;
use crate::site::PagesError;

/// The documentation page as Markdown.
pub fn docs_markdown(catalog: &Catalog) -> Result<String, PagesError> {
    let mut md = String::new();

    md.push_str(&format!("# {} Command Reference\n\n", content::SITE_TITLE));
    let help = catalog.resolve("help")?;
    md.push_str(&format!(
        "Every command in the {} shell. Commands are case-insensitive; run \
         `{}` inside the shell for this list at any time.\n\n",
        content::SITE_TITLE,
        help.name
    ));

    for category in Category::ALL {
        md.push_str(&format!("## {}\n\n", category.display_name()));
        for entry in catalog.commands_in(category).filter(|e| !e.is_alias()) {
            md.push_str(&format!("### `{}`\n\n", entry.name));
            md.push_str(&format!("{}\n\n", entry.description));
            md.push_str(&format!("**Syntax:** `{}`\n\n", entry.syntax));
            md.push_str(&format!("**Example:** `{}`\n\n", entry.example));

            let aliases = catalog.aliases_of(entry.name);
            if !aliases.is_empty() {
                let joined = aliases
                    .iter()
                    .map(|alias| format!("`{alias}`"))
                    .collect::<Vec<_>>()
                    .join(", ");
                md.push_str(&format!("**Aliases:** {joined}\n\n"));
            }

            let options = catalog.options_for(entry.name);
            if !options.is_empty() {
                md.push_str("**Options:**\n\n");
                for option in options {
                    md.push_str(&format!("- `{}`: {}\n", option.flag, option.effect));
                }
                md.push('\n');
            }
        }
    }

    md.push_str("## Monitoring\n\n");
    let monitor = catalog.resolve("monitor")?;
    md.push_str(&format!(
        "`{}` runs in one of two modes:\n\n",
        monitor.name
    ));
    md.push_str("| Mode | Check interval | AI analysis |\n");
    md.push_str("| --- | --- | --- |\n");
    for profile in monitoring::profiles() {
        let cadence = match (
            profile.ai_analysis_every_n_checks,
            profile.effective_ai_interval_seconds(),
        ) {
            (Some(n), Some(effective)) => {
                format!("every {n} checks (every {effective} s)")
            }
            _ => "none".to_string(),
        };
        md.push_str(&format!(
            "| {} | every {} s | {cadence} |\n",
            profile.mode.display_name(),
            profile.base_interval_seconds
        ));
    }

    Ok(md)
}
