//! HTML rendering: Markdown conversion, the shared page shell, and the
//! landing page.

use nuts_catalog::{Catalog, monitoring};
use pulldown_cmark::{Options, Parser};

use crate::ansi::strip_ansi_codes;
use crate::content;
use crate::demo::render_demo_plain;
use crate::site::{PagesError, SiteMeta};

/// Convert page Markdown to an HTML fragment.
pub fn markdown_to_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    let parser = Parser::new_ext(markdown, options);
    let mut html = String::new();
    pulldown_cmark::html::push_html(&mut html, parser);
    html
}

pub(crate) fn html_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

const STYLE: &str = "\
:root { color-scheme: light dark; }
body { max-width: 56rem; margin: 0 auto; padding: 1rem; font-family: system-ui, sans-serif; line-height: 1.5; }
nav a { margin-right: 1rem; }
pre { background: #14161a; color: #e6e6e6; padding: 1rem; border-radius: 6px; overflow-x: auto; }
code { font-family: ui-monospace, monospace; }
table { border-collapse: collapse; }
th, td { border: 1px solid #8884; padding: 0.3rem 0.6rem; text-align: left; }
.hero { text-align: center; }
footer { margin-top: 2rem; font-size: 0.9rem; opacity: 0.7; }
";

/// Wrap a body fragment in the shared page chrome.
pub(crate) fn page_shell(meta: &SiteMeta, page_title: &str, file_name: &str, body: &str) -> String {
    let canonical = match meta.base_url.as_deref() {
        Some(base) => format!(
            "  <link rel=\"canonical\" href=\"{}/{file_name}\">\n",
            base.trim_end_matches('/')
        ),
        None => String::new(),
    };
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         \x20 <meta charset=\"utf-8\">\n\
         \x20 <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         \x20 <title>{title} - {site}</title>\n\
         {canonical}\
         \x20 <style>\n{STYLE}  </style>\n\
         </head>\n\
         <body>\n\
         <nav><a href=\"index.html\">Home</a><a href=\"readme.html\">README</a><a href=\"docs.html\">Docs</a></nav>\n\
         {body}\n\
         <footer><a href=\"{repo}\">{site} on GitHub</a></footer>\n\
         </body>\n\
         </html>\n",
        title = html_escape(page_title),
        site = html_escape(&meta.title),
        repo = content::REPO_URL,
    )
}

/// The landing page: hero, terminal demo, feature cards, monitoring.
pub fn landing_page(catalog: &Catalog, meta: &SiteMeta) -> Result<String, PagesError> {
    // Authored output lines must not leak escape codes into the page
    let demo = strip_ansi_codes(&render_demo_plain(catalog)?);

    let mut body = String::new();
    body.push_str(&format!(
        "<header class=\"hero\">\n\
         \x20 <h1>🥜 {}</h1>\n\
         \x20 <p class=\"subtitle\">{}</p>\n\
         \x20 <p class=\"tagline\">{}</p>\n\
         \x20 <pre class=\"install\"><code>{}</code></pre>\n\
         </header>\n",
        html_escape(&meta.title),
        html_escape(content::SITE_SUBTITLE),
        html_escape(content::SITE_TAGLINE),
        html_escape(content::INSTALL_COMMAND),
    ));

    body.push_str(&format!(
        "<section class=\"demo\">\n\
         \x20 <h2>See it run</h2>\n\
         \x20 <pre class=\"terminal\">{}</pre>\n\
         </section>\n",
        html_escape(&demo)
    ));

    body.push_str("<section class=\"features\">\n  <h2>Features</h2>\n");
    for feature in content::FEATURES {
        let entry = catalog.resolve(feature.command)?;
        body.push_str(&format!(
            "  <div class=\"feature\">\n\
             \x20   <h3>{}</h3>\n\
             \x20   <p>{}</p>\n\
             \x20   <p><code>{}</code></p>\n\
             \x20 </div>\n",
            html_escape(feature.title),
            html_escape(feature.blurb),
            html_escape(entry.syntax),
        ));
    }
    body.push_str("</section>\n");

    body.push_str("<section class=\"monitoring\">\n  <h2>Always watching</h2>\n");
    for profile in monitoring::profiles() {
        let mode = profile.mode.display_name();
        let base = profile.base_interval_seconds;
        let sentence = match (
            profile.ai_analysis_every_n_checks,
            profile.effective_ai_interval_seconds(),
        ) {
            (Some(n), Some(effective)) => format!(
                "  <p><strong>{mode} mode</strong>: health checks every {base} seconds, \
                 with an AI analysis every {n} checks (every {effective} seconds).</p>\n"
            ),
            _ => format!(
                "  <p><strong>{mode} mode</strong>: health checks every {base} seconds.</p>\n"
            ),
        };
        body.push_str(&sentence);
    }
    body.push_str("</section>\n");

    Ok(page_shell(
        meta,
        content::SITE_SUBTITLE,
        "index.html",
        &body,
    ))
}
