//! Page renderers for the NUTS website.
//!
//! Every page reads the command catalog from `nuts-catalog`; the only
//! text authored here is brand copy and the demo script, and every
//! command those reference is checked against the catalog. Rendering is
//! pure: no I/O, no caches, the same catalog in gives the same pages
//! out.

pub mod ansi;
pub mod content;
pub mod demo;
pub mod docs;
pub mod html;
pub mod readme;
pub mod site;

// Re-export the types the CLI uses most.
pub use demo::{DEMO_PROMPT, DEMO_SCRIPT, DemoStep, render_demo_ansi, render_demo_plain};
pub use site::{
    ContentIssue, PagesError, RenderedPage, SiteMeta, render_site, verify_content,
};
