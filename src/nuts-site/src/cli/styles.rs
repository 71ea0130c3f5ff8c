//! CLI styling: colored help output and banners.

use clap::builder::styling::{AnsiColor, Effects, Styles};

/// Clap styles for help output.
pub fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .usage(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default() | Effects::BOLD)
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Banner shown above the main help.
pub const BEFORE_HELP: &str = color_print::cstr!(
    r#"<cyan,bold>
  ███╗   ██╗██╗   ██╗████████╗███████╗
  ████╗  ██║██║   ██║╚══██╔══╝██╔════╝
  ██╔██╗ ██║██║   ██║   ██║   ███████╗
  ██║╚██╗██║██║   ██║   ██║   ╚════██║
  ██║ ╚████║╚██████╔╝   ██║   ███████║
  ╚═╝  ╚═══╝ ╚═════╝    ╚═╝   ╚══════╝</>
        <dim>Network Universal Testing Suite - website generator</>"#
);

/// Sections shown below the main help.
pub const AFTER_HELP: &str = color_print::cstr!(
    r#"<cyan,bold>📚 QUICK START</>
    <green,bold>nuts-site build</>              Render every page into ./site
    <green,bold>nuts-site check</>              Validate the catalog and page copy
    <green,bold>nuts-site list flow</>          List the Flow commands
    <green,bold>nuts-site show c</>             Show a command, resolving aliases

<cyan,bold>🌍 ENVIRONMENT VARIABLES</>
    <yellow>NUTS_SITE_LOG</>       Log verbosity (error, warn, info, debug, trace)
    <yellow>NO_COLOR</>            Disable colored output

<cyan,bold>📁 OUTPUT</>
    <yellow>./site/</>             Default output directory
    <yellow>./nuts-site.toml</>    Optional config (out_dir, title, base_url)

<cyan,bold>🔗 LEARN MORE</>
    <cyan,underline>https://github.com/nutscli/nuts</>"#
);
