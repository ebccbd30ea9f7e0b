// Copyright 2026 Kam Contributors
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! HTML views for the command list and command detail pages.
//!
//! Views render body fragments only; [`wrap_with_app_html`] places a
//! fragment inside the app shell. A shell is any HTML document containing
//! these placeholders:
//!
//! - `%wiki.title%` → document title
//! - `%wiki.head%` → extra `<head>` content (stylesheets, scripts)
//! - `%wiki.base%` → base path of the site
//! - `%wiki.body%` → rendered page

use crate::registry::{Command, CommandFlag};
use crate::router::{Page, Router};

/// Built-in app shell used when no `app.html` is configured.
pub const DEFAULT_APP_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>%wiki.title%</title>
    <base href="%wiki.base%">
    <style>
        body { font-family: system-ui, sans-serif; max-width: 56rem; margin: 0 auto; padding: 2rem; }
        nav a { margin-right: 1rem; }
        dt { font-family: monospace; font-weight: bold; }
        pre, code { background: #f4f4f5; border-radius: 4px; }
        pre { padding: 0.75rem; overflow-x: auto; }
        .summary { color: #52525b; }
        .not-found { border-left: 4px solid #e94560; padding-left: 1rem; }
    </style>
    %wiki.head%
</head>
<body>
    %wiki.body%
</body>
</html>
"#;

/// Escapes text for use in HTML content and attribute values.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Wraps a rendered body with the app shell.
///
/// Placeholders are substituted in a single pass over `app_html`, so
/// placeholder text inside the title or body is left as it is.
pub fn wrap_with_app_html(
    app_html: &str,
    body: &str,
    title: &str,
    head: &str,
    base: &str,
) -> String {
    const PREFIX: &str = "%wiki.";

    let title = html_escape(title);
    let base = html_escape(base);
    let values = [
        ("%wiki.title%", title.as_str()),
        ("%wiki.head%", head),
        ("%wiki.base%", base.as_str()),
        ("%wiki.body%", body),
    ];

    let mut out = String::with_capacity(app_html.len() + body.len() + head.len());
    let mut rest = app_html;
    while let Some(start) = rest.find(PREFIX) {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        match values.iter().find(|(placeholder, _)| tail.starts_with(*placeholder)) {
            Some((placeholder, value)) => {
                out.push_str(value);
                rest = &tail[placeholder.len()..];
            }
            None => {
                out.push_str(PREFIX);
                rest = &tail[PREFIX.len()..];
            }
        }
    }
    out.push_str(rest);
    out
}

/// Script tag loading the client-side search of a static export.
pub fn search_script_tag(router: &Router) -> String {
    format!(
        "<script src=\"{}search.js\" defer></script>\n",
        html_escape(router.base())
    )
}

fn nav(router: &Router) -> String {
    format!(
        "<nav><a href=\"{}\">Home</a><a href=\"{}\">Commands</a></nav>\n",
        html_escape(&router.href(&Page::Home)),
        html_escape(&router.href(&Page::Commands)),
    )
}

fn flags_list(out: &mut String, flags: &[CommandFlag]) {
    out.push_str("<dl class=\"flags\">\n");
    for flag in flags {
        out.push_str(&format!("  <dt>{}</dt>\n", html_escape(flag.flag)));
        if let Some(description) = flag.description {
            out.push_str(&format!("  <dd>{}</dd>\n", html_escape(description)));
        }
    }
    out.push_str("</dl>\n");
}

/// Renders the command list with a search form.
///
/// `commands` is expected to be the result of searching for `query`.
pub fn render_list(
    router: &Router,
    heading: &str,
    query: &str,
    commands: &[&Command],
    global_flags: &[CommandFlag],
) -> String {
    let mut out = nav(router);
    out.push_str(&format!("<h1>{}</h1>\n", html_escape(heading)));
    out.push_str(&format!(
        "<form class=\"search\" method=\"get\" action=\"{}\">\
         <input type=\"search\" name=\"q\" value=\"{}\" placeholder=\"Search commands\">\
         <button type=\"submit\">Search</button></form>\n",
        html_escape(&router.href(&Page::Commands)),
        html_escape(query),
    ));

    if commands.is_empty() {
        out.push_str(&format!(
            "<p class=\"empty\">No commands match \u{201c}{}\u{201d}.</p>\n",
            html_escape(query.trim())
        ));
    } else {
        out.push_str("<ul class=\"commands\">\n");
        for command in commands {
            let href = router.href(&Page::Command {
                name: command.name.to_string(),
            });
            out.push_str(&format!(
                "  <li data-name=\"{name}\"><a href=\"{}\"><code>{name}</code></a> <span class=\"summary\">{}</span></li>\n",
                html_escape(&href),
                html_escape(command.summary),
                name = html_escape(command.name),
            ));
        }
        out.push_str("</ul>\n");
    }

    if !global_flags.is_empty() {
        out.push_str("<h2>Global flags</h2>\n");
        flags_list(&mut out, global_flags);
    }

    out
}

/// Renders the detail page of a command. Absent sections are left out.
pub fn render_command(router: &Router, command: &Command) -> String {
    let mut out = nav(router);
    out.push_str(&format!("<h1><code>{}</code></h1>\n", html_escape(command.name)));
    out.push_str(&format!(
        "<p class=\"summary\">{}</p>\n",
        html_escape(command.summary)
    ));

    if let Some(usage) = command.usage {
        out.push_str("<h2>Usage</h2>\n");
        out.push_str(&format!("<pre><code>{}</code></pre>\n", html_escape(usage)));
    }

    if let Some(description) = command.description {
        out.push_str("<h2>Description</h2>\n");
        out.push_str(&format!("<p>{}</p>\n", html_escape(description)));
    }

    let flags = command.flags();
    if !flags.is_empty() {
        out.push_str("<h2>Flags</h2>\n");
        flags_list(&mut out, flags);
    }

    let examples = command.examples();
    if !examples.is_empty() {
        out.push_str("<h2>Examples</h2>\n");
        for example in examples {
            out.push_str(&format!("<pre><code>{}</code></pre>\n", html_escape(example)));
        }
    }

    out
}

/// Renders the "not found" state for an unknown command name.
pub fn render_not_found(router: &Router, name: &str) -> String {
    let mut out = nav(router);
    out.push_str("<div class=\"not-found\">\n");
    out.push_str("<h1>Command not found</h1>\n");
    if name.trim().is_empty() {
        out.push_str("<p>No command name was given.</p>\n");
    } else {
        out.push_str(&format!(
            "<p>There is no command named <code>{}</code>.</p>\n",
            html_escape(name)
        ));
    }
    out.push_str(&format!(
        "<p><a href=\"{}\">Back to all commands</a></p>\n",
        html_escape(&router.href(&Page::Commands))
    ));
    out.push_str("</div>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry;

    #[test]
    fn test_html_escape() {
        assert_eq!(
            html_escape(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_wrap_with_app_html() {
        let html = wrap_with_app_html(
            "<title>%wiki.title%</title>%wiki.head%<base href=\"%wiki.base%\">%wiki.body%",
            "<p>body</p>",
            "A & B",
            "<link>",
            "/docs/",
        );
        assert_eq!(
            html,
            "<title>A &amp; B</title><link><base href=\"/docs/\"><p>body</p>"
        );
    }

    #[test]
    fn test_wrap_leaves_placeholders_in_values_alone() {
        let html = wrap_with_app_html(
            "<title>%wiki.title%</title>%wiki.head%|%wiki.body%|%wiki.other%",
            "<p>%wiki.title%</p>",
            "%wiki.body% %wiki.head%",
            "<link>",
            "/",
        );
        assert_eq!(
            html,
            "<title>%wiki.body% %wiki.head%</title><link>|<p>%wiki.title%</p>|%wiki.other%"
        );
    }

    #[test]
    fn test_search_script_tag_uses_base() {
        assert_eq!(
            search_script_tag(&Router::with_base("/kam-wiki/")),
            "<script src=\"/kam-wiki/search.js\" defer></script>\n"
        );
    }

    #[test]
    fn test_render_command_with_flags_and_examples() {
        let router = Router::new();
        let init = registry::find_by_name("init").unwrap();
        let html = render_command(&router, init);

        assert!(html.contains("<h1><code>init</code></h1>"));
        assert!(html.contains("<h2>Usage</h2>"));
        assert!(html.contains("kam init [-i|--interactive] [TEMPLATE] [OPTIONS]"));
        assert!(html.contains("<dt>-i, --interactive</dt>"));
        assert!(html.contains("kam init kernel/basic"));
        assert!(html.contains("kam init meta/sample-template"));
    }

    #[test]
    fn test_render_command_skips_missing_sections() {
        let router = Router::new();
        let build = registry::find_by_name("build").unwrap();
        let html = render_command(&router, build);

        assert!(html.contains("<h2>Description</h2>"));
        assert!(!html.contains("<h2>Flags</h2>"));
        assert!(!html.contains("<h2>Examples</h2>"));
    }

    #[test]
    fn test_render_list_links_under_base() {
        let router = Router::with_base("/kam-wiki/");
        let commands = registry::search("");
        let html = render_list(&router, "Commands", "", &commands, registry::global_flags());

        assert!(html.contains("href=\"/kam-wiki/command/init\""));
        assert!(html.contains("href=\"/kam-wiki/command/help\""));
        assert!(html.contains("<li data-name=\"init\">"));
        assert!(html.contains("<h2>Global flags</h2>"));
        assert!(html.contains("<dt>-V, --version</dt>"));
    }

    #[test]
    fn test_render_list_empty_result() {
        let router = Router::new();
        let html = render_list(&router, "Commands", "<zzz>", &[], &[]);

        assert!(html.contains("No commands match"));
        assert!(html.contains("&lt;zzz&gt;"));
        assert!(!html.contains("<ul"));
    }

    #[test]
    fn test_render_not_found() {
        let router = Router::new();
        let html = render_not_found(&router, "<script>");

        assert!(html.contains("Command not found"));
        assert!(html.contains("<code>&lt;script&gt;</code>"));
        assert!(!html.contains("<script>"));
        assert!(html.contains("href=\"/commands\""));
    }
}
