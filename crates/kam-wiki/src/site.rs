// Copyright 2026 Kam Contributors
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Request-to-page pipeline.
//!
//! [`Site`] ties the router, the registry and the views together: it takes a
//! URL path (plus an optional search query) and returns a [`SiteResponse`]
//! that the HTTP server or the static exporter turns into output.

use crate::pages::{self, DEFAULT_APP_HTML};
use crate::registry;
use crate::router::{Page, Resolution, Router, BASE_TITLE};

/// Outcome of rendering a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SiteResponse {
    /// A full HTML document.
    Html {
        /// HTTP status code (200, or 404 for unknown commands).
        status: u16,
        /// The document title.
        title: String,
        /// The document, wrapped in the app shell.
        body: String,
    },
    /// Redirect to another location.
    Redirect {
        /// Target location.
        location: String,
    },
}

impl SiteResponse {
    /// HTTP status code of the response.
    pub fn status(&self) -> u16 {
        match self {
            SiteResponse::Html { status, .. } => *status,
            SiteResponse::Redirect { .. } => 302,
        }
    }
}

/// The documentation site: routing plus rendering.
pub struct Site {
    router: Router,
    title: String,
    app_html: String,
    head: String,
    static_search: bool,
}

impl Site {
    /// Creates a site served from `/` with the default title and shell.
    pub fn new() -> Self {
        Self::with_base("/")
    }

    /// Creates a site served under `base`.
    pub fn with_base(base: &str) -> Self {
        Self {
            router: Router::with_base(base),
            title: BASE_TITLE.to_string(),
            app_html: DEFAULT_APP_HTML.to_string(),
            head: String::new(),
            static_search: false,
        }
    }

    /// Sets the suffix appended to every document title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Replaces the app shell.
    pub fn with_app_html(mut self, app_html: impl Into<String>) -> Self {
        self.app_html = app_html.into();
        self
    }

    /// Sets extra markup injected at `%wiki.head%`.
    pub fn with_head(mut self, head: impl Into<String>) -> Self {
        self.head = head.into();
        self
    }

    /// Makes list pages load `search.js`, which filters the list from
    /// `commands.json` in the browser. Used for static exports, where the
    /// `q` parameter never reaches a server.
    pub fn with_static_search(mut self) -> Self {
        self.static_search = true;
        self
    }

    /// The router used to resolve paths.
    pub fn router(&self) -> &Router {
        &self.router
    }

    /// The base title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Resolves `path` and renders the matching page.
    ///
    /// `query` is the search text for list pages and is ignored elsewhere.
    pub fn respond(&self, path: &str, query: Option<&str>) -> SiteResponse {
        match self.router.resolve(path) {
            Resolution::Page(page) => self.render(&page, query.unwrap_or("")),
            Resolution::Redirect(location) => SiteResponse::Redirect { location },
        }
    }

    /// Renders a page directly.
    pub fn render(&self, page: &Page, query: &str) -> SiteResponse {
        let title = page.document_title(&self.title);
        let (status, body) = match page {
            Page::Home | Page::Commands => {
                let commands = registry::search(query);
                let mut body = pages::render_list(
                    &self.router,
                    page.route_name(),
                    query,
                    &commands,
                    registry::global_flags(),
                );
                if self.static_search {
                    body.push_str(&pages::search_script_tag(&self.router));
                }
                (200, body)
            }
            Page::Command { name } => match registry::find_by_name(name) {
                Some(command) => (200, pages::render_command(&self.router, command)),
                None => {
                    tracing::debug!("Unknown command requested: {:?}", name);
                    (404, pages::render_not_found(&self.router, name))
                }
            },
        };

        SiteResponse::Html {
            status,
            body: self.wrap(&body, &title),
            title,
        }
    }

    /// Renders the standalone "not found" page used for unknown URLs in
    /// static hosting.
    pub fn render_not_found(&self) -> String {
        let body = pages::render_not_found(&self.router, "");
        let title = format!("Not found | {}", self.title);
        self.wrap(&body, &title)
    }

    fn wrap(&self, body: &str, title: &str) -> String {
        pages::wrap_with_app_html(&self.app_html, body, title, &self.head, self.router.base())
    }
}

impl Default for Site {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn html(response: SiteResponse) -> (u16, String, String) {
        match response {
            SiteResponse::Html { status, title, body } => (status, title, body),
            other => panic!("Expected HTML, got {:?}", other),
        }
    }

    #[test]
    fn test_home_lists_every_command() {
        let site = Site::new();
        let (status, title, body) = html(site.respond("/", None));

        assert_eq!(status, 200);
        assert_eq!(title, "Home | Kam — Wiki");
        assert!(body.contains("<title>Home | Kam — Wiki</title>"));
        for name in registry::list_names() {
            assert!(body.contains(&format!("href=\"/command/{}\"", name)));
        }
    }

    #[test]
    fn test_commands_page_filters_by_query() {
        let site = Site::new();
        let (status, title, body) = html(site.respond("/commands", Some("KEYRING")));

        assert_eq!(status, 200);
        assert_eq!(title, "Commands | Kam — Wiki");
        assert!(body.contains("href=\"/command/secret\""));
        assert!(body.contains("href=\"/command/sign\""));
        assert!(!body.contains("href=\"/command/build\""));
    }

    #[test]
    fn test_command_page() {
        let site = Site::new();
        let (status, title, body) = html(site.respond("/command/Sign", None));

        assert_eq!(status, 200);
        assert_eq!(title, "Sign · Command | Kam — Wiki");
        assert!(body.contains("<h1><code>sign</code></h1>"));
    }

    #[test]
    fn test_unknown_command_is_not_found() {
        let site = Site::new();
        let (status, title, body) = html(site.respond("/command/nope", None));

        assert_eq!(status, 404);
        assert_eq!(title, "nope · Command | Kam — Wiki");
        assert!(body.contains("There is no command named <code>nope</code>"));
    }

    #[test]
    fn test_unknown_path_redirects() {
        let site = Site::with_base("/kam-wiki/");
        let response = site.respond("/kam-wiki/elsewhere", None);

        assert_eq!(response.status(), 302);
        assert_eq!(
            response,
            SiteResponse::Redirect {
                location: "/kam-wiki/".to_string()
            }
        );
    }

    #[test]
    fn test_custom_title_and_shell() {
        let site = Site::new()
            .with_title("Docs")
            .with_app_html("[%wiki.title%]%wiki.head%%wiki.body%")
            .with_head("<link rel=\"stylesheet\" href=\"/public/site.css\">");
        let (_, title, body) = html(site.respond("/commands", None));

        assert_eq!(title, "Commands | Docs");
        assert!(body.starts_with("[Commands | Docs]<link rel=\"stylesheet\""));
    }

    #[test]
    fn test_placeholder_in_path_stays_in_title() {
        let site = Site::new().with_head("<link rel=\"stylesheet\" href=\"/public/css/site.css\">");
        let (status, title, body) = html(site.respond("/command/%wiki.body%", None));

        assert_eq!(status, 404);
        assert_eq!(title, "%wiki.body% · Command | Kam — Wiki");
        assert!(body.contains("<title>%wiki.body% · Command | Kam — Wiki</title>"));
        assert_eq!(body.matches("<nav>").count(), 1);
        assert_eq!(body.matches("site.css").count(), 1);
    }

    #[test]
    fn test_encoded_command_name() {
        let site = Site::new();
        let (status, title, body) = html(site.respond("/command/bu%69ld", None));

        assert_eq!(status, 200);
        assert_eq!(title, "build · Command | Kam — Wiki");
        assert!(body.contains("<h1><code>build</code></h1>"));
    }

    #[test]
    fn test_static_search_script_on_list_pages_only() {
        let site = Site::with_base("/kam-wiki/").with_static_search();
        let script = "<script src=\"/kam-wiki/search.js\" defer></script>";

        let (_, _, home) = html(site.respond("/kam-wiki/", None));
        let (_, _, commands) = html(site.respond("/kam-wiki/commands", None));
        let (_, _, detail) = html(site.respond("/kam-wiki/command/init", None));
        assert!(home.contains(script));
        assert!(commands.contains(script));
        assert!(!detail.contains(script));

        let (_, _, served) = html(Site::new().respond("/commands", None));
        assert!(!served.contains("search.js"));
    }

    #[test]
    fn test_standalone_not_found() {
        let site = Site::new();
        let body = site.render_not_found();
        assert!(body.contains("<title>Not found | Kam — Wiki</title>"));
        assert!(body.contains("No command name was given."));
    }
}
