// Copyright 2026 Kam Contributors
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! URL routing for the documentation site.
//!
//! The route table is fixed:
//! - `/` → Home (command list)
//! - `/commands` → Commands (command list)
//! - `/command/{name}` → Command detail page
//! - anything else → redirect to `/`
//!
//! Paths are matched relative to a base path so the site can be served
//! from a sub-directory (e.g. `/kam-wiki/` on GitHub Pages).

use percent_encoding::percent_decode_str;

/// Suffix shared by every document title.
pub const BASE_TITLE: &str = "Kam — Wiki";

/// A page the site can render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    /// Landing page with the command list.
    Home,
    /// Command list.
    Commands,
    /// Detail page for the command named by the path segment.
    Command {
        /// The percent-decoded `name` path segment.
        name: String,
    },
}

impl Page {
    /// Name of the route this page is served by.
    pub fn route_name(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Commands => "Commands",
            Page::Command { .. } => "Command",
        }
    }

    /// Builds the document title for this page.
    ///
    /// Command pages use the requested name (`build · Command | Kam — Wiki`),
    /// other pages use their route title (`Home | Kam — Wiki`).
    pub fn document_title(&self, base_title: &str) -> String {
        match self {
            Page::Command { name } if !name.is_empty() => {
                format!("{} · Command | {}", name, base_title)
            }
            Page::Command { .. } => format!("Command | {}", base_title),
            _ => format!("{} | {}", self.route_name(), base_title),
        }
    }
}

/// Outcome of resolving a URL path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The path maps to a page.
    Page(Page),
    /// The path is unknown; send the client to this location instead.
    Redirect(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RouteKind {
    Home,
    Commands,
    Command,
}

/// A registered route.
#[derive(Debug, Clone)]
pub struct Route {
    /// The URL pattern in matchit format (e.g. `/command/{name}`).
    pub pattern: &'static str,
    /// Route name (`Home`, `Commands`, `Command`).
    pub name: &'static str,
    kind: RouteKind,
}

const ROUTES: [Route; 3] = [
    Route { pattern: "/", name: "Home", kind: RouteKind::Home },
    Route { pattern: "/commands", name: "Commands", kind: RouteKind::Commands },
    Route { pattern: "/command/{name}", name: "Command", kind: RouteKind::Command },
];

/// The router that maps URL paths to pages.
pub struct Router {
    /// matchit router for fast URL matching
    matcher: matchit::Router<usize>,

    /// All registered routes (indexed by matcher)
    routes: Vec<Route>,

    /// Normalized base path, always starting and ending with `/`
    base: String,
}

impl Router {
    /// Creates a router serving from the site root.
    pub fn new() -> Self {
        Self::with_base("/")
    }

    /// Creates a router serving under `base` (e.g. `/kam-wiki/`).
    pub fn with_base(base: &str) -> Self {
        let mut matcher = matchit::Router::new();
        for (index, route) in ROUTES.iter().enumerate() {
            if let Err(e) = matcher.insert(route.pattern, index) {
                tracing::warn!("Could not register route {}: {}", route.pattern, e);
            }
        }

        Self {
            matcher,
            routes: ROUTES.to_vec(),
            base: normalize_base(base),
        }
    }

    /// The normalized base path.
    pub fn base(&self) -> &str {
        &self.base
    }

    /// All registered routes.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Resolves a request path to a page, or to a redirect when no route
    /// matches. Never fails.
    pub fn resolve(&self, path: &str) -> Resolution {
        let Some(relative) = self.strip_base(path) else {
            tracing::debug!("{} is outside base {}, redirecting", path, self.base);
            return Resolution::Redirect(self.base.clone());
        };

        let normalized = if relative.is_empty() || relative == "/" {
            "/"
        } else {
            relative.trim_end_matches('/')
        };

        match self.matcher.at(normalized) {
            Ok(matched) => {
                let page = match self.routes[*matched.value].kind {
                    RouteKind::Home => Page::Home,
                    RouteKind::Commands => Page::Commands,
                    RouteKind::Command => Page::Command {
                        name: decode_segment(matched.params.get("name").unwrap_or_default()),
                    },
                };
                tracing::debug!("{} -> {}", path, page.route_name());
                Resolution::Page(page)
            }
            Err(_) => {
                tracing::debug!("No route for {}, redirecting to {}", path, self.base);
                Resolution::Redirect(self.base.clone())
            }
        }
    }

    /// Builds the link for a page, including the base path.
    pub fn href(&self, page: &Page) -> String {
        match page {
            Page::Home => self.base.clone(),
            Page::Commands => format!("{}commands", self.base),
            Page::Command { name } => format!("{}command/{}", self.base, name),
        }
    }

    /// Returns the path relative to the base, keeping its leading `/`.
    fn strip_base<'a>(&self, path: &'a str) -> Option<&'a str> {
        if self.base == "/" {
            return Some(path);
        }
        let prefix = &self.base[..self.base.len() - 1];
        let rest = path.strip_prefix(prefix)?;
        if rest.is_empty() || rest.starts_with('/') {
            Some(rest)
        } else {
            None
        }
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

/// Percent-decodes a path segment. Invalid UTF-8 is replaced, malformed
/// escapes are kept as written.
fn decode_segment(segment: &str) -> String {
    percent_decode_str(segment).decode_utf8_lossy().into_owned()
}

/// Normalizes a base path so it starts and ends with `/`.
pub fn normalize_base(base: &str) -> String {
    let trimmed = base.trim().trim_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        format!("/{}/", trimmed)
    }
}
