// Copyright 2026 Kam Contributors
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! kam-wiki site configuration.
//!
//! Configuration is loaded from `kam-wiki.toml` at the project root. Every
//! section and key is optional.
//!
//! # Example Configuration
//!
//! ```toml
//! [site]
//! title = "Kam — Wiki"
//! base = "/"
//! app_html = "src/app.html"
//!
//! [serve]
//! host = "127.0.0.1"
//! port = 3000
//! public_dir = "public"
//!
//! [build]
//! output_dir = "dist"
//! ```
//!
//! # Base Path
//!
//! The base path the site is deployed under is taken from, in order:
//! the `KAM_WIKI_BASE` environment variable, `site.base` when it is not
//! `/`, the repository name in `GITHUB_REPOSITORY` (for GitHub Pages
//! project sites), and finally `/`.

use kam_wiki::router::normalize_base;
use kam_wiki::{Site, BASE_TITLE};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// File name of the configuration file.
pub const CONFIG_FILE: &str = "kam-wiki.toml";

/// Environment variable overriding the base path.
pub const BASE_ENV: &str = "KAM_WIKI_BASE";

/// Main configuration structure loaded from `kam-wiki.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Site-wide settings (title, base path, shell).
    #[serde(default)]
    pub site: SiteConfig,
    /// HTTP server settings.
    #[serde(default)]
    pub serve: ServeConfig,
    /// Static export settings.
    #[serde(default)]
    pub build: BuildConfig,
}

/// Site-wide settings.
#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    /// Suffix of every document title (default: "Kam — Wiki").
    #[serde(default = "default_title")]
    pub title: String,
    /// Base path the site is served under (default: "/").
    #[serde(default = "default_base")]
    pub base: String,
    /// HTML shell template path (default: "src/app.html").
    #[serde(default = "default_app_html")]
    pub app_html: String,
}

/// HTTP server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServeConfig {
    /// Server host (default: "127.0.0.1").
    #[serde(default = "default_host")]
    pub host: String,
    /// Server port (default: 3000).
    #[serde(default = "default_port")]
    pub port: u16,
    /// Public assets directory (default: "public").
    #[serde(default = "default_public_dir")]
    pub public_dir: String,
}

/// Static export configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct BuildConfig {
    /// Output directory for exported files (default: "dist").
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
}

fn default_title() -> String {
    BASE_TITLE.to_string()
}

fn default_base() -> String {
    "/".to_string()
}

fn default_app_html() -> String {
    "src/app.html".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_public_dir() -> String {
    "public".to_string()
}

fn default_output_dir() -> String {
    "dist".to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            base: default_base(),
            app_html: default_app_html(),
        }
    }
}

impl Default for ServeConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            public_dir: default_public_dir(),
        }
    }
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
        }
    }
}

impl Config {
    /// Loads configuration from `kam-wiki.toml` in the current directory.
    ///
    /// If no configuration file exists, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file exists but cannot be parsed.
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    /// Loads configuration from `path`, falling back to defaults when the
    /// file does not exist.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            tracing::debug!("No {} found, using defaults", path.display());
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }

    /// Resolves the base path from the environment and `site.base`.
    pub fn base(&self) -> String {
        resolve_base(
            std::env::var(BASE_ENV).ok().as_deref(),
            &self.site.base,
            std::env::var("GITHUB_REPOSITORY").ok().as_deref(),
        )
    }

    /// Builds the [`Site`] described by this configuration.
    ///
    /// The app shell is read from `site.app_html` when it exists; stylesheets
    /// and scripts under `public_dir/css` and `public_dir/js` are linked
    /// into every page.
    pub fn site(&self) -> Site {
        let base = self.base();
        let mut site = Site::with_base(&base)
            .with_title(self.site.title.clone())
            .with_head(collect_head_assets(Path::new(&self.serve.public_dir), &base));

        let app_html_path = Path::new(&self.site.app_html);
        if app_html_path.exists() {
            match fs::read_to_string(app_html_path) {
                Ok(content) => {
                    tracing::info!("Loaded HTML shell from {}", app_html_path.display());
                    site = site.with_app_html(content);
                }
                Err(e) => {
                    tracing::warn!("Could not load {}: {}", app_html_path.display(), e);
                }
            }
        }

        site
    }
}

/// Picks the base path: explicit override, configured value, then the
/// GitHub repository name (`owner/repo` → `/repo/`).
pub fn resolve_base(env_override: Option<&str>, configured: &str, github_repository: Option<&str>) -> String {
    if let Some(base) = env_override.filter(|b| !b.trim().is_empty()) {
        return normalize_base(base);
    }

    let configured = normalize_base(configured);
    if configured != "/" {
        return configured;
    }

    github_repository
        .and_then(|repo| repo.split('/').nth(1))
        .filter(|name| !name.is_empty())
        .map(normalize_base)
        .unwrap_or(configured)
}

/// Collect head assets (CSS and JS files from the public directory)
fn collect_head_assets(public_dir: &Path, base: &str) -> String {
    let mut head = String::new();

    for (sub_dir, extension) in [("css", "css"), ("js", "js")] {
        let Ok(entries) = fs::read_dir(public_dir.join(sub_dir)) else {
            continue;
        };

        let mut names: Vec<String> = entries
            .flatten()
            .filter_map(|entry| entry.file_name().to_str().map(str::to_string))
            .filter(|name| name.ends_with(&format!(".{}", extension)))
            .collect();
        names.sort();

        for name in names {
            if extension == "css" {
                head.push_str(&format!(
                    "    <link rel=\"stylesheet\" href=\"{}public/css/{}\">\n",
                    base, name
                ));
            } else {
                head.push_str(&format!(
                    "    <script src=\"{}public/js/{}\" defer></script>\n",
                    base, name
                ));
            }
        }
    }

    head
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.site.title, "Kam — Wiki");
        assert_eq!(config.site.base, "/");
        assert_eq!(config.serve.port, 3000);
        assert_eq!(config.serve.host, "127.0.0.1");
        assert_eq!(config.build.output_dir, "dist");
    }

    #[test]
    fn test_partial_toml() {
        let config = Config::from_toml(
            r#"
[site]
title = "Kam Docs"

[serve]
port = 8080
"#,
        )
        .unwrap();

        assert_eq!(config.site.title, "Kam Docs");
        assert_eq!(config.site.app_html, "src/app.html");
        assert_eq!(config.serve.port, 8080);
        assert_eq!(config.serve.public_dir, "public");
        assert_eq!(config.build.output_dir, "dist");
    }

    #[test]
    fn test_invalid_toml() {
        assert!(Config::from_toml("[serve]\nport = \"not a number\"").is_err());
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = Config::load_from(Path::new("/definitely/not/here/kam-wiki.toml")).unwrap();
        assert_eq!(config.serve.port, 3000);
    }

    #[test]
    fn test_resolve_base() {
        assert_eq!(resolve_base(None, "/", None), "/");
        assert_eq!(resolve_base(None, "docs", None), "/docs/");
        assert_eq!(resolve_base(None, "/", Some("kam-dev/kam-wiki")), "/kam-wiki/");
        assert_eq!(resolve_base(None, "/docs/", Some("kam-dev/kam-wiki")), "/docs/");
        assert_eq!(resolve_base(Some("/x"), "/docs/", Some("kam-dev/kam-wiki")), "/x/");
        assert_eq!(resolve_base(Some("  "), "/", None), "/");
        assert_eq!(resolve_base(None, "/", Some("no-slash")), "/");
    }

    #[test]
    fn test_collect_head_assets() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("css")).unwrap();
        fs::create_dir_all(dir.path().join("js")).unwrap();
        fs::write(dir.path().join("css/site.css"), "body {}").unwrap();
        fs::write(dir.path().join("css/notes.txt"), "").unwrap();
        fs::write(dir.path().join("js/search.js"), "").unwrap();

        let head = collect_head_assets(dir.path(), "/docs/");
        assert!(head.contains("<link rel=\"stylesheet\" href=\"/docs/public/css/site.css\">"));
        assert!(head.contains("<script src=\"/docs/public/js/search.js\" defer></script>"));
        assert!(!head.contains("notes.txt"));
    }
}
