// Copyright 2026 Kam Contributors
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Static export of the documentation site.
//!
//! Layout of the output directory:
//!
//! ```text
//! dist/
//! ├── index.html              Home
//! ├── 404.html                not-found page for static hosts
//! ├── commands.json           full registry, for client-side search
//! ├── search.js               filters list pages from commands.json
//! ├── commands/index.html     Commands
//! ├── command/<name>/index.html
//! └── public/                 copy of the public directory
//! ```
//!
//! These paths are removed from `output` before each export so pages of
//! commands that no longer exist do not linger. Anything else in `output`
//! is left alone.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use kam_wiki::{registry, Page, Site, SiteResponse};

/// Error types for export operations.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// A file or directory could not be written.
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        /// The path being written.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Output of a previous export could not be removed.
    #[error("Failed to remove {}: {source}", path.display())]
    Remove {
        /// The path being removed.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Copying the public directory failed.
    #[error("Failed to copy {}: {source}", path.display())]
    Copy {
        /// The path being copied.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The command index could not be serialized.
    #[error("Failed to serialize command index: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type for export operations.
pub type ExportResult<T> = Result<T, ExportError>;

/// Client-side search for list pages.
pub const SEARCH_SCRIPT: &str = include_str!("../assets/search.js");

/// Top-level entries an export writes into its output directory.
const EXPORTED_PATHS: [&str; 7] = [
    "index.html",
    "404.html",
    "commands.json",
    "search.js",
    "commands",
    "command",
    "public",
];

/// Summary of a finished export.
#[derive(Debug, Default)]
pub struct ExportReport {
    /// HTML pages written, relative to the output directory.
    pub pages: Vec<PathBuf>,
    /// Number of files copied from the public directory.
    pub assets: usize,
}

/// Writes every page of `site` into `output`.
///
/// List pages load `search.js`, so searching works without a server.
/// `public_dir` is copied to `output/public` when given and present.
pub fn export_site(site: Site, output: &Path, public_dir: Option<&Path>) -> ExportResult<ExportReport> {
    let site = site.with_static_search();
    let public_dir = public_dir.filter(|dir| dir.is_dir());

    create_dir(output)?;
    clear_previous_export(output, public_dir)?;
    let mut report = ExportReport::default();

    let mut pages = vec![
        (PathBuf::from("index.html"), Page::Home),
        (PathBuf::from("commands/index.html"), Page::Commands),
    ];
    for name in registry::list_names() {
        pages.push((
            Path::new("command").join(name).join("index.html"),
            Page::Command {
                name: name.to_string(),
            },
        ));
    }

    for (relative, page) in pages {
        if let SiteResponse::Html { body, .. } = site.render(&page, "") {
            write_file(&output.join(&relative), &body)?;
            tracing::info!("Exported {} -> {}", site.router().href(&page), relative.display());
            report.pages.push(relative);
        }
    }

    write_file(&output.join("404.html"), &site.render_not_found())?;
    report.pages.push(PathBuf::from("404.html"));

    let index = serde_json::to_string_pretty(registry::list_all())?;
    write_file(&output.join("commands.json"), &index)?;
    write_file(&output.join("search.js"), SEARCH_SCRIPT)?;

    if let Some(public_dir) = public_dir {
        let target = output.join("public");
        if same_path(public_dir, &target) {
            tracing::warn!("{} is already in place, not copying", public_dir.display());
        } else {
            report.assets = copy_dir_recursive(public_dir, &target)?;
        }
    }

    Ok(report)
}

/// Removes what a previous export wrote, keeping `public_dir` if it lives
/// inside `output`.
fn clear_previous_export(output: &Path, public_dir: Option<&Path>) -> ExportResult<()> {
    let public_dir = public_dir.and_then(|dir| fs::canonicalize(dir).ok());

    for name in EXPORTED_PATHS {
        let path = output.join(name);
        let Ok(metadata) = fs::symlink_metadata(&path) else {
            continue;
        };

        let holds_public_dir = match (&public_dir, fs::canonicalize(&path)) {
            (Some(public_dir), Ok(canonical)) => public_dir.starts_with(canonical),
            _ => false,
        };
        if holds_public_dir {
            tracing::warn!("Keeping {}: it contains the public directory", path.display());
            continue;
        }

        let removed = if metadata.is_dir() {
            fs::remove_dir_all(&path)
        } else {
            fs::remove_file(&path)
        };
        removed.map_err(|source| ExportError::Remove {
            path: path.clone(),
            source,
        })?;
        tracing::debug!("Removed {}", path.display());
    }

    Ok(())
}

fn same_path(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

fn create_dir(path: &Path) -> ExportResult<()> {
    fs::create_dir_all(path).map_err(|source| ExportError::Write {
        path: path.to_path_buf(),
        source,
    })
}

fn write_file(path: &Path, contents: &str) -> ExportResult<()> {
    if let Some(parent) = path.parent() {
        create_dir(parent)?;
    }
    fs::write(path, contents).map_err(|source| ExportError::Write {
        path: path.to_path_buf(),
        source,
    })
}

fn copy_error(path: &Path) -> impl FnOnce(io::Error) -> ExportError {
    let path = path.to_path_buf();
    move |source| ExportError::Copy { path, source }
}

/// Recursively copy a directory, returning the number of files copied
fn copy_dir_recursive(src: &Path, dst: &Path) -> ExportResult<usize> {
    create_dir(dst)?;

    let mut copied = 0;
    for entry in fs::read_dir(src).map_err(copy_error(src))? {
        let entry = entry.map_err(copy_error(src))?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            copied += copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            fs::copy(&src_path, &dst_path).map_err(copy_error(&src_path))?;
            copied += 1;
        }
    }

    Ok(copied)
}
