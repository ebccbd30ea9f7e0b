// Copyright 2026 Kam Contributors
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

// Warn on missing documentation for public items
#![warn(missing_docs)]

//! # KAM WIKI
//!
//! Documentation site for the `kam` command-line tool.
//!
//! The crate holds the canonical registry of `kam` commands, a small route
//! table for the site, and HTML views for the command list and the
//! per-command detail pages.
//!
//! ## Features
//!
//! - Static, read-only command registry with case-insensitive lookup
//! - Substring search over names, summaries and descriptions
//! - Route table with base-path support and document titles
//! - Server-side rendered pages wrapped in a replaceable app shell
//!
//! ## Quick Start
//!
//! ```rust
//! use kam_wiki::{registry, Site, SiteResponse};
//!
//! let sign = registry::find_by_name("SIGN").unwrap();
//! assert_eq!(sign.name, "sign");
//!
//! let site = Site::new();
//! match site.respond("/command/sign", None) {
//!     SiteResponse::Html { status, title, .. } => {
//!         assert_eq!(status, 200);
//!         assert_eq!(title, "sign · Command | Kam — Wiki");
//!     }
//!     SiteResponse::Redirect { .. } => unreachable!(),
//! }
//! ```

/// Command registry and lookup helpers.
pub mod registry;
/// URL routing and document titles.
pub mod router;
/// HTML views and the app shell.
pub mod pages;
/// Path-to-response pipeline.
pub mod site;

pub use registry::{Command, CommandFlag};
pub use router::{Page, Resolution, Router, BASE_TITLE};
pub use site::{Site, SiteResponse};
