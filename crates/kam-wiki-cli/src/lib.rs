// Copyright 2026 Kam Contributors
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

// Warn on missing documentation for public items
#![warn(missing_docs)]

//! KAM WIKI CLI library.
//!
//! This crate provides the command-line interface for the kam documentation
//! site: an HTTP server, a static exporter, and terminal queries over the
//! command registry.
//!
//! # Usage
//!
//! This crate is primarily used through the `kam-wiki` binary:
//!
//! ```bash
//! kam-wiki serve          # Serve the site over HTTP
//! kam-wiki build          # Export static files to dist/
//! kam-wiki list           # List commands
//! kam-wiki show build     # Show one command
//! kam-wiki search sign    # Search commands
//! ```
//!
//! # Configuration
//!
//! Projects are configured via `kam-wiki.toml` at the project root.

/// CLI commands (serve, build, list, show, search).
pub mod commands;
/// Site configuration from `kam-wiki.toml`.
pub mod config;
/// Static site export.
pub mod export;
/// HTTP server.
pub mod server;
