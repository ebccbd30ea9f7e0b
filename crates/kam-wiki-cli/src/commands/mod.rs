// Copyright 2026 Kam Contributors
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! CLI command implementations.
//!
//! - `serve`: Serve the site over HTTP
//! - `build`: Export the site as static files
//! - `list`, `show`, `search`: Query the command registry from the terminal

/// Static export command.
pub mod build;
/// Terminal queries over the registry.
pub mod query;
/// HTTP server command.
pub mod serve;
