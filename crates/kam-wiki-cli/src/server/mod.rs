// Copyright 2026 Kam Contributors
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! HTTP server for the documentation site.
//!
//! # Components
//!
//! - `http`: page serving using Axum
//! - `api`: JSON endpoints over the command registry

/// JSON endpoints for the command registry.
pub mod api;
/// HTTP server implementation using Axum.
pub mod http;
