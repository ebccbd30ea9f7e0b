// Copyright 2026 Kam Contributors
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! JSON endpoints over the command registry.
//!
//! - `GET {base}api/commands?q=` → `search(q)`
//! - `GET {base}api/commands/:name` → the command, or 404

use axum::{
    extract::{Path, Query},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use kam_wiki::{registry, Command};
use serde::Deserialize;
use serde_json::json;

/// Query string accepted by search endpoints and list pages.
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    /// Search text; missing means "everything".
    pub q: Option<String>,
}

/// Lists commands matching `q`, or all of them when `q` is missing or the
/// query string does not parse.
pub async fn list_commands(params: Option<Query<SearchParams>>) -> Json<Vec<&'static Command>> {
    let params = params.map(|Query(params)| params).unwrap_or_default();
    Json(registry::search(params.q.as_deref().unwrap_or("")))
}

/// Returns a single command by name.
pub async fn get_command(Path(name): Path<String>) -> Response {
    match registry::find_by_name(&name) {
        Some(command) => Json(command).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": format!("Command not found: {}", name) })),
        )
            .into_response(),
    }
}
