// Copyright 2026 Kam Contributors
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! HTTP server for the documentation site.
//!
//! This is a thin adapter: page requests are handed to [`Site::respond`]
//! and the resulting [`SiteResponse`] is converted back to HTTP.

use std::sync::Arc;

use axum::{
    body::Body,
    extract::{Query, State},
    http::{Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use kam_wiki::{Site, SiteResponse};
use tower_http::services::ServeDir;

use super::api::{self, SearchParams};
use crate::config::Config;

/// Shared application state for the server.
pub struct AppState {
    /// The site being served.
    pub site: Site,
    /// Application configuration.
    pub config: Config,
}

/// Builds the axum application for `state`.
///
/// Every route lives under the site's base path: the JSON API at
/// `{base}api/commands`, public assets at `{base}public`, and every other
/// path is resolved as a page.
pub fn build_app(state: Arc<AppState>) -> Router {
    let base = state.site.router().base().to_string();

    Router::new()
        .route(&format!("{}api/commands", base), get(api::list_commands))
        .route(&format!("{}api/commands/:name", base), get(api::get_command))
        .nest_service(
            &format!("{}public", base),
            ServeDir::new(&state.config.serve.public_dir),
        )
        .fallback(page_handler)
        .with_state(state)
}

/// Creates and starts the HTTP server.
pub async fn create_server(addr: &str, config: &Config) -> anyhow::Result<()> {
    let state = Arc::new(AppState {
        site: config.site(),
        config: config.clone(),
    });

    for route in state.site.router().routes() {
        tracing::info!("Route {} -> {}", route.pattern, route.name);
    }

    let app = build_app(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Fallback handler that renders pages through the site router.
///
/// A query string that does not parse is treated as an empty search.
async fn page_handler(
    State(state): State<Arc<AppState>>,
    method: Method,
    uri: Uri,
    params: Option<Query<SearchParams>>,
) -> Response {
    let params = params.map(|Query(params)| params).unwrap_or_default();
    if method != Method::GET && method != Method::HEAD {
        return (StatusCode::METHOD_NOT_ALLOWED, "Method not allowed").into_response();
    }

    let response = state.site.respond(uri.path(), params.q.as_deref());
    tracing::info!("{} {} -> {}", method, uri.path(), response.status());
    site_response_to_axum(response)
}

/// Convert SiteResponse to axum Response
fn site_response_to_axum(response: SiteResponse) -> Response {
    let built = match response {
        SiteResponse::Html { status, body, .. } => {
            let status_code = StatusCode::from_u16(status).unwrap_or(StatusCode::OK);
            Response::builder()
                .status(status_code)
                .header("content-type", "text/html; charset=utf-8")
                .body(Body::from(body))
        }
        SiteResponse::Redirect { location } => Response::builder()
            .status(StatusCode::FOUND)
            .header("location", location)
            .body(Body::empty()),
    };

    built.unwrap_or_else(|_| {
        (StatusCode::INTERNAL_SERVER_ERROR, "Failed to build response").into_response()
    })
}
