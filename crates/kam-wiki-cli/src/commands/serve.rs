// Copyright 2026 Kam Contributors
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Server command.

use console::style;

use crate::config::Config;
use crate::server::http::create_server;

/// Serves the site. `host` and `port` override the configured values.
pub async fn run(host: Option<String>, port: Option<u16>) -> anyhow::Result<()> {
    let mut config = Config::load()?;
    if let Some(host) = host {
        config.serve.host = host;
    }
    if let Some(port) = port {
        config.serve.port = port;
    }

    let addr = format!("{}:{}", config.serve.host, config.serve.port);
    println!(
        "{} {}",
        style("Serving kam docs at").cyan(),
        style(format!("http://{}{}", addr, config.base())).bold()
    );

    create_server(&addr, &config).await
}
