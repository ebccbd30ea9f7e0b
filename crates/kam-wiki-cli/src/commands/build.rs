// Copyright 2026 Kam Contributors
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Build command for exporting the site as static files.

use console::style;
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::config::Config;
use crate::export::export_site;

/// Exports the site. `output` overrides the configured output directory.
pub fn run(output: Option<String>) -> anyhow::Result<()> {
    let config = Config::load()?;
    let output_dir = PathBuf::from(output.unwrap_or_else(|| config.build.output_dir.clone()));
    let site = config.site();

    println!(
        "{} {} {}",
        style("Exporting site to").cyan(),
        output_dir.display(),
        style(format!("(base {})", site.router().base())).dim()
    );

    let start = Instant::now();
    let report = export_site(site, &output_dir, Some(Path::new(&config.serve.public_dir)))?;

    println!(
        "{} {} pages",
        style("Wrote").green(),
        report.pages.len()
    );
    if report.assets > 0 {
        println!(
            "{} {} public file(s)",
            style("Copied").green(),
            report.assets
        );
    }

    println!();
    println!(
        "{} {}",
        style("Build complete!").green().bold(),
        style(format!("{}ms", start.elapsed().as_millis())).dim()
    );
    Ok(())
}
