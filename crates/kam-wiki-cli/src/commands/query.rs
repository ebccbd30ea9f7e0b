// Copyright 2026 Kam Contributors
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Terminal access to the command registry (`list`, `show`, `search`).

use console::style;
use kam_wiki::{registry, Command};

/// Prints every command.
pub fn list(json: bool) -> anyhow::Result<()> {
    let commands: Vec<&Command> = registry::list_all().iter().collect();
    print_commands(&commands, json)
}

/// Prints the details of one command.
///
/// # Errors
///
/// Returns an error if no command is named `name`.
pub fn show(name: &str, json: bool) -> anyhow::Result<()> {
    let Some(command) = registry::find_by_name(name) else {
        anyhow::bail!(
            "Unknown command '{}'. Available: {}",
            name.trim(),
            registry::list_names().join(", ")
        );
    };

    if json {
        println!("{}", serde_json::to_string_pretty(command)?);
    } else {
        print!("{}", format_details(command));
    }
    Ok(())
}

/// Prints the commands matching `query`.
pub fn search(query: &str, json: bool) -> anyhow::Result<()> {
    let commands = registry::search(query);
    if commands.is_empty() && !json {
        println!(
            "{} {}",
            style("No commands match").yellow(),
            style(query.trim()).bold()
        );
        return Ok(());
    }
    print_commands(&commands, json)
}

fn print_commands(commands: &[&Command], json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(commands)?);
        return Ok(());
    }

    let width = commands.iter().map(|c| c.name.len()).max().unwrap_or(0);
    for command in commands {
        println!(
            "  {}  {}",
            style(format!("{:width$}", command.name, width = width)).cyan(),
            command.summary
        );
    }
    Ok(())
}

/// Formats a command as plain help-style text.
pub fn format_details(command: &Command) -> String {
    let mut out = format!("{} - {}\n", command.name, command.summary);

    if let Some(usage) = command.usage {
        out.push_str(&format!("\nUSAGE:\n    {}\n", usage));
    }

    if let Some(description) = command.description {
        out.push_str(&format!("\nDESCRIPTION:\n    {}\n", description));
    }

    if !command.flags().is_empty() {
        out.push_str("\nFLAGS:\n");
        for flag in command.flags() {
            match flag.description {
                Some(description) => {
                    out.push_str(&format!("    {:<22}{}\n", flag.flag, description))
                }
                None => out.push_str(&format!("    {}\n", flag.flag)),
            }
        }
    }

    if !command.examples().is_empty() {
        out.push_str("\nEXAMPLES:\n");
        for example in command.examples() {
            out.push_str(&format!("    {}\n", example));
        }
    }

    out
}
