// Copyright 2026 Kam Contributors
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Type definitions for the command registry.

use serde::Serialize;

/// A command-line switch, either declared by a command or by `kam` itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CommandFlag {
    /// Display string for the switch (e.g. `-i, --interactive`).
    pub flag: &'static str,
    /// Human-readable explanation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,
}

/// A documented `kam` subcommand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Command {
    /// The command name (e.g. `build`, `init`). Unique, case-insensitively.
    pub name: &'static str,

    /// One-line summary of what the command does.
    pub summary: &'static str,

    /// Long-form text with details, constraints or caveats.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,

    /// Short invocation pattern (e.g. `kam build [OPTIONS]`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<&'static str>,

    /// Flags in documentation order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flags: Option<&'static [CommandFlag]>,

    /// Example invocations in documentation order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub examples: Option<&'static [&'static str]>,
}

impl Command {
    /// Declared flags, empty when the command has none.
    pub fn flags(&self) -> &'static [CommandFlag] {
        self.flags.unwrap_or_default()
    }

    /// Example invocations, empty when the command has none.
    pub fn examples(&self) -> &'static [&'static str] {
        self.examples.unwrap_or_default()
    }

    /// Returns true if the lower-cased `needle` occurs in the name, summary
    /// or description. `needle` must already be lower-cased.
    pub(crate) fn mentions(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.summary.to_lowercase().contains(needle)
            || self
                .description
                .unwrap_or("")
                .to_lowercase()
                .contains(needle)
    }
}
