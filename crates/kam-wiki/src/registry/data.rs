// Copyright 2026 Kam Contributors
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! The canonical set of `kam` commands.
//!
//! Details are kept conservative: usage strings and descriptions document
//! what each command is for without inventing behavior. Add flags and
//! examples to an entry here to expand its documentation page.

use super::types::{Command, CommandFlag};

/// Flags that apply to `kam` itself rather than to a single command.
pub static GLOBAL_FLAGS: &[CommandFlag] = &[
    CommandFlag {
        flag: "-h, --help",
        description: Some("Print help (see a summary with -h)"),
    },
    CommandFlag {
        flag: "-V, --version",
        description: Some("Print version"),
    },
];

/// Every documented command, in menu order.
pub static COMMANDS: &[Command] = &[
    Command {
        name: "init",
        summary: "Initialize a new Kam project from templates (supports meta and kernel templates)",
        usage: Some("kam init [-i|--interactive] [TEMPLATE] [OPTIONS]"),
        description: Some(
            "Create a new Kam module or project from predefined templates. Templates may include \
             meta templates and kernel templates that bootstrap a module with opinionated \
             configuration and layout.",
        ),
        flags: Some(&[CommandFlag {
            flag: "-i, --interactive",
            description: Some("Run the init interactively; ask for required values"),
        }]),
        examples: Some(&["kam init kernel/basic", "kam init meta/sample-template"]),
    },
    Command {
        name: "build",
        summary: "Build and package a module into a deployable ZIP artifact",
        usage: Some("kam build [OPTIONS]"),
        description: Some(
            "Compiles and packages a module into a ZIP artifact suitable for distribution and \
             deployment. The exact build process depends on the module configuration and \
             included build scripts.",
        ),
        flags: None,
        examples: None,
    },
    Command {
        name: "version",
        summary: "Manage module versions and bump policies",
        usage: Some("kam version [bump|list|set|get] [OPTIONS]"),
        description: Some(
            "Tools for managing semantic versions and bumping policies for the module. Useful \
             commands often include bumping a version, listing the history, or configuring \
             automatic bump rules.",
        ),
        flags: None,
        examples: None,
    },
    Command {
        name: "cache",
        summary: "Manage local template and artifact cache",
        usage: Some("kam cache [clear|list|info] [OPTIONS]"),
        description: Some(
            "Controls the local cache used by Kam for templates and artifacts. You can clean up \
             disk usage, examine cached items, or refresh cached templates/artifacts.",
        ),
        flags: None,
        examples: None,
    },
    Command {
        name: "tmpl",
        summary: "Manage templates: import, export, package, and list",
        usage: Some("kam tmpl [import|export|package|list] [OPTIONS]"),
        description: Some(
            "Template management utilities. This includes importing templates into your local \
             cache, exporting or packaging templates as distributable artifacts, or listing \
             available templates.",
        ),
        flags: None,
        examples: None,
    },
    Command {
        name: "validate",
        summary: "Validate `kam.toml` configuration and templates",
        usage: Some("kam validate [FILES] [OPTIONS]"),
        description: Some(
            "Checks your project configuration (kam.toml) and templates for syntax, required \
             fields, and other consistency validations.",
        ),
        flags: None,
        examples: None,
    },
    Command {
        name: "completions",
        summary: "Generate shell completion scripts for common shells",
        usage: Some("kam completions [bash|zsh|fish|powershell]"),
        description: Some(
            "Generate shell completion scripts that help with tab-completion for `kam` commands \
             on supported shells.",
        ),
        flags: None,
        examples: None,
    },
    Command {
        name: "secret",
        summary: "Secret keyring management (used by sign/verify tasks)",
        usage: Some("kam secret [add|list|remove|info] [OPTIONS]"),
        description: Some(
            "Manage secrets (keys) stored locally for signing and cryptographic operations. \
             These keys are used by the `sign` and `verify` commands in signing and \
             verification workflows.",
        ),
        flags: None,
        examples: None,
    },
    Command {
        name: "sign",
        summary: "Sign an artifact using a key from the keyring or a PEM file",
        usage: Some("kam sign [ARTIFACT] [OPTIONS]"),
        description: Some(
            "Creates a cryptographic signature for an artifact (e.g., the packaged ZIP) using a \
             key from your secret keyring or a provided PEM/Key file.",
        ),
        flags: None,
        examples: None,
    },
    Command {
        name: "verify",
        summary: "Verify an artifact signature (.sig) or a sigstore bundle (DSSE)",
        usage: Some("kam verify [ARTIFACT] [SIGNATURE] [OPTIONS]"),
        description: Some(
            "Verify that an artifact\u{2019}s signature is valid and matches a trusted identity or \
             key. It supports .sig signatures and sigstore DSSE bundles.",
        ),
        flags: None,
        examples: None,
    },
    Command {
        name: "check",
        summary: "Check project JSON/YAML/Markdown files (lint/format/parse)",
        usage: Some("kam check [FILES] [OPTIONS]"),
        description: Some(
            "Static checking utilities for files in the project, including linting, formatting, \
             and parsing validations. Helps catch errors early in CI or local development.",
        ),
        flags: None,
        examples: None,
    },
    Command {
        name: "export",
        summary: "Export `kam.toml` to `module.prop`, `module.json`, `repo.json`, `track.json`, \
                  `config.json`, `update.json`",
        usage: Some("kam export [OUTPUT-TARGET] [OPTIONS]"),
        description: Some(
            "Export module metadata defined in kam.toml to one of the supported artifact \
             formats. Useful when producing artifacts for different distribution systems or \
             tooling.",
        ),
        flags: None,
        examples: None,
    },
    Command {
        name: "toml",
        summary: "Inspect and edit `kam.toml` using dot-path keys (get/set/unset/list)",
        usage: Some("kam toml [get|set|unset|list] <dot-path> [VALUE]"),
        description: Some(
            "Utility to inspect and edit the kam.toml configuration file programmatically. \
             Accepts dot-path keys to read or modify nested values.",
        ),
        flags: None,
        examples: None,
    },
    Command {
        name: "config",
        summary: "Manage per-project or global kam configuration (similar to git config)",
        usage: Some("kam config [get|set|unset] [--global|--local] <key> [value]"),
        description: Some(
            "Manage configuration values for Kam either per-project (local) or globally. Works \
             similar to `git config` in semantics.",
        ),
        flags: None,
        examples: None,
    },
    Command {
        name: "help",
        summary: "Print this message or the help of the given subcommand(s)",
        usage: Some("kam help [COMMAND]"),
        description: Some(
            "Show help text for the general `kam` tool or for a specific subcommand. This is the \
             canonical way to learn more about usage when working with the CLI.",
        ),
        flags: None,
        examples: None,
    },
];
