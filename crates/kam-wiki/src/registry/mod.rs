// Copyright 2026 Kam Contributors
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Command registry and lookup helpers.
//!
//! The registry is `'static` data built at compile time. Every query hands
//! out shared references into it, so no consumer can mutate the registry
//! and no copying is needed to protect it.
//!
//! None of the lookups can fail: unknown names resolve to `None` and
//! searches that match nothing return an empty list.
//!
//! # Example
//!
//! ```rust
//! use kam_wiki::registry;
//!
//! let init = registry::find_by_name(" Init ").unwrap();
//! assert_eq!(init.name, "init");
//!
//! let hits = registry::search("template");
//! assert!(hits.iter().any(|c| c.name == "init"));
//!
//! assert!(registry::find_by_name("doesnotexist").is_none());
//! ```

mod data;
/// Registry data types.
pub mod types;

pub use data::{COMMANDS, GLOBAL_FLAGS};
pub use types::{Command, CommandFlag};

/// Returns every registered command in declaration order.
pub fn list_all() -> &'static [Command] {
    COMMANDS
}

/// Finds a command by name, ignoring case and surrounding whitespace.
pub fn find_by_name(name: &str) -> Option<&'static Command> {
    let key = name.trim().to_lowercase();
    COMMANDS.iter().find(|c| c.name.to_lowercase() == key)
}

/// Searches names, summaries and descriptions for `query`, case-insensitively.
///
/// A blank query returns the whole registry. Matches keep declaration
/// order and are not ranked.
pub fn search(query: &str) -> Vec<&'static Command> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return COMMANDS.iter().collect();
    }
    COMMANDS.iter().filter(|c| c.mentions(&needle)).collect()
}

/// Returns the name of every command in declaration order.
pub fn list_names() -> Vec<&'static str> {
    COMMANDS.iter().map(|c| c.name).collect()
}

/// Flags of the `kam` tool itself.
pub fn global_flags() -> &'static [CommandFlag] {
    GLOBAL_FLAGS
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_names_unique_ignoring_case() {
        let mut seen = HashSet::new();
        for command in list_all() {
            assert!(
                seen.insert(command.name.to_lowercase()),
                "Duplicate command name: {}",
                command.name
            );
        }
    }

    #[test]
    fn test_list_all_copies_are_independent() {
        let first: Vec<Command> = list_all().to_vec();
        let mut second = list_all().to_vec();
        second.reverse();
        second.truncate(1);

        assert_ne!(first, second);
        assert_eq!(list_all(), first.as_slice());
        assert_eq!(list_all()[0].name, "init");
        assert_eq!(list_all().len(), 15);
    }

    #[test]
    fn test_find_by_name_ignores_case_and_whitespace() {
        let expected = find_by_name("build").unwrap();
        assert_eq!(find_by_name("BUILD"), Some(expected));
        assert_eq!(find_by_name(" build "), Some(expected));
        assert_eq!(find_by_name("\tBuild\n"), Some(expected));
        assert!(std::ptr::eq(find_by_name("Build").unwrap(), expected));
    }

    #[test]
    fn test_find_by_name_missing() {
        assert!(find_by_name("doesnotexist").is_none());
        assert!(find_by_name("").is_none());
        assert!(find_by_name("   ").is_none());
        assert!(find_by_name("bui").is_none());
    }

    #[test]
    fn test_search_blank_query_lists_everything() {
        let all: Vec<&Command> = list_all().iter().collect();
        assert_eq!(search(""), all);
        assert_eq!(search("   "), all);
    }

    #[test]
    fn test_search_matches_name_ignoring_case() {
        let lower = search("sign");
        let upper = search("SIGN");
        assert!(lower.iter().any(|c| c.name == "sign"));
        assert_eq!(lower, upper);
        assert!(search("zzz-no-match").is_empty());
    }

    #[test]
    fn test_search_reaches_description() {
        // "bootstrap" only appears in the description of `init`
        let init = find_by_name("init").unwrap();
        assert!(!init.name.contains("bootstrap"));
        assert!(!init.summary.to_lowercase().contains("bootstrap"));

        let hits = search("bootstrap");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "init");
    }

    #[test]
    fn test_search_keeps_declaration_order_without_duplicates() {
        // `secret` matches on both its summary and its description
        let hits = search("sign");
        let names: Vec<&str> = hits.iter().map(|c| c.name).collect();
        assert_eq!(names, ["secret", "sign", "verify"]);
    }

    #[test]
    fn test_list_names_matches_list_all() {
        let names = list_names();
        assert_eq!(names.len(), list_all().len());
        for (name, command) in names.iter().zip(list_all()) {
            assert_eq!(*name, command.name);
        }
    }

    #[test]
    fn test_init_scenario() {
        let init = find_by_name("Init").unwrap();
        assert!(init.summary.starts_with("Initialize a new"));

        let hits = search("template");
        assert!(hits.iter().any(|c| c.name == "init"));
        let positions: Vec<usize> = hits
            .iter()
            .map(|hit| list_all().iter().position(|c| c.name == hit.name).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));

        assert!(search("nonexistent-term-xyz").is_empty());
    }

    #[test]
    fn test_flags_and_examples_accessors() {
        let init = find_by_name("init").unwrap();
        assert_eq!(init.flags()[0].flag, "-i, --interactive");
        assert_eq!(init.examples().len(), 2);

        let build = find_by_name("build").unwrap();
        assert!(build.flags().is_empty());
        assert!(build.examples().is_empty());
    }

    #[test]
    fn test_global_flags() {
        let flags: Vec<&str> = global_flags().iter().map(|f| f.flag).collect();
        assert_eq!(flags, ["-h, --help", "-V, --version"]);
    }
}
