// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Badger-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Badger and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Offline suggestion source used by `--demo` and by tests.

use std::future::Future;

use super::{FetchResult, SuggestionSource};
use crate::model::{Suggestion, HANDLE_SENTINEL};

const DEMO_USERS: &[(&str, &str, bool, &str)] = &[
    ("Alice Liddell", "alice", true, "Followed by Lewis Carroll"),
    ("Alan Turing", "alanturing", false, "Popular in computing"),
    ("Bob Ross", "bobross", true, "Happy little trees"),
    ("Cat Facts", "catfacts", false, "Followed by 12 cat lovers"),
    ("Grace Hopper", "gracehopper", true, "Popular in computing"),
    ("The Rust Programming Language", "rustlang", true, "Followed by Ferris"),
    ("Ferris the Crab", "ferris", false, "Followed by The Rust Programming Language"),
];

#[derive(Debug, Clone)]
pub struct DemoSource {
    users: Vec<Suggestion>,
    limit: usize,
}

impl Default for DemoSource {
    fn default() -> Self {
        let users = DEMO_USERS
            .iter()
            .map(|(name, handle, verified, context)| Suggestion {
                display_name: (*name).to_owned(),
                handle: (*handle).to_owned(),
                avatar_url: format!("https://avatars.example/{handle}.png"),
                verified: *verified,
                context_label: (*context).to_owned(),
            })
            .collect();
        Self { users, limit: 8 }
    }
}

impl DemoSource {
    pub fn new(users: Vec<Suggestion>) -> Self {
        Self { users, limit: 8 }
    }

    /// Users whose name or handle contains the query, ignoring case and the `@` sentinel.
    pub fn search(&self, query: &str) -> Vec<Suggestion> {
        let needle = query.trim().trim_start_matches(HANDLE_SENTINEL).to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        self.users
            .iter()
            .filter(|user| {
                user.display_name.to_lowercase().contains(&needle)
                    || user.handle.to_lowercase().contains(&needle)
            })
            .take(self.limit)
            .cloned()
            .collect()
    }
}

impl SuggestionSource for DemoSource {
    fn fetch(&self, query: String) -> impl Future<Output = FetchResult> + Send {
        let users = self.search(&query);
        async move { Ok(users) }
    }
}

#[cfg(test)]
mod tests {
    use super::DemoSource;

    #[test]
    fn matches_name_or_handle_case_insensitively() {
        let source = DemoSource::default();
        let handles: Vec<_> =
            source.search("AL").into_iter().map(|user| user.handle).collect();
        assert_eq!(handles, vec!["alice", "alanturing"]);
    }

    #[test]
    fn sentinel_prefixed_query_matches_handles() {
        let source = DemoSource::default();
        let handles: Vec<_> = source.search("@ferr").into_iter().map(|user| user.handle).collect();
        assert_eq!(handles, vec!["ferris"]);
    }

    #[test]
    fn blank_query_has_no_results() {
        assert!(DemoSource::default().search("  ").is_empty());
        assert!(DemoSource::default().search("@").is_empty());
    }
}
