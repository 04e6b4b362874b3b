// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Badger-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Badger and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Query highlighting over raw field text.
//!
//! Matches are computed on the original text and kept as segments, so highlighting the
//! same field twice yields the same result and markup-like characters in the query are
//! matched literally.

use regex::{Regex, RegexBuilder};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub emphasized: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HighlightedText {
    segments: Vec<Segment>,
}

impl HighlightedText {
    pub fn plain(text: &str) -> Self {
        if text.is_empty() {
            return Self::default();
        }
        Self { segments: vec![Segment { text: text.to_owned(), emphasized: false }] }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn has_matches(&self) -> bool {
        self.segments.iter().any(|segment| segment.emphasized)
    }

    /// Original text with emphasis markers stripped.
    pub fn text(&self) -> String {
        self.segments.iter().map(|segment| segment.text.as_str()).collect()
    }

    /// Renders the segments with `open`/`close` around each match.
    pub fn to_marked(&self, open: &str, close: &str) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            if segment.emphasized {
                out.push_str(open);
                out.push_str(&segment.text);
                out.push_str(close);
            } else {
                out.push_str(&segment.text);
            }
        }
        out
    }
}

/// Case-insensitive literal matcher for one query.
#[derive(Debug, Clone)]
pub struct QueryMatcher {
    regex: Regex,
}

impl QueryMatcher {
    /// `None` when the query is empty; nothing is highlighted then.
    pub fn new(query: &str) -> Option<Self> {
        if query.is_empty() {
            return None;
        }
        RegexBuilder::new(&regex::escape(query))
            .case_insensitive(true)
            .build()
            .ok()
            .map(|regex| Self { regex })
    }

    pub fn highlight(&self, text: &str) -> HighlightedText {
        let mut segments = Vec::new();
        let mut cursor = 0;
        for found in self.regex.find_iter(text) {
            if found.start() > cursor {
                segments.push(Segment {
                    text: text[cursor..found.start()].to_owned(),
                    emphasized: false,
                });
            }
            segments.push(Segment { text: found.as_str().to_owned(), emphasized: true });
            cursor = found.end();
        }
        if cursor < text.len() {
            segments.push(Segment { text: text[cursor..].to_owned(), emphasized: false });
        }
        HighlightedText { segments }
    }
}

pub fn highlight(text: &str, query: &str) -> HighlightedText {
    match QueryMatcher::new(query) {
        Some(matcher) => matcher.highlight(text),
        None => HighlightedText::plain(text),
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{highlight, HighlightedText};

    #[rstest]
    #[case("Alice Liddell", "li", "A<mark>li</mark>ce <mark>Li</mark>ddell")]
    #[case("Alice", "ALICE", "<mark>Alice</mark>")]
    #[case("Alice", "bob", "Alice")]
    #[case("Alice", "", "Alice")]
    #[case("a.b.c", ".", "a<mark>.</mark>b<mark>.</mark>c")]
    #[case("<b>bold</b>", "<b>", "<mark><b></mark>bold</b>")]
    fn marks_case_insensitive_literal_matches(
        #[case] text: &str,
        #[case] query: &str,
        #[case] expected: &str,
    ) {
        assert_eq!(highlight(text, query).to_marked("<mark>", "</mark>"), expected);
    }

    #[test]
    fn query_matching_marker_text_does_not_nest() {
        let once = highlight("mark my words", "mark");
        assert_eq!(once.to_marked("<mark>", "</mark>"), "<mark>mark</mark> my words");
        let again = highlight(&once.text(), "mark");
        assert_eq!(again, once);
    }

    #[test]
    fn plain_text_has_no_matches() {
        let text = HighlightedText::plain("hello");
        assert!(!text.has_matches());
        assert_eq!(text.text(), "hello");
        assert!(HighlightedText::plain("").segments().is_empty());
    }
}
