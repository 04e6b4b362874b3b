// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Badger-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Badger and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::highlight::{HighlightedText, QueryMatcher};
use super::HANDLE_SENTINEL;

/// A candidate returned by a suggestion source, independent of the wire format.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Suggestion {
    pub display_name: String,
    pub handle: String,
    pub avatar_url: String,
    pub verified: bool,
    pub context_label: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemEvent {
    Selected,
}

/// Highlighted renditions of the fields a query is matched against.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ItemHighlights {
    pub display_name: HighlightedText,
    pub handle: HighlightedText,
    pub context_label: HighlightedText,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionItem {
    suggestion: Suggestion,
    selected: bool,
    highlights: ItemHighlights,
}

impl SuggestionItem {
    pub fn new(suggestion: Suggestion) -> Self {
        let highlights = ItemHighlights {
            display_name: HighlightedText::plain(&suggestion.display_name),
            handle: HighlightedText::plain(&handle_label(&suggestion.handle)),
            context_label: HighlightedText::plain(&suggestion.context_label),
        };
        Self { suggestion, selected: false, highlights }
    }

    pub fn suggestion(&self) -> &Suggestion {
        &self.suggestion
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn highlights(&self) -> &ItemHighlights {
        &self.highlights
    }

    pub(crate) fn select(&mut self) {
        self.selected = true;
    }

    pub(crate) fn deselect(&mut self) {
        self.selected = false;
    }

    /// Recomputes highlights from the raw fields, so repeated calls do not compound.
    pub fn highlight_query(&mut self, query: &str) {
        let Some(matcher) = QueryMatcher::new(query) else {
            self.highlights = Self::new(self.suggestion.clone()).highlights;
            return;
        };
        self.highlights = ItemHighlights {
            display_name: matcher.highlight(&self.suggestion.display_name),
            handle: matcher.highlight(&handle_label(&self.suggestion.handle)),
            context_label: matcher.highlight(&self.suggestion.context_label),
        };
    }

    /// The item was picked (click or Enter).
    pub fn activate(&self) -> ItemEvent {
        ItemEvent::Selected
    }
}

fn handle_label(handle: &str) -> String {
    format!("{HANDLE_SENTINEL}{handle}")
}
