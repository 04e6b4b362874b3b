// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Badger-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Badger and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Widgets of the search box: filter badges and suggestion items.

pub mod filter;
pub mod highlight;
pub mod suggestion;

pub use filter::{BadgeEvent, FilterBadge, FilterKind, ParseFilterKindError, HANDLE_SENTINEL};
pub use highlight::{highlight, HighlightedText, QueryMatcher, Segment};
pub use suggestion::{ItemEvent, ItemHighlights, Suggestion, SuggestionItem};
