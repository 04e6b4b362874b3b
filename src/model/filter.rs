// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Badger-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Badger and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::str::FromStr;

use super::Suggestion;

/// Prefix shown in front of a non-empty handle. Never stored.
pub const HANDLE_SENTINEL: char = '@';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FilterKind {
    From,
    To,
}

impl FilterKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::From => "from",
            Self::To => "to",
        }
    }

    /// Literal text that activates a badge of this kind when it ends the main input.
    pub fn trigger_token(self) -> String {
        format!("{}: ", self.label())
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseFilterKindError {
    value: String,
}

impl fmt::Display for ParseFilterKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown filter kind '{}' (expected from|to)", self.value)
    }
}

impl std::error::Error for ParseFilterKindError {}

impl FromStr for FilterKind {
    type Err = ParseFilterKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "from" => Ok(Self::From),
            "to" => Ok(Self::To),
            other => Err(ParseFilterKindError { value: other.to_owned() }),
        }
    }
}

/// Notifications a badge hands back to its owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BadgeEvent {
    /// The value was edited; carries the displayed (sentinel-prefixed) value.
    Changed(String),
    Blurred,
    Destroyed,
}

/// One structured filter shown inline in front of the main input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterBadge {
    kind: FilterKind,
    value: String,
    focused: bool,
    avatar_url: Option<String>,
}

impl FilterBadge {
    pub fn new(kind: FilterKind) -> Self {
        Self { kind, value: String::new(), focused: false, avatar_url: None }
    }

    pub fn kind(&self) -> FilterKind {
        self.kind
    }

    /// Stored value, without the sentinel.
    pub fn raw_value(&self) -> &str {
        &self.value
    }

    /// Value as displayed: `@handle`, or empty.
    pub fn display_value(&self) -> String {
        if self.value.is_empty() {
            String::new()
        } else {
            format!("{HANDLE_SENTINEL}{}", self.value)
        }
    }

    pub fn avatar_url(&self) -> Option<&str> {
        self.avatar_url.as_deref()
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Width hint for the inline editor, in characters.
    pub fn size_hint(&self) -> usize {
        self.value.chars().count().max(1)
    }

    pub fn set_value(&mut self, value: &str) {
        self.value = value.replace(HANDLE_SENTINEL, "");
    }

    /// Raw text typed into the badge editor.
    ///
    /// Trailing whitespace completes the badge instead of editing it.
    pub fn input(&mut self, raw: &str) -> BadgeEvent {
        if raw.ends_with(char::is_whitespace) {
            self.set_value(raw.trim());
            return self.blur();
        }
        self.set_value(raw);
        self.avatar_url = None;
        BadgeEvent::Changed(self.display_value())
    }

    /// Backspace pressed inside the badge editor; destroys the badge once it is empty.
    pub fn backspace_on_empty(&self) -> Option<BadgeEvent> {
        self.value.is_empty().then_some(BadgeEvent::Destroyed)
    }

    pub fn set_item(&mut self, suggestion: &Suggestion) {
        self.avatar_url = None;
        self.set_value(&suggestion.handle);
        if !suggestion.avatar_url.is_empty() {
            self.avatar_url = Some(suggestion.avatar_url.clone());
        }
    }

    pub(crate) fn focus(&mut self) {
        self.focused = true;
    }

    pub(crate) fn blur(&mut self) -> BadgeEvent {
        self.focused = false;
        BadgeEvent::Blurred
    }

    /// Filter expression contributed to the composed query, e.g. `(from:@alice)`.
    pub fn expression(&self) -> String {
        format!("({}:{})", self.kind.label(), self.display_value())
    }
}
