// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Badger-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Badger and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Search box controller.
//!
//! Owns the main input text, the badge list and the suggestion list. It performs no I/O:
//! side effects are returned as [`Command`]s for the host to execute, and fetch results are
//! fed back through [`Controller::apply_suggestions`].

use url::Url;

use crate::api::{FetchError, FetchResult};
use crate::config::{Config, ConfigError};
use crate::model::{BadgeEvent, FilterKind, ItemEvent, SuggestionItem};

mod badges;
mod query;
mod suggestions;

pub use badges::BadgeList;
pub use query::{compose_query, search_url};
pub use suggestions::{Direction, SuggestionList};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    Enter,
    Backspace,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Input,
    Badge(FilterKind),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub generation: u64,
    pub query: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Fetch suggestions (debounced by the host) and report back with the same generation.
    Fetch(FetchRequest),
    /// Finalize the search.
    Navigate { query: String, url: String },
}

/// Outcome of a key press. `handled == false` leaves the key to default text editing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Dispatch {
    pub handled: bool,
    pub commands: Vec<Command>,
}

impl Dispatch {
    fn handled(commands: Vec<Command>) -> Self {
        Self { handled: true, commands }
    }

    fn unhandled() -> Self {
        Self::default()
    }
}

#[derive(Debug, Clone)]
pub struct Controller {
    input: String,
    placeholder_visible: bool,
    badges: BadgeList,
    suggestions: SuggestionList,
    triggers: Vec<FilterKind>,
    search_base: Url,
    generation: u64,
    pending_query: Option<String>,
    notice: Option<FetchError>,
}

impl Controller {
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        config.validate()?;
        let search_base =
            Url::parse(&config.search_url).map_err(|err| ConfigError::InvalidUrl {
                field: "search url",
                value: config.search_url.clone(),
                reason: err.to_string(),
            })?;
        Ok(Self {
            input: String::new(),
            placeholder_visible: true,
            badges: BadgeList::default(),
            suggestions: SuggestionList::default(),
            triggers: config.triggers.clone(),
            search_base,
            generation: 0,
            pending_query: None,
            notice: None,
        })
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn placeholder_visible(&self) -> bool {
        self.placeholder_visible
    }

    pub fn badges(&self) -> &BadgeList {
        &self.badges
    }

    pub fn suggestions(&self) -> &SuggestionList {
        &self.suggestions
    }

    pub fn notice(&self) -> Option<&FetchError> {
        self.notice.as_ref()
    }

    /// Generation of the most recently issued fetch.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn focus(&self) -> Focus {
        match self.badges.focused() {
            Some(badge) => Focus::Badge(badge.kind()),
            None => Focus::Input,
        }
    }

    pub fn composed_query(&self) -> String {
        compose_query(&self.badges, &self.input)
    }

    pub fn search_url(&self) -> String {
        search_url(&self.search_base, &self.composed_query())
    }

    /// New text of the main input.
    pub fn handle_input_change(&mut self, text: &str) -> Vec<Command> {
        self.input = text.to_owned();
        self.suggestions.clear();

        if let Some(kind) = self.activated_trigger(text) {
            self.badges.add(kind);
            self.input.clear();
            self.placeholder_visible = false;
            self.invalidate_pending();
            tracing::debug!(kind = kind.label(), "badge activated");
            return Vec::new();
        }

        vec![self.request_suggestions(text.to_owned())]
    }

    fn activated_trigger(&self, text: &str) -> Option<FilterKind> {
        self.triggers
            .iter()
            .copied()
            .find(|kind| text.ends_with(&kind.trigger_token()) && !self.badges.contains_kind(*kind))
    }

    pub fn handle_key_down(&mut self, key: Key) -> Dispatch {
        if self.badges.focused().is_some() {
            let dispatch = self.handle_badge_key_down(key);
            if dispatch.handled {
                return dispatch;
            }
        }

        match key {
            Key::ArrowUp => {
                self.move_selection(Direction::Up);
                Dispatch::handled(Vec::new())
            }
            Key::ArrowDown => {
                self.move_selection(Direction::Down);
                Dispatch::handled(Vec::new())
            }
            Key::Enter => {
                let commands = match self.suggestions.selected_index() {
                    Some(index) => self.select_item(index),
                    None => vec![self.finalize()],
                };
                Dispatch::handled(commands)
            }
            Key::Backspace if self.input.is_empty() && self.badges.focused().is_none() => {
                if let Some(kind) = self.badges.focus_last() {
                    tracing::debug!(kind = kind.label(), "badge focused from empty input");
                }
                Dispatch::handled(Vec::new())
            }
            Key::Backspace | Key::Other => Dispatch::unhandled(),
        }
    }

    /// Key press while a badge editor has focus.
    pub fn handle_badge_key_down(&mut self, key: Key) -> Dispatch {
        let Some(badge) = self.badges.focused() else {
            return Dispatch::unhandled();
        };
        if key != Key::Backspace {
            return Dispatch::unhandled();
        }
        match badge.backspace_on_empty() {
            Some(event) => {
                let kind = badge.kind();
                Dispatch::handled(self.dispatch_badge_event(kind, event))
            }
            None => Dispatch::unhandled(),
        }
    }

    /// New raw text of the focused badge editor.
    pub fn handle_badge_input(&mut self, text: &str) -> Vec<Command> {
        let Some(badge) = self.badges.focused_mut() else {
            return Vec::new();
        };
        let kind = badge.kind();
        let event = badge.input(text);
        self.dispatch_badge_event(kind, event)
    }

    fn dispatch_badge_event(&mut self, kind: FilterKind, event: BadgeEvent) -> Vec<Command> {
        match event {
            BadgeEvent::Changed(value) => vec![self.request_suggestions(value)],
            BadgeEvent::Blurred => {
                self.suggestions.clear();
                self.invalidate_pending();
                tracing::debug!(kind = kind.label(), "badge completed");
                Vec::new()
            }
            BadgeEvent::Destroyed => {
                self.remove_badge(kind);
                Vec::new()
            }
        }
    }

    pub fn remove_badge(&mut self, kind: FilterKind) -> bool {
        let removed = self.badges.remove(kind).is_some();
        if removed {
            tracing::debug!(kind = kind.label(), "badge removed");
        }
        removed
    }

    fn move_selection(&mut self, direction: Direction) {
        let Some(index) = self.suggestions.step(direction) else {
            return;
        };
        if let (Some(badge), Some(item)) = (self.badges.focused_mut(), self.suggestions.get(index))
        {
            badge.set_item(item.suggestion());
        }
    }

    /// The item at `index` was activated (click).
    pub fn click_item(&mut self, index: usize) -> Vec<Command> {
        match self.suggestions.get(index).map(SuggestionItem::activate) {
            Some(ItemEvent::Selected) => self.select_item(index),
            None => Vec::new(),
        }
    }

    /// Fills the focused badge with the item, or finalizes the search when none is focused.
    pub fn select_item(&mut self, index: usize) -> Vec<Command> {
        let Some(suggestion) = self.suggestions.get(index).map(|item| item.suggestion().clone())
        else {
            return Vec::new();
        };

        match self.badges.focused_mut() {
            Some(badge) => {
                badge.set_item(&suggestion);
                let kind = badge.kind();
                let event = badge.blur();
                self.dispatch_badge_event(kind, event)
            }
            None => vec![self.finalize()],
        }
    }

    fn finalize(&mut self) -> Command {
        let query = self.composed_query();
        let url = self.search_url();
        self.suggestions.clear();
        self.invalidate_pending();
        tracing::info!(%query, "search finalized");
        Command::Navigate { query, url }
    }

    fn request_suggestions(&mut self, query: String) -> Command {
        self.generation = self.generation.wrapping_add(1);
        self.pending_query = Some(query.clone());
        tracing::trace!(generation = self.generation, %query, "suggestions requested");
        Command::Fetch(FetchRequest { generation: self.generation, query })
    }

    fn invalidate_pending(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.pending_query = None;
    }

    /// Applies a fetch result; returns `false` when it is stale and was discarded.
    pub fn apply_suggestions(&mut self, generation: u64, result: FetchResult) -> bool {
        if generation != self.generation {
            tracing::debug!(generation, latest = self.generation, "discarding stale suggestions");
            return false;
        }
        let Some(query) = self.pending_query.take() else {
            return false;
        };

        match result {
            Ok(users) => {
                let items = users
                    .into_iter()
                    .map(|suggestion| {
                        let mut item = SuggestionItem::new(suggestion);
                        item.highlight_query(&query);
                        item
                    })
                    .collect();
                self.suggestions.replace(items);
                self.notice = None;
            }
            Err(err) => {
                tracing::warn!(%err, %query, "suggestion fetch failed");
                self.suggestions.clear();
                self.notice = Some(err);
            }
        }
        true
    }
}
