// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Badger-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Badger and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::SuggestionItem;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// Current suggestion rows; at most one is selected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuggestionList {
    items: Vec<SuggestionItem>,
}

impl SuggestionList {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SuggestionItem> {
        self.items.iter()
    }

    pub fn get(&self, index: usize) -> Option<&SuggestionItem> {
        self.items.get(index)
    }

    pub fn replace(&mut self, items: Vec<SuggestionItem>) {
        self.items = items;
        // Incoming items may carry a selection flag; keep the invariant anyway.
        self.deselect_all();
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.items.iter().position(SuggestionItem::is_selected)
    }

    pub fn selected(&self) -> Option<&SuggestionItem> {
        self.items.iter().find(|item| item.is_selected())
    }

    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.items.len() {
            return false;
        }
        self.deselect_all();
        self.items[index].select();
        true
    }

    /// Moves the selection one row with wraparound; returns the new index.
    ///
    /// Without a current selection, `Down` lands on the first row and `Up` on the last.
    pub fn step(&mut self, direction: Direction) -> Option<usize> {
        let len = self.items.len();
        if len == 0 {
            return None;
        }
        let next = match (self.selected_index(), direction) {
            (None, Direction::Down) => 0,
            (None, Direction::Up) => len - 1,
            (Some(current), Direction::Down) => (current + 1) % len,
            (Some(0), Direction::Up) => len - 1,
            (Some(current), Direction::Up) => current - 1,
        };
        self.select(next);
        Some(next)
    }

    fn deselect_all(&mut self) {
        for item in &mut self.items {
            item.deselect();
        }
    }
}
