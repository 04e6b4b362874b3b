// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Badger-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Badger and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use smallvec::SmallVec;

use crate::model::{FilterBadge, FilterKind};

/// Active badges in creation order.
///
/// Holds at most one badge per kind and at most one focused badge.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BadgeList {
    badges: SmallVec<[FilterBadge; 2]>,
}

impl BadgeList {
    pub fn len(&self) -> usize {
        self.badges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.badges.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FilterBadge> {
        self.badges.iter()
    }

    pub fn contains_kind(&self, kind: FilterKind) -> bool {
        self.badges.iter().any(|badge| badge.kind() == kind)
    }

    pub fn get(&self, kind: FilterKind) -> Option<&FilterBadge> {
        self.badges.iter().find(|badge| badge.kind() == kind)
    }

    pub fn last(&self) -> Option<&FilterBadge> {
        self.badges.last()
    }

    /// Appends a focused badge of `kind`; `false` if one already exists.
    pub fn add(&mut self, kind: FilterKind) -> bool {
        if self.contains_kind(kind) {
            return false;
        }
        self.badges.push(FilterBadge::new(kind));
        self.focus(kind);
        true
    }

    pub fn remove(&mut self, kind: FilterKind) -> Option<FilterBadge> {
        let index = self.badges.iter().position(|badge| badge.kind() == kind)?;
        Some(self.badges.remove(index))
    }

    pub fn focused(&self) -> Option<&FilterBadge> {
        self.badges.iter().find(|badge| badge.is_focused())
    }

    pub fn focused_mut(&mut self) -> Option<&mut FilterBadge> {
        self.badges.iter_mut().find(|badge| badge.is_focused())
    }

    /// Focuses the badge of `kind` and unfocuses every other one.
    pub fn focus(&mut self, kind: FilterKind) -> bool {
        if !self.contains_kind(kind) {
            return false;
        }
        for badge in &mut self.badges {
            if badge.kind() == kind {
                badge.focus();
            } else if badge.is_focused() {
                badge.blur();
            }
        }
        true
    }

    pub fn focus_last(&mut self) -> Option<FilterKind> {
        let kind = self.badges.last()?.kind();
        self.focus(kind);
        Some(kind)
    }

    /// Rendered filter expressions in creation order, joined by single spaces.
    pub fn expression(&self) -> String {
        self.badges.iter().map(FilterBadge::expression).collect::<Vec<_>>().join(" ")
    }
}
