// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Badger-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Badger and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Badger — search box with filter badges and typeahead suggestions.
//!
//! The [`controller`] is host-independent; [`tui`] hosts it in a terminal.

pub mod api;
pub mod config;
pub mod controller;
pub mod debounce;
pub mod model;
pub mod tui;
