// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Badger-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Badger and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Suggestion sources: the typeahead HTTP client and an offline demo source.

use std::fmt;
use std::future::Future;

use crate::model::Suggestion;

pub mod auth;
pub mod client;
pub mod demo;
pub mod types;

pub use auth::{cookie_value, Credentials};
pub use client::TypeaheadClient;
pub use demo::DemoSource;
pub use types::{parse_typeahead, ResultContext, TypeaheadResponse, TypeaheadUser};

pub type FetchResult = Result<Vec<Suggestion>, FetchError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Transport failure, timeout, or non-success status.
    Network(String),
    /// The body was not the expected JSON shape.
    MalformedResponse(String),
    /// Neither a CSRF token nor a guest token is available.
    AuthMissing,
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Network(reason) => write!(f, "network error: {reason}"),
            Self::MalformedResponse(reason) => write!(f, "malformed response: {reason}"),
            Self::AuthMissing => {
                f.write_str("no session credentials (set the ct0 or gt cookie)")
            }
        }
    }
}

impl std::error::Error for FetchError {}

/// Anything that can turn a query into candidate suggestions.
pub trait SuggestionSource: Send + Sync + 'static {
    fn fetch(&self, query: String) -> impl Future<Output = FetchResult> + Send;
}
