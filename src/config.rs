// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Badger-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Badger and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Compile-time defaults and the runtime configuration assembled from them.

use std::fmt;
use std::time::Duration;

use url::Url;

use crate::model::FilterKind;

pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(100);
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub const TYPEAHEAD_ENDPOINT: &str = "https://twitter.com/i/api/1.1/search/typeahead.json";
pub const TYPEAHEAD_FIXED_PARAMS: &[(&str, &str)] = &[
    ("include_ext_is_blue_verified", "1"),
    ("src", "search_box"),
    ("result_type", "events,users,topics"),
];
pub const SEARCH_URL: &str = "https://twitter.com/search";

/// Public bearer credential of the web client; session cookies carry the user identity.
pub const WEB_CLIENT_BEARER: &str = "AAAAAAAAAAAAAAAAAAAAANRILgAAAAAAnNwIzUejRCOuH5E6I8xnZz4puTs%3D1Zv7ttfk8LF81IUq16cHjhLTvJu4FA33AGWWjCpTnA";

pub const COOKIE_ENV: &str = "BADGER_COOKIE";
pub const LOG_ENV: &str = "BADGER_LOG";

/// Kinds checked against the tail of the main input, in this order.
pub const TRIGGER_KINDS: [FilterKind; 2] = [FilterKind::From, FilterKind::To];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub debounce: Duration,
    pub request_timeout: Duration,
    pub typeahead_endpoint: String,
    pub search_url: String,
    pub bearer: String,
    pub cookie: Option<String>,
    pub triggers: Vec<FilterKind>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            debounce: DEFAULT_DEBOUNCE,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            typeahead_endpoint: TYPEAHEAD_ENDPOINT.to_owned(),
            search_url: SEARCH_URL.to_owned(),
            bearer: WEB_CLIENT_BEARER.to_owned(),
            cookie: None,
            triggers: TRIGGER_KINDS.to_vec(),
        }
    }
}

impl Config {
    /// Default configuration with the cookie string picked up from the environment.
    pub fn from_env() -> Self {
        let cookie = std::env::var(COOKIE_ENV).ok().filter(|value| !value.trim().is_empty());
        Self { cookie, ..Self::default() }
    }

    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    pub fn with_cookie(mut self, cookie: impl Into<String>) -> Self {
        self.cookie = Some(cookie.into());
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.debounce.is_zero() {
            return Err(ConfigError::ZeroDebounce);
        }
        if self.request_timeout.is_zero() {
            return Err(ConfigError::ZeroTimeout);
        }
        for (field, value) in
            [("typeahead endpoint", &self.typeahead_endpoint), ("search url", &self.search_url)]
        {
            Url::parse(value).map_err(|err| ConfigError::InvalidUrl {
                field,
                value: value.clone(),
                reason: err.to_string(),
            })?;
        }
        if self.triggers.is_empty() {
            return Err(ConfigError::NoTriggers);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    ZeroDebounce,
    ZeroTimeout,
    NoTriggers,
    InvalidUrl { field: &'static str, value: String, reason: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroDebounce => f.write_str("debounce interval must be greater than zero"),
            Self::ZeroTimeout => f.write_str("request timeout must be greater than zero"),
            Self::NoTriggers => f.write_str("at least one trigger kind is required"),
            Self::InvalidUrl { field, value, reason } => {
                write!(f, "invalid {field} '{value}': {reason}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
