// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Badger-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Badger and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! HTTP client for the typeahead endpoint.

use std::error::Error;
use std::future::Future;

use reqwest::Client;
use url::Url;

use super::{parse_typeahead, Credentials, FetchError, FetchResult, SuggestionSource};
use crate::config::{Config, TYPEAHEAD_FIXED_PARAMS};

#[derive(Debug, Clone)]
pub struct TypeaheadClient {
    http: Client,
    endpoint: Url,
    credentials: Credentials,
}

impl TypeaheadClient {
    pub fn new(config: &Config) -> Result<Self, Box<dyn Error + Send + Sync>> {
        let http = Client::builder().timeout(config.request_timeout).build()?;
        let endpoint = Url::parse(&config.typeahead_endpoint)?;
        let credentials = Credentials::new(config.bearer.clone(), config.cookie.as_deref());
        if !credentials.is_usable() {
            tracing::warn!("no ct0/gt cookie configured; typeahead requests will fail");
        }
        Ok(Self { http, endpoint, credentials })
    }

    /// Request URL for `query`, including the fixed endpoint parameters.
    pub fn request_url(&self, query: &str) -> Url {
        let mut url = self.endpoint.clone();
        {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in TYPEAHEAD_FIXED_PARAMS {
                pairs.append_pair(key, value);
            }
            pairs.append_pair("q", query);
        }
        url
    }

    pub async fn fetch_users(&self, query: &str) -> FetchResult {
        let headers = self.credentials.headers()?;
        let url = self.request_url(query);
        tracing::debug!(%url, "typeahead request");

        let response = self
            .http
            .get(url)
            .headers(headers)
            .send()
            .await
            .map_err(|err| FetchError::Network(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Network(format!("status {status}")));
        }

        let body = response.text().await.map_err(|err| FetchError::Network(err.to_string()))?;
        let users = parse_typeahead(&body)?;
        tracing::debug!(query, count = users.len(), "typeahead response");
        Ok(users)
    }
}

impl SuggestionSource for TypeaheadClient {
    fn fetch(&self, query: String) -> impl Future<Output = FetchResult> + Send {
        async move { self.fetch_users(&query).await }
    }
}
