// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Badger-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Badger and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, InvalidHeaderValue, AUTHORIZATION};

use super::FetchError;

const CSRF_COOKIE: &str = "ct0";
const GUEST_COOKIE: &str = "gt";

/// Returns the value of cookie `name` from a `Cookie`-header style string.
pub fn cookie_value<'a>(cookies: &'a str, name: &str) -> Option<&'a str> {
    cookies.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        (key == name).then_some(value)
    })
}

#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    bearer: String,
    cookie: Option<String>,
    csrf_token: Option<String>,
    guest_token: Option<String>,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("csrf_token", &self.csrf_token.is_some())
            .field("guest_token", &self.guest_token.is_some())
            .finish_non_exhaustive()
    }
}

impl Credentials {
    pub fn new(bearer: impl Into<String>, cookie: Option<&str>) -> Self {
        let cookie = cookie.map(str::trim).filter(|value| !value.is_empty());
        Self {
            bearer: bearer.into(),
            csrf_token: cookie.and_then(|c| cookie_value(c, CSRF_COOKIE)).map(str::to_owned),
            guest_token: cookie.and_then(|c| cookie_value(c, GUEST_COOKIE)).map(str::to_owned),
            cookie: cookie.map(str::to_owned),
        }
    }

    pub fn csrf_token(&self) -> Option<&str> {
        self.csrf_token.as_deref()
    }

    pub fn guest_token(&self) -> Option<&str> {
        self.guest_token.as_deref()
    }

    pub fn is_usable(&self) -> bool {
        self.csrf_token.is_some() || self.guest_token.is_some()
    }

    /// Request headers for the typeahead endpoint.
    pub fn headers(&self) -> Result<HeaderMap, FetchError> {
        if !self.is_usable() {
            return Err(FetchError::AuthMissing);
        }
        self.build_headers()
            .map_err(|err| FetchError::Network(format!("invalid credential header: {err}")))
    }

    fn build_headers(&self) -> Result<HeaderMap, InvalidHeaderValue> {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_str(&format!("Bearer {}", self.bearer))?);
        headers.insert(reqwest::header::ACCEPT, HeaderValue::from_static("*/*"));
        headers.insert(
            HeaderName::from_static("x-twitter-active-user"),
            HeaderValue::from_static("yes"),
        );
        headers.insert(
            HeaderName::from_static("x-twitter-client-language"),
            HeaderValue::from_static("en"),
        );
        if let Some(cookie) = &self.cookie {
            headers.insert(reqwest::header::COOKIE, HeaderValue::from_str(cookie)?);
        }
        if let Some(token) = &self.csrf_token {
            headers.insert(HeaderName::from_static("x-csrf-token"), HeaderValue::from_str(token)?);
        }
        if let Some(token) = &self.guest_token {
            headers.insert(HeaderName::from_static("x-guest-token"), HeaderValue::from_str(token)?);
        }
        Ok(headers)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{cookie_value, Credentials};
    use crate::api::FetchError;

    #[rstest]
    #[case("ct0=abc; gt=123", "ct0", Some("abc"))]
    #[case("lang=en;gt=123", "gt", Some("123"))]
    #[case("xct0=zzz; ct0=abc", "ct0", Some("abc"))]
    #[case("lang=en", "ct0", None)]
    #[case("", "ct0", None)]
    fn reads_cookie_values(#[case] cookies: &str, #[case] name: &str, #[case] expected: Option<&str>) {
        assert_eq!(cookie_value(cookies, name), expected);
    }

    #[test]
    fn credentials_without_tokens_are_rejected() {
        let credentials = Credentials::new("bearer", Some("lang=en"));
        assert!(!credentials.is_usable());
        assert_eq!(credentials.headers(), Err(FetchError::AuthMissing));
        assert_eq!(Credentials::new("bearer", None).headers(), Err(FetchError::AuthMissing));
    }

    #[test]
    fn headers_carry_bearer_and_tokens() {
        let credentials = Credentials::new("tok", Some("ct0=csrf; gt=guest"));
        let headers = credentials.headers().expect("headers");
        assert_eq!(headers["authorization"], "Bearer tok");
        assert_eq!(headers["x-csrf-token"], "csrf");
        assert_eq!(headers["x-guest-token"], "guest");
        assert_eq!(headers["cookie"], "ct0=csrf; gt=guest");
    }

    #[test]
    fn debug_output_hides_secrets() {
        let credentials = Credentials::new("secret-bearer", Some("ct0=secret-csrf"));
        let debug = format!("{credentials:?}");
        assert!(!debug.contains("secret"));
    }
}
