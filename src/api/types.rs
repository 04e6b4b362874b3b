// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Badger-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Badger and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Wire types of the typeahead endpoint.

use serde::Deserialize;

use super::FetchError;
use crate::model::Suggestion;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TypeaheadResponse {
    #[serde(default)]
    pub users: Option<Vec<TypeaheadUser>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TypeaheadUser {
    pub name: String,
    pub screen_name: String,
    #[serde(default)]
    pub profile_image_url_https: Option<String>,
    #[serde(default)]
    pub verified: Option<bool>,
    #[serde(default)]
    pub result_context: Option<ResultContext>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ResultContext {
    #[serde(default)]
    pub display_string: Option<String>,
}

impl From<TypeaheadUser> for Suggestion {
    fn from(user: TypeaheadUser) -> Self {
        Self {
            display_name: user.name,
            handle: user.screen_name,
            avatar_url: user.profile_image_url_https.unwrap_or_default(),
            verified: user.verified.unwrap_or(false),
            context_label: user
                .result_context
                .and_then(|context| context.display_string)
                .unwrap_or_default(),
        }
    }
}

/// Parses a typeahead body; a missing `users` array means no suggestions.
pub fn parse_typeahead(body: &str) -> Result<Vec<Suggestion>, FetchError> {
    let response: TypeaheadResponse =
        serde_json::from_str(body).map_err(|err| FetchError::MalformedResponse(err.to_string()))?;
    Ok(response.users.unwrap_or_default().into_iter().map(Suggestion::from).collect())
}

#[cfg(test)]
mod tests {
    use super::parse_typeahead;
    use crate::api::FetchError;

    #[test]
    fn parses_users_with_all_fields() {
        let body = r#"{
            "num_results": 1,
            "users": [{
                "id": 12,
                "name": "Alice",
                "screen_name": "alice",
                "profile_image_url_https": "https://pbs.example/alice.jpg",
                "verified": true,
                "result_context": { "display_string": "Followed by Bob", "types": [] }
            }],
            "topics": [],
            "events": []
        }"#;
        let users = parse_typeahead(body).expect("parse");
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].display_name, "Alice");
        assert_eq!(users[0].handle, "alice");
        assert_eq!(users[0].avatar_url, "https://pbs.example/alice.jpg");
        assert!(users[0].verified);
        assert_eq!(users[0].context_label, "Followed by Bob");
    }

    #[test]
    fn optional_fields_default() {
        let body = r#"{"users":[{"name":"Bob","screen_name":"bob","verified":null}]}"#;
        let users = parse_typeahead(body).expect("parse");
        assert!(!users[0].verified);
        assert!(users[0].avatar_url.is_empty());
        assert!(users[0].context_label.is_empty());
    }

    #[test]
    fn missing_users_is_empty() {
        assert!(parse_typeahead(r#"{"topics":[]}"#).expect("parse").is_empty());
        assert!(parse_typeahead(r#"{"users":null}"#).expect("parse").is_empty());
    }

    #[test]
    fn rejects_non_json_and_missing_required_fields() {
        assert!(matches!(parse_typeahead("<html>"), Err(FetchError::MalformedResponse(_))));
        assert!(matches!(
            parse_typeahead(r#"{"users":[{"name":"NoHandle"}]}"#),
            Err(FetchError::MalformedResponse(_))
        ));
    }
}
