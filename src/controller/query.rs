// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Badger-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Badger and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use url::Url;

use super::BadgeList;

/// Badge expressions in creation order, a single space, then the raw input.
pub fn compose_query(badges: &BadgeList, input: &str) -> String {
    format!("{} {input}", badges.expression())
}

pub fn search_url(base: &Url, query: &str) -> String {
    let mut url = base.clone();
    url.query_pairs_mut().append_pair("q", query);
    url.into()
}

#[cfg(test)]
mod tests {
    use url::Url;

    use super::{compose_query, search_url};
    use crate::controller::BadgeList;
    use crate::model::FilterKind;

    #[test]
    fn composes_badges_then_input() {
        let mut badges = BadgeList::default();
        badges.add(FilterKind::From);
        if let Some(badge) = badges.focused_mut() {
            badge.set_value("@alice");
        }
        assert_eq!(compose_query(&badges, "cats"), "(from:@alice) cats");
    }

    #[test]
    fn without_badges_the_separator_is_kept() {
        assert_eq!(compose_query(&BadgeList::default(), "cats"), " cats");
    }

    #[test]
    fn search_url_encodes_the_query() {
        let base = Url::parse("https://twitter.com/search").expect("url");
        assert_eq!(
            search_url(&base, "(from:@alice) cats & dogs"),
            "https://twitter.com/search?q=%28from%3A%40alice%29+cats+%26+dogs"
        );
    }
}
