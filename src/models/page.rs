// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Paginated response envelope shared by every Oura usercollection endpoint.

use serde::{Deserialize, Deserializer, Serialize};

/// One page of records: `{ "data": [...], "next_token": ... }`.
///
/// Only the first page is ever consumed. `next_token` is kept so callers
/// can see that more data existed, but it is never followed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    #[serde(default)]
    pub next_token: Option<String>,
}

impl<T> Page<T> {
    /// The record that represents the window.
    ///
    /// When several records come back (e.g. a nap plus a night's sleep),
    /// the last one in response order wins. Returns `None` for an empty page.
    pub fn select_authoritative(&self) -> Option<&T> {
        self.data.last()
    }

    /// Consuming variant of [`Page::select_authoritative`].
    pub fn into_authoritative(self) -> Option<T> {
        self.data.into_iter().last()
    }

    pub fn has_more(&self) -> bool {
        self.next_token.is_some()
    }
}

/// Decode `null` or a missing field as the type's default.
///
/// Oura leaves scores and durations `null` while a day is still being
/// processed; those render as zero.
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_authoritative_empty() {
        let page: Page<u32> = Page {
            data: vec![],
            next_token: None,
        };
        assert_eq!(page.select_authoritative(), None);
        assert_eq!(page.into_authoritative(), None);
    }

    #[test]
    fn test_select_authoritative_last_wins() {
        let page = Page {
            data: vec!["a", "b", "c"],
            next_token: None,
        };
        assert_eq!(page.select_authoritative(), Some(&"c"));
        assert_eq!(page.into_authoritative(), Some("c"));
    }

    #[test]
    fn test_next_token_optional() {
        let page: Page<u32> = serde_json::from_str(r#"{"data":[1,2]}"#).unwrap();
        assert!(!page.has_more());

        let page: Page<u32> =
            serde_json::from_str(r#"{"data":[1],"next_token":null}"#).unwrap();
        assert!(!page.has_more());

        let page: Page<u32> =
            serde_json::from_str(r#"{"data":[],"next_token":"abc"}"#).unwrap();
        assert!(page.has_more());
        assert_eq!(page.select_authoritative(), None);
    }

    #[test]
    fn test_missing_data_is_an_error() {
        assert!(serde_json::from_str::<Page<u32>>(r#"{"next_token":null}"#).is_err());
        assert!(serde_json::from_str::<Page<u32>>("not json").is_err());
    }
}
