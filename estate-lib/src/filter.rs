//! Filter forms: a local draft of filter query parameters.
//!
//! Editing a filter only changes the draft. Submitting writes the draft to
//! the URL in one navigation step and sends the user back to page 1, so the
//! data-fetching layer sees a single `(page, size, filter)` change.

use std::collections::BTreeMap;

use log::debug;

use crate::navigation::{Navigation, QueryUpdate};
use crate::table::PAGE_PARAM;

/// Draft values for a fixed set of filter keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterDraft {
    keys: Vec<String>,
    values: BTreeMap<String, String>,
}

impl FilterDraft {
    /// Create an empty draft for the given filter keys.
    pub fn new<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
            values: BTreeMap::new(),
        }
    }

    /// Create a draft for `keys` pre-filled from the current URL.
    pub fn from_navigation<N, I, S>(navigation: &N, keys: I) -> Self
    where
        N: Navigation,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut draft = Self::new(keys);
        draft.hydrate(navigation);
        draft
    }

    /// Replace the draft with the filter values currently in the URL.
    pub fn hydrate<N: Navigation>(&mut self, navigation: &N) {
        let location = navigation.location();
        self.values = self
            .keys
            .iter()
            .filter_map(|key| {
                location
                    .query(key)
                    .map(|value| (key.clone(), value.to_string()))
            })
            .collect();
    }

    /// The filter keys this draft manages.
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// Draft value of a key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Set a draft value. Returns `false` if `key` is not a filter key.
    pub fn set(&mut self, key: &str, value: impl Into<String>) -> bool {
        if !self.keys.iter().any(|k| k == key) {
            return false;
        }
        self.values.insert(key.to_string(), value.into());
        true
    }

    /// Remove a draft value.
    pub fn clear_key(&mut self, key: &str) {
        self.values.remove(key);
    }

    /// Check whether the draft differs from what the URL holds.
    pub fn is_dirty<N: Navigation>(&self, navigation: &N) -> bool {
        let location = navigation.location();
        self.keys.iter().any(|key| {
            let draft = self.get(key).map(str::trim).filter(|v| !v.is_empty());
            draft != location.query(key)
        })
    }

    /// Write the draft to the URL.
    ///
    /// Blank values remove their key. If the URL carries a `page`, it is reset
    /// to 1. Query parameters that are not filter keys are left untouched.
    pub fn submit<N: Navigation>(&self, navigation: &N) {
        let mut updates: Vec<QueryUpdate> = self
            .keys
            .iter()
            .map(|key| match self.get(key).map(str::trim) {
                Some(value) if !value.is_empty() => QueryUpdate::set(key.as_str(), value),
                _ => QueryUpdate::remove(key.as_str()),
            })
            .collect();
        if navigation.query(PAGE_PARAM).is_some() {
            updates.push(QueryUpdate::set(PAGE_PARAM, 1));
        }
        debug!("filter: submit {:?}", self.values);
        navigation.set_query(&updates);
    }

    /// Clear the draft and remove every filter key from the URL.
    pub fn reset<N: Navigation>(&mut self, navigation: &N) {
        self.values.clear();
        self.submit(navigation);
    }
}
