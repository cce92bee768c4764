//! The in-memory translation table.

use std::collections::HashMap;

use crate::types::{
    LocaleCode,
    Triple,
};

/// locale → key → text.
///
/// A (locale, key) pair holds at most one text. A locale bucket exists only
/// while it holds at least one entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationTable {
    buckets: HashMap<LocaleCode, HashMap<String, String>>,
}

impl TranslationTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or overwrites a single entry.
    pub fn insert(&mut self, locale: &str, key: impl Into<String>, text: impl Into<String>) {
        self.buckets.entry(locale.to_string()).or_default().insert(key.into(), text.into());
    }

    /// Inserts a loader triple.
    pub fn insert_triple(&mut self, triple: Triple) {
        let Triple { locale, key, text } = triple;
        self.buckets.entry(locale).or_default().insert(key, text);
    }

    /// Removes a single entry, dropping the locale bucket once it is empty.
    pub fn remove(&mut self, locale: &str, key: &str) -> Option<String> {
        let bucket = self.buckets.get_mut(locale)?;
        let removed = bucket.remove(key);
        if bucket.is_empty() {
            self.buckets.remove(locale);
        }
        removed
    }

    /// Removes every entry of a locale. Returns the number of entries removed.
    pub fn remove_locale(&mut self, locale: &str) -> usize {
        self.buckets.remove(locale).map_or(0, |bucket| bucket.len())
    }

    #[must_use]
    pub fn get(&self, locale: &str, key: &str) -> Option<&str> {
        self.buckets.get(locale)?.get(key).map(String::as_str)
    }

    /// Locales holding at least one entry, sorted.
    #[must_use]
    pub fn locales(&self) -> Vec<LocaleCode> {
        let mut locales: Vec<LocaleCode> = self.buckets.keys().cloned().collect();
        locales.sort_unstable();
        locales
    }

    /// Total number of entries across all locales.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buckets.values().map(HashMap::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

impl FromIterator<Triple> for TranslationTable {
    fn from_iter<T: IntoIterator<Item = Triple>>(iter: T) -> Self {
        let mut table = Self::new();
        table.extend(iter);
        table
    }
}

impl Extend<Triple> for TranslationTable {
    fn extend<T: IntoIterator<Item = Triple>>(&mut self, iter: T) {
        for triple in iter {
            self.insert_triple(triple);
        }
    }
}
