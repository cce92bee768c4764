//! Test utilities shared by several test modules.
#![cfg(test)]
#![allow(clippy::unwrap_used)]

use std::fs;
use std::path::Path;

use crate::store::TranslationStore;
use crate::types::Triple;

/// Creates a store holding the given `(locale, key, text)` entries.
///
/// Locale preferences are left at their defaults.
pub(crate) fn store_with(entries: &[(&str, &str, &str)]) -> TranslationStore {
    let store = TranslationStore::new();
    store.insert_triples(
        entries.iter().map(|(locale, key, text)| Triple::new(*locale, *key, *text)),
    );
    store
}

/// Writes `content` to `root/relative`, creating parent directories.
pub(crate) fn write_file(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}
