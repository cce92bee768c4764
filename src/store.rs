//! The thread-safe translation store.
//!
//! # Invariants
//!
//! 1. **One lock**: the table and the locale preference pair live behind a
//!    single mutex. Every public operation takes it exactly once, so no
//!    operation re-enters it.
//!
//! 2. **Lookups never fail**: `translate` falls back from the explicit locale
//!    (or primary, then secondary) to the [`SelfTranslator`] and finally to the
//!    key itself.
//!
//! 3. **Batches are atomic, loads across files are not**: a batch of triples
//!    is inserted under one lock, so readers never see half of a file.

/// Lookup through the locale fallback chain
mod resolver;
/// locale → key → text table
mod table;
/// Resolved translation text
mod text;

use std::fmt;

use parking_lot::Mutex;
pub use resolver::{
    KeyAsDefault,
    SelfTranslator,
};
pub use table::TranslationTable;
pub use text::TranslatedText;

use crate::locale::{
    match_best_locale,
    system_locale,
};
use crate::types::{
    DEFAULT_LOCALE,
    LocaleCode,
    LocaleTarget,
    Triple,
};

/// Everything guarded by the store lock.
#[derive(Debug)]
struct StoreState {
    table: TranslationTable,
    primary: LocaleCode,
    secondary: LocaleCode,
}

impl StoreState {
    fn new() -> Self {
        Self {
            table: TranslationTable::new(),
            primary: DEFAULT_LOCALE.to_string(),
            secondary: DEFAULT_LOCALE.to_string(),
        }
    }

    /// Best match for `primary` among the other available locales.
    fn auto_secondary(&self, primary: &str) -> LocaleCode {
        let others: Vec<LocaleCode> =
            self.table.locales().into_iter().filter(|locale| locale != primary).collect();
        match_best_locale(primary, &others).unwrap_or_else(|| DEFAULT_LOCALE.to_string())
    }

    fn resolve_target(&self, target: LocaleTarget) -> Vec<LocaleCode> {
        match target {
            LocaleTarget::Primary => vec![self.primary.clone()],
            LocaleTarget::One(locale) => vec![locale],
            LocaleTarget::Many(locales) => locales,
        }
    }
}

/// Translation table with a primary/secondary locale preference.
///
/// Shareable across threads (`Send + Sync`); wrap it in an `Arc` to share.
///
/// # Example
///
/// ```
/// use i18n_store::TranslationStore;
///
/// let store = TranslationStore::new();
/// store.set_translation("en_US", Some("greeting"), Some("Hello"));
/// store.set_translation("zh_CN", Some("greeting"), Some("你好"));
///
/// assert_eq!(store.translate("greeting", None), "Hello");
/// assert_eq!(store.translate("greeting", Some("zh_CN")), "你好");
/// assert_eq!(store.translate("missing", None), "missing");
/// ```
pub struct TranslationStore {
    state: Mutex<StoreState>,
    self_translator: Box<dyn SelfTranslator>,
}

impl Default for TranslationStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TranslationStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TranslationStore").field("state", &self.state).finish_non_exhaustive()
    }
}

impl TranslationStore {
    /// Creates an empty store with both locales set to [`DEFAULT_LOCALE`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_self_translator(KeyAsDefault)
    }

    /// Creates an empty store that consults `self_translator` before falling
    /// back to the key.
    #[must_use]
    pub fn with_self_translator(self_translator: impl SelfTranslator + 'static) -> Self {
        Self { state: Mutex::new(StoreState::new()), self_translator: Box::new(self_translator) }
    }

    /// Sets the locale preference pair.
    ///
    /// * `primary` - new primary locale; `None` keeps the current one
    /// * `secondary` - new secondary locale; when `None` and `auto_adjust` is
    ///   set, the best match for the primary among the other available locales
    ///   is used (or [`DEFAULT_LOCALE`] if nothing matches); when `None`
    ///   without `auto_adjust`, the current secondary is kept
    ///
    /// Primary and secondary may be equal.
    pub fn set_locale(&self, primary: Option<&str>, secondary: Option<&str>, auto_adjust: bool) {
        let mut state = self.state.lock();

        if let Some(primary) = primary {
            state.primary = primary.to_string();
        }

        match secondary {
            Some(secondary) => state.secondary = secondary.to_string(),
            None if auto_adjust => {
                let primary = state.primary.clone();
                state.secondary = state.auto_secondary(&primary);
            }
            None => {}
        }

        tracing::debug!(primary = %state.primary, secondary = %state.secondary, "Locale updated");
    }

    /// Returns `(primary, secondary)`.
    #[must_use]
    pub fn get_locale(&self) -> (LocaleCode, LocaleCode) {
        let state = self.state.lock();
        (state.primary.clone(), state.secondary.clone())
    }

    #[must_use]
    pub fn primary_locale(&self) -> LocaleCode {
        self.state.lock().primary.clone()
    }

    #[must_use]
    pub fn secondary_locale(&self) -> LocaleCode {
        self.state.lock().secondary.clone()
    }

    /// Sets or removes translations.
    ///
    /// | `key`  | `text` | Effect                                  |
    /// |--------|--------|-----------------------------------------|
    /// | `Some` | `Some` | insert or overwrite the entry           |
    /// | `Some` | `None` | remove the entry                        |
    /// | `None` | any    | remove every entry of the locale        |
    ///
    /// `locale` may be a single locale, a list (applied to each, in order), or
    /// [`LocaleTarget::Primary`] for the current primary locale.
    pub fn set_translation(
        &self,
        locale: impl Into<LocaleTarget>,
        key: Option<&str>,
        text: Option<&str>,
    ) {
        let mut state = self.state.lock();
        for locale in state.resolve_target(locale.into()) {
            match (key, text) {
                (Some(key), Some(text)) => state.table.insert(&locale, key, text),
                (Some(key), None) => {
                    state.table.remove(&locale, key);
                }
                (None, _) => {
                    let removed = state.table.remove_locale(&locale);
                    tracing::debug!(%locale, removed, "Removed locale");
                }
            }
        }
    }

    /// Inserts loader triples under a single lock. Returns the number inserted.
    pub fn insert_triples(&self, triples: impl IntoIterator<Item = Triple>) -> usize {
        let mut state = self.state.lock();
        let mut count = 0;
        for triple in triples {
            state.table.insert_triple(triple);
            count += 1;
        }
        count
    }

    /// Locales with at least one entry, sorted.
    #[must_use]
    pub fn available_locales(&self) -> Vec<LocaleCode> {
        self.state.lock().table.locales()
    }

    /// Looks `key` up without the self-translation and key fallbacks.
    ///
    /// With an explicit `locale`, only that locale is searched. Otherwise the
    /// primary locale is searched, then the secondary.
    #[must_use]
    pub fn lookup(&self, key: &str, locale: Option<&str>) -> Option<String> {
        let state = self.state.lock();
        resolver::lookup(&state.table, key, locale, &state.primary, &state.secondary)
            .map(ToString::to_string)
    }

    /// Resolves `key` to text. Never fails.
    ///
    /// # Resolution order
    /// 1. `locale` if given (no further locale fallback)
    /// 2. otherwise the primary locale, then the secondary locale
    /// 3. the store's [`SelfTranslator`]
    /// 4. the key itself
    #[must_use]
    pub fn translate(&self, key: &str, locale: Option<&str>) -> TranslatedText<'_> {
        let text = self.lookup(key, locale).or_else(|| {
            tracing::trace!(key, ?locale, "No translation found; trying self translation");
            self.self_translator.self_translate(key)
        });

        TranslatedText::new(
            text.unwrap_or_else(|| key.to_string()),
            key.to_string(),
            locale.map(ToString::to_string),
            self,
        )
    }

    /// Makes the best available match for the system locale the primary locale.
    ///
    /// Does nothing if the system locale is unknown or nothing matches.
    pub fn auto_set_best_locale(&self) {
        self.set_best_locale_for(&system_locale());
    }

    /// Makes the best available match for `preferred` the primary locale,
    /// re-matching the secondary locale from it.
    pub fn set_best_locale_for(&self, preferred: &str) {
        let mut state = self.state.lock();
        let Some(best) = match_best_locale(preferred, &state.table.locales()) else {
            tracing::debug!(preferred, "No available locale matches");
            return;
        };

        state.secondary = state.auto_secondary(&best);
        state.primary = best;
        tracing::debug!(primary = %state.primary, secondary = %state.secondary, "Best locale set");
    }

    /// Replaces the primary and secondary locales with their best available matches.
    ///
    /// Each slot is left unchanged when nothing matches it.
    pub fn auto_adjust_best_locale(&self) {
        let mut state = self.state.lock();
        let available = state.table.locales();

        if let Some(best) = match_best_locale(&state.primary, &available) {
            state.primary = best;
        }
        if let Some(best) = match_best_locale(&state.secondary, &available) {
            state.secondary = best;
        }
    }

    /// Returns a copy of the current table.
    #[must_use]
    pub fn snapshot(&self) -> TranslationTable {
        self.state.lock().table.clone()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing, clippy::expect_used, clippy::panic)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use googletest::prelude::*;
    use rstest::*;

    use super::*;
    use crate::test_utils::store_with;

    #[rstest]
    fn test_new_store_defaults() {
        let store = TranslationStore::new();

        assert_that!(store.get_locale(), eq(&("en_US".to_string(), "en_US".to_string())));
        assert_that!(store.available_locales(), is_empty());
    }

    #[rstest]
    fn test_set_locale_explicit_pair() {
        let store = TranslationStore::new();

        store.set_locale(Some("zh_CN"), Some("en_US"), true);

        assert_that!(store.primary_locale(), eq("zh_CN"));
        assert_that!(store.secondary_locale(), eq("en_US"));
    }

    #[rstest]
    fn test_set_locale_allows_equal_pair() {
        let store = TranslationStore::new();

        store.set_locale(Some("ru_RU"), Some("ru_RU"), true);

        assert_that!(store.get_locale(), eq(&("ru_RU".to_string(), "ru_RU".to_string())));
    }

    #[rstest]
    fn test_set_locale_auto_adjust_language_match() {
        let store = store_with(&[("zh_CN", "zh_CN", "简体中文"), ("zh_HK", "zh_HK", "繁體中文")]);

        store.set_locale(Some("zh_CN"), None, true);

        assert_that!(store.primary_locale(), eq("zh_CN"));
        assert_that!(store.secondary_locale(), eq("zh_HK"));
    }

    #[rstest]
    fn test_set_locale_auto_adjust_excludes_primary() {
        let store = store_with(&[("zh_CN", "k", "v"), ("ja_JP", "k", "v")]);

        store.set_locale(Some("zh_CN"), None, true);

        // zh_CN itself is not a candidate; ja_JP shares the writing system
        assert_that!(store.secondary_locale(), eq("ja_JP"));
    }

    #[rstest]
    fn test_set_locale_auto_adjust_without_match_resets_default() {
        let store = store_with(&[("ru_RU", "k", "v")]);
        store.set_locale(None, Some("ru_RU"), false);

        store.set_locale(Some("th_TH"), None, true);

        assert_that!(store.secondary_locale(), eq("en_US"));
    }

    #[rstest]
    fn test_set_locale_without_auto_adjust_keeps_secondary() {
        let store = store_with(&[("zh_HK", "k", "v")]);
        store.set_locale(None, Some("ru_RU"), false);

        store.set_locale(Some("zh_CN"), None, false);

        assert_that!(store.get_locale(), eq(&("zh_CN".to_string(), "ru_RU".to_string())));
    }

    #[rstest]
    fn test_set_locale_only_auto_adjusts_secondary() {
        let store = store_with(&[("en_GB", "k", "v")]);

        store.set_locale(None, None, true);

        assert_that!(store.get_locale(), eq(&("en_US".to_string(), "en_GB".to_string())));
    }

    #[rstest]
    fn test_set_translation_many_locales() {
        let store = TranslationStore::new();

        store.set_translation(["en_US", "en_GB"], Some("more_lang"), Some("more lang"));

        assert_that!(store.translate("more_lang", Some("en_US")).as_str(), eq("more lang"));
        assert_that!(store.translate("more_lang", Some("en_GB")).as_str(), eq("more lang"));
        assert_that!(store.available_locales(), elements_are![eq("en_GB"), eq("en_US")]);
    }

    #[rstest]
    fn test_set_translation_primary_target() {
        let store = TranslationStore::new();
        store.set_locale(Some("ja_JP"), None, false);

        store.set_translation(LocaleTarget::Primary, Some("title"), Some("タイトル"));

        assert_that!(store.lookup("title", Some("ja_JP")), some(eq("タイトル")));
    }

    #[rstest]
    fn test_remove_entry_returns_key() {
        let store = store_with(&[("en_US", "greeting", "Hello"), ("en_US", "farewell", "Bye")]);

        store.set_translation("en_US", Some("greeting"), None);

        assert_that!(store.translate("greeting", Some("en_US")).as_str(), eq("greeting"));
        assert_that!(store.available_locales(), elements_are![eq("en_US")]);
    }

    #[rstest]
    fn test_remove_last_entry_drops_locale() {
        let store = store_with(&[("en_US", "greeting", "Hello")]);

        store.set_translation("en_US", Some("greeting"), None);

        assert_that!(store.available_locales(), is_empty());
    }

    #[rstest]
    fn test_remove_locale_bucket() {
        let store = store_with(&[
            ("en_US", "greeting", "Hello"),
            ("en_US", "farewell", "Bye"),
            ("zh_CN", "greeting", "你好"),
        ]);

        store.set_translation("en_US", None, Some("ignored"));

        assert_that!(store.available_locales(), elements_are![eq("zh_CN")]);
        assert_that!(store.translate("farewell", Some("en_US")).as_str(), eq("farewell"));
    }

    #[rstest]
    fn test_remove_entry_in_many_locales() {
        let store = store_with(&[
            ("en_US", "greeting", "Hello"),
            ("en_US", "farewell", "Bye"),
            ("en_GB", "greeting", "Hello"),
            ("en_GB", "farewell", "Cheerio"),
            ("zh_CN", "greeting", "你好"),
        ]);

        store.set_translation(["en_US", "en_GB"], Some("greeting"), None);

        assert_that!(store.lookup("greeting", Some("en_US")), none());
        assert_that!(store.lookup("greeting", Some("en_GB")), none());
        assert_that!(store.lookup("farewell", Some("en_GB")), some(eq("Cheerio")));
        assert_that!(store.lookup("greeting", Some("zh_CN")), some(eq("你好")));
    }

    #[rstest]
    fn test_remove_locale_buckets_in_many_locales() {
        let store = store_with(&[
            ("en_US", "greeting", "Hello"),
            ("en_GB", "greeting", "Hello"),
            ("zh_CN", "greeting", "你好"),
        ]);

        store.set_translation(["en_US", "en_GB"], None, None);

        assert_that!(store.available_locales(), elements_are![eq("zh_CN")]);
    }

    #[rstest]
    fn test_translate_fallback_chain() {
        let store = store_with(&[
            ("zh_CN", "greeting", "你好"),
            ("en_US", "greeting", "Hello"),
            ("en_US", "only_english", "English only"),
        ]);
        store.set_locale(Some("zh_CN"), Some("en_US"), false);

        assert_that!(store.translate("greeting", None).as_str(), eq("你好"));
        assert_that!(store.translate("only_english", None).as_str(), eq("English only"));
        assert_that!(store.translate("only_english", Some("zh_CN")).as_str(), eq("only_english"));
        assert_that!(store.translate("nothing", None).as_str(), eq("nothing"));
    }

    #[rstest]
    fn test_translate_uses_self_translator_before_key() {
        let store = TranslationStore::with_self_translator(|key: &str| {
            key.strip_prefix("env.").map(|name| format!("<{name}>"))
        });
        store.set_translation("en_US", Some("env.home"), Some("Home"));

        assert_that!(store.translate("env.home", None).as_str(), eq("Home"));
        assert_that!(store.translate("env.user", None).as_str(), eq("<user>"));
        assert_that!(store.translate("other", None).as_str(), eq("other"));
        // explicit locale misses still reach the self translator
        assert_that!(store.translate("env.home", Some("ru_RU")).as_str(), eq("<home>"));
    }

    #[rstest]
    fn test_set_best_locale_for() {
        let store = store_with(&[("en_GB", "k", "v"), ("zh_TW", "k", "v"), ("zh_HK", "k", "v")]);

        store.set_best_locale_for("zh_CN");

        assert_that!(store.get_locale(), eq(&("zh_HK".to_string(), "zh_TW".to_string())));
    }

    #[rstest]
    fn test_set_best_locale_for_without_match() {
        let store = store_with(&[("en_GB", "k", "v")]);

        store.set_best_locale_for("th_TH");
        store.set_best_locale_for("");

        assert_that!(store.get_locale(), eq(&("en_US".to_string(), "en_US".to_string())));
    }

    #[rstest]
    fn test_auto_adjust_best_locale() {
        let store = store_with(&[("en_GB", "k", "v"), ("zh_TW", "k", "v")]);
        store.set_locale(Some("en_US"), Some("zh_CN"), false);

        store.auto_adjust_best_locale();

        assert_that!(store.get_locale(), eq(&("en_GB".to_string(), "zh_TW".to_string())));
    }

    #[rstest]
    fn test_auto_adjust_best_locale_keeps_unmatched() {
        let store = store_with(&[("en_GB", "k", "v")]);
        store.set_locale(Some("th_TH"), Some("en_US"), false);

        store.auto_adjust_best_locale();

        assert_that!(store.get_locale(), eq(&("th_TH".to_string(), "en_GB".to_string())));
    }

    #[rstest]
    fn test_insert_triples_counts() {
        let store = TranslationStore::new();

        let count = store.insert_triples(vec![
            Triple::new("en_US", "a", "A"),
            Triple::new("en_US", "b", "B"),
        ]);

        assert_that!(count, eq(2));
        assert_that!(store.snapshot().len(), eq(2));
    }

    #[rstest]
    fn test_concurrent_readers_and_writers() {
        let store = Arc::new(TranslationStore::new());

        let handles: Vec<_> = (0..8)
            .map(|worker| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    for i in 0..100 {
                        let key = format!("key{worker}_{i}");
                        store.set_translation("en_US", Some(&key), Some("value"));
                        assert_eq!(store.translate(&key, None), "value");
                        let _ = store.available_locales();
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_that!(store.snapshot().len(), eq(800));
    }
}
