//! Resolved translation text.

use std::fmt;
use std::ops::Deref;

use super::TranslationStore;
use crate::types::{
    LocaleCode,
    join_key,
};

/// A resolved translation that remembers where it came from.
///
/// Dereferences to the resolved text. The originating store, key and explicit
/// locale are kept so child keys can be resolved with [`Self::resolve_child`].
#[derive(Debug, Clone)]
pub struct TranslatedText<'s> {
    text: String,
    key: String,
    locale: Option<LocaleCode>,
    store: &'s TranslationStore,
}

impl<'s> TranslatedText<'s> {
    pub(crate) const fn new(
        text: String,
        key: String,
        locale: Option<LocaleCode>,
        store: &'s TranslationStore,
    ) -> Self {
        Self { text, key, locale, store }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The key this text was resolved from.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The explicit locale of the lookup, if one was given.
    #[must_use]
    pub fn locale(&self) -> Option<&str> {
        self.locale.as_deref()
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.text
    }

    /// Resolves `key + "." + segment` through the same store and locale.
    ///
    /// # Examples
    /// ```
    /// use i18n_store::TranslationStore;
    ///
    /// let store = TranslationStore::new();
    /// store.set_translation("en_US", Some("menu.file.open"), Some("Open"));
    ///
    /// let menu = store.translate("menu", None);
    /// assert_eq!(menu, "menu");
    /// assert_eq!(menu.resolve_child("file").resolve_child("open"), "Open");
    /// ```
    #[must_use]
    pub fn resolve_child(&self, segment: &str) -> Self {
        let child_key = join_key(&self.key, segment);
        self.store.translate(&child_key, self.locale.as_deref())
    }

    /// Substitutes `{0}`, `{1}`, … with `positional` and `{name}` with `named`.
    ///
    /// Placeholders without a value are left as written.
    ///
    /// # Examples
    /// ```
    /// use i18n_store::TranslationStore;
    ///
    /// let store = TranslationStore::new();
    /// store.set_translation("en_US", Some("welcome"), Some("Hi {0}, you have {count} messages"));
    ///
    /// let text = store.translate("welcome", None).sformat(&[&"Ann"], &[("count", &3)]);
    /// assert_eq!(text, "Hi Ann, you have 3 messages");
    /// ```
    #[must_use]
    pub fn sformat(
        &self,
        positional: &[&dyn fmt::Display],
        named: &[(&str, &dyn fmt::Display)],
    ) -> String {
        let mut result = self.text.clone();
        for (index, value) in positional.iter().enumerate() {
            result = result.replace(&format!("{{{index}}}"), &value.to_string());
        }
        for (name, value) in named {
            result = result.replace(&format!("{{{name}}}"), &value.to_string());
        }
        result
    }
}

impl Deref for TranslatedText<'_> {
    type Target = str;

    fn deref(&self) -> &str {
        &self.text
    }
}

impl AsRef<str> for TranslatedText<'_> {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for TranslatedText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<TranslatedText<'_>> for String {
    fn from(text: TranslatedText<'_>) -> Self {
        text.text
    }
}

impl PartialEq for TranslatedText<'_> {
    /// Compares text only.
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for TranslatedText<'_> {}

impl PartialEq<str> for TranslatedText<'_> {
    fn eq(&self, other: &str) -> bool {
        self.text == other
    }
}

impl PartialEq<&str> for TranslatedText<'_> {
    fn eq(&self, other: &&str) -> bool {
        self.text == *other
    }
}

impl PartialEq<String> for TranslatedText<'_> {
    fn eq(&self, other: &String) -> bool {
        &self.text == other
    }
}
