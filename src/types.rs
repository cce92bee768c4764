//! Core types used throughout the project.

/// Locale identifier in `language_REGION` form (e.g. `"en_US"`).
///
/// Treated as an opaque, case-sensitive string.
pub type LocaleCode = String;

/// Locale used for both preference slots until something else is chosen.
pub const DEFAULT_LOCALE: &str = "en_US";

/// Separator between the segments of a translation key (`app.menu.title`).
pub const KEY_SEPARATOR: &str = ".";

/// A single `(locale, key, text)` entry produced by a loader.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Triple {
    pub locale: LocaleCode,
    pub key: String,
    pub text: String,
}

impl Triple {
    #[must_use]
    pub fn new(locale: impl Into<LocaleCode>, key: impl Into<String>, text: impl Into<String>) -> Self {
        Self { locale: locale.into(), key: key.into(), text: text.into() }
    }
}

/// Which locale bucket(s) a write applies to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LocaleTarget {
    /// The store's current primary locale.
    #[default]
    Primary,
    One(LocaleCode),
    /// Applied to each locale independently, in list order.
    Many(Vec<LocaleCode>),
}

impl From<&str> for LocaleTarget {
    fn from(locale: &str) -> Self {
        Self::One(locale.to_string())
    }
}

impl From<String> for LocaleTarget {
    fn from(locale: String) -> Self {
        Self::One(locale)
    }
}

impl From<&String> for LocaleTarget {
    fn from(locale: &String) -> Self {
        Self::One(locale.clone())
    }
}

impl From<Vec<LocaleCode>> for LocaleTarget {
    fn from(locales: Vec<LocaleCode>) -> Self {
        Self::Many(locales)
    }
}

impl From<&[&str]> for LocaleTarget {
    fn from(locales: &[&str]) -> Self {
        Self::Many(locales.iter().map(ToString::to_string).collect())
    }
}

impl<const N: usize> From<[&str; N]> for LocaleTarget {
    fn from(locales: [&str; N]) -> Self {
        Self::Many(locales.iter().map(ToString::to_string).collect())
    }
}

impl From<Option<&str>> for LocaleTarget {
    fn from(locale: Option<&str>) -> Self {
        locale.map_or(Self::Primary, Self::from)
    }
}

/// Joins a key prefix and a sub-key with [`KEY_SEPARATOR`].
///
/// An empty prefix yields the sub-key unchanged.
#[must_use]
pub fn join_key(prefix: &str, key: &str) -> String {
    if prefix.is_empty() { key.to_string() } else { format!("{prefix}{KEY_SEPARATOR}{key}") }
}
