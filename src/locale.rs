//! Locale matching and locale reference data.

/// Best-locale matching
mod matcher;
/// Static writing-system data
pub mod writing_system;

pub use matcher::match_best_locale;
pub use writing_system::{
    WRITING_SYSTEMS,
    WritingSystem,
    language_name,
    writing_system_of,
};

use crate::types::LocaleCode;

/// Environment variable holding the system locale (e.g. `zh_CN.UTF-8`).
const LANG_ENV: &str = "LANG";

/// Returns the system locale code from `LANG`, without its encoding suffix.
///
/// Returns an empty string if the variable is unset or not valid Unicode.
#[must_use]
pub fn system_locale() -> LocaleCode {
    std::env::var(LANG_ENV).map_or_else(|_| String::new(), |value| strip_encoding(&value))
}

/// `zh_CN.UTF-8` → `zh_CN`
fn strip_encoding(value: &str) -> LocaleCode {
    value.split('.').next().unwrap_or_default().to_string()
}

/// Heuristically checks whether a name looks like a locale code.
///
/// Accepts a 2-3 letter language followed by any number of `_`-separated
/// subtags of 1-8 ASCII alphanumerics (`en`, `EN_US`, `yi_001`,
/// `sr_Latn_RS`, `ca_ES_VALENCIA`).
#[must_use]
pub fn looks_like_locale(name: &str) -> bool {
    let mut parts = name.split('_');
    let language_ok = parts.next().is_some_and(|language| {
        (2..=3).contains(&language.len()) && language.chars().all(|c| c.is_ascii_alphabetic())
    });

    language_ok
        && parts.all(|subtag| {
            (1..=8).contains(&subtag.len()) && subtag.chars().all(|c| c.is_ascii_alphanumeric())
        })
}
