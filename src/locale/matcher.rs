//! Best-locale matching.

use super::writing_system::writing_system_of;
use crate::types::LocaleCode;

/// Picks the closest locale to `target` from `available`.
///
/// # Matching priority
/// 1. Exact match
/// 2. Same language: the first candidate starting with the part of `target`
///    before its first `_` (the whole string if there is none)
/// 3. Same writing system: the first candidate sharing the first writing system
///    that contains `target`
/// 4. None
///
/// # Examples
/// ```
/// use i18n_store::locale::match_best_locale;
///
/// assert_eq!(match_best_locale("en_US", &["en_GB", "ru_RU"]), Some("en_GB".to_string()));
/// assert_eq!(match_best_locale("en_US", &["zh_CN", "ru_RU"]), None);
/// ```
#[must_use]
pub fn match_best_locale<S: AsRef<str>>(target: &str, available: &[S]) -> Option<LocaleCode> {
    if target.is_empty() || available.is_empty() {
        return None;
    }

    let mut candidates = available.iter().map(AsRef::<str>::as_ref);

    // 1. exact
    if let Some(exact) = candidates.clone().find(|locale| *locale == target) {
        return Some(exact.to_string());
    }

    // 2. language prefix
    let language = target.split_once('_').map_or(target, |(language, _)| language);
    if let Some(same_language) = candidates.clone().find(|locale| locale.starts_with(language)) {
        return Some(same_language.to_string());
    }

    // 3. writing system
    let system = writing_system_of(target)?;
    candidates.find(|locale| system.contains(locale)).map(ToString::to_string)
}
