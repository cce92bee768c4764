//! Translation resolution through the locale fallback chain.

use super::table::TranslationTable;

/// Last-resort resolver consulted when no locale bucket has the key.
///
/// Implementations must not call back into the store that owns them.
pub trait SelfTranslator: Send + Sync {
    /// Returns the text for `key`, or `None` to fall back to the key itself.
    fn self_translate(&self, key: &str) -> Option<String>;
}

/// The default [`SelfTranslator`]: resolves nothing, so lookups fall back to the key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyAsDefault;

impl SelfTranslator for KeyAsDefault {
    fn self_translate(&self, _key: &str) -> Option<String> {
        None
    }
}

impl<F> SelfTranslator for F
where
    F: Fn(&str) -> Option<String> + Send + Sync,
{
    fn self_translate(&self, key: &str) -> Option<String> {
        self(key)
    }
}

/// Looks `key` up in the table.
///
/// # Priority
/// 1. `locale`, if given, and nothing else
/// 2. `primary`
/// 3. `secondary`
pub(crate) fn lookup<'t>(
    table: &'t TranslationTable,
    key: &str,
    locale: Option<&str>,
    primary: &str,
    secondary: &str,
) -> Option<&'t str> {
    if let Some(locale) = locale {
        return table.get(locale, key);
    }

    table.get(primary, key).or_else(|| table.get(secondary, key))
}
