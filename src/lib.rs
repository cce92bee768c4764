//! i18n-store
//!
//! Thread-safe translation tables keyed by locale, with primary/secondary
//! locale fallback, best-locale matching, and loaders for `.lang`, JSON and
//! CSV translation files.

pub mod config;
pub mod input;
pub mod locale;
pub mod store;
pub mod syntax;
pub mod types;

#[cfg(test)]
mod test_utils;

pub use input::{
    LoadError,
    Loader,
};
pub use locale::match_best_locale;
pub use store::{
    SelfTranslator,
    TranslatedText,
    TranslationStore,
};
pub use syntax::{
    decode_escape_sequences,
    parse_define,
};
pub use types::{
    LocaleTarget,
    Triple,
};
