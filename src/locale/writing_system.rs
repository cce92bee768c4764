//! Static writing-system reference data.
//!
//! Locales are grouped by the script their language is written in. The locale
//! matcher uses these groups as a last-resort similarity signal, so the order
//! of [`WRITING_SYSTEMS`] (and of the locales inside each group) is part of the
//! matching contract.
//!
//! The groups intentionally depart from the commonly copied upstream table:
//! `et_EE` is listed under Latin, and Georgian and Tamil take part in matching.

use std::collections::HashMap;
use std::sync::LazyLock;

/// A named group of locales sharing a script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WritingSystem {
    pub name: &'static str,
    /// `(locale code, human-readable language name)` pairs.
    pub languages: &'static [(&'static str, &'static str)],
}

impl WritingSystem {
    /// Returns true if `locale` belongs to this writing system.
    #[must_use]
    pub fn contains(&self, locale: &str) -> bool {
        self.languages.iter().any(|(code, _)| *code == locale)
    }

    /// Iterates over the locale codes of this writing system.
    pub fn locales(&self) -> impl Iterator<Item = &'static str> {
        self.languages.iter().map(|(code, _)| *code)
    }
}

pub const LATIN_ALPHABET: WritingSystem = WritingSystem {
    name: "Latin Alphabet",
    languages: &[
        ("en_US", "English (United States)"),
        ("en_GB", "English (United Kingdom)"),
        ("es_ES", "Español (España)"),
        ("fr_FR", "Français (France)"),
        ("de_DE", "Deutsch (Deutschland)"),
        ("it_IT", "Italiano (Italia)"),
        ("pt_PT", "Português (Portugal)"),
        ("pt_BR", "Português (Brasil)"),
        ("en_SG", "English (Singapore)"),
        ("ms_SG", "Bahasa Melayu (Singapura)"),
        ("en_MY", "English (Malaysia)"),
        ("ms_MY", "Bahasa Melayu (Malaysia)"),
        ("et_EE", "Eesti (Eesti)"),
    ],
};

/// Han characters. Japanese and Korean are included since both scripts borrow Han.
pub const CHINESE_CHARACTERS: WritingSystem = WritingSystem {
    name: "Chinese Characters",
    languages: &[
        ("zh_CN", "简体中文 (中国)"),
        ("zh_HK", "繁體中文 (中國香港)"),
        ("zh_MO", "繁體中文 (中國澳門)"),
        ("zh_TW", "繁體中文 (中國台灣)"),
        ("zh_SG", "中文 (新加坡)"),
        ("zh_MY", "中文 (马来西亚)"),
        ("ja_JP", "日本語 (日本)"),
        ("ko_KR", "한국어 (대한민국)"),
        ("ko_KP", "조선말 (조선 민주주의 인민 공화국)"),
    ],
};

pub const CYRILLIC_ALPHABET: WritingSystem = WritingSystem {
    name: "Cyrillic Alphabet",
    languages: &[
        ("ru_RU", "Русский (Россия)"),
        ("uk_UA", "Українська (Україна)"),
        ("bg_BG", "Български (България)"),
        ("sr_RS", "Српски (Србија)"),
    ],
};

pub const ARABIC_ALPHABET: WritingSystem = WritingSystem {
    name: "Arabic Alphabet",
    languages: &[
        ("ar_SA", "العربية (المملكة العربية السعودية)"),
        ("ar_EG", "العربية (مصر)"),
        ("fa_IR", "فارسی (ایران)"),
        ("ur_PK", "اُردُو (پاکستان)"),
    ],
};

pub const DEVANAGARI_ALPHABET: WritingSystem = WritingSystem {
    name: "Devanagari Alphabet",
    languages: &[("hi_IN", "हिंदी (भारत)"), ("ne_NP", "नेपाली (नेपाल)")],
};

pub const GREEK_ALPHABET: WritingSystem = WritingSystem {
    name: "Greek Alphabet",
    languages: &[("el_GR", "Ελληνικά (Ελλάδα)"), ("el_CY", "Ελληνικά (Κύπρος)")],
};

pub const JAPANESE_KANA: WritingSystem =
    WritingSystem { name: "Japanese Kana", languages: &[("ja_JP", "日本語 (日本)")] };

pub const HANGUL: WritingSystem = WritingSystem {
    name: "Hangul",
    languages: &[("ko_KR", "한국어 (대한민국)"), ("ko_KP", "조선말 (조선 민주주의 인민 공화국)")],
};

pub const THAI_ALPHABET: WritingSystem =
    WritingSystem { name: "Thai Alphabet", languages: &[("th_TH", "ไทย (ประเทศไทย)")] };

pub const HEBREW_ALPHABET: WritingSystem = WritingSystem {
    name: "Hebrew Alphabet",
    languages: &[("he_IL", "עברית (ישראל)"), ("yi_001", "ייִדיש (יידיש)")],
};

pub const KHMER_ALPHABET: WritingSystem =
    WritingSystem { name: "Khmer Alphabet", languages: &[("km_KH", "ភាសាខ្មែរ (កម្ពុជា)")] };

pub const ETHIOPIC_SCRIPT: WritingSystem = WritingSystem {
    name: "Ethiopic or Ge'ez Script",
    languages: &[("am_ET", "አማርኛ (ኢትዮጵያ)"), ("ti_ER", "ትግርኛ (ኤርትራ)")],
};

pub const GEORGIAN_ALPHABET: WritingSystem =
    WritingSystem { name: "Georgian Alphabet", languages: &[("ka_GE", "ქართული (საქართველო)")] };

pub const TAMIL_SCRIPT: WritingSystem = WritingSystem {
    name: "Tamil Script",
    languages: &[
        ("ta_IN", "தமிழ் (இந்தியா)"),
        ("ta_LK", "தமிழ் (இலங்கை)"),
        ("ta_MY", "தமிழ் (மலேசியா)"),
        ("ta_SG", "தமிழ் (சிங்கப்பூர்)"),
    ],
};

/// All writing systems, in matching order.
pub const WRITING_SYSTEMS: &[WritingSystem] = &[
    LATIN_ALPHABET,
    CHINESE_CHARACTERS,
    CYRILLIC_ALPHABET,
    ARABIC_ALPHABET,
    DEVANAGARI_ALPHABET,
    GREEK_ALPHABET,
    JAPANESE_KANA,
    HANGUL,
    THAI_ALPHABET,
    HEBREW_ALPHABET,
    KHMER_ALPHABET,
    ETHIOPIC_SCRIPT,
    GEORGIAN_ALPHABET,
    TAMIL_SCRIPT,
];

/// Locale code → language name, merged across all writing systems.
static LANGUAGE_NAMES: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    WRITING_SYSTEMS.iter().flat_map(|system| system.languages.iter().copied()).collect()
});

/// Returns the first writing system (in [`WRITING_SYSTEMS`] order) containing `locale`.
#[must_use]
pub fn writing_system_of(locale: &str) -> Option<&'static WritingSystem> {
    WRITING_SYSTEMS.iter().find(|system| system.contains(locale))
}

/// Returns the human-readable name of a known locale.
///
/// # Examples
/// ```
/// use i18n_store::locale::language_name;
///
/// assert_eq!(language_name("fr_FR"), Some("Français (France)"));
/// assert_eq!(language_name("xx_XX"), None);
/// ```
#[must_use]
pub fn language_name(locale: &str) -> Option<&'static str> {
    LANGUAGE_NAMES.get(locale).copied()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing, clippy::expect_used, clippy::panic)]
mod tests {
    use googletest::prelude::*;
    use rstest::*;

    use super::*;

    #[rstest]
    #[case("en_US", "Latin Alphabet")]
    #[case("zh_TW", "Chinese Characters")]
    // ja_JP is listed under Han first, Kana second
    #[case("ja_JP", "Chinese Characters")]
    #[case("ko_KP", "Chinese Characters")]
    #[case("uk_UA", "Cyrillic Alphabet")]
    #[case("yi_001", "Hebrew Alphabet")]
    #[case("ta_SG", "Tamil Script")]
    fn test_writing_system_of(#[case] locale: &str, #[case] expected: &str) {
        assert_that!(writing_system_of(locale).map(|system| system.name), some(eq(expected)));
    }

    #[rstest]
    fn test_writing_system_of_unknown() {
        assert_that!(writing_system_of("xx_XX"), none());
        assert_that!(writing_system_of(""), none());
    }

    #[rstest]
    fn test_language_name() {
        assert_that!(language_name("zh_CN"), some(eq("简体中文 (中国)")));
        assert_that!(language_name("ka_GE"), some(eq("ქართული (საქართველო)")));
        assert_that!(language_name("en"), none());
    }

    #[rstest]
    fn test_locales_preserve_declaration_order() {
        let locales: Vec<_> = GREEK_ALPHABET.locales().collect();
        assert_that!(locales, elements_are![eq(&"el_GR"), eq(&"el_CY")]);
    }
}
