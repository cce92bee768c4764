//! `.lang` content parsing.
//!
//! ```text
//! // comment
//! #define locale zh_CN
//! #define superiors app menu
//! title = "Menu"
//! help = first line \
//!        second line
//! ```
//!
//! Lines are trimmed. `#define` lines switch the active locale(s) or the key
//! prefix, lines starting with `#`, `;` or `//` are comments, and anything else
//! must contain `=` or is skipped. A text ending with ` \` continues on the next
//! line; continuation lines are joined with `\n`.

use crate::syntax::{
    DEFINE,
    Directive,
    decode_escape_sequences,
};
use crate::types::{
    LocaleCode,
    Triple,
    join_key,
};

/// Marker at the end of a text that continues on the next line.
const CONTINUATION: &str = " \\";

/// Separator placed between continuation parts.
pub const CONTINUATION_JOIN: &str = "\n";

/// Parses `.lang` content into triples.
///
/// * `locale` - locale of entries until a `#define locale` line
/// * `superiors` - key prefix until a `#define superiors` line (may be empty)
///
/// # Examples
/// ```
/// use i18n_store::input::lang::parse_lang;
///
/// let triples = parse_lang("#define superiors app\nwelcome = Hello!", "en_US", "");
/// assert_eq!(triples[0].key, "app.welcome");
/// assert_eq!(triples[0].text, "Hello!");
/// ```
#[must_use]
pub fn parse_lang(content: &str, locale: &str, superiors: &str) -> Vec<Triple> {
    let mut parser = LangParser::new(locale, superiors);
    for line in content.lines() {
        parser.feed(line);
    }
    parser.finish()
}

/// Entry whose text continues on following lines.
#[derive(Debug)]
struct PendingEntry {
    key: String,
    parts: Vec<String>,
}

/// Line-by-line `.lang` parser state.
#[derive(Debug)]
struct LangParser {
    locales: Vec<LocaleCode>,
    superiors: String,
    pending: Option<PendingEntry>,
    triples: Vec<Triple>,
}

impl LangParser {
    fn new(locale: &str, superiors: &str) -> Self {
        Self {
            locales: vec![locale.to_string()],
            superiors: superiors.to_string(),
            pending: None,
            triples: Vec::new(),
        }
    }

    fn feed(&mut self, raw: &str) {
        let line = raw.trim();

        let (key, text) = match self.pending.take() {
            Some(PendingEntry { key, parts }) => {
                self.continue_entry(key, parts, line);
                return;
            }
            None => {
                if line.starts_with(DEFINE) {
                    self.apply_directive(line);
                    return;
                }
                if line.starts_with('#') || line.starts_with(';') || line.starts_with("//") {
                    return;
                }
                let Some((key, text)) = line.split_once('=') else {
                    return;
                };
                (key.trim(), text.trim())
            }
        };

        match strip_continuation(text) {
            Some(part) => {
                self.pending =
                    Some(PendingEntry { key: key.to_string(), parts: vec![part.to_string()] });
            }
            None => self.emit(key, text),
        }
    }

    fn continue_entry(&mut self, key: String, mut parts: Vec<String>, line: &str) {
        match strip_continuation(line) {
            Some(part) => {
                parts.push(part.to_string());
                self.pending = Some(PendingEntry { key, parts });
            }
            None => {
                parts.push(line.to_string());
                self.emit(&key, &parts.join(CONTINUATION_JOIN));
            }
        }
    }

    fn apply_directive(&mut self, line: &str) {
        match Directive::parse(line) {
            Some(Directive::Locale(locales)) => self.locales = locales,
            Some(Directive::Superiors(prefix)) => self.superiors = prefix,
            None => tracing::trace!(line, "Ignoring directive"),
        }
    }

    fn emit(&mut self, key: &str, text: &str) {
        let key = join_key(&self.superiors, key);
        let text = decode_escape_sequences(strip_quotes(text));
        for locale in &self.locales {
            self.triples.push(Triple::new(locale.clone(), key.clone(), text.clone()));
        }
    }

    /// Flushes an entry still waiting for continuation lines.
    fn finish(mut self) -> Vec<Triple> {
        if let Some(PendingEntry { key, parts }) = self.pending.take() {
            self.emit(&key, &parts.join(CONTINUATION_JOIN));
        }
        self.triples
    }
}

/// Returns the text without its continuation marker, if it has one.
///
/// A text consisting of a lone `\` is an empty continued part.
fn strip_continuation(text: &str) -> Option<&str> {
    if text == "\\" {
        return Some("");
    }
    text.strip_suffix(CONTINUATION)
}

/// Removes one pair of double quotes wrapping the whole text.
fn strip_quotes(text: &str) -> &str {
    text.strip_prefix('"').and_then(|rest| rest.strip_suffix('"')).unwrap_or(text)
}
