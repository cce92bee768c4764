//! `#define` directive parsing.

/// Prefix token that introduces a directive line.
pub const DEFINE: &str = "#define";

/// Parses a `#define <name> <values...>` line.
///
/// Tokens are separated by whitespace. Returns `("", [])` when the line does
/// not start with the `#define` token or has no name.
///
/// # Examples
/// ```
/// use i18n_store::syntax::parse_define;
///
/// assert_eq!(parse_define("#define superiors app menu"), ("superiors".to_string(), vec!["app".to_string(), "menu".to_string()]));
/// assert_eq!(parse_define("welcome = Hello"), (String::new(), vec![]));
/// ```
#[must_use]
pub fn parse_define(line: &str) -> (String, Vec<String>) {
    let mut tokens = line.split_whitespace();
    if tokens.next() != Some(DEFINE) {
        return (String::new(), Vec::new());
    }

    let Some(name) = tokens.next() else {
        return (String::new(), Vec::new());
    };

    (name.to_string(), tokens.map(ToString::to_string).collect())
}

/// A directive understood by the `.lang` loader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    /// `#define locale <locale...>`: entries that follow belong to these locales.
    Locale(Vec<String>),
    /// `#define superiors <segment...>`: key prefix for entries that follow.
    ///
    /// An empty string clears the prefix.
    Superiors(String),
}

impl Directive {
    /// Interprets a `#define` line, returning `None` for unknown or empty directives.
    #[must_use]
    pub fn parse(line: &str) -> Option<Self> {
        let (name, values) = parse_define(line);
        match name.as_str() {
            "locale" if !values.is_empty() => Some(Self::Locale(values)),
            "superiors" => {
                let prefix = match values.first().map(String::as_str) {
                    None | Some("." | "/") => String::new(),
                    Some(_) => values.join("."),
                };
                Some(Self::Superiors(prefix))
            }
            _ => None,
        }
    }
}
