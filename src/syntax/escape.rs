//! Backslash escape decoding for translation text.

use std::iter::Peekable;
use std::str::Chars;

/// Decodes backslash escape sequences in `text`.
///
/// | Escape        | Result                          |
/// |---------------|---------------------------------|
/// | `\uXXXX`      | code point from 4 hex digits    |
/// | `\UXXXXXXXX`  | code point from 8 hex digits    |
/// | `\xXX`        | code point from 2 hex digits    |
/// | `\n \t \b \r \f \a \v` | the control character  |
/// | `\<other>`    | `<other>` (backslash dropped)   |
///
/// Sequences are matched left to right without overlap. A `\u`, `\U` or `\x`
/// without enough hex digits decodes like any other single character escape.
/// Hex escapes naming a surrogate are kept verbatim. A backslash at the end of
/// the text, or in front of a line break, is kept.
///
/// # Examples
/// ```
/// use i18n_store::syntax::decode_escape_sequences;
///
/// assert_eq!(decode_escape_sequences(r"Hello\tWorld\n"), "Hello\tWorld\n");
/// assert_eq!(decode_escape_sequences(r"L\x7c\\"), "L|\\");
/// ```
#[must_use]
pub fn decode_escape_sequences(text: &str) -> String {
    if !text.contains('\\') {
        return text.to_string();
    }

    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }

        match chars.peek().copied() {
            None | Some('\n') => result.push('\\'),
            Some(escape @ ('u' | 'U' | 'x')) => {
                chars.next();
                let width = match escape {
                    'u' => 4,
                    'U' => 8,
                    _ => 2,
                };
                match take_hex(&mut chars, width) {
                    Some(digits) => push_code_point(&mut result, escape, &digits),
                    None => result.push(escape),
                }
            }
            Some(escape) => {
                chars.next();
                result.push(control_character(escape).unwrap_or(escape));
            }
        }
    }

    result
}

/// Consumes exactly `width` hex digits, or nothing at all.
fn take_hex(chars: &mut Peekable<Chars<'_>>, width: usize) -> Option<String> {
    let lookahead = chars.clone();
    let digits: String = lookahead.take(width).take_while(char::is_ascii_hexdigit).collect();
    if digits.len() != width {
        return None;
    }
    for _ in 0..width {
        chars.next();
    }
    Some(digits)
}

fn push_code_point(result: &mut String, escape: char, digits: &str) {
    match u32::from_str_radix(digits, 16).ok().and_then(char::from_u32) {
        Some(decoded) => result.push(decoded),
        None => {
            result.push('\\');
            result.push(escape);
            result.push_str(digits);
        }
    }
}

const fn control_character(escape: char) -> Option<char> {
    match escape {
        'n' => Some('\n'),
        't' => Some('\t'),
        'b' => Some('\u{08}'),
        'r' => Some('\r'),
        'f' => Some('\u{0c}'),
        'a' => Some('\u{07}'),
        'v' => Some('\u{0b}'),
        _ => None,
    }
}
