//! Text-level syntax shared by the loaders: escapes and directives.

/// `#define` directive parsing
mod directive;
/// Backslash escape decoding
mod escape;

pub use directive::{
    DEFINE,
    Directive,
    parse_define,
};
pub use escape::decode_escape_sequences;
