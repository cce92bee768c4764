//! Translation source parsing and loading.

/// `locale,key,value` rows
pub mod csv;
/// Loading errors
mod error;
/// Nested JSON objects
pub mod json;
/// `.lang` content
pub mod lang;
/// Store-facing loader and directory auto-loading
mod loader;
/// Source files: formats and text encodings
pub mod source;

pub use error::LoadError;
pub use loader::Loader;
