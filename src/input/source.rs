//! Translation source files: format detection and decoding.

use std::path::Path;

use encoding_rs::Encoding;

use super::LoadError;

/// Supported translation source formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceFormat {
    /// Line-oriented `key = text` with `#define` directives.
    Lang,
    /// Nested JSON objects.
    Json,
    /// `locale,key,value` rows.
    Csv,
}

impl SourceFormat {
    /// Infers the format from a file extension.
    #[must_use]
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension {
            "lang" => Some(Self::Lang),
            "json" => Some(Self::Json),
            "csv" => Some(Self::Csv),
            _ => None,
        }
    }

    /// Infers the format from the extension of `path`.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension().and_then(|ext| ext.to_str()).and_then(Self::from_extension)
    }
}

/// Resolves an encoding label such as `utf-8`, `gbk` or `shift_jis`.
pub fn encoding_for_label(label: &str) -> Result<&'static Encoding, LoadError> {
    Encoding::for_label(label.trim().as_bytes())
        .ok_or_else(|| LoadError::UnknownEncoding(label.to_string()))
}

/// Reads a whole file and decodes it with `encoding`.
///
/// A byte order mark overrides `encoding`. Content with malformed byte
/// sequences is rejected.
pub fn read_source(path: &Path, encoding: &'static Encoding) -> Result<String, LoadError> {
    let bytes = std::fs::read(path).map_err(|source| LoadError::io(path, source))?;
    let (text, actual, had_errors) = encoding.decode(&bytes);
    if had_errors {
        tracing::warn!(
            path = %path.display(),
            encoding = actual.name(),
            "Malformed byte sequences in translation file"
        );
        return Err(LoadError::Decode { path: path.to_path_buf(), encoding: actual.name() });
    }
    Ok(text.into_owned())
}
