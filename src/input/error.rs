use std::io;
use std::path::{
    Path,
    PathBuf,
};

use thiserror::Error;

/// Errors that may occur while loading translation sources.
///
/// Irrelevant lines in `.lang` content are skipped silently and never
/// produce an error.
#[derive(Error, Debug)]
pub enum LoadError {
    /// A file or directory could not be read (including "not found")
    #[error("Failed to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A JSON document could not be parsed
    #[error("Failed to parse JSON in '{}': {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A JSON document parsed, but its top level is not an object
    #[error("Expected a JSON object at the top level of '{}'", path.display())]
    NotAnObject { path: PathBuf },

    /// A file is not valid in the configured text encoding
    #[error("Failed to decode '{}' as {encoding}", path.display())]
    Decode { path: PathBuf, encoding: &'static str },

    /// CSV content could not be parsed
    #[error("Failed to parse CSV{}: {source}", file_suffix(path.as_deref()))]
    Csv {
        path: Option<PathBuf>,
        #[source]
        source: csv::Error,
    },

    /// The CSV header row lacks a required column
    #[error("Missing required CSV column '{column}'{}", file_suffix(path.as_deref()))]
    MissingColumn { path: Option<PathBuf>, column: &'static str },

    /// The requested text encoding label is not recognised
    #[error("Unknown text encoding '{0}'")]
    UnknownEncoding(String),

    /// An exclude pattern is not a valid glob
    #[error("Invalid exclude pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    /// Directory traversal failed
    #[error("Failed to walk directory: {0}")]
    Walk(#[from] ignore::Error),
}

impl LoadError {
    pub(crate) fn io(path: &Path, source: io::Error) -> Self {
        Self::Io { path: path.to_path_buf(), source }
    }

    /// Attaches the source file to errors raised while parsing its content.
    pub(crate) fn in_file(self, file: &Path) -> Self {
        match self {
            Self::Csv { path: None, source } => {
                Self::Csv { path: Some(file.to_path_buf()), source }
            }
            Self::MissingColumn { path: None, column } => {
                Self::MissingColumn { path: Some(file.to_path_buf()), column }
            }
            other => other,
        }
    }

    /// Returns true if the error means a file or directory does not exist.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Io { source, .. } if source.kind() == io::ErrorKind::NotFound)
    }
}

fn file_suffix(path: Option<&Path>) -> String {
    path.map(|path| format!(" in '{}'", path.display())).unwrap_or_default()
}
