//! `locale,key,value` tabular rows.

use std::io;

use csv::{
    ReaderBuilder,
    StringRecord,
};

use super::LoadError;
use crate::syntax::decode_escape_sequences;
use crate::types::Triple;

/// Required header columns, in the order they make up a triple.
pub const COLUMNS: [&str; 3] = ["locale", "key", "value"];

/// Reads CSV rows with a header naming `locale`, `key` and `value` columns.
///
/// Column order is free and extra columns are ignored. Each `value` is
/// escape-decoded.
///
/// # Examples
/// ```
/// use i18n_store::input::csv::read_rows;
///
/// let triples = read_rows("locale,key,value\nen_US,greeting,Hello\\tthere".as_bytes()).unwrap();
/// assert_eq!(triples[0].text, "Hello\tthere");
/// ```
pub fn read_rows<R: io::Read>(reader: R) -> Result<Vec<Triple>, LoadError> {
    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(reader);

    let headers = reader.headers().map_err(csv_error)?;
    let [locale_at, key_at, value_at] = column_indices(headers)?;

    let mut triples = Vec::new();
    for record in reader.records() {
        let record = record.map_err(csv_error)?;
        let field = |index: usize| record.get(index).unwrap_or_default();
        triples.push(Triple::new(
            field(locale_at),
            field(key_at),
            decode_escape_sequences(field(value_at)),
        ));
    }

    Ok(triples)
}

fn csv_error(source: csv::Error) -> LoadError {
    LoadError::Csv { path: None, source }
}

fn column_indices(headers: &StringRecord) -> Result<[usize; 3], LoadError> {
    let position = |column: &'static str| {
        headers
            .iter()
            .position(|header| header == column)
            .ok_or(LoadError::MissingColumn { path: None, column })
    };
    Ok([position(COLUMNS[0])?, position(COLUMNS[1])?, position(COLUMNS[2])?])
}
