//! Joining several content fields into a single output field

use crate::error::{Error, Result};

/// Encode `fields` as one CSV record and return it without the terminator
///
/// Fields holding commas, quotes or line breaks come back quoted, so the
/// result can be written as a single field without losing the originals.
pub fn join_fields<I, S>(fields: I) -> Result<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<[u8]>,
{
    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .from_writer(Vec::new());

    writer
        .write_record(fields)
        .map_err(|e| Error::FieldJoin(e.to_string()))?;
    let bytes = writer
        .into_inner()
        .map_err(|e| Error::FieldJoin(e.to_string()))?;
    let encoded = String::from_utf8(bytes).map_err(|e| Error::FieldJoin(e.to_string()))?;

    Ok(encoded.trim_end_matches(|c: char| c == '\r' || c == '\n').to_string())
}
