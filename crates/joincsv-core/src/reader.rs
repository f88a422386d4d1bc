//! CSV reading for labels and content files

use crate::error::{Error, Result};
use crate::table::LabelTable;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Consume a leading UTF-8 byte-order mark, if there is one
///
/// Returns whether a mark was removed.
pub fn strip_bom<R: BufRead>(reader: &mut R) -> io::Result<bool> {
    let found = reader.fill_buf()?.starts_with(UTF8_BOM);
    if found {
        reader.consume(UTF8_BOM.len());
    }
    Ok(found)
}

/// Wrap a BOM-free byte stream in a headerless, flexible CSV reader
pub fn csv_reader<R: Read>(reader: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true) // Row lengths are checked against the header plan
        .from_reader(reader)
}

/// Open a CSV file for streaming, discarding any byte-order mark
pub fn open_csv<P: AsRef<Path>>(path: P) -> Result<csv::Reader<BufReader<File>>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| Error::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let mut reader = BufReader::new(file);
    if strip_bom(&mut reader).map_err(|e| Error::FileRead {
        path: path.to_path_buf(),
        source: e,
    })? {
        tracing::debug!(path = %path.display(), "stripped byte-order mark");
    }

    Ok(csv_reader(reader))
}

/// Read a whole labels file into memory
pub fn read_labels<P: AsRef<Path>>(path: P) -> Result<LabelTable> {
    let path = path.as_ref();
    let reader = open_csv(path)?;
    collect_rows(reader, path.to_path_buf())
}

/// Parse a labels table from a string (useful for testing)
pub fn parse_labels_str(content: &str, source_name: &str) -> Result<LabelTable> {
    let mut bytes = content.as_bytes();
    strip_bom(&mut bytes)?;
    collect_rows(csv_reader(bytes), PathBuf::from(source_name))
}

fn collect_rows<R: Read>(mut reader: csv::Reader<R>, path: PathBuf) -> Result<LabelTable> {
    let mut table = LabelTable::new(path);
    for result in reader.records() {
        let record = result.map_err(|e| Error::Csv {
            path: table.source_path.clone(),
            source: e,
        })?;
        table.rows.push(record.iter().map(str::to_string).collect());
    }
    Ok(table)
}
