use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{Reader, ReaderBuilder, StringRecord};

use crate::error::{LoaderError, Result};

/// Opens a headerless CSV file for reading.
///
/// # Arguments
/// * `path` - The path to the CSV file.
/// * `label` - Short description used in the error message ("teams", "rosters").
pub fn open_csv(path: impl AsRef<Path>, label: &str) -> Result<Reader<File>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|err| {
        LoaderError::Io(std::io::Error::new(
            err.kind(),
            format!("Couldn't open the {} csv file {}: {}", label, path.display(), err),
        ))
    })?;
    Ok(csv_reader(file))
}

/// Headerless CSV reader over any byte source; every row must have the same
/// number of fields as the first one.
pub fn csv_reader<R: Read>(source: R) -> Reader<R> {
    ReaderBuilder::new()
        .has_headers(false)
        .flexible(false)
        .from_reader(source)
}

/// Checks that a row has at least `expected` fields.
pub fn require_fields(record: &StringRecord, expected: usize, file: &str, row: u64) -> Result<()> {
    if record.len() < expected {
        return Err(LoaderError::Row {
            file: file.to_string(),
            row,
            message: format!("expected {} fields, found {}", expected, record.len()),
        });
    }
    Ok(())
}
