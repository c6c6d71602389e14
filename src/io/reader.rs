use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

use tracing::{debug, info};

use crate::core::table::{Column, Table};
use crate::error::{Error, Result};
use crate::types::Value;

/// Load a comma-separated file with a header row into a `Table`.
///
/// Column order follows the header and row order follows the file.
/// A missing path is `Error::NotFound`; ragged rows, invalid UTF-8 or
/// duplicate header names are `Error::Parse`.
pub fn load(path: &Path) -> Result<Table> {
    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => Error::NotFound {
            path: path.to_path_buf(),
        },
        _ => Error::Io(e),
    })?;
    let table = read_table(file, path)?;
    info!(
        "Loaded {:?}: {} rows x {} columns",
        path,
        table.row_count(),
        table.column_count()
    );
    Ok(table)
}

/// Parse CSV from any reader; `source` is only used for error messages.
pub fn read_table<R: Read>(reader: R, source: &Path) -> Result<Table> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_reader(reader);

    let headers = rdr.headers().map_err(|e| csv_error(source, e))?.clone();
    let mut columns: Vec<Column> = Vec::with_capacity(headers.len());
    for name in headers.iter() {
        if columns.iter().any(|c| c.name == name) {
            return Err(Error::parse(
                source,
                format!("duplicate column name '{}'", name),
            ));
        }
        columns.push(Column::new(name, Vec::new()));
    }

    for record in rdr.records() {
        let record = record.map_err(|e| csv_error(source, e))?;
        for (column, field) in columns.iter_mut().zip(record.iter()) {
            column.values.push(Value::parse(field));
        }
    }
    debug!("Parsed header: {:?}", headers);

    Table::from_columns(columns)
        .ok_or_else(|| Error::parse(source, "columns have unequal lengths"))
}

fn csv_error(source: &Path, e: csv::Error) -> Error {
    if e.is_io_error() {
        match e.into_kind() {
            csv::ErrorKind::Io(io) => Error::Io(io),
            other => Error::parse(source, format!("{:?}", other)),
        }
    } else {
        Error::parse(source, e)
    }
}
