use std::fs::File;
use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::core::table::Table;
use crate::error::{Error, Result};

/// Write `table` as CSV: header row, then one line per row.
///
/// Creates or truncates `path`. Any failure, including a missing parent
/// directory, is `Error::Write`. The file is written in place, so a failure
/// part way through can leave it truncated.
pub fn save(table: &Table, path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|e| Error::write(path, e))?;
    write_table(table, file).map_err(|e| Error::write(path, e))?;
    info!(
        "Saved {:?}: {} rows x {} columns",
        path,
        table.row_count(),
        table.column_count()
    );
    Ok(())
}

/// Serialize `table` to any writer.
pub fn write_table<W: Write>(table: &Table, writer: W) -> std::io::Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    if table.column_count() > 0 {
        wtr.write_record(table.column_names())?;
        for row in 0..table.row_count() {
            wtr.write_record(table.columns().iter().map(|c| c.values[row].to_string()))?;
        }
    }
    wtr.flush()
}
