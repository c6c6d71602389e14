#![doc = r#"
pixinv — photometric inversion for tabular pixel datasets.

Datasets such as flattened MNIST-style images are often shipped as CSV files with one
column per pixel (`pixel0`, `pixel1`, ...) next to ordinary columns (`id`, `label`).
This crate loads such a file, selects every column whose name starts with `pixel`,
replaces each cell `v` in those columns with `255 - v`, and writes the result back
out as CSV. Everything else passes through untouched, and row and column order are
preserved.

Quick start: invert a file
--------------------------
```rust,no_run
use std::path::Path;
use pixinv::{invert_file, InvertParams};

fn main() -> pixinv::Result<()> {
    let report = invert_file(
        Path::new("math_operations.csv"),
        Path::new("math_operations_inverted.csv"),
        &InvertParams::default(),
    )?;
    println!("inverted {} columns over {} rows", report.inverted_columns.len(), report.rows);
    Ok(())
}
```

Working in memory
-----------------
```rust
use pixinv::{invert, select_columns, Column, Table, Value};

let table = Table::from_columns(vec![
    Column::new("id", vec![Value::Integer(1)]),
    Column::new("pixel1", vec![Value::Integer(0)]),
    Column::new("pixel2", vec![Value::Integer(255)]),
    Column::new("label", vec![Value::from("cat")]),
])
.unwrap();

let selected = select_columns(&table);
let inverted = invert(&table, &selected).unwrap();
assert_eq!(inverted.cell(0, "pixel1"), Some(&Value::Integer(255)));
assert_eq!(inverted.cell(0, "pixel2"), Some(&Value::Integer(0)));
assert_eq!(inverted.cell(0, "label"), Some(&Value::from("cat")));
```

Values outside `[0, 255]` are not clamped: `300` becomes `-45`.

Error handling
--------------
All public functions return `pixinv::Result<T>`; match on `pixinv::Error` to handle
specific cases.

```rust,no_run
use std::path::Path;
use pixinv::{invert_file, Error, InvertParams};

match invert_file(Path::new("in.csv"), Path::new("out.csv"), &InvertParams::default()) {
    Ok(_) => {}
    Err(Error::NotFound { path }) => eprintln!("missing input: {}", path.display()),
    Err(Error::TypeMismatch { column, row, value }) => {
        eprintln!("{column}[{row}] is not a number: {value}")
    }
    Err(other) => eprintln!("{other}"),
}
```

Useful modules
--------------
- [`api`] — file, in-memory and directory entry points.
- [`core`] — `Table`, column selection and the inversion itself.
- [`io`] — CSV reader and writer.
- [`types`] — the `Value` cell type.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
pub use crate::core::params::{InvertParams, MAX_INTENSITY, PIXEL_PREFIX};
pub use crate::core::processing::{invert, invert_value, invert_with_max};
pub use crate::core::table::{Column, Table, select_columns, select_columns_with_prefix};
pub use crate::error::{Error, Result};
pub use crate::types::Value;

pub use crate::io::{load, save};

pub use crate::api::{
    BatchFailure, BatchReport, InvertReport, invert_file, invert_table, inverted_output_path,
    process_directory_to_path,
};
