//! In-memory table: ordered, uniquely named columns of equal length.
use serde::Serialize;

use crate::core::params::PIXEL_PREFIX;
use crate::types::Value;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Column {
    pub(crate) name: String,
    pub(crate) values: Vec<Value>,
}

impl Column {
    pub fn new(name: impl Into<String>, values: Vec<Value>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Columns are only reachable read-only from outside the crate, so every
/// column always holds exactly `rows` values.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Table {
    columns: Vec<Column>,
    rows: usize,
}

impl Table {
    /// Build a table from columns. Returns `None` if column lengths differ
    /// or a name repeats.
    pub fn from_columns(columns: Vec<Column>) -> Option<Self> {
        let rows = columns.first().map_or(0, |c| c.values.len());
        if columns.iter().any(|c| c.values.len() != rows) {
            return None;
        }
        for (i, c) in columns.iter().enumerate() {
            if columns[..i].iter().any(|o| o.name == c.name) {
                return None;
            }
        }
        Some(Self { columns, rows })
    }

    pub fn row_count(&self) -> usize {
        self.rows
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Length-preserving edits only; callers must not push or remove values.
    pub(crate) fn column_mut(&mut self, name: &str) -> Option<&mut Column> {
        self.columns.iter_mut().find(|c| c.name == name)
    }

    /// Cells of row `index`, in column order.
    pub fn row(&self, index: usize) -> Option<Vec<&Value>> {
        if index >= self.rows {
            return None;
        }
        Some(self.columns.iter().map(|c| &c.values[index]).collect())
    }

    pub fn cell(&self, row: usize, column: &str) -> Option<&Value> {
        self.column(column).and_then(|c| c.values.get(row))
    }

    /// (rows, columns)
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.columns.len())
    }

    /// True when both tables have the same row count and column names in the same order.
    pub fn same_shape(&self, other: &Table) -> bool {
        self.rows == other.rows && self.column_names().eq(other.column_names())
    }
}

/// Names of every column starting with `prefix`, in table order.
pub fn select_columns_with_prefix(table: &Table, prefix: &str) -> Vec<String> {
    table
        .column_names()
        .filter(|name| name.starts_with(prefix))
        .map(str::to_string)
        .collect()
}

/// Names of every `pixel*` column, in table order.
pub fn select_columns(table: &Table) -> Vec<String> {
    select_columns_with_prefix(table, PIXEL_PREFIX)
}
