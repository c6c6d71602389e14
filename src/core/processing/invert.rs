use tracing::debug;

use crate::core::params::MAX_INTENSITY;
use crate::core::table::Table;
use crate::error::{Error, Result};
use crate::types::Value;

/// Invert a single cell: `max - v`.
///
/// Integers stay integers (falling back to float on `i64` overflow), floats
/// stay floats, missing stays missing. No clamping: with `max = 255`,
/// 300 maps to -45. Returns `None` for text.
pub fn invert_value(value: &Value, max: i64) -> Option<Value> {
    match value {
        Value::Integer(v) => Some(match max.checked_sub(*v) {
            Some(r) => Value::Integer(r),
            None => Value::Float(max as f64 - *v as f64),
        }),
        Value::Float(v) => Some(Value::Float(max as f64 - v)),
        Value::Missing => Some(Value::Missing),
        Value::Text(_) => None,
    }
}

/// Replace every cell of `columns` with `255 - v`; other columns are copied as-is.
pub fn invert(table: &Table, columns: &[String]) -> Result<Table> {
    invert_with_max(table, columns, MAX_INTENSITY)
}

/// Like [`invert`] with a caller-chosen maximum.
///
/// The input table is never modified; on error no partial result escapes.
pub fn invert_with_max(table: &Table, columns: &[String], max: i64) -> Result<Table> {
    if let Some(missing) = columns.iter().find(|c| table.column(c).is_none()) {
        return Err(Error::UnknownColumn {
            column: missing.clone(),
        });
    }

    let mut out = table.clone();
    for name in columns {
        let column = out
            .column_mut(name)
            .ok_or_else(|| Error::UnknownColumn { column: name.clone() })?;
        for (row, cell) in column.values.iter_mut().enumerate() {
            let inverted = invert_value(cell, max).ok_or_else(|| Error::TypeMismatch {
                column: name.clone(),
                row,
                value: cell.to_string(),
            })?;
            *cell = inverted;
        }
        debug!("Inverted column '{}' ({} rows)", name, column.values.len());
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::table::{Column, select_columns};

    fn sample() -> Table {
        Table::from_columns(vec![
            Column::new("id", vec![Value::Integer(1), Value::Integer(2)]),
            Column::new("pixel1", vec![Value::Integer(0), Value::Integer(300)]),
            Column::new("pixel2", vec![Value::Integer(255), Value::Float(127.5)]),
            Column::new("label", vec!["cat".into(), "dog".into()]),
        ])
        .unwrap()
    }

    #[test]
    fn boundaries_and_out_of_range() {
        assert_eq!(invert_value(&Value::Integer(0), 255), Some(Value::Integer(255)));
        assert_eq!(invert_value(&Value::Integer(255), 255), Some(Value::Integer(0)));
        assert_eq!(invert_value(&Value::Integer(300), 255), Some(Value::Integer(-45)));
        assert_eq!(invert_value(&Value::Float(0.25), 255), Some(Value::Float(254.75)));
        assert_eq!(invert_value(&Value::Missing, 255), Some(Value::Missing));
        assert_eq!(invert_value(&Value::Text("x".into()), 255), None);
    }

    #[test]
    fn integer_overflow_falls_back_to_float() {
        let r = invert_value(&Value::Integer(i64::MIN), 255).unwrap();
        assert!(matches!(r, Value::Float(_)));
    }

    #[test]
    fn inverts_selected_only() {
        let t = sample();
        let cols = select_columns(&t);
        let out = invert(&t, &cols).unwrap();

        assert!(out.same_shape(&t));
        assert_eq!(out.column("id"), t.column("id"));
        assert_eq!(out.column("label"), t.column("label"));
        assert_eq!(
            out.column("pixel1").unwrap().values(),
            &[Value::Integer(255), Value::Integer(-45)]
        );
        assert_eq!(
            out.column("pixel2").unwrap().values(),
            &[Value::Integer(0), Value::Float(127.5)]
        );
    }

    #[test]
    fn double_inversion_is_identity() {
        let t = sample();
        let cols = select_columns(&t);
        let twice = invert(&invert(&t, &cols).unwrap(), &cols).unwrap();
        assert_eq!(twice, t);
    }

    #[test]
    fn no_selected_columns_is_noop() {
        let t = sample();
        assert_eq!(invert(&t, &[]).unwrap(), t);
    }

    #[test]
    fn text_in_selected_column_is_type_mismatch() {
        let t = sample();
        let err = invert(&t, &["label".to_string()]).unwrap_err();
        match err {
            Error::TypeMismatch { column, row, value } => {
                assert_eq!(column, "label");
                assert_eq!(row, 0);
                assert_eq!(value, "cat");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn unknown_column_is_rejected() {
        let t = sample();
        let err = invert(&t, &["pixel9".to_string()]).unwrap_err();
        assert!(matches!(err, Error::UnknownColumn { column } if column == "pixel9"));
    }

    #[test]
    fn custom_max() {
        let t = sample();
        let out = invert_with_max(&t, &["pixel1".to_string()], 1).unwrap();
        assert_eq!(
            out.column("pixel1").unwrap().values(),
            &[Value::Integer(1), Value::Integer(-299)]
        );
    }
}
