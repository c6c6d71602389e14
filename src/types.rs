//! Shared scalar types used across pixinv.
//! A `Value` is one CSV cell after type inference; it renders back to text
//! with `Display`.
use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub enum Value {
    Integer(i64),
    Float(f64),
    Text(String),
    Missing,
}

impl Value {
    /// Infer the type of a raw field: empty, integer, finite float, else text.
    ///
    /// Surrounding whitespace is ignored when reading a number. Integer
    /// literals that do not fit in `i64` stay text so they are written back
    /// exactly as read.
    pub fn parse(raw: &str) -> Self {
        if raw.is_empty() {
            return Value::Missing;
        }
        let trimmed = raw.trim();
        if let Ok(i) = trimmed.parse::<i64>() {
            return Value::Integer(i);
        }
        if is_integer_literal(trimmed) {
            return Value::Text(raw.to_string());
        }
        match trimmed.parse::<f64>() {
            Ok(f) if f.is_finite() => Value::Float(f),
            _ => Value::Text(raw.to_string()),
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Value::Integer(_) | Value::Float(_))
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Integer(_) => "integer",
            Value::Float(_) => "float",
            Value::Text(_) => "text",
            Value::Missing => "missing",
        }
    }
}

fn is_integer_literal(s: &str) -> bool {
    let digits = s.strip_prefix(['+', '-']).unwrap_or(s);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Integer(i) => write!(f, "{}", i),
            // Debug keeps the trailing ".0" on integral floats
            Value::Float(x) => write!(f, "{:?}", x),
            Value::Text(s) => write!(f, "{}", s),
            Value::Missing => Ok(()),
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_infers_types() {
        assert_eq!(Value::parse("42"), Value::Integer(42));
        assert_eq!(Value::parse("-7"), Value::Integer(-7));
        assert_eq!(Value::parse("0.5"), Value::Float(0.5));
        assert_eq!(Value::parse("cat"), Value::Text("cat".into()));
        assert_eq!(Value::parse(""), Value::Missing);
    }

    #[test]
    fn non_finite_literals_stay_text() {
        assert_eq!(Value::parse("nan"), Value::Text("nan".into()));
        assert_eq!(Value::parse("inf"), Value::Text("inf".into()));
    }

    #[test]
    fn padded_numbers_parse_as_numbers() {
        assert_eq!(Value::parse(" 6"), Value::Integer(6));
        assert_eq!(Value::parse("7 "), Value::Integer(7));
        assert_eq!(Value::parse(" 0.5 "), Value::Float(0.5));
        assert_eq!(Value::parse(" cat "), Value::Text(" cat ".into()));
    }

    #[test]
    fn oversized_integers_keep_their_text() {
        let raw = "12345678901234567890";
        assert_eq!(Value::parse(raw), Value::Text(raw.into()));
        assert_eq!(Value::parse(raw).to_string(), raw);
        assert_eq!(Value::parse("-99999999999999999999").to_string(), "-99999999999999999999");
    }

    #[test]
    fn display_renders_field_text() {
        assert_eq!(Value::Integer(-45).to_string(), "-45");
        assert_eq!(Value::Float(2.0).to_string(), "2.0");
        assert_eq!(Value::Float(127.5).to_string(), "127.5");
        assert_eq!(Value::Text("cat".into()).to_string(), "cat");
        assert_eq!(Value::Missing.to_string(), "");
    }

    #[test]
    fn float_text_reparses_as_float() {
        let v = Value::Float(3.0);
        assert_eq!(Value::parse(&v.to_string()), v);
    }
}
