//! Cell values.

use std::fmt;
use std::hash::{Hash, Hasher};

use chrono::NaiveDate;

/// Strings treated as missing when loading delimited text.
const NULL_MARKERS: &[&str] = &["na", "n/a", "nan", "null", "none", "#n/a", "<na>"];

/// A single scalar cell.
#[derive(Debug, Clone)]
pub enum Value {
    /// Missing value.
    Null,
    /// String value.
    Text(String),
    /// Integer or floating-point value.
    Number(f64),
    /// Calendar date.
    Date(NaiveDate),
}

impl Value {
    /// Returns true for a missing value.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Get the numeric value, if any.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Get the string value, if any.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Check if a raw string represents a missing value.
    pub fn is_null_marker(raw: &str) -> bool {
        let trimmed = raw.trim();
        trimmed.is_empty() || NULL_MARKERS.iter().any(|m| trimmed.eq_ignore_ascii_case(m))
    }

    /// Bit pattern used for equality and hashing of numbers.
    ///
    /// `-0.0` folds into `0.0` and every NaN folds into one value, so equal
    /// numbers always land in the same bucket.
    fn number_bits(n: f64) -> u64 {
        if n == 0.0 {
            0.0f64.to_bits()
        } else if n.is_nan() {
            f64::NAN.to_bits()
        } else {
            n.to_bits()
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Text(a), Value::Text(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => Self::number_bits(*a) == Self::number_bits(*b),
            (Value::Date(a), Value::Date(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Value::Null => {}
            Value::Text(s) => s.hash(state),
            Value::Number(n) => Self::number_bits(*n).hash(state),
            Value::Date(d) => d.hash(state),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Text(s) => f.write_str(s),
            Value::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => write!(f, "{:.0}", n),
            Value::Number(n) => write!(f, "{}", n),
            Value::Date(d) => write!(f, "{}", d.format("%d/%m/%Y")),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<NaiveDate> for Value {
    fn from(d: NaiveDate) -> Self {
        Value::Date(d)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(Value::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_is_null_marker() {
        assert!(Value::is_null_marker(""));
        assert!(Value::is_null_marker("  "));
        assert!(Value::is_null_marker("NA"));
        assert!(Value::is_null_marker("n/a"));
        assert!(Value::is_null_marker("NaN"));
        assert!(Value::is_null_marker("NULL"));
        assert!(Value::is_null_marker("None"));
        assert!(Value::is_null_marker("#N/A"));
        assert!(!Value::is_null_marker("0"));
        assert!(!Value::is_null_marker("Basic"));
    }

    #[test]
    fn test_numbers_hash_equal() {
        let mut set = HashSet::new();
        set.insert(Value::Number(0.0));
        set.insert(Value::Number(-0.0));
        set.insert(Value::from(25));
        set.insert(Value::Number(25.0));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_variants_never_equal_across_types() {
        assert_ne!(Value::from("25"), Value::from(25));
        assert_ne!(Value::Null, Value::from(""));
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::from(120).to_string(), "120");
        assert_eq!(Value::Number(1.5).to_string(), "1.5");
        let date = NaiveDate::from_ymd_opt(2023, 5, 12).unwrap();
        assert_eq!(Value::from(date).to_string(), "12/05/2023");
        assert_eq!(Value::Null.to_string(), "");
    }

    #[test]
    fn test_from_option() {
        assert!(Value::from(None::<&str>).is_null());
        assert_eq!(Value::from(Some(3)), Value::Number(3.0));
    }
}
