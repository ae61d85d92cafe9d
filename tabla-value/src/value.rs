use std::cmp::Ordering;
use std::fmt;
use std::rc::Rc;

use ordered_float::OrderedFloat;

use crate::error;
use crate::table::Table;

/// A dynamically typed value. Sequences and tables are made of these.
#[derive(Debug, Clone, Default)]
pub enum Value {
    /// The absent value.
    ///
    /// Tables never store it: assigning nil to a key removes the key.
    #[default]
    Nil,
    Boolean(bool),
    Integer(i64),
    Float(OrderedFloat<f64>),
    String(Rc<str>),
    /// A table, which doubles as a sequence through its sequence part.
    Table(Table),
}

impl Value {
    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }

    /// Only nil and false are falsy.
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Value::Nil | Value::Boolean(false))
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Value::Integer(_) | Value::Float(_))
    }

    /// The name of the value's kind, as used in diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Nil => "nil",
            Value::Boolean(_) => "boolean",
            Value::Integer(_) | Value::Float(_) => "number",
            Value::String(_) => "string",
            Value::Table(_) => "table",
        }
    }

    pub fn as_table(&self) -> Option<&Table> {
        match self {
            Value::Table(table) => Some(table),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(&**s),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Integer(i) => Some(*i as f64),
            Value::Float(OrderedFloat(f)) => Some(*f),
            _ => None,
        }
    }

    /// Try to get the table value.
    pub fn to_table(&self) -> error::Result<Table> {
        self.as_table().cloned().ok_or(error::Error::InvalidArgument)
    }

    /// Coerce a string or number into a string, the way concatenation does.
    ///
    /// Any other kind of value is an invalid argument.
    pub fn to_coerced_string(&self) -> error::Result<String> {
        match self {
            Value::String(s) => Ok(s.to_string()),
            Value::Integer(_) | Value::Float(_) => Ok(self.to_string()),
            _ => Err(error::Error::InvalidArgument),
        }
    }

    /// Natural ordering: numbers with numbers, strings with strings.
    ///
    /// Returns `None` for any other pairing, and for NaN.
    pub fn compare(&self, other: &Value) -> Option<Ordering> {
        match (self, other) {
            (Value::Integer(a), Value::Integer(b)) => Some(a.cmp(b)),
            (Value::String(a), Value::String(b)) => Some(a.as_bytes().cmp(b.as_bytes())),
            (Value::Float(OrderedFloat(a)), Value::Float(OrderedFloat(b))) => a.partial_cmp(b),
            (Value::Integer(a), Value::Float(OrderedFloat(b))) => compare_integer_float(*a, *b),
            (Value::Float(OrderedFloat(a)), Value::Integer(b)) => {
                compare_integer_float(*b, *a).map(Ordering::reverse)
            }
            _ => None,
        }
    }
}

// Exact, without rounding the integer through f64. 2^63 is exactly
// representable and bounds the i64 range.
fn compare_integer_float(i: i64, f: f64) -> Option<Ordering> {
    const BOUND: f64 = 9_223_372_036_854_775_808.0;
    if f.is_nan() {
        return None;
    }
    if f >= BOUND {
        return Some(Ordering::Less);
    }
    if f < -BOUND {
        return Some(Ordering::Greater);
    }
    let whole = f.trunc();
    match i.cmp(&(whole as i64)) {
        Ordering::Equal => 0.0_f64.partial_cmp(&(f - whole)),
        ordering => Some(ordering),
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Nil, Value::Nil) => true,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::Integer(a), Value::Integer(b)) => a == b,
            // NaN is never equal to itself, even in OrderedFloat
            (a, b) if a.is_number() && b.is_number() => a.compare(b) == Some(Ordering::Equal),
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Table(a), Value::Table(b)) => a == b,
            _ => false,
        }
    }
}

fn fmt_float(f: f64, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
    if f.is_nan() {
        write!(formatter, "nan")
    } else if f.is_infinite() {
        if f.is_sign_positive() {
            write!(formatter, "inf")
        } else {
            write!(formatter, "-inf")
        }
    } else if f.fract() == 0.0 && f.abs() < 1e16 {
        write!(formatter, "{:.1}", f)
    } else {
        write!(formatter, "{}", f)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => write!(f, "nil"),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Integer(i) => write!(f, "{}", i),
            Value::Float(OrderedFloat(x)) => fmt_float(*x, f),
            Value::String(s) => write!(f, "{}", s),
            Value::Table(table) => write!(f, "table: {:p}", table.as_ptr()),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Integer(i.into())
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(i)
    }
}

impl From<usize> for Value {
    fn from(i: usize) -> Self {
        // sequences never get anywhere near i64::MAX elements
        Value::Integer(i as i64)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(OrderedFloat(f))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.into())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s.into())
    }
}

impl From<Table> for Value {
    fn from(table: Table) -> Self {
        Value::Table(table)
    }
}

impl From<Vec<Value>> for Value {
    fn from(values: Vec<Value>) -> Self {
        Value::Table(Table::from_sequence(values))
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Value::Nil)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Value {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Nil => serializer.serialize_unit(),
            Value::Boolean(b) => serializer.serialize_bool(*b),
            Value::Integer(i) => serializer.serialize_i64(*i),
            Value::Float(OrderedFloat(f)) => serializer.serialize_f64(*f),
            Value::String(s) => serializer.serialize_str(s),
            Value::Table(table) => serde::Serialize::serialize(table, serializer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truthiness() {
        assert!(!Value::Nil.is_truthy());
        assert!(!Value::from(false).is_truthy());
        assert!(Value::from(0).is_truthy());
        assert!(Value::from("").is_truthy());
        assert!(Value::from(Table::new()).is_truthy());
    }

    #[test]
    fn test_numbers_compare_across_representations() {
        assert_eq!(Value::from(1), Value::from(1.0));
        assert_ne!(Value::from(1), Value::from("1"));
        assert_ne!(Value::from(f64::NAN), Value::from(f64::NAN));
        assert_eq!(
            Value::from(2).compare(&Value::from(2.5)),
            Some(Ordering::Less)
        );
        assert_eq!(Value::from("a").compare(&Value::from(1)), None);
        assert_eq!(Value::from(true).compare(&Value::from(true)), None);
    }

    #[test]
    fn test_large_integers_compare_exactly_with_floats() {
        let two_pow_63 = Value::from(9_223_372_036_854_775_808.0);
        assert_eq!(
            Value::from(i64::MAX).compare(&two_pow_63),
            Some(Ordering::Less)
        );
        assert_ne!(Value::from(i64::MAX), two_pow_63);
        let two_pow_53 = 9_007_199_254_740_992_i64;
        assert_eq!(
            Value::from(two_pow_53 + 1).compare(&Value::from(two_pow_53 as f64)),
            Some(Ordering::Greater)
        );
        assert_eq!(
            Value::from(-3).compare(&Value::from(-2.5)),
            Some(Ordering::Less)
        );
        assert_eq!(Value::from(-2).compare(&Value::from(-2.5)), Some(Ordering::Greater));
        assert_eq!(Value::from(1).compare(&Value::from(f64::NAN)), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::from(3).to_string(), "3");
        assert_eq!(Value::from(2.0).to_string(), "2.0");
        assert_eq!(Value::from(0.5).to_string(), "0.5");
        assert_eq!(Value::from(f64::INFINITY).to_string(), "inf");
        assert_eq!(Value::from(f64::NAN).to_string(), "nan");
        assert_eq!(Value::Nil.to_string(), "nil");
        assert_eq!(Value::from("x").to_string(), "x");
        assert!(Value::from(Table::new()).to_string().starts_with("table: 0x"));
    }

    #[test]
    fn test_coerced_string() {
        assert_eq!(Value::from(7).to_coerced_string(), Ok("7".to_string()));
        assert_eq!(Value::from("s").to_coerced_string(), Ok("s".to_string()));
        assert_eq!(
            Value::from(true).to_coerced_string(),
            Err(error::Error::InvalidArgument)
        );
    }

    #[test]
    fn test_to_table() {
        let mut table = Table::new();
        table.push("a");
        let value = Value::from(table.clone());
        assert!(Table::ptr_eq(&value.to_table().unwrap(), &table));
        assert_eq!(Value::from("a").to_table(), Err(error::Error::InvalidArgument));
    }

    #[test]
    fn test_option_converts_to_nil() {
        assert_eq!(Value::from(None::<i64>), Value::Nil);
        assert_eq!(Value::from(Some("a")), Value::from("a"));
    }
}
