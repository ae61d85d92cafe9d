use std::cmp::Ordering;
use std::fmt;
use std::rc::Rc;

use ordered_float::OrderedFloat;

use crate::value::Value;

// A key is a value normalized so that values which address the same table
// slot hash the same. Floats with an exact integer value are stored as
// integers, so t[1] and t[1.0] are the same entry.

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Key {
    Boolean(bool),
    Integer(i64),
    Float(OrderedFloat<f64>),
    String(Rc<str>),
}

/// Why a value could not be turned into a [`Key`].
#[derive(Debug, thiserror::Error, Clone, PartialEq)]
pub enum KeyError {
    #[error("table index is nil")]
    Nil,
    #[error("table index is NaN")]
    NaN,
    #[error("tables cannot be used as table keys")]
    Table,
}

impl Key {
    /// Turn the key back into the value it stands for.
    pub fn to_value(&self) -> Value {
        match self {
            Key::Boolean(b) => Value::Boolean(*b),
            Key::Integer(i) => Value::Integer(*i),
            Key::Float(f) => Value::Float(*f),
            Key::String(s) => Value::String(s.clone()),
        }
    }

    /// The sequence position this key addresses, if it is a positive integer.
    pub fn position(&self) -> Option<usize> {
        match self {
            Key::Integer(i) if *i >= 1 => usize::try_from(*i).ok(),
            _ => None,
        }
    }

    /// Natural ordering of keys: numbers with numbers, strings with strings.
    ///
    /// Any other combination is not comparable.
    pub fn compare(&self, other: &Key) -> Option<Ordering> {
        match (self, other) {
            (Key::String(a), Key::String(b)) => Some(a.as_bytes().cmp(b.as_bytes())),
            (Key::String(_), _) | (_, Key::String(_)) => None,
            (Key::Boolean(_), _) | (_, Key::Boolean(_)) => None,
            _ => self.to_value().compare(&other.to_value()),
        }
    }
}

fn float_key(f: f64) -> Result<Key, KeyError> {
    if f.is_nan() {
        return Err(KeyError::NaN);
    }
    // i64::MAX as f64 rounds up to 2^63, which is out of range
    if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 {
        Ok(Key::Integer(f as i64))
    } else {
        Ok(Key::Float(OrderedFloat(f)))
    }
}

impl TryFrom<Value> for Key {
    type Error = KeyError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Nil => Err(KeyError::Nil),
            Value::Boolean(b) => Ok(Key::Boolean(b)),
            Value::Integer(i) => Ok(Key::Integer(i)),
            Value::Float(OrderedFloat(f)) => float_key(f),
            Value::String(s) => Ok(Key::String(s)),
            Value::Table(_) => Err(KeyError::Table),
        }
    }
}

impl TryFrom<&Value> for Key {
    type Error = KeyError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        value.clone().try_into()
    }
}

impl TryFrom<f64> for Key {
    type Error = KeyError;

    fn try_from(f: f64) -> Result<Self, Self::Error> {
        float_key(f)
    }
}

impl From<bool> for Key {
    fn from(b: bool) -> Self {
        Key::Boolean(b)
    }
}

impl From<i64> for Key {
    fn from(i: i64) -> Self {
        Key::Integer(i)
    }
}

impl From<i32> for Key {
    fn from(i: i32) -> Self {
        Key::Integer(i.into())
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Key::String(s.into())
    }
}

impl From<String> for Key {
    fn from(s: String) -> Self {
        Key::String(s.into())
    }
}

impl From<Key> for Value {
    fn from(key: Key) -> Self {
        key.to_value()
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_value(), f)
    }
}
