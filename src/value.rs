//! Dynamically typed values carried by sequences.

use std::{cmp::Ordering, fmt, rc::Rc};

mod array;
mod integer;

pub use array::{Array, ArrayKey};
pub use integer::{Float, Integer};

#[derive(Clone)]
enum ValueInner {
    Null,
    Bool(bool),
    Integer(Integer),
    Float(Float),
    String(Rc<str>),
    Array(Rc<Array>),
}

#[derive(Clone)]
pub struct Value(ValueInner);

impl Value {
    pub fn new_null() -> Self {
        Value(ValueInner::Null)
    }

    pub fn new_bool(b: bool) -> Self {
        Value(ValueInner::Bool(b))
    }

    pub fn new_integer(i: Integer) -> Self {
        Value(ValueInner::Integer(i))
    }

    pub fn new_float(f: Float) -> Self {
        Value(ValueInner::Float(f))
    }

    pub fn new_string(s: impl Into<Rc<str>>) -> Self {
        Value(ValueInner::String(s.into()))
    }

    pub fn new_array(a: Array) -> Self {
        Value(ValueInner::Array(Rc::new(a)))
    }

    /// Short name of the value's kind, for messages.
    pub fn kind_name(&self) -> &'static str {
        match &self.0 {
            ValueInner::Null => "null",
            ValueInner::Bool(_) => "bool",
            ValueInner::Integer(_) => "int",
            ValueInner::Float(_) => "float",
            ValueInner::String(_) => "string",
            ValueInner::Array(_) => "array",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self.0, ValueInner::Null)
    }

    /// True for integers and floats only. Numeric strings are not numeric.
    pub fn is_numeric(&self) -> bool {
        matches!(self.0, ValueInner::Integer(_) | ValueInner::Float(_))
    }

    /// True for values usable as keys: bool, integer, float and string.
    pub fn is_scalar(&self) -> bool {
        matches!(
            self.0,
            ValueInner::Bool(_)
                | ValueInner::Integer(_)
                | ValueInner::Float(_)
                | ValueInner::String(_)
        )
    }

    pub fn as_bool(&self) -> Option<bool> {
        match &self.0 {
            ValueInner::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<&Integer> {
        match &self.0 {
            ValueInner::Integer(i) => Some(i),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        self.as_integer().and_then(Integer::to_compact_integer)
    }

    pub fn as_float(&self) -> Option<f64> {
        match &self.0 {
            ValueInner::Float(f) => Some(f.value()),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match &self.0 {
            ValueInner::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&Array> {
        match &self.0 {
            ValueInner::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Hands out the shared array behind an array value without copying it.
    pub(crate) fn into_shared_array(self) -> std::result::Result<Rc<Array>, Value> {
        match self.0 {
            ValueInner::Array(a) => Ok(a),
            other => Err(Value(other)),
        }
    }

    pub(crate) fn as_number(&self) -> Option<Number> {
        match &self.0 {
            ValueInner::Integer(i) => Some(Number::Integer(i.clone())),
            ValueInner::Float(f) => Some(Number::Float(f.value())),
            _ => None,
        }
    }

    /// Orders two numeric values. `None` if either side is not numeric, or
    /// the comparison involves NaN.
    pub fn numeric_cmp(&self, other: &Self) -> Option<Ordering> {
        self.as_number()?.compare(&other.as_number()?)
    }

    /// Truthiness of the value.
    pub fn to_bool(&self) -> bool {
        match &self.0 {
            ValueInner::Null => false,
            ValueInner::Bool(b) => *b,
            ValueInner::Integer(i) => !i.is_zero(),
            ValueInner::Float(f) => f.value() != 0.0,
            ValueInner::String(s) => !(s.is_empty() || &**s == "0"),
            ValueInner::Array(a) => !a.is_empty(),
        }
    }

    /// Identity comparison: both values have the same kind and the same
    /// contents.
    pub fn strict_eq(&self, other: &Self) -> bool {
        match (&self.0, &other.0) {
            (ValueInner::Null, ValueInner::Null) => true,
            (ValueInner::Bool(b1), ValueInner::Bool(b2)) => b1 == b2,
            (ValueInner::Integer(i1), ValueInner::Integer(i2)) => i1 == i2,
            (ValueInner::Float(f1), ValueInner::Float(f2)) => f1.value() == f2.value(),
            (ValueInner::String(s1), ValueInner::String(s2)) => s1 == s2,
            (ValueInner::Array(a1), ValueInner::Array(a2)) => {
                Rc::ptr_eq(a1, a2) || a1.strict_eq(a2)
            }
            _ => false,
        }
    }

    /// Loose comparison, converting between kinds before comparing.
    pub fn loose_eq(&self, other: &Self) -> bool {
        match (&self.0, &other.0) {
            (ValueInner::Null, ValueInner::Null) => true,
            (ValueInner::Bool(b), _) => *b == other.to_bool(),
            (_, ValueInner::Bool(b)) => self.to_bool() == *b,
            (ValueInner::Null, ValueInner::String(s)) | (ValueInner::String(s), ValueInner::Null) => {
                s.is_empty()
            }
            (ValueInner::Null, _) => !other.to_bool(),
            (_, ValueInner::Null) => !self.to_bool(),
            (ValueInner::String(s1), ValueInner::String(s2)) => {
                match (parse_numeric(s1), parse_numeric(s2)) {
                    (Some(n1), Some(n2)) => n1.compare(&n2) == Some(Ordering::Equal),
                    _ => s1 == s2,
                }
            }
            (ValueInner::String(s), _) => other
                .as_number()
                .is_some_and(|n| number_loose_eq_str(&n, s)),
            (_, ValueInner::String(s)) => self
                .as_number()
                .is_some_and(|n| number_loose_eq_str(&n, s)),
            (ValueInner::Array(a1), ValueInner::Array(a2)) => a1.loose_eq(a2),
            (ValueInner::Array(_), _) | (_, ValueInner::Array(_)) => false,
            _ => match (self.as_number(), other.as_number()) {
                (Some(n1), Some(n2)) => n1.compare(&n2) == Some(Ordering::Equal),
                _ => false,
            },
        }
    }
}

/// Numeric view of an integer or float value.
#[derive(Clone, Debug)]
pub(crate) enum Number {
    Integer(Integer),
    Float(f64),
}

impl Number {
    fn to_f64(&self) -> f64 {
        match self {
            Number::Integer(i) => i.to_f64(),
            Number::Float(f) => *f,
        }
    }

    pub(crate) fn compare(&self, other: &Number) -> Option<Ordering> {
        match (self, other) {
            (Number::Integer(i1), Number::Integer(i2)) => Some(i1.cmp(i2)),
            _ => self.to_f64().partial_cmp(&other.to_f64()),
        }
    }

    pub(crate) fn add_owned(self, other: Number) -> Number {
        match (self, other) {
            (Number::Integer(i1), Number::Integer(i2)) => Number::Integer(i1.add_owned(i2)),
            (n1, n2) => Number::Float(n1.to_f64() + n2.to_f64()),
        }
    }

    pub(crate) fn into_value(self) -> Value {
        match self {
            Number::Integer(i) => Value::new_integer(i),
            Number::Float(f) => Value::new_float(Float::new(f)),
        }
    }

    fn to_text(&self) -> String {
        match self {
            Number::Integer(i) => i.to_string(),
            Number::Float(f) => Float::new(*f).to_string(),
        }
    }
}

fn number_loose_eq_str(number: &Number, s: &str) -> bool {
    match parse_numeric(s) {
        Some(parsed) => number.compare(&parsed) == Some(Ordering::Equal),
        None => number.to_text() == s,
    }
}

/// Parses a numeric string: optional surrounding whitespace, an optional sign,
/// digits with an optional fraction and exponent.
fn parse_numeric(s: &str) -> Option<Number> {
    let trimmed = s.trim_matches(|c: char| matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0B' | '\x0C'));
    let well_formed = trimmed.bytes().any(|b| b.is_ascii_digit())
        && trimmed
            .bytes()
            .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'));
    if !well_formed {
        return None;
    }
    if let Ok(i) = trimmed.parse::<i64>() {
        return Some(Number::Integer(Integer::from(i)));
    }
    trimmed.parse::<f64>().ok().map(Number::Float)
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.strict_eq(other)
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::new_null()
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            ValueInner::Null => f.write_str("null"),
            ValueInner::Bool(b) => fmt::Debug::fmt(b, f),
            ValueInner::Integer(i) => fmt::Display::fmt(i, f),
            ValueInner::Float(x) => fmt::Debug::fmt(&x.value(), f),
            ValueInner::String(s) => fmt::Debug::fmt(&**s, f),
            ValueInner::Array(a) => fmt::Debug::fmt(&**a, f),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::new_bool(b)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::new_integer(Integer::from(i))
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::new_integer(Integer::from(i))
    }
}

impl From<Integer> for Value {
    fn from(i: Integer) -> Self {
        Value::new_integer(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::new_float(Float::new(f))
    }
}

impl From<Float> for Value {
    fn from(f: Float) -> Self {
        Value::new_float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::new_string(s)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::new_string(s)
    }
}

impl From<Array> for Value {
    fn from(a: Array) -> Self {
        Value::new_array(a)
    }
}

impl<T> From<Vec<T>> for Value
where
    T: Into<Value>,
{
    fn from(items: Vec<T>) -> Self {
        Value::new_array(items.into_iter().map(Into::into).collect())
    }
}

impl<T> From<Option<T>> for Value
where
    T: Into<Value>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or_else(Value::new_null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_means_int_or_float() {
        assert!(Value::from(1).is_numeric());
        assert!(Value::from(1.5).is_numeric());
        assert!(!Value::from("1").is_numeric());
        assert!(!Value::from(true).is_numeric());
        assert!(!Value::new_null().is_numeric());
    }

    #[test]
    fn scalar_kinds() {
        assert!(Value::from("k").is_scalar());
        assert!(Value::from(false).is_scalar());
        assert!(Value::from(0.5).is_scalar());
        assert!(!Value::new_null().is_scalar());
        assert!(!Value::from(vec![1, 2]).is_scalar());
    }

    #[test]
    fn strict_eq_requires_same_kind() {
        assert!(Value::from(1).strict_eq(&Value::from(1)));
        assert!(!Value::from(1).strict_eq(&Value::from(1.0)));
        assert!(!Value::from(1).strict_eq(&Value::from("1")));
        assert!(Value::from(vec![1, 2]).strict_eq(&Value::from(vec![1, 2])));
        assert!(!Value::from(vec![1, 2]).strict_eq(&Value::from(vec![2, 1])));
    }

    #[test]
    fn loose_eq_converts() {
        assert!(Value::from(1).loose_eq(&Value::from(1.0)));
        assert!(Value::from(1).loose_eq(&Value::from("1")));
        assert!(Value::from("1e1").loose_eq(&Value::from("10")));
        assert!(Value::from(1.5).loose_eq(&Value::from(" 1.5")));
        assert!(!Value::from(0).loose_eq(&Value::from("a")));
        assert!(Value::from(true).loose_eq(&Value::from("a")));
        assert!(Value::new_null().loose_eq(&Value::from(0)));
        assert!(Value::new_null().loose_eq(&Value::from("")));
        assert!(!Value::new_null().loose_eq(&Value::from("0")));
        assert!(!Value::from("abc").loose_eq(&Value::from("ABC")));
        assert!(!Value::from(vec![1]).loose_eq(&Value::from(1)));
    }

    #[test]
    fn truthiness() {
        assert!(!Value::from("0").to_bool());
        assert!(Value::from("0.0").to_bool());
        assert!(!Value::from(0.0).to_bool());
        assert!(!Value::new_array(Array::new()).to_bool());
        assert!(Value::from(vec![0]).to_bool());
    }

    #[test]
    fn numeric_cmp_mixes_ints_and_floats() {
        assert_eq!(
            Value::from(2).numeric_cmp(&Value::from(1.5)),
            Some(Ordering::Greater)
        );
        assert_eq!(Value::from(2).numeric_cmp(&Value::from("3")), None);
        assert_eq!(Value::from(f64::NAN).numeric_cmp(&Value::from(1)), None);
    }

    #[test]
    fn debug_output() {
        assert_eq!(format!("{:?}", Value::from(1.0)), "1.0");
        assert_eq!(format!("{:?}", Value::from("x")), "\"x\"");
        assert_eq!(format!("{:?}", Value::from(None::<i64>)), "null");
    }
}
