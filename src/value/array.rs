use std::{collections::HashMap, fmt, rc::Rc};

use crate::error::{Error, Result};

use super::{Value, ValueInner};

/// A normalized array key: either an integer or a non-integer string.
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum ArrayKey {
    Int(i64),
    Str(Rc<str>),
}

impl ArrayKey {
    /// Normalizes a scalar value into a key.
    ///
    /// Bools become 0 or 1, floats are truncated toward zero, null becomes the
    /// empty string and strings holding a canonical decimal integer become
    /// integers. Arrays cannot be keys.
    pub fn from_value(value: &Value) -> Result<Self> {
        match &value.0 {
            ValueInner::Null => Ok(ArrayKey::Str(Rc::from(""))),
            ValueInner::Bool(b) => Ok(ArrayKey::Int(i64::from(*b))),
            ValueInner::Integer(i) => Ok(match i.to_compact_integer() {
                Some(i) => ArrayKey::Int(i),
                None => ArrayKey::Str(Rc::from(i.to_string())),
            }),
            ValueInner::Float(f) => Ok(ArrayKey::Int(f.value() as i64)),
            ValueInner::String(s) => Ok(ArrayKey::from(&**s)),
            ValueInner::Array(_) => Err(Error::new_invalid_key(
                "an array cannot be used as an array key",
            )),
        }
    }

    pub fn to_value(&self) -> Value {
        match self {
            ArrayKey::Int(i) => Value::from(*i),
            ArrayKey::Str(s) => Value::new_string(s.clone()),
        }
    }
}

fn canonical_integer(s: &str) -> Option<i64> {
    let digits = s.strip_prefix('-').unwrap_or(s);
    let canonical = match digits.as_bytes() {
        [] => false,
        [b'0'] => digits.len() == s.len(),
        [first, rest @ ..] => first.is_ascii_digit() && *first != b'0' && rest.iter().all(u8::is_ascii_digit),
    };
    if canonical {
        s.parse().ok()
    } else {
        None
    }
}

impl From<i64> for ArrayKey {
    fn from(i: i64) -> Self {
        ArrayKey::Int(i)
    }
}

impl From<i32> for ArrayKey {
    fn from(i: i32) -> Self {
        ArrayKey::Int(i64::from(i))
    }
}

impl From<&str> for ArrayKey {
    fn from(s: &str) -> Self {
        match canonical_integer(s) {
            Some(i) => ArrayKey::Int(i),
            None => ArrayKey::Str(Rc::from(s)),
        }
    }
}

impl From<String> for ArrayKey {
    fn from(s: String) -> Self {
        ArrayKey::from(s.as_str())
    }
}

impl fmt::Debug for ArrayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArrayKey::Int(i) => fmt::Debug::fmt(i, f),
            ArrayKey::Str(s) => fmt::Debug::fmt(&**s, f),
        }
    }
}

impl fmt::Display for ArrayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArrayKey::Int(i) => fmt::Display::fmt(i, f),
            ArrayKey::Str(s) => f.write_str(s),
        }
    }
}

/// An insertion-ordered map from keys to values.
#[derive(Clone, Default)]
pub struct Array {
    entries: Vec<(ArrayKey, Value)>,
    index: HashMap<ArrayKey, usize>,
    next_index: i64,
}

impl Array {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: impl Into<ArrayKey>) -> Option<&Value> {
        let position = *self.index.get(&key.into())?;
        Some(&self.entries[position].1)
    }

    pub fn contains_key(&self, key: impl Into<ArrayKey>) -> bool {
        self.index.contains_key(&key.into())
    }

    /// Inserts a value, returning the one it replaced. A replaced entry keeps
    /// its position.
    pub fn insert(&mut self, key: impl Into<ArrayKey>, value: impl Into<Value>) -> Option<Value> {
        let key = key.into();
        let value = value.into();
        if let ArrayKey::Int(i) = key {
            if i >= self.next_index {
                self.next_index = i.saturating_add(1);
            }
        }
        match self.index.get(&key) {
            Some(&position) => Some(std::mem::replace(&mut self.entries[position].1, value)),
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Appends a value under the next free integer key.
    pub fn push(&mut self, value: impl Into<Value>) {
        let key = self.next_index;
        self.insert(key, value);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ArrayKey, &Value)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &ArrayKey> {
        self.entries.iter().map(|(k, _)| k)
    }

    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.iter().map(|(_, v)| v)
    }

    pub(crate) fn entry_at(&self, position: usize) -> Option<&(ArrayKey, Value)> {
        self.entries.get(position)
    }

    /// Same keys and strictly equal values, in the same order.
    pub fn strict_eq(&self, other: &Array) -> bool {
        self.len() == other.len()
            && self
                .entries
                .iter()
                .zip(&other.entries)
                .all(|((k1, v1), (k2, v2))| k1 == k2 && v1.strict_eq(v2))
    }

    /// Same keys with loosely equal values, in any order.
    pub fn loose_eq(&self, other: &Array) -> bool {
        self.len() == other.len()
            && self.entries.iter().all(|(key, value)| {
                other
                    .get(key.clone())
                    .is_some_and(|other_value| value.loose_eq(other_value))
            })
    }
}

impl PartialEq for Array {
    fn eq(&self, other: &Self) -> bool {
        self.strict_eq(other)
    }
}

impl fmt::Debug for Array {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl FromIterator<Value> for Array {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Value>,
    {
        let mut array = Array::new();
        for value in iter {
            array.push(value);
        }
        array
    }
}

impl FromIterator<(ArrayKey, Value)> for Array {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = (ArrayKey, Value)>,
    {
        let mut array = Array::new();
        for (key, value) in iter {
            array.insert(key, value);
        }
        array
    }
}

impl IntoIterator for Array {
    type Item = (ArrayKey, Value);
    type IntoIter = std::vec::IntoIter<(ArrayKey, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Builds an [`Array`](crate::Array), either from bare values that receive
/// sequential keys or from `key => value` entries.
#[macro_export]
macro_rules! array {
    () => {
        $crate::Array::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut array = $crate::Array::new();
        $(
            array.insert($crate::ArrayKey::from($key), $crate::Value::from($value));
        )+
        array
    }};
    ($($value:expr),+ $(,)?) => {{
        let mut array = $crate::Array::new();
        $(
            array.push($crate::Value::from($value));
        )+
        array
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_normalized() {
        let key = |value: Value| ArrayKey::from_value(&value).unwrap();
        assert_eq!(key(Value::from(true)), ArrayKey::Int(1));
        assert_eq!(key(Value::from(2.9)), ArrayKey::Int(2));
        assert_eq!(key(Value::from(-2.9)), ArrayKey::Int(-2));
        assert_eq!(key(Value::from("8")), ArrayKey::Int(8));
        assert_eq!(key(Value::from("-8")), ArrayKey::Int(-8));
        assert_eq!(key(Value::from("08")), ArrayKey::Str(Rc::from("08")));
        assert_eq!(key(Value::from("-0")), ArrayKey::Str(Rc::from("-0")));
        assert_eq!(key(Value::from("0")), ArrayKey::Int(0));
        assert_eq!(key(Value::new_null()), ArrayKey::Str(Rc::from("")));
    }

    #[test]
    fn array_values_are_not_keys() {
        let err = ArrayKey::from_value(&Value::from(vec![1])).unwrap_err();
        assert!(matches!(err, Error::InvalidKey(_)));
    }

    #[test]
    fn push_continues_after_largest_integer_key() {
        let mut array = Array::new();
        array.insert("k", 1);
        array.push(2);
        array.insert(10, 3);
        array.push(4);
        assert_eq!(array.keys().cloned().collect::<Vec<_>>(), vec![
            ArrayKey::from("k"),
            ArrayKey::Int(0),
            ArrayKey::Int(10),
            ArrayKey::Int(11),
        ]);
    }

    #[test]
    fn overwrite_keeps_position() {
        let mut array = array![1, 2, 3];
        let replaced = array.insert(0, "a");
        assert_eq!(replaced, Some(Value::from(1)));
        assert_eq!(array, array![0 => "a", 1 => 2, 2 => 3]);
    }

    #[test]
    fn strict_equality_is_ordered() {
        assert_ne!(array![0 => 1, 1 => 2], array![1 => 2, 0 => 1]);
        assert!(array![0 => 1, 1 => 2].loose_eq(&array![1 => "2", 0 => 1.0]));
    }

    #[test]
    fn macro_mixes_keys() {
        let array = array!["k" => 4, 0 => 1];
        assert_eq!(array.get("k"), Some(&Value::from(4)));
        assert_eq!(array.get(0), Some(&Value::from(1)));
        assert!(array.contains_key("0"));
        assert!(!array.contains_key(1));
        assert_eq!(
            array.values().cloned().collect::<Vec<_>>(),
            vec![Value::from(4), Value::from(1)]
        );
        assert_eq!(format!("{:?}", array), r#"{"k": 4, 0: 1}"#);
    }
}
