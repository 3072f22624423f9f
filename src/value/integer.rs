use std::{cmp::Ordering, fmt, rc::Rc};

use num_bigint::BigInt;
use num_traits::{ToPrimitive, Zero};

/// An integer that stays a machine word until arithmetic overflows it.
#[derive(Clone, Debug)]
pub enum Integer {
    Compact(i64),
    Big(Rc<BigInt>),
}

impl Integer {
    pub fn to_compact_integer(&self) -> Option<i64> {
        match self {
            Integer::Compact(i) => Some(*i),
            Integer::Big(i) => i.to_i64(),
        }
    }

    pub fn is_zero(&self) -> bool {
        match self {
            Integer::Compact(i) => *i == 0,
            Integer::Big(i) => i.is_zero(),
        }
    }

    /// Lossy conversion used when an integer meets a float.
    pub fn to_f64(&self) -> f64 {
        match self {
            Integer::Compact(i) => *i as f64,
            Integer::Big(i) => i.to_f64().unwrap_or(f64::NAN),
        }
    }

    fn to_big(&self) -> BigInt {
        match self {
            Integer::Compact(i) => BigInt::from(*i),
            Integer::Big(i) => (**i).clone(),
        }
    }

    pub fn add_owned(self, other: Self) -> Self {
        if let (Some(a), Some(b)) = (self.to_compact_integer(), other.to_compact_integer()) {
            if let Some(sum) = a.checked_add(b) {
                return Integer::Compact(sum);
            }
        }
        Integer::from(self.to_big() + other.to_big())
    }
}

impl PartialEq for Integer {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Integer {}

impl PartialOrd for Integer {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Integer {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.to_compact_integer(), other.to_compact_integer()) {
            (Some(i1), Some(i2)) => i1.cmp(&i2),
            _ => self.to_big().cmp(&other.to_big()),
        }
    }
}

impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Integer::Compact(i) => fmt::Display::fmt(i, f),
            Integer::Big(i) => fmt::Display::fmt(&**i, f),
        }
    }
}

impl From<i64> for Integer {
    fn from(i: i64) -> Self {
        Integer::Compact(i)
    }
}

impl From<i32> for Integer {
    fn from(i: i32) -> Self {
        Integer::Compact(i64::from(i))
    }
}

impl From<BigInt> for Integer {
    fn from(i: BigInt) -> Self {
        if let Some(i) = i.to_i64() {
            Integer::Compact(i)
        } else {
            Integer::Big(Rc::new(i))
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Float(f64);

impl Float {
    pub fn new(value: f64) -> Self {
        Float(value)
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for Float {
    /// Integral floats print without a fractional part, the way they are
    /// rendered when compared against strings.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.0;
        if value.is_nan() {
            f.write_str("NAN")
        } else if value.is_infinite() {
            f.write_str(if value > 0.0 { "INF" } else { "-INF" })
        } else if value.fract() == 0.0 && value.abs() < 1e15 {
            write!(f, "{}", value as i64)
        } else {
            write!(f, "{}", value)
        }
    }
}
