//! The lazy sequence type and its terminal operations.
//!
//! A [`Sequence`] owns exactly one [`Producer`]. Lazy operators (see the
//! `ops` module) consume the sequence and wrap its producer in a new one;
//! nothing is pulled until a terminal operation drives the chain.
//!
//! Terminal operations take `&mut self` and drain the producer as far as they
//! need to. A drained sequence stays drained: running a second terminal
//! operation sees whatever the first one left behind, which after a full
//! drain is nothing.

use std::{cmp::Ordering, fmt, rc::Rc};

use crate::{
    error::{Error, Result},
    options::Strictness,
    value::{Array, ArrayKey, Integer, Number, Value},
};

mod producer;
mod source;

pub(crate) use producer::AutoKey;
pub use producer::{Pair, Producer};
pub use source::{Generator, IntoSource, Source};

use producer::Buffered;

pub struct Sequence {
    producer: Producer,
}

impl Sequence {
    /// Builds a sequence from any supported source. No data is pulled.
    pub fn new(input: impl IntoSource) -> Result<Self> {
        Ok(Self::from_source(input.into_source()?))
    }

    pub fn from_source(source: Source) -> Self {
        tracing::trace!(source = source.kind_name(), "building sequence");
        Sequence {
            producer: source.into_producer(),
        }
    }

    pub fn empty() -> Self {
        Sequence {
            producer: Producer::empty(),
        }
    }

    pub(crate) fn from_pairs<I>(pairs: I) -> Self
    where
        I: Iterator<Item = Pair> + 'static,
    {
        Sequence {
            producer: Producer::new(pairs),
        }
    }

    /// The underlying cursor. Pairs pulled through it are gone from the
    /// sequence.
    pub fn pairs(&mut self) -> &mut Producer {
        &mut self.producer
    }

    pub fn into_producer(self) -> Producer {
        self.producer
    }

    /// Splits off an independent sequence positioned where this one is.
    ///
    /// The remaining pairs are materialized once into a shared buffer, which
    /// both sequences then replay on their own.
    pub fn fork(&mut self) -> Sequence {
        let buffered: Rc<[Pair]> = self.producer.by_ref().collect();
        tracing::debug!(pairs = buffered.len(), "materialized sequence for fork");
        self.producer = Producer::new(Buffered::new(buffered.clone()));
        Sequence {
            producer: Producer::new(Buffered::new(buffered)),
        }
    }

    /// Drains the sequence into an array. Later pairs overwrite earlier pairs
    /// with the same key.
    pub fn to_array(&mut self) -> Result<Array> {
        let mut array = Array::new();
        for (key, value) in self.producer.by_ref() {
            array.insert(ArrayKey::from_value(&key)?, value);
        }
        Ok(array)
    }

    /// Drains the values in traversal order, ignoring keys.
    pub fn to_values(&mut self) -> Vec<Value> {
        self.producer.by_ref().map(|(_, value)| value).collect()
    }

    pub fn size(&mut self) -> usize {
        self.producer.by_ref().count()
    }

    /// Pulls at most one pair. That pair is consumed.
    pub fn is_empty(&mut self) -> bool {
        self.producer.next().is_none()
    }

    pub fn is_not_empty(&mut self) -> bool {
        !self.is_empty()
    }

    pub fn contains(&mut self, needle: impl Into<Value>, strictness: Strictness) -> bool {
        let needle = needle.into();
        if strictness.is_strict() {
            self.producer.any(|(_, value)| value.strict_eq(&needle))
        } else {
            self.producer.any(|(_, value)| value.loose_eq(&needle))
        }
    }

    /// True unless some pair fails `predicate(value, key)`. Stops at the first
    /// failure.
    pub fn every<F>(&mut self, mut predicate: F) -> bool
    where
        F: FnMut(&Value, &Value) -> bool,
    {
        self.producer.all(|(key, value)| predicate(&value, &key))
    }

    pub fn some<F>(&mut self, mut predicate: F) -> bool
    where
        F: FnMut(&Value, &Value) -> bool,
    {
        self.producer.any(|(key, value)| predicate(&value, &key))
    }

    /// Left fold over the values, starting from null.
    pub fn reduce<F>(&mut self, combiner: F) -> Value
    where
        F: FnMut(Value, Value) -> Value,
    {
        self.reduce_from(Value::new_null(), combiner)
    }

    pub fn reduce_from<F>(&mut self, initial: impl Into<Value>, mut combiner: F) -> Value
    where
        F: FnMut(Value, Value) -> Value,
    {
        self.producer
            .by_ref()
            .fold(initial.into(), |acc, (_, value)| combiner(acc, value))
    }

    /// Largest numeric value.
    ///
    /// The running maximum starts at `i64::MIN`, which is what a lenient call
    /// returns when the sequence holds no numeric value at all.
    pub fn max(&mut self, strictness: Strictness) -> Result<Value> {
        self.extremum(Value::from(i64::MIN), Ordering::Greater, strictness)
    }

    /// Smallest numeric value, starting from `i64::MAX`.
    pub fn min(&mut self, strictness: Strictness) -> Result<Value> {
        self.extremum(Value::from(i64::MAX), Ordering::Less, strictness)
    }

    fn extremum(&mut self, seed: Value, wanted: Ordering, strictness: Strictness) -> Result<Value> {
        let mut best = seed;
        for (_, value) in self.producer.by_ref() {
            if !value.is_numeric() {
                check_non_numeric(&value, strictness)?;
                continue;
            }
            if value.numeric_cmp(&best) == Some(wanted) {
                best = value;
            }
        }
        Ok(best)
    }

    /// Total of the numeric values.
    ///
    /// Integers add exactly, widening past 64 bits if needed. Once a float is
    /// added the total is a float. The result is not always a float: an empty
    /// sequence totals to integer 0, and a sequence of integers only totals
    /// to an integer (`[1, 2]` gives `3`, not `3.0`).
    pub fn sum(&mut self, strictness: Strictness) -> Result<Value> {
        let mut total = Number::Integer(Integer::from(0));
        for (_, value) in self.producer.by_ref() {
            match value.as_number() {
                Some(number) => total = total.add_owned(number),
                None => check_non_numeric(&value, strictness)?,
            }
        }
        Ok(total.into_value())
    }

    /// Runs a reusable chain of operators over this sequence. The callback
    /// must hand back a sequence.
    pub fn apply<F, R>(self, transform: F) -> Result<Sequence>
    where
        F: FnOnce(Sequence) -> R,
        R: ApplyOutput,
    {
        transform(self).into_sequence()
    }

    /// Passes this sequence to `transform` and returns whatever it returns.
    pub fn apply_flattening<F, R>(self, transform: F) -> R
    where
        F: FnOnce(Sequence) -> R,
    {
        transform(self)
    }
}

fn check_non_numeric(value: &Value, strictness: Strictness) -> Result<()> {
    if strictness.is_strict() {
        return Err(Error::new_non_numeric_value(format!(
            "found a {} value where an integer or float was required",
            value.kind_name()
        )));
    }
    tracing::trace!(kind = value.kind_name(), "skipping non-numeric value");
    Ok(())
}

impl fmt::Debug for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sequence")
            .field("producer", &self.producer)
            .finish()
    }
}

impl From<Array> for Sequence {
    fn from(array: Array) -> Self {
        Sequence::from_source(Source::Container(Rc::new(array)))
    }
}

impl FromIterator<Value> for Sequence {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Value>,
    {
        Sequence::from(iter.into_iter().collect::<Array>())
    }
}

/// What an [`Sequence::apply`] callback may return.
pub trait ApplyOutput {
    fn into_sequence(self) -> Result<Sequence>;
}

impl ApplyOutput for Sequence {
    fn into_sequence(self) -> Result<Sequence> {
        Ok(self)
    }
}

impl<T> ApplyOutput for Result<T>
where
    T: ApplyOutput,
{
    fn into_sequence(self) -> Result<Sequence> {
        self.and_then(ApplyOutput::into_sequence)
    }
}

impl ApplyOutput for Value {
    fn into_sequence(self) -> Result<Sequence> {
        Err(Error::new_contract_violation(format!(
            "apply callback returned a {} value instead of a sequence",
            self.kind_name()
        )))
    }
}

impl ApplyOutput for Array {
    fn into_sequence(self) -> Result<Sequence> {
        Err(Error::new_contract_violation(
            "apply callback returned a materialized array instead of a sequence",
        ))
    }
}

impl ApplyOutput for Vec<Value> {
    fn into_sequence(self) -> Result<Sequence> {
        Err(Error::new_contract_violation(
            "apply callback returned a list of values instead of a sequence",
        ))
    }
}
