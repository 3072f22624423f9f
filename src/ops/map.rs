use crate::{sequence::Sequence, value::Value};

impl Sequence {
    /// Replaces each value with `transform(value, key)`. Keys are kept.
    pub fn map<F>(self, mut transform: F) -> Sequence
    where
        F: FnMut(Value, &Value) -> Value + 'static,
    {
        Sequence::from_pairs(self.into_producer().map(move |(key, value)| {
            let value = transform(value, &key);
            (key, value)
        }))
    }
}
