use crate::{
    options::Strictness,
    sequence::{AutoKey, Sequence},
    value::Value,
};

impl Sequence {
    /// Emits `replacement` in place of every value identical to `search`.
    ///
    /// The comparison is always the strict one: `_strictness` is accepted for
    /// symmetry with [`Sequence::contains`] but loose matching is never
    /// applied. Keys are not carried over; the result is keyed 0, 1, 2...
    pub fn replace(
        self,
        search: impl Into<Value>,
        replacement: impl Into<Value>,
        _strictness: Strictness,
    ) -> Sequence {
        let search = search.into();
        let replacement = replacement.into();
        let mut positions = AutoKey::default();
        Sequence::from_pairs(self.into_producer().map_while(move |(_, value)| {
            let value = if value.strict_eq(&search) {
                replacement.clone()
            } else {
                value
            };
            Some((positions.next_key()?, value))
        }))
    }
}
