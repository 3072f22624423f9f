use crate::sequence::Sequence;

impl Sequence {
    /// Swaps the key and value of every pair.
    ///
    /// Values that collide as keys only overwrite each other when the result
    /// is materialized. Compound values become keys here and are rejected by
    /// [`Sequence::to_array`].
    pub fn flip(self) -> Sequence {
        Sequence::from_pairs(self.into_producer().map(|(key, value)| (value, key)))
    }
}
