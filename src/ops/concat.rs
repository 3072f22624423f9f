use crate::{
    error::Result,
    sequence::{IntoSource, Sequence},
};

impl Sequence {
    /// Emits the pairs of this sequence, then the pairs of `other`, keys
    /// untouched. Colliding keys are not deduplicated here; they only
    /// overwrite each other if the result is materialized with
    /// [`Sequence::to_array`].
    ///
    /// `other` is checked now, so an unusable source fails before anything
    /// is pulled.
    pub fn concat(self, other: impl IntoSource) -> Result<Sequence> {
        let tail = other.into_source()?.into_producer();
        Ok(Sequence::from_pairs(self.into_producer().chain(tail)))
    }
}
